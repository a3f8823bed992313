// stockroom_server/src/db/mod.rs

//! Postgres-backed repositories, schema bootstrap and demo seeding.

pub mod postgres;
pub mod seed;

pub use postgres::{ensure_schema, PgProductRepository, PgSaleRepository};
pub use seed::seed_demo_products;
