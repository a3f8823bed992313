// stockroom_server/src/web/handlers/mod.rs

// Declare handler modules
pub mod dashboard_handlers;
pub mod dead_inventory_handlers;
pub mod product_handlers;
pub mod sale_handlers;
