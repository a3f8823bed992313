use chrono::{DateTime, Duration, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stockroom::{compute_dead_inventory, summarize, EntityId, Product, StockRecord, DEFAULT_THRESHOLD_DAYS};

// --- Helper: a catalogue where roughly a third of the items are dead ---
fn build_catalogue(size: usize, now: DateTime<Utc>) -> Vec<Product> {
  (0..size)
    .map(|i| {
      let days_idle = (i % 90) as i64;
      let quantity = (i % 11) as u32;
      Product {
        id: EntityId::generate(),
        name: format!("Bench item {}", i),
        sku: format!("BENCH-{:06}", i),
        category: Some(format!("Category {}", i % 7)),
        price: 1.25 + (i % 40) as f64,
        description: None,
        stores: vec![
          StockRecord::new("Default Store", "Main Warehouse", quantity)
            .with_last_sold_date(Some(now - Duration::days(days_idle))),
          StockRecord::new("Annex", "Back room", 3),
        ],
        created_at: now,
        updated_at: now,
      }
    })
    .collect()
}

// --- Benchmark Functions ---
fn bench_dead_inventory_scan(c: &mut Criterion) {
  let now = Utc::now();
  let mut group = c.benchmark_group("DeadInventoryScan");
  for size in [100usize, 1_000, 10_000] {
    let catalogue = build_catalogue(size, now);
    group.throughput(Throughput::Elements(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &catalogue, |b, products| {
      b.iter(|| compute_dead_inventory(products, now, DEFAULT_THRESHOLD_DAYS));
    });
  }
  group.finish();
}

fn bench_dashboard_summary(c: &mut Criterion) {
  let now = Utc::now();
  let catalogue = build_catalogue(10_000, now);
  c.bench_function("DashboardSummary/10000", |b| {
    b.iter(|| summarize(&catalogue, &[], now, DEFAULT_THRESHOLD_DAYS, 10));
  });
}

criterion_group!(benches, bench_dead_inventory_scan, bench_dashboard_summary);
criterion_main!(benches);
