//! Performance benchmarks for the Travel Cost Engine.
//!
//! This benchmark suite verifies that the aggregation pipeline stays cheap
//! relative to data retrieval:
//! - 100 companies / 500 travels: well under 1ms mean
//! - 1,000 companies / 5,000 travels: < 10ms mean
//! - 10,000 companies / 50,000 travels: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use rust_decimal::Decimal;
use serde_json::Map;

use travel_cost_engine::aggregation::build_company_tree;
use travel_cost_engine::models::{CompanyId, CompanyRecord, TravelRecord};

/// Builds a three-level forest: every tenth company is top level, the rest
/// hang off the previous companies round-robin.
fn synthetic_companies(count: u64) -> Vec<CompanyRecord> {
    (1..=count)
        .map(|id| {
            let parent_id = if id % 10 == 1 {
                None
            } else {
                Some(CompanyId((id - 1) / 10 * 10 + 1))
            };
            CompanyRecord {
                id: CompanyId(id),
                parent_id,
                extra: Map::new(),
            }
        })
        .collect()
}

/// Attributes `count` travel records across the company ids round-robin.
fn synthetic_travels(count: u64, companies: u64) -> Vec<TravelRecord> {
    (0..count)
        .map(|i| TravelRecord {
            company_id: CompanyId(i % companies + 1),
            price: Decimal::new((i % 50_000) as i64 + 1, 2),
            extra: Map::new(),
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_company_tree");

    for companies in [100u64, 1_000, 10_000] {
        let travels = companies * 5;
        group.throughput(Throughput::Elements(companies));
        group.bench_with_input(
            BenchmarkId::from_parameter(companies),
            &companies,
            |b, &companies| {
                b.iter_batched(
                    || {
                        (
                            synthetic_travels(travels, companies),
                            synthetic_companies(companies),
                        )
                    },
                    |(travels, company_list)| build_company_tree(travels, company_list).unwrap(),
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
