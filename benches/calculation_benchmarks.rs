//! Performance benchmarks for the Productivity Impact Engine.
//!
//! Covers the two engines on a single row, CSV export of large workbooks and
//! a full HTTP round trip through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use productivity_impact::api::{AppState, create_router};
use productivity_impact::calculation::{compute_error_impact, compute_throughput};
use productivity_impact::config::ConfigLoader;
use productivity_impact::models::{ErrorImpactInput, ExperienceLevel, ThroughputInput};
use productivity_impact::workbook::Workbook;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn throughput_input(i: usize) -> ThroughputInput {
    ThroughputInput {
        role: format!("Role {}", i),
        annual_cost: 45000.0 + (i % 10) as f64 * 1000.0,
        employees: 1000,
        expected_tasks_per_day: 80,
        clicks_per_task: 20 + (i % 20) as u32,
        expected_page_time_seconds: f64::from(3 + (i % 38) as u32) / 10.0,
        experience: ExperienceLevel::ALL[i % 3],
        is_hours_mode: i % 2 == 0,
        is_full_time: true,
        hours_per_day: 8.0,
    }
}

fn error_input(i: usize) -> ErrorImpactInput {
    ErrorImpactInput {
        interface_name: format!("Interface {}", i),
        experience: ExperienceLevel::ALL[i % 3],
        annual_wage_8hr_basis: 45000.0,
        daily_hours: 7.0,
        is_full_time: i % 4 != 0,
        is_hours_mode: false,
        weekly_errors_all_users: 100 + (i % 50) as u32 * 10,
        employees: 1000,
    }
}

fn bench_engines(c: &mut Criterion) {
    let throughput = throughput_input(0);
    let error_impact = error_input(0);

    c.bench_function("compute_throughput", |b| {
        b.iter(|| compute_throughput(black_box(throughput.clone())))
    });

    c.bench_function("compute_error_impact", |b| {
        b.iter(|| compute_error_impact(black_box(error_impact.clone())))
    });
}

fn bench_csv_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_export");

    for rows in [100usize, 1000] {
        let mut workbook = Workbook::new();
        for i in 0..rows {
            workbook
                .push_throughput(throughput_input(i))
                .expect("valid benchmark row");
            workbook
                .push_error_impact(error_input(i))
                .expect("valid benchmark row");
        }

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::new("throughput", rows), &workbook, |b, wb| {
            b.iter(|| black_box(wb.throughput_csv()))
        });
        group.bench_with_input(BenchmarkId::new("error_impact", rows), &workbook, |b, wb| {
            b.iter(|| black_box(wb.error_impact_csv()))
        });
    }

    group.finish();
}

fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let router = create_router(AppState::new(config));
    let body = serde_json::to_string(&throughput_input(0)).unwrap();

    c.bench_function("http_throughput", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/throughput")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(benches, bench_engines, bench_csv_export, bench_http_round_trip);
criterion_main!(benches);
