//! Performance benchmarks for the payroll cost engine.
//!
//! This benchmark suite verifies that the calculation engine meets performance targets:
//! - Single forward calculation: < 50μs mean
//! - Single inverse solve (35-iteration bound): < 2ms mean
//! - Single HTTP calculation request: < 1ms mean
//! - Batch of 100 rows through the engine: < 10ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use nomina_engine::api::{create_router, AppState};
use nomina_engine::calculation::{calculate_backward, calculate_forward, CalculationInput};
use nomina_engine::config::{CalculationConfig, StatutoryTables};
use nomina_engine::models::{BenefitScheme, Cell, ColumnMapping, EmployeeRow};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

struct Fixture {
    row: EmployeeRow,
    mapping: ColumnMapping,
    headers: Vec<String>,
    config: CalculationConfig,
}

/// Creates a representative row: formatted daily salary plus two
/// perception columns.
fn create_fixture(daily_salary: &str) -> Fixture {
    Fixture {
        row: EmployeeRow::new(vec![
            Cell::Text("E001".to_string()),
            Cell::Text("Ana Torres".to_string()),
            Cell::Text("15/03/2019".to_string()),
            Cell::Text(daily_salary.to_string()),
            Cell::Text("$2,500.00".to_string()),
            Cell::Text("900".to_string()),
        ]),
        mapping: ColumnMapping {
            employee_id_col: 0,
            employee_name_col: 1,
            hire_date_col: 2,
            daily_salary_col: 3,
            perception_columns: vec![4, 5],
        },
        headers: vec![
            "ID".to_string(),
            "Nombre".to_string(),
            "Fecha de Ingreso".to_string(),
            "Salario Diario".to_string(),
            "Comisiones".to_string(),
            "Despensa".to_string(),
        ],
        config: CalculationConfig::mexico_2026_defaults(),
    }
}

fn input_for(fixture: &Fixture) -> CalculationInput<'_> {
    CalculationInput {
        row: &fixture.row,
        mapping: &fixture.mapping,
        headers: &fixture.headers,
        config: &fixture.config,
        scheme: BenefitScheme::Statutory,
        calculation_date: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
    }
}

/// Benchmarks the forward calculation through the library API.
fn bench_forward_calculation(c: &mut Criterion) {
    let tables = StatutoryTables::mexico_2026();
    let fixture = create_fixture("650");

    c.bench_function("forward_single_row", |b| {
        b.iter(|| {
            let input = input_for(black_box(&fixture));
            calculate_forward(&input, black_box(&tables)).unwrap()
        })
    });
}

/// Benchmarks the inverse solver at several targets.
fn bench_inverse_solver(c: &mut Criterion) {
    let tables = StatutoryTables::mexico_2026();
    let fixture = create_fixture("650");

    let mut group = c.benchmark_group("inverse_solver");
    for target in ["8000", "15000", "45000"] {
        let desired_net = Decimal::from_str(target).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(target), &desired_net, |b, &net| {
            b.iter(|| {
                let input = input_for(black_box(&fixture));
                calculate_backward(&input, black_box(&tables), net).unwrap()
            })
        });
    }
    group.finish();
}

/// Benchmarks batches of forward calculations.
fn bench_forward_batches(c: &mut Criterion) {
    let tables = StatutoryTables::mexico_2026();
    let fixtures: Vec<Fixture> = (0..100)
        .map(|i| create_fixture(&format!("{}", 300 + i * 17)))
        .collect();

    let mut group = c.benchmark_group("forward_batch");
    for size in [10usize, 100] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                for fixture in fixtures.iter().take(size) {
                    let input = input_for(fixture);
                    black_box(calculate_forward(&input, &tables).unwrap());
                }
            })
        });
    }
    group.finish();
}

/// Benchmarks a full HTTP round trip through the axum router.
fn bench_http_calculation(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();

    let body = serde_json::json!({
        "row": ["E001", "Ana Torres", "15/03/2019", "650", "$2,500.00", "900"],
        "headers": ["ID", "Nombre", "Fecha de Ingreso", "Salario Diario", "Comisiones", "Despensa"],
        "column_mapping": {
            "employee_id_col": 0,
            "employee_name_col": 1,
            "hire_date_col": 2,
            "daily_salary_col": 3,
            "perception_columns": [4, 5]
        },
        "config": {
            "reference_unit": "117.31",
            "work_risk_rate_pct": "7.58875",
            "payroll_tax_rate_pct": "4.0"
        },
        "benefit_scheme": "ley",
        "calculation_date": "2026-06-15"
    })
    .to_string();

    c.bench_function("http_calculate_request", |b| {
        b.to_async(&runtime).iter(|| {
            let router = create_router(AppState::new(StatutoryTables::mexico_2026()));
            let body = body.clone();
            async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response.status())
            }
        })
    });
}

criterion_group!(
    benches,
    bench_forward_calculation,
    bench_inverse_solver,
    bench_forward_batches,
    bench_http_calculation
);
criterion_main!(benches);
