use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cron_valid::{validate, Options, Validator};

const EXPRESSIONS: &[&str] = &[
    "* * * * *",
    "*/15 0-8,12 1,15 */3 1-5",
    "0 12 L * *",
    "0 12 LW * *",
    "30 6 * jan-jun/2 mon-fri",
    "0 0 * * 6#3",
];

fn full_options() -> Options {
    Options {
        use_last_day_of_month: true,
        use_last_day_of_week: true,
        use_nearest_weekday: true,
        use_nth_weekday_of_month: true,
        use_aliases: true,
        ..Default::default()
    }
}

pub fn validate_benchmark(c: &mut Criterion) {
    let options = full_options();
    let mut group = c.benchmark_group("validate");
    for expression in EXPRESSIONS {
        group.bench_with_input(BenchmarkId::from_parameter(expression), expression, |b, e| {
            b.iter(|| validate(e, &options))
        });
    }
    group.finish();
}

pub fn check_benchmark(c: &mut Criterion) {
    let validator = Validator::new(&full_options());
    let mut group = c.benchmark_group("check");
    for expression in EXPRESSIONS {
        group.bench_with_input(BenchmarkId::from_parameter(expression), expression, |b, e| {
            b.iter(|| validator.check(e))
        });
    }
    group.finish();
}

criterion_group!(benches, validate_benchmark, check_benchmark);
criterion_main!(benches);
