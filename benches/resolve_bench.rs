use criterion::{black_box, criterion_group, criterion_main, Criterion};
use get_secret::{default_clean, parse, Bool, Resolver, Text};
use std::time::Duration;
use tempfile::TempDir;

const ENV_KEY: &str = "GET_SECRET_BENCH_HOSTNAME";

fn setup() -> (TempDir, Resolver) {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("DB_HOST"), "db\n").unwrap();
    std::fs::write(dir.path().join("DB_PORT"), "5432\n").unwrap();
    std::fs::write(dir.path().join("SEND_EMAILS"), "True\n").unwrap();
    std::env::set_var(ENV_KEY, "localhost");

    let resolver = Resolver::default().secret_dir(dir.path());
    (dir, resolver)
}

/// Benchmark resolution from each source and cast target.
fn bench_resolve(c: &mut Criterion) {
    let (_dir, resolver) = setup();

    let mut group = c.benchmark_group("resolve");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    group.bench_function("file_text", |b| {
        b.iter(|| black_box(resolver.get(black_box("DB_HOST"), None, Text).unwrap()));
    });

    group.bench_function("file_int", |b| {
        b.iter(|| {
            let port: Option<u16> = resolver.get(black_box("DB_PORT"), None, parse()).unwrap();
            black_box(port)
        });
    });

    group.bench_function("file_bool", |b| {
        b.iter(|| black_box(resolver.get(black_box("SEND_EMAILS"), None, Bool).unwrap()));
    });

    group.bench_function("env_fallback", |b| {
        b.iter(|| black_box(resolver.get(black_box(ENV_KEY), None, Text).unwrap()));
    });

    group.bench_function("not_found", |b| {
        let resolver = resolver.clone().env(false);
        b.iter(|| black_box(resolver.get(black_box("MISSING"), None, Text).unwrap()));
    });

    group.finish();
}

/// Benchmark the default cleaner on a multi-line value.
fn bench_clean(c: &mut Criterion) {
    let value = "some \ndescription here \r\n".repeat(64);

    c.bench_function("default_clean", |b| {
        b.iter(|| black_box(default_clean(black_box(&value))));
    });
}

criterion_group!(benches, bench_resolve, bench_clean);
criterion_main!(benches);
