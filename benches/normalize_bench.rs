// benches/normalize_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phonenumber_fmt::{PhoneNumberFormat, PHONE_NUMBER_NORMALIZER};

use phonenumber::{self as rlp, country::Id};

// (raw input, implied region, region for a direct parse)
type TestEntity = (&'static str, &'static str, Id);

/// A mix of clean and messy input, so the cascade runs from its first
/// variant up to the dialing prefix ones.
fn setup_normalize_data() -> Vec<TestEntity> {
    use phonenumber::country::Id::*;
    vec![
        // Already canonical
        ("+40773818041", "AE", AE),
        // Separators
        ("+971-50-1896203", "AE", AE),
        // Local number without any prefix
        ("50-1896203", "AE", AE),
        // Noise all over the place
        ("5(5-4(//39(63)3--4", "AE", AE),
        // International call prefix instead of '+'
        ("00962799506073", "JO", JO),
        // Several numbers in one field
        ("+971-50-2516838, +971- 55-4396334/ 6934365", "AE", AE),
        // Percent-encoded
        ("%2b97144298820", "AE", AE),
        // Extension annotations
        ("+97144220125#40,+971503292710#40", "AE", AE),
        ("+92 321 9224895", "PK", PK),
    ]
}

fn normalize_benchmark(c: &mut Criterion) {
    let _ = env_logger::try_init();
    let numbers = setup_normalize_data();

    let mut group = c.benchmark_group("Normalize vs single parse");

    group.bench_function("phonenumber-fmt: normalize()", |b| {
        b.iter(|| {
            for (raw, region, _) in &numbers {
                let _ = PHONE_NUMBER_NORMALIZER.normalize(
                    black_box(*raw),
                    black_box(region),
                    PhoneNumberFormat::E164,
                );
            }
        })
    });

    group.bench_function("phonenumber-fmt: normalize_first()", |b| {
        b.iter(|| {
            for (raw, region, _) in &numbers {
                let _ = PHONE_NUMBER_NORMALIZER.normalize_first(
                    black_box(*raw),
                    black_box(region),
                    PhoneNumberFormat::E164,
                );
            }
        })
    });

    // Baseline: what a single parse of the input costs
    group.bench_function("rust-phonenumber: parse()", |b| {
        b.iter(|| {
            for (raw, _, region_id) in &numbers {
                let _ = rlp::parse(black_box(Some(*region_id)), black_box(raw));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, normalize_benchmark);
criterion_main!(benches);
