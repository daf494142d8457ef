use criterion::{criterion_group, criterion_main};

mod validation_benchmark {
    use criterion::Criterion;
    use nhs_number_validation::{validate, ValidationResult};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let entries = vec![
            // Well formed and valid
            ("401-023-2137", ValidationResult::Valid),
            ("907-784-4449", ValidationResult::Valid),
            // Dashes missing or misplaced
            ("4010232137", ValidationResult::InvalidFormat),
            ("40-1023-2137", ValidationResult::InvalidFormat),
            (" 401-023-2137", ValidationResult::InvalidFormat),
            // Digit lookalikes outside ASCII
            ("٤٠١-٠٢٣-٢١٣٧", ValidationResult::InvalidLength),
            // Mistyped last digit
            ("401-023-2138", ValidationResult::InvalidChecksum),
            ("485-777-3456", ValidationResult::InvalidChecksum),
        ];
        c.bench_function("validate-entries", |b| {
            b.iter(|| {
                for (entry, expected) in entries.clone().into_iter() {
                    assert_eq!(validate(entry), expected);
                }
            })
        });
    }
}

mod check_digit_benchmark {
    use criterion::Criterion;
    use nhs_number_validation::has_valid_check_digit;

    pub fn criterion_benchmark(c: &mut Criterion) {
        let numbers = vec![
            "4010232137",
            "9077844449",
            "4857773456",
            "0000000000",
            "1234567881",
        ];
        c.bench_function("nhs-check-digit", |b| {
            b.iter(|| {
                for number in numbers.clone().into_iter() {
                    has_valid_check_digit(number);
                }
            })
        });
    }
}

criterion_group!(
    benches,
    validation_benchmark::criterion_benchmark,
    check_digit_benchmark::criterion_benchmark
);
criterion_main!(benches);
