// This needs cleaned up a bit before clippy should run here
#![allow(warnings)]

use afl::fuzz;
use nhs_number_validation::{
    validate, FieldCheckConfig, FieldChecker, NotificationDirective, SimpleForm, ValidationResult,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (entry, rand_seed) = split_bytes_once(bytes)?;
    let entry_str = std::str::from_utf8(entry).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(entry_str, rng);

    Some(())
}

// The check digit the weighted sum calls for, written with its own arithmetic
// instead of calling into the crate.
fn expected_check_digit(first_nine: &[u32; 9]) -> Option<u32> {
    let mut sum = 0;
    for (i, digit) in first_nine.iter().enumerate() {
        sum += digit * (10 - i as u32);
    }
    match 11 - (sum % 11) {
        11 => Some(0),
        10 => None,
        digit => Some(digit),
    }
}

fn run_fuzz(entry: &str, mut rng: StdRng) {
    // Validating the same entry twice never changes the answer.
    let result = validate(entry);
    assert_eq!(validate(entry), result);

    assert_eq!(result == ValidationResult::Empty, entry.is_empty());
    if result == ValidationResult::Valid {
        let bytes = entry.as_bytes();
        assert_eq!(bytes.len(), 12);
        assert_eq!(bytes[3], b'-');
        assert_eq!(bytes[7], b'-');
    }

    #[cfg(feature = "manual_test")]
    {
        println!("Entry: {:?}", entry);
        println!("Entry len: {:?}", entry.len());
        println!("Result: {:?}", result);
    }

    // A full checker pass must leave the notification agreeing with the result.
    let checker = FieldChecker::new(FieldCheckConfig::new("nhs_number")).unwrap();
    let mut form = SimpleForm::new().with_field("nhs_number", entry);
    let checked = checker.check(&mut form).unwrap();
    assert_eq!(checked, result);
    let directive = NotificationDirective::from(&result);
    assert_eq!(form.notification("nhs_number"), directive.message());

    #[cfg(feature = "manual_test")]
    {
        println!("Notification: {:?}", form.notification("nhs_number"));
    }

    // Numbers built from the seed have a known answer for every tenth digit.
    let mut first_nine = [0u32; 9];
    for digit in first_nine.iter_mut() {
        *digit = rng.gen_range(0..10);
    }
    let check_digit = expected_check_digit(&first_nine);
    for tenth in 0..10u32 {
        let digits: String = first_nine
            .iter()
            .chain(std::iter::once(&tenth))
            .map(|digit| char::from_digit(*digit, 10).unwrap())
            .collect();
        let formatted = format!("{}-{}-{}", &digits[0..3], &digits[3..6], &digits[6..10]);
        let expected = match check_digit {
            Some(check_digit) if check_digit == tenth => ValidationResult::Valid,
            _ => ValidationResult::InvalidChecksum,
        };
        assert_eq!(validate(&formatted), expected, "entry {:?}", formatted);
    }
}
