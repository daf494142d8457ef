// https://www.datadictionary.nhs.uk/attributes/nhs_number.html
// The first nine digits carry the identifier, the tenth is a check digit
// computed with the Modulus 11 algorithm.
const WEIGHTS: &[u32; 9] = &[10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Verifies the Modulus 11 check digit of a normalized NHS number.
///
/// `digits` must be exactly ten decimal digits with all separators already
/// stripped; anything else returns `false`. The check value is
/// `(11 - (weighted_sum % 11)) % 11`, and a check value of 10 has no digit
/// representation, so such numbers are invalid no matter what the tenth
/// digit is.
pub fn has_valid_check_digit(digits: &str) -> bool {
    let mut chars = digits.chars();

    let mut sum = 0;
    for weight in WEIGHTS {
        match chars.next().and_then(|c| c.to_digit(10)) {
            Some(digit) => sum += digit * weight,
            None => return false,
        }
    }

    let check_digit = match chars.next().and_then(|c| c.to_digit(10)) {
        Some(digit) => digit,
        None => return false,
    };
    if chars.next().is_some() {
        // More than ten characters
        return false;
    }

    match sum % 11 {
        // 11 - 0 = 11 → 0
        0 => check_digit == 0,
        // 11 - 1 = 10, which is not a single digit
        1 => false,
        remainder => check_digit == 11 - remainder,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_check_digits() {
        let valid_numbers = vec![
            "4010232137",
            "9077844449",
            "7984284334",
            "1114311456",
            "0955581001",
            "6492618610",
            "6005625942",
            "1105379787",
            "1665845783",
            "7143758426",
            "4345391210",
            "0643279288",
            // Weighted sum of zero, check digit zero
            "0000000000",
        ];
        for number in valid_numbers {
            assert!(has_valid_check_digit(number), "expected valid: {number}");
        }
    }

    #[test]
    fn test_invalid_check_digits() {
        let invalid_numbers = vec![
            // Remainder 1 → check value 10, invalid for every tenth digit
            "1234567890",
            // Plain mismatch
            "1234567882",
            "4010232138",
        ];
        for number in invalid_numbers {
            assert!(!has_valid_check_digit(number), "expected invalid: {number}");
        }
    }

    #[test]
    fn test_rejects_non_normalized_input() {
        let not_normalized = vec![
            // Too short / too long
            "401023213",
            "12345678810",
            "",
            // Separators are the caller's job to strip
            "401-023-2137",
            "401 023 2137",
            // Non-digit characters
            "40102321a7",
            "٤٠١٠٢٣٢١٣٧",
        ];
        for number in not_normalized {
            assert!(!has_valid_check_digit(number), "expected rejection: {number:?}");
        }
    }

    #[test]
    fn test_checksum_ten_is_invalid_for_every_tenth_digit() {
        // The prefix 123456789 has weighted sum 210, remainder 1, so the
        // check value is 10 and no tenth digit can make it valid.
        for digit in 0..10 {
            let number = format!("123456789{digit}");
            assert!(!has_valid_check_digit(&number));
        }
    }
}
