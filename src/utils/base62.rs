//! Base62 encoding for short codes.
//!
//! Short codes are the base62 representation of a sequential counter ID,
//! most significant digit first. The alphabet orders digits before uppercase
//! before lowercase, so codes sort in counter order.

/// Digits, uppercase, lowercase. Index is the digit value.
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u64 = 62;

/// Encodes a counter value as a base62 short code.
pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % BASE) as usize]);
        value /= BASE;
    }
    digits.reverse();

    // Alphabet bytes are ASCII
    String::from_utf8(digits).expect("base62 alphabet is valid UTF-8")
}

/// Decodes a base62 short code back to its counter value.
///
/// Returns `None` for empty input or characters outside the alphabet.
pub fn decode(encoded: &str) -> Option<u64> {
    if encoded.is_empty() {
        return None;
    }

    let mut value: u64 = 0;
    for c in encoded.bytes() {
        let digit = ALPHABET.iter().position(|&a| a == c)? as u64;
        value = value.checked_mul(BASE)?.checked_add(digit)?;
    }

    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode(0), "0");
    }

    #[test]
    fn test_encode_single_digit() {
        assert_eq!(encode(9), "9");
        assert_eq!(encode(10), "A");
        assert_eq!(encode(35), "Z");
        assert_eq!(encode(36), "a");
        assert_eq!(encode(61), "z");
    }

    #[test]
    fn test_encode_multi_digit() {
        assert_eq!(encode(62), "10");
        assert_eq!(encode(12345), "3D7");
    }

    #[test]
    fn test_decode_inverts_encode() {
        for value in [0u64, 1, 61, 62, 12345, 999_999_999, u64::MAX] {
            assert_eq!(decode(&encode(value)), Some(value));
        }
    }

    #[test]
    fn test_decode_rejects_invalid_input() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("abc!"), None);
        assert_eq!(decode("with space"), None);
    }

    #[test]
    fn test_decode_overflow() {
        // One digit longer than u64::MAX in base62
        assert_eq!(decode("LygHa16AHYGz"), None);
    }

    #[test]
    fn test_codes_sort_in_counter_order() {
        let mut codes: Vec<String> = (60..70).map(encode).collect();
        let sorted = codes.clone();
        codes.sort_by_key(|c| (c.len(), c.clone()));
        assert_eq!(codes, sorted);
    }
}
