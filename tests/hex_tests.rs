use hcicmd::hex::{HexDecodeError, decode_hex, encode_upper};
use rand::Rng;

#[test]
fn odd_length_is_padded_on_the_left() {
    assert_eq!(decode_hex("ABC", 16), Ok(vec![0x0A, 0xBC]));
    assert_eq!(decode_hex("1", 16), Ok(vec![0x01]));
}

#[test]
fn most_significant_nibble_first() {
    assert_eq!(decode_hex("0102ff", 16), Ok(vec![0x01, 0x02, 0xFF]));
}

#[test]
fn prefix_is_stripped_in_either_case() {
    assert_eq!(decode_hex("0x1234", 16), Ok(vec![0x12, 0x34]));
    assert_eq!(decode_hex("0X1234", 16), Ok(vec![0x12, 0x34]));
}

#[test]
fn empty_input_yields_no_bytes() {
    assert_eq!(decode_hex("", 0), Ok(vec![]));
    assert_eq!(decode_hex("0x", 0), Ok(vec![]));
}

#[test]
fn invalid_digit_reports_character_and_position() {
    assert_eq!(
        decode_hex("12G4", 16),
        Err(HexDecodeError::InvalidHexDigit {
            digit: 'G',
            position: 2
        })
    );

    // Position counts from the start of the original input.
    assert_eq!(
        decode_hex("0x1z", 16),
        Err(HexDecodeError::InvalidHexDigit {
            digit: 'z',
            position: 3
        })
    );

    assert!(matches!(
        decode_hex("12 34", 16),
        Err(HexDecodeError::InvalidHexDigit { digit: ' ', .. })
    ));
}

#[test]
fn overflowing_the_capacity_fails() {
    assert_eq!(
        decode_hex("010203", 2),
        Err(HexDecodeError::BufferTooSmall {
            required: 3,
            capacity: 2
        })
    );

    assert_eq!(decode_hex("0102", 2), Ok(vec![0x01, 0x02]));
}

#[test]
fn random_even_length_strings_round_trip() {
    let mut rng = rand::rng();
    let digits = b"0123456789ABCDEF";

    for _ in 0..500 {
        let len = rng.random_range(0..=64usize) * 2;
        let s: String = (0..len)
            .map(|_| digits[rng.random_range(0..digits.len())] as char)
            .collect();

        let bytes = decode_hex(&s, len / 2).expect("valid hex");

        assert_eq!(bytes.len(), len / 2);
        assert_eq!(encode_upper(&bytes), s);

        if len > 0 {
            assert_eq!(
                decode_hex(&s, len / 2 - 1),
                Err(HexDecodeError::BufferTooSmall {
                    required: len / 2,
                    capacity: len / 2 - 1
                })
            );
        }
    }
}

#[test]
fn lowercase_input_encodes_back_as_uppercase() {
    let bytes = decode_hex("deadbeef", 4).expect("valid hex");
    assert_eq!(encode_upper(&bytes), "DEADBEEF");
}
