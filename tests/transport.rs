use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use proptest::collection::vec;
use proptest::prelude::*;
use twine::transport::{decode, encode, encoded_len};

const SYMBOLS: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

#[test]
fn small_inputs() {
    let inputs: [&[u8]; 4] = [b"", b"\x00", b"\x00\xff", b"\x01\x02\x03"];
    for input in inputs {
        let enc = encode(input);
        assert_eq!(enc, STANDARD.encode(input));
        assert_eq!(decode(&enc), input);
    }
}

#[test]
fn every_byte_value_many_times() {
    let input: Vec<u8> = (0..8192u32).map(|i| (i % 256) as u8).collect();
    let enc = encode(&input);
    assert_eq!(enc.len(), encoded_len(input.len()));
    assert_eq!(enc, STANDARD.encode(&input));
    assert_eq!(decode(&enc), input);
}

proptest! {
    #[test]
    fn matches_reference_encoder(input in vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(encode(&input), STANDARD.encode(&input));
    }

    #[test]
    fn decode_inverts_encode(input in vec(any::<u8>(), 0..2048)) {
        prop_assert_eq!(decode(&encode(&input)), input);
    }

    #[test]
    fn decode_ignores_trailing_garbage(input in vec(any::<u8>(), 0..64), tail in "[\n =!]{1,4}[A-Za-z]{0,4}") {
        let enc = encode(&input);
        prop_assert_eq!(decode(&format!("{}{}", enc, tail)), input);
    }

    #[test]
    fn lone_trailing_symbol_is_dropped(
        input in vec(any::<u8>(), 0..96).prop_map(|mut v| { v.truncate(v.len() / 3 * 3); v }),
        sym in 0usize..64,
    ) {
        let mut text = encode(&input);
        text.push(char::from(SYMBOLS[sym]));
        prop_assert_eq!(text.len() % 4, 1);
        prop_assert_eq!(decode(&text), input);
    }

    #[test]
    fn stray_low_bits_are_ignored(byte in any::<u8>(), noise in 1usize..16, padded in any::<bool>()) {
        let enc = encode(&[byte]);
        let second = SYMBOLS.iter().position(|&c| c == enc.as_bytes()[1]).unwrap();
        let mut text = String::new();
        text.push(enc.as_bytes()[0] as char);
        text.push(char::from(SYMBOLS[second | noise]));
        if padded {
            text.push_str("==");
        }
        prop_assert_eq!(decode(&text), vec![byte]);
    }
}
