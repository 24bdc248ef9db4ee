//! Base64 transport encoding
//!
//! Used to embed a rendered document as a single opaque line of text. Every
//! three input bytes become four symbols of `A-Z a-z 0-9 + /`, and a final
//! partial group is padded with `=`.
//!
//! Decoding is lenient: it reads symbols until the first `=` or the first
//! character outside the alphabet and ignores everything after it, so it
//! never fails. A lone symbol left over after the last complete group
//! carries fewer than eight bits and is dropped. Callers that split the text
//! across lines must join it back together first.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

/// Padding symbol for a final partial group
pub const PAD: char = '=';

/// Standard-alphabet engine that accepts unpadded input and ignores the
/// unused low bits of a final partial group
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[inline]
fn is_symbol(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'+' || b == b'/'
}

/// Number of symbols produced by encoding `n` bytes, padding included
#[must_use]
pub const fn encoded_len(n: usize) -> usize {
    (n + 2) / 3 * 4
}

/// Encodes `bytes` as padded base64 text
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes base64 text, stopping at the first `=` or non-alphabet character
#[must_use]
pub fn decode(text: &str) -> Vec<u8> {
    let raw = text.as_bytes();
    let mut end = raw.iter().position(|&b| !is_symbol(b)).unwrap_or(raw.len());
    if end % 4 == 1 {
        end -= 1;
    }
    // the prefix holds alphabet symbols only, in a decodable count
    LENIENT.decode(&raw[..end]).unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_vectors() {
        let cases: [(&[u8], &str); 7] = [
            (b"", ""),
            (b"f", "Zg=="),
            (b"fo", "Zm8="),
            (b"foo", "Zm9v"),
            (b"foob", "Zm9vYg=="),
            (b"fooba", "Zm9vYmE="),
            (b"foobar", "Zm9vYmFy"),
        ];
        for (raw, enc) in cases {
            assert_eq!(encode(raw), enc);
            assert_eq!(decode(enc), raw);
        }
    }

    #[test]
    fn high_bytes() {
        assert_eq!(encode(&[0xff, 0xfe, 0xfd]), "//79");
        assert_eq!(decode("//79"), vec![0xff, 0xfe, 0xfd]);
    }

    #[test]
    fn stops_at_foreign_symbol() {
        assert_eq!(decode("Zm9v\nYmFy"), b"foo");
        assert_eq!(decode("Zg==Zm9v"), b"f");
        assert_eq!(decode("!!!"), b"");
    }

    #[test]
    fn dangling_symbol_dropped() {
        assert_eq!(decode("Zm9vY"), b"foo");
        assert_eq!(decode("Z"), b"");
        assert_eq!(decode("Zm9vYmFyZ=="), b"foobar");
    }

    #[test]
    fn noncanonical_trailing_bits() {
        // `Zh` and `Zm9` carry stray low bits that a strict decoder rejects
        assert_eq!(decode("Zh"), b"f");
        assert_eq!(decode("Zh=="), b"f");
        assert_eq!(decode("Zm9="), b"fo");
    }

    #[test]
    fn length_prediction() {
        for n in 0..10 {
            assert_eq!(encode(&vec![0u8; n]).len(), encoded_len(n));
        }
    }
}
