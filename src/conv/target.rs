//! Infallible byte sinks for the binary encoder
//!
//! Encoding never touches the file system directly. A value is first written
//! into an in-memory [`Target`], and the finished buffer is handed to the
//! file in one fallible write by [`binary::write_file`](crate::binary::write_file).
//! Because of that split, the sink itself can never fail, and the `usize`
//! returned by each push only tallies how many bytes a value contributed.

/// Append-only byte sink written to by [`Encode::write_to`](crate::Encode::write_to)
///
/// Two sinks ship with the crate: `Vec<u8>`, which collects the encoding,
/// and [`ByteCounter`], which only measures it.
pub trait Target {
    /// Hints that at least `extra` more bytes are about to be appended
    ///
    /// Strings call this with their full encoded size before writing; sinks
    /// without a capacity ignore it.
    fn anticipate(&mut self, extra: usize);

    /// Returns an empty sink
    fn create() -> Self;

    /// Appends one byte and returns `1`
    fn push_one(&mut self, b: u8) -> usize;

    /// Appends the native-endian bytes of a fixed-width primitive and returns `N`
    fn push_many<const N: usize>(&mut self, arr: [u8; N]) -> usize;

    /// Appends a run of bytes, such as the UTF-8 body of a string, and returns its length
    fn push_all(&mut self, buf: &[u8]) -> usize;
}

/// Sink that discards its input, used by [`EncodeLength::enc_len`](crate::EncodeLength::enc_len)
/// to size a buffer before the real encoding pass
pub type ByteCounter = std::io::Sink;

impl Target for ByteCounter {
    #[inline(always)]
    fn anticipate(&mut self, _: usize) {}

    #[inline]
    fn create() -> Self {
        std::io::sink()
    }

    #[inline(always)]
    fn push_one(&mut self, _: u8) -> usize {
        1
    }

    #[inline(always)]
    fn push_many<const N: usize>(&mut self, _: [u8; N]) -> usize {
        N
    }

    #[inline(always)]
    fn push_all(&mut self, buf: &[u8]) -> usize {
        buf.len()
    }
}

impl Target for Vec<u8> {
    #[inline]
    fn anticipate(&mut self, extra: usize) {
        self.reserve(extra)
    }

    #[inline]
    #[must_use]
    fn create() -> Self {
        Self::new()
    }

    #[inline]
    fn push_one(&mut self, b: u8) -> usize {
        self.push(b);
        1
    }

    #[inline]
    fn push_many<const N: usize>(&mut self, arr: [u8; N]) -> usize {
        self.extend_from_slice(&arr);
        N
    }

    #[inline]
    fn push_all(&mut self, buf: &[u8]) -> usize {
        self.extend_from_slice(buf);
        buf.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counter_matches_vec() {
        let mut v: Vec<u8> = Target::create();
        let mut c: ByteCounter = Target::create();
        let n = v.push_one(1) + v.push_many([2, 3]) + v.push_all(&[4, 5, 6]);
        let m = c.push_one(1) + c.push_many([2, 3]) + c.push_all(&[4, 5, 6]);
        assert_eq!(n, 6);
        assert_eq!(n, m);
        assert_eq!(v, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn bulk_pushes_match_single_pushes() {
        let mut one: Vec<u8> = Target::create();
        let n: usize = b"twine".iter().map(|&b| one.push_one(b)).sum();

        let mut many: Vec<u8> = Target::create();
        assert_eq!(many.push_many(*b"twine"), n);

        let mut all: Vec<u8> = Target::create();
        assert_eq!(all.push_all(b"twine"), n);

        assert_eq!(one, many);
        assert_eq!(many, all);
    }

    #[test]
    fn anticipate_reserves_without_writing() {
        let mut v: Vec<u8> = Target::create();
        v.anticipate(64);
        assert!(v.capacity() >= 64);
        assert!(v.is_empty());
    }
}
