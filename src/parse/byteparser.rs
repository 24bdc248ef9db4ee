//! Parser over an owned byte buffer
//!
//! [`ByteParser`] takes ownership of the bytes it reads, which makes it the
//! natural choice for whole-file decoding, where the buffer is produced by
//! reading the file and has no other owner.

use super::error::{ParseError, ParseResult};
use super::Parser;

/// Owned-buffer [`Parser`] with a monotonically advancing offset
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteParser {
    buffer: Vec<u8>,
    offset: usize,
}

impl ByteParser {
    /// Returns the bytes that have not yet been consumed.
    pub fn residue(&self) -> &[u8] {
        &self.buffer[self.offset..]
    }
}

impl Parser for ByteParser {
    type Buffer = Vec<u8>;

    fn from_buffer(buf: Self::Buffer) -> Self {
        Self {
            buffer: buf,
            offset: 0,
        }
    }

    #[inline]
    fn view_len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    fn offset(&self) -> usize {
        self.offset
    }

    fn consume_byte(&mut self) -> ParseResult<u8> {
        match self.buffer.get(self.offset) {
            Some(&byte) => {
                self.offset += 1;
                Ok(byte)
            }
            None => Err(ParseError::Exhausted {
                offset: self.offset,
                requested: 1,
                limit: self.buffer.len(),
            }),
        }
    }

    fn consume(&mut self, nbytes: usize) -> ParseResult<&[u8]> {
        if nbytes > self.remainder() {
            return Err(ParseError::Exhausted {
                offset: self.offset,
                requested: nbytes,
                limit: self.buffer.len(),
            });
        }
        let start = self.offset;
        self.offset += nbytes;
        Ok(&self.buffer[start..self.offset])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn consume_advances() {
        let mut p = ByteParser::from_buffer(vec![1, 2, 3, 4, 5]);
        assert_eq!(p.consume(2).unwrap(), &[1, 2]);
        assert_eq!(p.consume_byte().unwrap(), 3);
        assert_eq!(p.offset(), 3);
        assert_eq!(p.remainder(), 2);
        assert_eq!(p.residue(), &[4, 5]);
    }

    #[test]
    fn overrun_consumes_nothing() {
        let mut p = ByteParser::from_buffer(vec![1, 2, 3]);
        assert!(matches!(
            p.consume(4),
            Err(ParseError::Exhausted {
                offset: 0,
                requested: 4,
                limit: 3
            })
        ));
        assert_eq!(p.remainder(), 3);
        assert_eq!(p.consume(3).unwrap(), &[1, 2, 3]);
        assert!(p.consume_byte().is_err());
    }

    #[test]
    fn empty_consume_on_empty_buffer() {
        let mut p = ByteParser::from_buffer(Vec::new());
        assert_eq!(p.consume(0).unwrap(), &[] as &[u8]);
        assert_eq!(p.remainder(), 0);
    }
}
