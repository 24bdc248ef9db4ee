//! Parser over a borrowed byte slice
//!
//! [`SliceParser`] models parsing as a shrinking view: every consume
//! operation splits the front off the slice it holds. No bytes are copied
//! until a value that owns its contents (e.g. a `String`) is built.

use super::error::{ParseError, ParseResult};
use super::Parser;

/// Borrowed-buffer [`Parser`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceParser<'a> {
    view: &'a [u8],
    total: usize,
}

impl<'a> Parser for SliceParser<'a> {
    type Buffer = &'a [u8];

    fn from_buffer(buf: Self::Buffer) -> Self {
        Self {
            view: buf,
            total: buf.len(),
        }
    }

    #[inline]
    fn view_len(&self) -> usize {
        self.total
    }

    #[inline]
    fn offset(&self) -> usize {
        self.total - self.view.len()
    }

    #[inline]
    fn remainder(&self) -> usize {
        self.view.len()
    }

    fn consume_byte(&mut self) -> ParseResult<u8> {
        match self.view.split_first() {
            Some((&byte, rest)) => {
                self.view = rest;
                Ok(byte)
            }
            None => Err(ParseError::Exhausted {
                offset: self.total,
                requested: 1,
                limit: self.total,
            }),
        }
    }

    fn consume(&mut self, nbytes: usize) -> ParseResult<&[u8]> {
        if nbytes > self.view.len() {
            return Err(ParseError::Exhausted {
                offset: self.offset(),
                requested: nbytes,
                limit: self.total,
            });
        }
        let (front, rest) = self.view.split_at(nbytes);
        self.view = rest;
        Ok(front)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shrinking_view() {
        let data = [9u8, 8, 7, 6];
        let mut p = SliceParser::from_buffer(&data);
        assert_eq!(p.consume_byte().unwrap(), 9);
        assert_eq!(p.consume(2).unwrap(), &[8, 7]);
        assert_eq!(p.offset(), 3);
        assert_eq!(p.remainder(), 1);
        assert!(matches!(
            p.consume(2),
            Err(ParseError::Exhausted {
                offset: 3,
                requested: 2,
                limit: 4
            })
        ));
    }
}
