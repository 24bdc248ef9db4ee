//! Cursor-based byte sources for the binary codec
//!
//! This module, along with its submodules, provides the fundamental
//! definitions related to the abstract task of reading raw sequences
//! of binary data back into the primitive leaves of an arbitrarily
//! nested value.
//!
//! For type-aware parsing, in other words, parsing user-defined types
//! directly rather than as an unstructured sequence of primitives,
//! see the [`Decode`](crate::conv::Decode) trait, which is a
//! high-level interface built almost entirely around the definitions
//! contained within this module.
//!
//! # Layout
//!
//! The top-level of this module defines the [`Parser`] trait, along with
//! the utility trait [`TryIntoParser<P>`] which facilitates the generic instantiation
//! of parser-types from a variety of source types. Two implementing types are
//! packaged in accordingly-named modules: `byteparser` for [`ByteParser`], which
//! owns its buffer, and `sliceparser` for [`SliceParser`], which borrows it.
//!
//! [`ByteParser`]: byteparser::ByteParser
//! [`SliceParser`]: sliceparser::SliceParser

pub mod byteparser;
pub mod error;
pub mod sliceparser;

use std::convert::Infallible;

pub use error::{ParseError, ParseResult};

use self::byteparser::ByteParser;
use self::error::TokenError;
use self::sliceparser::SliceParser;

/// # Parser
///
/// This trait is an abstraction over types representing a stateful,
/// cursor-advancing view over an immutable byte-buffer.
///
/// ## Model
///
/// * The Parser-object is constructed over an immutable byte-buffer.
/// * All parsing is done in a non-backtracking, zero-lookahead fashion; a byte in the buffer
///   can only be viewed by consuming it, and only after all preceding indices in the buffer
///   have been consumed; after a byte is consumed, it cannot be consumed again.
/// * A fresh `p : impl Parser` object should have `p.offset() == 0` and `p.view_len()` equal to
///   the length of the buffer.
/// * `self.remainder()` is the largest possible `n` for which `self.consume(n)` returns an `Ok(_)` value.
/// * A failed `consume` leaves `self.remainder()` unchanged.
///
/// All multi-byte numeric `take_*` methods read the *native* byte order of the
/// running process, mirroring what [`Encode`](crate::conv::Encode) writes.
pub trait Parser {
    /// Buffer type a new `Parser` object can be safely and infallibly
    /// instantiated from a value of.
    type Buffer;

    /// Constructs an initialized `Parser` value over a buffer
    fn from_buffer(buf: Self::Buffer) -> Self;

    /// Computes the length of the Parser's buffer.
    fn view_len(&self) -> usize;

    /// Computes the current value of the offset into the Parser's buffer.
    ///
    /// This increases by the number of bytes consumed by any method that
    /// returns bytes from the buffer.
    fn offset(&self) -> usize;

    /// Computes the remaining number of bytes that can be safely consumed.
    fn remainder(&self) -> usize {
        self.view_len() - self.offset()
    }

    /// Consumes and returns a single byte from the current offset position
    /// in the buffer.
    fn consume_byte(&mut self) -> ParseResult<u8>;

    /// Attempt to consume and return a slice of length `nbytes`,
    /// starting from the first unconsumed byte in the buffer.
    ///
    /// # Invariants
    ///
    /// This method **MUST** return `Ok(s)` when and only when
    /// `nbytes <= self.remainder()`, and in such cases, `s.len()` must be equal to
    /// the requested length `nbytes`. Otherwise it returns
    /// [`ParseError::Exhausted`] and consumes nothing.
    fn consume(&mut self, nbytes: usize) -> ParseResult<&[u8]>;

    /// Consumes `N` bytes and returns them in array-form
    fn consume_arr<const N: usize>(&mut self) -> ParseResult<[u8; N]> {
        error::coerce_slice(self.consume(N)?)
    }

    /// Consumes a native-width `usize`, as written for length prefixes
    #[inline]
    fn take_usize(&mut self) -> ParseResult<usize> {
        self.consume_arr().map(usize::from_ne_bytes)
    }

    /// Consumes a single byte and returns the boolean value it represents
    ///
    /// The only valid encodings are the native representations of `bool`,
    /// `0x01` for `true` and `0x00` for `false`.
    ///
    /// # Errors
    ///
    /// If the consume operation itself fails, returns the original errors.
    ///
    /// Otherwise, returns `InvalidBoolean` containing the invalid byte,
    /// wrapped suitably as a `ParseError`
    #[inline]
    fn take_bool(&mut self) -> ParseResult<bool> {
        match self.consume_byte()? {
            0x01 => Ok(true),
            0x00 => Ok(false),
            byte => Err(TokenError::InvalidBoolean(byte).into()),
        }
    }

    /// Consumes a native-width `u32` and interprets it as a `char`
    ///
    /// # Errors
    ///
    /// Returns `InvalidChar` if the word is not a Unicode scalar value.
    fn take_char(&mut self) -> ParseResult<char> {
        let word = self.consume_arr().map(u32::from_ne_bytes)?;
        char::from_u32(word).ok_or_else(|| TokenError::InvalidChar(word).into())
    }

    /// Consumes and returns a `Vec<u8>` of length `nbytes`, following
    /// the same behavioral guarantees as [`consume`](Parser::consume).
    #[inline]
    fn take_dynamic(&mut self, nbytes: usize) -> ParseResult<Vec<u8>> {
        self.consume(nbytes).map(Vec::from)
    }
}

/// Conversion from a source value into a [`Parser`] of type `P`
///
/// Defaults to [`ByteParser`] so that `Decode::try_decode(bytes)` can
/// be called without naming a parser type.
pub trait TryIntoParser<P = ByteParser>
where
    P: Parser,
{
    type Error;

    fn try_into_parser(self) -> Result<P, Self::Error>;
}

impl TryIntoParser<ByteParser> for Vec<u8> {
    type Error = Infallible;

    fn try_into_parser(self) -> Result<ByteParser, Self::Error> {
        Ok(ByteParser::from_buffer(self))
    }
}

impl TryIntoParser<ByteParser> for &[u8] {
    type Error = Infallible;

    fn try_into_parser(self) -> Result<ByteParser, Self::Error> {
        Ok(ByteParser::from_buffer(self.to_vec()))
    }
}

impl<const N: usize> TryIntoParser<ByteParser> for [u8; N] {
    type Error = Infallible;

    fn try_into_parser(self) -> Result<ByteParser, Self::Error> {
        Ok(ByteParser::from_buffer(self.to_vec()))
    }
}

impl<'a> TryIntoParser<SliceParser<'a>> for &'a [u8] {
    type Error = Infallible;

    fn try_into_parser(self) -> Result<SliceParser<'a>, Self::Error> {
        Ok(SliceParser::from_buffer(self))
    }
}

impl<'a> TryIntoParser<SliceParser<'a>> for &'a Vec<u8> {
    type Error = Infallible;

    fn try_into_parser(self) -> Result<SliceParser<'a>, Self::Error> {
        Ok(SliceParser::from_buffer(self.as_slice()))
    }
}
