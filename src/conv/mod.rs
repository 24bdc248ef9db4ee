//! Core of the binary-conversion API
//!
//! This module contains definitions for the high-level transcoding traits
//! `Encode` and `Decode`, which define how a value of a given static type is
//! flattened into a byte stream and rebuilt from one.
//!
//! Every supported type has exactly one encoding, determined by its type
//! alone: primitives write their native in-memory representation, text and
//! collections write a native-width `usize` length prefix followed by their
//! contents, pairs write both halves back to back, and aggregates write each
//! registered field in declaration order. No tags, separators or headers are
//! ever written, so a stream can only be decoded by the type that produced it.
//!
//! An additional submodule, [`target`], offers an abstraction along the lines of
//! [`std::io::Write`], namely the [`target::Target`] trait. This is the dual to
//! [`crate::parse::Parser`], acting as the generic bound for serialization in the
//! [`Encode::write_to`] method, among others.

use crate::parse::{ParseResult, Parser, TryIntoParser};

use self::target::Target;

pub mod error;
pub mod target;

pub use error::{DecodeError, DecodeResult};

/// Trait for types that support serialization into the native binary form
///
/// Implementing [`Encode`] can be as simple as providing a definition of the required method
/// [`write_to`](Encode::write_to), but for types that have efficient overrides for the other
/// default-implemented methods, such optimizations are recommended as long as the
/// implementations conform to the specified invariants of each method.
pub trait Encode {
    /// Appends the serialized bytes of this value to a generic buffer,
    /// returning the exact number of bytes written
    ///
    /// Morally related to the trait method [`std::io::Write::write`], with the caveat
    /// that `write_to` is infallible, as well as being generic over any buffer that
    /// satisfies the trait-bound of [`Target`].
    ///
    /// The natural definition of this method is structurally inductive on the
    /// fields or elements of the type in question.
    fn write_to<U: Target>(&self, buf: &mut U) -> usize;

    /// Appends the serialized bytes of this value to a monomorphized [`Vec<u8>`] buffer.
    #[inline]
    fn write_to_vec(&self, buf: &mut Vec<u8>) {
        let _ = self.write_to(buf);
    }

    /// Creates a new buffer and fills it with the serialized bytes of this value.
    #[must_use]
    #[inline]
    fn encode<U: Target>(&self) -> U {
        let mut buf: U = U::create();
        let _ = self.write_to::<U>(&mut buf);
        buf
    }

    /// Creates a [`Vec<u8>`] and fills it with the serialized bytes of this value.
    ///
    /// # Note
    ///
    /// [`EncodeLength::to_bytes_full`] avoids reallocation by measuring the
    /// encoding first, at the cost of traversing the value twice.
    #[must_use]
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write_to_vec(&mut buf);
        buf
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    #[inline]
    fn write_to<U: Target>(&self, buf: &mut U) -> usize {
        (**self).write_to(buf)
    }
}

/// Extension trait for `Encode` that measures encodings without allocating
pub trait EncodeLength: Encode {
    /// Computes, without allocation, the number of bytes in the serialized
    /// form of `self`, by invoking [`Encode::write_to`] over the zero-allocation
    /// target [`ByteCounter`](target::ByteCounter).
    #[must_use]
    #[inline]
    fn enc_len(&self) -> usize {
        self.write_to(&mut std::io::sink())
    }

    /// Pre-determines the exact number of bytes required to serialize `self`,
    /// and returns a `Vec<u8>` initialized to that capacity, which contains
    /// the serialized bytes of `self`
    #[must_use]
    fn to_bytes_full(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.enc_len());
        self.write_to_vec(&mut buf);
        buf
    }
}

impl<T: Encode + ?Sized> EncodeLength for T {}

/// Trait providing methods for deserializing binary data into values of a certain type
///
/// Implementations are defined by one required method, [`parse`](Decode::parse),
/// which attempts to consume the contextually appropriate number of bytes from a
/// [`Parser`], either returning the value those bytes represent, or an error if
/// the source ran out or the bytes were not a valid encoding.
///
/// # Example
///
/// ```
/// use twine::{Decode, Encode};
/// use twine::parse::{Parser, ParseResult};
///
/// #[derive(Debug, PartialEq)]
/// pub struct Reading {
///     valid: bool,
///     id: u8,
/// }
///
/// impl Encode for Reading {
///     fn write_to<U: twine::Target>(&self, buf: &mut U) -> usize {
///         self.valid.write_to(buf) + self.id.write_to(buf)
///     }
/// }
///
/// impl Decode for Reading {
///     fn parse<P: Parser>(p: &mut P) -> ParseResult<Self> {
///         Ok(Self { valid: bool::parse(p)?, id: u8::parse(p)? })
///     }
/// }
///
/// let r = Reading { valid: true, id: 42 };
/// assert_eq!(r.to_bytes(), vec![0x01, 0x2a]);
/// assert_eq!(Reading::decode(vec![0x01, 0x2a]), r);
/// ```
pub trait Decode {
    /// Attempt to consume and interpret a value of type `Self` from an existing
    /// `Parser` object over a binary buffer.
    ///
    /// # Errors
    ///
    /// In most cases, the errors returned by this method will be propogated from
    /// calls made to [`Parser`] methods in the implementation logic.
    fn parse<P: Parser>(p: &mut P) -> ParseResult<Self>
    where
        Self: Sized;

    /// Reconstructs a value of type `Self` in place, overwriting `self`.
    ///
    /// Collections override this to clear themselves and refill their existing
    /// storage; the default simply replaces `self` with a freshly parsed value.
    /// On failure, the contents of `self` are unspecified but valid.
    fn parse_into<P: Parser>(&mut self, p: &mut P) -> ParseResult<()>
    where
        Self: Sized,
    {
        *self = Self::parse(p)?;
        Ok(())
    }

    /// Attempt to decode a value of the `Self` type from a value `input` of the
    /// generic type `U: TryIntoParser<P>`.
    ///
    /// # Errors
    ///
    /// Propogates any error returned by [`TryIntoParser::try_into_parser`] or
    /// [`parse`](Decode::parse).
    ///
    /// In addition, if the feature-flag `check_complete_parse` is enabled,
    /// any bytes left over after the top-level value has been parsed are
    /// reported as [`DecodeError::NonEmpty`].
    fn try_decode<U, P>(input: U) -> DecodeResult<Self>
    where
        Self: Sized,
        P: Parser,
        U: TryIntoParser<P>,
        DecodeError: From<U::Error>,
    {
        let mut p: P = input.try_into_parser()?;
        let ret = Self::parse(&mut p)?;
        check_complete(&p)?;
        Ok(ret)
    }

    /// Decodes a value of type `Self` from a value `input` of the generic
    /// type `U: TryIntoParser`, using [`ByteParser`] as the
    /// `Parser` type internally.
    ///
    /// # Panics
    ///
    /// This method will panic if the interior call to [`try_decode`](Decode::try_decode)
    /// returns an `Err(_)` value.
    ///
    /// [`ByteParser`]: crate::parse::byteparser::ByteParser
    fn decode<U>(inp: U) -> Self
    where
        Self: Sized,
        U: TryIntoParser,
        DecodeError: From<U::Error>,
    {
        Self::try_decode(inp).unwrap_or_else(|err| {
            panic!(
                "<{} as Decode>::decode encountered error: {:?}",
                std::any::type_name::<Self>(),
                err
            )
        })
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "check_complete_parse")] {
        /// Rejects a parser with unconsumed bytes
        pub(crate) fn check_complete<P: Parser>(p: &P) -> DecodeResult<()> {
            match p.remainder() {
                0 => Ok(()),
                residual => Err(DecodeError::NonEmpty { residual }),
            }
        }
    } else {
        /// Accepts any parser state, as `check_complete_parse` is disabled
        #[inline(always)]
        pub(crate) fn check_complete<P: Parser>(_: &P) -> DecodeResult<()> {
            Ok(())
        }
    }
}
