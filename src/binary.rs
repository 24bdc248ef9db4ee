//! File-level entry points for the binary codec
//!
//! The file holds nothing but the value's encoding: no header, no type tag
//! and no trailing checksum. Files are only readable by a process with the
//! same integer widths and byte order as the one that wrote them.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::conv::{check_complete, Decode, Encode, EncodeLength};
use crate::error::{Error, Result};
use crate::parse::{byteparser::ByteParser, Parser};

/// Writes the binary encoding of `value` to the file at `path`, returning the
/// number of bytes written
///
/// The file is created if absent and truncated otherwise.
///
/// # Errors
///
/// Returns [`Error::Create`] if the file cannot be created, and [`Error::Io`]
/// if writing fails.
pub fn write_file<T, Q>(value: &T, path: Q) -> Result<usize>
where
    T: Encode + ?Sized,
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = value.to_bytes_full();
    let mut file = File::create(path).map_err(|source| Error::Create {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(&bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote binary file");
    Ok(bytes.len())
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read binary file");
    Ok(bytes)
}

/// Reads a value of type `T` from the binary file at `path`
///
/// # Errors
///
/// Returns [`Error::Open`] if the file cannot be opened, and
/// [`Error::Decode`] if its contents are not a valid encoding of `T`.
pub fn read_file<T, Q>(path: Q) -> Result<T>
where
    T: Decode,
    Q: AsRef<Path>,
{
    let bytes = read_bytes(path.as_ref())?;
    Ok(T::try_decode(bytes)?)
}

/// Reads the binary file at `path` into `value`, reusing its storage
///
/// Collections are cleared before being refilled.
pub fn read_file_into<T, Q>(value: &mut T, path: Q) -> Result<()>
where
    T: Decode,
    Q: AsRef<Path>,
{
    let mut p = ByteParser::from_buffer(read_bytes(path.as_ref())?);
    value.parse_into(&mut p)?;
    check_complete(&p)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn open_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.bin");
        assert!(matches!(read_file::<u32, _>(&missing), Err(Error::Open { .. })));
    }

    #[test]
    fn create_in_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("no").join("such").join("dir.bin");
        assert!(matches!(write_file(&1u8, &bad), Err(Error::Create { .. })));
    }

    #[test]
    fn byte_count_reported() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let n = write_file(&vec![1u64, 2], file.path()).unwrap();
        assert_eq!(n, std::mem::size_of::<usize>() + 16);
        assert_eq!(std::fs::metadata(file.path()).unwrap().len() as usize, n);
    }
}
