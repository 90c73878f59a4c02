//! Tree binary codec.
//!
//! Each record is `<octal mode> SP <name> NUL <raw hash>`. Records are
//! concatenated with nothing in between and nothing after the last one.

use std::io::{BufRead, BufReader, ErrorKind, Write};

use arbor_store::{EncodedObject, ObjectKind};
use arbor_types::Hash;
use tracing::debug;

use crate::error::{ObjectError, ObjectResult};
use crate::mode::FileMode;
use crate::tree::{Tree, TreeEntry};

const SPACE: u8 = b' ';
const NUL: u8 = 0;

impl Tree {
    /// Decode a tree object.
    ///
    /// The object must be of kind tree. A body of size zero yields an empty
    /// tree. Fails with `Malformed` on a missing separator, a non-octal mode,
    /// a name that is not UTF-8 or a truncated hash.
    pub fn decode(object: &dyn EncodedObject) -> ObjectResult<Self> {
        if object.kind() != ObjectKind::Tree {
            return Err(unsupported(object.kind()));
        }
        Self::decode_with_id(object, object.id())
    }

    /// [`Tree::decode`] for an object whose hash is already known, such as
    /// one just fetched from a store by that hash.
    pub(crate) fn decode_with_id(object: &dyn EncodedObject, hash: Hash) -> ObjectResult<Self> {
        if object.kind() != ObjectKind::Tree {
            return Err(unsupported(object.kind()));
        }
        if object.size() == 0 {
            return Ok(Tree::from_parts(Vec::new(), hash));
        }

        let mut reader = BufReader::new(object.reader()?);
        let entries = decode_entries(&mut reader)?;
        debug!(tree = %hash.short_hex(), entries = entries.len(), "decoded tree");
        Ok(Tree::from_parts(entries, hash))
    }

    /// Encode this tree into `object`, setting its kind and size.
    ///
    /// Entries are written in stored order. Every name is validated before
    /// anything is written, so a rejected tree leaves the body untouched.
    pub fn encode(&self, object: &mut dyn EncodedObject) -> ObjectResult<()> {
        for entry in self.entries() {
            validate_entry_name(&entry.name)?;
        }

        object.set_kind(ObjectKind::Tree);
        let mut size = 0u64;
        {
            let mut writer = object.writer()?;
            for entry in self.entries() {
                size += write_entry(&mut writer, entry)?;
            }
            writer.flush()?;
        }
        object.set_size(size);
        Ok(())
    }
}

/// Check that `name` can be stored as a single path segment.
pub fn validate_entry_name(name: &str) -> ObjectResult<()> {
    if name.is_empty() || name.contains('/') || name.contains('\0') {
        return Err(ObjectError::InvalidEntryName(name.to_string()));
    }
    Ok(())
}

fn write_entry<W: Write + ?Sized>(writer: &mut W, entry: &TreeEntry) -> ObjectResult<u64> {
    let mode = entry.mode.to_string();
    writer.write_all(mode.as_bytes())?;
    writer.write_all(&[SPACE])?;
    writer.write_all(entry.name.as_bytes())?;
    writer.write_all(&[NUL])?;
    writer.write_all(entry.hash.as_bytes())?;
    Ok((mode.len() + 1 + entry.name.len() + 1 + Hash::LEN) as u64)
}

fn unsupported(actual: ObjectKind) -> ObjectError {
    ObjectError::UnsupportedObject {
        expected: ObjectKind::Tree,
        actual,
    }
}

fn malformed(offset: u64, reason: impl Into<String>) -> ObjectError {
    ObjectError::Malformed {
        offset,
        reason: reason.into(),
    }
}

fn decode_entries<R: BufRead>(reader: &mut R) -> ObjectResult<Vec<TreeEntry>> {
    let mut entries = Vec::new();
    let mut offset = 0u64;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader.read_until(SPACE, &mut buf)?;
        if n == 0 {
            break;
        }
        let record_start = offset;
        offset += n as u64;
        if buf.pop() != Some(SPACE) {
            return Err(malformed(record_start, "mode is not terminated by a space"));
        }
        let mode = FileMode::parse_octal(&buf).ok_or_else(|| {
            malformed(
                record_start,
                format!("invalid octal mode {:?}", String::from_utf8_lossy(&buf)),
            )
        })?;

        buf.clear();
        let name_start = offset;
        let n = reader.read_until(NUL, &mut buf)?;
        offset += n as u64;
        if buf.pop() != Some(NUL) {
            return Err(malformed(name_start, "entry name is not terminated by NUL"));
        }
        let name = String::from_utf8(std::mem::take(&mut buf))
            .map_err(|_| malformed(name_start, "entry name is not valid UTF-8"))?;

        let mut raw = [0u8; Hash::LEN];
        reader.read_exact(&mut raw).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                malformed(offset, "truncated entry hash")
            } else {
                ObjectError::Io(e)
            }
        })?;
        offset += Hash::LEN as u64;

        entries.push(TreeEntry::new(name, mode, Hash::from_bytes(raw)));
    }

    Ok(entries)
}
