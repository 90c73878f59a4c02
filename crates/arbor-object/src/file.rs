use std::io::Read;

use crate::blob::Blob;
use crate::error::{ObjectError, ObjectResult};
use crate::mode::FileMode;

/// A blob reached through a tree, together with its path and mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    /// Slash-separated path from the root tree.
    pub name: String,
    pub mode: FileMode,
    pub blob: Blob,
}

impl File {
    pub fn new(name: impl Into<String>, mode: FileMode, blob: Blob) -> Self {
        Self {
            name: name.into(),
            mode,
            blob,
        }
    }

    pub fn reader(&self) -> impl Read + '_ {
        self.blob.reader()
    }

    /// The full contents as text.
    pub fn contents(&self) -> ObjectResult<String> {
        String::from_utf8(self.blob.data().to_vec()).map_err(|_| ObjectError::InvalidUtf8)
    }

    /// The contents split on `\n`. A trailing newline does not produce an
    /// empty last line.
    pub fn lines(&self) -> ObjectResult<Vec<String>> {
        let contents = self.contents()?;
        let mut lines: Vec<String> = contents.split('\n').map(str::to_string).collect();
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Ok(lines)
    }
}
