//! Tree entry modes.

use serde::{Deserialize, Serialize};

/// How a tree entry is interpreted, derived from its mode bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeKind {
    /// A subtree (`040000`).
    Directory,
    /// A symbolic link (`120000`).
    Symlink,
    /// A regular file with at least one execute bit set.
    Executable,
    /// Any other regular file.
    Regular,
}

/// The permission and type bits of a tree entry.
///
/// Modes travel as ASCII octal in the tree format. Encoding always uses the
/// canonical form without leading zeros (`40000`, `100644`); decoding accepts
/// any octal digit string that fits in 32 bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileMode(u32);

impl FileMode {
    pub const DIRECTORY: Self = Self(0o040000);
    pub const SYMLINK: Self = Self(0o120000);
    pub const REGULAR: Self = Self(0o100644);
    pub const EXECUTABLE: Self = Self(0o100755);

    /// Wrap raw mode bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw mode bits.
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Parse ASCII octal digits. Returns `None` for an empty string, a
    /// non-octal byte, or a value that overflows `u32`.
    pub fn parse_octal(digits: &[u8]) -> Option<Self> {
        if digits.is_empty() {
            return None;
        }
        let mut bits: u32 = 0;
        for &b in digits {
            if !(b'0'..=b'7').contains(&b) {
                return None;
            }
            bits = bits.checked_mul(8)?.checked_add(u32::from(b - b'0'))?;
        }
        Some(Self(bits))
    }

    /// Classify the entry.
    pub fn kind(&self) -> ModeKind {
        match self.0 {
            0o040000 => ModeKind::Directory,
            0o120000 => ModeKind::Symlink,
            bits if bits & 0o111 != 0 => ModeKind::Executable,
            _ => ModeKind::Regular,
        }
    }

    /// The permission bits, without the type bits.
    pub fn permissions(&self) -> u32 {
        self.0 & 0o7777
    }

    pub fn is_dir(&self) -> bool {
        self.kind() == ModeKind::Directory
    }

    pub fn is_symlink(&self) -> bool {
        self.kind() == ModeKind::Symlink
    }

    pub fn is_executable(&self) -> bool {
        self.kind() == ModeKind::Executable
    }

    /// Regular or executable file.
    pub fn is_file(&self) -> bool {
        matches!(self.kind(), ModeKind::Regular | ModeKind::Executable)
    }
}

impl std::fmt::Display for FileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:o}", self.0)
    }
}

impl std::fmt::Debug for FileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FileMode({:06o})", self.0)
    }
}

impl From<u32> for FileMode {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert_eq!(FileMode::DIRECTORY.kind(), ModeKind::Directory);
        assert_eq!(FileMode::SYMLINK.kind(), ModeKind::Symlink);
        assert_eq!(FileMode::REGULAR.kind(), ModeKind::Regular);
        assert_eq!(FileMode::EXECUTABLE.kind(), ModeKind::Executable);
        assert_eq!(FileMode::from_bits(0o100744).kind(), ModeKind::Executable);
        assert_eq!(FileMode::from_bits(0o100001).kind(), ModeKind::Executable);
        assert_eq!(FileMode::from_bits(0o100600).kind(), ModeKind::Regular);
    }

    #[test]
    fn predicates() {
        assert!(FileMode::DIRECTORY.is_dir());
        assert!(!FileMode::DIRECTORY.is_file());
        assert!(FileMode::SYMLINK.is_symlink());
        assert!(!FileMode::SYMLINK.is_file());
        assert!(FileMode::REGULAR.is_file());
        assert!(FileMode::EXECUTABLE.is_file());
        assert!(FileMode::EXECUTABLE.is_executable());
        assert_eq!(FileMode::EXECUTABLE.permissions(), 0o755);
    }

    #[test]
    fn display_is_canonical_octal() {
        assert_eq!(FileMode::DIRECTORY.to_string(), "40000");
        assert_eq!(FileMode::REGULAR.to_string(), "100644");
        assert_eq!(FileMode::SYMLINK.to_string(), "120000");
    }

    #[test]
    fn parse_accepts_leading_zeros() {
        assert_eq!(FileMode::parse_octal(b"040000"), Some(FileMode::DIRECTORY));
        assert_eq!(FileMode::parse_octal(b"40000"), Some(FileMode::DIRECTORY));
        assert_eq!(FileMode::parse_octal(b"100755"), Some(FileMode::EXECUTABLE));
    }

    #[test]
    fn parse_rejects_bad_digits() {
        assert_eq!(FileMode::parse_octal(b""), None);
        assert_eq!(FileMode::parse_octal(b"100648"), None);
        assert_eq!(FileMode::parse_octal(b"+644"), None);
        assert_eq!(FileMode::parse_octal(b"77777777777777"), None);
    }
}
