use std::fmt;
use std::str::FromStr;

/// QR code symbol version
///
/// Only versions 1-9 are produced; the length field, RS block table and
/// alignment table are limited to that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest supported version (21x21 modules)
    pub const MIN: Version = Version(1);
    /// Largest supported version (53x53 modules)
    pub const MAX: Version = Version(9);
    /// Used when no supported version can hold the payload
    pub(crate) const FALLBACK: Version = Version(4);

    /// Create a version, rejecting numbers outside 1-9
    pub fn new(number: u8) -> Option<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&number) {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Get the version number
    pub fn number(self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(self) -> usize {
        4 * (self.0 as usize) + 17
    }

    /// All supported versions, smallest first
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    #[default]
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// Row index into the per-level RS tables
    pub(crate) fn table_index(self) -> usize {
        match self {
            ECLevel::L => 0,
            ECLevel::M => 1,
            ECLevel::Q => 2,
            ECLevel::H => 3,
        }
    }
}

impl fmt::Display for ECLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        };
        f.write_str(name)
    }
}

impl FromStr for ECLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ECLevel::L),
            "M" => Ok(ECLevel::M),
            "Q" => Ok(ECLevel::Q),
            "H" => Ok(ECLevel::H),
            other => Err(format!("unknown error correction level: {other}")),
        }
    }
}
