/// Byte mode data segment (Mode 0100)
use crate::encoder::bit_buffer::BitBuffer;
use crate::models::Version;

/// Mode indicator for 8-bit byte data
pub const MODE_BYTE: u32 = 0b0100;

/// Width of the mode indicator in bits
pub const MODE_BITS: usize = 4;

/// Width of the byte-mode character count field
pub fn char_count_bits(version: Version) -> usize {
    match version.number() {
        1..=9 => 8,
        _ => 16,
    }
}

/// A run of raw bytes encoded in byte mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSegment {
    data: Vec<u8>,
}

impl ByteSegment {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Segment holding the UTF-8 bytes of `text`
    pub fn from_text(text: &str) -> Self {
        Self::new(text.as_bytes())
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Bits this segment occupies at `version`: header plus 8 per byte
    pub fn bit_len(&self, version: Version) -> usize {
        MODE_BITS + char_count_bits(version) + self.data.len() * 8
    }

    /// Append mode indicator, character count and payload
    pub fn write(&self, buffer: &mut BitBuffer, version: Version) {
        buffer.put(MODE_BYTE, MODE_BITS);
        buffer.put(self.data.len() as u32, char_count_bits(version));
        for &byte in &self.data {
            buffer.put(byte as u32, 8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_hi() {
        let segment = ByteSegment::from_text("HI");
        let mut buffer = BitBuffer::new();
        segment.write(&mut buffer, Version::MIN);
        // 0100 | 00000010 | 01001000 | 01001001
        assert_eq!(buffer.len(), 28);
        assert_eq!(segment.bit_len(Version::MIN), 28);
        assert_eq!(buffer.as_bytes(), &[0x40, 0x24, 0x84, 0x90]);
    }

    #[test]
    fn test_utf8_length_counts_bytes() {
        let segment = ByteSegment::from_text("知");
        assert_eq!(segment.len(), 3);
        assert!(!segment.is_empty());
    }

    #[test]
    fn test_count_field_width() {
        for version in Version::all() {
            assert_eq!(char_count_bits(version), 8);
        }
    }
}
