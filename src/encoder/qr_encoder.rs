/// QR encoder - wires segments, error correction and placement together
use crate::encoder::bit_buffer::BitBuffer;
use crate::encoder::error::EncodeError;
use crate::encoder::patterns::place_function_patterns;
use crate::encoder::placement::map_codewords;
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::segment::ByteSegment;
use crate::encoder::tables::{RsBlock, data_codewords, rs_blocks};
use crate::models::{ECLevel, ModuleGrid, Version};

/// Pad codewords appended alternately after the terminator
const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];

/// Builds one QR symbol from byte-mode segments.
///
/// Add data with [`QrEncoder::add_data`], call [`QrEncoder::make`], then
/// query modules with [`QrEncoder::is_dark`]. Every `make` builds a fresh
/// grid from the segments added so far.
#[derive(Debug, Clone)]
pub struct QrEncoder {
    ec_level: ECLevel,
    forced_version: Option<Version>,
    segments: Vec<ByteSegment>,
    version: Option<Version>,
    grid: Option<ModuleGrid>,
}

impl QrEncoder {
    /// Encoder that picks the smallest version holding the data
    pub fn new(ec_level: ECLevel) -> Self {
        Self {
            ec_level,
            forced_version: None,
            segments: Vec::new(),
            version: None,
            grid: None,
        }
    }

    /// Encoder pinned to a version number (1-9)
    pub fn with_version(version: u8, ec_level: ECLevel) -> Result<Self, EncodeError> {
        let version = Version::new(version).ok_or(EncodeError::UnsupportedVersion(version))?;
        let mut encoder = Self::new(ec_level);
        encoder.forced_version = Some(version);
        Ok(encoder)
    }

    /// Append the UTF-8 bytes of `text` as a byte-mode segment
    pub fn add_data(&mut self, text: &str) {
        self.segments.push(ByteSegment::from_text(text));
    }

    /// Append raw bytes as a byte-mode segment
    pub fn add_bytes(&mut self, data: &[u8]) {
        self.segments.push(ByteSegment::new(data));
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Version of the last successful `make`
    pub fn version(&self) -> Option<Version> {
        self.version
    }

    /// Side length in modules; 0 until `make` succeeds
    pub fn module_count(&self) -> usize {
        self.grid.as_ref().map_or(0, ModuleGrid::size)
    }

    /// Module grid of the last successful `make`
    pub fn grid(&self) -> Option<&ModuleGrid> {
        self.grid.as_ref()
    }

    /// Whether the module at (row, col) is dark.
    ///
    /// Negative or out-of-range coordinates, and any query before `make`,
    /// read as light.
    pub fn is_dark(&self, row: i32, col: i32) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.grid
            .as_ref()
            .is_some_and(|grid| grid.is_dark(row as usize, col as usize))
    }

    /// Build the module grid.
    ///
    /// Fails with [`EncodeError::CodeLengthOverflow`] when the data does not
    /// fit; the previous grid is discarded either way.
    pub fn make(&mut self) -> Result<(), EncodeError> {
        self.version = None;
        self.grid = None;

        let version = match self.forced_version {
            Some(version) => version,
            None => select_version(&self.segments, self.ec_level),
        };

        let codewords = create_codewords(&self.segments, version, self.ec_level)?;

        let mut grid = ModuleGrid::new(version.size());
        place_function_patterns(&mut grid, version);
        let placed = map_codewords(&mut grid, &codewords);

        tracing::debug!(
            version = version.number(),
            ec_level = %self.ec_level,
            codewords = codewords.len(),
            bits_placed = placed,
            "QR symbol built"
        );

        self.version = Some(version);
        self.grid = Some(grid);
        Ok(())
    }
}

/// Smallest version whose data capacity holds every segment.
///
/// Falls back to version 4 when nothing up to version 9 fits; codeword
/// construction then reports the overflow.
fn select_version(segments: &[ByteSegment], ec_level: ECLevel) -> Version {
    for version in Version::all() {
        let bits: usize = segments.iter().map(|s| s.bit_len(version)).sum();
        let capacity = data_codewords(version, ec_level) * 8;
        tracing::trace!(version = version.number(), bits, capacity, "capacity check");
        if bits <= capacity {
            return version;
        }
    }
    tracing::warn!(
        fallback = Version::FALLBACK.number(),
        "data exceeds every supported version"
    );
    Version::FALLBACK
}

/// Padded data bit stream for `version`: segments, terminator, bit padding
/// to a byte boundary, then alternating pad codewords up to capacity.
fn build_data_stream(
    segments: &[ByteSegment],
    version: Version,
    ec_level: ECLevel,
) -> Result<BitBuffer, EncodeError> {
    let capacity = data_codewords(version, ec_level) * 8;
    let mut buffer = BitBuffer::new();
    for segment in segments {
        segment.write(&mut buffer, version);
    }

    if buffer.len() > capacity {
        return Err(EncodeError::CodeLengthOverflow {
            bits: buffer.len(),
            capacity,
            version: version.number(),
        });
    }

    if buffer.len() + 4 <= capacity {
        buffer.put(0, 4);
    }
    while buffer.len() % 8 != 0 {
        buffer.put_bit(false);
    }
    for &pad in PAD_CODEWORDS.iter().cycle() {
        if buffer.len() >= capacity {
            break;
        }
        buffer.put(pad as u32, 8);
    }

    Ok(buffer)
}

/// Final codeword sequence: data split into RS blocks, ECC computed per
/// block, both interleaved column-wise across blocks.
fn create_codewords(
    segments: &[ByteSegment],
    version: Version,
    ec_level: ECLevel,
) -> Result<Vec<u8>, EncodeError> {
    let blocks = rs_blocks(version, ec_level);
    let data = build_data_stream(segments, version, ec_level)?.into_bytes();
    Ok(interleave(&blocks, &data))
}

fn interleave(blocks: &[RsBlock], data: &[u8]) -> Vec<u8> {
    let mut data_blocks: Vec<&[u8]> = Vec::with_capacity(blocks.len());
    let mut ecc_blocks: Vec<Vec<u8>> = Vec::with_capacity(blocks.len());

    let mut offset = 0;
    for block in blocks {
        let chunk = &data[offset..offset + block.data_count];
        offset += block.data_count;
        ecc_blocks.push(ReedSolomonEncoder::new(block.ec_count()).encode(chunk));
        data_blocks.push(chunk);
    }

    let total: usize = blocks.iter().map(|b| b.total_count).sum();
    let max_data = blocks.iter().map(|b| b.data_count).max().unwrap_or(0);
    let max_ecc = blocks.iter().map(|b| b.ec_count()).max().unwrap_or(0);

    let mut codewords = Vec::with_capacity(total);
    for i in 0..max_data {
        for chunk in &data_blocks {
            if let Some(&byte) = chunk.get(i) {
                codewords.push(byte);
            }
        }
    }
    for i in 0..max_ecc {
        for ecc in &ecc_blocks {
            if let Some(&byte) = ecc.get(i) {
                codewords.push(byte);
            }
        }
    }

    debug_assert_eq!(codewords.len(), total);
    codewords
}
