use crate::models::{ECLevel, Version};

/// One Reed-Solomon block: total codewords and how many carry data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsBlock {
    pub total_count: usize,
    pub data_count: usize,
}

impl RsBlock {
    /// Error correction codewords in this block
    pub fn ec_count(&self) -> usize {
        self.total_count - self.data_count
    }
}

// Tables from the QR Code specification (Model 2), versions 1-9.
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[u8; 10]; 4] = [
    [0, 7, 10, 15, 20, 26, 18, 20, 24, 30],  // Low
    [0, 10, 16, 26, 18, 24, 16, 18, 22, 22], // Medium
    [0, 13, 22, 18, 26, 18, 24, 18, 22, 20], // Quartile
    [0, 17, 28, 22, 16, 22, 28, 26, 26, 24], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[u8; 10]; 4] = [
    [0, 1, 1, 1, 1, 1, 2, 2, 2, 2], // Low
    [0, 1, 1, 1, 2, 2, 4, 4, 4, 5], // Medium
    [0, 1, 1, 2, 2, 4, 4, 6, 6, 8], // Quartile
    [0, 1, 1, 2, 4, 4, 4, 5, 6, 8], // High
];

// Codewords per symbol (data + ECC), index: [version]
const TOTAL_CODEWORDS: [u16; 10] = [0, 26, 44, 70, 100, 134, 172, 196, 242, 292];

/// Total codewords (data + ECC) in a symbol of `version`
pub fn total_codewords(version: Version) -> usize {
    TOTAL_CODEWORDS[version.number() as usize] as usize
}

/// Block layout for a version and level.
///
/// When the codewords do not split evenly, the trailing blocks carry one
/// extra data codeword; every block has the same ECC count.
pub fn rs_blocks(version: Version, ec_level: ECLevel) -> Vec<RsBlock> {
    let idx = ec_level.table_index();
    let v = version.number() as usize;
    let ecc = ECC_CODEWORDS_PER_BLOCK[idx][v] as usize;
    let num_blocks = NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize;
    let total = total_codewords(version);

    let short_total = total / num_blocks;
    let num_short = num_blocks - total % num_blocks;

    (0..num_blocks)
        .map(|i| {
            let total_count = if i < num_short {
                short_total
            } else {
                short_total + 1
            };
            RsBlock {
                total_count,
                data_count: total_count - ecc,
            }
        })
        .collect()
}

/// Data codewords available at a version and level
pub fn data_codewords(version: Version, ec_level: ECLevel) -> usize {
    rs_blocks(version, ec_level).iter().map(|b| b.data_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).expect("supported version")
    }

    #[test]
    fn test_level_m_capacities() {
        let expected = [16, 28, 44, 64, 86, 108, 124, 154, 182];
        for (version, want) in Version::all().zip(expected) {
            assert_eq!(data_codewords(version, ECLevel::M), want, "version {version}");
        }
    }

    #[test]
    fn test_level_m_block_layouts() {
        assert_eq!(
            rs_blocks(v(1), ECLevel::M),
            vec![RsBlock { total_count: 26, data_count: 16 }]
        );
        assert_eq!(
            rs_blocks(v(4), ECLevel::M),
            vec![RsBlock { total_count: 50, data_count: 32 }; 2]
        );
        let v9 = rs_blocks(v(9), ECLevel::M);
        assert_eq!(v9.len(), 5);
        assert_eq!(v9.iter().map(|b| b.data_count).collect::<Vec<_>>(), vec![36, 36, 36, 37, 37]);
        assert!(v9.iter().all(|b| b.ec_count() == 22));
    }

    #[test]
    fn test_blocks_cover_all_codewords() {
        for level in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
            for version in Version::all() {
                let blocks = rs_blocks(version, level);
                let total: usize = blocks.iter().map(|b| b.total_count).sum();
                assert_eq!(total, total_codewords(version));
            }
        }
    }

    #[test]
    fn test_quartile_and_high_small_versions() {
        assert_eq!(
            rs_blocks(v(3), ECLevel::Q),
            vec![RsBlock { total_count: 35, data_count: 17 }; 2]
        );
        assert_eq!(
            rs_blocks(v(4), ECLevel::H),
            vec![RsBlock { total_count: 25, data_count: 9 }; 4]
        );
    }
}
