/// Codeword placement into the QR module grid
use crate::models::ModuleGrid;

/// Write codeword bits into every unset module following the zigzag pattern.
///
/// Column pairs are walked right to left, skipping the vertical timing
/// column; rows run upward first and the direction flips at each grid edge.
/// Bits are taken MSB first. Once the codewords are exhausted the remaining
/// unset modules are filled light. Returns the number of data bits placed.
pub fn map_codewords(grid: &mut ModuleGrid, codewords: &[u8]) -> usize {
    let dimension = grid.size() as i32;
    if dimension == 0 {
        return 0;
    }

    let total_bits = codewords.len() * 8;
    let mut bit_index = 0usize;
    let mut upward = true;
    let mut row = dimension - 1;
    let mut col = dimension - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
        }

        loop {
            for c in [col, col - 1] {
                let (y, x) = (row as usize, c as usize);
                if grid.is_set(y, x) {
                    continue;
                }
                let dark = bit_index < total_bits
                    && (codewords[bit_index / 8] >> (7 - bit_index % 8)) & 1 == 1;
                grid.set(y, x, dark);
                bit_index += 1;
            }

            let next = if upward { row - 1 } else { row + 1 };
            if next < 0 || next >= dimension {
                upward = !upward;
                break;
            }
            row = next;
        }

        col -= 2;
    }

    // Column 6 is never visited; on a grid without timing patterns it is
    // still unset here
    grid.fill_unset(false);
    bit_index.min(total_bits)
}
