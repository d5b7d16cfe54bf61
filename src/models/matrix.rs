/// State of a single QR module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    /// Not written yet
    Unset,
    /// Dark (black) module
    Dark,
    /// Light (white) module
    Light,
}

/// Compact square grid of QR modules
///
/// Two packed bit planes track whether a cell has been written and whether
/// a written cell is dark. Reads and writes outside the grid are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    filled: Vec<u8>,
    dark: Vec<u8>,
}

impl ModuleGrid {
    /// Create a grid of `size` x `size` unset modules
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size).div_ceil(8);
        Self {
            size,
            filled: vec![0; bytes_needed],
            dark: vec![0; bytes_needed],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    fn locate(&self, row: usize, col: usize) -> Option<(usize, u8)> {
        if row >= self.size || col >= self.size {
            return None;
        }
        let index = row * self.size + col;
        Some((index / 8, 1 << (index % 8)))
    }

    /// Module state at (row, col); out-of-range cells read as unset
    pub fn module(&self, row: usize, col: usize) -> Module {
        let Some((byte_index, mask)) = self.locate(row, col) else {
            return Module::Unset;
        };
        if self.filled[byte_index] & mask == 0 {
            Module::Unset
        } else if self.dark[byte_index] & mask != 0 {
            Module::Dark
        } else {
            Module::Light
        }
    }

    /// Whether (row, col) has been written
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.module(row, col) != Module::Unset
    }

    /// Whether (row, col) is dark; unset and out-of-range cells are light
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        self.module(row, col) == Module::Dark
    }

    /// Write a module, overwriting any previous state
    pub fn set(&mut self, row: usize, col: usize, dark: bool) {
        let Some((byte_index, mask)) = self.locate(row, col) else {
            return;
        };
        self.filled[byte_index] |= mask;
        if dark {
            self.dark[byte_index] |= mask;
        } else {
            self.dark[byte_index] &= !mask;
        }
    }

    /// Write a module only if it is still unset. Returns true if written.
    pub fn set_if_unset(&mut self, row: usize, col: usize, dark: bool) -> bool {
        if self.locate(row, col).is_none() || self.is_set(row, col) {
            return false;
        }
        self.set(row, col, dark);
        true
    }

    /// Write every still-unset module with `dark`
    pub fn fill_unset(&mut self, dark: bool) {
        for row in 0..self.size {
            for col in 0..self.size {
                self.set_if_unset(row, col, dark);
            }
        }
    }

    /// Number of modules not written yet
    pub fn unset_count(&self) -> usize {
        let mut count = 0;
        for row in 0..self.size {
            for col in 0..self.size {
                if !self.is_set(row, col) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Number of dark modules
    pub fn dark_count(&self) -> usize {
        let mut count = 0;
        for row in 0..self.size {
            for col in 0..self.size {
                if self.is_dark(row, col) {
                    count += 1;
                }
            }
        }
        count
    }
}

impl Default for ModuleGrid {
    fn default() -> Self {
        Self::new(0)
    }
}
