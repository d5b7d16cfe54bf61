/// Function pattern placement (finder, timing, alignment)
use crate::models::{ModuleGrid, Version};

/// Paint all structural patterns for `version` onto a fresh grid.
///
/// Order matters: timing and alignment patterns never overwrite modules
/// that are already set.
pub fn place_function_patterns(grid: &mut ModuleGrid, version: Version) {
    let size = grid.size();
    place_finder_pattern(grid, 0, 0);
    place_finder_pattern(grid, size - 7, 0);
    place_finder_pattern(grid, 0, size - 7);
    place_timing_patterns(grid);
    place_alignment_patterns(grid, version);
}

/// Whether (r, c) inside a 7x7 finder is dark: outer ring or 3x3 core
pub fn finder_module(r: usize, c: usize) -> bool {
    let ring = (r <= 6 && (c == 0 || c == 6)) || (c <= 6 && (r == 0 || r == 6));
    let core = (2..=4).contains(&r) && (2..=4).contains(&c);
    ring || core
}

/// 7x7 finder with top-left corner at (row, col), plus the light
/// separator ring clipped to the grid.
fn place_finder_pattern(grid: &mut ModuleGrid, row: usize, col: usize) {
    let size = grid.size() as isize;
    for r in -1..=7isize {
        let y = row as isize + r;
        if y < 0 || y >= size {
            continue;
        }
        for c in -1..=7isize {
            let x = col as isize + c;
            if x < 0 || x >= size {
                continue;
            }
            let inside = (0..=6).contains(&r) && (0..=6).contains(&c);
            let dark = inside && finder_module(r as usize, c as usize);
            grid.set(y as usize, x as usize, dark);
        }
    }
}

/// Row 6 and column 6, dark on even indices
fn place_timing_patterns(grid: &mut ModuleGrid) {
    let size = grid.size();
    for i in 8..size.saturating_sub(8) {
        grid.set_if_unset(i, 6, i % 2 == 0);
        grid.set_if_unset(6, i, i % 2 == 0);
    }
}

/// Alignment pattern centers for a given version.
///
/// Only the small-version rows of the standard table are kept; any version
/// past 4 reuses the version 5 row.
pub fn alignment_pattern_positions(version: Version) -> &'static [usize] {
    match version.number() {
        1 => &[],
        2 => &[6, 18],
        3 => &[6, 22],
        4 => &[6, 26],
        _ => &[6, 30],
    }
}

fn place_alignment_patterns(grid: &mut ModuleGrid, version: Version) {
    let positions = alignment_pattern_positions(version);
    for &cy in positions {
        for &cx in positions {
            // Centers on finder or timing modules are skipped
            if grid.is_set(cy, cx) {
                continue;
            }
            // 5x5 alignment pattern
            for dy in -2..=2isize {
                for dx in -2..=2isize {
                    let dark = dy.abs() == 2 || dx.abs() == 2 || (dy == 0 && dx == 0);
                    let y = cy as isize + dy;
                    let x = cx as isize + dx;
                    if y >= 0 && x >= 0 {
                        grid.set_if_unset(y as usize, x as usize, dark);
                    }
                }
            }
        }
    }
}
