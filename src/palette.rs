use crate::color::Color;
use crate::config::{
    CUBE_FIRST_INDEX, CUBE_LEVELS, GRAY_FIRST_INDEX, GRAY_START, GRAY_STEP, GRAY_STEPS,
    PALETTE_SIZE,
};
use lazy_static::lazy_static;

/// One of the 240 non-basic xterm colours together with its palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub color: Color,
    pub index: u8,
}

lazy_static! {
    /// Indices 16..=255 in ascending order: the 6x6x6 cube (red-major, then
    /// green, then blue) followed by the 24-step grayscale ramp.
    pub static ref PALETTE: Vec<PaletteEntry> = build_palette();
}

fn build_palette() -> Vec<PaletteEntry> {
    let mut entries = Vec::with_capacity(PALETTE_SIZE);
    let mut index = CUBE_FIRST_INDEX;

    for &r in &CUBE_LEVELS {
        for &g in &CUBE_LEVELS {
            for &b in &CUBE_LEVELS {
                entries.push(PaletteEntry {
                    color: Color::new(r, g, b),
                    index,
                });
                index += 1;
            }
        }
    }

    for step in 0..GRAY_STEPS {
        let level = GRAY_START + step * GRAY_STEP;
        entries.push(PaletteEntry {
            color: Color::new(level, level, level),
            index: GRAY_FIRST_INDEX + step,
        });
    }

    entries
}

/// Returns the palette entry closest to `query` by squared RGB distance.
///
/// The scan runs in index order and keeps the first minimum, so on a tie the
/// lowest index wins.
pub fn nearest(query: &Color) -> &'static PaletteEntry {
    let found = PALETTE
        .iter()
        .min_by_key(|entry| query.distance(&entry.color))
        .unwrap_or(&PALETTE[0]);
    log::debug!(
        "{} -> {} ({}), distance {}",
        query,
        found.color,
        found.index,
        query.distance(&found.color)
    );
    found
}
