//! Deterministic group colors.

use ratatui::style::Color;

/// Modulus of the rolling name hash
const HASH_MODULUS: u64 = 2_147_483_647;

/// Fixed palette of muted marker colors, as RGB
pub const PALETTE: [(u8, u8, u8); 8] = [
    (0xb8, 0xc1, 0xc8),
    (0xd6, 0xc9, 0xb8),
    (0xcf, 0xd6, 0xc1),
    (0xc8, 0xc0, 0xb4),
    (0xc9, 0xd4, 0xd6),
    (0xd9, 0xc6, 0xcf),
    (0xd3, 0xd9, 0xcc),
    (0xc8, 0xd0, 0xd8),
];

/// A palette entry assigned to a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupColor {
    /// Index into [`PALETTE`]
    pub index: usize,
}

impl GroupColor {
    /// Terminal color for this entry
    pub fn color(self) -> Color {
        let (r, g, b) = PALETTE[self.index];
        Color::Rgb(r, g, b)
    }

    /// CSS-style hex string, e.g. `#b8c1c8`
    pub fn hex(self) -> String {
        let (r, g, b) = PALETTE[self.index];
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Rolling hash over the UTF-16 code units of `value`, seeded at zero
pub fn hash_name(value: &str) -> u64 {
    value
        .encode_utf16()
        .fold(0u64, |acc, unit| (acc * 31 + u64::from(unit)) % HASH_MODULUS)
}

/// Pick the palette color for a group name
pub fn color_for(name: &str) -> GroupColor {
    GroupColor {
        index: (hash_name(name) % PALETTE.len() as u64) as usize,
    }
}
