//! Material colour palette for avatars and accents.
//!
//! Colours are ARGB packed into a `u32`.

use rand::seq::SliceRandom;

const PALETTE: [u32; 16] = [
    0xFFF4_4336, // Red
    0xFFE9_1E63, // Pink
    0xFF9C_27B0, // Purple
    0xFF67_3AB7, // Deep Purple
    0xFF3F_51B5, // Indigo
    0xFF21_96F3, // Blue
    0xFF03_A9F4, // Light Blue
    0xFF00_BCD4, // Cyan
    0xFF00_9688, // Teal
    0xFF4C_AF50, // Green
    0xFF8B_C34A, // Light Green
    0xFFCD_DC39, // Lime
    0xFFFF_9800, // Orange
    0xFFFF_5722, // Deep Orange
    0xFF79_5548, // Brown
    0xFF60_7D8B, // Blue Grey
];

pub fn colors() -> &'static [u32] {
    &PALETTE
}

pub fn random_color() -> u32 {
    PALETTE
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(PALETTE[0])
}

/// Same text, same colour, across runs and platforms.
pub fn color_for(text: &str) -> u32 {
    let hash = text
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)));
    PALETTE[hash.unsigned_abs() as usize % PALETTE.len()]
}

/// Replace the alpha channel.
pub fn with_alpha(color: u32, alpha: u8) -> u32 {
    (u32::from(alpha) << 24) | (color & 0x00FF_FFFF)
}

/// Colour at `index`, wrapping around the palette.
pub fn color_at(index: usize) -> u32 {
    PALETTE[index % PALETTE.len()]
}

pub fn random_color_with_alpha(alpha: u8) -> u32 {
    with_alpha(random_color(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_for_is_stable() {
        assert_eq!(color_for("ada@example.com"), color_for("ada@example.com"));
        // "a".hashCode() == 97; 97 % 16 == 1
        assert_eq!(color_for("a"), PALETTE[1]);
        assert_eq!(color_for(""), PALETTE[0]);
    }

    #[test]
    fn color_at_wraps() {
        assert_eq!(color_at(0), color_at(16));
        assert_eq!(color_at(17), PALETTE[1]);
    }

    #[test]
    fn alpha_replaces_top_byte() {
        assert_eq!(with_alpha(0xFFF4_4336, 0x80), 0x80F4_4336);
        assert_eq!(random_color_with_alpha(0) >> 24, 0);
    }

    #[test]
    fn random_color_comes_from_palette() {
        for _ in 0..32 {
            assert!(colors().contains(&random_color()));
        }
    }
}
