//! Random color schemes, regenerated on every reset and on demand.
//!
//! Purely cosmetic: nothing in the game core reads these.

use rand::Rng;
use ratatui::style::Color;

/// Named colors used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    /// Fill behind the playing field
    pub wallpaper: Color,
    /// Field border
    pub border: Color,
    /// Snake body segments
    pub snake: Color,
    /// Snake head accent
    pub snake_head: Color,
    /// The seed
    pub seed: Color,
}

impl ColorScheme {
    /// Roll a fresh scheme: dark wallpaper, bright foregrounds
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            wallpaper: random_dark(rng),
            border: random_bright(rng),
            snake: random_bright(rng),
            snake_head: random_bright(rng),
            seed: random_bright(rng),
        }
    }
}

fn random_dark(rng: &mut impl Rng) -> Color {
    Color::Rgb(rng.gen_range(0..64), rng.gen_range(0..64), rng.gen_range(0..64))
}

fn random_bright(rng: &mut impl Rng) -> Color {
    Color::Rgb(
        rng.gen_range(128..=255),
        rng.gen_range(128..=255),
        rng.gen_range(128..=255),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallpaper_is_darker_than_foregrounds() {
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let scheme = ColorScheme::random(&mut rng);
            let (Color::Rgb(r, g, b), Color::Rgb(sr, sg, sb)) = (scheme.wallpaper, scheme.snake)
            else {
                panic!("schemes are always rgb");
            };
            assert!(r < 64 && g < 64 && b < 64);
            assert!(sr >= 128 && sg >= 128 && sb >= 128);
        }
    }
}
