// File: crates/barchart-core/src/palette.rs
// Summary: Named discrete color palettes for categorical bar fills.

use skia_safe as skia;

use crate::error::ChartError;

/// A named list of bar colors. Bars cycle through the list by index.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub name: &'static str,
    colors: &'static [(u8, u8, u8)],
}

impl Palette {
    pub fn color(&self, index: usize) -> skia::Color {
        let (r, g, b) = self.colors[index % self.colors.len()];
        skia::Color::from_argb(255, r, g, b)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn bright() -> Self {
        Self {
            name: "bright",
            colors: &[
                (0x02, 0x3E, 0xFF), // blue
                (0xFF, 0x7C, 0x00), // orange
                (0x1A, 0xC9, 0x38), // green
                (0xE8, 0x00, 0x0B), // red
                (0x8B, 0x2B, 0xE2), // purple
                (0x9F, 0x48, 0x00), // brown
                (0xF1, 0x4C, 0xC1), // pink
                (0xA3, 0xA3, 0xA3), // gray
                (0xFF, 0xC4, 0x00), // yellow
                (0x00, 0xD7, 0xFF), // cyan
            ],
        }
    }

    pub fn deep() -> Self {
        Self {
            name: "deep",
            colors: &[
                (0x4C, 0x72, 0xB0),
                (0xDD, 0x84, 0x52),
                (0x55, 0xA8, 0x68),
                (0xC4, 0x4E, 0x52),
                (0x81, 0x72, 0xB3),
                (0x93, 0x78, 0x60),
                (0xDA, 0x8B, 0xC3),
                (0x8C, 0x8C, 0x8C),
                (0xCC, 0xB9, 0x74),
                (0x64, 0xB5, 0xCD),
            ],
        }
    }

    pub fn muted() -> Self {
        Self {
            name: "muted",
            colors: &[
                (0x48, 0x78, 0xD0),
                (0xEE, 0x85, 0x4A),
                (0x6A, 0xCC, 0x64),
                (0xD6, 0x5F, 0x5F),
                (0x95, 0x6C, 0xB4),
                (0x8C, 0x61, 0x3C),
                (0xDC, 0x7E, 0xC0),
                (0x79, 0x79, 0x79),
                (0xD5, 0xBB, 0x67),
                (0x82, 0xC6, 0xE2),
            ],
        }
    }

    pub fn pastel() -> Self {
        Self {
            name: "pastel",
            colors: &[
                (0xA1, 0xC9, 0xF4),
                (0xFF, 0xB4, 0x82),
                (0x8D, 0xE5, 0xA1),
                (0xFF, 0x9F, 0x9B),
                (0xD0, 0xBB, 0xFF),
                (0xDE, 0xBB, 0x9B),
                (0xFA, 0xB0, 0xE4),
                (0xCF, 0xCF, 0xCF),
                (0xFF, 0xFE, 0xA3),
                (0xB9, 0xF2, 0xF0),
            ],
        }
    }

    pub fn pastel1() -> Self {
        Self {
            name: "pastel1",
            colors: &[
                (0xFB, 0xB4, 0xAE), // rose
                (0xB3, 0xCD, 0xE3), // blue
                (0xCC, 0xEB, 0xC5), // green
                (0xDE, 0xCB, 0xE4), // lilac
                (0xFE, 0xD9, 0xA6), // apricot
                (0xFF, 0xFF, 0xCC), // cream
                (0xE5, 0xD8, 0xBD), // sand
                (0xFD, 0xDA, 0xEC), // pink
                (0xF2, 0xF2, 0xF2), // light gray
            ],
        }
    }
}

/// Return a list of built-in palette presets.
pub fn presets() -> Vec<Palette> {
    vec![
        Palette::bright(),
        Palette::deep(),
        Palette::muted(),
        Palette::pastel(),
        Palette::pastel1(),
    ]
}

/// Find a palette by `name`, case-insensitively. Unknown names are an error,
/// never a silent fallback.
pub fn find(name: &str) -> Result<Palette, ChartError> {
    presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ChartError::UnknownPalette(name.to_string()))
}
