#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

impl Color {
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_passes_through() {
        assert_eq!(Color::rgb(12, 34, 56).to_rgb(), Rgb::new(12, 34, 56));
    }

    #[test]
    fn test_oklch_extremes_map_to_black_and_white() {
        assert_eq!(Color::oklch(0.0, 0.0, 0.0).to_rgb(), Rgb::new(0, 0, 0));
        let white = Color::oklch(1.0, 0.0, 0.0).to_rgb();
        assert!(white.r >= 254 && white.g >= 254 && white.b >= 254);
    }
}
