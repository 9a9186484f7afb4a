use super::{Color, Rgb, TextStyle};

/// Style applied to printed text.
///
/// A `None` color keeps whatever the cell already holds, so text printed
/// over a filled background inherits it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreground(mut self, color: impl Into<Color>) -> Self {
        self.foreground = Some(color.into().to_rgb());
        self
    }

    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into().to_rgb());
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }
}
