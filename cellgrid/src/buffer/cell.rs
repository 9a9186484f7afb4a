use crate::types::{Rgb, TextStyle};

/// One character cell of the surface.
///
/// `symbol` holds a whole grapheme cluster. The cell to the right of a
/// double-width grapheme is marked `wide_continuation` and left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub symbol: String,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: String::from(" "),
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

impl Cell {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    pub fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub(crate) fn continuation(fg: Rgb, bg: Rgb, style: TextStyle) -> Self {
        Self {
            symbol: String::new(),
            fg,
            bg,
            style,
            wide_continuation: true,
        }
    }
}
