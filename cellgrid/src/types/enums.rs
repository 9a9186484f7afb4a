#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// How [`Window::print`](crate::Window::print) continues when a line is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wrap {
    /// Clip at the right edge; only `'\n'` starts a new row.
    None,
    /// Break between any two graphemes.
    Grapheme,
    /// Break at word boundaries, falling back to graphemes for long words.
    #[default]
    Word,
}

/// Attributes a terminal applies on top of the colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub underline: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            underline: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}
