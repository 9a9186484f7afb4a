#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// A sub-rectangle at a relative offset, clipped to `self`.
    pub fn inner(self, x: u16, y: u16, width: u16, height: u16) -> Self {
        let x = self.x.saturating_add(x).min(self.right());
        let y = self.y.saturating_add(y).min(self.bottom());
        Self {
            x,
            y,
            width: width.min(self.right() - x),
            height: height.min(self.bottom() - y),
        }
    }
}
