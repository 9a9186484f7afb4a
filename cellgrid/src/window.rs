//! Clipped drawing regions over a [`Buffer`].

use crate::buffer::{Buffer, Cell};
use crate::layout::Rect;
use crate::text::{display_width, grapheme_width, graphemes};
use crate::types::{Rgb, Style, Wrap};

use unicode_segmentation::UnicodeSegmentation;

/// A run of text printed with one style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub style: Style,
}

impl<'a> Segment<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Where printing stopped, relative to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrintResult {
    pub col: u16,
    pub row: u16,
    /// Number of cells written, continuation cells included.
    pub cells: usize,
    /// Some text did not fit and was dropped.
    pub overflow: bool,
}

/// A rectangular view into a buffer.
///
/// Coordinates passed to a window are relative to its top-left corner and
/// everything it draws is clipped to its area. Child windows borrow their
/// parent mutably, so only one region draws at a time.
#[derive(Debug)]
pub struct Window<'b> {
    buf: &'b mut Buffer,
    area: Rect,
}

impl<'b> Window<'b> {
    /// A window covering the whole buffer.
    pub fn new(buf: &'b mut Buffer) -> Self {
        let area = Rect::from_size(buf.width(), buf.height());
        Self { buf, area }
    }

    /// Absolute area of this window inside the buffer.
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn width(&self) -> u16 {
        self.area.width
    }

    pub fn height(&self) -> u16 {
        self.area.height
    }

    /// A child region at `(x, y)` relative to this window.
    ///
    /// The child is clipped to this window, so an offset past the edge
    /// yields an empty region rather than an error.
    pub fn child(&mut self, x: u16, y: u16, width: u16, height: u16) -> Window<'_> {
        Window {
            area: self.area.inner(x, y, width, height),
            buf: &mut *self.buf,
        }
    }

    /// Reset every cell of the window to a blank with background `bg`.
    pub fn fill(&mut self, bg: Rgb) {
        for y in self.area.y..self.area.bottom() {
            for x in self.area.x..self.area.right() {
                if let Some(cell) = self.buf.get_mut(x, y) {
                    cell.symbol.clear();
                    cell.symbol.push(' ');
                    cell.bg = bg;
                    cell.wide_continuation = false;
                }
            }
        }
    }

    /// The cell at `(col, row)` relative to the window, if inside it.
    pub fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.area.width || row >= self.area.height {
            return None;
        }
        self.buf.get(self.area.x + col, self.area.y + row)
    }

    /// Print styled segments starting at the top-left corner.
    pub fn print(&mut self, segments: &[Segment<'_>], wrap: Wrap) -> PrintResult {
        let mut cursor = Cursor::default();
        for segment in segments {
            match wrap {
                Wrap::Word => self.print_words(segment, &mut cursor),
                Wrap::Grapheme | Wrap::None => {
                    for grapheme in graphemes(segment.text) {
                        self.put(grapheme, segment.style, wrap, &mut cursor);
                    }
                }
            }
            if cursor.row >= self.area.height {
                cursor.overflow = true;
                break;
            }
        }
        if cursor.overflow {
            log::trace!(
                "[print] Text clipped at {:?} after {} cells",
                self.area,
                cursor.cells
            );
        }
        PrintResult {
            col: cursor.col,
            row: cursor.row,
            cells: cursor.cells,
            overflow: cursor.overflow,
        }
    }

    fn print_words(&mut self, segment: &Segment<'_>, cursor: &mut Cursor) {
        for word in segment.text.split_word_bounds() {
            if word == "\n" || word == "\r\n" {
                cursor.newline(false);
                continue;
            }
            let width = display_width(word);
            if word.chars().all(char::is_whitespace) {
                if cursor.col == 0 && cursor.wrapped {
                    // leading space of a soft-wrapped line
                    continue;
                }
                if usize::from(cursor.col) + width > usize::from(self.area.width) {
                    cursor.newline(true);
                    continue;
                }
            } else if cursor.col > 0
                && usize::from(cursor.col) + width > usize::from(self.area.width)
                && width <= usize::from(self.area.width)
            {
                cursor.newline(true);
            }
            for grapheme in graphemes(word) {
                self.put(grapheme, segment.style, Wrap::Word, cursor);
            }
        }
    }

    fn put(&mut self, grapheme: &str, style: Style, wrap: Wrap, cursor: &mut Cursor) {
        if grapheme == "\n" || grapheme == "\r\n" {
            cursor.newline(false);
            return;
        }
        if cursor.row >= self.area.height {
            cursor.overflow = true;
            return;
        }
        let width = grapheme_width(grapheme) as u16;
        if width == 0 {
            return;
        }
        if cursor.col.saturating_add(width) > self.area.width {
            match wrap {
                Wrap::None => {
                    cursor.overflow = true;
                    return;
                }
                Wrap::Grapheme | Wrap::Word => {
                    cursor.newline(true);
                    if cursor.row >= self.area.height || width > self.area.width {
                        cursor.overflow = true;
                        return;
                    }
                }
            }
        }

        let x = self.area.x + cursor.col;
        let y = self.area.y + cursor.row;
        let Some(existing) = self.buf.get(x, y) else {
            cursor.overflow = true;
            return;
        };
        let fg = style.foreground.unwrap_or(existing.fg);
        let bg = style.background.unwrap_or(existing.bg);
        self.buf.set(
            x,
            y,
            Cell::new(grapheme)
                .with_fg(fg)
                .with_bg(bg)
                .with_style(style.text_style),
        );
        for extra in 1..width {
            self.buf
                .set(x + extra, y, Cell::continuation(fg, bg, style.text_style));
        }
        cursor.col += width;
        cursor.cells += usize::from(width);
    }
}

#[derive(Debug, Default)]
struct Cursor {
    col: u16,
    row: u16,
    cells: usize,
    overflow: bool,
    wrapped: bool,
}

impl Cursor {
    fn newline(&mut self, soft: bool) {
        self.col = 0;
        self.row = self.row.saturating_add(1);
        self.wrapped = soft;
    }
}
