//! Table state that persists across draws.

use std::collections::BTreeSet;
use std::fmt;

use cellgrid::{Color, TextAlign, TextStyle, Window};

use crate::error::BoxError;
use crate::header::{ColumnSelection, HeaderSource};
use crate::width::WidthPolicy;

/// Draws extra detail below the active row.
///
/// Called at most once per draw with a window that starts on the line
/// under the active row and extends to the bottom of the table. Returns the
/// number of lines it used; rows below are pushed down by that much.
pub trait ActiveContent {
    fn draw(&mut self, win: &mut Window<'_>, row: usize) -> Result<u16, BoxError>;
}

impl<F> ActiveContent for F
where
    F: FnMut(&mut Window<'_>, usize) -> Result<u16, BoxError>,
{
    fn draw(&mut self, win: &mut Window<'_>, row: usize) -> Result<u16, BoxError> {
        self(win, row)
    }
}

/// Colors for the header and body.
///
/// Headers and rows alternate between the two entries of their background
/// pairs. The active row wins over a selected row, which wins over the
/// stripe.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub header_bg: [Color; 2],
    pub header_fg: Color,
    pub header_text: TextStyle,
    pub row_bg: [Color; 2],
    pub row_fg: Color,
    pub active_bg: Color,
    pub active_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            header_bg: [Color::rgb(64, 64, 64), Color::rgb(8, 8, 24)],
            header_fg: Color::rgb(255, 255, 255),
            header_text: TextStyle::new().bold(),
            row_bg: [Color::rgb(8, 8, 8), Color::rgb(0, 0, 0)],
            row_fg: Color::rgb(255, 255, 255),
            active_bg: Color::rgb(72, 160, 160),
            active_fg: Color::rgb(0, 0, 0),
            selected_bg: Color::rgb(6, 66, 26),
            selected_fg: Color::rgb(255, 255, 255),
        }
    }
}

impl TableStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header_bg(mut self, even: impl Into<Color>, odd: impl Into<Color>) -> Self {
        self.header_bg = [even.into(), odd.into()];
        self
    }

    pub fn header_fg(mut self, color: impl Into<Color>) -> Self {
        self.header_fg = color.into();
        self
    }

    pub fn header_text(mut self, text_style: TextStyle) -> Self {
        self.header_text = text_style;
        self
    }

    pub fn row_bg(mut self, even: impl Into<Color>, odd: impl Into<Color>) -> Self {
        self.row_bg = [even.into(), odd.into()];
        self
    }

    pub fn row_fg(mut self, color: impl Into<Color>) -> Self {
        self.row_fg = color.into();
        self
    }

    pub fn active(mut self, bg: impl Into<Color>, fg: impl Into<Color>) -> Self {
        self.active_bg = bg.into();
        self.active_fg = fg.into();
        self
    }

    pub fn selected(mut self, bg: impl Into<Color>, fg: impl Into<Color>) -> Self {
        self.selected_bg = bg.into();
        self.selected_fg = fg.into();
        self
    }
}

/// Mutable view state of one table.
///
/// Created once and handed to [`draw`](crate::draw) every frame. The caller
/// moves `active_row`/`active_col` and edits `selected` between frames; the
/// draw keeps them in range and updates `start`.
pub struct TableState {
    /// Whether the table has focus. Unfocused tables draw no active
    /// highlight.
    pub active: bool,
    pub active_row: usize,
    pub active_col: usize,
    /// First visible row.
    pub start: usize,
    pub selected: BTreeSet<usize>,
    pub style: TableStyle,
    pub width_policy: WidthPolicy,
    pub header_source: HeaderSource,
    pub columns: ColumnSelection,
    pub header_align: TextAlign,
    pub cell_align: TextAlign,
    /// Lines above the header row inside the window.
    pub y_offset: u16,
    pub(crate) active_content: Option<Box<dyn ActiveContent>>,
    pub(crate) active_extra_height: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            active: false,
            active_row: 0,
            active_col: 0,
            start: 0,
            selected: BTreeSet::new(),
            style: TableStyle::default(),
            width_policy: WidthPolicy::default(),
            header_source: HeaderSource::default(),
            columns: ColumnSelection::default(),
            header_align: TextAlign::Left,
            cell_align: TextAlign::Left,
            y_offset: 0,
            active_content: None,
            active_extra_height: 0,
        }
    }
}

impl fmt::Debug for TableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableState")
            .field("active", &self.active)
            .field("active_row", &self.active_row)
            .field("active_col", &self.active_col)
            .field("start", &self.start)
            .field("selected", &self.selected)
            .field("width_policy", &self.width_policy)
            .field("header_source", &self.header_source)
            .field("columns", &self.columns)
            .field("active_content", &self.active_content.is_some())
            .field("active_extra_height", &self.active_extra_height)
            .finish_non_exhaustive()
    }
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn width_policy(mut self, policy: WidthPolicy) -> Self {
        self.width_policy = policy;
        self
    }

    pub fn header_source(mut self, source: HeaderSource) -> Self {
        self.header_source = source;
        self
    }

    /// Use these header strings instead of the record's field names.
    pub fn headers<I, S>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_source(HeaderSource::Custom(
            headers.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn columns(mut self, columns: ColumnSelection) -> Self {
        self.columns = columns;
        self
    }

    pub fn header_align(mut self, align: TextAlign) -> Self {
        self.header_align = align;
        self
    }

    pub fn cell_align(mut self, align: TextAlign) -> Self {
        self.cell_align = align;
        self
    }

    pub fn y_offset(mut self, y_offset: u16) -> Self {
        self.y_offset = y_offset;
        self
    }

    /// Expand the active row with `content`.
    pub fn active_content<F>(mut self, content: F) -> Self
    where
        F: FnMut(&mut Window<'_>, usize) -> Result<u16, BoxError> + 'static,
    {
        self.active_content = Some(Box::new(content));
        self
    }

    /// Like [`active_content`](Self::active_content), for types carrying
    /// their own context.
    pub fn active_content_handler(mut self, content: impl ActiveContent + 'static) -> Self {
        self.active_content = Some(Box::new(content));
        self
    }

    pub fn clear_active_content(&mut self) {
        self.active_content = None;
        self.active_extra_height = 0;
    }

    /// Lines the active-row expansion used in the last draw.
    pub fn active_extra_height(&self) -> usize {
        self.active_extra_height
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.selected.contains(&row)
    }

    /// Select `row` if it is not selected, deselect it otherwise. Returns
    /// whether the row is now selected.
    pub fn toggle_selected(&mut self, row: usize) -> bool {
        if self.selected.remove(&row) {
            false
        } else {
            self.selected.insert(row);
            true
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_selection() {
        let mut state = TableState::new();
        assert!(state.toggle_selected(3));
        assert!(state.is_selected(3));
        assert!(!state.toggle_selected(3));
        assert!(!state.is_selected(3));
    }

    #[test]
    fn test_builder_sets_custom_headers() {
        let state = TableState::new().headers(["A", "B"]).active(true);
        assert_eq!(
            state.header_source,
            HeaderSource::Custom(vec!["A".to_string(), "B".to_string()])
        );
        assert!(state.active);
    }

    #[test]
    fn test_clearing_content_resets_extra_height() {
        let mut state = TableState::new().active_content(|_win: &mut Window<'_>, _row| Ok(2));
        state.active_extra_height = 2;
        state.clear_active_content();
        assert_eq!(state.active_extra_height(), 0);
        assert!(state.active_content.is_none());
    }
}
