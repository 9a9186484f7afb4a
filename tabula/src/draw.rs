//! One full render pass of a table.

use bumpalo::Bump;
use cellgrid::text::{align_offset, display_width};
use cellgrid::{Color, Segment, Style, TextAlign, Window, Wrap};

use crate::error::{Error, Result};
use crate::format::{fit_to_width, format_value};
use crate::header;
use crate::record::Record;
use crate::source::{self, DataSource};
use crate::state::TableState;
use crate::viewport::Viewport;
use crate::width::{WidthPolicy, column_width};

/// Cells of blank space before header and cell text.
pub const CELL_INSET: u16 = 1;

/// Draw `source` into `win` as a table.
///
/// Order of work: rows are adapted, headers resolved, the header row laid
/// out, the viewport moved, then each visible row drawn with the active
/// row's expansion (if any) directly below it. Anything allocated for the
/// frame goes into `arena`, which the caller resets afterwards.
///
/// On error the draw stops where it is and `state` keeps its previous
/// values.
pub fn draw<'a, R: Record + 'a>(
    win: &mut Window<'_>,
    state: &mut TableState,
    source: impl Into<DataSource<'a, R>>,
    arena: Option<&'a Bump>,
) -> Result<()> {
    let rows = source::adapt(source.into(), arena).inspect_err(|err| {
        log::warn!("[table] Rejected data source: {err}");
    })?;
    let headers = header::resolve::<R>(&state.header_source, &state.columns);
    let active_col = header::clamp_active_column(state.active_col, headers.len());
    if active_col != state.active_col {
        log::warn!(
            "[table] Active column {} out of range for {} headers, clamped to {}",
            state.active_col,
            headers.len(),
            active_col
        );
    }

    let field_count = R::field_names().len();
    let drawn_fields = state.columns.fields(field_count).count();
    if drawn_fields != headers.len() {
        log::debug!(
            "[table] {} headers for {} drawn fields; rows follow the header count",
            headers.len(),
            drawn_fields
        );
    }

    let surface_width = win.width();
    let layout = Layout {
        headers: &headers,
        policy: &state.width_policy,
        surface_width,
    };

    // Header
    let header_y = state.y_offset;
    {
        let mut header_win = win.child(0, header_y, surface_width, 1);
        let mut x = 0u16;
        for (col, name) in headers.iter().enumerate() {
            let width = layout.width(col)?;
            let highlighted = state.active && col == active_col;
            let (bg, fg) = if highlighted {
                (&state.style.active_bg, &state.style.active_fg)
            } else {
                (&state.style.header_bg[col % 2], &state.style.header_fg)
            };
            let mut cell = header_win.child(x, 0, width, 1);
            let style = Style::new()
                .foreground(*fg)
                .text_style(state.style.header_text);
            print_cell(&mut cell, name, bg, style, state.header_align);
            x = x.saturating_add(width);
        }
    }

    // Viewport
    let body_y = header_y.saturating_add(1);
    let capacity = usize::from(win.height().saturating_sub(body_y));
    let mut viewport = Viewport::new(state.start, state.active_row, state.active_extra_height);
    let visible = viewport.resolve(rows.len(), capacity);
    log::debug!(
        "[table] rows {:?} of {} (active {}, previous extra height {})",
        visible,
        rows.len(),
        viewport.active_row,
        state.active_extra_height
    );

    // Body
    let mut extra_height = 0usize;
    let mut offset = 0u16;
    for (line, row_index) in visible.enumerate() {
        let record = &rows[row_index];
        let y = body_y
            .saturating_add(u16::try_from(line).unwrap_or(u16::MAX))
            .saturating_add(offset);

        let is_active = row_index == viewport.active_row;
        let (bg, fg) = if state.active && is_active {
            (&state.style.active_bg, &state.style.active_fg)
        } else if state.selected.contains(&row_index) {
            (&state.style.selected_bg, &state.style.selected_fg)
        } else {
            (&state.style.row_bg[row_index % 2], &state.style.row_fg)
        };

        {
            let mut row_win = win.child(0, y, surface_width, 1);
            row_win.fill(bg.to_rgb());
            let mut fields = state.columns.fields(field_count);
            let mut x = 0u16;
            for col in 0..headers.len() {
                let width = layout.width(col)?;
                let mut cell = row_win.child(x, 0, width, 1);
                x = x.saturating_add(width);
                let Some(value) = fields.next().and_then(|field| record.field(field)) else {
                    cell.fill(bg.to_rgb());
                    continue;
                };
                let text = format_value(value, arena);
                let room = usize::from(width.saturating_sub(CELL_INSET));
                let text = fit_to_width(text, room, arena);
                let style = Style::new().foreground(*fg);
                print_cell(&mut cell, &text, bg, style, state.cell_align);
            }
        }

        if is_active && let Some(content) = state.active_content.as_mut() {
            let content_y = y.saturating_add(1);
            let mut content_win = win.child(
                0,
                content_y,
                surface_width,
                win.height().saturating_sub(content_y),
            );
            log::trace!("[table] Drawing active content for row {row_index}");
            let lines = content
                .draw(&mut content_win, row_index)
                .map_err(Error::Callback)?;
            log::trace!("[table] Active content used {lines} lines");
            extra_height = usize::from(lines);
            offset = offset.saturating_add(lines);
        }
    }

    state.active_col = active_col;
    state.start = viewport.start;
    state.active_row = viewport.active_row;
    state.active_extra_height = extra_height;
    Ok(())
}

/// Shared inputs of every width computation in one draw.
struct Layout<'h> {
    headers: &'h [&'h str],
    policy: &'h WidthPolicy,
    surface_width: u16,
}

impl Layout<'_> {
    fn width(&self, col: usize) -> Result<u16> {
        column_width(col, self.headers, self.policy, self.surface_width)
    }
}

fn print_cell(
    cell: &mut Window<'_>,
    text: &str,
    bg: &Color,
    style: Style,
    align: TextAlign,
) {
    cell.fill(bg.to_rgb());
    let available = usize::from(cell.width().saturating_sub(CELL_INSET));
    let offset = align_offset(display_width(text), available, align);
    let x = CELL_INSET.saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
    let (width, height) = (cell.width(), cell.height());
    let mut text_win = cell.child(x, 0, width, height);
    text_win.print(&[Segment::new(text).style(style)], Wrap::None);
}
