//! Property tests for the pure layout pieces.

use std::borrow::Cow;

use proptest::prelude::*;

use tabula::cellgrid::text::display_width;
use tabula::cellgrid::{Buffer, Window};
use tabula::format::fit_to_width;
use tabula::width::column_width;
use tabula::{Bump, Record, TableState, Viewport, WidthPolicy, draw};

#[derive(Record)]
struct Row {
    label: String,
}

proptest! {
    /// Fill widths cover the surface, minus one cell, and overshoot by at
    /// most one cell per column.
    #[test]
    fn prop_fill_width_bounds(surface in 1u16..500, count in 1usize..40) {
        let headers = vec!["h"; count];
        let width = column_width(0, &headers, &WidthPolicy::DynamicFill, surface).unwrap();
        let total = usize::from(width) * count;
        prop_assert!(total >= usize::from(surface) - 1);
        prop_assert!(total <= usize::from(surface) + count);
    }

    /// The active row is always on screen and the range fits the capacity.
    #[test]
    fn prop_viewport_shows_active_row(
        len in 0usize..200,
        capacity in 0usize..40,
        start in 0usize..250,
        active in 0usize..250,
        extra in 0usize..60,
    ) {
        let mut viewport = Viewport::new(start, active, extra);
        let range = viewport.resolve(len, capacity);
        prop_assert_eq!(range.start, viewport.start);
        prop_assert!(range.len() <= capacity);
        if len == 0 {
            prop_assert_eq!((viewport.start, viewport.active_row), (0, 0));
        } else {
            prop_assert!(viewport.active_row < len);
            if capacity > 0 {
                prop_assert!(range.contains(&viewport.active_row));
            }
        }
    }

    /// Resolving an already resolved viewport changes nothing.
    #[test]
    fn prop_viewport_settles(
        len in 0usize..200,
        capacity in 0usize..40,
        start in 0usize..250,
        active in 0usize..250,
        extra in 0usize..60,
    ) {
        let mut viewport = Viewport::new(start, active, extra);
        let first = viewport.resolve(len, capacity);
        let settled = viewport;
        let second = viewport.resolve(len, capacity);
        prop_assert_eq!(first, second);
        prop_assert_eq!(viewport, settled);
    }

    /// Fitted text never needs more cells than it was given.
    #[test]
    fn prop_truncation_fits_column(text in "[a-zA-Z0-9 .日本語文]{0,40}", width in 0usize..30) {
        let arena = Bump::new();
        let fitted = fit_to_width(Cow::Borrowed(text.as_str()), width, Some(&arena));
        prop_assert!(display_width(&fitted) <= width);

        let cut = fit_to_width(Cow::Borrowed(text.as_str()), width, None);
        prop_assert!(cut.len() <= width || display_width(&text) <= width);
    }

    /// Two draws with the same inputs write the same cells and state.
    #[test]
    fn prop_draw_is_idempotent(
        count in 0usize..30,
        active in 0usize..40,
        height in 1u16..12,
    ) {
        let rows: Vec<Row> = (0..count).map(|i| Row { label: format!("row {i}") }).collect();
        let mut state = TableState::new().active(true);
        state.active_row = active;

        let mut first = Buffer::new(20, height);
        draw(&mut Window::new(&mut first), &mut state, &rows, None).unwrap();
        let after_first = (state.start, state.active_row);

        let mut second = Buffer::new(20, height);
        draw(&mut Window::new(&mut second), &mut state, &rows, None).unwrap();

        prop_assert_eq!((state.start, state.active_row), after_first);
        for y in 0..height {
            prop_assert_eq!(first.row_text(y), second.row_text(y));
        }
    }
}
