//! Field value to cell text.
//!
//! Everything here works with or without an arena. With one, joined lists,
//! `Debug` renderings and ellipsized text are allocated in it; without one
//! the formatter only slices borrowed text, and shapes that would need an
//! allocation fall back to a marker.

use std::borrow::Cow;

use bumpalo::Bump;
use cellgrid::text::{display_width, prefix_by_len, prefix_by_width};

use crate::record::Value;

/// Text drawn for an absent optional value.
pub const ABSENT: &str = "-";

const ELLIPSIS: &str = "...";
const LIST_SEPARATOR: &str = ", ";

/// Format one field value.
///
/// Only the unsupported-type marker is ever owned; all other results borrow
/// from the record, the arena, or static data.
pub fn format_value<'a>(value: Value<'a>, arena: Option<&'a Bump>) -> Cow<'a, str> {
    match value {
        Value::Text(text) => Cow::Borrowed(text),
        Value::Enum(name) => Cow::Borrowed(name),
        Value::Optional(None) => Cow::Borrowed(ABSENT),
        Value::Optional(Some(inner)) => format_value(inner.value(), arena),
        Value::List(list) => match arena {
            Some(arena) => {
                let mut joined = bumpalo::collections::String::new_in(arena);
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        joined.push_str(LIST_SEPARATOR);
                    }
                    joined.push_str(item);
                }
                Cow::Borrowed(joined.into_bump_str())
            }
            None => unsupported(list.type_name()),
        },
        Value::Other { value, type_name } => match arena {
            Some(arena) => Cow::Borrowed(bumpalo::format!(in arena, "{:?}", value).into_bump_str()),
            None => unsupported(type_name),
        },
    }
}

fn unsupported(type_name: &str) -> Cow<'static, str> {
    Cow::Owned(format!("[unsupported ({type_name})]"))
}

/// Shorten `text` so it fits in `width` cells.
///
/// `width` is the room the text gets, not the column width: the draw passes
/// the column width minus the cell inset. Text no wider than `width` is
/// returned unchanged. With an arena, longer text keeps its first
/// `width - 3` columns and gains `"..."`. Without one, or when `width` is
/// too narrow to show anything before the ellipsis, it is cut on a grapheme
/// boundary with no ellipsis: to `width` bytes without an arena, to `width`
/// columns with one.
pub fn fit_to_width<'a>(text: Cow<'a, str>, width: usize, arena: Option<&'a Bump>) -> Cow<'a, str> {
    if display_width(&text) <= width {
        return text;
    }
    match arena {
        Some(arena) if width > ELLIPSIS.len() => {
            let (prefix, _) = prefix_by_width(&text, width - ELLIPSIS.len());
            Cow::Borrowed(bumpalo::format!(in arena, "{}{}", prefix, ELLIPSIS).into_bump_str())
        }
        Some(_) => cut(text, |text| prefix_by_width(text, width).0.len()),
        None => cut(text, |text| prefix_by_len(text, width).len()),
    }
}

/// Keep the first `end(text)` bytes of `text` without copying borrowed text.
fn cut<'a>(text: Cow<'a, str>, end: impl Fn(&str) -> usize) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(text) => Cow::Borrowed(&text[..end(text)]),
        Cow::Owned(mut text) => {
            let end = end(&text);
            text.truncate(end);
            Cow::Owned(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Field, List};

    #[derive(Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    fn other(point: &Point) -> Value<'_> {
        Value::Other {
            value: point,
            type_name: "Point",
        }
    }

    #[test]
    fn test_text_passes_through_without_allocating() {
        let text = format_value(Value::Text("hello"), None);
        assert!(matches!(text, Cow::Borrowed("hello")));
    }

    #[test]
    fn test_enum_uses_symbolic_name() {
        assert_eq!(format_value(Value::Enum("Active"), None), "Active");
    }

    #[test]
    fn test_list_is_joined_in_arena() {
        let arena = Bump::new();
        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let text = format_value(Value::List(List::Owned(&items)), Some(&arena));
        assert_eq!(text, "a, b, c");
        assert!(matches!(text, Cow::Borrowed(_)));
    }

    #[test]
    fn test_list_without_arena_is_marked_unsupported() {
        let items = vec!["a", "b"];
        let text = format_value(Value::List(List::Borrowed(&items)), None);
        assert_eq!(text, "[unsupported ([&str])]");
    }

    #[test]
    fn test_absent_optional_is_dash() {
        let none: Option<String> = None;
        assert_eq!(format_value(none.value(), None), "-");
    }

    #[test]
    fn test_present_optional_formats_like_inner() {
        let arena = Bump::new();
        let some = Some(42u32);
        assert_eq!(
            format_value(some.value(), Some(&arena)),
            format_value(42u32.value(), Some(&arena))
        );
        assert_eq!(format_value(some.value(), None), "[unsupported (u32)]");
    }

    #[test]
    fn test_other_uses_debug_with_arena() {
        let arena = Bump::new();
        let point = Point { x: 1, y: -2 };
        assert_eq!(format_value(other(&point), Some(&arena)), "Point { x: 1, y: -2 }");
        assert_eq!(format_value(other(&point), None), "[unsupported (Point)]");
    }

    #[test]
    fn test_short_text_is_not_truncated() {
        let arena = Bump::new();
        assert_eq!(fit_to_width(Cow::Borrowed("hello"), 5, Some(&arena)), "hello");
        assert_eq!(fit_to_width(Cow::Borrowed("hello"), 9, None), "hello");
    }

    #[test]
    fn test_truncation_with_arena_appends_ellipsis() {
        let arena = Bump::new();
        let text = fit_to_width(Cow::Borrowed("hello world"), 8, Some(&arena));
        assert_eq!(text, "hello...");
        assert_eq!(display_width(&text), 8);
    }

    #[test]
    fn test_truncation_without_arena_hard_cuts() {
        assert_eq!(fit_to_width(Cow::Borrowed("hello world"), 8, None), "hello wo");
        let owned: Cow<'_, str> = Cow::Owned("[unsupported (u32)]".to_string());
        assert_eq!(fit_to_width(owned, 6, None), "[unsup");
    }

    #[test]
    fn test_truncation_measures_wide_graphemes() {
        let arena = Bump::new();
        // 8 cells of CJK into 7: "日本" plus the ellipsis
        let text = fit_to_width(Cow::Borrowed("日本語文"), 7, Some(&arena));
        assert_eq!(text, "日本...");
    }

    #[test]
    fn test_narrow_width_with_arena_cuts_without_ellipsis() {
        let arena = Bump::new();
        assert_eq!(fit_to_width(Cow::Borrowed("hello"), 3, Some(&arena)), "hel");
        assert_eq!(fit_to_width(Cow::Borrowed("hello"), 1, Some(&arena)), "h");
        assert_eq!(fit_to_width(Cow::Borrowed("日本"), 3, Some(&arena)), "日");
        assert_eq!(fit_to_width(Cow::Borrowed("hello"), 0, Some(&arena)), "");
    }

    #[test]
    fn test_narrow_width_keeps_owned_text_owned() {
        let arena = Bump::new();
        let owned: Cow<'_, str> = Cow::Owned("[unsupported (u8)]".to_string());
        let text = fit_to_width(owned, 2, Some(&arena));
        assert_eq!(text, "[u");
        assert!(matches!(text, Cow::Owned(_)));
    }
}
