//! Column width policies.
//!
//! [`column_width`] is pure: the header pass and every row pass call it
//! with the same arguments and get the same answer, which keeps header and
//! body cells aligned.

use cellgrid::text::display_width;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Split the surface evenly; every column gets the same even-rounded
    /// width, grown until the columns cover all but one cell.
    #[default]
    DynamicFill,
    /// Each column is as wide as its header plus `padding` on both sides.
    DynamicHeaderLen { padding: u16 },
    /// Every column gets this width.
    StaticAll(u16),
    /// One width per column, by position.
    StaticIndividual(Vec<u16>),
}

impl WidthPolicy {
    fn name(&self) -> &'static str {
        match self {
            Self::DynamicFill => "dynamic fill",
            Self::DynamicHeaderLen { .. } => "dynamic header length",
            Self::StaticAll(_) => "static",
            Self::StaticIndividual(_) => "static individual",
        }
    }
}

/// Width of column `index` under `policy`.
pub fn column_width(
    index: usize,
    headers: &[&str],
    policy: &WidthPolicy,
    surface_width: u16,
) -> Result<u16> {
    match policy {
        WidthPolicy::DynamicFill => Ok(fill_width(headers.len(), surface_width)),
        WidthPolicy::DynamicHeaderLen { padding } => {
            let header = headers.get(index).ok_or_else(|| Error::IndexOutOfRange {
                index,
                len: headers.len(),
                policy: policy.name(),
            })?;
            let width = u16::try_from(display_width(header)).unwrap_or(u16::MAX);
            Ok(width.saturating_add(padding.saturating_mul(2)))
        }
        WidthPolicy::StaticAll(width) => Ok(*width),
        WidthPolicy::StaticIndividual(widths) => {
            widths
                .get(index)
                .copied()
                .ok_or_else(|| Error::IndexOutOfRange {
                    index,
                    len: widths.len(),
                    policy: policy.name(),
                })
        }
    }
}

fn fill_width(column_count: usize, surface_width: u16) -> u16 {
    let Ok(count) = u32::try_from(column_count) else {
        return 0;
    };
    if count == 0 {
        return 0;
    }
    let target = u32::from(surface_width).saturating_sub(1);
    let mut width = u32::from(surface_width) / count;
    if width % 2 != 0 {
        width += 1;
    }
    while width * count < target {
        width += 1;
    }
    u16::try_from(width).unwrap_or(u16::MAX)
}
