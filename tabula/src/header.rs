//! Header names and the columns they select.

use crate::record::Record;

/// Where header strings come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HeaderSource {
    /// The record's field names, filtered by the [`ColumnSelection`].
    #[default]
    FieldNames,
    /// Caller-supplied headers, used verbatim and never filtered.
    ///
    /// Rows still draw one cell per header: the selected fields fill them in
    /// order, extra headers get blank cells, and extra fields are not drawn.
    Custom(Vec<String>),
}

/// Which record fields are drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ColumnSelection {
    #[default]
    All,
    /// Only these field positions. Drawn in field order; positions past the
    /// last field are ignored.
    Indices(Vec<usize>),
}

impl ColumnSelection {
    pub fn contains(&self, index: usize) -> bool {
        match self {
            Self::All => true,
            Self::Indices(indices) => indices.contains(&index),
        }
    }

    /// Positions of the drawn fields out of `field_count`, ascending.
    pub fn fields(&self, field_count: usize) -> impl Iterator<Item = usize> + '_ {
        (0..field_count).filter(move |index| self.contains(*index))
    }
}

/// Resolve the header row for record type `R`.
pub fn resolve<'h, R: Record>(source: &'h HeaderSource, selection: &ColumnSelection) -> Vec<&'h str> {
    match source {
        HeaderSource::FieldNames => {
            let names = R::field_names();
            selection.fields(names.len()).map(|index| names[index]).collect()
        }
        HeaderSource::Custom(headers) => headers.iter().map(String::as_str).collect(),
    }
}

/// Clamp the active column into `[0, header_count)`; 0 when there are no headers.
pub fn clamp_active_column(active_col: usize, header_count: usize) -> usize {
    active_col.min(header_count.saturating_sub(1))
}
