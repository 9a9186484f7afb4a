//! Normalizes caller datasets into an indexable slice of records.

use std::ops::Deref;

use bumpalo::Bump;

use crate::error::{Error, Result};

/// A dataset stored as one sequence per field ("parallel arrays").
///
/// Rows are rebuilt on demand with [`record`](ColumnStore::record), which
/// requires an arena to hold the materialized copy.
pub trait ColumnStore {
    type Record;

    /// Number of field columns.
    fn column_count(&self) -> usize;

    /// Length of the column at `column`.
    fn column_len(&self, column: usize) -> usize;

    /// Rebuild the row at `index`. Only called for `index < len`.
    fn record(&self, index: usize) -> Self::Record;
}

/// The shapes of dataset a table can draw.
pub enum DataSource<'a, R> {
    /// Records already laid out contiguously.
    Rows(&'a [R]),
    /// Parallel field columns, materialized per draw.
    Columns(&'a dyn ColumnStore<Record = R>),
}

impl<'a, R> From<&'a [R]> for DataSource<'a, R> {
    fn from(rows: &'a [R]) -> Self {
        Self::Rows(rows)
    }
}

impl<'a, R> From<&'a Vec<R>> for DataSource<'a, R> {
    fn from(rows: &'a Vec<R>) -> Self {
        Self::Rows(rows)
    }
}

impl<'a, R, const N: usize> From<&'a [R; N]> for DataSource<'a, R> {
    fn from(rows: &'a [R; N]) -> Self {
        Self::Rows(rows)
    }
}

impl<'a, R> From<&'a dyn ColumnStore<Record = R>> for DataSource<'a, R> {
    fn from(store: &'a dyn ColumnStore<Record = R>) -> Self {
        Self::Columns(store)
    }
}

/// Read-only rows for the span of one draw.
///
/// A materialized copy lives in the caller's arena and is dropped with this
/// value; the arena memory itself is reclaimed when the caller resets it.
pub enum Rows<'a, R> {
    Borrowed(&'a [R]),
    Materialized(bumpalo::collections::Vec<'a, R>),
}

impl<R> Deref for Rows<'_, R> {
    type Target = [R];

    fn deref(&self) -> &[R] {
        match self {
            Self::Borrowed(rows) => rows,
            Self::Materialized(rows) => rows,
        }
    }
}

/// Turn a [`DataSource`] into indexable rows.
///
/// Parallel columns need `arena`; without one, or when the columns have
/// different lengths, this fails with [`Error::UnsupportedSource`].
pub fn adapt<'a, R>(source: DataSource<'a, R>, arena: Option<&'a Bump>) -> Result<Rows<'a, R>> {
    match source {
        DataSource::Rows(rows) => Ok(Rows::Borrowed(rows)),
        DataSource::Columns(store) => {
            let Some(arena) = arena else {
                return Err(Error::unsupported(
                    "parallel columns need an arena to materialize rows",
                ));
            };
            let len = uniform_len(store)?;
            let mut rows = bumpalo::collections::Vec::with_capacity_in(len, arena);
            rows.extend((0..len).map(|index| store.record(index)));
            Ok(Rows::Materialized(rows))
        }
    }
}

fn uniform_len<R>(store: &dyn ColumnStore<Record = R>) -> Result<usize> {
    let count = store.column_count();
    if count == 0 {
        return Ok(0);
    }
    let len = store.column_len(0);
    for column in 1..count {
        let other = store.column_len(column);
        if other != len {
            return Err(Error::unsupported(format!(
                "column {column} has {other} entries, column 0 has {len}"
            )));
        }
    }
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Parallel {
        names: Vec<&'static str>,
        ages: Vec<u32>,
    }

    impl ColumnStore for Parallel {
        type Record = (&'static str, u32);

        fn column_count(&self) -> usize {
            2
        }

        fn column_len(&self, column: usize) -> usize {
            match column {
                0 => self.names.len(),
                _ => self.ages.len(),
            }
        }

        fn record(&self, index: usize) -> Self::Record {
            (self.names[index], self.ages[index])
        }
    }

    #[test]
    fn test_rows_are_borrowed() {
        let data = vec![1, 2, 3];
        let rows = adapt(DataSource::from(&data), None).unwrap();
        assert!(matches!(rows, Rows::Borrowed(_)));
        assert_eq!(&*rows, &[1, 2, 3]);
    }

    #[test]
    fn test_columns_materialize_into_arena() {
        let arena = Bump::new();
        let store = Parallel {
            names: vec!["ann", "bob"],
            ages: vec![31, 42],
        };
        let rows = adapt(DataSource::Columns(&store), Some(&arena)).unwrap();
        assert_eq!(&*rows, &[("ann", 31), ("bob", 42)]);
    }

    #[test]
    fn test_columns_without_arena_are_unsupported() {
        let store = Parallel {
            names: vec!["ann"],
            ages: vec![31],
        };
        let err = adapt(DataSource::Columns(&store), None).err().unwrap();
        assert!(matches!(err, Error::UnsupportedSource { .. }));
    }

    #[test]
    fn test_ragged_columns_are_unsupported() {
        let arena = Bump::new();
        let store = Parallel {
            names: vec!["ann", "bob"],
            ages: vec![31],
        };
        let err = adapt(DataSource::Columns(&store), Some(&arena)).err().unwrap();
        assert!(err.to_string().contains("column 1 has 1 entries"));
    }
}
