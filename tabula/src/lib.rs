//! Stateful table rendering for character-cell surfaces.
//!
//! A [`TableState`] persists across frames; each frame calls [`draw`] with
//! the current dataset, a [`cellgrid::Window`] to draw into and, optionally,
//! a [`Bump`] arena that the caller resets once the frame is done.

extern crate self as tabula;

pub mod draw;
pub mod error;
pub mod format;
pub mod header;
pub mod record;
pub mod source;
pub mod state;
pub mod viewport;
pub mod width;

pub use bumpalo::Bump;
pub use cellgrid;
pub use tabula_derive::{Field, Record};

pub use draw::draw;
pub use error::{BoxError, Error, Result};
pub use header::{ColumnSelection, HeaderSource};
pub use record::{Field, List, Record, Value};
pub use source::{ColumnStore, DataSource, Rows};
pub use state::{ActiveContent, TableState, TableStyle};
pub use viewport::Viewport;
pub use width::WidthPolicy;
