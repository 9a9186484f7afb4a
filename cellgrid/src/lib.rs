pub mod buffer;
pub mod layout;
pub mod text;
pub mod types;
pub mod window;

pub use buffer::{Buffer, Cell};
pub use layout::Rect;
pub use types::*;
pub use window::{PrintResult, Segment, Window};
