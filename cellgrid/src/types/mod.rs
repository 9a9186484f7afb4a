mod color;
mod enums;
mod style;

pub use color::{Color, Rgb};
pub use enums::{TextAlign, TextStyle, Wrap};
pub use style::Style;
