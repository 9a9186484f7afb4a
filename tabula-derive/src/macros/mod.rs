pub mod attrs;
pub mod field;
pub mod record;
