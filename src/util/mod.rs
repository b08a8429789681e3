pub mod json;

pub use json::{display_value, is_truthy, lenient_or_default, null_as_default, string_or_none};
