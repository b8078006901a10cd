pub mod formatter;

pub use formatter::{format_json, format_result, format_score, should_use_colors};
