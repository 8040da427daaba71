pub mod path;
pub mod text;

pub use path::expand_tilde;
pub use text::{capitalize, normalize_word};
