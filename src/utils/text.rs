//! Text normalization for dictionary entries.

/// Capitalize a word: first character uppercased, the rest lowercased.
/// Unicode-aware, so "собака" becomes "Собака".
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.extend(chars.flat_map(|c| c.to_lowercase()));
            out
        }
        None => String::new(),
    }
}

/// Trim and capitalize a dictionary field.
/// Returns None when the input is blank after trimming.
pub fn normalize_word(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(capitalize(trimmed))
    }
}
