//! Word-list file loading for the common dictionary.
//!
//! The expected format is a headerless CSV with two columns:
//! `target_word,translate_word`. Blank lines are skipped.

use crate::errors::{AppError, AppResult};
use crate::models::word::WordPair;
use std::path::Path;

pub fn load_words_from_csv(path: &Path) -> AppResult<Vec<WordPair>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record?;

        if record.iter().all(|f| f.is_empty()) {
            continue;
        }

        let (Some(target), Some(translation)) = (record.get(0), record.get(1)) else {
            return Err(AppError::InvalidWordRow(format!(
                "line {}: expected 'target,translation'",
                record
                    .position()
                    .map(|p| p.line().to_string())
                    .unwrap_or_else(|| "?".into())
            )));
        };

        if target.is_empty() || translation.is_empty() {
            return Err(AppError::InvalidWordRow(format!(
                "line {}: empty field",
                record
                    .position()
                    .map(|p| p.line().to_string())
                    .unwrap_or_else(|| "?".into())
            )));
        }

        pairs.push(WordPair::new(target, translation));
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn write_list(name: &str, content: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("{}_wordvault.csv", name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parses_two_column_rows() {
        let path = write_list("ok", "cat,кот\ndog,собака\n");
        let pairs = load_words_from_csv(&path).unwrap();
        assert_eq!(
            pairs,
            vec![WordPair::new("cat", "кот"), WordPair::new("dog", "собака")]
        );
        fs::remove_file(&path).ok();
    }

    #[test]
    fn skips_blank_lines() {
        let path = write_list("blanks", "cat,кот\n\ndog,собака\n\n");
        let pairs = load_words_from_csv(&path).unwrap();
        assert_eq!(
            pairs,
            vec![WordPair::new("cat", "кот"), WordPair::new("dog", "собака")]
        );
        fs::remove_file(&path).ok();
    }

    #[test]
    fn rejects_single_column_rows() {
        let path = write_list("bad", "cat,кот\nlonely\n");
        let err = load_words_from_csv(&path).unwrap_err();
        assert!(matches!(err, AppError::InvalidWordRow(_)));
        fs::remove_file(&path).ok();
    }
}
