use crate::models::TextNormalizer;

/// Key form of a dictionary string: lowercased, NFKD-decomposed and optionally ASCII-folded.
pub fn normalize_term(term: &str, fold_to_ascii: bool) -> String {
    TextNormalizer::new(fold_to_ascii).normalize(&term.to_lowercase())
}
