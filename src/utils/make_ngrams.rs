use crate::types::NgramSet;

/// Collects the set of character n-grams of `text`, sliding one character at a time.
///
/// Strings shorter than `n` yield a single n-gram made of the whole string, and an
/// empty string yields an empty set. Repeated n-grams collapse into one entry.
pub fn make_ngrams(text: &str, n: usize) -> NgramSet {
    let chars: Vec<char> = text.chars().collect();

    if chars.is_empty() {
        return NgramSet::new();
    }

    let n = n.clamp(1, chars.len());

    chars
        .windows(n)
        .map(|window| window.iter().collect::<String>())
        .collect()
}
