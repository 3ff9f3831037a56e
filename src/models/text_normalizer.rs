use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalizes strings before they are used as index queries or similarity inputs.
///
/// Compatibility decomposition (NFKD) is always applied. With ASCII folding
/// enabled, combining marks are dropped, a handful of letters and symbols with
/// no decomposition are transliterated, and any remaining non-ASCII character is
/// removed. Case is left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    pub fold_to_ascii: bool,
}

impl TextNormalizer {
    pub fn new(fold_to_ascii: bool) -> Self {
        Self { fold_to_ascii }
    }

    pub fn normalize(&self, text: &str) -> String {
        if !self.fold_to_ascii {
            return text.nfkd().collect();
        }

        if text.is_ascii() {
            return text.to_string();
        }

        let mut folded = String::with_capacity(text.len());

        for c in text.nfkd().filter(|c| !is_combining_mark(*c)) {
            if c.is_ascii() {
                folded.push(c);
            } else if let Some(replacement) = transliterate(c) {
                folded.push_str(replacement);
            }
        }

        folded
    }
}

/// Closest ASCII spelling for characters that NFKD leaves untouched.
fn transliterate(c: char) -> Option<&'static str> {
    let replacement = match c {
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ø' => "o",
        'Ø' => "O",
        'ł' => "l",
        'Ł' => "L",
        'đ' => "d",
        'Đ' => "D",
        'ð' => "d",
        'Ð' => "D",
        'þ' => "th",
        'Þ' => "Th",
        'ı' => "i",
        'µ' | 'μ' => "u",
        'α' => "a",
        'β' => "b",
        'γ' => "g",
        'δ' => "d",
        'κ' => "k",
        'ω' => "o",
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => "'",
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => "\"",
        '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{00AD}' => "-",
        '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' => " ",
        '\u{00B1}' => "+/-",
        '\u{00D7}' => "x",
        '\u{00AE}' => "(R)",
        '\u{2122}' => "TM",
        _ => return None,
    };

    Some(replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decomposes_without_folding() {
        let normalizer = TextNormalizer::new(false);
        assert_eq!(normalizer.normalize("í"), "i\u{0301}");
        // Compatibility ligature
        assert_eq!(normalizer.normalize("ﬁ"), "fi");
    }

    #[test]
    fn test_folds_to_ascii() {
        let normalizer = TextNormalizer::new(true);
        assert_eq!(normalizer.normalize("Ivermectína"), "Ivermectina");
        assert_eq!(normalizer.normalize("Größe"), "Grosse");
        assert_eq!(normalizer.normalize("β-blocker"), "b-blocker");
        assert_eq!(normalizer.normalize("Tylenol®"), "Tylenol(R)");
    }

    #[test]
    fn test_preserves_case() {
        let normalizer = TextNormalizer::new(true);
        assert_eq!(normalizer.normalize("Aspirin"), "Aspirin");
    }
}
