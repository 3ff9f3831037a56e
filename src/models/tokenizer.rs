use crate::constants::{ADPOSITIONS, BRACKETS, CONJUNCTIONS, DETERMINERS, NUMBER_WORDS};
use crate::models::{PartOfSpeech, Token};
use crate::types::CharOffset;

/// Produces tagged tokens with character offsets for a document.
///
/// Any tagger can back a `DrugFinder` as long as it fills in the closed-class
/// part-of-speech tags, the punctuation/space/bracket/number flags and a lemma.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Lightweight English tokenizer with dictionary-based tagging of closed word classes.
///
/// Words are runs of alphanumeric characters; every other non-whitespace
/// character becomes its own punctuation token. A single space after a token is
/// kept as its trailing whitespace and any further whitespace becomes a space
/// token, so spans can be rebuilt exactly as they appear in the text.
#[derive(Copy, Clone, Debug)]
pub struct RuleBasedTokenizer {
    /// Keep `10,000` and `2.5` as single tokens.
    pub merge_digit_groups: bool,
    /// Keep `patient's` as a single token.
    pub keep_inner_apostrophes: bool,
}

impl RuleBasedTokenizer {
    pub const fn english() -> Self {
        Self {
            merge_digit_groups: true,
            keep_inner_apostrophes: true,
        }
    }

    fn continues_word(&self, chars: &[char], idx: usize) -> bool {
        let c = chars[idx];

        if c.is_alphanumeric() {
            return true;
        }

        let previous = chars[idx - 1];
        let next = match chars.get(idx + 1) {
            Some(next) => *next,
            None => return false,
        };

        if self.merge_digit_groups && (c == '.' || c == ',') {
            return previous.is_ascii_digit() && next.is_ascii_digit();
        }

        if self.keep_inner_apostrophes && (c == '\'' || c == '\u{2019}') {
            return previous.is_alphabetic() && next.is_alphabetic();
        }

        false
    }

    fn make_token(&self, chars: &[char], start: CharOffset, end: CharOffset) -> Token {
        let text: String = chars[start..end].iter().collect();
        let lemma = text.to_lowercase();

        let is_space = text.chars().all(char::is_whitespace);
        let is_punctuation = !is_space && !text.chars().any(char::is_alphanumeric);
        let is_bracket = is_punctuation && text.chars().all(|c| BRACKETS.contains(&c));
        let is_numeric_literal = !is_space && !is_punctuation && like_number(&lemma);

        let pos = if is_space {
            PartOfSpeech::Space
        } else if is_punctuation {
            PartOfSpeech::Punctuation
        } else if DETERMINERS.contains(&lemma.as_str()) {
            PartOfSpeech::Determiner
        } else if ADPOSITIONS.contains(&lemma.as_str()) {
            PartOfSpeech::Adposition
        } else if CONJUNCTIONS.contains(&lemma.as_str()) {
            PartOfSpeech::Conjunction
        } else if is_numeric_literal {
            PartOfSpeech::Numeral
        } else {
            PartOfSpeech::Other
        };

        Token {
            text,
            start,
            end,
            pos,
            lemma,
            is_punctuation,
            is_space,
            is_bracket,
            is_numeric_literal,
            trailing_whitespace: String::new(),
        }
    }
}

impl Default for RuleBasedTokenizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Tokenizer for RuleBasedTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens: Vec<Token> = Vec::new();
        let mut idx = 0;

        while idx < chars.len() {
            let c = chars[idx];
            let start = idx;

            if c.is_whitespace() {
                while idx < chars.len() && chars[idx].is_whitespace() {
                    idx += 1;
                }

                let mut space_start = start;

                // A single plain space belongs to the preceding token
                if c == ' ' {
                    if let Some(previous) = tokens.last_mut().filter(|token| !token.is_space) {
                        previous.trailing_whitespace.push(' ');
                        space_start += 1;
                    }
                }

                if space_start < idx {
                    tokens.push(self.make_token(&chars, space_start, idx));
                }

                continue;
            }

            idx += 1;

            if c.is_alphanumeric() {
                while idx < chars.len() && self.continues_word(&chars, idx) {
                    idx += 1;
                }
            }

            tokens.push(self.make_token(&chars, start, idx));
        }

        tokens
    }
}

/// Digits (optionally grouped with `,` or `.`), simple fractions and number words.
fn like_number(lemma: &str) -> bool {
    let digits: String = lemma.chars().filter(|c| *c != ',' && *c != '.').collect();

    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }

    if let Some((numerator, denominator)) = lemma.split_once('/') {
        let is_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
        if is_digits(numerator) && is_digits(denominator) {
            return true;
        }
    }

    NUMBER_WORDS.contains(&lemma)
}
