use crate::types::CharOffset;

/// Coarse part-of-speech class. Only the closed classes matter for span generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Adposition,
    Determiner,
    Conjunction,
    Numeral,
    Punctuation,
    Space,
    Other,
}

impl PartOfSpeech {
    /// Adpositions, determiners and conjunctions never anchor or end a span.
    pub fn is_closed_class(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Adposition | PartOfSpeech::Determiner | PartOfSpeech::Conjunction
        )
    }
}

/// A tagged token with character offsets into its source document.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub start: CharOffset,
    pub end: CharOffset,
    pub pos: PartOfSpeech,
    pub lemma: String,
    pub is_punctuation: bool,
    pub is_space: bool,
    pub is_bracket: bool,
    pub is_numeric_literal: bool,
    /// Whitespace directly following the token in the source text.
    pub trailing_whitespace: String,
}

impl Token {
    /// Length in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn text_with_whitespace(&self) -> String {
        format!("{}{}", self.text, self.trailing_whitespace)
    }
}
