use crate::models::{DrugFinderConfig, PartOfSpeech, Token};
use crate::types::{CharOffset, TokenIndex};

/// A contiguous region of the document considered for dictionary matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: CharOffset,
    pub end: CharOffset,
    pub text: String,
}

impl Span {
    pub fn new(start: CharOffset, end: CharOffset, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Decides which token windows are worth looking up in the dictionary.
#[derive(Debug, Clone, Copy)]
pub struct SpanGenerator<'a> {
    config: &'a DrugFinderConfig,
}

impl<'a> SpanGenerator<'a> {
    pub fn new(config: &'a DrugFinderConfig) -> Self {
        Self { config }
    }

    /// Spans that respect token-level syntax rules (see `SyntacticSpans`).
    pub fn generate<'t>(&self, tokens: &'t [Token]) -> SyntacticSpans<'t>
    where
        'a: 't,
    {
        SyntacticSpans::new(*self, tokens)
    }

    /// Every window of `1..=window` tokens meeting the minimum length, with no
    /// linguistic filtering. For input without part-of-speech information.
    pub fn generate_windows<'t>(&self, tokens: &'t [Token]) -> WindowSpans<'t>
    where
        'a: 't,
    {
        WindowSpans {
            generator: *self,
            tokens,
            start_idx: 0,
            end_idx: 1,
        }
    }

    /// Eligible to appear in a span at all.
    pub fn is_valid_token(&self, token: &Token) -> bool {
        !(token.is_punctuation || token.is_space || token.pos.is_closed_class())
    }

    pub fn is_valid_start_token(&self, token: &Token) -> bool {
        !(token.is_numeric_literal
            || (self.is_stop_term(token) && !self.config.negations.contains(&token.lemma))
            || token.pos.is_closed_class())
    }

    pub fn is_valid_end_token(&self, token: &Token) -> bool {
        !(token.is_punctuation
            || token.is_space
            || self.is_stop_term(token)
            || token.pos.is_closed_class())
    }

    pub fn is_valid_middle_token(&self, token: &Token) -> bool {
        !(token.is_punctuation || token.is_space)
            || token.is_bracket
            || self.config.valid_punctuation.contains(&token.text)
    }

    fn is_stop_term(&self, token: &Token) -> bool {
        self.config.stopwords.contains(&token.text)
    }

    fn is_longer_than_min(&self, start: CharOffset, end: CharOffset) -> bool {
        end - start >= self.config.min_match_length
    }
}

/// Lazily walks a token sequence and yields candidate spans.
///
/// For each start token that may appear in a span, spans grow one token at a
/// time up to the configured window. A span ends only on a valid end token and
/// is abandoned as soon as it would cross an invalid middle token. A start token
/// that may not stand alone (a number, a non-negation stopword) skips its first
/// end position. Determiners inside a span are dropped from its text.
///
/// The final token of the document is yielded on its own whenever it is a valid
/// end token long enough to match, even if it could not start a span. When it is
/// also a valid start token the regular window walk yields it a second time.
pub struct SyntacticSpans<'t> {
    generator: SpanGenerator<'t>,
    tokens: &'t [Token],
    invalid_mid_tokens: Vec<bool>,
    start_idx: TokenIndex,
    end_idx: TokenIndex,
    span_end: TokenIndex,
    compensate: bool,
    in_window: bool,
}

impl<'t> SyntacticSpans<'t> {
    fn new(generator: SpanGenerator<'t>, tokens: &'t [Token]) -> Self {
        let invalid_mid_tokens = tokens
            .iter()
            .map(|token| !generator.is_valid_middle_token(token))
            .collect();

        Self {
            generator,
            tokens,
            invalid_mid_tokens,
            start_idx: 0,
            end_idx: 0,
            span_end: 0,
            compensate: false,
            in_window: false,
        }
    }

    fn make_span(&self, start_idx: TokenIndex, end_idx: TokenIndex) -> Span {
        let span_tokens = &self.tokens[start_idx..end_idx];

        let text: String = span_tokens
            .iter()
            .filter(|token| token.pos != PartOfSpeech::Determiner)
            .map(|token| token.text_with_whitespace())
            .collect();

        Span::new(
            span_tokens[0].start,
            span_tokens[span_tokens.len() - 1].end,
            text.trim(),
        )
    }
}

impl Iterator for SyntacticSpans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let tokens_length = self.tokens.len();

        loop {
            if !self.in_window {
                if self.start_idx >= tokens_length {
                    return None;
                }

                let token = &self.tokens[self.start_idx];

                if !self.generator.is_valid_token(token) {
                    self.start_idx += 1;
                    continue;
                }

                self.compensate = !self.generator.is_valid_start_token(token);
                self.end_idx = self.start_idx + 1;
                self.span_end = tokens_length
                    .min(self.start_idx.saturating_add(self.generator.config.window))
                    + 1;
                self.in_window = true;

                if self.start_idx + 1 == tokens_length
                    && self.generator.is_valid_end_token(token)
                    && token.len() >= self.generator.config.min_match_length
                {
                    return Some(Span::new(token.start, token.end, token.text.clone()));
                }
            }

            while self.end_idx < self.span_end {
                let end_idx = self.end_idx;
                self.end_idx += 1;

                if self.compensate {
                    self.compensate = false;
                    continue;
                }

                if self.invalid_mid_tokens[end_idx - 1] {
                    self.end_idx = self.span_end;
                    break;
                }

                if !self.generator.is_valid_end_token(&self.tokens[end_idx - 1]) {
                    continue;
                }

                let start = self.tokens[self.start_idx].start;
                let end = self.tokens[end_idx - 1].end;

                if !self.generator.is_longer_than_min(start, end) {
                    continue;
                }

                return Some(self.make_span(self.start_idx, end_idx));
            }

            self.in_window = false;
            self.start_idx += 1;
        }
    }
}

/// Lazily yields every window of up to `window` tokens, ignoring syntax.
pub struct WindowSpans<'t> {
    generator: SpanGenerator<'t>,
    tokens: &'t [Token],
    start_idx: TokenIndex,
    end_idx: TokenIndex,
}

impl Iterator for WindowSpans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let tokens_length = self.tokens.len();

        while self.start_idx < tokens_length {
            let last_end_idx =
                tokens_length.min(self.start_idx.saturating_add(self.generator.config.window));

            if self.end_idx > last_end_idx {
                self.start_idx += 1;
                self.end_idx = self.start_idx + 1;
                continue;
            }

            let end_idx = self.end_idx;
            self.end_idx += 1;

            let span_tokens = &self.tokens[self.start_idx..end_idx];
            let start = span_tokens[0].start;
            let end = span_tokens[span_tokens.len() - 1].end;

            if !self.generator.is_longer_than_min(start, end) {
                continue;
            }

            let mut text: String = span_tokens[..span_tokens.len() - 1]
                .iter()
                .map(|token| token.text_with_whitespace())
                .collect();
            text.push_str(&span_tokens[span_tokens.len() - 1].text);

            return Some(Span::new(start, end, text));
        }

        None
    }
}
