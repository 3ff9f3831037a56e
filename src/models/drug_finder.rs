use crate::models::{
    CandidateScorer, DrugDictionary, DrugFinderConfig, MatchGroup, MatchObserver, MatchSummary,
    OverlapResolver, RuleBasedTokenizer, SimilarityMeasure, SpanGenerator, TermIndex, TermStore,
    Token, Tokenizer,
};
use crate::Error;
use log::debug;
use std::fmt;
use std::sync::OnceLock;

static DEFAULT_TOKENIZER: RuleBasedTokenizer = RuleBasedTokenizer::english();

/// Read-only summary of a `DrugFinder` configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DrugFinderInfo {
    pub threshold: f64,
    pub similarity_name: SimilarityMeasure,
    pub window: usize,
    pub ngram_length: usize,
    pub min_match_length: usize,
    /// Sorted.
    pub negations: Vec<String>,
    /// Sorted.
    pub valid_punctuation: Vec<String>,
}

impl DrugFinderInfo {
    fn from_config(config: &DrugFinderConfig) -> Self {
        let mut negations: Vec<String> = config.negations.iter().cloned().collect();
        negations.sort();

        let mut valid_punctuation: Vec<String> = config.valid_punctuation.iter().cloned().collect();
        valid_punctuation.sort();

        Self {
            threshold: config.threshold,
            similarity_name: config.similarity_measure,
            window: config.window,
            ngram_length: config.ngram_length,
            min_match_length: config.min_match_length,
            negations,
            valid_punctuation,
        }
    }
}

impl fmt::Display for DrugFinderInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "threshold: {}", self.threshold)?;
        writeln!(f, "similarity_name: {}", self.similarity_name)?;
        writeln!(f, "window: {}", self.window)?;
        writeln!(f, "ngram_length: {}", self.ngram_length)?;
        writeln!(f, "min_match_length: {}", self.min_match_length)?;
        writeln!(f, "negations: {}", self.negations.join(", "))?;
        write!(
            f,
            "valid_punctuation: {}",
            self.valid_punctuation
                .iter()
                .map(|dash| dash.escape_unicode().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

/// Fuzzy dictionary matcher for drug names in free text.
///
/// A `DrugFinder` borrows its collaborators and holds no per-call state, so a
/// single instance can serve concurrent `match_text` calls.
pub struct DrugFinder<'a> {
    config: DrugFinderConfig,
    tokenizer: &'a dyn Tokenizer,
    term_index: &'a dyn TermIndex,
    term_store: &'a dyn TermStore,
    observer: Option<&'a dyn MatchObserver>,
    info: OnceLock<DrugFinderInfo>,
}

impl<'a> DrugFinder<'a> {
    pub fn new(
        config: DrugFinderConfig,
        tokenizer: &'a dyn Tokenizer,
        term_index: &'a dyn TermIndex,
        term_store: &'a dyn TermStore,
    ) -> Result<Self, Error> {
        Self::validate_config(&config)?;

        Ok(Self {
            config,
            tokenizer,
            term_index,
            term_store,
            observer: None,
            info: OnceLock::new(),
        })
    }

    /// Builds a finder over an in-memory dictionary using the built-in tokenizer.
    ///
    /// Retrieval settings (threshold, similarity measure, n-gram length and
    /// unicode normalization) are taken from the dictionary, which was indexed
    /// with them; the remaining options come from `config`.
    pub fn with_dictionary(
        mut config: DrugFinderConfig,
        dictionary: &'a DrugDictionary,
    ) -> Result<Self, Error> {
        let index = dictionary.index();

        if config.threshold != index.threshold()
            || config.similarity_measure != index.similarity_measure()
            || config.ngram_length != index.ngram_length()
        {
            debug!(
                "Using dictionary settings: threshold {}, {} similarity, ngram length {}",
                index.threshold(),
                index.similarity_measure(),
                index.ngram_length()
            );
        }

        config.threshold = index.threshold();
        config.similarity_measure = index.similarity_measure();
        config.ngram_length = index.ngram_length();
        config.normalize_unicode = dictionary.normalize_unicode();

        Self::new(
            config,
            &DEFAULT_TOKENIZER,
            dictionary.index(),
            dictionary.store(),
        )
    }

    pub fn with_observer(mut self, observer: &'a dyn MatchObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn config(&self) -> &DrugFinderConfig {
        &self.config
    }

    fn validate_config(config: &DrugFinderConfig) -> Result<(), Error> {
        if config.window == 0 {
            return Err(Error::ConfigurationError(
                "window must be at least 1".to_string(),
            ));
        }

        if config.ngram_length == 0 {
            return Err(Error::ConfigurationError(
                "ngram_length must be at least 1".to_string(),
            ));
        }

        if !config.threshold.is_finite() || config.threshold <= 0.0 {
            return Err(Error::ConfigurationError(format!(
                "threshold must be a positive number, got {}",
                config.threshold
            )));
        }

        if config.similarity_measure.is_bounded() && config.threshold > 1.0 {
            return Err(Error::ConfigurationError(format!(
                "threshold {} is out of range for {} similarity",
                config.threshold, config.similarity_measure
            )));
        }

        if config.stopwords.is_empty() {
            return Err(Error::ConfigurationError(
                "stopword list is empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Finds dictionary terms in `text`.
    ///
    /// With `best_match`, overlapping groups are resolved using the configured
    /// criteria and the result is in ranking order; otherwise every group is
    /// returned in span order. `ignore_syntax` considers every token window
    /// instead of applying the syntactic span rules.
    pub fn match_text(&self, text: &str, best_match: bool, ignore_syntax: bool) -> Vec<MatchGroup> {
        let tokens = self.tokenizer.tokenize(text);
        self.match_tokens(&tokens, best_match, ignore_syntax)
    }

    /// `match_text` with best-match resolution and syntactic spans.
    pub fn find_drugs(&self, text: &str) -> Vec<MatchGroup> {
        self.match_text(text, true, false)
    }

    /// Matches over a document tokenized by the caller.
    pub fn match_tokens(
        &self,
        tokens: &[Token],
        best_match: bool,
        ignore_syntax: bool,
    ) -> Vec<MatchGroup> {
        let span_generator = SpanGenerator::new(&self.config);
        let scorer = CandidateScorer::new(
            self.term_index,
            self.term_store,
            self.config.similarity_measure,
            self.config.ngram_length,
            self.config.normalize_unicode,
        );

        let mut groups = if ignore_syntax {
            scorer.score_spans(span_generator.generate_windows(tokens))
        } else {
            scorer.score_spans(span_generator.generate(tokens))
        };

        debug!("{} match groups before overlap resolution", groups.len());

        if best_match {
            groups = OverlapResolver::new(self.config.overlap_criteria).resolve(groups);
        }

        if let Some(observer) = self.observer {
            observer.on_match(&MatchSummary::new(tokens.len(), &groups));
        }

        groups
    }

    pub fn get_info(&self) -> &DrugFinderInfo {
        self.info
            .get_or_init(|| DrugFinderInfo::from_config(&self.config))
    }
}
