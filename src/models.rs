pub mod candidate_scorer;
pub use candidate_scorer::CandidateScorer;

pub mod drug_dictionary;
pub use drug_dictionary::DrugDictionary;

pub mod drug_finder;
pub use drug_finder::{DrugFinder, DrugFinderInfo};

pub mod drug_finder_config;
pub use drug_finder_config::DrugFinderConfig;

pub mod error;
pub use error::Error;

pub mod interval_set;
pub use interval_set::{Interval, IntervalSet};

pub mod match_group;
pub use match_group::{MatchCandidate, MatchGroup};

pub mod match_observer;
pub use match_observer::{LogMatchObserver, MatchObserver, MatchSummary};

pub mod overlap_resolver;
pub use overlap_resolver::{OverlapCriteria, OverlapResolver};

pub mod similarity;
pub use similarity::SimilarityMeasure;

pub mod span_generator;
pub use span_generator::{Span, SpanGenerator, SyntacticSpans, WindowSpans};

pub mod term_index;
pub use term_index::{MemoryTermIndex, TermIndex};

pub mod term_store;
pub use term_store::{DrugRecord, MemoryTermStore, TermStore};

pub mod text_normalizer;
pub use text_normalizer::TextNormalizer;

pub mod token;
pub use token::{PartOfSpeech, Token};

pub mod tokenizer;
pub use tokenizer::{RuleBasedTokenizer, Tokenizer};
