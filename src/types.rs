// Types listed here are either shared across multiple files and/or exposed via the library.

/// Identifier of a dictionary record (e.g. a DrugBank accession such as `DB00602`).
pub type RecordId = String;

/// A dictionary string (drug name, synonym or product name) as stored in the term index.
pub type Term = String;

/// A borrowed view of a dictionary string.
pub type TermRef = str;

/// Offset into a document, counted in unicode scalar values (not bytes).
pub type CharOffset = usize;

/// Position of a token within a tokenized document.
pub type TokenIndex = usize;

/// Similarity between a span and a dictionary term.
///
/// Bounded to `[0, 1]` for `dice`, `jaccard` and `cosine`; a whole, unbounded
/// intersection count for `overlap`.
pub type Similarity = f64;

/// The set of character n-grams extracted from a string.
pub type NgramSet = std::collections::HashSet<String>;
