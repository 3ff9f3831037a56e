use crate::types::{RecordId, TermRef};
use crate::utils::normalize_term;
use std::collections::HashMap;
use std::sync::Arc;

/// Structured data attached to a dictionary record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrugRecord {
    pub drugbank_id: RecordId,
    pub name: String,
    pub synonyms: Vec<String>,
    pub products: Vec<String>,
    pub description: Option<String>,
    pub state: Option<String>,
    pub indication: Option<String>,
    pub pharmacodynamics: Option<String>,
}

impl DrugRecord {
    /// Every dictionary string that refers to this record: name, synonyms and products.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.synonyms.iter().map(String::as_str))
            .chain(self.products.iter().map(String::as_str))
            .filter(|term| !term.is_empty())
    }
}

/// Maps a dictionary string to its record.
///
/// Lookups are case-insensitive. A missing term is `None`, never an error.
pub trait TermStore: Send + Sync {
    fn get(&self, term: &TermRef) -> Option<(RecordId, Arc<DrugRecord>)>;
}

/// `TermStore` held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryTermStore {
    fold_to_ascii: bool,
    term_record_ids: HashMap<String, RecordId>,
    records: HashMap<RecordId, Arc<DrugRecord>>,
}

impl MemoryTermStore {
    pub fn new(fold_to_ascii: bool) -> Self {
        Self {
            fold_to_ascii,
            ..Default::default()
        }
    }

    /// Registers every term of `record`.
    ///
    /// A term already mapped to another record is re-pointed at this one, while
    /// the data of a record id is only stored the first time the id is seen.
    pub fn insert(&mut self, record: DrugRecord) {
        let record_id = record.drugbank_id.clone();

        for term in record.terms() {
            self.term_record_ids
                .insert(normalize_term(term, self.fold_to_ascii), record_id.clone());
        }

        self.records
            .entry(record_id)
            .or_insert_with(|| Arc::new(record));
    }

    pub fn has_term(&self, term: &TermRef) -> bool {
        self.term_record_ids
            .contains_key(&normalize_term(term, self.fold_to_ascii))
    }

    pub fn record(&self, record_id: &str) -> Option<Arc<DrugRecord>> {
        self.records.get(record_id).cloned()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.term_record_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.term_record_ids.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

impl TermStore for MemoryTermStore {
    fn get(&self, term: &TermRef) -> Option<(RecordId, Arc<DrugRecord>)> {
        let record_id = self
            .term_record_ids
            .get(&normalize_term(term, self.fold_to_ascii))?;

        let record = self.records.get(record_id)?;

        Some((record_id.clone(), Arc::clone(record)))
    }
}
