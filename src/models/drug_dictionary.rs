use crate::constants::{
    COMPRESSED_DICTIONARY_CSV_FILE_NAME, DICTIONARY_CSV_FILE_NAME, NORMALIZE_UNICODE_FLAG_FILE_NAME,
};
use crate::models::{DrugFinderConfig, DrugRecord, MemoryTermIndex, MemoryTermStore};
use crate::utils::read_drug_dictionary_from_path;
use crate::Error;
use log::debug;
use std::path::Path;

/// In-memory term index and record store built from a set of drug records.
#[derive(Debug, Clone)]
pub struct DrugDictionary {
    index: MemoryTermIndex,
    store: MemoryTermStore,
    normalize_unicode: bool,
}

impl DrugDictionary {
    /// Indexes every name, synonym and product of `records` using the
    /// similarity settings of `config`.
    pub fn new<I>(records: I, config: &DrugFinderConfig) -> Self
    where
        I: IntoIterator<Item = DrugRecord>,
    {
        let normalize_unicode = config.normalize_unicode;

        let mut index = MemoryTermIndex::new(
            config.similarity_measure,
            config.threshold,
            config.ngram_length,
            normalize_unicode,
        );
        let mut store = MemoryTermStore::new(normalize_unicode);

        for record in records {
            for term in record.terms() {
                index.insert(term);
            }
            store.insert(record);
        }

        debug!(
            "Indexed {} terms for {} records",
            index.len(),
            store.record_count()
        );

        Self {
            index,
            store,
            normalize_unicode,
        }
    }

    /// Loads a dictionary CSV (optionally gzipped).
    pub fn from_path<P: AsRef<Path>>(path: P, config: &DrugFinderConfig) -> Result<Self, Error> {
        let records = read_drug_dictionary_from_path(path)?;
        Ok(Self::new(records, config))
    }

    /// Loads an installed dictionary directory.
    ///
    /// The directory holds `drug-terms.csv` or `drug-terms.csv.gz`. A
    /// `normalize-unicode.flag` file turns on ASCII folding regardless of `config`.
    pub fn from_dir<P: AsRef<Path>>(dir: P, config: &DrugFinderConfig) -> Result<Self, Error> {
        let dir = dir.as_ref();

        if !dir.is_dir() {
            return Err(Error::ResourceUnavailable(format!(
                "{} is not a directory",
                dir.display()
            )));
        }

        let csv_path = [DICTIONARY_CSV_FILE_NAME, COMPRESSED_DICTIONARY_CSV_FILE_NAME]
            .iter()
            .map(|file_name| dir.join(file_name))
            .find(|path| path.is_file())
            .ok_or_else(|| {
                Error::ResourceUnavailable(format!(
                    "No {} or {} in {}",
                    DICTIONARY_CSV_FILE_NAME,
                    COMPRESSED_DICTIONARY_CSV_FILE_NAME,
                    dir.display()
                ))
            })?;

        let mut config = config.clone();
        if dir.join(NORMALIZE_UNICODE_FLAG_FILE_NAME).exists() {
            debug!("Unicode normalization enabled by {}", NORMALIZE_UNICODE_FLAG_FILE_NAME);
            config.normalize_unicode = true;
        }

        Self::from_path(csv_path, &config)
    }

    pub fn index(&self) -> &MemoryTermIndex {
        &self.index
    }

    pub fn store(&self) -> &MemoryTermStore {
        &self.store
    }

    /// Whether terms were folded to ASCII when indexed. Queries must be folded the same way.
    pub fn normalize_unicode(&self) -> bool {
        self.normalize_unicode
    }
}
