#![allow(dead_code)]

use drug_finder::{
    DrugDictionary, DrugFinder, DrugFinderConfig, MatchGroup, RecordId, RuleBasedTokenizer, Token,
    Tokenizer,
};
use std::collections::BTreeSet;
use std::{fs, path::Path};
pub mod constants;
use constants::TEST_DICTIONARY_CSV_PATH;

/// Loads the small dictionary shared by the integration tests.
pub fn load_test_dictionary(config: &DrugFinderConfig) -> DrugDictionary {
    DrugDictionary::from_path(TEST_DICTIONARY_CSV_PATH, config)
        .expect("Failed to load test dictionary")
}

pub fn tokenize(text: &str) -> Vec<Token> {
    RuleBasedTokenizer::english().tokenize(text)
}

/// `(start, end, text)` of every span, for compact assertions.
pub fn span_tuples<I>(spans: I) -> Vec<(usize, usize, String)>
where
    I: IntoIterator<Item = drug_finder::Span>,
{
    spans
        .into_iter()
        .map(|span| (span.start, span.end, span.text))
        .collect()
}

/// Record ids of the top candidate of each group.
pub fn top_record_ids(groups: &[MatchGroup]) -> Vec<RecordId> {
    groups
        .iter()
        .map(|group| group.top().record_id.clone())
        .collect()
}

// Helper function to get the expected record ids from the text file
pub fn get_expected_record_ids(file_path: &Path) -> Vec<RecordId> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix("EXPECTED:")
                .map(|record_id| record_id.trim().to_string())
        })
        .collect()
}

/// Text of a test file without its `EXPECTED:` and `COMMENT:` lines.
pub fn get_document_text(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with("EXPECTED:")
                && !line.trim_start().starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

// Helper function to run the test for each file in the directory
pub fn run_test_for_file(test_file_path: &Path, drug_finder: &DrugFinder) {
    let text = get_document_text(test_file_path);
    let results = drug_finder.find_drugs(&text);

    let result_record_ids = top_record_ids(&results);
    let expected_record_ids = get_expected_record_ids(test_file_path);

    eprintln!(
        "{} - found {:?}, expected {:?}",
        test_file_path.display(),
        result_record_ids,
        expected_record_ids
    );

    let unique_result_record_ids: BTreeSet<&RecordId> = result_record_ids.iter().collect();
    let unique_expected_record_ids: BTreeSet<&RecordId> = expected_record_ids.iter().collect();

    assert_eq!(
        unique_result_record_ids,
        unique_expected_record_ids,
        "{} - Expected: {:?}, but got: {:?}",
        test_file_path.display(),
        expected_record_ids,
        result_record_ids
    );

    assert_eq!(
        result_record_ids.len(),
        expected_record_ids.len(),
        "{} - Unexpected number of match groups: {:?}",
        test_file_path.display(),
        result_record_ids
    );
}
