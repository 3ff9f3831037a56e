pub mod make_ngrams;
pub mod normalize_term;
pub mod read_drug_dictionary;

pub use make_ngrams::make_ngrams;
pub use normalize_term::normalize_term;
pub use read_drug_dictionary::{
    read_drug_dictionary_from_bytes, read_drug_dictionary_from_path,
    read_drug_dictionary_from_string,
};
