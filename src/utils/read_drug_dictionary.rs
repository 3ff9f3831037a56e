use crate::models::DrugRecord;
use crate::Error;
use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use log::debug;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

const ID_HEADER: &str = "drugbank_id";
const NAME_HEADER: &str = "name";
const SYNONYMS_HEADER: &str = "synonyms";
const PRODUCTS_HEADER: &str = "products";

/// Separator used for multi-valued columns (`synonyms`, `products`).
const MULTI_VALUE_SEPARATOR: char = ';';

pub fn read_drug_dictionary_from_string(csv: &str) -> Result<Vec<DrugRecord>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(csv));

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let column = |name: &str| headers.iter().position(|h| h.trim() == name);

    let id_column = column(ID_HEADER)
        .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", ID_HEADER)))?;
    let name_column = column(NAME_HEADER)
        .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", NAME_HEADER)))?;
    let synonyms_column = column(SYNONYMS_HEADER);
    let products_column = column(PRODUCTS_HEADER);
    let description_column = column("description");
    let state_column = column("state");
    let indication_column = column("indication");
    let pharmacodynamics_column = column("pharmacodynamics");

    let mut records = Vec::new();

    for (line_idx, record) in reader.records().enumerate() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let drugbank_id = field(&record, Some(id_column));
        let name = field(&record, Some(name_column));

        let (Some(drugbank_id), Some(name)) = (drugbank_id, name) else {
            debug!("Skipping dictionary row {}: missing id or name", line_idx + 1);
            continue;
        };

        records.push(DrugRecord {
            drugbank_id,
            name,
            synonyms: split_multi_value(field(&record, synonyms_column)),
            products: split_multi_value(field(&record, products_column)),
            description: field(&record, description_column),
            state: field(&record, state_column),
            indication: field(&record, indication_column),
            pharmacodynamics: field(&record, pharmacodynamics_column),
        });
    }

    debug!("Read {} dictionary records", records.len());

    Ok(records)
}

/// Decompress and parse a gzipped dictionary CSV.
pub fn read_drug_dictionary_from_bytes(read_bytes: &[u8]) -> Result<Vec<DrugRecord>, Error> {
    let mut decoder = GzDecoder::new(read_bytes);
    let mut decompressed_data = String::new();
    decoder.read_to_string(&mut decompressed_data)?;

    read_drug_dictionary_from_string(&decompressed_data)
}

/// Reads a dictionary CSV from disk; paths ending in `.gz` are decompressed first.
pub fn read_drug_dictionary_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<DrugRecord>, Error> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|e| {
        Error::ResourceUnavailable(format!("Could not read {}: {}", path.display(), e))
    })?;

    let is_gzipped = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("gz"));

    if is_gzipped {
        return read_drug_dictionary_from_bytes(&bytes);
    }

    let csv = String::from_utf8(bytes)
        .map_err(|e| Error::ParserError(format!("{} is not valid UTF-8: {}", path.display(), e)))?;

    read_drug_dictionary_from_string(&csv)
}

fn field(record: &StringRecord, column: Option<usize>) -> Option<String> {
    let value = record.get(column?)?.trim();

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn split_multi_value(value: Option<String>) -> Vec<String> {
    match value {
        Some(values) => values
            .split(MULTI_VALUE_SEPARATOR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect(),
        None => Vec::new(),
    }
}
