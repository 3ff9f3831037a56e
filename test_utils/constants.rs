pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

pub const TEST_DICTIONARY_CSV_PATH: &str = "tests/test_data_files/test_dictionary.csv";
