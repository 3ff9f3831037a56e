/// English stopwords (NLTK list). Membership is tested against the exact token text.
pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Words that are common in pharmacological text but never useful on their own.
pub const DRUGBANK_SPECIFIC_STOPWORDS: &[&str] = &[
    "drug", "drugs", "dose", "doses", "dosage", "tablet", "tablets", "capsule", "capsules",
    "solution", "injection", "oral", "daily",
];

/// Stopword lemmas that still carry meaning at the start of a mention.
pub const NEGATIONS: &[&str] = &["none", "non", "neither", "nor", "no", "not"];

/// Dash-like characters allowed in the middle of a mention (e.g. `COVID-19`).
pub const UNICODE_DASHES: &[&str] = &[
    "\u{002D}", "\u{007E}", "\u{00AD}", "\u{058A}", "\u{05BE}", "\u{1400}", "\u{1806}",
    "\u{2010}", "\u{2011}", "\u{2012}", "\u{2013}", "\u{2014}", "\u{2015}", "\u{2053}",
    "\u{207B}", "\u{208B}", "\u{2212}", "\u{2E17}", "\u{2E3A}", "\u{2E3B}", "\u{301C}",
    "\u{3030}", "\u{30A0}", "\u{FE31}", "\u{FE32}", "\u{FE58}", "\u{FE63}", "\u{FF0D}",
];

pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "another", "any",
    "some", "no", "either", "neither",
];

pub const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "onto", "upon", "over",
    "under", "about", "against", "between", "through", "during", "before", "after", "above",
    "below", "without", "within", "via", "per", "among", "across", "toward", "towards",
    "despite", "throughout",
];

pub const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet", "plus"];

pub const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion",
];

pub const BRACKETS: &[char] = &['(', ')', '[', ']', '{', '}', '<', '>'];

/// File names used by an installed dictionary directory.
pub const DICTIONARY_CSV_FILE_NAME: &str = "drug-terms.csv";
pub const COMPRESSED_DICTIONARY_CSV_FILE_NAME: &str = "drug-terms.csv.gz";
pub const NORMALIZE_UNICODE_FLAG_FILE_NAME: &str = "normalize-unicode.flag";
