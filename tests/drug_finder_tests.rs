#[path = "../test_utils/lib.rs"]
mod test_utils;
use test_utils::constants::TEST_FILES_DIRECTORY;

use drug_finder::{
    DrugDictionary, DrugFinder, DrugFinderConfig, DrugRecord, Error, MatchGroup, MatchObserver,
    MatchSummary, OverlapCriteria, SimilarityMeasure,
};
use std::collections::HashSet;
use std::fs::read_dir;
use std::str::FromStr;
use std::sync::Mutex;
use test_utils::{load_test_dictionary, run_test_for_file, tokenize, top_record_ids};

#[cfg(test)]
mod file_tests {
    use super::*;

    #[test]
    fn test_find_drugs_in_multiple_files() {
        let config = DrugFinderConfig::default();
        let dictionary = load_test_dictionary(&config);
        let drug_finder =
            DrugFinder::with_dictionary(config, &dictionary).expect("Failed to build finder");

        let files = read_dir(TEST_FILES_DIRECTORY)
            .expect("Failed to read test files directory")
            .collect::<Result<Vec<_>, _>>()
            .expect("Failed to collect directory entries");

        assert!(!files.is_empty());

        for file in files {
            let file_path = file.path();

            if file_path.is_file() {
                run_test_for_file(&file_path, &drug_finder);
            }
        }
    }
}

#[cfg(test)]
mod match_tests {
    use super::*;

    const SAMPLE_TEXT: &str = "Bayer Aspirin and paracetamol were given with Ritalin SR. \
        No Tylenol or Stromectol was prescribed; ivermectine was considered.";

    #[test]
    fn test_empty_text() {
        let config = DrugFinderConfig::default();
        let dictionary = load_test_dictionary(&config);
        let drug_finder = DrugFinder::with_dictionary(config, &dictionary).unwrap();

        assert!(drug_finder.find_drugs("").is_empty());
        assert!(drug_finder.match_text("   ", false, true).is_empty());
    }

    #[test]
    fn test_match_is_idempotent() {
        let config = DrugFinderConfig::default();
        let dictionary = load_test_dictionary(&config);
        let drug_finder = DrugFinder::with_dictionary(config, &dictionary).unwrap();

        for best_match in [true, false] {
            for ignore_syntax in [true, false] {
                assert_eq!(
                    drug_finder.match_text(SAMPLE_TEXT, best_match, ignore_syntax),
                    drug_finder.match_text(SAMPLE_TEXT, best_match, ignore_syntax)
                );
            }
        }
    }

    #[test]
    fn test_group_invariants() {
        for criteria in OverlapCriteria::ALL {
            let config = DrugFinderConfig {
                overlap_criteria: criteria,
                ..Default::default()
            };
            let dictionary = load_test_dictionary(&config);
            let drug_finder = DrugFinder::with_dictionary(config, &dictionary).unwrap();

            for ignore_syntax in [true, false] {
                let groups = drug_finder.match_text(SAMPLE_TEXT, true, ignore_syntax);
                assert!(!groups.is_empty());

                for (idx, group) in groups.iter().enumerate() {
                    assert!(!group.is_empty());

                    // Unique record ids, similarity non-increasing
                    let record_ids: HashSet<&str> = group
                        .iter()
                        .map(|candidate| candidate.record_id.as_str())
                        .collect();
                    assert_eq!(record_ids.len(), group.len());

                    for pair in group.candidates().windows(2) {
                        assert!(pair[0].similarity >= pair[1].similarity);
                    }

                    // No two accepted groups overlap
                    for other in &groups[idx + 1..] {
                        assert!(
                            !group.interval().overlaps(&other.interval()),
                            "{:?} overlaps {:?}",
                            group.interval(),
                            other.interval()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_score_criteria_prefers_higher_similarity() {
        let config = DrugFinderConfig::default();
        let dictionary = load_test_dictionary(&config);
        let drug_finder = DrugFinder::with_dictionary(config, &dictionary).unwrap();

        // "Bayer Aspirin" scores 7/11 against "bayer aspirin", "Aspirin" 4/5 against "aspirin"
        let all_groups = drug_finder.match_text("Bayer Aspirin", false, false);
        let intervals: Vec<(usize, usize)> = all_groups
            .iter()
            .map(|group| (group.start(), group.end()))
            .collect();
        assert_eq!(intervals, vec![(0, 13), (6, 13), (6, 13)]);

        let groups = drug_finder.find_drugs("Bayer Aspirin");
        assert_eq!(groups.len(), 1);
        assert_eq!((groups[0].start(), groups[0].end()), (6, 13));
        assert_eq!(groups[0].top().term, "aspirin");
        assert_eq!(groups[0].top().ngram, "Aspirin");
    }

    #[test]
    fn test_length_criteria_prefers_longer_span() {
        let config = DrugFinderConfig {
            overlap_criteria: OverlapCriteria::Length,
            ..Default::default()
        };
        let dictionary = load_test_dictionary(&config);
        let drug_finder = DrugFinder::with_dictionary(config, &dictionary).unwrap();

        let groups = drug_finder.find_drugs("Bayer Aspirin");
        assert_eq!(groups.len(), 1);
        assert_eq!((groups[0].start(), groups[0].end()), (0, 13));
        assert_eq!(groups[0].top().term, "bayer aspirin");
        assert_eq!(groups[0].top().record_id, "DB00945");
    }

    #[test]
    fn test_ignore_syntax_considers_closed_class_words() {
        let config = DrugFinderConfig::default();
        let dictionary = load_test_dictionary(&config);
        let drug_finder = DrugFinder::with_dictionary(config, &dictionary).unwrap();

        let starts = |groups: Vec<MatchGroup>| -> Vec<usize> {
            groups.iter().map(|group| group.start()).collect()
        };

        // "the aspirin" is within the cosine threshold of "aspirin"
        assert!(starts(drug_finder.match_text("The aspirin", false, true)).contains(&0));
        assert!(!starts(drug_finder.match_text("The aspirin", false, false)).contains(&0));

        let groups = drug_finder.match_text("The aspirin", true, true);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].start(), 4);
        assert_eq!(groups[0].similarity(), 1.0);
    }

    #[test]
    fn test_candidates_carry_record_data() {
        let config = DrugFinderConfig::default();
        let dictionary = load_test_dictionary(&config);
        let drug_finder = DrugFinder::with_dictionary(config, &dictionary).unwrap();

        let groups = drug_finder.find_drugs("Refludan was started.");
        assert_eq!(top_record_ids(&groups), vec!["DB00001"]);

        let candidate = groups[0].top();
        assert_eq!(candidate.data.name, "Lepirudin");
        assert_eq!(candidate.data.products, vec!["Refludan"]);
        assert_eq!(candidate.data.state.as_deref(), Some("liquid"));
    }

    #[test]
    fn test_unicode_normalization() {
        let config = DrugFinderConfig {
            normalize_unicode: true,
            ..Default::default()
        };
        let dictionary = load_test_dictionary(&config);
        let drug_finder = DrugFinder::with_dictionary(config, &dictionary).unwrap();

        let groups = drug_finder.find_drugs("Ivermectína");
        assert_eq!(groups.len(), 1);

        let candidate = groups[0].top();
        assert_eq!(candidate.record_id, "DB00602");
        assert_eq!(candidate.term, "ivermectina");
        assert_eq!(candidate.ngram, "Ivermectína");
        assert_eq!((candidate.start, candidate.end), (0, 11));
        assert!((candidate.similarity - 8.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_match_tokens() {
        let config = DrugFinderConfig::default();
        let dictionary = load_test_dictionary(&config);
        let drug_finder = DrugFinder::with_dictionary(config, &dictionary).unwrap();

        let text = "Concerta was switched to Ritalin.";
        let tokens = tokenize(text);

        assert_eq!(
            drug_finder.match_tokens(&tokens, true, false),
            drug_finder.find_drugs(text)
        );
        assert_eq!(
            top_record_ids(&drug_finder.match_tokens(&tokens, true, false)),
            vec!["DB00422", "DB00422"]
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let config = DrugFinderConfig::default();
        let dictionary = load_test_dictionary(&config);
        let drug_finder = DrugFinder::with_dictionary(config, &dictionary).unwrap();
        let expected = drug_finder.find_drugs(SAMPLE_TEXT);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| drug_finder.find_drugs(SAMPLE_TEXT)))
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct RecordingObserver {
        summaries: Mutex<Vec<MatchSummary>>,
    }

    impl MatchObserver for RecordingObserver {
        fn on_match(&self, summary: &MatchSummary) {
            self.summaries.lock().unwrap().push(*summary);
        }
    }

    #[test]
    fn test_observer_receives_summary() {
        let config = DrugFinderConfig::default();
        let dictionary = load_test_dictionary(&config);
        let observer = RecordingObserver::default();
        let drug_finder = DrugFinder::with_dictionary(config, &dictionary)
            .unwrap()
            .with_observer(&observer);

        let groups = drug_finder.find_drugs("Aspirin and paracetamol were given.");

        let summaries = observer.summaries.lock().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].token_count, 6);
        assert_eq!(summaries[0].group_count, groups.len());
        assert_eq!(
            summaries[0].candidate_count,
            groups.iter().map(|group| group.len()).sum::<usize>()
        );
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    fn build(config: DrugFinderConfig) -> Result<(), Error> {
        let dictionary = DrugDictionary::new(Vec::<DrugRecord>::new(), &config);
        DrugFinder::with_dictionary(config, &dictionary).map(|_| ())
    }

    #[test]
    fn test_invalid_configuration() {
        let invalid_configs = [
            DrugFinderConfig {
                window: 0,
                ..Default::default()
            },
            DrugFinderConfig {
                ngram_length: 0,
                ..Default::default()
            },
            DrugFinderConfig {
                threshold: 0.0,
                ..Default::default()
            },
            DrugFinderConfig {
                threshold: f64::NAN,
                ..Default::default()
            },
            DrugFinderConfig {
                threshold: 1.5,
                ..Default::default()
            },
            DrugFinderConfig {
                stopwords: HashSet::new(),
                ..Default::default()
            },
        ];

        for config in invalid_configs {
            let description = format!("{:?}", config);
            assert!(
                matches!(build(config), Err(Error::ConfigurationError(_))),
                "{}",
                description
            );
        }
    }

    #[test]
    fn test_overlap_measure_allows_count_threshold() {
        let config = DrugFinderConfig {
            similarity_measure: SimilarityMeasure::Overlap,
            threshold: 3.0,
            ..Default::default()
        };

        assert!(build(config).is_ok());
    }

    #[test]
    fn test_invalid_names() {
        assert!(matches!(
            SimilarityMeasure::from_str("hamming"),
            Err(Error::ConfigurationError(_))
        ));
        assert!(matches!(
            OverlapCriteria::from_str("longest"),
            Err(Error::ConfigurationError(_))
        ));
        assert_eq!(OverlapCriteria::from_str("length").unwrap(), OverlapCriteria::Length);
    }

    #[test]
    fn test_retrieval_settings_follow_dictionary() {
        let dictionary_config = DrugFinderConfig {
            threshold: 0.99,
            similarity_measure: SimilarityMeasure::Jaccard,
            ..Default::default()
        };
        let dictionary = load_test_dictionary(&dictionary_config);

        let drug_finder =
            DrugFinder::with_dictionary(DrugFinderConfig::default(), &dictionary).unwrap();

        let info = drug_finder.get_info();
        assert_eq!(info.threshold, 0.99);
        assert_eq!(info.similarity_name, SimilarityMeasure::Jaccard);
        assert_eq!(drug_finder.config().threshold, 0.99);

        // Within the default threshold, but not the dictionary's
        assert!(drug_finder.find_drugs("Ritalinn").is_empty());

        let default_dictionary = load_test_dictionary(&DrugFinderConfig::default());
        let default_finder =
            DrugFinder::with_dictionary(DrugFinderConfig::default(), &default_dictionary).unwrap();
        assert_eq!(
            top_record_ids(&default_finder.find_drugs("Ritalinn")),
            vec!["DB00422"]
        );
    }

    #[test]
    fn test_get_info() {
        let config = DrugFinderConfig::default();
        let dictionary = DrugDictionary::new(Vec::<DrugRecord>::new(), &config);
        let drug_finder = DrugFinder::with_dictionary(config, &dictionary).unwrap();

        let info = drug_finder.get_info();

        assert_eq!(info.threshold, 0.7);
        assert_eq!(info.similarity_name, SimilarityMeasure::Cosine);
        assert_eq!(info.window, 5);
        assert_eq!(info.ngram_length, 3);
        assert_eq!(info.min_match_length, 1);
        assert_eq!(
            info.negations,
            vec!["neither", "no", "non", "none", "nor", "not"]
        );
        assert!(info.valid_punctuation.contains(&"-".to_string()));
        assert!(info.valid_punctuation.windows(2).all(|pair| pair[0] <= pair[1]));

        // Memoized
        assert!(std::ptr::eq(info, drug_finder.get_info()));
        assert!(info.to_string().contains("similarity_name: cosine"));
    }
}

#[cfg(test)]
mod dictionary_tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_from_dir_honours_normalize_flag() {
        let dir = std::env::temp_dir().join(format!("drug-finder-dict-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::copy(
            test_utils::constants::TEST_DICTIONARY_CSV_PATH,
            dir.join("drug-terms.csv"),
        )
        .unwrap();

        let config = DrugFinderConfig::default();

        let dictionary = DrugDictionary::from_dir(&dir, &config).unwrap();
        assert!(!dictionary.normalize_unicode());
        assert_eq!(dictionary.store().record_count(), 5);

        fs::write(dir.join("normalize-unicode.flag"), "").unwrap();
        let dictionary = DrugDictionary::from_dir(&dir, &config).unwrap();
        assert!(dictionary.normalize_unicode());

        let drug_finder = DrugFinder::with_dictionary(config, &dictionary).unwrap();
        assert!(drug_finder.config().normalize_unicode);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_dictionary() {
        let config = DrugFinderConfig::default();

        assert!(matches!(
            DrugDictionary::from_dir("tests/does-not-exist", &config),
            Err(Error::ResourceUnavailable(_))
        ));
        assert!(matches!(
            DrugDictionary::from_dir("tests/test_files", &config),
            Err(Error::ResourceUnavailable(_))
        ));
        assert!(matches!(
            DrugDictionary::from_path("tests/does-not-exist.csv", &config),
            Err(Error::ResourceUnavailable(_))
        ));
    }
}
