//! Word Counting Module Tests
//!
//! ## Test Scopes
//! - **Frequency**: Counts per canonical word, unknown words, rejections.
//! - **Normalization**: Synonym merging and the lower-case policy.
//! - **Concurrency**: No lost updates and no partially visible batches.

#[cfg(test)]
mod tests {
    use crate::counting::{WordCount, WordStore};
    use crate::normalize::{DictionaryTranslator, Rejection, standard};
    use std::sync::{Arc, Barrier};

    fn standard_store() -> WordStore {
        let dictionary =
            DictionaryTranslator::from_pairs([("flor", "flower"), ("Blume", "flower")]).unwrap();
        WordStore::new(Arc::new(standard(dictionary)))
    }

    // ============================================================
    // FREQUENCY TESTS (pass-through)
    // ============================================================

    #[test]
    fn test_add_words_counts_frequency() {
        let store = WordStore::default();
        let report = store.add_words(["hello", "world", "python", "hello", "python", "hello"]);

        assert_eq!(report.accepted, 6);
        assert!(report.is_fully_accepted());
        assert_eq!(store.get_count("hello"), 3);
        assert_eq!(store.get_count("python"), 2);
        assert_eq!(store.get_count("world"), 1);
    }

    #[test]
    fn test_get_count_unknown_word_is_zero() {
        let store = WordStore::default();
        store.add_words(["hello"]);

        assert_eq!(store.get_count("never_added"), 0);
    }

    #[test]
    fn test_pass_through_is_case_sensitive() {
        let store = WordStore::default();
        store.add_words(["Blume", "blume"]);

        assert_eq!(store.get_count("Blume"), 1);
        assert_eq!(store.get_count("blume"), 1);
        assert_eq!(store.unique_word_count(), 2);
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let store = WordStore::default();
        let report = store.add_words(Vec::<String>::new());

        assert_eq!(report.accepted, 0);
        assert_eq!(store.unique_word_count(), 0);
        assert_eq!(store.total_word_count(), 0);
    }

    #[test]
    fn test_counts_are_order_independent() {
        let words = ["b", "a", "c", "a", "b", "a"];
        let forward = WordStore::default();
        let backward = WordStore::default();

        forward.add_words(words);
        backward.add_words(words.iter().rev());

        for word in ["a", "b", "c"] {
            assert_eq!(forward.get_count(word), backward.get_count(word));
        }
        assert_eq!(forward.get_count("a"), 3);
    }

    #[test]
    fn test_batch_equals_individual_adds() {
        let batch = WordStore::default();
        let single = WordStore::default();
        let words = ["x", "y", "x"];

        batch.add_words(words);
        for word in words {
            single.add_word(word).unwrap();
        }

        assert_eq!(batch.top_words(10, 0), single.top_words(10, 0));
    }

    // ============================================================
    // NORMALIZATION TESTS
    // ============================================================

    #[test]
    fn test_cross_synonym_merge() {
        let store = standard_store();
        store.add_words(["flower", "flor", "Blume"]);

        assert_eq!(store.get_count("flower"), 3);
        assert_eq!(store.get_count("flor"), 3);
        assert_eq!(store.unique_word_count(), 1);
    }

    #[test]
    fn test_rejected_word_is_reported_and_not_counted() {
        let store = standard_store();
        store.add_words(["flower"]);

        let report = store.add_words(["123"]);

        assert_eq!(report.accepted, 0);
        assert_eq!(report.rejected_count(), 1);
        assert_eq!(report.rejected[0].word, "123");
        assert!(matches!(
            report.rejected[0].reason,
            Rejection::NonAlphabetic { found: '1', .. }
        ));
        assert_eq!(store.get_count("123"), 0);
        assert_eq!(store.unique_word_count(), 1);
        assert_eq!(store.total_word_count(), 1);
    }

    #[test]
    fn test_rejection_does_not_abort_batch() {
        let store = standard_store();
        let report = store.add_words(["flower", "flor", "Blume", "123", "word", ""]);

        assert_eq!(report.accepted, 4);
        let rejected: Vec<&str> = report.rejected.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(rejected, vec!["123", ""]);
        assert_eq!(report.rejected[1].reason, Rejection::Empty);

        assert_eq!(store.unique_word_count(), 2);
        assert_eq!(store.get_count("flower"), 3);
        assert_eq!(store.get_count("word"), 1);
    }

    #[test]
    fn test_case_policy_lower_cases() {
        let store = standard_store();
        store.add_words(["Hello", "hello"]);

        assert_eq!(store.get_count("hello"), 2);
        assert_eq!(store.get_count("HELLO"), 2);
        assert_eq!(store.unique_word_count(), 1);
    }

    #[test]
    fn test_add_word_returns_canonical_form() {
        let store = standard_store();

        assert_eq!(store.add_word("Blume"), Ok("flower".to_string()));
        assert_eq!(store.add_word("Flower"), Ok("flower".to_string()));
        assert!(store.add_word("12").is_err());
        assert_eq!(store.get_count("flower"), 2);
    }

    #[test]
    fn test_store_never_holds_zero_counts() {
        let store = standard_store();
        store.add_words(["a1", "", "!!"]);

        assert_eq!(store.unique_word_count(), 0);
        let (total, words) = store.top_words(10, 0);
        assert_eq!(total, 0);
        assert!(words.is_empty());
    }

    #[test]
    fn test_shared_normalizer_keeps_stores_independent() {
        let dictionary = DictionaryTranslator::from_pairs([("flor", "flower")]).unwrap();
        let normalizer = Arc::new(standard(dictionary));
        let first = WordStore::new(normalizer.clone());
        let second = WordStore::new(normalizer);

        first.add_words(["flor"]);

        assert_eq!(first.get_count("flower"), 1);
        assert_eq!(second.get_count("flower"), 0);
    }

    // ============================================================
    // LISTING TESTS
    // ============================================================

    #[test]
    fn test_top_words_ordering_and_pagination() {
        let store = WordStore::default();
        store.add_words(["b", "a", "c", "c", "b", "c", "d"]);

        let (total, words) = store.top_words(2, 0);
        assert_eq!(total, 4);
        assert_eq!(
            words,
            vec![
                WordCount { word: "c".to_string(), count: 3 },
                WordCount { word: "b".to_string(), count: 2 },
            ]
        );

        // Ties ordered alphabetically
        let (_, words) = store.top_words(10, 2);
        let names: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(names, vec!["a", "d"]);

        let (_, words) = store.top_words(10, 100);
        assert!(words.is_empty());
    }

    #[test]
    fn test_listed_words_round_trip_through_get_count() {
        let store = standard_store();
        store.add_words(["İstanbul", "Straße", "ΣΟΦΟΣ", "Blume", "Hello", "señor", "hello"]);

        let (total, words) = store.top_words(usize::MAX, 0);
        assert_eq!(total, store.unique_word_count());
        assert!(!words.is_empty());
        for entry in words {
            assert_eq!(
                store.get_count(&entry.word),
                entry.count,
                "stored word '{}' does not round-trip",
                entry.word
            );
        }
        assert_eq!(store.get_count("İstanbul"), 0);
    }

    #[test]
    fn test_total_word_count() {
        let store = standard_store();
        store.add_words(["flor", "Blume", "tree", "7"]);

        assert_eq!(store.total_word_count(), 3);
    }

    // ============================================================
    // CONCURRENCY TESTS
    // ============================================================

    #[test]
    fn test_concurrent_distinct_words_no_lost_updates() {
        const THREADS: usize = 8;
        const WORDS_PER_THREAD: usize = 500;

        let store = WordStore::default();

        std::thread::scope(|scope| {
            for t in 0..THREADS {
                let store = &store;
                scope.spawn(move || {
                    for i in 0..WORDS_PER_THREAD {
                        store.add_words([format!("word_{}_{}", t, i)]);
                    }
                });
            }
        });

        assert_eq!(store.unique_word_count(), THREADS * WORDS_PER_THREAD);
        for t in 0..THREADS {
            for i in 0..WORDS_PER_THREAD {
                assert_eq!(store.get_count(&format!("word_{}_{}", t, i)), 1);
            }
        }
    }

    #[test]
    fn test_concurrent_same_word_no_lost_updates() {
        const THREADS: u64 = 8;
        const ADDS_PER_THREAD: u64 = 1_000;

        let store = standard_store();

        std::thread::scope(|scope| {
            for t in 0..THREADS {
                let store = &store;
                scope.spawn(move || {
                    // Mix of spellings that all normalize to "flower"
                    let spelling = ["flower", "flor", "Blume", "FLOWER"][t as usize % 4];
                    for _ in 0..ADDS_PER_THREAD {
                        store.add_words([spelling]);
                    }
                });
            }
        });

        assert_eq!(store.get_count("flower"), THREADS * ADDS_PER_THREAD);
        assert_eq!(store.unique_word_count(), 1);
    }

    #[test]
    fn test_readers_never_see_partial_batches() {
        const BATCH: usize = 16;
        const BATCHES: usize = 2_000;
        const READS: usize = 20_000;

        let store = WordStore::default();
        let batch: Vec<String> = (0..BATCH).map(|i| format!("w{}", i)).collect();
        let start = Barrier::new(2);

        let reads = std::thread::scope(|scope| {
            scope.spawn(|| {
                start.wait();
                for _ in 0..BATCHES {
                    store.add_words(&batch);
                }
            });

            let reader = scope.spawn(|| {
                start.wait();
                let mut reads = 0;
                for _ in 0..READS {
                    let total = store.total_word_count();
                    assert_eq!(total % BATCH as u64, 0, "observed a partial batch");
                    reads += 1;
                }
                reads
            });

            reader.join().unwrap()
        });

        assert_eq!(reads, READS);
        assert_eq!(store.total_word_count(), (BATCH * BATCHES) as u64);
    }
}
