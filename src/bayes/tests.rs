use super::*;

fn trained_pair() -> Bayes {
    let mut classifier = Bayes::new(["Interesting", "Uninteresting"]).expect("two categories");
    classifier
        .train("Interesting", "here are some good words. I hope you love them")
        .expect("train");
    classifier
        .train("Uninteresting", "here are some bad words, I hate you")
        .expect("train");
    classifier
}

#[test]
fn test_construction_defaults() {
    let classifier = Bayes::new(["Interesting", "Uninteresting"]).expect("two categories");
    assert_eq!(classifier.language(), "en");
    assert!(classifier.stemmer_enabled());
    assert!(classifier.auto_categorize_enabled());
    assert!(!classifier.threshold_enabled());
    assert_eq!(classifier.threshold(), 0.0);
    assert_eq!(classifier.total_words(), 0);
    assert_eq!(classifier.total_trainings(), 0);
}

#[test]
fn test_construction_requires_a_category() {
    let err = Bayes::new(Vec::<String>::new()).expect_err("no categories");
    assert!(matches!(
        err,
        ClasificarError::UnsupportedOperation { .. }
    ));
}

#[test]
fn test_categories_in_declaration_order() {
    let classifier = Bayes::new(["B", "A", "C"]).expect("three categories");
    assert_eq!(classifier.categories(), vec!["B", "A", "C"]);
}

#[test]
fn test_categories_from_vec_of_strings() {
    let names: Vec<String> = vec!["Interesting".into(), "Uninteresting".into()];
    let classifier = Bayes::new(names).expect("two categories");
    assert_eq!(classifier.categories(), vec!["Interesting", "Uninteresting"]);
}

#[test]
fn test_good_training() {
    let mut classifier = Bayes::new(["Interesting"]).expect("one category");
    classifier.train("Interesting", "love").expect("train");
    assert_eq!(classifier.total_trainings(), 1);
    assert_eq!(classifier.training_count("Interesting"), Some(1));
}

#[test]
fn test_training_with_utf8() {
    let mut classifier = Bayes::new(["Interesting"]).expect("one category");
    classifier.train("Interesting", "Água").expect("train");
    assert_eq!(classifier.total_words(), 1);
}

#[test]
fn test_training_unknown_category_fails_without_auto_categorize() {
    let mut classifier = Bayes::new(["Interesting", "Uninteresting"])
        .expect("two categories")
        .with_auto_categorize(false);

    let err = classifier
        .train("Ruby", "a really sweet language")
        .expect_err("unknown category");
    assert!(matches!(
        &err,
        ClasificarError::CategoryNotFound { category } if category == "Ruby"
    ));

    // No mutation happened.
    assert!(!classifier.categories().contains(&"Ruby"));
    assert_eq!(classifier.total_words(), 0);
    assert_eq!(classifier.total_trainings(), 0);
}

#[test]
fn test_training_unknown_category_creates_it_with_auto_categorize() {
    let mut classifier = Bayes::new(["Interesting", "Uninteresting"])
        .expect("two categories")
        .with_auto_categorize(true);

    classifier
        .train("Ruby", "a really sweet language")
        .expect("auto-created");
    assert!(classifier.categories().contains(&"Ruby"));
    assert_eq!(classifier.training_count("Ruby"), Some(1));
}

#[test]
fn test_untraining_unknown_category_fails_without_auto_categorize() {
    let mut classifier = Bayes::new(["Interesting"])
        .expect("one category")
        .with_auto_categorize(false);

    let err = classifier
        .untrain("Ruby", "words")
        .expect_err("unknown category");
    assert!(matches!(err, ClasificarError::CategoryNotFound { .. }));
}

#[test]
fn test_add_category_is_idempotent() {
    let mut classifier = Bayes::new(["Interesting", "Uninteresting"]).expect("two categories");
    classifier.add_category("Test");
    classifier.add_category("Test");
    assert_eq!(
        classifier.categories(),
        vec!["Interesting", "Uninteresting", "Test"]
    );
}

#[test]
fn test_classification() {
    let classifier = trained_pair();
    assert_eq!(
        classifier.classify("I hate bad words and you"),
        Some("Uninteresting".to_string())
    );
    assert_eq!(
        classifier.classify("I love"),
        Some("Interesting".to_string())
    );
}

#[test]
fn test_classification_with_score() {
    let classifier = trained_pair();
    let (label, score) = classifier.classify_with_score("I hate bad words and you");
    assert_eq!(label, Some("Uninteresting".to_string()));
    // 3 * ln(2/12) + ln(1/2)
    assert!((score - (-6.0684)).abs() < 1e-3, "score was {score}");
}

#[test]
fn test_scores_are_finite_and_ordered_by_declaration() {
    let classifier = trained_pair();
    let scores = classifier.classifications("anything at all");
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].0, "Interesting");
    assert_eq!(scores[1].0, "Uninteresting");
    for (_, score) in scores {
        assert!(score.is_finite());
        assert!(score <= 0.0);
    }
}

#[test]
fn test_prior_favors_more_trained_category() {
    let mut classifier = Bayes::new(["A", "B"]).expect("two categories");
    classifier.train("A", "zebra quagga").expect("train");
    classifier.train("A", "zebra quagga").expect("train");
    classifier.train("B", "zebra quagga").expect("train");

    assert_eq!(classifier.classify("zebra"), Some("A".to_string()));
}

#[test]
fn test_untrained_engine_classifies_deterministically() {
    let classifier = Bayes::new(["First", "Second"]).expect("two categories");
    // All scores tie at the smoothing floor; declaration order decides.
    let (label, score) = classifier.classify_with_score("never seen words");
    assert_eq!(label, Some("First".to_string()));
    assert_eq!(score, 0.0);
}

#[test]
fn test_empty_document_classifies_deterministically() {
    let classifier = trained_pair();
    assert!(classifier.classify("").is_some());
    assert!(classifier.classify("a an the").is_some());
}

#[test]
fn test_untrain_is_exact_inverse() {
    let mut classifier = trained_pair();
    let before = classifier.snapshot();

    let text = "a seventh extra document, with words we love!";
    for _ in 0..3 {
        classifier.train("Interesting", text).expect("train");
    }
    assert_ne!(classifier.snapshot(), before);

    for _ in 0..3 {
        classifier.untrain("Interesting", text).expect("untrain");
    }
    assert_eq!(classifier.snapshot(), before);
}

#[test]
fn test_untrain_clamps_at_zero() {
    let mut classifier = Bayes::new(["Colors"]).expect("one category");
    classifier.train("Colors", "red orange green blue").expect("train");

    // Untraining more occurrences than were trained never drives counts
    // negative.
    classifier
        .untrain("Colors", "red red red red")
        .expect("untrain");
    classifier.untrain("Colors", "red").expect("untrain");

    assert_eq!(classifier.total_words(), 3);
    assert_eq!(classifier.training_count("Colors"), Some(0));
    assert_eq!(classifier.total_trainings(), 0);
}

#[test]
fn test_untrain_changes_classification() {
    let mut classifier = trained_pair();
    classifier.add_category("colors");
    classifier
        .train("colors", "red orange green blue seven")
        .expect("train");

    let before = classifier.classify("seven");
    assert_eq!(before, Some("colors".to_string()));

    classifier.untrain("colors", "seven").expect("untrain");
    let after = classifier.classify("seven");
    assert_ne!(before, after);
}

#[test]
fn test_threshold_controls() {
    let mut classifier = Bayes::new(["Normal"]).expect("one category");
    assert!(!classifier.threshold_enabled());

    classifier.enable_threshold();
    assert!(classifier.threshold_enabled());
    assert_eq!(classifier.threshold(), 0.0);

    classifier.set_threshold(-7.0);
    assert_eq!(classifier.threshold(), -7.0);

    classifier.disable_threshold();
    assert!(!classifier.threshold_enabled());

    let built = Bayes::new(["Normal"])
        .expect("one category")
        .with_threshold(-3.5);
    assert!(built.threshold_enabled());
    assert_eq!(built.threshold(), -3.5);
}

#[test]
fn test_threshold_rejects_off_distribution_input() {
    let mut classifier = Bayes::new(["Spam"])
        .expect("one category")
        .with_threshold(-3.5);
    classifier
        .train("Spam", "cheap watches viagra offer")
        .expect("train");

    // 2 * ln(2/8) = -2.77, above the threshold.
    assert_eq!(classifier.classify("cheap viagra"), Some("Spam".to_string()));
    // 2 * ln(1/8) = -4.16, below the threshold.
    assert_eq!(classifier.classify("random gibberish"), None);

    // The score is reported even for a rejected classification.
    let (label, score) = classifier.classify_with_score("random gibberish");
    assert_eq!(label, None);
    assert!((score - (-4.1589)).abs() < 1e-3, "score was {score}");
}

#[test]
fn test_threshold_accepts_equal_score() {
    let mut classifier = Bayes::new(["Spam"])
        .expect("one category")
        .with_threshold(0.0);
    classifier.train("Spam", "cheap watches").expect("train");

    // An all-stopword query scores exactly the prior ln(1/1) = 0.0, which
    // is not below the threshold.
    assert_eq!(classifier.classify("a an the"), Some("Spam".to_string()));
}

#[test]
fn test_stemming_disabled_keeps_inflections_distinct() {
    let mut classifier = Bayes::new(["A", "B"])
        .expect("two categories")
        .with_stemming(false);
    classifier.train("A", "running fast").expect("train");
    classifier.train("B", "sleeping late").expect("train");

    assert!(!classifier.stemmer_enabled());
    assert_eq!(classifier.classify("running"), Some("A".to_string()));
}

#[test]
fn test_language_builder() {
    let classifier = Bayes::new(["Interesting"])
        .expect("one category")
        .with_language("en-ja");
    assert_eq!(classifier.language(), "en-ja");
}

#[test]
fn test_training_count_for_unknown_category() {
    let classifier = Bayes::new(["Interesting"]).expect("one category");
    assert_eq!(classifier.training_count("Nope"), None);
}
