use tf_idf_classifier::{
    float_equals, unique, ArgumentError, Classification, ClassifierConfig, ClassifierError,
    TextClassifier,
};

fn trained(labels: [&str; 3]) -> TextClassifier {
    let mut classifier: TextClassifier = TextClassifier::new(labels).unwrap();
    classifier
        .train("class1", &["Credit Interest", "Interest Credited", "Realized Interest on XXXX"])
        .unwrap();
    classifier
        .train("class2", &["Coffee", "StormBukcs", "DoMcnalds XXXX"])
        .unwrap();
    classifier
        .train("class3", &["Rent payed", "House Rent XXXXXX", "payment of Rent"])
        .unwrap();
    classifier
}

#[test]
fn classifies_seen_and_generalized_text_after_finalize() {
    // registry order differs from training order
    let mut classifier = trained(["class2", "class1", "class3"]);
    classifier.finalize().unwrap();

    assert_eq!(classifier.classify("StormBukcs").unwrap(), "class2");
    assert_eq!(classifier.classify("House Rent XXXXXX").unwrap(), "class3");
    assert_eq!(classifier.classify("papaya").unwrap(), "");
}

#[test]
fn unknown_text_is_a_tie_not_an_error() {
    let mut classifier = trained(["class1", "class2", "class3"]);
    classifier.finalize().unwrap();

    let scores = classifier.scores("papaya").unwrap().unwrap();
    let values: Vec<f64> = scores.iter().map(|(_, s)| s).collect();
    assert!(values.windows(2).all(|w| float_equals(w[0], w[1])));
    assert_eq!(classifier.classify_detailed("papaya").unwrap(), Classification::Ambiguous);
}

#[test]
fn finalize_twice_matches_finalize_once() {
    let mut once = trained(["class1", "class2", "class3"]);
    once.finalize().unwrap();
    let mut twice = trained(["class1", "class2", "class3"]);
    twice.finalize().unwrap();
    twice.finalize().unwrap();

    for text in ["StormBukcs", "Rent", "Interest on", "XXXX", "papaya"] {
        assert_eq!(once.classify(text).unwrap(), twice.classify(text).unwrap());
    }
}

#[test]
fn errors_surface_synchronously() {
    let mut classifier = trained(["class1", "class2", "class3"]);
    assert_eq!(
        classifier.train("class4", &["some text"]),
        Err(ClassifierError::UnknownClass { name: "class4".to_string() })
    );
    assert_eq!(
        classifier.train("class1", &["fine", ""]),
        Err(ClassifierError::InvalidArgument(ArgumentError::EmptyDocument))
    );
    assert_eq!(classifier.doc_num("class1"), Some(3));

    let mut uninitialized: TextClassifier = TextClassifier::default();
    assert_eq!(uninitialized.finalize(), Err(ClassifierError::NotInitialized));
}

#[test]
fn config_from_json() {
    let config: ClassifierConfig = serde_json::from_str(r#"{"epsilon": 0.5}"#).unwrap();
    let mut classifier: TextClassifier = TextClassifier::with_config(["a", "b"], config).unwrap();
    classifier.train("a", &["apple apple"]).unwrap();
    classifier.train("b", &["banana"]).unwrap();
    // posteriors of a lone seen term are far apart
    assert_eq!(classifier.classify("apple").unwrap(), "a");
}

#[test]
fn unique_labels_keep_first_seen_order() {
    assert_eq!(unique(["class1", "class2", "class1"]), vec!["class1", "class2"]);
    let classifier: TextClassifier = TextClassifier::new(["class1", "class2", "class1"]).unwrap();
    assert_eq!(classifier.classes(), vec!["class1", "class2"]);
}
