use std::fs;
use std::io::Write;

use name_classifier::{
    evaluate_predictor, extract_features, learn_predictor, output_error_analysis, output_weights,
    read_examples, Error, Label,
};

const TRAIN: &str = "\
1 President Bill Clinton said
1 ( John Smith )
1 beat Boris Becker 6-3
1 Gen. Ratko Mladic was
-1 took Mauritius into
-1 the 1996-08-27 results b
-1 in NEW YORK ,
-1 of Manchester United ,
";

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_train_and_evaluate() {
    let train_file = write_temp(TRAIN);
    let train = read_examples(train_file.path()).unwrap();
    assert_eq!(train.len(), 8);

    let model = learn_predictor(&train, &train, extract_features, 20, 0.1).unwrap();
    let error = evaluate_predictor(&train, |ex| {
        extract_features(ex).map(|phi| model.predict(&phi))
    })
    .unwrap();
    assert_eq!(error, 0.0);

    let dir = tempfile::tempdir().unwrap();
    let weights_path = dir.path().join("weights");
    output_weights(&model, &weights_path).unwrap();
    let weights = fs::read_to_string(&weights_path).unwrap();
    assert_eq!(weights.lines().count(), model.len());
    let mut previous = f64::INFINITY;
    for line in weights.lines() {
        let (name, weight) = line.rsplit_once('\t').unwrap();
        assert!(!name.is_empty());
        let weight: f64 = weight.parse().unwrap();
        assert!(weight <= previous);
        previous = weight;
    }

    let analysis_path = dir.path().join("error-analysis");
    output_error_analysis(&train, extract_features, &model, &analysis_path).unwrap();
    let analysis = fs::read_to_string(&analysis_path).unwrap();
    assert_eq!(analysis.matches("=== ").count(), 8);
    assert!(analysis.contains("=== President Bill Clinton said\nTruth: 1, Prediction: 1"));
    assert!(!analysis.contains("[WRONG]"));
}

#[test]
fn test_malformed_example_is_reported() {
    let file = write_temp("1 President Bill Clinton said\n-1 alone\n");
    match read_examples(file.path()) {
        Err(Error::InvalidExample(e)) => assert_eq!(e.text, "alone"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_empty_entity_fails_training() {
    let file = write_temp("1 ( )\n");
    let train = read_examples(file.path()).unwrap();
    assert_eq!(train[0].label, Label::Positive);
    assert!(matches!(
        learn_predictor(&train, &[], extract_features, 1, 0.1),
        Err(Error::InvalidExample(_))
    ));
}
