use intent_inference::dimensions::{OFF_CLASS, ON_CLASS};
use intent_inference::{BatchConfig, IntentModel, infer_batch};

const COMMANDS: [&str; 6] = [
    "turn on led",
    "turn off led",
    "",
    "switch the lamp on now",
    "kindly illuminate",
    "disable the light",
];

fn generate_lines(num_lines: usize) -> Vec<String> {
    (0..num_lines)
        .map(|i| COMMANDS[i % COMMANDS.len()].to_string())
        .collect()
}

#[test]
fn test_batch_matches_sequential() {
    let model = IntentModel::builtin();
    let lines = generate_lines(400);

    let expected: Vec<_> = lines.iter().map(|line| model.predict(line)).collect();

    let config = BatchConfig::new().with_threads(4);
    let output = model
        .infer_batch(&lines, config)
        .expect("Batch inference should succeed");

    assert_eq!(output.len(), lines.len());
    assert_eq!(output.as_slice(), expected.as_slice());
}

#[test]
fn test_batch_keeps_input_order() {
    let model = IntentModel::builtin();
    let output = infer_batch(
        &model,
        &["turn on led", "turn off led", "start", "stop"],
        &BatchConfig::new().with_threads(3),
    )
    .expect("Batch inference should succeed");

    assert_eq!(
        output.class_indices(),
        vec![ON_CLASS, OFF_CLASS, ON_CLASS, OFF_CLASS]
    );
}

#[test]
fn test_more_threads_than_lines() {
    let model = IntentModel::builtin();
    let output = model
        .infer_batch(&["turn on led"], BatchConfig::new().with_threads(16))
        .expect("Batch inference should succeed");

    assert_eq!(output.len(), 1);
    assert_eq!(output.get(0).unwrap().class_index, ON_CLASS);
}

#[test]
fn test_empty_batch() {
    let model = IntentModel::builtin();
    let lines: Vec<String> = Vec::new();
    let output = model
        .infer_batch(&lines, BatchConfig::new())
        .expect("Empty batch should succeed");

    assert!(output.is_empty());
    assert!(output.into_predictions().is_empty());
}

#[test]
fn test_copy_class_indices() {
    let model = IntentModel::builtin();
    let lines = generate_lines(12);
    let output = model
        .infer_batch(&lines, BatchConfig::new().with_threads(2))
        .expect("Batch inference should succeed");

    let mut dest = vec![usize::MAX; lines.len()];
    output
        .copy_class_indices(&mut dest)
        .expect("Destination has the right size");
    assert_eq!(dest, output.class_indices());
}

#[test]
fn test_default_thread_count_is_positive() {
    assert!(BatchConfig::new().get_threads() >= 1);
    assert_eq!(BatchConfig::new().with_threads(3).get_threads(), 3);
}
