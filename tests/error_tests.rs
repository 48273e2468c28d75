//! Tests for loading model exports and the errors they can raise.

use intent_inference::errors::{BatchInferError, IntentModelError};
use intent_inference::gru::GRU_KERNEL_LEN;
use intent_inference::{BatchConfig, IntentModel, IntentModelInfo, ValidationData};

#[cfg(test)]
mod intent_model_error_tests {
    use super::*;

    #[test]
    fn test_json_export_round_trip() {
        let json = serde_json::to_string(&IntentModelInfo::from_builtin()).unwrap();
        let model = IntentModel::from_json_str(&json).expect("Export should load");

        let builtin = IntentModel::builtin();
        for line in ["turn on led", "turn off led", ""] {
            assert_eq!(model.predict(line), builtin.predict(line));
        }
    }

    #[test]
    fn test_invalid_json() {
        let result = IntentModel::from_json_str("{ \"vocabulary\": [\"<PAD>\"] ");
        assert!(matches!(result, Err(IntentModelError::InvalidJson(_))));
    }

    #[test]
    fn test_missing_tensor_field() {
        let json = r#"{ "vocabulary": ["<PAD>"], "embedding": [0, 0, 0, 0] }"#;
        let result = IntentModel::from_json_str(json);
        assert!(matches!(result, Err(IntentModelError::InvalidJson(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = IntentModel::from_json_file("/nonexistent/intent_model.json");
        assert!(matches!(
            result,
            Err(IntentModelError::Io { ref path, .. }) if path.ends_with("intent_model.json")
        ));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("/nonexistent/intent_model.json"));
    }

    #[test]
    fn test_gru_kernel_size_mismatch() {
        let mut info = IntentModelInfo::from_builtin();
        info.gru_kernel.push(0.0);

        let result = IntentModel::new(info);
        assert!(matches!(
            result,
            Err(IntentModelError::TensorSizeMismatch { ref tensor, expected, actual })
                if tensor == "gru_kernel" && expected == GRU_KERNEL_LEN && actual == GRU_KERNEL_LEN + 1
        ));
    }

    #[test]
    fn test_dense_bias_size_mismatch() {
        let info = IntentModelInfo {
            dense_bias: vec![0.0; 3],
            ..IntentModelInfo::from_builtin()
        };

        let result = IntentModel::new(info);
        assert!(matches!(
            result,
            Err(IntentModelError::TensorSizeMismatch { ref tensor, .. }) if tensor == "dense_bias"
        ));
    }

    #[test]
    fn test_validation_mismatch_reports_case() {
        let info = IntentModelInfo::from_builtin().with_validation_data(ValidationData {
            inputs: vec!["turn on led".to_string(), "turn off led".to_string()],
            // The second case claims the model answers ON with certainty.
            expected_outputs: vec![
                IntentModel::builtin().predict("turn on led").probabilities.to_vec(),
                vec![0.0, 1.0],
            ],
        });

        let result = IntentModel::new(info);
        match result {
            Err(IntentModelError::ValidationMismatch {
                case_number,
                input,
                expected,
                computed,
            }) => {
                assert_eq!(case_number, 1);
                assert_eq!(input, "turn off led");
                assert_eq!(expected, vec![0.0, 1.0]);
                assert_eq!(computed.len(), 2);
                assert!(computed[0] > computed[1]);
            }
            other => panic!("Expected a validation mismatch, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_error_messages() {
        let error = IntentModelError::VocabularyEmbeddingMismatch {
            vocabulary_size: 3,
            embedding_rows: 2,
        };
        assert_eq!(
            error.to_string(),
            "The vocabulary size must match the embedding rows: 3 != 2"
        );
    }
}

#[cfg(test)]
mod batch_infer_error_tests {
    use super::*;

    #[test]
    fn test_zero_threads() {
        let model = IntentModel::builtin();
        let result = model.infer_batch(&["turn on led"], BatchConfig::new().with_threads(0));
        assert!(matches!(
            result,
            Err(BatchInferError::InvalidThreadCount { count: 0 })
        ));
    }

    #[test]
    fn test_result_index_out_of_bounds() {
        let model = IntentModel::builtin();
        let output = model
            .infer_batch(&["turn on led", "stop"], BatchConfig::new())
            .unwrap();
        assert!(matches!(
            output.get(2),
            Err(BatchInferError::ResultIndexOutOfBounds {
                index: 2,
                num_lines: 2
            })
        ));
    }

    #[test]
    fn test_destination_buffer_size_mismatch() {
        let model = IntentModel::builtin();
        let output = model
            .infer_batch(&["turn on led", "stop"], BatchConfig::new())
            .unwrap();
        let mut dest = [0usize; 3];
        assert!(matches!(
            output.copy_class_indices(&mut dest),
            Err(BatchInferError::DestinationBufferSizeMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }
}
