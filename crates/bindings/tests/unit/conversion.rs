//! # Conversion Tests
//!
//! Host descriptor sequences to core descriptors, config dicts to
//! `RunnerConfig`, and codec errors to Python exceptions.

use _simrunner::conversion::{
    codec_error_to_py, extract_inputs, extract_outputs, py_dict_to_config,
};
use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use pyo3::exceptions::{PyIndexError, PyMemoryError, PyRuntimeError, PyTypeError, PyValueError};
use rstest::rstest;
use simrunner_core::common::{BufferSource, CodecError, DescriptorKind};

use crate::common::harness::{coercion, eval, with_python};

#[test]
fn test_inputs_coerced_through_int() {
    with_python(|py| {
        let data_in = eval(py, "[(0, 8, [1, True, 3.0, 9]), (2, 70, [2**69, 0, 0])]");
        let inputs = extract_inputs(&data_in, 3).expect("valid inputs");

        assert_eq!(inputs.len(), 2);
        // Only the first `steps` values are read.
        assert_eq!(inputs[0].values, vec![
            BigInt::from(1),
            BigInt::from(1),
            BigInt::from(3)
        ]);
        assert_eq!(inputs[1].offset, 2);
        assert_eq!(inputs[1].width.bits(), 70);
        assert_eq!(inputs[1].values[0], BigInt::from(1u8) << 69);
    });
}

#[test]
fn test_short_value_list_left_to_validation() {
    with_python(|py| {
        let data_in = eval(py, "[(0, 8, [1])]");
        let inputs = extract_inputs(&data_in, 4).expect("count is checked later");
        assert_eq!(inputs[0].values.len(), 1);
    });
}

#[rstest]
#[case::not_a_sequence("5", 0, "data_in")]
#[case::missing_field("[(0, 8)]", 0, "descriptor")]
#[case::extra_field("[(0, 8, [1], 0)]", 0, "descriptor")]
#[case::none_offset("[(0, 8, [1]), (None, 8, [1])]", 1, "offset")]
#[case::negative_offset("[(-1, 8, [1])]", 0, "offset")]
#[case::zero_width("[(0, 0, [1])]", 0, "width")]
#[case::width_overflow("[(0, 2**32, [1])]", 0, "width")]
#[case::scalar_values("[(0, 8, 5)]", 0, "values")]
#[case::string_value("[(0, 8, ['x'])]", 0, "values")]
fn test_input_faults_reported(
    #[case] expr: &str,
    #[case] descriptor: usize,
    #[case] field: &str,
) {
    with_python(|py| {
        let err = extract_inputs(&eval(py, expr), 1).expect_err("malformed input");
        assert_eq!(coercion(err), (DescriptorKind::Input, descriptor, field));
    });
}

#[rstest]
#[case::not_a_sequence("None", 0, "data_out")]
#[case::missing_field("[(True, 0, 1)]", 0, "descriptor")]
#[case::string_offset("[(True, 'a', 1, [])]", 0, "offset")]
#[case::limb_count_overflow("[(True, 0, 2**32, [])]", 0, "limb_count")]
#[case::scalar_sink("[(True, 0, 1, []), (True, 0, 1, 5)]", 1, "sink")]
#[case::tuple_sink("[(True, 0, 1, ())]", 0, "sink")]
fn test_output_faults_reported(
    #[case] expr: &str,
    #[case] descriptor: usize,
    #[case] field: &str,
) {
    with_python(|py| {
        let err = extract_outputs(&eval(py, expr)).expect_err("malformed output");
        assert_eq!(coercion(err), (DescriptorKind::Output, descriptor, field));
    });
}

#[test]
fn test_output_flag_uses_truthiness() {
    with_python(|py| {
        let data_out = eval(
            py,
            "[(1, 0, 1, []), (0, 0, 1, []), ('', 0, 1, []), ([0], 0, 1, []), (None, 2, 3, [])]",
        );
        let (outputs, sinks) = extract_outputs(&data_out).expect("valid outputs");

        let sources: Vec<_> = outputs.iter().map(|o| o.source).collect();
        assert_eq!(sources, vec![
            BufferSource::OutputBuffer,
            BufferSource::InputBuffer,
            BufferSource::InputBuffer,
            BufferSource::OutputBuffer,
            BufferSource::InputBuffer,
        ]);
        assert_eq!((outputs[4].offset, outputs[4].limb_count), (2, 3));
        assert!(outputs.iter().all(|o| o.sink.is_empty()));
        assert_eq!(sinks.len(), 5);
    });
}

#[test]
fn test_error_kinds_map_to_exceptions() {
    with_python(|py| {
        let raise = |err: CodecError| codec_error_to_py(&err);

        let allocation = raise(CodecError::Allocation {
            buffer: BufferSource::InputBuffer,
            steps: 1,
            row_width: 1,
            reason: "refused".to_string(),
        });
        assert!(allocation.is_instance_of::<PyMemoryError>(py));

        let range = raise(CodecError::ValueRange {
            input: 0,
            step: 0,
            width: 4,
            value: BigInt::from(16),
        });
        assert!(range.is_instance_of::<PyValueError>(py));

        let overlap = raise(CodecError::Overlap {
            buffer: BufferSource::InputBuffer,
            first: 0,
            second: 1,
        });
        assert!(overlap.is_instance_of::<PyValueError>(py));

        let bounds = raise(CodecError::BufferBounds {
            kind: DescriptorKind::Output,
            descriptor: 0,
            buffer: BufferSource::OutputBuffer,
            step: 0,
            index: 4,
            limit: 4,
        });
        assert!(bounds.is_instance_of::<PyIndexError>(py));

        let count = raise(CodecError::ValueCount {
            input: 0,
            expected: 2,
            found: 1,
        });
        assert!(count.is_instance_of::<PyIndexError>(py));

        let symbol = raise(CodecError::SymbolResolution {
            symbol: "sim_run_all".to_string(),
            reason: "missing".to_string(),
        });
        assert!(symbol.is_instance_of::<PyRuntimeError>(py));

        let coerce = raise(CodecError::TypeCoercion {
            kind: DescriptorKind::Input,
            descriptor: 0,
            field: "offset",
            expected: "int",
            reason: "None".to_string(),
        });
        assert!(coerce.is_instance_of::<PyTypeError>(py));
        assert!(coerce.to_string().contains("field `offset`"));
    });
}

#[test]
fn test_config_dict_overrides_defaults() {
    with_python(|py| {
        let dict = eval(py, "{'reject_overlap': True, 'max_buffer_limbs': 16}");
        let config = py_dict_to_config(py, &dict).expect("valid config");

        assert!(config.reject_overlap);
        assert_eq!(config.max_buffer_limbs, Some(16));
        assert_eq!(config.entry_point, "sim_run_all");
    });
}

#[test]
fn test_config_dict_rejects_unknown_keys() {
    with_python(|py| {
        let err = py_dict_to_config(py, &eval(py, "{'reject_overlaps': True}"))
            .expect_err("unknown key");
        assert!(err.is_instance_of::<PyValueError>(py));
    });
}
