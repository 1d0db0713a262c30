//! Python↔Rust conversion.
//!
//! Turns the host's descriptor sequences into core descriptors, Python dicts into
//! `RunnerConfig` (via JSON, so the schema matches the Rust side exactly), and
//! `CodecError`s into Python exceptions.
//!
//! Every integer field goes through Python's `int()` first, the way the host
//! would coerce it, before being narrowed to the width the codec expects.

use num_bigint::{BigInt, BigUint};
use pyo3::exceptions::{PyIndexError, PyMemoryError, PyRuntimeError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyInt, PyList, PySequence};
use simrunner_core::common::{BufferSource, CodecError, CodecResult, DescriptorKind, SignalWidth};
use simrunner_core::config::RunnerConfig;
use simrunner_core::layout::{InputDescriptor, OutputDescriptor};

/// Fields per `data_in` entry: offset, width, values.
const INPUT_FIELDS: usize = 3;
/// Fields per `data_out` entry: is-output flag, offset, limb count, sink list.
const OUTPUT_FIELDS: usize = 4;

/// Output descriptors with staging sinks, paired with the host lists they feed.
pub type OutputPlan<'py> = (Vec<OutputDescriptor<Vec<BigUint>>>, Vec<Bound<'py, PyList>>);

/// Converts a Python dict to a `RunnerConfig`.
///
/// The dict is serialized to JSON and then deserialized into `RunnerConfig`.
/// Missing keys keep their defaults; unknown keys are rejected.
///
/// # Arguments
///
/// * `py` - Python interpreter handle.
/// * `dict` - A Python dict such as `{"reject_overlap": True}`.
///
/// # Errors
///
/// Returns a `PyValueError` if the dict does not describe a valid `RunnerConfig`,
/// or the `json.dumps` error if it cannot be serialized.
pub fn py_dict_to_config(py: Python<'_>, dict: &Bound<'_, PyAny>) -> PyResult<RunnerConfig> {
    let json = py.import("json")?;
    let json_str: String = json.getattr("dumps")?.call1((dict,))?.extract()?;

    serde_json::from_str::<RunnerConfig>(&json_str)
        .map_err(|e| PyValueError::new_err(format!("Invalid config: {e}")))
}

/// Maps a codec error onto the matching Python exception type.
pub fn codec_error_to_py(err: &CodecError) -> PyErr {
    let msg = err.to_string();
    match err {
        CodecError::Allocation { .. } => PyMemoryError::new_err(msg),
        CodecError::ValueRange { .. } | CodecError::Overlap { .. } => PyValueError::new_err(msg),
        CodecError::BufferBounds { .. } | CodecError::ValueCount { .. } => {
            PyIndexError::new_err(msg)
        }
        CodecError::SymbolResolution { .. } => PyRuntimeError::new_err(msg),
        CodecError::TypeCoercion { .. } => PyTypeError::new_err(msg),
    }
}

/// Reads `data_in`, a sequence of `(offset, width, values)` triples.
///
/// At most `steps` values are read per input; a shorter list is reported by
/// the core's validation.
///
/// # Errors
///
/// Returns [`CodecError::TypeCoercion`] for any entry or field that cannot be
/// interpreted.
pub fn extract_inputs(data_in: &Bound<'_, PyAny>, steps: u64) -> CodecResult<Vec<InputDescriptor>> {
    let entries = as_sequence(data_in, DescriptorKind::Input, 0, "data_in")?;
    let count = seq_len(&entries, DescriptorKind::Input, 0, "data_in")?;

    (0..count)
        .map(|index| {
            let coerce = Coercer::new(DescriptorKind::Input, index);
            let entry = coerce.item(&entries, index, "descriptor")?;
            let fields = coerce.record(&entry, INPUT_FIELDS)?;

            let offset = coerce.u64(&coerce.item(&fields, 0, "offset")?, "offset")?;
            let bits = coerce.u32(&coerce.item(&fields, 1, "width")?, "width")?;
            let width = SignalWidth::new(bits).ok_or_else(|| {
                coerce.error("width", "positive u32", "width must be at least 1 bit")
            })?;

            let values_obj = coerce.item(&fields, 2, "values")?;
            let values = as_sequence(&values_obj, DescriptorKind::Input, index, "values")?;
            let available = seq_len(&values, DescriptorKind::Input, index, "values")?;
            let wanted = usize::try_from(steps).map_or(available, |s| s.min(available));
            let values = (0..wanted)
                .map(|step| coerce.int(&coerce.item(&values, step, "values")?, "values"))
                .collect::<CodecResult<Vec<_>>>()?;

            Ok(InputDescriptor::new(offset, width, values))
        })
        .collect()
}

/// Reads `data_out`, a sequence of `(is_output_buffer, offset, limb_count, sink)`
/// quadruples.
///
/// Returns descriptors with empty `Vec` sinks alongside the host lists they
/// stand in for; the caller extends the host lists once the run succeeded.
/// Sinks must be lists (or list subclasses) so they can be grown in place.
///
/// # Errors
///
/// Returns [`CodecError::TypeCoercion`] for any entry or field that cannot be
/// interpreted, or for a sink that is not a list.
pub fn extract_outputs<'py>(data_out: &Bound<'py, PyAny>) -> CodecResult<OutputPlan<'py>> {
    let entries = as_sequence(data_out, DescriptorKind::Output, 0, "data_out")?;
    let count = seq_len(&entries, DescriptorKind::Output, 0, "data_out")?;

    let mut descriptors = Vec::with_capacity(count);
    let mut sinks = Vec::with_capacity(count);
    for index in 0..count {
        let coerce = Coercer::new(DescriptorKind::Output, index);
        let entry = coerce.item(&entries, index, "descriptor")?;
        let fields = coerce.record(&entry, OUTPUT_FIELDS)?;

        let is_output = coerce
            .item(&fields, 0, "is_output_buffer")?
            .is_truthy()
            .map_err(|e| coerce.error("is_output_buffer", "bool", &e.to_string()))?;
        let offset = coerce.u64(&coerce.item(&fields, 1, "offset")?, "offset")?;
        let limb_count = coerce.u32(&coerce.item(&fields, 2, "limb_count")?, "limb_count")?;
        let sink = coerce
            .item(&fields, 3, "sink")?
            .downcast_into::<PyList>()
            .map_err(|e| coerce.error("sink", "list", &e.to_string()))?;

        descriptors.push(OutputDescriptor::new(
            BufferSource::from_is_output(is_output),
            offset,
            limb_count,
            Vec::new(),
        ));
        sinks.push(sink);
    }
    Ok((descriptors, sinks))
}

/// Field coercion bound to one descriptor, so every error names it.
struct Coercer {
    kind: DescriptorKind,
    index: usize,
}

impl Coercer {
    const fn new(kind: DescriptorKind, index: usize) -> Self {
        Self { kind, index }
    }

    fn error(&self, field: &'static str, expected: &'static str, reason: &str) -> CodecError {
        CodecError::TypeCoercion {
            kind: self.kind,
            descriptor: self.index,
            field,
            expected,
            reason: reason.to_string(),
        }
    }

    /// Requires a sequence of exactly `fields` items.
    fn record<'py>(
        &self,
        obj: &Bound<'py, PyAny>,
        fields: usize,
    ) -> CodecResult<Bound<'py, PySequence>> {
        let seq = as_sequence(obj, self.kind, self.index, "descriptor")?;
        let len = seq_len(&seq, self.kind, self.index, "descriptor")?;
        if len != fields {
            return Err(self.error(
                "descriptor",
                "fixed-length sequence",
                &format!("expected {fields} fields, found {len}"),
            ));
        }
        Ok(seq)
    }

    fn item<'py>(
        &self,
        seq: &Bound<'py, PySequence>,
        at: usize,
        field: &'static str,
    ) -> CodecResult<Bound<'py, PyAny>> {
        seq.get_item(at)
            .map_err(|e| self.error(field, "sequence item", &e.to_string()))
    }

    /// Coerces through Python's `int()`, as the host would.
    fn int(&self, obj: &Bound<'_, PyAny>, field: &'static str) -> CodecResult<BigInt> {
        obj.py()
            .get_type::<PyInt>()
            .call1((obj,))
            .and_then(|int| int.extract::<BigInt>())
            .map_err(|e| self.error(field, "int", &e.to_string()))
    }

    fn u64(&self, obj: &Bound<'_, PyAny>, field: &'static str) -> CodecResult<u64> {
        let value = self.int(obj, field)?;
        u64::try_from(&value).map_err(|_| self.error(field, "u64", &format!("{value} out of range")))
    }

    fn u32(&self, obj: &Bound<'_, PyAny>, field: &'static str) -> CodecResult<u32> {
        let value = self.int(obj, field)?;
        u32::try_from(&value).map_err(|_| self.error(field, "u32", &format!("{value} out of range")))
    }
}

fn as_sequence<'py>(
    obj: &Bound<'py, PyAny>,
    kind: DescriptorKind,
    index: usize,
    field: &'static str,
) -> CodecResult<Bound<'py, PySequence>> {
    obj.downcast::<PySequence>()
        .cloned()
        .map_err(|e| Coercer::new(kind, index).error(field, "sequence", &e.to_string()))
}

fn seq_len(
    seq: &Bound<'_, PySequence>,
    kind: DescriptorKind,
    index: usize,
    field: &'static str,
) -> CodecResult<usize> {
    seq.len()
        .map_err(|e| Coercer::new(kind, index).error(field, "sized sequence", &e.to_string()))
}
