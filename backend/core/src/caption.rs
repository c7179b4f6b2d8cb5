//! Caption normalization.
//!
//! Captioning models disagree on where the caption lives in their reply.
//! The known locations are listed once, in precedence order, and evaluated
//! front to back.

use serde_json::Value;

/// Reads one candidate caption location out of a raw model response.
pub type CaptionAccessor = fn(&Value) -> Option<&Value>;

/// Known caption locations, highest precedence first.
pub const CAPTION_ACCESSORS: &[(&str, CaptionAccessor)] = &[
    ("output", output),
    ("text", text),
    ("output_text", output_text),
    ("results[0].output_text", first_result_output_text),
];

fn output(raw: &Value) -> Option<&Value> {
    raw.get("output")
}

fn text(raw: &Value) -> Option<&Value> {
    raw.get("text")
}

fn output_text(raw: &Value) -> Option<&Value> {
    raw.get("output_text")
}

fn first_result_output_text(raw: &Value) -> Option<&Value> {
    raw.get("results")?.get(0)?.get("output_text")
}

/// Whether a location holds a usable value.
///
/// `null`, `false`, `0` and `""` count as absent. Arrays and objects always
/// count, even when empty.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Pick the caption out of a model response.
///
/// Returns the value at the first location that is present, whatever its JSON
/// type, or `None` if no location is.
pub fn extract_caption(raw: &Value) -> Option<Value> {
    CAPTION_ACCESSORS
        .iter()
        .filter_map(|(_, accessor)| accessor(raw))
        .find(|caption| is_present(caption))
        .cloned()
}
