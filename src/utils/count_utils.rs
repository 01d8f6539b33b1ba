use serde_json::Value;

/// Reads a YouTube statistics counter. The API sends counts as decimal
/// strings; anything absent, negative or non-numeric is treated as 0.
pub fn parse_count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::String(count)) => count.trim().parse::<u64>().unwrap_or(0),
        Some(Value::Number(count)) => count.as_u64().unwrap_or(0),
        _ => 0,
    }
}
