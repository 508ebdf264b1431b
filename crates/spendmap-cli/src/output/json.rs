use std::io;

use serde::Serialize;
use serde_json::{Value, json};
use spendmap_client::{ClientError, SuccessEnvelope};

/// JSON output is the command's data contract directly: the same object
/// shape the envelope carries, without the ok/version wrapper that text
/// mode never shows either.
pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "summary" | "recipients" | "awards" | "points" | "check" => {
            serialize_json_pretty(&success.data)
        }
        _ => Err(io::Error::other(format!(
            "JSON output is not supported for command `{}`",
            success.command
        ))),
    }
}

pub fn render_error_json(error: &ClientError) -> io::Result<String> {
    let mut contract = json!({
        "code": error.code,
        "message": error.message,
        "recovery_steps": error.recovery_steps,
    });
    if let (Some(object), Some(data)) = (contract.as_object_mut(), &error.data) {
        object.insert("data".to_string(), data.clone());
    }

    serialize_json_pretty(&json!({ "error": contract }))
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}
