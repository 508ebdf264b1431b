use spendmap_client::ClientError;

/// Plaintext error contract shared by every command: a calm headline,
/// the stable code, the detail line, and concrete recovery steps.
pub fn render_error(error: &ClientError) -> String {
    let mut lines = Vec::new();
    lines.push("Something went wrong, but it's easy to fix.".to_string());
    lines.push(String::new());
    lines.push(format!("  Error:    {}", error.code));
    lines.push(format!("  Details:  {}", error.message));

    if !error.recovery_steps.is_empty() {
        lines.push(String::new());
        lines.push("What to do next:".to_string());
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}
