mod awards_text;
mod check_text;
mod error_text;
mod format;
mod json;
mod mode;
mod points_text;
mod recipients_text;
mod summary_text;

use std::io;

use spendmap_client::{ClientError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    println!("{body}");
    Ok(())
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    println!("{body}");
    Ok(())
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "summary" => summary_text::render_summary(&success.data),
        "recipients" => recipients_text::render_recipients(&success.data),
        "awards" => awards_text::render_awards(&success.data),
        "points" => points_text::render_points(&success.data),
        "check" => check_text::render_check(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
