//! Review operation: runs the composer TUI.

use std::io::{self, Write};

use bubbletea_rs::Program;
use werent::review::{MediaFile, ReviewSubmission};
use werent::telemetry::{StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
use werent::tui::{
    ReviewComposerApp, set_initial_media, set_initial_terminal_size, take_submission,
};
use werent::{AppError, WerentConfig};

use super::output::write_line;

/// Opens the composer and prints the submitted review as JSON.
///
/// Nothing is printed when the composer is cancelled.
///
/// # Errors
///
/// Returns [`AppError::Media`] when a configured media file cannot be read,
/// and [`AppError::Tui`] when the terminal program fails.
pub async fn run(config: &WerentConfig) -> Result<(), AppError> {
    let media = config
        .media_paths()
        .iter()
        .map(|path| MediaFile::from_path(path))
        .collect::<Result<Vec<_>, _>>()?;

    let _ = set_initial_media(media);
    if let Ok((width, height)) = crossterm::terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| AppError::Tui {
        message: error.to_string(),
    })?;

    let Some(submission) = take_submission() else {
        return Ok(());
    };
    record_submission(&StderrJsonlTelemetrySink, &submission);
    write_line(&render_submission(&submission)?)
}

async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<ReviewComposerApp>::builder()
        .alt_screen(true)
        .build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}

fn record_submission(telemetry: &dyn TelemetrySink, submission: &ReviewSubmission) {
    telemetry.record(TelemetryEvent::ReviewSubmitted {
        rating: submission.rating,
        media_count: submission.media.len(),
    });
}

fn render_submission(submission: &ReviewSubmission) -> Result<String, AppError> {
    serde_json::to_string_pretty(submission).map_err(|error| AppError::Io {
        message: format!("failed to encode review: {error}"),
    })
}
