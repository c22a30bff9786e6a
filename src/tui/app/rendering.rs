//! Form rendering for the review composer.

use crate::review::validation::trimmed_char_count;
use crate::review::{
    Attachment, FitAssessment, MAX_ATTACHMENTS, MAX_CONTENT_CHARS, MAX_STARS, MIN_CONTENT_CHARS,
    Measurement, PreviewState, ReviewField,
};
use crate::session::BRAND;
use crate::tui::focus::Focus;

use super::ReviewComposerApp;

const LABEL_WIDTH: usize = 12;
const KEY_HINTS: &str =
    "Tab/Shift-Tab move | 1-5 rate | Left/Right fit | Enter load/submit | d remove | Esc cancel";

impl ReviewComposerApp {
    /// Renders the whole form without viewport normalisation.
    pub(crate) fn render_form(&self) -> String {
        let mut output = format!("{BRAND} - Write a review\n\n");

        self.render_rating(&mut output);
        self.render_content(&mut output);
        self.render_fit(&mut output);
        for measurement in Measurement::ALL {
            self.render_measurement(&mut output, measurement);
        }
        self.render_media(&mut output);
        self.render_row(&mut output, Focus::Submit, "", "[ Submit ]");

        output.push('\n');
        output.push_str(KEY_HINTS);
        output.push('\n');
        output
    }

    fn render_row(&self, output: &mut String, focus: Focus, label: &str, value: &str) {
        let marker = if self.focus == focus { '>' } else { ' ' };
        output.push_str(&format!("{marker} {label:<LABEL_WIDTH$}{value}\n"));
    }

    fn render_note(output: &mut String, note: &str) {
        output.push_str(&format!("  {:<LABEL_WIDTH$}{note}\n", ""));
    }

    fn render_error(&self, output: &mut String, field: ReviewField) {
        if let Some(message) = self.composer.errors().message(field) {
            Self::render_note(output, &format!("! {message}"));
        }
    }

    fn render_rating(&self, output: &mut String) {
        let rating = self.composer.draft().rating();
        let filled = usize::from(rating.map_or(0, |value| value.stars()));
        let empty = usize::from(MAX_STARS).saturating_sub(filled);
        let caption = rating.map_or_else(|| "not rated".to_owned(), |value| value.to_string());
        let value = format!("{}{}  {caption}", "★".repeat(filled), "☆".repeat(empty));

        self.render_row(output, Focus::Rating, "Rating", &value);
        self.render_error(output, ReviewField::Rating);
    }

    fn render_content(&self, output: &mut String) {
        let content = self.composer.draft().content();
        let mut lines = content.split('\n');
        let first = lines.next().unwrap_or_default();

        self.render_row(output, Focus::Content, "Comment", first);
        for line in lines {
            Self::render_note(output, line);
        }
        Self::render_note(
            output,
            &format!(
                "{} / {MAX_CONTENT_CHARS} characters (minimum {MIN_CONTENT_CHARS})",
                trimmed_char_count(content)
            ),
        );
        self.render_error(output, ReviewField::Content);
    }

    fn render_fit(&self, output: &mut String) {
        let label = self
            .composer
            .draft()
            .fit()
            .map_or("not selected", FitAssessment::label);

        self.render_row(output, Focus::Fit, "Fit", &format!("< {label} >"));
        self.render_error(output, ReviewField::Fit);
    }

    fn render_measurement(&self, output: &mut String, measurement: Measurement) {
        let label = format!("{} (cm)", measurement.label());
        let value = self.composer.draft().measurement(measurement);

        self.render_row(output, Focus::Measurement(measurement), &label, value);
        self.render_error(output, ReviewField::from(measurement));
    }

    fn render_media(&self, output: &mut String) {
        let attachments = self.composer.attachments();

        self.render_row(output, Focus::MediaPath, "Media path", self.media_input());
        Self::render_note(
            output,
            &format!("{} / {MAX_ATTACHMENTS} files selected", attachments.len()),
        );
        if let Some(error) = self.load_error() {
            Self::render_note(output, &format!("! {error}"));
        }
        self.render_error(output, ReviewField::Media);

        self.render_row(output, Focus::Attachments, "Attachments", "");
        for (index, attachment) in attachments.iter().enumerate() {
            let selected = self.focus == Focus::Attachments && index == self.selected_attachment;
            let marker = if selected { '>' } else { ' ' };
            Self::render_note(
                output,
                &format!("{marker} {}. {}", index + 1, describe_attachment(attachment)),
            );
        }
    }
}

fn describe_attachment(attachment: &Attachment) -> String {
    let file = attachment.file();
    let status = match attachment.preview() {
        PreviewState::Pending => "decoding preview".to_owned(),
        PreviewState::Ready(_) => "preview ready".to_owned(),
        PreviewState::Failed(reason) => format!("preview failed: {reason}"),
    };
    format!(
        "{} ({}, {} bytes) {status}",
        file.name(),
        file.content_type(),
        file.len()
    )
}
