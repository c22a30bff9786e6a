//! Application model for the review composer TUI.
//!
//! # Module Structure
//!
//! - `model_impl`: `bubbletea_rs::Model` implementation and viewport
//!   normalisation
//! - `rendering`: form rendering

use std::any::Any;

use bubbletea_rs::Cmd;

use crate::config::split_paths;
use crate::review::{
    FitAssessment, MediaFile, PreviewJob, ReviewComposer, ReviewSink, ReviewSubmission,
    StarRating, SubmitOutcome,
};

use super::focus::Focus;
use super::messages::ReviewMsg;
use super::storage;

mod model_impl;
mod rendering;

/// Sink that keeps the accepted submission for the caller.
#[derive(Debug, Default)]
pub struct ComposerSink {
    submission: Option<ReviewSubmission>,
    closed: bool,
}

impl ComposerSink {
    /// Returns the accepted submission, if any.
    #[must_use]
    pub const fn submission(&self) -> Option<&ReviewSubmission> {
        self.submission.as_ref()
    }

    /// Returns whether the form has closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }
}

impl ReviewSink for ComposerSink {
    fn submit(&mut self, review: ReviewSubmission) {
        self.submission = Some(review);
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Main application model for the review composer TUI.
#[derive(Debug)]
pub struct ReviewComposerApp {
    composer: ReviewComposer<ComposerSink>,
    focus: Focus,
    media_input: String,
    selected_attachment: usize,
    load_error: Option<String>,
    width: u16,
    height: u16,
}

impl Default for ReviewComposerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewComposerApp {
    /// Creates an empty composer with focus on the rating row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            composer: ReviewComposer::new(ComposerSink::default()),
            focus: Focus::default(),
            media_input: String::new(),
            selected_attachment: 0,
            load_error: None,
            width: 80,
            height: 30,
        }
    }

    /// Returns the underlying composer.
    #[must_use]
    pub const fn composer(&self) -> &ReviewComposer<ComposerSink> {
        &self.composer
    }

    /// Returns the focused row.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the text typed into the media path input.
    #[must_use]
    pub fn media_input(&self) -> &str {
        self.media_input.as_str()
    }

    /// Returns the index of the selected attachment.
    #[must_use]
    pub const fn selected_attachment(&self) -> usize {
        self.selected_attachment
    }

    /// Returns the last media loading error, if any.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Returns the accepted submission, if the form was submitted.
    #[must_use]
    pub const fn submission(&self) -> Option<&ReviewSubmission> {
        self.composer.sink().submission()
    }

    /// Returns whether the form was submitted or cancelled.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.composer.sink().is_closed()
    }

    /// Attaches `media` as one batch and returns the preview command.
    pub fn attach_media(&mut self, media: Vec<MediaFile>) -> Option<Cmd> {
        if media.is_empty() {
            return None;
        }
        let jobs = self.composer.attach(media);
        decode_previews_cmd(jobs)
    }

    /// Applies a message and returns the follow-up command, if any.
    pub fn handle_message(&mut self, msg: &ReviewMsg) -> Option<Cmd> {
        match msg {
            ReviewMsg::FocusNext => self.focus = self.focus.next(),
            ReviewMsg::FocusPrevious => self.focus = self.focus.previous(),
            ReviewMsg::SelectRating(stars) => {
                if let Some(rating) = StarRating::new(*stars) {
                    self.composer.select_rating(rating);
                }
            }
            ReviewMsg::NextFit => self.step_fit(FitAssessment::next, FitAssessment::RunsSmall),
            ReviewMsg::PreviousFit => {
                self.step_fit(FitAssessment::previous, FitAssessment::RunsLarge);
            }
            ReviewMsg::InsertChar(character) => self.edit_focused_text(|text| text.push(*character)),
            ReviewMsg::DeleteChar => self.edit_focused_text(|text| {
                text.pop();
            }),
            ReviewMsg::LoadMedia => return self.handle_load_media(),
            ReviewMsg::SelectNextAttachment => {
                let last = self.composer.attachments().len().saturating_sub(1);
                self.selected_attachment = (self.selected_attachment + 1).min(last);
            }
            ReviewMsg::SelectPreviousAttachment => {
                self.selected_attachment = self.selected_attachment.saturating_sub(1);
            }
            ReviewMsg::RemoveAttachment => self.handle_remove_attachment(),
            ReviewMsg::PreviewDecoded(preview) => {
                let _applied = self.composer.apply_preview(preview.clone());
            }
            ReviewMsg::Submit => return self.handle_submit(),
            ReviewMsg::Cancel => {
                self.composer.cancel();
                return Some(self.finish());
            }
            ReviewMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
            }
        }
        None
    }

    fn step_fit(&mut self, step: fn(FitAssessment) -> FitAssessment, first: FitAssessment) {
        let fit = self.composer.draft().fit().map_or(first, step);
        self.composer.select_fit(fit);
    }

    fn edit_focused_text(&mut self, edit: impl FnOnce(&mut String)) {
        match self.focus {
            Focus::Content => {
                let mut content = self.composer.draft().content().to_owned();
                edit(&mut content);
                self.composer.set_content(content);
            }
            Focus::Measurement(measurement) => {
                let mut value = self.composer.draft().measurement(measurement).to_owned();
                edit(&mut value);
                self.composer.set_measurement(measurement, value);
            }
            Focus::MediaPath => {
                edit(&mut self.media_input);
                self.load_error = None;
            }
            Focus::Rating | Focus::Fit | Focus::Attachments | Focus::Submit => {}
        }
    }

    fn handle_load_media(&mut self) -> Option<Cmd> {
        let paths = split_paths(&self.media_input);
        if paths.is_empty() {
            return None;
        }

        let loaded: Result<Vec<MediaFile>, _> = paths
            .iter()
            .map(|path| MediaFile::from_path(path))
            .collect();
        let files = match loaded {
            Ok(files) => files,
            Err(error) => {
                tracing::warn!("media batch not loaded: {error}");
                self.load_error = Some(error.to_string());
                return None;
            }
        };

        self.load_error = None;
        let cmd = self.attach_media(files);
        if cmd.is_some() {
            self.media_input.clear();
        }
        cmd
    }

    fn handle_remove_attachment(&mut self) {
        if self
            .composer
            .remove_attachment(self.selected_attachment)
            .is_none()
        {
            return;
        }
        let last = self.composer.attachments().len().saturating_sub(1);
        self.selected_attachment = self.selected_attachment.min(last);
    }

    fn handle_submit(&mut self) -> Option<Cmd> {
        match self.composer.submit() {
            SubmitOutcome::Submitted => Some(self.finish()),
            SubmitOutcome::Rejected => {
                if let Some((field, _)) = self.composer.errors().iter().next() {
                    self.focus = Focus::for_field(field);
                }
                None
            }
        }
    }

    fn finish(&mut self) -> Cmd {
        if let Some(submission) = self.composer.sink().submission() {
            storage::publish_submission(submission.clone());
        }
        self.media_input.clear();
        self.selected_attachment = 0;
        self.load_error = None;
        bubbletea_rs::quit()
    }
}

/// Batches one decode command per job, so each preview is reported as
/// soon as its own decode finishes.
fn decode_previews_cmd(jobs: Vec<PreviewJob>) -> Option<Cmd> {
    if jobs.is_empty() {
        return None;
    }
    let cmds = jobs.into_iter().map(decode_preview_cmd).collect();
    Some(bubbletea_rs::batch(cmds))
}

fn decode_preview_cmd(job: PreviewJob) -> Cmd {
    Box::pin(async move {
        let decoded = job.decode().await;
        Some(Box::new(ReviewMsg::PreviewDecoded(decoded)) as Box<dyn Any + Send>)
    })
}
