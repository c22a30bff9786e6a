//! `Model` trait implementation for the review composer.

use std::any::Any;

use bubbletea_rs::event::{KeyMsg, WindowSizeMsg};
use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::ReviewComposerApp;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::ReviewMsg;
use crate::tui::storage;

impl Model for ReviewComposerApp {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::new();
        if let Some((width, height)) = storage::initial_terminal_size() {
            model.width = width;
            model.height = height;
        }

        let cmd = model.attach_media(storage::initial_media());
        (model, cmd)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(review_msg) = msg.downcast_ref::<ReviewMsg>() {
            return self.handle_message(review_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let mapped = map_key_to_message(key_msg, self.focus)?;
            return self.handle_message(&mapped);
        }

        if let Some(size_msg) = msg.downcast_ref::<WindowSizeMsg>() {
            return self.handle_message(&ReviewMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            });
        }

        None
    }

    fn view(&self) -> String {
        self.normalise_viewport(&self.render_form())
    }
}

impl ReviewComposerApp {
    /// Pads or clips every row to the terminal size so a shorter frame
    /// overwrites the previous one. Rows stop one column short of the edge
    /// to avoid autowrap.
    pub(super) fn normalise_viewport(&self, output: &str) -> String {
        let safe_width = usize::from(self.width.max(1)).saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| fit_line(line, safe_width))
            .collect();
        lines.truncate(height);
        lines.resize(height, " ".repeat(safe_width));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn fit_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0_usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible_width.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible_width)));
    output
}
