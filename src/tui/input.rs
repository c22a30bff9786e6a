//! Key-to-message mapping for the review composer.
//!
//! Text rows take printable characters literally, so the mapping depends on
//! which row has focus.

use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

use super::focus::Focus;
use super::messages::ReviewMsg;

/// Maps a key event to a message for the row that has focus.
///
/// Returns `None` for keys the focused row ignores.
#[must_use]
pub fn map_key_to_message(key: &KeyMsg, focus: Focus) -> Option<ReviewMsg> {
    if let Some(global) = map_global_key(key) {
        return Some(global);
    }

    match focus {
        Focus::Rating => map_rating_key(key.key),
        Focus::Content => map_text_key(key.key, true),
        Focus::Measurement(_) | Focus::MediaPath if key.key == KeyCode::Enter => {
            (focus == Focus::MediaPath).then_some(ReviewMsg::LoadMedia)
        }
        Focus::Measurement(_) | Focus::MediaPath => map_text_key(key.key, false),
        Focus::Fit => map_fit_key(key.key),
        Focus::Attachments => map_attachment_key(key.key),
        Focus::Submit => (key.key == KeyCode::Enter).then_some(ReviewMsg::Submit),
    }
}

const fn map_global_key(key: &KeyMsg) -> Option<ReviewMsg> {
    match key.key {
        KeyCode::Esc => Some(ReviewMsg::Cancel),
        KeyCode::Tab => Some(ReviewMsg::FocusNext),
        KeyCode::BackTab => Some(ReviewMsg::FocusPrevious),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(ReviewMsg::Submit)
        }
        _ => None,
    }
}

fn map_rating_key(code: KeyCode) -> Option<ReviewMsg> {
    match code {
        KeyCode::Char(digit @ '1'..='5') => digit
            .to_digit(10)
            .and_then(|value| u8::try_from(value).ok())
            .map(ReviewMsg::SelectRating),
        _ => None,
    }
}

const fn map_fit_key(code: KeyCode) -> Option<ReviewMsg> {
    match code {
        KeyCode::Right | KeyCode::Char(' ') => Some(ReviewMsg::NextFit),
        KeyCode::Left => Some(ReviewMsg::PreviousFit),
        _ => None,
    }
}

const fn map_attachment_key(code: KeyCode) -> Option<ReviewMsg> {
    match code {
        KeyCode::Down | KeyCode::Char('j') => Some(ReviewMsg::SelectNextAttachment),
        KeyCode::Up | KeyCode::Char('k') => Some(ReviewMsg::SelectPreviousAttachment),
        KeyCode::Char('d') | KeyCode::Delete => Some(ReviewMsg::RemoveAttachment),
        _ => None,
    }
}

const fn map_text_key(code: KeyCode, multiline: bool) -> Option<ReviewMsg> {
    match code {
        KeyCode::Char(character) => Some(ReviewMsg::InsertChar(character)),
        KeyCode::Enter if multiline => Some(ReviewMsg::InsertChar('\n')),
        KeyCode::Backspace => Some(ReviewMsg::DeleteChar),
        _ => None,
    }
}
