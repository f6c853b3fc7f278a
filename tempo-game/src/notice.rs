//! Transient notifications emitted by the session for the presentation layer.
use serde::{Deserialize, Serialize};

use crate::catalog::{Card, CardId};
use crate::constants::{MSG_LINE_COMPLETE, MSG_WAIT_HINT, MSG_WRONG_CARD};
use crate::lines::LineId;

/// Severity tier, mapped by the front end onto toast styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// What a notice is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NoticeKind {
    MissedCard { card_id: CardId, title: String },
    WrongCard { index: usize },
    LineComplete { line: LineId },
    WaitHint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn missed(card: &Card) -> Self {
        Self {
            severity: Severity::Error,
            message: format!(
                "¡Se te pasó \"{}\"! Pierdes vida, pero te la marcamos.",
                card.title
            ),
            kind: NoticeKind::MissedCard {
                card_id: card.id,
                title: card.title.clone(),
            },
        }
    }

    #[must_use]
    pub fn wrong_card(index: usize) -> Self {
        Self {
            severity: Severity::Error,
            kind: NoticeKind::WrongCard { index },
            message: MSG_WRONG_CARD.to_string(),
        }
    }

    #[must_use]
    pub fn line_complete(line: LineId) -> Self {
        Self {
            severity: Severity::Success,
            kind: NoticeKind::LineComplete { line },
            message: MSG_LINE_COMPLETE.to_string(),
        }
    }

    #[must_use]
    pub fn wait_hint() -> Self {
        Self {
            severity: Severity::Info,
            kind: NoticeKind::WaitHint,
            message: MSG_WAIT_HINT.to_string(),
        }
    }
}

/// Anything that can display a `(severity, message)` pair.
pub trait NoticeSink {
    fn notify(&mut self, severity: Severity, message: &str);
}

impl NoticeSink for Vec<(Severity, String)> {
    fn notify(&mut self, severity: Severity, message: &str) {
        self.push((severity, message.to_string()));
    }
}
