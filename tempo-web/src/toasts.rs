//! Toast queue fed by session notices.
use std::rc::Rc;
use tempo_game::{Notice, Severity};
use yew::Reducible;

/// Visible toasts at most; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;
pub const TOAST_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
}

impl Toast {
    #[must_use]
    pub fn from_notice(id: u64, notice: Notice) -> Self {
        Self {
            id,
            severity: notice.severity,
            message: notice.message,
        }
    }

    /// daisyUI alert class for the severity.
    #[must_use]
    pub const fn alert_class(&self) -> &'static str {
        match self.severity {
            Severity::Info => "alert-info",
            Severity::Success => "alert-success",
            Severity::Error => "alert-error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    pub items: Vec<Toast>,
}

pub enum ToastAction {
    Push(Vec<Toast>),
    Dismiss(u64),
    Clear,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toasts) => {
                next.items.extend(toasts);
                let overflow = next.items.len().saturating_sub(MAX_TOASTS);
                next.items.drain(..overflow);
            }
            ToastAction::Dismiss(id) => next.items.retain(|toast| toast.id != id),
            ToastAction::Clear => next.items.clear(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempo_game::LineId;

    #[test]
    fn push_caps_and_dismiss_removes() {
        let mut queue = Rc::new(ToastQueue::default());
        let toasts = (0..6)
            .map(|id| Toast::from_notice(id, Notice::line_complete(LineId::Row0)))
            .collect();
        queue = queue.reduce(ToastAction::Push(toasts));
        assert_eq!(queue.items.len(), MAX_TOASTS);
        assert_eq!(queue.items[0].id, 2);
        assert_eq!(queue.items[0].alert_class(), "alert-success");

        queue = queue.reduce(ToastAction::Dismiss(3));
        assert!(queue.items.iter().all(|toast| toast.id != 3));
        queue = queue.reduce(ToastAction::Clear);
        assert!(queue.items.is_empty());
    }

    #[test]
    fn severity_maps_to_alert_style() {
        let toast = Toast::from_notice(0, Notice::wait_hint());
        assert_eq!(toast.alert_class(), "alert-info");
        assert_eq!(
            toast.message,
            "Toca la carta o pulsa SIGUIENTE si no la tienes."
        );
    }
}
