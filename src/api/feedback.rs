use serde::{Deserialize, Serialize};

use crate::core::ToastKind;

/// One transient notice shown near the bottom of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    /// Host-clock deadline; `tick` drops the toast once passed.
    pub expires_at_ms: f64,
}

/// Zoom percent readout shown while a pinch is adjusting density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBadge {
    pub percent: u32,
    pub expires_at_ms: f64,
}

/// Transient feedback currently on screen.
///
/// Re-showing either surface replaces it and restarts its deadline, which is
/// what makes back-to-back toasts read as one refreshed notice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackState {
    pub(super) toast: Option<Toast>,
    pub(super) zoom_badge: Option<ZoomBadge>,
}

impl FeedbackState {
    pub(super) fn show_toast(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        expires_at_ms: f64,
    ) {
        self.toast = Some(Toast {
            kind,
            message: message.into(),
            expires_at_ms,
        });
    }

    pub(super) fn show_zoom_badge(&mut self, percent: u32, expires_at_ms: f64) {
        self.zoom_badge = Some(ZoomBadge {
            percent,
            expires_at_ms,
        });
    }

    /// Drops feedback whose deadline has passed; `true` when anything fell off.
    pub(super) fn expire(&mut self, now_ms: f64) -> bool {
        let mut changed = false;

        if self
            .toast
            .as_ref()
            .is_some_and(|toast| now_ms >= toast.expires_at_ms)
        {
            self.toast = None;
            changed = true;
        }

        if self
            .zoom_badge
            .is_some_and(|badge| now_ms >= badge.expires_at_ms)
        {
            self.zoom_badge = None;
            changed = true;
        }

        changed
    }
}
