//! Transient notifications ("toasts").
//!
//! At most one toast exists at a time. It is shown for [`DISPLAY_DURATION`],
//! then fades out for [`FADE_DURATION`], then disappears. Time is passed in
//! explicitly so the lifecycle can be driven without a real clock.

use std::time::{Duration, Instant};

pub const DISPLAY_DURATION: Duration = Duration::from_millis(2500);
pub const FADE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Showing,
    FadingOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    /// Phase at `now`, or `None` once the toast has been removed.
    pub fn phase(&self, now: Instant) -> Option<ToastPhase> {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed < DISPLAY_DURATION {
            Some(ToastPhase::Showing)
        } else if elapsed < DISPLAY_DURATION + FADE_DURATION {
            Some(ToastPhase::FadingOut)
        } else {
            None
        }
    }
}

#[derive(Debug, Default)]
pub struct Toaster {
    current: Option<Toast>,
}

impl Toaster {
    /// Shows `message`, replacing any toast still on screen.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Toast {
            message: message.into(),
            shown_at: now,
        });
    }

    /// The toast visible at `now` and its phase. Drops an expired toast.
    pub fn visible(&mut self, now: Instant) -> Option<(&Toast, ToastPhase)> {
        let phase = self.current.as_ref()?.phase(now);
        match phase {
            Some(phase) => self.current.as_ref().map(|t| (t, phase)),
            None => {
                self.current = None;
                None
            }
        }
    }

    /// The most recently shown toast, whether or not it has expired.
    pub fn last(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle() {
        let start = Instant::now();
        let mut toaster = Toaster::default();
        toaster.show("Ordered", start);

        let (toast, phase) = toaster.visible(start + Duration::from_millis(100)).unwrap();
        assert_eq!(toast.message, "Ordered");
        assert_eq!(phase, ToastPhase::Showing);

        let (_, phase) = toaster.visible(start + Duration::from_millis(2600)).unwrap();
        assert_eq!(phase, ToastPhase::FadingOut);

        assert!(toaster.visible(start + Duration::from_millis(2800)).is_none());
        assert!(toaster.last().is_none());
    }

    #[test]
    fn new_toast_replaces_current() {
        let start = Instant::now();
        let mut toaster = Toaster::default();
        toaster.show("first", start);
        toaster.show("second", start + Duration::from_millis(2000));

        // The first toast would have expired by now; the second is still up.
        let (toast, phase) = toaster.visible(start + Duration::from_millis(3000)).unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(phase, ToastPhase::Showing);
    }
}
