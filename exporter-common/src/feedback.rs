//! Transient success feedback for menu entries

/// Identifies one feedback window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackToken(u64);

/// Tracks whether an entry is currently showing its success text.
///
/// Each success starts a new window; expiring an older window does not hide a
/// newer one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuccessFeedback {
    active: Option<FeedbackToken>,
    issued: u64,
}

impl SuccessFeedback {
    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }

    pub fn show(&mut self) -> FeedbackToken {
        self.issued += 1;
        let token = FeedbackToken(self.issued);
        self.active = Some(token);
        token
    }

    /// Returns true if `token` was the visible window and is now hidden.
    pub fn expire(&mut self, token: FeedbackToken) -> bool {
        if self.active == Some(token) {
            self.active = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_expire() {
        let mut feedback = SuccessFeedback::default();
        assert!(!feedback.is_visible());

        let token = feedback.show();
        assert!(feedback.is_visible());
        assert!(feedback.expire(token));
        assert!(!feedback.is_visible());
    }

    #[test]
    fn stale_expiry_keeps_newer_window() {
        let mut feedback = SuccessFeedback::default();
        let first = feedback.show();
        let second = feedback.show();

        assert!(!feedback.expire(first));
        assert!(feedback.is_visible());
        assert!(feedback.expire(second));
    }
}
