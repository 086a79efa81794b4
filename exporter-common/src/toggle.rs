//! Controlled on/off switch model

/// Visual state of a toggle, mirrored into its `data-state` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Checked,
    Unchecked,
}

impl ToggleState {
    pub fn data_state(self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Unchecked => "unchecked",
        }
    }
}

impl From<bool> for ToggleState {
    fn from(checked: bool) -> Self {
        if checked {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }
}

/// A toggle holds no state of its own: `checked` always comes from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleSwitch {
    pub checked: bool,
}

impl ToggleSwitch {
    pub fn new(checked: bool) -> Self {
        Self { checked }
    }

    pub fn state(self) -> ToggleState {
        self.checked.into()
    }

    /// Handle one user interaction: emit the negated value, once.
    pub fn interact(self, emit: impl FnOnce(bool)) {
        emit(!self.checked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interaction_emits_negation_once() {
        for checked in [true, false] {
            let mut emitted = Vec::new();
            ToggleSwitch::new(checked).interact(|value| emitted.push(value));
            assert_eq!(emitted, vec![!checked]);
        }
    }

    #[test]
    fn display_follows_prop_not_interaction() {
        let toggle = ToggleSwitch::new(false);
        toggle.interact(|_| {});
        assert_eq!(toggle.state(), ToggleState::Unchecked);
    }

    #[test]
    fn data_state_attribute() {
        assert_eq!(ToggleState::from(true).data_state(), "checked");
        assert_eq!(ToggleState::from(false).data_state(), "unchecked");
    }
}
