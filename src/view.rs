//! The selectable stadium perspectives.

/// Which stand the camera is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Front,
    Left,
    Right,
}

impl ViewState {
    pub const ALL: [ViewState; 3] = [ViewState::Front, ViewState::Left, ViewState::Right];

    /// Upper-case label used in the header and the side-view title.
    pub fn label(self) -> &'static str {
        match self {
            ViewState::Front => "FRONT",
            ViewState::Left => "LEFT",
            ViewState::Right => "RIGHT",
        }
    }

    /// Map a selection letter (`F`, `L`, `R`, any case) to a view.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'F' => Some(ViewState::Front),
            'L' => Some(ViewState::Left),
            'R' => Some(ViewState::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_front() {
        assert_eq!(ViewState::default(), ViewState::Front);
    }

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(ViewState::from_letter('f'), Some(ViewState::Front));
        assert_eq!(ViewState::from_letter('L'), Some(ViewState::Left));
        assert_eq!(ViewState::from_letter('r'), Some(ViewState::Right));
        assert_eq!(ViewState::from_letter('q'), None);
        assert_eq!(ViewState::from_letter(' '), None);
    }

    #[test]
    fn labels_round_trip_through_letters() {
        for view in ViewState::ALL {
            let first = view.label().chars().next().unwrap();
            assert_eq!(ViewState::from_letter(first), Some(view));
        }
    }
}
