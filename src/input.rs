//! Input dispatch: keys and button clicks become [`Command`]s, which drive the
//! view state machine and the source overlay.

use statig::blocking::StateMachine;
use statig::prelude::*;
use tracing::debug;
use winit::event::MouseScrollDelta;
use winit::keyboard::Key;

use crate::info_panel::{InfoPanel, LISTING_LINE};
use crate::state_machine::view_sm::{ViewEvent, ViewMachine};
use crate::view::ViewState;

/// Everything the user can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(ViewState),
    ToggleInfo,
    HideInfo,
}

/// Map a logical key to a command. Only `F`, `L` and `R` (any case) are recognized.
pub fn command_for_key(key: &Key) -> Option<Command> {
    let Key::Character(text) = key else {
        return None;
    };
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => ViewState::from_letter(letter).map(Command::Select),
        _ => None,
    }
}

/// Listing lines to move for one wheel event; positive scrolls toward the end.
pub fn wheel_lines(delta: MouseScrollDelta, scale_factor: f64) -> isize {
    let lines = match delta {
        MouseScrollDelta::LineDelta(_, y) => -y as f64,
        MouseScrollDelta::PixelDelta(pos) => -pos.y / scale_factor / LISTING_LINE,
    };
    lines.round() as isize
}

/// Owns the current view.
pub struct InputDispatcher {
    views: StateMachine<ViewMachine>,
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDispatcher {
    pub fn new() -> Self {
        Self {
            views: ViewMachine::default().state_machine(),
        }
    }

    pub fn view(&self) -> ViewState {
        ViewMachine::view_of(self.views.state())
    }

    /// Apply `command`. Returns `true` when something on screen changed and a
    /// redraw is due.
    pub fn apply(&mut self, command: Command, panel: &mut InfoPanel) -> bool {
        debug!(target: "input", ?command, "dispatch");
        match command {
            Command::Select(view) => {
                let before = self.view();
                self.views.handle(&ViewEvent::Select(view));
                self.view() != before
            }
            Command::ToggleInfo => {
                panel.toggle();
                true
            }
            Command::HideInfo => {
                let was_shown = panel.is_shown();
                panel.hide();
                was_shown
            }
        }
    }

    /// Convenience for key presses: unrecognized keys do nothing.
    pub fn press(&mut self, key: &Key, panel: &mut InfoPanel) -> bool {
        match command_for_key(key) {
            Some(command) => self.apply(command, panel),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stadium::{self, RenderCaps, side};
    use crate::surface::recording::Recorder;
    use winit::keyboard::NamedKey;

    fn key(s: &str) -> Key {
        Key::Character(s.into())
    }

    fn rendered_texts(view: ViewState) -> Vec<String> {
        let mut rec = Recorder::default();
        stadium::render(Some(&mut rec), view, RenderCaps::default());
        rec.texts().into_iter().map(str::to_string).collect()
    }

    #[test]
    fn letter_keys_map_to_views() {
        assert_eq!(command_for_key(&key("f")), Some(Command::Select(ViewState::Front)));
        assert_eq!(command_for_key(&key("L")), Some(Command::Select(ViewState::Left)));
        assert_eq!(command_for_key(&key("r")), Some(Command::Select(ViewState::Right)));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(command_for_key(&key("q")), None);
        assert_eq!(command_for_key(&key("fl")), None);
        assert_eq!(command_for_key(&Key::Named(NamedKey::Escape)), None);
        assert_eq!(command_for_key(&Key::Named(NamedKey::Space)), None);
    }

    #[test]
    fn last_recognized_key_wins() {
        let mut dispatcher = InputDispatcher::new();
        let mut panel = InfoPanel::default();
        for (k, expected) in [
            ("l", ViewState::Left),
            ("x", ViewState::Left),
            ("R", ViewState::Right),
            ("r", ViewState::Right),
            ("7", ViewState::Right),
            ("F", ViewState::Front),
            ("L", ViewState::Left),
        ] {
            dispatcher.press(&key(k), &mut panel);
            assert_eq!(dispatcher.view(), expected, "after {k}");
        }
        assert!(!panel.is_shown());
    }

    #[test]
    fn redraw_only_on_change() {
        let mut dispatcher = InputDispatcher::new();
        let mut panel = InfoPanel::default();
        assert!(!dispatcher.press(&key("f"), &mut panel));
        assert!(dispatcher.press(&key("l"), &mut panel));
        assert!(!dispatcher.press(&key("l"), &mut panel));
        assert!(!dispatcher.press(&key("q"), &mut panel));
    }

    #[test]
    fn panel_commands_leave_view_alone() {
        let mut dispatcher = InputDispatcher::new();
        let mut panel = InfoPanel::default();
        dispatcher.press(&key("r"), &mut panel);

        assert!(dispatcher.apply(Command::ToggleInfo, &mut panel));
        assert!(panel.is_shown());
        assert!(dispatcher.apply(Command::HideInfo, &mut panel));
        assert!(!panel.is_shown());
        assert!(!dispatcher.apply(Command::HideInfo, &mut panel));
        assert_eq!(dispatcher.view(), ViewState::Right);
    }

    #[test]
    fn wheel_up_scrolls_back() {
        assert_eq!(wheel_lines(MouseScrollDelta::LineDelta(0.0, 1.0), 1.0), -1);
        assert_eq!(wheel_lines(MouseScrollDelta::LineDelta(0.0, -3.0), 2.0), 3);
        let pixels = winit::dpi::PhysicalPosition::new(0.0, -4.0 * LISTING_LINE);
        assert_eq!(wheel_lines(MouseScrollDelta::PixelDelta(pixels), 2.0), 2);
    }

    #[test]
    fn walkthrough_left_ignore_right_front() {
        let mut dispatcher = InputDispatcher::new();
        let mut panel = InfoPanel::default();
        assert_eq!(dispatcher.view(), ViewState::Front);

        dispatcher.press(&key("L"), &mut panel);
        assert_eq!(dispatcher.view(), ViewState::Left);
        assert!(rendered_texts(dispatcher.view()).contains(&"LEFT STAND PERSPECTIVE".to_string()));

        dispatcher.press(&key("Q"), &mut panel);
        assert_eq!(dispatcher.view(), ViewState::Left);

        dispatcher.press(&key("R"), &mut panel);
        assert_eq!(dispatcher.view(), ViewState::Right);
        assert_eq!(side::title(dispatcher.view()), "RIGHT STAND PERSPECTIVE");
        assert!(rendered_texts(dispatcher.view()).contains(&"RIGHT STAND PERSPECTIVE".to_string()));

        dispatcher.press(&key("F"), &mut panel);
        assert_eq!(dispatcher.view(), ViewState::Front);
        assert!(rendered_texts(dispatcher.view()).is_empty());
    }
}
