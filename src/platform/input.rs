//! Keyboard and pointer bindings
//!
//! Events accumulate between ticks; `take_tick_input` drains them into a
//! `TickInput` once per frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::controls::in_firing_area;
use crate::sim::{BoxColor, Command, PointerSample, TickInput};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Escape,
    RightAlt,
    RightCtrl,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Other,
}

/// Window pixels to world units. Origin at the window center, y up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenMapping {
    pub width: f32,
    pub height: f32,
    pub pixels_per_unit: f32,
}

impl Default for ScreenMapping {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            pixels_per_unit: 50.0,
        }
    }
}

impl ScreenMapping {
    /// Convert a window position (y down) to world coordinates
    pub fn to_world(&self, px: f32, py: f32) -> Vec2 {
        Vec2::new(
            (px - self.width / 2.0) / self.pixels_per_unit,
            (self.height / 2.0 - py) / self.pixels_per_unit,
        )
    }
}

/// Held modifier keys that retarget the arrow keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Modifiers {
    right_alt: bool,
    right_ctrl: bool,
}

/// Input accumulated since the last tick
#[derive(Debug, Clone)]
pub struct InputState {
    mapping: ScreenMapping,
    modifiers: Modifiers,
    commands: Vec<Command>,
    pointer: Option<Vec2>,
    dragging: bool,
    /// Autopilot toggle (`i`)
    pub idle_mode: bool,
}

impl InputState {
    pub fn new(mapping: ScreenMapping) -> Self {
        Self {
            mapping,
            modifiers: Modifiers::default(),
            commands: Vec::new(),
            pointer: None,
            dragging: false,
            idle_mode: false,
        }
    }

    /// Handle a key press or release
    pub fn key(&mut self, key: Key, action: KeyAction) {
        let pressed = action == KeyAction::Press;
        match key {
            Key::RightAlt => {
                self.modifiers.right_alt = pressed;
                return;
            }
            Key::RightCtrl => {
                self.modifiers.right_ctrl = pressed;
                return;
            }
            // Fires on release
            Key::Space => {
                if !pressed {
                    self.commands.push(Command::Fire);
                }
                return;
            }
            _ => {}
        }
        if !pressed {
            return;
        }

        let command = match key {
            Key::Left => match self.box_modifier() {
                Some(color) => Command::BoxLeft(color),
                None => Command::PanLeft,
            },
            Key::Right => match self.box_modifier() {
                Some(color) => Command::BoxRight(color),
                None => Command::PanRight,
            },
            Key::Up => Command::ZoomIn,
            Key::Down => Command::ZoomOut,
            Key::Escape => Command::Quit,
            Key::Char(c) => match c {
                's' => Command::CannonUp,
                'f' => Command::CannonDown,
                'a' => Command::AimUp,
                'd' => Command::AimDown,
                'n' => Command::SpeedUp,
                'm' => Command::SlowDown,
                'r' | 'R' => Command::Reset,
                'q' | 'Q' => Command::Quit,
                'i' | 'I' => {
                    self.idle_mode = !self.idle_mode;
                    log::info!("Idle mode: {}", self.idle_mode);
                    return;
                }
                _ => return,
            },
            Key::Space | Key::RightAlt | Key::RightCtrl => return,
        };
        self.commands.push(command);
    }

    /// Red wins when both modifiers are held
    fn box_modifier(&self) -> Option<BoxColor> {
        if self.modifiers.right_alt {
            Some(BoxColor::Red)
        } else if self.modifiers.right_ctrl {
            Some(BoxColor::Green)
        } else {
            None
        }
    }

    /// Pointer moved to window position (px, py)
    pub fn pointer_moved(&mut self, px: f32, py: f32) {
        self.pointer = Some(self.mapping.to_world(px, py));
    }

    /// Pointer left the window
    pub fn pointer_left(&mut self) {
        self.pointer = None;
        self.dragging = false;
    }

    /// Pointer button press/release at window position (px, py).
    ///
    /// Left press starts a drag; left release ends it and fires if the pointer
    /// is in the firing area.
    pub fn pointer_button(&mut self, button: PointerButton, action: KeyAction, px: f32, py: f32) {
        if button != PointerButton::Left {
            return;
        }
        let pos = self.mapping.to_world(px, py);
        self.pointer = Some(pos);
        match action {
            KeyAction::Press => self.dragging = true,
            KeyAction::Release => {
                self.dragging = false;
                if in_firing_area(pos) {
                    self.commands.push(Command::Fire);
                }
            }
        }
    }

    /// Drain accumulated commands into the next tick's input
    pub fn take_tick_input(&mut self, dt: f32) -> TickInput {
        TickInput {
            dt,
            commands: std::mem::take(&mut self.commands),
            pointer: self.pointer.map(|pos| PointerSample {
                pos,
                held: self.dragging,
            }),
            idle_mode: self.idle_mode,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(ScreenMapping::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut InputState, key: Key) {
        input.key(key, KeyAction::Press);
    }

    #[test]
    fn test_screen_mapping() {
        let m = ScreenMapping::default();
        assert_eq!(m.to_world(400.0, 400.0), Vec2::ZERO);
        assert_eq!(m.to_world(0.0, 0.0), Vec2::new(-8.0, 8.0));
        assert_eq!(m.to_world(800.0, 800.0), Vec2::new(8.0, -8.0));
    }

    #[test]
    fn test_arrows_pan_without_modifier() {
        let mut input = InputState::default();
        press(&mut input, Key::Left);
        press(&mut input, Key::Right);
        press(&mut input, Key::Up);
        press(&mut input, Key::Down);
        let tick = input.take_tick_input(0.0);
        assert_eq!(
            tick.commands,
            vec![
                Command::PanLeft,
                Command::PanRight,
                Command::ZoomIn,
                Command::ZoomOut
            ]
        );
    }

    #[test]
    fn test_modifiers_select_box() {
        let mut input = InputState::default();
        press(&mut input, Key::RightCtrl);
        press(&mut input, Key::Left);
        press(&mut input, Key::RightAlt);
        press(&mut input, Key::Right);
        input.key(Key::RightAlt, KeyAction::Release);
        input.key(Key::RightCtrl, KeyAction::Release);
        press(&mut input, Key::Right);

        let tick = input.take_tick_input(0.0);
        assert_eq!(
            tick.commands,
            vec![
                Command::BoxLeft(BoxColor::Green),
                // Both held: red wins
                Command::BoxRight(BoxColor::Red),
                Command::PanRight,
            ]
        );
    }

    #[test]
    fn test_letter_bindings() {
        let mut input = InputState::default();
        for c in ['s', 'f', 'a', 'd', 'n', 'm', 'R', 'q', 'x'] {
            press(&mut input, Key::Char(c));
        }
        let tick = input.take_tick_input(0.0);
        assert_eq!(
            tick.commands,
            vec![
                Command::CannonUp,
                Command::CannonDown,
                Command::AimUp,
                Command::AimDown,
                Command::SpeedUp,
                Command::SlowDown,
                Command::Reset,
                Command::Quit,
            ]
        );
    }

    #[test]
    fn test_space_fires_on_release() {
        let mut input = InputState::default();
        press(&mut input, Key::Space);
        assert!(input.take_tick_input(0.0).commands.is_empty());
        input.key(Key::Space, KeyAction::Release);
        assert_eq!(input.take_tick_input(0.0).commands, vec![Command::Fire]);
    }

    #[test]
    fn test_idle_toggle() {
        let mut input = InputState::default();
        press(&mut input, Key::Char('i'));
        assert!(input.take_tick_input(0.0).idle_mode);
        press(&mut input, Key::Char('I'));
        assert!(!input.take_tick_input(0.0).idle_mode);
    }

    #[test]
    fn test_pointer_drag_and_release_fire() {
        let mut input = InputState::default();
        // (500, 300) px -> (2, 2) world, inside the firing area
        input.pointer_button(PointerButton::Left, KeyAction::Press, 500.0, 300.0);
        let tick = input.take_tick_input(1.0 / 60.0);
        assert_eq!(
            tick.pointer,
            Some(PointerSample {
                pos: Vec2::new(2.0, 2.0),
                held: true
            })
        );
        assert!(tick.commands.is_empty());

        input.pointer_button(PointerButton::Left, KeyAction::Release, 500.0, 300.0);
        let tick = input.take_tick_input(1.0 / 60.0);
        assert_eq!(tick.commands, vec![Command::Fire]);
        assert!(!tick.pointer.is_some_and(|p| p.held));
    }

    #[test]
    fn test_release_in_box_band_does_not_fire() {
        let mut input = InputState::default();
        // y = -6 world
        input.pointer_button(PointerButton::Left, KeyAction::Press, 300.0, 700.0);
        input.pointer_button(PointerButton::Left, KeyAction::Release, 300.0, 700.0);
        assert!(input.take_tick_input(0.0).commands.is_empty());
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut input = InputState::default();
        input.pointer_button(PointerButton::Other, KeyAction::Press, 500.0, 300.0);
        input.pointer_button(PointerButton::Other, KeyAction::Release, 500.0, 300.0);
        let tick = input.take_tick_input(0.0);
        assert!(tick.commands.is_empty());
        assert!(tick.pointer.is_none());
    }
}
