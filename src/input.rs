//! Keyboard input.
//!
//! Raw winit keyboard events are turned into [`KeyCode`]s and queued until
//! the next frame picks them up with [`Input::take_pressed`]. Every press is
//! queued, auto-repeats included, so holding a key keeps the camera moving.

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// Keyboard key codes.
///
/// Only the keys the camera is bound to get their own variant. Everything
/// else arrives as `Other` carrying winit's key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W, A, S, D,
    Up, Down, Left, Right,
    Other(u32),
}

impl From<WinitKeyCode> for KeyCode {
    fn from(key: WinitKeyCode) -> Self {
        match key {
            WinitKeyCode::KeyW => KeyCode::W,
            WinitKeyCode::KeyA => KeyCode::A,
            WinitKeyCode::KeyS => KeyCode::S,
            WinitKeyCode::KeyD => KeyCode::D,
            WinitKeyCode::ArrowUp => KeyCode::Up,
            WinitKeyCode::ArrowDown => KeyCode::Down,
            WinitKeyCode::ArrowLeft => KeyCode::Left,
            WinitKeyCode::ArrowRight => KeyCode::Right,
            _ => KeyCode::Other(key as u32),
        }
    }
}

/// Queue of key presses waiting for the next frame.
#[derive(Debug, Default)]
pub struct Input {
    pressed: Vec<KeyCode>,
}

impl Input {
    /// Create an empty input queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a key press directly.
    pub fn press(&mut self, key: KeyCode) {
        self.pressed.push(key);
    }

    /// Drain the queued presses in arrival order.
    pub fn take_pressed(&mut self) -> Vec<KeyCode> {
        std::mem::take(&mut self.pressed)
    }

    /// Process a winit window event. Only key presses are kept.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if event.state != ElementState::Pressed {
                return;
            }
            if let PhysicalKey::Code(keycode) = event.physical_key {
                self.press(KeyCode::from(keycode));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winit_mapping() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyW), KeyCode::W);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowLeft), KeyCode::Left);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowDown), KeyCode::Down);
        assert_eq!(
            KeyCode::from(WinitKeyCode::Escape),
            KeyCode::Other(WinitKeyCode::Escape as u32)
        );
        assert_ne!(KeyCode::from(WinitKeyCode::KeyQ), KeyCode::from(WinitKeyCode::F5));
    }

    #[test]
    fn test_take_pressed_drains_in_order() {
        let mut input = Input::new();
        input.press(KeyCode::W);
        input.press(KeyCode::W);
        input.press(KeyCode::Up);

        assert_eq!(input.take_pressed(), vec![KeyCode::W, KeyCode::W, KeyCode::Up]);
        assert!(input.take_pressed().is_empty());
    }
}
