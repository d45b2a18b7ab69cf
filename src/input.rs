//! Keyboard mapping for the simulator window.
//!
//! | Key | Action |
//! |-----|--------|
//! | `Left` / `Right` (held) | Drag the petal slider |
//! | `Up` / `Down` | Breath duration ±0.1 s |
//! | `Space` / `A` | Breath |
//! | `X` | Toggle FPS display |
//!
//! Holding an arrow key is a continuous slider drag: the count moves at
//! [`PETAL_DRAG_RATE`] petals per second and snaps to a whole count when the
//! last arrow key is released. OS key repeat is ignored for toggles and drags
//! but steps the breath slider, so holding `Up` keeps counting.

use embedded_graphics_simulator::sdl2::Keycode;

use crate::config::PETAL_DRAG_RATE;

/// Discrete action produced by a key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Breathe,
    ToggleFps,
    /// Move the breath slider by this many 0.1 s steps.
    StepBreath(i32),
    /// Petal slider released.
    EndPetalDrag,
}

/// Held-key state for the petal slider.
#[derive(Clone, Copy, Debug, Default)]
pub struct Controls {
    left: bool,
    right: bool,
}

impl Controls {
    pub const fn new() -> Self {
        Self {
            left: false,
            right: false,
        }
    }

    /// Handle a key press.
    pub fn key_down(
        &mut self,
        keycode: Keycode,
        repeat: bool,
    ) -> Option<Command> {
        match keycode {
            Keycode::UP => Some(Command::StepBreath(1)),
            Keycode::DOWN => Some(Command::StepBreath(-1)),
            // Ignore OS key repeat to prevent toggle spam when holding keys
            _ if repeat => None,
            Keycode::LEFT => {
                self.left = true;
                None
            }
            Keycode::RIGHT => {
                self.right = true;
                None
            }
            Keycode::SPACE | Keycode::A => Some(Command::Breathe),
            Keycode::X => Some(Command::ToggleFps),
            _ => None,
        }
    }

    /// Handle a key release. Ends the drag once no arrow is held.
    pub fn key_up(&mut self, keycode: Keycode) -> Option<Command> {
        let was_dragging = self.is_dragging();
        match keycode {
            Keycode::LEFT => self.left = false,
            Keycode::RIGHT => self.right = false,
            _ => return None,
        }
        (was_dragging && !self.is_dragging()).then_some(Command::EndPetalDrag)
    }

    #[inline]
    pub const fn is_dragging(&self) -> bool {
        self.left || self.right
    }

    /// Slider movement for a frame of `dt` seconds. Opposing keys cancel.
    pub fn drag_delta(&self, dt: f32) -> f32 {
        let direction = f32::from(i8::from(self.right) - i8::from(self.left));
        direction * PETAL_DRAG_RATE * dt
    }
}
