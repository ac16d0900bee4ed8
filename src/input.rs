//! Keyboard state
//!
//! The browser pushes `keydown`/`keyup` events; the frame loop polls the held
//! set once per frame through [`Keyboard::snapshot`].

use std::collections::HashSet;

use crate::sim::TickInput;

/// A logical control bound to a physical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    IceUp,
    IceDown,
    FireUp,
    FireDown,
    Start,
}

impl Control {
    /// Map a `KeyboardEvent.code` value. Layout-independent, so W/S stay in
    /// place on AZERTY and friends.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Control::IceUp),
            "ArrowDown" => Some(Control::IceDown),
            "KeyW" => Some(Control::FireUp),
            "KeyS" => Some(Control::FireDown),
            "Space" => Some(Control::Start),
            _ => None,
        }
    }
}

/// Held-key tracker
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    held: HashSet<Control>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; returns true if the key is bound
    pub fn key_down(&mut self, code: &str) -> bool {
        match Control::from_code(code) {
            Some(control) => {
                if self.held.insert(control) {
                    log::debug!("{:?} pressed", control);
                }
                true
            }
            None => false,
        }
    }

    /// Record a key release; returns true if the key is bound
    pub fn key_up(&mut self, code: &str) -> bool {
        match Control::from_code(code) {
            Some(control) => {
                self.held.remove(&control);
                true
            }
            None => false,
        }
    }

    /// Forget every held key (focus lost, keyups will never arrive)
    pub fn release_all(&mut self) {
        if !self.held.is_empty() {
            log::debug!("Releasing {} held keys", self.held.len());
        }
        self.held.clear();
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    /// Sample the held keys into this frame's input
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            ice_up: self.is_held(Control::IceUp),
            ice_down: self.is_held(Control::IceDown),
            fire_up: self.is_held(Control::FireUp),
            fire_down: self.is_held(Control::FireDown),
            start: self.is_held(Control::Start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings() {
        assert_eq!(Control::from_code("ArrowUp"), Some(Control::IceUp));
        assert_eq!(Control::from_code("ArrowDown"), Some(Control::IceDown));
        assert_eq!(Control::from_code("KeyW"), Some(Control::FireUp));
        assert_eq!(Control::from_code("KeyS"), Some(Control::FireDown));
        assert_eq!(Control::from_code("Space"), Some(Control::Start));
        assert_eq!(Control::from_code("KeyA"), None);
        assert_eq!(Control::from_code("Enter"), None);
    }

    #[test]
    fn test_held_keys_show_in_snapshot() {
        let mut kb = Keyboard::new();
        assert!(kb.key_down("ArrowDown"));
        assert!(kb.key_down("KeyW"));

        let input = kb.snapshot();
        assert_eq!(
            input,
            TickInput {
                ice_down: true,
                fire_up: true,
                ..Default::default()
            }
        );

        assert!(kb.key_up("ArrowDown"));
        assert!(!kb.snapshot().ice_down);
        assert!(kb.snapshot().fire_up);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut kb = Keyboard::new();
        assert!(!kb.key_down("KeyQ"));
        assert!(!kb.key_up("KeyQ"));
        assert_eq!(kb.snapshot(), TickInput::default());
    }

    #[test]
    fn test_space_stays_held_until_released() {
        let mut kb = Keyboard::new();
        kb.key_down("Space");
        // key repeat sends more keydowns
        kb.key_down("Space");
        assert!(kb.snapshot().start);
        assert!(kb.snapshot().start, "polling does not consume the key");
        kb.key_up("Space");
        assert!(!kb.snapshot().start);
    }

    #[test]
    fn test_release_all() {
        let mut kb = Keyboard::new();
        kb.key_down("ArrowUp");
        kb.key_down("KeyS");
        kb.key_down("Space");
        kb.release_all();
        assert_eq!(kb.snapshot(), TickInput::default());
    }
}
