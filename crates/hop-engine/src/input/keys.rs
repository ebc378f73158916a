//! Keyboard mapping: physical key codes to game actions, and held-key
//! tracking that produces one [`MoveIntent`] per frame.

use std::collections::HashSet;

use crate::input::intent::MoveIntent;
use crate::input::queue::{InputEvent, InputQueue};

// DOM keyCode values.
pub const KEY_ESCAPE: u32 = 27;
pub const KEY_SPACE: u32 = 32;
pub const KEY_PAGE_UP: u32 = 33;
pub const KEY_PAGE_DOWN: u32 = 34;
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_A: u32 = 65;
pub const KEY_D: u32 = 68;
pub const KEY_R: u32 = 82;
pub const KEY_W: u32 = 87;
pub const KEY_EQUALS: u32 = 187;
pub const KEY_MINUS: u32 = 189;

/// Everything a key can mean to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    GravityUp,
    GravityDown,
    JumpUp,
    JumpDown,
    Reset,
    Quit,
}

impl Action {
    pub fn from_key(key_code: u32) -> Option<Self> {
        match key_code {
            KEY_A | KEY_LEFT => Some(Action::MoveLeft),
            KEY_D | KEY_RIGHT => Some(Action::MoveRight),
            KEY_SPACE | KEY_W | KEY_UP => Some(Action::Jump),
            KEY_PAGE_UP => Some(Action::GravityUp),
            KEY_PAGE_DOWN => Some(Action::GravityDown),
            KEY_EQUALS => Some(Action::JumpUp),
            KEY_MINUS => Some(Action::JumpDown),
            KEY_R => Some(Action::Reset),
            KEY_ESCAPE => Some(Action::Quit),
            _ => None,
        }
    }
}

/// A discrete key transition, already mapped to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    Pressed(Action),
    Released(Action),
}

/// Tracks which keys are held across frames.
///
/// Movement follows held keys. Jump is edge-triggered: holding the key does
/// not re-jump on landing.
#[derive(Debug, Default)]
pub struct KeyState {
    held: HashSet<u32>,
    jump_queued: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold this frame's events into the held set.
    /// Returns the mapped transitions in arrival order. Auto-repeat key downs are dropped.
    pub fn apply(&mut self, input: &InputQueue) -> Vec<KeyEdge> {
        let mut edges = Vec::new();
        for event in input.iter() {
            match *event {
                InputEvent::KeyDown { key_code } => {
                    if !self.held.insert(key_code) {
                        continue;
                    }
                    if let Some(action) = Action::from_key(key_code) {
                        if action == Action::Jump {
                            self.jump_queued = true;
                        }
                        edges.push(KeyEdge::Pressed(action));
                    }
                }
                InputEvent::KeyUp { key_code } => {
                    if !self.held.remove(&key_code) {
                        continue;
                    }
                    if let Some(action) = Action::from_key(key_code) {
                        edges.push(KeyEdge::Released(action));
                    }
                }
                InputEvent::Custom { .. } => {}
            }
        }
        edges
    }

    /// Whether any key mapped to `action` is held.
    pub fn is_held(&self, action: Action) -> bool {
        self.held
            .iter()
            .any(|&code| Action::from_key(code) == Some(action))
    }

    /// Build this frame's intent and consume the queued jump press.
    pub fn take_intent(&mut self) -> MoveIntent {
        MoveIntent {
            move_left: self.is_held(Action::MoveLeft),
            move_right: self.is_held(Action::MoveRight),
            jump_pressed: std::mem::take(&mut self.jump_queued),
        }
    }

    /// Forget all held keys.
    pub fn clear(&mut self) {
        self.held.clear();
        self.jump_queued = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(events: &[InputEvent]) -> InputQueue {
        let mut q = InputQueue::new();
        for e in events {
            q.push(*e);
        }
        q
    }

    #[test]
    fn key_map() {
        assert_eq!(Action::from_key(KEY_A), Some(Action::MoveLeft));
        assert_eq!(Action::from_key(KEY_LEFT), Some(Action::MoveLeft));
        assert_eq!(Action::from_key(KEY_D), Some(Action::MoveRight));
        assert_eq!(Action::from_key(KEY_RIGHT), Some(Action::MoveRight));
        for key in [KEY_SPACE, KEY_W, KEY_UP] {
            assert_eq!(Action::from_key(key), Some(Action::Jump));
        }
        assert_eq!(Action::from_key(KEY_PAGE_UP), Some(Action::GravityUp));
        assert_eq!(Action::from_key(KEY_PAGE_DOWN), Some(Action::GravityDown));
        assert_eq!(Action::from_key(KEY_EQUALS), Some(Action::JumpUp));
        assert_eq!(Action::from_key(KEY_MINUS), Some(Action::JumpDown));
        assert_eq!(Action::from_key(KEY_R), Some(Action::Reset));
        assert_eq!(Action::from_key(KEY_ESCAPE), Some(Action::Quit));
        assert_eq!(Action::from_key(13), None);
    }

    #[test]
    fn held_keys_drive_movement() {
        let mut keys = KeyState::new();
        keys.apply(&queue(&[InputEvent::KeyDown { key_code: KEY_D }]));
        assert!(keys.take_intent().move_right);
        // Still held on the next frame with no new events.
        assert!(keys.take_intent().move_right);

        keys.apply(&queue(&[InputEvent::KeyUp { key_code: KEY_D }]));
        assert_eq!(keys.take_intent(), MoveIntent::IDLE);
    }

    #[test]
    fn jump_fires_once_per_press() {
        let mut keys = KeyState::new();
        let edges = keys.apply(&queue(&[InputEvent::KeyDown { key_code: KEY_SPACE }]));
        assert_eq!(edges, vec![KeyEdge::Pressed(Action::Jump)]);
        assert!(keys.take_intent().jump_pressed);
        assert!(!keys.take_intent().jump_pressed);

        // Auto-repeat while held is ignored.
        let edges = keys.apply(&queue(&[InputEvent::KeyDown { key_code: KEY_SPACE }]));
        assert!(edges.is_empty());
        assert!(!keys.take_intent().jump_pressed);
    }

    #[test]
    fn left_and_right_together() {
        let mut keys = KeyState::new();
        keys.apply(&queue(&[
            InputEvent::KeyDown { key_code: KEY_LEFT },
            InputEvent::KeyDown { key_code: KEY_D },
        ]));
        let intent = keys.take_intent();
        assert!(intent.move_left && intent.move_right);
        assert_eq!(intent.horizontal(), 0.0);
    }

    #[test]
    fn release_edges_are_reported() {
        let mut keys = KeyState::new();
        let edges = keys.apply(&queue(&[
            InputEvent::KeyDown { key_code: KEY_W },
            InputEvent::KeyUp { key_code: KEY_W },
            InputEvent::KeyUp { key_code: KEY_R },
        ]));
        assert_eq!(
            edges,
            vec![KeyEdge::Pressed(Action::Jump), KeyEdge::Released(Action::Jump)]
        );
    }

    #[test]
    fn clear_forgets_everything() {
        let mut keys = KeyState::new();
        keys.apply(&queue(&[
            InputEvent::KeyDown { key_code: KEY_A },
            InputEvent::KeyDown { key_code: KEY_SPACE },
        ]));
        keys.clear();
        assert_eq!(keys.take_intent(), MoveIntent::IDLE);
    }
}
