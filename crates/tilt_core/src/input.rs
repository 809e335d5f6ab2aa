//! Input state tracking with both edge-triggered and level-triggered queries.
//!
//! - **Level-triggered (held):** `is_held(key)` is true every frame the key
//!   is down. Continuous actions like patrol movement read this.
//!
//! - **Edge-triggered (just_pressed / just_released):** true only during the
//!   frame the transition happened, cleared by `end_frame()`. One-shot
//!   actions (jump, fire) read these so holding a key does not retrigger.
//!
//! Device handling is the host's job; whoever owns the loop (harness,
//! scripted schedule, test) feeds transitions in via `press`/`release`.

use std::collections::HashSet;

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerBtn {
    Primary,
    Secondary,
}

pub struct InputState {
    held: HashSet<Key>,
    just_pressed: HashSet<Key>,
    just_released: HashSet<Key>,

    pointer_held: HashSet<PointerBtn>,
    pointer_just_pressed: HashSet<PointerBtn>,

    pub pointer_position: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
            pointer_held: HashSet::new(),
            pointer_just_pressed: HashSet::new(),
            pointer_position: Vec2::ZERO,
        }
    }

    pub fn press(&mut self, key: Key) {
        if self.held.insert(key) {
            self.just_pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: Key) {
        if self.held.remove(&key) {
            self.just_released.insert(key);
        }
    }

    pub fn pointer_down(&mut self, btn: PointerBtn) {
        if self.pointer_held.insert(btn) {
            self.pointer_just_pressed.insert(btn);
        }
    }

    pub fn pointer_up(&mut self, btn: PointerBtn) {
        self.pointer_held.remove(&btn);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    pub fn is_just_released(&self, key: Key) -> bool {
        self.just_released.contains(&key)
    }

    pub fn is_pointer_held(&self, btn: PointerBtn) -> bool {
        self.pointer_held.contains(&btn)
    }

    pub fn is_pointer_just_pressed(&self, btn: PointerBtn) -> bool {
        self.pointer_just_pressed.contains(&btn)
    }

    /// Clear edge-triggered state. Call once per simulated frame, after the
    /// simulation has had a chance to observe the transitions.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.pointer_just_pressed.clear();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
