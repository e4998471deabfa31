//! Per-frame input state
//!
//! Holds the set of logical movement keys currently held and the one-shot
//! actions released since the last [`InputState::end_frame`].

use bitflags::bitflags;

/// Logical movement keys consumed by the player controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    MoveForward,
    MoveBack,
    StrafeLeft,
    StrafeRight,
}

impl LogicalKey {
    /// All movement keys, in accumulation order
    pub const ALL: [LogicalKey; 4] = [
        LogicalKey::MoveForward,
        LogicalKey::MoveBack,
        LogicalKey::StrafeLeft,
        LogicalKey::StrafeRight,
    ];

    fn flag(self) -> HeldKeys {
        match self {
            LogicalKey::MoveForward => HeldKeys::FORWARD,
            LogicalKey::MoveBack => HeldKeys::BACK,
            LogicalKey::StrafeLeft => HeldKeys::LEFT,
            LogicalKey::StrafeRight => HeldKeys::RIGHT,
        }
    }
}

bitflags! {
    /// Set of held movement keys
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HeldKeys: u8 {
        const FORWARD = 1 << 0;
        const BACK = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

/// One-shot actions fired when their key is released
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Toggle the debug overlay
    ToggleDebug,
    /// Put the free camera back at its starting pose
    ResetCamera,
}

impl InputAction {
    fn flag(self) -> ActionSet {
        match self {
            InputAction::ToggleDebug => ActionSet::TOGGLE_DEBUG,
            InputAction::ResetCamera => ActionSet::RESET_CAMERA,
        }
    }
}

bitflags! {
    /// Set of actions released during the current frame
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ActionSet: u8 {
        const TOGGLE_DEBUG = 1 << 0;
        const RESET_CAMERA = 1 << 1;
    }
}

/// Input snapshot read by the game loop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    held: HeldKeys,
    released: ActionSet,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a movement key as held
    pub fn press(&mut self, key: LogicalKey) {
        self.held.insert(key.flag());
    }

    /// Mark a movement key as no longer held
    pub fn release(&mut self, key: LogicalKey) {
        self.held.remove(key.flag());
    }

    /// Check whether a movement key is held
    pub fn is_held(&self, key: LogicalKey) -> bool {
        self.held.contains(key.flag())
    }

    /// Check whether any movement key is held
    pub fn any_held(&self) -> bool {
        !self.held.is_empty()
    }

    /// The full held-key set
    pub fn held(&self) -> HeldKeys {
        self.held
    }

    /// Record that an action's key was released this frame
    pub fn fire(&mut self, action: InputAction) {
        self.released.insert(action.flag());
    }

    /// Check whether an action fired this frame
    pub fn was_released(&self, action: InputAction) -> bool {
        self.released.contains(action.flag())
    }

    /// Clear one-shot actions; held keys persist
    ///
    /// Called once per frame after the tick so a release is visible for
    /// exactly one tick.
    pub fn end_frame(&mut self) {
        self.released = ActionSet::empty();
    }

    /// Drop everything, e.g. when the window loses focus
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Builder: state with the given keys held
    pub fn with_held(keys: &[LogicalKey]) -> Self {
        let mut state = Self::new();
        for &key in keys {
            state.press(key);
        }
        state
    }
}
