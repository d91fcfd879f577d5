use std::collections::HashSet;

/// Key code of the space bar, which spawns bodies while held.
pub const SPACE_KEY: u32 = 32;

/// Input collected between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(u32),
    KeyUp(u32),
    /// Pointer click on the canvas: one spawn request.
    PointerClick,
    /// The reset button: remove every body.
    Reset,
}

/// Pressed keys plus one-shot requests waiting for the next frame.
#[derive(Debug, Clone)]
pub struct InputState {
    pressed: HashSet<u32>,
    spawn_key: u32,
    pending_clicks: usize,
    reset_requested: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(SPACE_KEY)
    }
}

impl InputState {
    pub fn new(spawn_key: u32) -> Self {
        Self {
            pressed: HashSet::new(),
            spawn_key,
            pending_clicks: 0,
            reset_requested: false,
        }
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(code) => {
                self.pressed.insert(code);
            }
            InputEvent::KeyUp(code) => {
                self.pressed.remove(&code);
            }
            InputEvent::PointerClick => self.pending_clicks += 1,
            InputEvent::Reset => self.reset_requested = true,
        }
    }

    pub fn is_pressed(&self, code: u32) -> bool {
        self.pressed.contains(&code)
    }

    /// Holding the spawn key asks for one body per frame.
    pub fn spawn_held(&self) -> bool {
        self.is_pressed(self.spawn_key)
    }

    pub fn take_clicks(&mut self) -> usize {
        std::mem::take(&mut self.pending_clicks)
    }

    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_requested)
    }
}
