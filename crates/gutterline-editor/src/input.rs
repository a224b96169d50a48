//! Pointer input delivered by the host to the gutters.

/// Keyboard modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub control: bool,
    pub alt: bool,
    pub shift: bool,
    /// Command on macOS, the Windows key elsewhere.
    pub platform: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn control() -> Self {
        Self {
            control: true,
            ..Self::default()
        }
    }

    pub fn platform() -> Self {
        Self {
            platform: true,
            ..Self::default()
        }
    }

    /// Ctrl (or Cmd) on its own turns the wheel into a font zoom.
    pub fn is_zoom(&self) -> bool {
        (self.control || self.platform) && !self.alt && !self.shift
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A wheel notification; positive `delta_y` scrolls up / zooms in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub delta_y: f32,
    pub modifiers: Modifiers,
}

impl WheelEvent {
    pub fn new(delta_y: f32, modifiers: Modifiers) -> Self {
        Self { delta_y, modifiers }
    }
}
