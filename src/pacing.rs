use std::time::Instant;

use crate::config::{FrameCap, WindowConfig};

/// When the next frame should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Now,
    At(Instant),
    /// No frame is due until something changes, e.g. the window regains focus.
    Idle,
}

/// Keeps presented frames within the foreground or background cap, depending on
/// whether the window has focus.
#[derive(Debug, Clone)]
pub struct FramePacer {
    foreground: FrameCap,
    background: FrameCap,
    focused: bool,
    last_frame: Option<Instant>,
}

impl FramePacer {
    pub fn new(foreground: FrameCap, background: FrameCap) -> Self {
        Self {
            foreground,
            background,
            focused: true,
            last_frame: None,
        }
    }

    pub fn from_config(config: &WindowConfig) -> Self {
        Self::new(config.foreground, config.background)
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    /// The cap currently in effect.
    pub fn cap(&self) -> FrameCap {
        if self.focused {
            self.foreground
        } else {
            self.background
        }
    }

    pub fn schedule(&self, now: Instant) -> Schedule {
        let cap = self.cap();
        if cap == FrameCap::Paused {
            return Schedule::Idle;
        }
        let (Some(interval), Some(last_frame)) = (cap.interval(), self.last_frame) else {
            return Schedule::Now;
        };
        let due = last_frame + interval;
        if due <= now {
            Schedule::Now
        } else {
            Schedule::At(due)
        }
    }

    pub fn frame_presented(&mut self, now: Instant) {
        self.last_frame = Some(now);
    }
}
