use std::{fmt, time::Duration};

use glam::UVec2;

use crate::asset::{Root, TraversalPolicy};

/// Upper bound on how often the viewer presents frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameCap {
    /// Present frames as fast as the event loop allows.
    Unlimited,
    /// Present at most this many frames per second.
    Limited(u32),
    /// Don't present frames at all.
    Paused,
}

impl FrameCap {
    /// Interpret a signed frame rate: zero never sleeps, a negative value stops
    /// rendering and a positive value is a cap.
    pub fn from_fps(fps: i32) -> Self {
        match fps {
            0 => Self::Unlimited,
            fps if fps < 0 => Self::Paused,
            fps => Self::Limited(fps as u32),
        }
    }

    /// The shortest time between two frames, `None` when there is no cap.
    pub fn interval(&self) -> Option<Duration> {
        match self {
            Self::Limited(0) | Self::Unlimited | Self::Paused => None,
            Self::Limited(fps) => Some(Duration::from_secs(1) / *fps),
        }
    }
}

impl fmt::Display for FrameCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => write!(f, "unlimited"),
            Self::Limited(fps) => write!(f, "{fps} fps"),
            Self::Paused => write!(f, "paused"),
        }
    }
}

/// Configuration of the viewer window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    /// Inner size in logical pixels.
    pub size: UVec2,
    pub resizable: bool,
    /// Frame cap while the window has focus.
    pub foreground: FrameCap,
    /// Frame cap while the window is in the background.
    pub background: FrameCap,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Model-Viewer".to_owned(),
            size: UVec2::new(640, 480),
            resizable: true,
            foreground: FrameCap::from_fps(60),
            background: FrameCap::from_fps(60),
        }
    }
}

/// Configuration of asset name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolverConfig {
    pub root: Root,
    pub traversal: TraversalPolicy,
    /// Subdirectory of the root to list when the viewer starts.
    pub startup_listing: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub window: WindowConfig,
    pub resolver: ResolverConfig,
}
