#![warn(clippy::all)]

#[cfg(test)]
mod test;

pub mod asset;
pub mod config;
pub mod error;
pub mod pacing;

pub use asset::{FileResolver, OutputResolver, Root, TraversalPolicy};
pub use config::{Config, FrameCap, ResolverConfig, WindowConfig};
pub use error::{Error, ErrorKind, Result};
pub use pacing::{FramePacer, Schedule};
