#![warn(clippy::all)]


use std::path::PathBuf;

use clap::Parser;
use log::info;
use modelview::{Config, FileResolver, OutputResolver, Root, TraversalPolicy};
use modelview_viewer::Viewer;
use winit::error::EventLoopError;
use winit::event_loop::EventLoop;

/// Subdirectory listed by `--list` when no name is given.
pub const DEFAULT_LISTING: &str = "Collada";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Asset(#[from] modelview::Error),
    #[error(transparent)]
    Viewer(#[from] modelview_viewer::Error),
    #[error("event loop failed: {0}")]
    EventLoop(#[from] EventLoopError),
}

/// Desktop launcher for the model viewer.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "modelview-desktop", version, about)]
pub struct Args {
    /// Model to view, relative to the asset root
    pub model: String,

    /// Directory asset names are resolved against
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// List a subdirectory of the asset root before starting
    #[arg(
        long,
        value_name = "SUBDIR",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_LISTING
    )]
    pub list: Option<String>,

    /// Resolve model names that leave the asset root, such as `../model.g3dj`
    #[arg(long)]
    pub allow_traversal: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(root) = &self.root {
            config.resolver.root = Root::new(root);
        }
        config.resolver.startup_listing = self.list.clone();
        if self.allow_traversal {
            config.resolver.traversal = TraversalPolicy::Allow;
        }
        config
    }
}

/// Something that drives a viewer until its window closes.
pub trait RunLoop {
    fn run<R: FileResolver>(&mut self, viewer: &mut Viewer<R>) -> Result<(), Error>;
}

/// Runs the viewer on a `winit` event loop.
#[derive(Debug, Default)]
pub struct WinitRunLoop;

impl RunLoop for WinitRunLoop {
    fn run<R: FileResolver>(&mut self, viewer: &mut Viewer<R>) -> Result<(), Error> {
        let event_loop = EventLoop::new()?;
        event_loop.run_app(viewer)?;
        Ok(())
    }
}

pub struct Launcher {
    config: Config,
}

impl Launcher {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Start viewing `model`. Returns once the window is closed.
    pub fn launch(&self, model: String, run_loop: &mut impl RunLoop) -> Result<(), Error> {
        let resolver = OutputResolver::from_config(&self.config.resolver);
        if let Some(directory) = &self.config.resolver.startup_listing {
            resolver.report_directory(directory)?;
        }
        let mut viewer = Viewer::new(model, resolver, self.config.window.clone());
        let model_path = viewer.model_path()?;
        info!("launching viewer for {}", model_path.display());
        run_loop.run(&mut viewer)?;
        match viewer.take_error() {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}
