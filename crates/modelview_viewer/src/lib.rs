#![warn(clippy::all)]


use std::{path::PathBuf, time::Instant};

use log::{debug, error, info, warn};
use modelview::{FileResolver, FramePacer, Schedule, WindowConfig};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::OsError;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error(transparent)]
    Asset(#[from] modelview::Error),
}

/// Shows a single model in a window. Driven by a `winit` event loop.
pub struct Viewer<R> {
    model: String,
    resolver: R,
    config: WindowConfig,
    pacer: FramePacer,
    window: Option<Window>,
    frames: u64,
    error: Option<Error>,
}

impl<R: FileResolver> Viewer<R> {
    pub fn new(model: impl Into<String>, resolver: R, config: WindowConfig) -> Self {
        Self {
            model: model.into(),
            pacer: FramePacer::from_config(&config),
            resolver,
            config,
            window: None,
            frames: 0,
            error: None,
        }
    }

    /// The model name exactly as given.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn model_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolver.resolve(&self.model)?)
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The error that stopped the event loop, if any.
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    fn window_attributes(&self) -> winit::window::WindowAttributes {
        Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.size.x, self.config.size.y))
            .with_resizable(self.config.resizable)
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Error> {
        let model_path = self.model_path()?;
        if model_path.exists() {
            info!("viewing {}", model_path.display());
        } else {
            warn!("model {} does not exist", model_path.display());
        }
        let window = event_loop.create_window(self.window_attributes())?;
        info!(
            "created window '{}' ({}x{}, foreground {}, background {})",
            self.config.title,
            self.config.size.x,
            self.config.size.y,
            self.config.foreground,
            self.config.background,
        );
        self.window = Some(window);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }
}

impl<R: FileResolver> ApplicationHandler for Viewer<R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(error) = self.start(event_loop) {
            self.fail(event_loop, error);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &self.window else {
            return;
        };
        if window.id() != window_id {
            return;
        }
        match event {
            WindowEvent::CloseRequested => {
                info!("closing after {} frames", self.frames);
                event_loop.exit();
            }
            WindowEvent::Focused(focused) => {
                self.pacer.set_focused(focused);
                debug!("frame cap is now {}", self.pacer.cap());
            }
            WindowEvent::RedrawRequested => {
                self.pacer.frame_presented(Instant::now());
                self.frames += 1;
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };
        match self.pacer.schedule(Instant::now()) {
            Schedule::Now => {
                window.request_redraw();
                event_loop.set_control_flow(ControlFlow::Poll);
            }
            Schedule::At(deadline) => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(deadline))
            }
            Schedule::Idle => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}
