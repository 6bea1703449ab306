//! Application module
//!
//! Contains the main application loop and key dispatch.
//!
//! # Module Structure
//! - `state` - Screen model, AppMode, and the action dispatcher
//! - Main module - App struct and event loop

mod state;

pub use state::{AppMode, AppState, ConfiguratorRow, Screen};

use crate::catalog::Catalog;
use crate::components::keybindings::KeybindingContext;
use crate::engine::NavigationRequest;
use crate::error::{HotfixersError, Result};
use crate::ui::UiRenderer;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for dispatch and navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a new application instance starting at `start`
    pub fn new(catalog: Arc<Catalog>, start: NavigationRequest) -> Self {
        info!("Creating new App instance");
        Self {
            state: AppState::new(catalog, start),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main loop until the visitor quits.
    ///
    /// Every intent is handled synchronously before the next frame is drawn.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        while !self.state.should_quit {
            self.draw(terminal)?;

            match event::read()? {
                Event::Key(key_event) => {
                    self.handle_key_event(key_event);
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }

        info!("Main loop finished");
        Ok(())
    }

    /// Render one frame of the current state
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal
            .draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.keybinding_context)
            })
            .map_err(|e| HotfixersError::terminal(format!("Failed to draw frame: {}", e)))?;
        Ok(())
    }

    /// Handle one key event. Returns true when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return self.state.should_quit;
        }

        let mode = self.state.mode();
        let Some(action) =
            self.keybinding_context
                .action_for(&mode, key_event.code, key_event.modifiers)
        else {
            debug!(?key_event, %mode, "unbound key");
            // Any key dismisses help, bound or not
            self.state.help_visible = false;
            return self.state.should_quit;
        };

        if let Err(e) = self.state.apply(action) {
            // Ids come from the catalog itself, so this is a wiring bug
            warn!(error = %e, ?action, "action rejected");
            self.state.status_message = e.to_string();
        }

        self.state.should_quit
    }
}
