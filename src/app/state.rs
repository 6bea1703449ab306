//! Application state definitions
//!
//! Contains the screen model, the derived `AppMode` used for keybindings and
//! help, and the action dispatcher that turns key actions into engine calls.

use crate::catalog::{Catalog, Package, PackageId};
use crate::components::keybindings::KeyAction;
use crate::engine::{ConfigurationEngine, NavigationRequest};
use crate::error::Result;
use std::sync::Arc;
use strum::{Display, EnumIter};
use tracing::{debug, info};

/// Which screen is showing. Leaving the configurator drops its engine, so
/// every visit starts from a fresh selection.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Landing page with the package cards
    Home,
    /// Long-form page for one package
    Details { package: PackageId, scroll: u16 },
    /// Package + add-on configurator with its own engine
    Configurator {
        engine: ConfigurationEngine,
        cursor: usize,
    },
}

/// Input context for keybindings, derived from the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum AppMode {
    Home,
    #[strum(serialize = "Package Details")]
    Details,
    Configurator,
    #[strum(serialize = "Order Review")]
    Review,
}

/// One focusable row of the configurator, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfiguratorRow {
    Package(PackageId),
    Addon(crate::catalog::AddonId),
    ReviewButton,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    /// Current screen
    pub screen: Screen,
    /// Highlighted package card on the home screen
    pub home_selection: usize,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Status message for user feedback
    pub status_message: String,
    /// Set once the visitor asks to quit
    pub should_quit: bool,
}

impl AppState {
    /// Create the state and open the requested screen.
    pub fn new(catalog: Arc<Catalog>, start: NavigationRequest) -> Self {
        let mut state = Self {
            catalog,
            screen: Screen::Home,
            home_selection: 0,
            help_visible: false,
            status_message: "Welcome to Hotfixers".to_string(),
            should_quit: false,
        };
        state.navigate(start);
        state
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Current input mode
    pub fn mode(&self) -> AppMode {
        match &self.screen {
            Screen::Home => AppMode::Home,
            Screen::Details { .. } => AppMode::Details,
            Screen::Configurator { engine, .. } if engine.review().is_open() => AppMode::Review,
            Screen::Configurator { .. } => AppMode::Configurator,
        }
    }

    /// The live engine, when the configurator is showing
    pub fn engine(&self) -> Option<&ConfigurationEngine> {
        match &self.screen {
            Screen::Configurator { engine, .. } => Some(engine),
            _ => None,
        }
    }

    /// Cursor position in the configurator
    pub fn configurator_cursor(&self) -> Option<usize> {
        match &self.screen {
            Screen::Configurator { cursor, .. } => Some(*cursor),
            _ => None,
        }
    }

    /// Package shown on the details screen; unknown ids show the first package.
    pub fn details_package(&self) -> Option<&Package> {
        match &self.screen {
            Screen::Details { package, .. } => Some(
                self.catalog
                    .package(package.as_str())
                    .unwrap_or_else(|| self.catalog.first_package()),
            ),
            _ => None,
        }
    }

    /// Package under the home screen cursor
    pub fn highlighted_package(&self) -> &Package {
        self.catalog
            .list_packages()
            .get(self.home_selection)
            .unwrap_or_else(|| self.catalog.first_package())
    }

    /// Every focusable configurator row in display order
    pub fn configurator_rows(&self) -> Vec<ConfiguratorRow> {
        self.catalog
            .list_packages()
            .iter()
            .map(|p| ConfiguratorRow::Package(p.id.clone()))
            .chain(self.catalog.addons().map(|a| ConfiguratorRow::Addon(a.id.clone())))
            .chain(std::iter::once(ConfiguratorRow::ReviewButton))
            .collect()
    }

    /// Switch screens. Entering the configurator always builds a new engine.
    pub fn navigate(&mut self, request: NavigationRequest) {
        info!(?request, "navigating");
        self.help_visible = false;
        self.screen = match request {
            NavigationRequest::Home => Screen::Home,
            NavigationRequest::Details { package } => {
                if let Some(idx) = self
                    .catalog
                    .list_packages()
                    .iter()
                    .position(|p| p.id == package)
                {
                    self.home_selection = idx;
                }
                Screen::Details { package, scroll: 0 }
            }
            NavigationRequest::Configure { package } => {
                let engine = ConfigurationEngine::new(
                    Arc::clone(&self.catalog),
                    package.as_ref().map(PackageId::as_str),
                );
                // Start with the cursor on the preselected package card
                let cursor = self
                    .catalog
                    .list_packages()
                    .iter()
                    .position(|p| engine.is_package_selected(p.id.as_str()))
                    .unwrap_or(0);
                Screen::Configurator { engine, cursor }
            }
        };
        self.status_message = match &self.screen {
            Screen::Home => "Choose a package to get started".to_string(),
            Screen::Details { .. } => "Package details".to_string(),
            Screen::Configurator { .. } => "Build your package".to_string(),
        };
    }

    /// Apply one key action to the current screen.
    pub fn apply(&mut self, action: KeyAction) -> Result<()> {
        debug!(?action, mode = %self.mode(), "applying action");

        match action {
            KeyAction::Quit => {
                self.should_quit = true;
                return Ok(());
            }
            KeyAction::Help => {
                self.help_visible = !self.help_visible;
                return Ok(());
            }
            _ if self.help_visible => {
                // Any other key just dismisses help
                self.help_visible = false;
                return Ok(());
            }
            _ => {}
        }

        match self.mode() {
            AppMode::Home => self.apply_home(action),
            AppMode::Details => self.apply_details(action),
            AppMode::Configurator => self.apply_configurator(action),
            AppMode::Review => self.apply_review(action),
        }
    }

    fn apply_home(&mut self, action: KeyAction) -> Result<()> {
        let count = self.catalog.list_packages().len();
        match action {
            KeyAction::NavigateUp => {
                self.home_selection = self.home_selection.saturating_sub(1);
            }
            KeyAction::NavigateDown => {
                if self.home_selection + 1 < count {
                    self.home_selection += 1;
                }
            }
            KeyAction::Configure | KeyAction::Select => {
                let package = self.highlighted_package().id.clone();
                self.navigate(NavigationRequest::Configure {
                    package: Some(package),
                });
            }
            KeyAction::Details => {
                let package = self.highlighted_package().id.clone();
                self.navigate(NavigationRequest::Details { package });
            }
            _ => {}
        }
        Ok(())
    }

    fn apply_details(&mut self, action: KeyAction) -> Result<()> {
        let Screen::Details { package, scroll } = &mut self.screen else {
            return Ok(());
        };
        match action {
            KeyAction::NavigateUp => *scroll = scroll.saturating_sub(1),
            KeyAction::NavigateDown => *scroll = scroll.saturating_add(1),
            KeyAction::Configure | KeyAction::Select => {
                let package = package.clone();
                self.navigate(NavigationRequest::Configure {
                    package: Some(package),
                });
            }
            KeyAction::Back => self.navigate(NavigationRequest::Home),
            _ => {}
        }
        Ok(())
    }

    fn apply_configurator(&mut self, action: KeyAction) -> Result<()> {
        let rows = self.configurator_rows();
        let Screen::Configurator { engine, cursor } = &mut self.screen else {
            return Ok(());
        };

        match action {
            KeyAction::NavigateUp => *cursor = cursor.saturating_sub(1),
            KeyAction::NavigateDown => {
                if *cursor + 1 < rows.len() {
                    *cursor += 1;
                }
            }
            KeyAction::Select => match rows.get(*cursor) {
                Some(ConfiguratorRow::Package(id)) => {
                    engine.select_package(id.as_str())?;
                }
                Some(ConfiguratorRow::Addon(id)) => {
                    engine.toggle_addon(id.as_str())?;
                }
                Some(ConfiguratorRow::ReviewButton) => engine.open_review(),
                None => {}
            },
            KeyAction::Review => engine.open_review(),
            KeyAction::Back => {
                let request = engine.request_home();
                self.navigate(request);
            }
            _ => {}
        }
        Ok(())
    }

    fn apply_review(&mut self, action: KeyAction) -> Result<()> {
        let Screen::Configurator { engine, .. } = &mut self.screen else {
            return Ok(());
        };

        match action {
            KeyAction::Submit | KeyAction::Select => {
                if engine.review().is_submitted() {
                    engine.close_review();
                } else {
                    engine.submit_review()?;
                    self.status_message = "Order placed".to_string();
                }
            }
            KeyAction::Close | KeyAction::Back => engine.close_review(),
            _ => {}
        }
        Ok(())
    }
}
