//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! application mode. The same table drives key dispatch, the nav bar, and the
//! help overlay, so the hints can never drift from what a key actually does.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    /// Activate the row under the cursor
    Select,
    /// Open the details screen for the highlighted package
    Details,
    /// Enter the configurator
    Configure,
    /// Open the review overlay
    Review,
    /// Place the mock order (or acknowledge a placed one)
    Submit,
    /// Dismiss the review overlay
    Close,
    Back,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    fn matches(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        let key = match key {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        // Shift is implied by the character itself (e.g. '?')
        self.key == key && self.modifiers == modifiers - KeyModifiers::SHIFT
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        self.mode_bindings.insert(
            AppMode::Home,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous package"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next package"),
                Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Previous package"),
                Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Next package"),
                Keybinding::new(KeyCode::Enter, KeyAction::Configure, "Enter", "Configure"),
                Keybinding::new(KeyCode::Char('d'), KeyAction::Details, "D", "View details"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Details,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Scroll up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Scroll down"),
                Keybinding::new(KeyCode::Enter, KeyAction::Configure, "Enter", "Configure now"),
                Keybinding::new(KeyCode::Char('c'), KeyAction::Configure, "C", "Configure now"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back to home"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back to home"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Configurator,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous option"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next option"),
                Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Previous option"),
                Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Next option"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Select / toggle"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Select, "Space", "Select / toggle"),
                Keybinding::new(KeyCode::Char('r'), KeyAction::Review, "R", "Review order"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back to home"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back to home"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Review,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Submit, "Enter", "Place order"),
                Keybinding::new(KeyCode::Esc, KeyAction::Close, "Esc", "Close review"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Close, "B", "Close review"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key press to an action in the given mode
    pub fn action_for(
        &self,
        mode: &AppMode,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|binding| binding.matches(key, modifiers))
            .map(|binding| binding.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = match mode {
            AppMode::Home => vec![
                KeyAction::NavigateUp,
                KeyAction::Configure,
                KeyAction::Details,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Details => vec![
                KeyAction::NavigateUp,
                KeyAction::Configure,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Configurator => vec![
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::Review,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Review => vec![KeyAction::Submit, KeyAction::Close, KeyAction::Quit],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            if action == KeyAction::NavigateUp {
                // Up/Down are shown as one combined hint
                items.push(NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: "Navigate".to_string(),
                });
                continue;
            }
            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                items.push(NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                });
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let sections = [
            ("Navigation", &[KeyAction::NavigateUp, KeyAction::NavigateDown][..]),
            (
                "Actions",
                &[
                    KeyAction::Select,
                    KeyAction::Configure,
                    KeyAction::Details,
                    KeyAction::Review,
                    KeyAction::Submit,
                    KeyAction::Close,
                ][..],
            ),
            ("General", &[KeyAction::Back, KeyAction::Help, KeyAction::Quit][..]),
        ];

        sections
            .iter()
            .filter_map(|(title, actions)| {
                let items: Vec<(String, String)> = self
                    .get_bindings(mode)
                    .into_iter()
                    .filter(|b| actions.contains(&b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_mode_has_bindings() {
        let ctx = KeybindingContext::new();
        for mode in AppMode::iter() {
            assert!(!ctx.get_nav_items(&mode).is_empty(), "{mode} has no nav items");
            assert!(!ctx.get_help_content(&mode).is_empty(), "{mode} has no help");
        }
    }

    #[test]
    fn test_enter_depends_on_mode() {
        let ctx = KeybindingContext::new();
        let none = KeyModifiers::NONE;
        assert_eq!(
            ctx.action_for(&AppMode::Home, KeyCode::Enter, none),
            Some(KeyAction::Configure)
        );
        assert_eq!(
            ctx.action_for(&AppMode::Configurator, KeyCode::Enter, none),
            Some(KeyAction::Select)
        );
        assert_eq!(
            ctx.action_for(&AppMode::Review, KeyCode::Enter, none),
            Some(KeyAction::Submit)
        );
    }

    #[test]
    fn test_shifted_characters_resolve() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.action_for(&AppMode::Home, KeyCode::Char('?'), KeyModifiers::SHIFT),
            Some(KeyAction::Help)
        );
        assert_eq!(
            ctx.action_for(&AppMode::Configurator, KeyCode::Char('R'), KeyModifiers::SHIFT),
            Some(KeyAction::Review)
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctx = KeybindingContext::new();
        for mode in AppMode::iter() {
            assert_eq!(
                ctx.action_for(&mode, KeyCode::Char('c'), KeyModifiers::CONTROL),
                Some(KeyAction::Quit)
            );
        }
    }

    #[test]
    fn test_plain_c_is_not_quit() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.action_for(&AppMode::Details, KeyCode::Char('c'), KeyModifiers::NONE),
            Some(KeyAction::Configure)
        );
        assert_eq!(
            ctx.action_for(&AppMode::Home, KeyCode::Char('c'), KeyModifiers::NONE),
            None
        );
    }
}
