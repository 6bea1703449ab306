//! Reusable UI components: keybinding registry, nav bar, help overlay

pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;
