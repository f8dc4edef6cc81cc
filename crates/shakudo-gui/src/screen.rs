pub mod controls;
pub mod preview;
pub mod reference;

use iced::Task;

use shakudo_core::model::Breakpoint;

use crate::app;

/// Which page is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Live mock page preview at one breakpoint, with the controls panel.
    Preview(Breakpoint),
    /// Token reference table.
    Reference,
}

impl Default for Page {
    fn default() -> Self {
        Self::Preview(Breakpoint::Desktop)
    }
}

/// Actions that a screen can request from the app router.
///
/// Screens return these from `update()` instead of directly mutating
/// shared state; the app interprets them in one place.
pub enum Action {
    /// No side-effect.
    None,
    /// Update the status bar message.
    SetStatus(String),
    /// Run an async Iced task that eventually produces an app::Message.
    RunTask(Task<app::Message>),
}
