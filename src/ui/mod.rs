//! Thin presentation adapter over the core operations.
//!
//! The core stays agnostic to the toolkit: everything graphical is either
//! the [`Dialogs`] capability (file pickers, modal messages) or the
//! [`DeskApp`] egui widget tree, and both are swappable in tests.

mod app;
mod dialogs;

pub use app::DeskApp;
pub use dialogs::{Dialogs, RfdDialogs};
