//! Factory Method: a dialog renders whatever button its creator produces.
//!
//! The creation step is a `ButtonCreator` strategy injected into `Dialog`.
//! `ButtonCreator::create_button` defaults to no product; the Windows and Web
//! creators override it. The orchestration in `Dialog::render` is shared by
//! every creator.

mod application;
mod dialog;
mod web;
mod windows;

pub use application::DialogApplication;
pub use dialog::{create_dialog, Dialog};

use crate::output::ActionRecord;

// ---------------------------------------------------------------------------
// Product contract
// ---------------------------------------------------------------------------

/// A dialog button that can be clicked and rendered.
pub trait Button {
    fn render(&self) -> ActionRecord;
    fn on_click(&self) -> ActionRecord;
}

// ---------------------------------------------------------------------------
// Creator contract
// ---------------------------------------------------------------------------

/// Produces the button a `Dialog` operates on.
pub trait ButtonCreator {
    /// Returns the button for this creator's family.
    ///
    /// The default yields no button, which makes `Dialog::render` a no-op.
    fn create_button(&self) -> Option<Box<dyn Button>> {
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
