//! Dialog orchestration and creator selection.

use super::web::WebCreator;
use super::windows::WindowsCreator;
use super::ButtonCreator;
use crate::family::Family;
use crate::output::ActionRecord;

// ---------------------------------------------------------------------------
// Base creator
// ---------------------------------------------------------------------------

/// Creator that keeps the default `create_button`, so it never has a button.
pub struct BaseCreator;

impl ButtonCreator for BaseCreator {}

// ---------------------------------------------------------------------------
// Dialog
// ---------------------------------------------------------------------------

/// Renders the button produced by its injected creator.
pub struct Dialog {
    creator: Box<dyn ButtonCreator>,
}

impl Dialog {
    pub fn new(creator: Box<dyn ButtonCreator>) -> Self {
        Self { creator }
    }

    /// Creates a button and records its click, then its render.
    ///
    /// Returns an empty list when the creator produced no button.
    pub fn render(&self) -> Vec<ActionRecord> {
        let Some(button) = self.creator.create_button() else {
            log::debug!("dialog: creator returned no button, nothing to render");
            return Vec::new();
        };
        vec![button.on_click(), button.render()]
    }
}

// ---------------------------------------------------------------------------
// Creator selection
// ---------------------------------------------------------------------------

/// Returns a dialog whose creator matches `family`.
///
/// Families without a dialog button (Mac) get `BaseCreator`.
pub fn create_dialog(family: Family) -> Dialog {
    let creator: Box<dyn ButtonCreator> = match family {
        Family::Windows => Box::new(WindowsCreator),
        Family::Web => Box::new(WebCreator),
        Family::Mac => {
            log::debug!("dialog: no {family} button, using base creator");
            Box::new(BaseCreator)
        }
    };
    Dialog::new(creator)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
