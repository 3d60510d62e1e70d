//! Client for the factory-method dialogs.

use super::Dialog;
use crate::output::ActionRecord;

/// Owns one dialog for its whole lifetime and forwards clicks to it.
pub struct DialogApplication {
    dialog: Dialog,
}

impl DialogApplication {
    pub fn new(dialog: Dialog) -> Self {
        Self { dialog }
    }

    pub fn on_click(&self) -> Vec<ActionRecord> {
        self.dialog.render()
    }
}
