//! Client for the abstract-factory widgets.

use super::{Button, Checkbox, GuiFactory};
use crate::family::Family;
use crate::output::ActionRecord;

// ---------------------------------------------------------------------------
// Public struct
// ---------------------------------------------------------------------------

/// Owns one factory and the widgets it produced at construction time.
///
/// Works only through the `GuiFactory`, `Button` and `Checkbox` contracts, so
/// any factory can be passed in without changing this type.
pub struct Application {
    factory: Box<dyn GuiFactory>,
    button: Box<dyn Button>,
    checkbox: Box<dyn Checkbox>,
}

impl Application {
    pub fn new(factory: Box<dyn GuiFactory>) -> Self {
        let button = factory.create_button();
        let checkbox = factory.create_checkbox();
        log::info!("factory: widgets created by {} factory", factory.family());
        Self {
            factory,
            button,
            checkbox,
        }
    }

    /// Family of the factory this application was built with.
    pub fn family(&self) -> Family {
        self.factory.family()
    }

    pub fn send_event(&self) -> ActionRecord {
        self.button.send_event()
    }

    pub fn render_image(&self) -> ActionRecord {
        self.checkbox.render_image()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
