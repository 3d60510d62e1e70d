//! Windows dialog button.

use super::{Button, ButtonCreator};
use crate::family::Family;
use crate::output::{Action, ActionRecord};

pub struct WindowsButton;

impl Button for WindowsButton {
    fn render(&self) -> ActionRecord {
        ActionRecord::new(Family::Windows, Action::Render)
    }

    fn on_click(&self) -> ActionRecord {
        ActionRecord::new(Family::Windows, Action::Click)
    }
}

pub struct WindowsCreator;

impl ButtonCreator for WindowsCreator {
    fn create_button(&self) -> Option<Box<dyn Button>> {
        Some(Box::new(WindowsButton))
    }
}
