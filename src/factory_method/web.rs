//! Web dialog button.

use super::{Button, ButtonCreator};
use crate::family::Family;
use crate::output::{Action, ActionRecord};

pub struct WebButton;

impl Button for WebButton {
    fn render(&self) -> ActionRecord {
        ActionRecord::new(Family::Web, Action::Render)
    }

    fn on_click(&self) -> ActionRecord {
        ActionRecord::new(Family::Web, Action::Click)
    }
}

pub struct WebCreator;

impl ButtonCreator for WebCreator {
    fn create_button(&self) -> Option<Box<dyn Button>> {
        Some(Box::new(WebButton))
    }
}
