//! Mac widget family.
//!
//! Mirrors the Windows family one-for-one; only the tag differs.

use super::{Button, Checkbox, GuiFactory};
use crate::family::Family;
use crate::output::{Action, ActionRecord};

pub struct MacFactory;

impl GuiFactory for MacFactory {
    fn family(&self) -> Family {
        Family::Mac
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

pub struct MacButton;

impl Button for MacButton {
    fn send_event(&self) -> ActionRecord {
        ActionRecord::new(Family::Mac, Action::SendEvent)
    }
}

pub struct MacCheckbox;

impl Checkbox for MacCheckbox {
    fn render_image(&self) -> ActionRecord {
        ActionRecord::new(Family::Mac, Action::RenderImage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mac_products_are_tagged_mac() {
        assert_eq!(MacButton.send_event().family, Family::Mac);
        assert_eq!(MacCheckbox.render_image().family, Family::Mac);
    }
}
