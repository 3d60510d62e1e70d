//! Windows widget family.

use super::{Button, Checkbox, GuiFactory};
use crate::family::Family;
use crate::output::{Action, ActionRecord};

pub struct WinFactory;

impl GuiFactory for WinFactory {
    fn family(&self) -> Family {
        Family::Windows
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WinButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WinCheckbox)
    }
}

pub struct WinButton;

impl Button for WinButton {
    fn send_event(&self) -> ActionRecord {
        ActionRecord::new(Family::Windows, Action::SendEvent)
    }
}

pub struct WinCheckbox;

impl Checkbox for WinCheckbox {
    fn render_image(&self) -> ActionRecord {
        ActionRecord::new(Family::Windows, Action::RenderImage)
    }
}
