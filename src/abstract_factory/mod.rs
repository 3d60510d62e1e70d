//! Abstract Factory: one factory per family, each creating a whole set of
//! compatible widgets.
//!
//! Defines the `Button`, `Checkbox` and `GuiFactory` contracts.
//! Family-specific implementations live in child modules; callers select one
//! with `create_gui_factory` and never see the concrete type.

mod application;
mod mac;
mod windows;

pub use application::Application;

use mac::MacFactory;
use windows::WinFactory;

use crate::family::{FactoryError, Family};
use crate::output::ActionRecord;

// ---------------------------------------------------------------------------
// Product contracts
// ---------------------------------------------------------------------------

/// A button that can fire an event.
pub trait Button {
    fn send_event(&self) -> ActionRecord;
}

/// A checkbox that can render its image.
pub trait Checkbox {
    fn render_image(&self) -> ActionRecord;
}

// ---------------------------------------------------------------------------
// Creator contract
// ---------------------------------------------------------------------------

/// Creates a family of widgets.
///
/// Every product returned by one factory belongs to `family()`. Each call
/// constructs a fresh, stateless instance.
pub trait GuiFactory {
    fn family(&self) -> Family;
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

// ---------------------------------------------------------------------------
// Factory selection
// ---------------------------------------------------------------------------

/// Returns the widget factory for `family`.
///
/// Only Windows and Mac ship an abstract-factory variant.
pub fn create_gui_factory(family: Family) -> Result<Box<dyn GuiFactory>, FactoryError> {
    match family {
        Family::Windows => Ok(Box::new(WinFactory)),
        Family::Mac => Ok(Box::new(MacFactory)),
        Family::Web => Err(FactoryError::Unsupported {
            pattern: "abstract factory",
            family,
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
