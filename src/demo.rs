//! The demonstration run: one client per configured family, each invoked in
//! the reference order.
//!
//! Abstract-factory clients render their image before sending the event.
//! Factory-method clients forward a single click, which the dialog turns into
//! click-then-render.

use crate::abstract_factory::{create_gui_factory, Application};
use crate::config::Config;
use crate::factory_method::{create_dialog, DialogApplication};
use crate::family::FactoryError;
use crate::output::ActionRecord;

/// Runs both walkthroughs and returns every record in emission order.
pub fn run(config: &Config) -> Result<Vec<ActionRecord>, FactoryError> {
    let mut records = Vec::new();

    for &family in &config.abstract_factory.families {
        let app = Application::new(create_gui_factory(family)?);
        log::info!("demo: abstract factory client for {}", app.family());
        records.push(app.render_image());
        records.push(app.send_event());
    }

    for &family in &config.factory_method.families {
        let app = DialogApplication::new(create_dialog(family));
        log::info!("demo: factory method client for {family}");
        records.extend(app.on_click());
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
