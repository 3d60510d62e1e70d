//! Observable output of product capability operations.
//!
//! Products never print. Each operation returns an `ActionRecord`, and the
//! binary decides how to render it (`OutputStyle`).

use std::fmt;

use serde::Deserialize;

use crate::family::Family;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// The action a product operation performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Abstract-factory button: `send_event`.
    SendEvent,
    /// Abstract-factory checkbox: `render_image`.
    RenderImage,
    /// Factory-method button: `render`.
    Render,
    /// Factory-method button: `on_click`.
    Click,
}

impl Action {
    /// Short action name used by `OutputStyle::Compact`.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::SendEvent => "send-event",
            Action::RenderImage => "render-image",
            Action::Render => "render",
            Action::Click => "click",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of output: which family did what.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRecord {
    pub family: Family,
    pub action: Action,
}

impl ActionRecord {
    pub fn new(family: Family, action: Action) -> Self {
        let record = Self { family, action };
        log::debug!("output: {} {}", family, action);
        record
    }

    /// Renders the record as a single line in the given style.
    pub fn render(&self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Compact => format!("{} {}", self.family, self.action),
            OutputStyle::Message => match self.action {
                Action::SendEvent => format!("Event sent by {} application", self.family),
                Action::RenderImage => {
                    format!("Image was rendered by {} application", self.family)
                }
                Action::Render => format!("Button rendered by {} Application", self.family),
                Action::Click => format!("Button clicked by {} Application", self.family),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering style
// ---------------------------------------------------------------------------

/// How records are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Full sentences, e.g. `Event sent by Windows application`.
    #[default]
    Message,
    /// `<family> <action>`, e.g. `Windows send-event`.
    Compact,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_style_uses_full_sentences() {
        let cases = [
            (Action::SendEvent, "Event sent by Mac application"),
            (Action::RenderImage, "Image was rendered by Mac application"),
            (Action::Render, "Button rendered by Mac Application"),
            (Action::Click, "Button clicked by Mac Application"),
        ];
        for (action, expected) in cases {
            let record = ActionRecord::new(Family::Mac, action);
            assert_eq!(record.render(OutputStyle::Message), expected);
        }
    }

    #[test]
    fn compact_style_is_family_then_action() {
        let record = ActionRecord::new(Family::Web, Action::Click);
        assert_eq!(record.render(OutputStyle::Compact), "Web click");
    }

    #[test]
    fn default_style_is_message() {
        assert_eq!(OutputStyle::default(), OutputStyle::Message);
    }
}
