//! Draft titles: `<id>: <feature> / <area> / <scenario>`

use crate::text::capitalize;
use qa_model::{Action, Observable, TITLE_SEPARATOR};

/// Join the four title segments
#[must_use]
pub fn format_title(id: &str, feature: &str, area: &str, scenario: &str) -> String {
    format!("{id}: {feature}{TITLE_SEPARATOR}{area}{TITLE_SEPARATOR}{scenario}")
}

/// Builds draft titles from observables
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleBuilder;

impl TitleBuilder {
    /// Create title builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Full title for a bullet draft
    #[must_use]
    pub fn build(&self, id: &str, feature: &str, entry_point: &str, observable: &Observable) -> String {
        format_title(id, feature, entry_point, &self.scenario_phrase(observable))
    }

    /// Scenario segment of the title
    #[must_use]
    pub fn scenario_phrase(&self, observable: &Observable) -> String {
        match phrase_template(observable.action) {
            Some(template) => template.replace("{target}", &observable.target),
            None => format!("{} {}", capitalize(observable.action.as_str()), observable.target),
        }
    }
}

fn phrase_template(action: Action) -> Option<&'static str> {
    let template = match action {
        Action::Enter => "Enter {target}",
        Action::Exit => "Exit {target}",
        Action::Create => "Create {target}",
        Action::Enable => "Enable {target}",
        Action::Disable => "Disable {target}",
        Action::Toggle => "Toggle {target}",
        Action::Select => "Select {target}",
        Action::Move => "Move {target}",
        Action::Rotate => "Rotate {target}",
        Action::Drag => "Drag {target}",
        Action::Resize => "Resize {target}",
        Action::Measure => "Measure {target}",
        Action::Verify => "Verify {target}",
        Action::Display => "Display {target}",
        Action::Hide => "Hide {target}",
        Action::Modify => "Modify {target}",
        Action::Activate => "Activate tool for {target}",
        Action::Accessible => "Feature availability",
        Action::Remove => return None,
    };
    Some(template)
}
