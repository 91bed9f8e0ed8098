//! Target resolution
//!
//! Ordered rules; the first rule producing a non-empty phrase wins.

use once_cell::sync::Lazy;
use qa_model::{Action, StoryType};
use regex::Regex;

static USER_CAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"user can (?:\w+\s+)?(?:the\s+)?([a-z][a-z\s]+?)(?:\s+by|\s+to|\s+and|\.|,|$)")
        .unwrap()
});

static TRAILING_CONNECTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+(?:by|to|and|for|with|using)$").unwrap());

static ROTATE_THE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\brotate[sd]?\s+the\s+([a-z][a-z\s]+?)(?:\s+by|\s+to|\.|,|$)").unwrap()
});

static DRAG_THE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bdrag(?:s|ged)?\s+the\s+([a-z][a-z\s]+?)(?:\s+by|\s+to|\.|,|$)").unwrap()
});

static MOVE_THE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bmove[sd]?\s+the\s+([a-z][a-z\s]+?)(?:\s+by|\s+to|\.|,|$)").unwrap()
});

static NAMED_MODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+[Mm]ode\b").unwrap());

static THE_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bthe\s+([a-z]+(?:\s+[a-z]+){0,2})").unwrap());

const FULLSCREEN_MODE: &str = "fullscreen mode";

/// Resolve what `action` acts upon.
///
/// `text` is the original bullet, `lower` its lower-cased form.
pub(crate) fn resolve(text: &str, lower: &str, action: Action, story_type: StoryType) -> String {
    if let Some(target) = user_can_target(lower) {
        return target;
    }

    if let Some(target) = manipulation_target(lower, action) {
        return target;
    }

    if matches!(action, Action::Enter | Action::Exit)
        && (lower.contains("fullscreen") || lower.contains("full screen"))
    {
        return FULLSCREEN_MODE.to_string();
    }

    if let Some(target) = story_target(text, lower, story_type) {
        return target;
    }

    if let Some(phrase) = THE_PHRASE
        .captures(lower)
        .map(|c| c[1].trim().to_string())
        .filter(|p| p.len() > 3)
    {
        return phrase;
    }

    story_type.snake_name().replace('_', " ")
}

fn user_can_target(lower: &str) -> Option<String> {
    let caps = USER_CAN.captures(lower)?;
    let target = TRAILING_CONNECTOR.replace(caps[1].trim(), "").trim().to_string();
    (4..50).contains(&target.len()).then_some(target)
}

fn manipulation_target(lower: &str, action: Action) -> Option<String> {
    let pattern: &Regex = match action {
        Action::Rotate => &ROTATE_THE,
        Action::Drag => &DRAG_THE,
        Action::Move => &MOVE_THE,
        _ => return None,
    };
    pattern
        .captures(lower)
        .map(|c| c[1].trim().to_string())
        .filter(|t| !t.is_empty())
}

fn story_target(text: &str, lower: &str, story_type: StoryType) -> Option<String> {
    match story_type {
        StoryType::ModeLayout => {
            if lower.contains("full screen mode") || lower.contains(FULLSCREEN_MODE) {
                Some(FULLSCREEN_MODE.to_string())
            } else if lower.contains("mode") {
                NAMED_MODE
                    .captures(text)
                    .map(|c| format!("{} mode", c[1].to_lowercase()))
            } else {
                None
            }
        }
        StoryType::Measurement => ["diameter", "radius", "dimension"]
            .into_iter()
            .find(|m| lower.contains(m))
            .map(|m| format!("{m} measurement")),
        StoryType::Tool => Some(
            if lower.contains("handle") {
                "rotation handle"
            } else if lower.contains("angle") {
                "rotation angle"
            } else {
                "selected object"
            }
            .to_string(),
        ),
        _ => None,
    }
}
