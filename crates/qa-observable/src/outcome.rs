//! Outcome derivation
//!
//! Outcome rules accumulate in a fixed order; per-action defaults apply
//! only when no rule fired. The result is never empty.

use once_cell::sync::Lazy;
use qa_model::Action;
use regex::Regex;

static STATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][A-Za-z0-9 \t\-(),/]+?)[ \t]+(is|are|remains?)[ \t]+([a-z]+)").unwrap()
});

static SHOWS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:shows|displays|presents)\s+(?:the\s+)?([a-z\s]+?)(?:\.|,|$)").unwrap()
});

static PROVIDES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bprovides?\s+([a-z\s]+?)(?:\s+showing|\s+for|\.|,|$)").unwrap()
});

static HIDES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bhides?\s+(?:the\s+)?([^.]+)").unwrap());

static LIST_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r",|\s+and\s+").unwrap());

static SHOULD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b((?:[a-z]+[ \t]+){0,2}[a-z]+)[ \t]+should[ \t]+([a-z][^,.]*)").unwrap()
});

static WHEN_STATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"when\s+([a-z][a-z\s]*?)\s+(?:is|are)\s+([a-z]+)").unwrap()
});

/// Inputs for outcome derivation
pub(crate) struct OutcomeContext<'a> {
    pub(crate) text: &'a str,
    pub(crate) lower: &'a str,
    pub(crate) action: Action,
    pub(crate) target: &'a str,
    pub(crate) plural_nouns: &'a [String],
}

/// Ordered, deduplicated outcomes for one bullet
pub(crate) fn derive(ctx: &OutcomeContext<'_>) -> Vec<String> {
    let mut outcomes = Outcomes::default();

    for caps in STATE.captures_iter(ctx.text) {
        outcomes.push(format!("{} {} {}", caps[1].trim(), &caps[2], &caps[3]));
    }

    if let Some(item) = SHOWS
        .captures(ctx.text)
        .map(|c| c[1].trim().to_string())
        .filter(|i| !i.is_empty() && i.len() < 50)
    {
        outcomes.push(format!("{item} is displayed"));
    }

    if let Some(item) = PROVIDES
        .captures(ctx.lower)
        .map(|c| c[1].trim().to_string())
        .filter(|i| !i.is_empty())
    {
        outcomes.push(format!("{item} is provided"));
    }

    if let Some(caps) = HIDES.captures(ctx.lower) {
        for item in LIST_SEPARATOR
            .split(&caps[1])
            .map(str::trim)
            .filter(|i| !i.is_empty() && i.len() < 50)
        {
            let verb = if is_plural(item, ctx.plural_nouns) { "are" } else { "is" };
            outcomes.push(format!("{item} {verb} hidden"));
        }
    }

    for caps in SHOULD.captures_iter(ctx.lower) {
        let subject = caps[1].trim();
        let description = caps[2].trim();
        match description.strip_prefix("be ") {
            Some(state) => outcomes.push(format!("{subject} is {}", state.trim())),
            None => outcomes.push(format!("{subject} {description}")),
        }
    }

    if ["measurement", "diameter", "radius"]
        .iter()
        .any(|m| ctx.target.contains(m))
    {
        if has_word(ctx.lower, "line") {
            outcomes.push(format!("{} line is visible", ctx.target));
        }
        if has_word(ctx.lower, "label") {
            outcomes.push(format!("{} label is visible", ctx.target));
        }
    }

    if ctx.action == Action::Activate && outcomes.is_empty() {
        outcomes.push("tool is activated".to_string());
        if let Some(caps) = WHEN_STATE.captures(ctx.lower) {
            outcomes.push(format!("{} is {}", caps[1].trim(), &caps[2]));
        }
    }

    if outcomes.is_empty() {
        for outcome in defaults(ctx.action, ctx.target) {
            outcomes.push(outcome);
        }
    }

    if outcomes.is_empty() {
        outcomes.push(format!("{} completes successfully", ctx.action));
    }

    outcomes.0
}

/// Outcomes implied by the action alone
fn defaults(action: Action, target: &str) -> Vec<String> {
    let single = |suffix: &str| vec![format!("{target} {suffix}")];
    match action {
        Action::Enter => single("is active"),
        Action::Exit => vec![
            format!("{target} is exited"),
            "previous state is restored".to_string(),
        ],
        Action::Create => single("is created"),
        Action::Enable => single("is enabled"),
        Action::Disable => single("is disabled"),
        Action::Rotate => single("is rotated"),
        Action::Drag => single("is moved"),
        Action::Resize => single("resizes correctly"),
        Action::Accessible => single("is accessible"),
        Action::Display => single("is displayed"),
        _ => Vec::new(),
    }
}

/// Whether any plural noun appears as a word in `item`
pub(crate) fn is_plural(item: &str, plural_nouns: &[String]) -> bool {
    let lower = item.to_lowercase();
    plural_nouns.iter().any(|noun| has_word(&lower, noun))
}

fn has_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|w| w == word)
}

/// Insertion-ordered outcome list without exact duplicates
#[derive(Default)]
struct Outcomes(Vec<String>);

impl Outcomes {
    fn push(&mut self, outcome: String) {
        if !self.0.contains(&outcome) {
            self.0.push(outcome);
        }
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
