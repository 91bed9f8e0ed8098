//! Evidence extraction
//!
//! Builds a [`FactBase`] from raw requirement text. Every family of facts
//! is read by a fixed pattern; a pattern that does not match leaves its
//! collection empty.

use once_cell::sync::Lazy;
use qa_model::{
    ConfigError, ConfigResult, Control, ControlType, EntryPoint, FactBase, PlatformRequirement,
    RuleTables, DESCRIPTION_REF,
};
use regex::Regex;

static LOCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Location:[ \t]*([^→\n]+?)(?:[ \t]*→[ \t]*([^\n]+?))?[ \t]*(?:\n|$)").unwrap()
});

static MENU_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*Menu[ \t]*→[ \t]*([A-Z][a-zA-Z ]*[a-zA-Z])").unwrap());

static CONNECTOR_SURFACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i:\b(?:from|via|in))[ \t]+(?:(?i:the)[ \t]+)?((?:[A-Z][A-Za-z]*[ \t]+){1,3}(?i:menu|panel|toolbar|dialog))\b",
    )
    .unwrap()
});

static GENERIC_SURFACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b((?:[A-Z][A-Za-z]*[ \t]+){1,3}(?:Menu|Panel|Toolbar|Dialog|Screen|Window))\b")
        .unwrap()
});

static TOGGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b((?:[A-Z][A-Za-z]*[ \t]+){1,3})toggle\b").unwrap());

static HOTKEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(ESC|Esc|(?:Ctrl|Cmd|Alt)(?:\+\w+)+|F\d{1,2})\b").unwrap()
});

static NAMED_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(Enter|Tab|Delete)[ \t]+key\b").unwrap());

static WINDOWS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bwindows\b|\bwin11\b").unwrap());

static OUT_OF_SCOPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:out of scope|not included|excluded)[:\s]+([^.]+)").unwrap());

static MAXIMUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bmaximum\s+(?:of\s+)?(\w+)").unwrap());

static MINIMUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bminimum\s+(?:of\s+)?(\w+)").unwrap());

static WRAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bwrap").unwrap());

static OBJECT_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(ellipse|circle|rectangle|square|triangle|arrow|line|polygon|text)s?\b").unwrap()
});

static ACTION_VERB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(create|add|remove|delete|enable|disable|toggle|activate|deactivate|show|hide|move|rotate|scale|resize|flip|mirror|undo|redo|select|deselect)(?:s|es|d|ed|ing)?\b",
    )
    .unwrap()
});

const SURFACE_SUFFIXES: [&str; 4] = ["Menu", "Panel", "Toolbar", "Dialog"];

/// Out-of-scope keyword families recorded when an explicit scope phrase is present
const SCOPE_FAMILIES: [(&str, &str); 4] = [
    ("template", "templates"),
    ("tooltip", "tooltips"),
    ("hotkey", "hotkey hints"),
    ("landscape", "landscape mode"),
];

const NEGATIVE_SIGNALS: [(&str, &[&str]); 4] = [
    (
        "no_selection",
        &["no selection", "without selection", "no object selected"],
    ),
    ("empty_canvas", &["empty canvas", "no objects"]),
    (
        "wrong_object_type",
        &["non-ellipse", "wrong object", "incompatible object"],
    ),
    ("invalid_input", &["invalid", "incorrect"]),
];

const STORY_PREFIXES: [&str; 6] = ["As an", "As a", "I want", "I need", "Users can", "User can"];

/// Whitelisted container with its compiled `Token → Option` pattern
#[derive(Debug, Clone)]
struct ContainerPattern {
    token: String,
    pattern: Regex,
}

/// Reads structured facts out of requirement text
#[derive(Debug, Clone)]
pub struct EvidenceExtractor {
    containers: Vec<ContainerPattern>,
    assistive_tools: Vec<String>,
}

impl EvidenceExtractor {
    /// Compile container patterns from the rule tables
    ///
    /// # Errors
    /// Returns [`ConfigError::Pattern`] when a container token cannot be
    /// compiled into a pattern.
    pub fn new(tables: &RuleTables) -> ConfigResult<Self> {
        let containers = tables
            .container_whitelist
            .iter()
            .map(|token| {
                let source = format!(
                    r"(?i:\b{})[ \t]*(?:→|->|>)[ \t]*([A-Z][\w-]*(?:[ \t]+[A-Z][\w-]*)*)",
                    regex::escape(token)
                );
                Regex::new(&source)
                    .map(|pattern| ContainerPattern {
                        token: token.clone(),
                        pattern,
                    })
                    .map_err(|e| ConfigError::pattern("container_whitelist", e.to_string()))
            })
            .collect::<ConfigResult<Vec<_>>>()?;

        Ok(Self {
            containers,
            assistive_tools: tables.assistive_tools.clone(),
        })
    }

    /// Build the fact base for one requirement document.
    ///
    /// Bullets are identified `AC1..` in order; note lines become `QA-1..`.
    #[must_use]
    pub fn build<S: AsRef<str>>(
        &self,
        title: &str,
        description: &str,
        bullets: &[S],
        notes: Option<&str>,
    ) -> FactBase {
        let mut collector = Collector {
            extractor: self,
            facts: FactBase::new(feature_name(title)),
            claimed: vec![false; self.containers.len()],
        };

        collector.description_marker(description);

        for (idx, bullet) in bullets.iter().enumerate() {
            collector.bullet(&format!("AC{}", idx + 1), bullet.as_ref());
        }

        if let Some(notes) = notes {
            for (idx, line) in split_notes(notes).iter().enumerate() {
                collector.bullet(&format!("QA-{}", idx + 1), line);
            }
        }

        collector.drop_assistive_tools();
        let facts = collector.facts;

        tracing::info!(
            "Extracted fact base for '{}': {} entry points, {} surfaces, {} controls, {} platforms",
            facts.feature_name,
            facts.entry_points.len(),
            facts.surfaces.len(),
            facts.controls.len(),
            facts.platform_requirements.len()
        );
        facts
    }
}

/// Mutable state for one extraction pass
struct Collector<'a> {
    extractor: &'a EvidenceExtractor,
    facts: FactBase,
    /// Whitelist tokens that already produced an entry point
    claimed: Vec<bool>,
}

impl Collector<'_> {
    fn description_marker(&mut self, description: &str) {
        if let Some(caps) = LOCATION.captures(description) {
            let raw = caps.get(1).map_or("", |m| m.as_str());
            let surface = raw.split(|c: char| c == ',' || c == ';').next().unwrap_or_default().trim();
            if !surface.is_empty() {
                let path = match caps.get(2).map(|m| m.as_str().trim()) {
                    Some(option) if !option.is_empty() => format!("{surface} → {option}"),
                    _ => surface.to_string(),
                };
                tracing::debug!("Location marker names primary surface '{}'", surface);
                self.push_entry_point(EntryPoint::new(path, surface, DESCRIPTION_REF));
                return;
            }
        }

        if let Some(caps) = MENU_MARKER.captures(description) {
            let name = caps[1].trim();
            let surface = format!("{name} Menu");
            tracing::debug!("Menu marker names primary surface '{}'", surface);
            self.push_entry_point(EntryPoint::new(
                format!("Menu → {name}"),
                surface,
                DESCRIPTION_REF,
            ));
        }
    }

    fn push_entry_point(&mut self, entry_point: EntryPoint) {
        self.facts.surfaces.insert(entry_point.surface.clone());
        self.facts.entry_points.push(entry_point);
    }

    fn bullet(&mut self, id: &str, text: &str) {
        self.facts
            .evidence_bullets
            .insert(id.to_string(), text.to_string());
        let lower = text.to_lowercase();

        self.entry_points(id, text);
        self.surfaces(text);
        self.controls(id, text, &lower);
        self.platforms(id, &lower);
        self.out_of_scope(&lower);
        self.constraints(text, &lower);
        self.object_types(&lower);
        self.actions(&lower);
        self.negative_scenarios(&lower);

        tracing::debug!(
            "{}: {} entry points, {} surfaces after extraction",
            id,
            self.facts.entry_points.len(),
            self.facts.surfaces.len()
        );
    }

    fn entry_points(&mut self, id: &str, text: &str) {
        let extractor = self.extractor;
        for (idx, container) in extractor.containers.iter().enumerate() {
            if self.claimed[idx] {
                continue;
            }
            let Some(caps) = container.pattern.captures(text) else {
                continue;
            };
            let option = caps[1].trim();
            self.claimed[idx] = true;
            self.push_entry_point(EntryPoint::new(
                format!("{} → {option}", container.token),
                format!("{} Menu", container.token),
                id,
            ));
        }
    }

    fn surfaces(&mut self, text: &str) {
        for caps in CONNECTOR_SURFACE.captures_iter(text) {
            let surface = normalize_suffix(&caps[1]);
            self.facts.surfaces.insert(surface);
        }
        for caps in GENERIC_SURFACE.captures_iter(text) {
            if let Some(surface) = strip_article(&caps[1]) {
                self.facts.surfaces.insert(surface);
            }
        }
    }

    fn controls(&mut self, id: &str, text: &str, lower: &str) {
        let mut push = |name: String, control_type: ControlType| {
            self.facts.controls.push(Control {
                name,
                control_type,
                evidence_ref: id.to_string(),
            });
        };

        for caps in TOGGLE.captures_iter(text) {
            push(format!("{} toggle", caps[1].trim()), ControlType::Toggle);
        }
        if lower.contains("create") {
            push("Create".to_string(), ControlType::Button);
        }
        if lower.contains("close") {
            push("Close".to_string(), ControlType::Button);
        }
        for caps in HOTKEY.captures_iter(text) {
            push(caps[1].to_string(), ControlType::Hotkey);
        }
        for caps in NAMED_KEY.captures_iter(text) {
            push(caps[1].to_string(), ControlType::Hotkey);
        }
    }

    fn platforms(&mut self, id: &str, lower: &str) {
        if WINDOWS.is_match(lower) {
            let tool = lower
                .contains("accessibility insights")
                .then(|| "Accessibility Insights for Windows".to_string());
            self.add_platform("Windows 11", "mouse/keyboard", tool, id);
        }
        if lower.contains("ipad") {
            let tool = lower.contains("voiceover").then(|| "VoiceOver".to_string());
            self.add_platform("iPad", "touch", tool, id);
        }
        if lower.contains("android") && lower.contains("tablet") {
            let tool = (lower.contains("accessibility scanner") || lower.contains("talkback"))
                .then(|| "Accessibility Scanner".to_string());
            self.add_platform("Android Tablet", "touch", tool, id);
        }
    }

    fn add_platform(&mut self, platform: &str, model: &str, tool: Option<String>, id: &str) {
        if self.facts.has_platform(platform) {
            return;
        }
        self.facts.platform_requirements.push(PlatformRequirement {
            platform: platform.to_string(),
            interaction_model: model.to_string(),
            accessibility_tool: tool,
            evidence_ref: id.to_string(),
        });
    }

    fn out_of_scope(&mut self, lower: &str) {
        let explicit = ["out of scope", "not included", "excluded"]
            .iter()
            .any(|phrase| lower.contains(phrase));
        if !explicit {
            return;
        }

        for caps in OUT_OF_SCOPE.captures_iter(lower) {
            let item = caps[1].trim();
            if !item.is_empty() {
                self.facts.out_of_scope.insert(item.to_string());
            }
        }
        for (keyword, item) in SCOPE_FAMILIES {
            if lower.contains(keyword) {
                self.facts.out_of_scope.insert(item.to_string());
            }
        }
    }

    fn constraints(&mut self, text: &str, lower: &str) {
        let constraints = &mut self.facts.constraints;
        if lower.contains("cannot be") && lower.contains("reposition") {
            constraints.push("Fixed placement - cannot be repositioned".to_string());
        }
        if text.contains("360") || WRAP.is_match(lower) {
            constraints.push("Angle wraps at 360°".to_string());
        }
        for caps in MAXIMUM.captures_iter(lower) {
            constraints.push(format!("Maximum: {}", &caps[1]));
        }
        for caps in MINIMUM.captures_iter(lower) {
            constraints.push(format!("Minimum: {}", &caps[1]));
        }
    }

    fn object_types(&mut self, lower: &str) {
        for caps in OBJECT_TYPE.captures_iter(lower) {
            self.facts.object_types.insert(caps[1].to_string());
        }
    }

    fn actions(&mut self, lower: &str) {
        for caps in ACTION_VERB.captures_iter(lower) {
            let verb = &caps[1];
            if !self.facts.actions.iter().any(|a| a == verb) {
                self.facts.actions.push(verb.to_string());
            }
        }
    }

    fn negative_scenarios(&mut self, lower: &str) {
        for (scenario, signals) in NEGATIVE_SIGNALS {
            if signals.iter().any(|s| lower.contains(s)) {
                self.facts.negative_scenarios.insert(scenario.to_string());
            }
        }
    }

    /// Assistive-technology tools are never navigable surfaces
    fn drop_assistive_tools(&mut self) {
        let tools = &self.extractor.assistive_tools;
        let is_tool = |surface: &str| tools.iter().any(|t| surface.contains(t.as_str()));

        let before = self.facts.surfaces.len();
        self.facts.surfaces.retain(|s| !is_tool(s));
        self.facts.entry_points.retain(|e| !is_tool(&e.surface));
        if self.facts.surfaces.len() < before {
            tracing::debug!(
                "Dropped {} assistive tool names from surfaces",
                before - self.facts.surfaces.len()
            );
        }
    }
}

/// Capitalize a trailing container word: `Tools menu` → `Tools Menu`
fn normalize_suffix(raw: &str) -> String {
    let mut words: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    if let Some(last) = words.last_mut() {
        let lower = last.to_lowercase();
        if let Some(suffix) = SURFACE_SUFFIXES
            .iter()
            .find(|s| s.to_lowercase() == lower)
        {
            *last = (*suffix).to_string();
        }
    }
    words.join(" ")
}

/// Drop a leading article; `None` when only the container word remains
fn strip_article(raw: &str) -> Option<String> {
    let words: Vec<&str> = raw.split_whitespace().collect();
    let words = match words.split_first() {
        Some((first, rest)) if matches!(*first, "The" | "A" | "An") => rest,
        _ => &words[..],
    };
    (words.len() >= 2).then(|| words.join(" "))
}

/// Feature name from a story title, with user-story phrasing removed.
///
/// `As a designer, I want full screen mode` → `I want full screen mode`
/// keeps the clause after the first comma unless it is the `so that` tail.
#[must_use]
pub fn feature_name(title: &str) -> String {
    let title = title.trim();
    let lower = title.to_lowercase();
    let Some(prefix) = STORY_PREFIXES
        .iter()
        .find(|p| lower.starts_with(&p.to_lowercase()))
    else {
        return title.to_string();
    };

    let strip = |s: &str| s.get(prefix.len()..).unwrap_or_default().trim().to_string();
    let mut parts = title.splitn(3, ',');
    let first = parts.next().unwrap_or_default();
    match parts.next() {
        Some(second) if !second.to_lowercase().contains("so that") => second.trim().to_string(),
        Some(_) => strip(first),
        None => strip(title),
    }
}

fn is_bullet_marker(c: char) -> bool {
    matches!(c, '-' | '•' | '*')
}

/// Split supplementary notes into bullet lines.
///
/// Lines starting with `-`, `•` or `*` are bullets; any other line longer
/// than ten characters is kept whole.
#[must_use]
pub fn split_notes(notes: &str) -> Vec<String> {
    notes
        .lines()
        .map(str::trim)
        .filter_map(|line| {
            if let Some(rest) = line.strip_prefix(is_bullet_marker) {
                let rest = rest.trim_start_matches(is_bullet_marker).trim();
                (!rest.is_empty()).then(|| rest.to_string())
            } else if line.chars().count() > 10 {
                Some(line.to_string())
            } else {
                None
            }
        })
        .collect()
}
