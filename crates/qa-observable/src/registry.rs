//! Action verb registry
//!
//! Maps bullet text to a canonical [`Action`] through an ordered set of
//! matchers. The first matcher (highest priority) that fires wins; text no
//! matcher recognizes resolves to [`Action::Verify`].

use qa_model::Action;

/// Recognizes one action family in lower-cased bullet text
///
/// Implement this trait to add verbs beyond the built-in families.
pub trait ActionMatcher: Send + Sync + 'static {
    /// Action this matcher resolves to
    fn action(&self) -> Action;

    /// Whether lower-cased `text` names this action
    fn matches(&self, text: &str) -> bool;

    /// Matcher priority (higher = tried first)
    fn priority(&self) -> i32 {
        0
    }
}

/// Verb-list matcher.
///
/// A verb fires wherever it occurs in the text, so `enter` also fires on
/// `centered`. Rules built with [`VerbRule::at_word_start`] only fire where
/// the verb starts a word.
#[derive(Debug, Clone)]
pub struct VerbRule {
    action: Action,
    verbs: Vec<String>,
    priority: i32,
    word_start: bool,
}

impl VerbRule {
    /// Create rule from verb phrases
    #[must_use]
    pub fn new<S: AsRef<str>>(action: Action, verbs: &[S], priority: i32) -> Self {
        Self {
            action,
            verbs: verbs
                .iter()
                .map(|v| v.as_ref().to_lowercase())
                .filter(|v| !v.is_empty())
                .collect(),
            priority,
            word_start: false,
        }
    }

    /// Only fire where a verb starts a word
    #[must_use]
    pub fn at_word_start(mut self) -> Self {
        self.word_start = true;
        self
    }

    /// Verb phrases of this rule
    #[must_use]
    pub fn verbs(&self) -> &[String] {
        &self.verbs
    }
}

impl ActionMatcher for VerbRule {
    fn action(&self) -> Action {
        self.action
    }

    fn matches(&self, text: &str) -> bool {
        if self.word_start {
            self.verbs.iter().any(|verb| starts_word(text, verb))
        } else {
            self.verbs.iter().any(|verb| text.contains(verb.as_str()))
        }
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

/// Whether `needle` occurs in `haystack` at a word start
fn starts_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(at, _)| {
        haystack[..at]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric() && c != '_')
    })
}

/// Ordered action matchers
pub struct ActionRegistry {
    matchers: Vec<Box<dyn ActionMatcher>>,
}

impl Default for ActionRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for rule in default_actions() {
            registry.register(rule);
        }
        registry
    }
}

impl ActionRegistry {
    /// Create empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Register a matcher; order is kept stable among equal priorities
    pub fn register<M>(&mut self, matcher: M)
    where
        M: ActionMatcher,
    {
        self.matchers.push(Box::new(matcher));
        self.matchers.sort_by_key(|m| std::cmp::Reverse(m.priority()));
    }

    /// Resolve lower-cased text to an action
    #[must_use]
    pub fn resolve(&self, text: &str) -> Action {
        self.matchers
            .iter()
            .find(|m| m.matches(text))
            .map_or(Action::Verify, |m| m.action())
    }

    /// Number of registered matchers
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether no matcher is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field(
                "actions",
                &self.matchers.iter().map(|m| m.action()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Built-in action families, highest priority first
#[must_use]
pub fn default_actions() -> Vec<VerbRule> {
    let families: [(Action, &[&str]); 19] = [
        (Action::Activate, &["activates", "activated", "activation"]),
        (Action::Enable, &["enable", "enables", "enabled"]),
        (Action::Disable, &["disable", "disables", "disabled"]),
        (Action::Rotate, &["rotate", "rotates", "rotated", "rotating", "rotation"]),
        (Action::Drag, &["drag", "dragging", "dragged", "by dragging"]),
        (Action::Enter, &["enter", "entering", "enters", "turn on", "start", "open into"]),
        (Action::Exit, &["exit", "exiting", "exits", "close", "leave", "restore", "restores"]),
        (Action::Toggle, &["toggle", "toggles", "switch", "alternate"]),
        (Action::Create, &["create", "creates", "add", "insert", "draw", "place"]),
        (Action::Remove, &["remove", "removes", "delete", "clear", "erase"]),
        (Action::Modify, &["change", "update", "edit", "adjust", "set"]),
        (Action::Select, &["select", "selects", "choose", "pick"]),
        (Action::Verify, &["verify", "verifies", "check", "confirm", "ensure"]),
        (Action::Display, &["display", "displays", "show", "shows", "render", "present"]),
        (Action::Hide, &["hide", "hides", "hidden", "conceal", "suppress"]),
        (Action::Resize, &["resize", "resizes", "scale", "fit", "fill"]),
        (Action::Move, &["move", "moves", "reposition", "relocate"]),
        (Action::Measure, &["measure", "measures", "calculate", "compute"]),
        (Action::Accessible, &["accessible", "available", "reachable"]),
    ];

    families
        .iter()
        .zip((1..=19).rev())
        .map(|((action, verbs), rank)| VerbRule::new(*action, *verbs, rank * 10))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_every_family() {
        let registry = ActionRegistry::default();
        assert_eq!(registry.len(), 19);
        assert!(!registry.is_empty());
    }

    #[test]
    fn earlier_family_wins() {
        let registry = ActionRegistry::default();
        // "rotate" outranks "drag"
        assert_eq!(
            registry.resolve("user can rotate the object by dragging the handle."),
            Action::Rotate
        );
        assert_eq!(registry.resolve("select view and enter the mode"), Action::Enter);
    }

    #[test]
    fn verbs_match_anywhere() {
        let registry = ActionRegistry::default();
        assert_eq!(registry.resolve("the canvas is centered."), Action::Enter);
        assert_eq!(registry.resolve("unselected shapes are dimmed."), Action::Select);
        assert_eq!(registry.resolve("settings are applied"), Action::Modify);
    }

    #[test]
    fn word_start_rule() {
        let mut registry = ActionRegistry::new();
        registry.register(VerbRule::new(Action::Enter, &["enter"], 20).at_word_start());
        registry.register(VerbRule::new(Action::Modify, &["set"], 10).at_word_start());
        assert_eq!(registry.resolve("the canvas is centered."), Action::Verify);
        assert_eq!(registry.resolve("the preset outfit"), Action::Verify);
        assert_eq!(registry.resolve("enter-key and settings"), Action::Enter);
        assert_eq!(registry.resolve("settings are applied"), Action::Modify);
    }

    #[test]
    fn empty_verbs_never_fire() {
        let mut registry = ActionRegistry::new();
        registry.register(VerbRule::new(Action::Measure, &[""], 10));
        assert_eq!(registry.resolve("anything"), Action::Verify);
    }

    #[test]
    fn unmatched_text_is_verify() {
        assert_eq!(ActionRegistry::default().resolve("lorem ipsum"), Action::Verify);
        assert_eq!(ActionRegistry::new().resolve("enter the mode"), Action::Verify);
    }

    #[test]
    fn custom_matcher_outranks_defaults() {
        let mut registry = ActionRegistry::default();
        registry.register(VerbRule::new(Action::Measure, &["annotate"], 1000));
        assert_eq!(registry.resolve("annotate and enter"), Action::Measure);
    }

    #[test]
    fn debug_lists_actions_in_order() {
        let debug = format!("{:?}", ActionRegistry::default());
        assert!(debug.starts_with("ActionRegistry { actions: [Activate, Enable"));
    }
}
