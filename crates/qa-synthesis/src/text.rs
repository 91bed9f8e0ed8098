//! Phrase helpers shared by the builders

/// Upper-case the first character
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalize every whitespace-separated word
pub(crate) fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize and terminate with a period
pub(crate) fn sentence(text: &str) -> String {
    let text = capitalize(text.trim());
    if text.ends_with('.') {
        text
    } else {
        format!("{text}.")
    }
}

/// Indefinite article for a noun
pub(crate) fn article(noun: &str) -> &'static str {
    match noun.chars().next() {
        Some(c) if "aeiouAEIOU".contains(c) => "an",
        _ => "a",
    }
}
