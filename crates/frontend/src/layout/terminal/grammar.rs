//! Terminal command grammar.
//!
//! Lookup order: exact command (case-insensitive) → `route`/`rota` with an
//! argument → forward the whole line to the remote resolver.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchReviews,
    OpenRating,
    ToggleTheme,
    ToggleLanguage,
    Clear,
    Navigate(String),
    Forward(String),
}

const COMMANDS: &[(&str, Action)] = &[
    ("reviews", Action::FetchReviews),
    ("avaliacoes", Action::FetchReviews),
    ("evaluate", Action::OpenRating),
    ("avaliar", Action::OpenRating),
    ("changetheme", Action::ToggleTheme),
    ("mudartema", Action::ToggleTheme),
    ("changelanguage", Action::ToggleLanguage),
    ("mudaridioma", Action::ToggleLanguage),
    ("clear", Action::Clear),
    ("limpar", Action::Clear),
];

const ROUTE_VERBS: &[&str] = &["route", "rota"];

pub fn parse(input: &str) -> Action {
    let line = input.trim();
    let lowered = line.to_lowercase();

    if let Some((_, action)) = COMMANDS.iter().find(|(name, _)| *name == lowered) {
        return action.clone();
    }

    if let Some((verb, arg)) = line.split_once(char::is_whitespace) {
        let arg = arg.trim();
        if ROUTE_VERBS.contains(&verb.to_lowercase().as_str()) && !arg.is_empty() {
            return Action::Navigate(format!("/{}", arg));
        }
    }

    Action::Forward(input.to_string())
}
