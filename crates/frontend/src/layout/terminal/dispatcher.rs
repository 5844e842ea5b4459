//! Runs one committed terminal line against the services.

use super::grammar::{parse, Action};
use super::services::TerminalServices;
use super::transcript::{Outcome, TranscriptEntry};
use crate::domain::review::messages::review_line;
use crate::shared::config::config;
use crate::shared::i18n::t;
use crate::shared::preferences::Preferences;

/// Every line yields exactly one transcript entry, except `clear`.
/// Service failures are resolved here and never reach the caller.
pub async fn dispatch<S, P>(line: &str, services: &S, prefs: &P) -> Outcome
where
    S: TerminalServices + ?Sized,
    P: Preferences + ?Sized,
{
    let action = parse(line);
    log::debug!("terminal: {:?} -> {:?}", line, action);

    let entry = match action {
        Action::Clear => return Outcome::Clear,
        Action::FetchReviews => match services.fetch_reviews().await {
            Ok(reviews) => {
                let lang = prefs.get_language();
                let lines = reviews.iter().map(|r| review_line(lang, r)).collect();
                TranscriptEntry::new(line, lines)
            }
            Err(e) => {
                log::warn!("Failed to fetch reviews: {}", e);
                TranscriptEntry::placeholder(line)
            }
        },
        Action::OpenRating => {
            services.open_rating();
            TranscriptEntry::placeholder(line)
        }
        Action::ToggleTheme => {
            prefs.toggle_theme();
            info(line, t(prefs.get_language(), "terminal.info.theme"))
        }
        Action::ToggleLanguage => {
            prefs.change_language();
            info(line, t(prefs.get_language(), "terminal.info.language"))
        }
        Action::Navigate(path) => {
            services.navigate(&path);
            TranscriptEntry::placeholder(line)
        }
        Action::Forward(command) => match services.resolve(&command).await {
            Ok(response) => TranscriptEntry::new(line, response),
            Err(e) => {
                log::warn!(
                    "Command resolver failed for {:?} (status {:?}): {}",
                    command,
                    e.status(),
                    e
                );
                info(line, t(prefs.get_language(), "terminal.info.error"))
                    .with_color(&config().terminal.error_color)
            }
        },
    };

    Outcome::Append(entry)
}

fn info(line: &str, text: &str) -> TranscriptEntry {
    TranscriptEntry::new(line, vec![text.to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::terminal::transcript::Transcript;
    use crate::shared::error::ServiceError;
    use crate::shared::i18n::Language;
    use crate::shared::theme::Theme;
    use async_trait::async_trait;
    use contracts::domain::review::Review;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeServices {
        reviews: Option<Vec<Review>>,
        resolved: Option<Vec<String>>,
        navigated: RefCell<Vec<String>>,
        resolver_calls: RefCell<Vec<String>>,
        rating_opened: Cell<bool>,
    }

    #[async_trait(?Send)]
    impl TerminalServices for FakeServices {
        async fn fetch_reviews(&self) -> Result<Vec<Review>, ServiceError> {
            self.reviews
                .clone()
                .ok_or_else(|| ServiceError::Network("offline".into()))
        }

        async fn resolve(&self, command: &str) -> Result<Vec<String>, ServiceError> {
            self.resolver_calls.borrow_mut().push(command.to_string());
            self.resolved.clone().ok_or(ServiceError::Http { status: 404 })
        }

        fn open_rating(&self) {
            self.rating_opened.set(true);
        }

        fn navigate(&self, path: &str) {
            self.navigated.borrow_mut().push(path.to_string());
        }
    }

    struct FakePreferences {
        theme: Cell<Theme>,
        language: Cell<Language>,
    }

    impl FakePreferences {
        fn new() -> Self {
            Self {
                theme: Cell::new(Theme::Dark),
                language: Cell::new(Language::En),
            }
        }
    }

    impl Preferences for FakePreferences {
        fn get_theme(&self) -> Theme {
            self.theme.get()
        }

        fn toggle_theme(&self) {
            self.theme.set(self.theme.get().toggled());
        }

        fn get_language(&self) -> Language {
            self.language.get()
        }

        fn change_language(&self) {
            self.language.set(self.language.get().toggled());
        }
    }

    fn review(username: &str, stars: f64) -> Review {
        Review {
            id: String::new(),
            username: username.into(),
            comment: "Very nice site".into(),
            stars,
            created_at: None,
            updated_at: None,
        }
    }

    fn appended(outcome: Outcome) -> TranscriptEntry {
        match outcome {
            Outcome::Append(entry) => entry,
            Outcome::Clear => panic!("expected an appended entry"),
        }
    }

    #[tokio::test]
    async fn clear_empties_transcript() {
        let services = FakeServices::default();
        let prefs = FakePreferences::new();
        let mut transcript = Transcript::default();
        for line in ["evaluate", "route skills", "clear"] {
            transcript.apply(dispatch(line, &services, &prefs).await);
        }
        assert!(transcript.is_empty());
    }

    #[tokio::test]
    async fn route_navigates_with_one_placeholder_entry() {
        let services = FakeServices::default();
        let prefs = FakePreferences::new();
        let mut transcript = Transcript::default();
        transcript.apply(dispatch("route about-me", &services, &prefs).await);

        assert_eq!(*services.navigated.borrow(), ["/about-me"]);
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.entries()[0].response, [""]);
        assert!(services.resolver_calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn evaluate_opens_rating() {
        let services = FakeServices::default();
        let prefs = FakePreferences::new();
        let entry = appended(dispatch("avaliar", &services, &prefs).await);
        assert!(services.rating_opened.get());
        assert_eq!(entry.command, "avaliar");
        assert_eq!(entry.response, [""]);
    }

    #[tokio::test]
    async fn toggles_report_one_info_line() {
        let services = FakeServices::default();
        let prefs = FakePreferences::new();

        let entry = appended(dispatch("changetheme", &services, &prefs).await);
        assert_eq!(prefs.get_theme(), Theme::Light);
        assert_eq!(entry.response, ["Theme changed successfully!"]);

        let entry = appended(dispatch("changelanguage", &services, &prefs).await);
        assert_eq!(prefs.get_language(), Language::Pt);
        assert_eq!(entry.response, ["Idioma alterado com sucesso!"]);
        assert_eq!(entry.color, None);
    }

    #[tokio::test]
    async fn reviews_yield_one_line_each() {
        let services = FakeServices {
            reviews: Some(vec![review("ana", 5.0), review("bia", 2.5)]),
            ..Default::default()
        };
        let prefs = FakePreferences::new();
        let entry = appended(dispatch("reviews", &services, &prefs).await);

        assert_eq!(entry.response.len(), 2);
        assert!(entry.response[0].contains("[ana] Very nice site Rating: 5 - Excellent+"));
        assert!(entry.response[1].contains("[bia]"));
    }

    #[tokio::test]
    async fn review_failure_is_silent() {
        let services = FakeServices::default();
        let prefs = FakePreferences::new();
        let entry = appended(dispatch("avaliacoes", &services, &prefs).await);
        assert_eq!(entry.response, [""]);
        assert_eq!(entry.color, None);
    }

    #[tokio::test]
    async fn resolver_failure_is_one_colored_line() {
        let services = FakeServices::default();
        let prefs = FakePreferences::new();
        let entry = appended(dispatch("git status", &services, &prefs).await);

        assert_eq!(*services.resolver_calls.borrow(), ["git status"]);
        assert_eq!(entry.response, ["Command not recognized. Please try again."]);
        assert_eq!(entry.color.as_deref(), Some("#ed4337"));
    }

    #[tokio::test]
    async fn resolver_lines_are_used_verbatim() {
        let services = FakeServices {
            resolved: Some(vec!["line 1".into(), "line 2".into()]),
            ..Default::default()
        };
        let prefs = FakePreferences::new();
        let entry = appended(dispatch("help", &services, &prefs).await);
        assert_eq!(entry.response, ["line 1", "line 2"]);
        assert_eq!(entry.color, None);
    }
}
