//! Localized strings - single source of truth for every UI and terminal text.
//!
//! Two languages are supported. The active one lives in [`LanguageContext`]
//! and is persisted in localStorage.

pub mod output;

use leptos::prelude::*;

use crate::shared::storage;

const LANGUAGE_STORAGE_KEY: &str = "i18nextLng";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }

    /// Accepts browser-style tags such as `pt-BR` or `en-US`.
    pub fn from_code(code: &str) -> Option<Self> {
        let lower = code.to_ascii_lowercase();
        if lower.starts_with("pt") {
            Some(Language::Pt)
        } else if lower.starts_with("en") {
            Some(Language::En)
        } else {
            None
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::Pt => Language::En,
            Language::En => Language::Pt,
        }
    }
}

/// Returns the text for `key` in `lang`. Fallback: empty string.
pub fn t(lang: Language, key: &str) -> &'static str {
    use Language::*;
    match (lang, key) {
        // ── Terminal ──────────────────────────────────────────────────────
        (Pt, "terminal.info.theme") => "Tema alterado com sucesso!",
        (En, "terminal.info.theme") => "Theme changed successfully!",
        (Pt, "terminal.info.language") => "Idioma alterado com sucesso!",
        (En, "terminal.info.language") => "Language changed successfully!",
        (Pt, "terminal.info.error") => "Comando não reconhecido. Tente novamente.",
        (En, "terminal.info.error") => "Command not recognized. Please try again.",
        (Pt, "terminal.info.feedback") => "Avaliação",
        (En, "terminal.info.feedback") => "Rating",
        (Pt, "terminal.info.version") => "versão",
        (En, "terminal.info.version") => "version",
        (Pt, "terminal.info.allRightsReserved") => "Todos os direitos reservados.",
        (En, "terminal.info.allRightsReserved") => "All rights reserved.",
        (Pt, "terminal.info.placeholder") => "Digite um comando...",
        (En, "terminal.info.placeholder") => "Type a command...",
        (Pt, "terminal.tabs.problems") => "Problemas",
        (En, "terminal.tabs.problems") => "Problems",
        (Pt, "terminal.tabs.output") => "Saída",
        (En, "terminal.tabs.output") => "Output",
        (Pt, "terminal.tabs.debug") => "Console de depuração",
        (En, "terminal.tabs.debug") => "Debug console",
        (_, "terminal.tabs.terminal") => "Terminal",
        (Pt, "terminal.problems") => "Não foi detectado nenhum problema no workspace.",
        (En, "terminal.problems") => "No problems were detected in the workspace.",

        // ── Star labels ───────────────────────────────────────────────────
        (Pt, "terminal.rating.0.5") => "Inútil",
        (En, "terminal.rating.0.5") => "Useless",
        (Pt, "terminal.rating.1") => "Inútil+",
        (En, "terminal.rating.1") => "Useless+",
        (Pt, "terminal.rating.1.5") => "Ruim",
        (En, "terminal.rating.1.5") => "Poor",
        (Pt, "terminal.rating.2") => "Ruim+",
        (En, "terminal.rating.2") => "Poor+",
        (Pt, "terminal.rating.2.5") => "Ok",
        (En, "terminal.rating.2.5") => "Ok",
        (Pt, "terminal.rating.3") => "Ok+",
        (En, "terminal.rating.3") => "Ok+",
        (Pt, "terminal.rating.3.5") => "Bom",
        (En, "terminal.rating.3.5") => "Good",
        (Pt, "terminal.rating.4") => "Bom+",
        (En, "terminal.rating.4") => "Good+",
        (Pt, "terminal.rating.4.5") => "Excelente",
        (En, "terminal.rating.4.5") => "Excellent",
        (Pt, "terminal.rating.5") => "Excelente+",
        (En, "terminal.rating.5") => "Excellent+",

        // ── Rating modal ──────────────────────────────────────────────────
        (Pt, "rating.evaluate") => "Avaliar",
        (En, "rating.evaluate") => "Evaluate",
        (Pt, "rating.name") => "Nome",
        (En, "rating.name") => "Name",
        (Pt, "rating.comment") => "Comentário",
        (En, "rating.comment") => "Comment",
        (Pt, "rating.submit") => "Enviar",
        (En, "rating.submit") => "Submit",
        (Pt, "rating.close") => "Fechar avaliação",
        (En, "rating.close") => "Close rating modal",
        (Pt, "rating.error") => "Preencha todos os campos antes de enviar.",
        (En, "rating.error") => "Fill in all fields before submitting.",
        (Pt, "rating.errors.usernameMin") => "O nome deve ter pelo menos 2 caracteres.",
        (En, "rating.errors.usernameMin") => "Name must be at least 2 characters.",
        (Pt, "rating.errors.commentMin") => "O comentário deve ter pelo menos 10 caracteres.",
        (En, "rating.errors.commentMin") => "Comment must be at least 10 characters.",
        (Pt, "rating.errors.starsMax") => "A avaliação deve ser no máximo 5 estrelas.",
        (En, "rating.errors.starsMax") => "Rating must not exceed 5 stars.",
        (Pt, "rating.errors.tooManyRequests") => "Muitas tentativas. Aguarde um pouco.",
        (En, "rating.errors.tooManyRequests") => "Too many attempts. Please wait a moment.",
        (Pt, "rating.errors.serverError") => "Erro no servidor. Tente mais tarde.",
        (En, "rating.errors.serverError") => "Server error. Please try again later.",
        (Pt, "rating.errors.networkError") => "Erro de conexão. Verifique sua internet.",
        (En, "rating.errors.networkError") => "Connection error. Check your internet.",
        (Pt, "rating.errors.unknownError") => "Ocorreu um erro inesperado.",
        (En, "rating.errors.unknownError") => "An unexpected error occurred.",

        // ── Explorer / tabs ───────────────────────────────────────────────
        (Pt, "sidebar.explorer") => "EXPLORADOR",
        (En, "sidebar.explorer") => "EXPLORER",
        (Pt, "pages.home") => "Início",
        (En, "pages.home") => "Home",
        (Pt, "explorer.newFile") => "Novo arquivo",
        (En, "explorer.newFile") => "New file",
        (Pt, "explorer.newFilePlaceholder") => "nome-do-arquivo.md",
        (En, "explorer.newFilePlaceholder") => "file-name.md",
        (Pt, "contextMenu.open") => "Abrir",
        (En, "contextMenu.open") => "Open",
        (Pt, "contextMenu.delete") => "Excluir",
        (En, "contextMenu.delete") => "Delete",
        (Pt, "contextMenu.openOnGithub") => "Abrir no GitHub",
        (En, "contextMenu.openOnGithub") => "Open on GitHub",
        (Pt, "tabContextMenu.close") => "Fechar",
        (En, "tabContextMenu.close") => "Close",
        (Pt, "tabContextMenu.closeOthers") => "Fechar outros",
        (En, "tabContextMenu.closeOthers") => "Close Others",
        (Pt, "tabContextMenu.closeToRight") => "Fechar à direita",
        (En, "tabContextMenu.closeToRight") => "Close to the Right",
        (Pt, "tabContextMenu.closeToLeft") => "Fechar à esquerda",
        (En, "tabContextMenu.closeToLeft") => "Close to the Left",
        (Pt, "tabContextMenu.closeAll") => "Fechar todos",
        (En, "tabContextMenu.closeAll") => "Close All",

        // ── Shortcuts ─────────────────────────────────────────────────────
        (Pt, "shortcuts.title") => "Atalhos de teclado",
        (En, "shortcuts.title") => "Keyboard shortcuts",
        (Pt, "shortcuts.terminal") => "Abrir/fechar terminal",
        (En, "shortcuts.terminal") => "Toggle terminal",
        (Pt, "shortcuts.theme") => "Alternar tema",
        (En, "shortcuts.theme") => "Toggle theme",
        (Pt, "shortcuts.language") => "Alterar idioma",
        (En, "shortcuts.language") => "Change language",
        (Pt, "shortcuts.sidebar") => "Abrir/fechar explorador",
        (En, "shortcuts.sidebar") => "Toggle explorer",
        (Pt, "shortcuts.home") => "Ir para o início",
        (En, "shortcuts.home") => "Go home",
        (Pt, "shortcuts.save") => "Salvar arquivo",
        (En, "shortcuts.save") => "Save file",

        // ── Home / footer ─────────────────────────────────────────────────
        (Pt, "header.title") => "Olá, eu sou o Gabriel",
        (En, "header.title") => "Hi, I'm Gabriel",
        (Pt, "header.subtitle") => "Desenvolvedor de software apaixonado por tecnologia",
        (En, "header.subtitle") => "Software developer passionate about technology",
        (Pt, "contact.github.title") => "Encontre-me no Github",
        (En, "contact.github.title") => "Find me on Github",
        (Pt, "contact.linkedin.title") => "Encontre-me no LinkedIn",
        (En, "contact.linkedin.title") => "Find me on LinkedIn",
        (Pt, "contact.email.title") => "Contate-me por e-mail",
        (En, "contact.email.title") => "Contact me via email",
        (Pt, "footer.saved") => "Salvo",
        (En, "footer.saved") => "Saved",
        (Pt, "footer.unsaved") => "Não salvo",
        (En, "footer.unsaved") => "Unsaved",

        // ── Fallback ──────────────────────────────────────────────────────
        _ => "",
    }
}

/// Language context type.
#[derive(Clone, Copy)]
pub struct LanguageContext {
    pub language: RwSignal<Language>,
}

impl LanguageContext {
    pub fn new() -> Self {
        Self {
            language: RwSignal::new(load_language()),
        }
    }

    pub fn get_language(&self) -> Language {
        self.language.get_untracked()
    }

    /// Switches between the two languages and persists the choice.
    pub fn change_language(&self) {
        let next = self.language.get_untracked().toggled();
        self.language.set(next);
        if let Err(e) = storage::set_item(LANGUAGE_STORAGE_KEY, next.code()) {
            log::warn!("{}", e);
        }
        log::debug!("language changed to {}", next.code());
    }

    /// Reactive lookup for views.
    pub fn t(&self, key: &str) -> &'static str {
        t(self.language.get(), key)
    }
}

fn load_language() -> Language {
    if let Some(lang) = storage::get_item(LANGUAGE_STORAGE_KEY).and_then(|c| Language::from_code(&c)) {
        return lang;
    }
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .and_then(|c| Language::from_code(&c))
        .unwrap_or_default()
}

pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().expect("LanguageContext not found")
}
