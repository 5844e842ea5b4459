//! Static per-language table of the portfolio pages. Indices and routes are
//! shared between languages, only the file names differ.

use super::model::{Page, PageIndex};
use crate::shared::i18n::Language;

/// Page selected after a file is deleted.
pub const FALLBACK_INDEX: PageIndex = 0;

const ROUTES: [&str; 6] = [
    "about-me",
    "skills",
    "projects",
    "experience",
    "accomplishments",
    "certificates",
];

const NAMES_EN: [&str; 6] = [
    "about-me.html",
    "skills.html",
    "projects.html",
    "experience.html",
    "accomplishments.html",
    "certificates.html",
];

const NAMES_PT: [&str; 6] = [
    "sobre-mim.html",
    "habilidades.html",
    "projetos.html",
    "experiencia.html",
    "conquistas.html",
    "certificados.html",
];

pub fn builtin_pages(lang: Language) -> Vec<Page> {
    let names = match lang {
        Language::Pt => &NAMES_PT,
        Language::En => &NAMES_EN,
    };
    names
        .iter()
        .zip(ROUTES.iter())
        .enumerate()
        .map(|(i, (name, route))| Page::builtin(i as PageIndex, name, route))
        .collect()
}

/// Built-in pages first, then stored user pages whose index and route are
/// still free.
pub fn merge_pages(builtins: Vec<Page>, user_pages: Vec<Page>) -> Vec<Page> {
    let mut pages = builtins;
    for page in user_pages {
        let taken = pages
            .iter()
            .any(|p| p.index == page.index || p.route == page.route);
        if taken {
            log::warn!("Skipping stored page '{}': index or route already used", page.name);
            continue;
        }
        pages.push(page);
    }
    pages
}
