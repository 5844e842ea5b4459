use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Stable page identifier. Built-in pages use small indices, user pages a
/// millisecond timestamp.
pub type PageIndex = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub index: PageIndex,
    pub name: String,
    pub route: String,
    /// Present only for user-authored pages; built-in pages are fetched as static assets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_saved: Option<bool>,
}

impl Page {
    pub fn builtin(index: PageIndex, name: &str, route: &str) -> Self {
        Self {
            index,
            name: name.to_string(),
            route: route.to_string(),
            content: None,
            is_saved: None,
        }
    }

    pub fn is_user_page(&self) -> bool {
        self.content.is_some()
    }

    /// Edited since the last explicit save.
    pub fn is_dirty(&self) -> bool {
        self.is_saved == Some(false)
    }

    pub fn path(&self) -> String {
        format!("/{}", self.route)
    }

    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }
}

/// Tab/tree label: `about-me.html` is shown as `about-me.md`.
pub fn display_name(name: &str) -> String {
    match name.strip_suffix(".html") {
        Some(stem) => format!("{}.md", stem),
        None => name.to_string(),
    }
}

/// Strips a trailing `.ext` (no `/` or `.` inside the extension).
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if pos + 1 < name.len() && !name[pos + 1..].contains('/') => &name[..pos],
        _ => name,
    }
}

fn has_extension(name: &str) -> bool {
    strip_extension(name).len() != name.len()
}

/// URL route for a file name.
///
/// Drops the extension, decomposes to NFD and removes the combining marks,
/// turns whitespace runs into a single `-`, strips everything outside
/// `[a-zA-Z0-9-]` and lowercases.
pub fn normalize_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in strip_extension(name).nfd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if c.is_ascii_alphanumeric() || c == '-' {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

/// Stored name of a user file: lowercased, whitespace runs become `-`, `.md`
/// appended when there is no extension.
pub fn format_file_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let hyphenated = trimmed
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if has_extension(&hyphenated) {
        hyphenated
    } else {
        format!("{}.md", hyphenated)
    }
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
