//! Commit detection for the single-line terminal input.

/// Enter arrives as a line break, or as an `insertText` without payload on
/// some IME/mobile keyboards.
pub fn is_commit(input_type: &str, data: Option<&str>) -> bool {
    input_type == "insertLineBreak" || (input_type == "insertText" && data.is_none())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputDecision {
    /// Dispatch this line and clear the buffer.
    Commit(String),
    /// Keep editing with this buffer value.
    Update(String),
}

/// Decide what an input event does to the buffer.
///
/// Committing a buffer of one character or less dispatches nothing and the
/// buffer keeps the new value.
pub fn on_input(buffer: &str, input_type: &str, data: Option<&str>, value: &str) -> InputDecision {
    if is_commit(input_type, data) && buffer.chars().count() > 1 {
        InputDecision::Commit(buffer.to_string())
    } else {
        InputDecision::Update(value.replace(['\r', '\n'], ""))
    }
}
