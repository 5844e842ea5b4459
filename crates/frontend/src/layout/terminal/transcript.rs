//! Append-only log of terminal commands and their responses.

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub command: String,
    pub response: Vec<String>,
    pub color: Option<String>,
}

impl TranscriptEntry {
    pub fn new(command: &str, response: Vec<String>) -> Self {
        Self {
            command: command.to_string(),
            response,
            color: None,
        }
    }

    /// Entry with the single blank response line used by commands that
    /// have nothing to print.
    pub fn placeholder(command: &str) -> Self {
        Self::new(command, vec![String::new()])
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Append(TranscriptEntry),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Append(entry) => self.entries.push(entry),
            Outcome::Clear => self.entries.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_empties_everything() {
        let mut transcript = Transcript::default();
        transcript.apply(Outcome::Append(TranscriptEntry::placeholder("evaluate")));
        transcript.apply(Outcome::Append(TranscriptEntry::placeholder("route skills")));
        assert_eq!(transcript.len(), 2);

        transcript.apply(Outcome::Clear);
        assert!(transcript.is_empty());
    }

    #[test]
    fn entries_keep_arrival_order() {
        let mut transcript = Transcript::default();
        transcript.apply(Outcome::Append(TranscriptEntry::new("b", vec![])));
        transcript.apply(Outcome::Append(
            TranscriptEntry::new("a", vec!["x".into()]).with_color("#ed4337"),
        ));
        let commands: Vec<_> = transcript.entries().iter().map(|e| e.command.as_str()).collect();
        assert_eq!(commands, ["b", "a"]);
        assert_eq!(transcript.entries()[1].color.as_deref(), Some("#ed4337"));
    }
}
