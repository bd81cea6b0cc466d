// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only conversation transcript.

use folio_core::Message;

/// Ordered message history for one chat session.
///
/// Append-only: messages are never reordered, edited, or removed once
/// appended. Insertion order is the only ordering the presentation layer may
/// rely on. The transcript lives and dies with its session -- nothing is
/// persisted.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the end of the transcript.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Iterates messages in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// The most recently appended message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Sender;

    #[test]
    fn append_preserves_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.append(Message::bot("greeting"));
        transcript.append(Message::user("question"));
        transcript.append(Message::bot("answer"));

        let texts: Vec<&str> = transcript.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["greeting", "question", "answer"]);
        assert_eq!(transcript.len(), 3);
    }

    #[test]
    fn appending_n_messages_yields_length_n_unmutated() {
        let mut transcript = Transcript::new();
        let originals: Vec<Message> =
            (0..10).map(|i| Message::user(format!("msg {i}"))).collect();
        for m in &originals {
            transcript.append(m.clone());
        }

        assert_eq!(transcript.len(), originals.len());
        for (stored, original) in transcript.iter().zip(&originals) {
            assert_eq!(stored, original);
        }
    }

    #[test]
    fn last_tracks_newest_message() {
        let mut transcript = Transcript::new();
        assert!(transcript.last().is_none());
        assert!(transcript.is_empty());

        transcript.append(Message::user("first"));
        transcript.append(Message::bot("second"));
        let last = transcript.last().expect("non-empty");
        assert_eq!(last.text, "second");
        assert_eq!(last.sender, Sender::Bot);
    }
}
