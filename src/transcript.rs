//! Session-owned chat transcript: an ordered, append-only-per-turn entry log.

/// Speaker role for one transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One immutable transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub role: Role,
    pub content: String,
}

impl ChatEntry {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Ordered log of chat entries for one session.
///
/// Insertion order is display order is chronological order. The store is
/// owned by exactly one session and accessed from a single thread, so no
/// locking is involved. It grows without cap until `clear`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<ChatEntry>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry to the end. Never fails; content is not validated.
    pub fn append(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }

    /// Empties the log. Idempotent.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Read-only view of the entries at call time.
    #[must_use]
    pub fn snapshot(&self) -> &[ChatEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
