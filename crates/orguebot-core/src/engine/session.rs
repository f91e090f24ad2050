// OrgueBot Engine: Session Context
// Per-session mutable state. The engine holds no per-session fields of its
// own: callers pass a `SessionContext` into every turn, so independent
// sessions and deterministic replays only need independent contexts.

use crate::atoms::types::{Topic, Turn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    /// Topic of the last classified question; cleared by a non-match.
    pub last_topic: Option<Topic>,
    /// Topic of the most recent reply when it was a topic answer; `None`
    /// after help, special inputs, milestones and fallbacks.
    pub answered_topic: Option<Topic>,
    pub fun_mode: bool,
    /// Questions counted toward milestones (special inputs excluded).
    pub question_count: u32,
    /// Current conversation, user and bot entries interleaved.
    pub turns: Vec<Turn>,
    /// Set once a farewell has been handled.
    pub ended: bool,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that starts with a known previous topic.
    pub fn with_last_topic(topic: Topic) -> Self {
        Self { last_topic: Some(topic), ..Self::default() }
    }
}
