//! OrgueBot core: a turn-based dialogue engine that classifies Spanish
//! questions about the pipe organ into fixed topics, answers from a content
//! pack, and remembers frequent questions, unlocked hidden commands and
//! past conversations in a JSON store.
//!
//! The store file supports exactly one engine at a time; concurrent
//! engines on the same file overwrite each other.

pub mod atoms;
pub mod engine;

pub use atoms::error::{EngineError, EngineResult};
pub use atoms::types::{Role, Suggestions, Topic, Turn, TurnReply};
pub use engine::config::EngineConfig;
pub use engine::content::{ContentProvider, SpanishOrganContent};
pub use engine::dialogue::{Engine, Session};
pub use engine::memory::MemoryStore;
pub use engine::session::SessionContext;
