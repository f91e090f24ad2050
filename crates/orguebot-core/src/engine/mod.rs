// OrgueBot Engine: topic classification, hidden commands, session state
// and persistent memory for a single-user console assistant.
//
// Data flow per turn:
//   raw input → special_input (short-circuits) → milestone check
//             → normalizer → classifier (similarity + context) → content pool
//             → fun-mode transform → memory

pub mod classifier;
pub mod config;
pub mod content;
pub mod dialogue;
pub mod memory;
pub mod normalizer;
pub mod paths;
pub mod session;
pub mod similarity;
pub mod special_input;
