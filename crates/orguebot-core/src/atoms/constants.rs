// ── OrgueBot Atoms: Constants ──────────────────────────────────────────────
// All named constants for the crate live here.
// Config defaults in engine/config.rs read from this file, so a value
// changed here changes behavior everywhere the config is not overridden.

// ── Classification scoring ────────────────────────────────────────────────
// Used by `TopicClassifier::score()` in engine/classifier.rs.
// A topic is selected only when its score is strictly greater than the
// threshold; equal scores keep the topic evaluated first.
pub const CLASSIFICATION_THRESHOLD: f64 = 0.3;
pub const CONTEXT_BONUS: f64 = 0.2;
pub const KEYWORD_HIT_WEIGHT: f64 = 0.15;
pub const SIMILARITY_WEIGHT: f64 = 0.1;

// ── Dialogue cadence ──────────────────────────────────────────────────────
// Every Nth counted question is answered with a milestone instead of a
// classified response. Special inputs, help and farewells are not counted.
pub const MILESTONE_INTERVAL: u32 = 10;
// Suggestions are surfaced whenever the turn log length is a non-zero
// multiple of this value (user and bot entries both count).
pub const SUGGESTION_INTERVAL: usize = 5;
pub const SUGGESTION_COUNT: usize = 3;

// ── Persistence ───────────────────────────────────────────────────────────
pub const DEFAULT_STORE_FILE: &str = "memoria_orguebot.json";
pub const TRANSCRIPT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ── Paths ─────────────────────────────────────────────────────────────────
pub const APP_DIR_NAME: &str = "orguebot";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// ── Fun mode ──────────────────────────────────────────────────────────────
pub const FUN_MODE_SYMBOLS: &str = "🎵🎹🎭🎼🎶🎧🎻";
pub const FIRST_DISCOVERY_SUFFIX: &str = "🎉 ¡Has encontrado un nuevo easter egg!";
