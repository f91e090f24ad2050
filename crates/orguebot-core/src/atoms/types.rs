// ── OrgueBot Atoms: Pure Data Types ──────────────────────────────────────────
// Plain struct/enum definitions shared by every engine module.
// Atoms layer rule: no I/O, no side effects, no imports from engine/.
//
// The persisted record keeps the field names of the on-disk JSON format
// (`conversaciones`, `preguntas_frecuentes`, …) through serde renames, so
// existing memory files keep loading.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

// ── Topics ─────────────────────────────────────────────────────────────────

/// Classification category. The declaration order of [`Topic::ALL`] is the
/// evaluation order of the classifier and therefore its tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "historia")]
    History,
    #[serde(rename = "compositores")]
    Composers,
    #[serde(rename = "estructura")]
    Structure,
    #[serde(rename = "tecnica")]
    Technique,
    #[serde(rename = "organos_famosos")]
    FamousOrgans,
    #[serde(rename = "musica_liturgica")]
    LiturgicalMusic,
    #[serde(rename = "mantenimiento")]
    Maintenance,
    #[serde(rename = "curiosidades")]
    Trivia,
}

impl Topic {
    pub const ALL: [Topic; 8] = [
        Topic::History,
        Topic::Composers,
        Topic::Structure,
        Topic::Technique,
        Topic::FamousOrgans,
        Topic::LiturgicalMusic,
        Topic::Maintenance,
        Topic::Trivia,
    ];

    /// Stable identifier used in the store file and in config overrides.
    pub fn id(self) -> &'static str {
        match self {
            Topic::History => "historia",
            Topic::Composers => "compositores",
            Topic::Structure => "estructura",
            Topic::Technique => "tecnica",
            Topic::FamousOrgans => "organos_famosos",
            Topic::LiturgicalMusic => "musica_liturgica",
            Topic::Maintenance => "mantenimiento",
            Topic::Trivia => "curiosidades",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .iter()
            .copied()
            .find(|t| t.id() == s)
            .ok_or_else(|| format!("unknown topic '{}'", s))
    }
}

// ── Conversation turns ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "usuario")]
    User,
    #[serde(rename = "bot")]
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    #[serde(rename = "rol")]
    pub role: Role,
    #[serde(rename = "mensaje")]
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Turn { role: Role::User, text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Turn { role: Role::Bot, text: text.into() }
    }
}

/// Result of one `submit` call: the whole external surface of a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReply {
    pub response_text: String,
    pub session_ended: bool,
}

/// What the controller surfaces every few turns, before the next input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestions {
    /// Most frequent past questions, preceded by a header line.
    Popular { header: String, questions: Vec<String> },
    /// Nothing recorded yet: the static help text instead.
    Help(String),
}

// ── Persisted record ───────────────────────────────────────────────────────

/// One completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    #[serde(rename = "fecha")]
    pub timestamp: String,
    #[serde(rename = "intercambios")]
    pub turns: Vec<Turn>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    #[serde(rename = "categoria")]
    pub topic: Topic,
    #[serde(rename = "frecuencia")]
    pub count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    #[serde(rename = "positivo", default)]
    pub positive: u32,
    #[serde(rename = "negativo", default)]
    pub negative: u32,
}

/// Everything the memory store persists. Missing fields load as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRecord {
    #[serde(rename = "conversaciones", default)]
    pub transcripts: Vec<TranscriptEntry>,
    /// Keyed by the lowercased raw question (not stop-word stripped).
    #[serde(rename = "preguntas_frecuentes", default)]
    pub frequencies: BTreeMap<String, FrequencyEntry>,
    /// Keyed by topic identifier.
    #[serde(default)]
    pub feedback: BTreeMap<String, FeedbackEntry>,
    #[serde(rename = "huevos_pascua_encontrados", default)]
    pub unlocked: BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_ids_round_trip() {
        for topic in Topic::ALL {
            assert_eq!(topic.id().parse::<Topic>(), Ok(topic));
        }
        assert!("organos".parse::<Topic>().is_err());
    }

    #[test]
    fn test_topic_serializes_as_id() {
        let json = serde_json::to_string(&Topic::FamousOrgans).unwrap();
        assert_eq!(json, "\"organos_famosos\"");
    }

    #[test]
    fn test_record_uses_store_field_names() {
        let mut record = StoreRecord::default();
        record
            .frequencies
            .insert("¿qué es un pedal?".into(), FrequencyEntry { topic: Topic::Structure, count: 2 });
        record.transcripts.push(TranscriptEntry {
            timestamp: "2024-01-01 10:00:00".into(),
            turns: vec![Turn::user("hola"), Turn::bot("¡Hola!")],
        });
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("conversaciones").is_some());
        assert!(json.get("huevos_pascua_encontrados").is_some());
        assert_eq!(json["preguntas_frecuentes"]["¿qué es un pedal?"]["categoria"], "estructura");
        assert_eq!(json["conversaciones"][0]["intercambios"][0]["rol"], "usuario");
    }

    #[test]
    fn test_record_missing_fields_default() {
        let record: StoreRecord = serde_json::from_str(r#"{"conversaciones": []}"#).unwrap();
        assert!(record.frequencies.is_empty());
        assert!(record.unlocked.is_empty());
        assert!(record.feedback.is_empty());
    }
}
