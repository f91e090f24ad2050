// OrgueBot Engine: Persistent Memory Store
// Owns the on-disk record: session transcripts, the question frequency
// table, feedback counters and the set of unlocked hidden commands.
//
// Lifecycle:
//   open()   - load once; a missing or unreadable file yields an empty record
//   record_* - mutate in memory, then save synchronously
//   save()   - pretty-printed JSON, non-ASCII preserved
//
// The store is the sole writer of the file and assumes it is the only
// writer: two engines pointed at the same file will overwrite each other's
// changes. There is no locking.

use crate::atoms::constants::TRANSCRIPT_TIME_FORMAT;
use crate::atoms::error::EngineResult;
use crate::atoms::types::{FeedbackEntry, FrequencyEntry, StoreRecord, Topic, TranscriptEntry, Turn};
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct MemoryStore {
    path: PathBuf,
    record: StoreRecord,
}

impl MemoryStore {
    /// Load the store at `path`. Never fails: load errors are logged and the
    /// store starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let record = match Self::try_load(&path) {
            Ok(record) => {
                info!(
                    "[memory] Loaded {:?}: {} conversations, {} questions, {} unlocked",
                    path,
                    record.transcripts.len(),
                    record.frequencies.len(),
                    record.unlocked.len()
                );
                record
            }
            Err(e) => {
                warn!("[memory] Failed to load {:?}, starting empty: {}", path, e);
                StoreRecord::default()
            }
        };
        MemoryStore { path, record }
    }

    /// Read the record at `path`. A missing file is an empty record; any
    /// other I/O or parse failure is an error.
    pub fn try_load(path: &Path) -> EngineResult<StoreRecord> {
        if !path.exists() {
            return Ok(StoreRecord::default());
        }
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self) -> EngineResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.record)?;
        std::fs::write(&self.path, json)?;
        debug!("[memory] Saved {:?}", self.path);
        Ok(())
    }

    /// Save, downgrading a failure to a warning. In-memory state stays
    /// correct either way.
    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!("[memory] Failed to save {:?}: {}", self.path, e);
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> &StoreRecord {
        &self.record
    }

    // ── Transcripts ────────────────────────────────────────────────────

    /// Append a finished session, stamped with the local time.
    pub fn record_conversation(&mut self, turns: &[Turn]) {
        let timestamp = chrono::Local::now().format(TRANSCRIPT_TIME_FORMAT).to_string();
        self.record.transcripts.push(TranscriptEntry { timestamp, turns: turns.to_vec() });
        info!("[memory] Stored conversation of {} turns", turns.len());
        self.persist();
    }

    pub fn transcripts(&self) -> &[TranscriptEntry] {
        &self.record.transcripts
    }

    // ── Question frequencies ───────────────────────────────────────────

    /// Count one more occurrence of `question` (case-folded, otherwise
    /// verbatim). The topic of the first occurrence is kept.
    pub fn record_question(&mut self, question: &str, topic: Topic) {
        let key = question.to_lowercase();
        self.record
            .frequencies
            .entry(key)
            .and_modify(|e| e.count = e.count.saturating_add(1))
            .or_insert(FrequencyEntry { topic, count: 1 });
        self.persist();
    }

    pub fn frequency(&self, question: &str) -> Option<&FrequencyEntry> {
        self.record.frequencies.get(&question.to_lowercase())
    }

    /// The `n` most frequent questions, highest count first. Equal counts
    /// are ordered alphabetically.
    pub fn suggestions(&self, n: usize) -> Vec<String> {
        let mut entries: Vec<(&String, &FrequencyEntry)> = self.record.frequencies.iter().collect();
        entries.sort_by(|a, b| b.1.count.cmp(&a.1.count));
        entries.into_iter().take(n).map(|(q, _)| q.clone()).collect()
    }

    // ── Hidden commands ────────────────────────────────────────────────

    /// Mark `id` as discovered. Returns `true` (and saves) only the first
    /// time; later calls have no side effect.
    pub fn unlock(&mut self, id: &str) -> bool {
        if self.record.unlocked.contains(id) {
            return false;
        }
        self.record.unlocked.insert(id.to_string());
        info!("[memory] Unlocked hidden command '{}'", id);
        self.persist();
        true
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.record.unlocked.contains(id)
    }

    pub fn unlocked(&self) -> &BTreeSet<String> {
        &self.record.unlocked
    }

    // ── Feedback ───────────────────────────────────────────────────────

    pub fn record_feedback(&mut self, topic: Topic, helpful: bool) {
        let entry = self.record.feedback.entry(topic.id().to_string()).or_default();
        if helpful {
            entry.positive += 1;
        } else {
            entry.negative += 1;
        }
        self.persist();
    }

    pub fn feedback(&self, topic: Topic) -> FeedbackEntry {
        self.record.feedback.get(topic.id()).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, MemoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::open(dir.path().join("memoria.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let (_dir, store) = temp_store();
        assert_eq!(store.record(), &StoreRecord::default());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memoria.json");
        std::fs::write(&path, "{ esto no es json").unwrap();
        assert!(MemoryStore::try_load(&path).is_err());
        let store = MemoryStore::open(&path);
        assert!(store.transcripts().is_empty());
    }

    #[test]
    fn test_record_question_counts_case_insensitively() {
        let (_dir, mut store) = temp_store();
        store.record_question("¿Qué es un Pedal?", Topic::Structure);
        store.record_question("¿qué es un pedal?", Topic::Technique);
        let entry = store.frequency("¿QUÉ ES UN PEDAL?").unwrap();
        assert_eq!(entry.count, 2);
        assert_eq!(entry.topic, Topic::Structure);
    }

    #[test]
    fn test_every_mutation_is_saved() {
        let (_dir, mut store) = temp_store();
        store.record_question("historia del órgano", Topic::History);
        let on_disk = MemoryStore::try_load(store.path()).unwrap();
        assert_eq!(on_disk.frequencies.len(), 1);

        store.unlock("motivo_bach");
        let on_disk = MemoryStore::try_load(store.path()).unwrap();
        assert!(on_disk.unlocked.contains("motivo_bach"));
    }

    #[test]
    fn test_unlock_is_first_time_only() {
        let (_dir, mut store) = temp_store();
        assert!(store.unlock("konami_code"));
        assert!(!store.unlock("konami_code"));
        assert!(store.is_unlocked("konami_code"));
        assert_eq!(store.unlocked().len(), 1);
    }

    #[test]
    fn test_suggestions_order() {
        let (_dir, mut store) = temp_store();
        for _ in 0..3 {
            store.record_question("bach", Topic::Composers);
        }
        store.record_question("pedal", Topic::Structure);
        store.record_question("misa", Topic::LiturgicalMusic);
        store.record_question("misa", Topic::LiturgicalMusic);
        store.record_question("afinar", Topic::Maintenance);

        assert_eq!(store.suggestions(3), vec!["bach", "misa", "afinar"]);
        assert_eq!(store.suggestions(10).len(), 4);
    }

    #[test]
    fn test_suggestions_empty() {
        let (_dir, store) = temp_store();
        assert!(store.suggestions(3).is_empty());
    }

    #[test]
    fn test_round_trip() {
        let (_dir, mut store) = temp_store();
        store.record_question("¿Quién fue Bach?", Topic::Composers);
        store.unlock("organroll");
        store.record_feedback(Topic::Composers, true);
        store.record_conversation(&[Turn::user("hola"), Turn::bot("¡Hola organófilo!")]);

        let reloaded = MemoryStore::open(store.path());
        assert_eq!(reloaded.record(), store.record());
        assert_eq!(reloaded.transcripts()[0].turns.len(), 2);
    }

    #[test]
    fn test_non_ascii_written_verbatim() {
        let (_dir, mut store) = temp_store();
        store.record_question("¿Cómo se afina?", Topic::Maintenance);
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("¿cómo se afina?"), "raw file: {raw}");
    }

    #[test]
    fn test_feedback_counters() {
        let (_dir, mut store) = temp_store();
        store.record_feedback(Topic::History, true);
        store.record_feedback(Topic::History, false);
        store.record_feedback(Topic::History, true);
        assert_eq!(store.feedback(Topic::History), FeedbackEntry { positive: 2, negative: 1 });
        assert_eq!(store.feedback(Topic::Trivia), FeedbackEntry::default());
    }

    #[test]
    fn test_transcript_timestamp_format() {
        let (_dir, mut store) = temp_store();
        store.record_conversation(&[Turn::user("adiós")]);
        let ts = &store.transcripts()[0].timestamp;
        assert!(chrono::NaiveDateTime::parse_from_str(ts, TRANSCRIPT_TIME_FORMAT).is_ok(), "{ts}");
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the file should be makes every write fail
        let path = dir.path().join("bloqueado");
        std::fs::create_dir(&path).unwrap();
        let mut store = MemoryStore::open(&path);
        store.record_question("pedal", Topic::Structure);
        assert!(store.save().is_err());
        assert_eq!(store.frequency("pedal").map(|e| e.count), Some(1));
    }

    #[test]
    fn test_reads_legacy_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memoria.json");
        std::fs::write(
            &path,
            r#"{
              "conversaciones": [
                {"fecha": "2024-03-01 18:30:00",
                 "intercambios": [{"rol": "usuario", "mensaje": "chao"}, {"rol": "bot", "mensaje": "¡Hasta pronto!"}]}
              ],
              "preguntas_frecuentes": {"¿qué es un registro?": {"categoria": "estructura", "frecuencia": 4}},
              "feedback": {},
              "huevos_pascua_encontrados": ["motivo_bach"]
            }"#,
        )
        .unwrap();
        let store = MemoryStore::open(&path);
        assert_eq!(store.transcripts().len(), 1);
        assert_eq!(store.frequency("¿qué es un registro?").map(|e| e.count), Some(4));
        assert!(store.is_unlocked("motivo_bach"));
    }

    #[test]
    fn test_count_saturates_at_max() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memoria.json");
        std::fs::write(
            &path,
            r#"{"preguntas_frecuentes": {"pedal": {"categoria": "tecnica", "frecuencia": 4294967295}}}"#,
        )
        .unwrap();
        let mut store = MemoryStore::open(&path);
        store.record_question("pedal", Topic::Technique);
        assert_eq!(store.frequency("pedal").map(|e| e.count), Some(u32::MAX));
    }
}
