// ── OrgueBot Engine: Topic Classifier ─────────────────────────────────────────
//
// Scores a question against every topic's keyword list and picks the best
// topic above a fixed threshold. Keyword heuristics only, no model:
//
//   score(T) = context bonus          (T was the previous topic)
//            + Σ keyword hits         (keyword is a substring of the query)
//            + Σ weighted similarity  (whole query vs. each single keyword)
//
// Topics are evaluated in `TopicLexicon` order and only a strictly greater
// score replaces the current best, so ties go to the earlier topic.

use crate::atoms::constants::*;
use crate::atoms::types::Topic;
use crate::engine::config::EngineConfig;
use crate::engine::normalizer::Normalizer;
use crate::engine::session::SessionContext;
use crate::engine::similarity;
use log::debug;

// ═══════════════════════════════════════════════════════════════════════════
// Lexicon
// ═══════════════════════════════════════════════════════════════════════════

/// Ordered keyword lists, one per topic. The order is the evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicLexicon {
    entries: Vec<(Topic, Vec<String>)>,
}

impl TopicLexicon {
    pub fn new(entries: Vec<(Topic, Vec<String>)>) -> Self {
        Self { entries }
    }

    /// Built-in Spanish keyword lists, in `Topic::ALL` order.
    pub fn spanish() -> Self {
        let entries = Topic::ALL
            .iter()
            .map(|&t| (t, spanish_keywords(t).iter().map(|k| k.to_string()).collect()))
            .collect();
        Self { entries }
    }

    /// Replace the keyword list of each named topic, keeping the order.
    pub fn with_overrides(mut self, overrides: Vec<(Topic, Vec<String>)>) -> Self {
        for (topic, words) in overrides {
            if let Some(entry) = self.entries.iter_mut().find(|(t, _)| *t == topic) {
                entry.1 = words.into_iter().map(|w| w.to_lowercase()).collect();
            }
        }
        self
    }

    pub fn keywords(&self, topic: Topic) -> &[String] {
        self.entries
            .iter()
            .find(|(t, _)| *t == topic)
            .map(|(_, words)| words.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Topic, &[String])> {
        self.entries.iter().map(|(t, words)| (*t, words.as_slice()))
    }
}

impl Default for TopicLexicon {
    fn default() -> Self {
        Self::spanish()
    }
}

fn spanish_keywords(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::History => &[
            "historia", "origen", "antiguo", "evolución", "histórico",
            "cuando", "comenzó", "inventó", "creó", "surgió",
        ],
        Topic::Composers => &[
            "compositor", "bach", "buxtehude", "franck", "messiaen",
            "mendelssohn", "músico", "autor", "escribió", "compuso",
        ],
        Topic::Structure => &[
            "estructura", "parte", "tubo", "consola", "manual",
            "pedal", "registro", "construcción", "diseño", "componente",
        ],
        Topic::Technique => &[
            "técnica", "tocar", "interpretar", "ejecución", "pedal",
            "digitación", "registración", "método", "práctica", "estudio",
        ],
        Topic::FamousOrgans => &[
            "famoso", "importante", "grande", "catedral", "iglesia",
            "notre dame", "wanamaker", "conocido", "monumental", "impresionante",
        ],
        Topic::LiturgicalMusic => &[
            "liturgia", "misa", "iglesia", "religioso", "servicio",
            "culto", "ceremonia", "ritual", "sagrado", "eclesiástico",
        ],
        Topic::Maintenance => &[
            "mantener", "afinar", "restaurar", "conservar", "reparar",
            "cuidar", "preservar", "ajustar", "limpiar", "renovar",
        ],
        Topic::Trivia => &[
            "curioso", "interesante", "insólito", "extraño", "sorprendente",
            "dato", "sabías", "impactante", "anécdota", "fascinante",
        ],
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Scoring
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub threshold: f64,
    pub context_bonus: f64,
    pub keyword_weight: f64,
    pub similarity_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            threshold: CLASSIFICATION_THRESHOLD,
            context_bonus: CONTEXT_BONUS,
            keyword_weight: KEYWORD_HIT_WEIGHT,
            similarity_weight: SIMILARITY_WEIGHT,
        }
    }
}

impl From<&EngineConfig> for ScoringWeights {
    fn from(config: &EngineConfig) -> Self {
        Self {
            threshold: config.threshold,
            context_bonus: config.context_bonus,
            keyword_weight: config.keyword_weight,
            similarity_weight: config.similarity_weight,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TopicClassifier {
    lexicon: TopicLexicon,
    weights: ScoringWeights,
    normalizer: Normalizer,
}

impl TopicClassifier {
    pub fn new(lexicon: TopicLexicon, weights: ScoringWeights, normalizer: Normalizer) -> Self {
        Self { lexicon, weights, normalizer }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        let lexicon = TopicLexicon::spanish().with_overrides(config.keyword_overrides());
        Self::new(lexicon, ScoringWeights::from(config), Normalizer::spanish())
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Score of `topic` for an already-normalized, joined query.
    pub fn score(&self, topic: Topic, normalized: &str, last_topic: Option<Topic>) -> f64 {
        let keywords = self.lexicon.keywords(topic);
        let mut score = if last_topic == Some(topic) { self.weights.context_bonus } else { 0.0 };

        for keyword in keywords {
            if normalized.contains(keyword.as_str()) {
                score += self.weights.keyword_weight;
            }
        }

        for keyword in keywords {
            score += similarity::ratio(normalized, keyword) * self.weights.similarity_weight;
        }

        score
    }

    /// Every topic's score for a raw question, in evaluation order.
    pub fn scores(&self, raw: &str, last_topic: Option<Topic>) -> Vec<(Topic, f64)> {
        let normalized = self.normalizer.normalize(raw).joined();
        self.lexicon
            .iter()
            .map(|(topic, _)| (topic, self.score(topic, &normalized, last_topic)))
            .collect()
    }

    /// Best topic strictly above the threshold, with its score. Pure.
    pub fn best(&self, raw: &str, last_topic: Option<Topic>) -> Option<(Topic, f64)> {
        let mut best: Option<(Topic, f64)> = None;
        let mut best_score = self.weights.threshold;
        for (topic, score) in self.scores(raw, last_topic) {
            if score > best_score {
                best = Some((topic, score));
                best_score = score;
            }
        }
        best
    }

    /// Classify and record the result as the session's context, clearing it
    /// when nothing matches.
    pub fn classify(&self, raw: &str, ctx: &mut SessionContext) -> Option<Topic> {
        let result = self.best(raw, ctx.last_topic);
        debug!("[classifier] {:?} → {:?}", raw, result);
        ctx.last_topic = result.map(|(topic, _)| topic);
        ctx.last_topic
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
