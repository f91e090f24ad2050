// OrgueBot Engine: Dialogue Controller
// Orchestrates one turn:
//   farewell → help → special input → milestone → classification → response
//
// Module layout:
//   Engine   - long-lived: config, memory store, classifier, content, rng
//   Session  - an Engine borrowed together with one SessionContext; the
//              `submit(text) → TurnReply` surface a console or test drives
//
// Every user input and every bot reply is appended to the context's turn
// log; the log is written to the memory store when a farewell ends the
// session.

use crate::atoms::constants::FUN_MODE_SYMBOLS;
use crate::atoms::error::EngineResult;
use crate::atoms::types::{Suggestions, Topic, Turn, TurnReply};
use crate::engine::classifier::TopicClassifier;
use crate::engine::config::EngineConfig;
use crate::engine::content::{pick, ContentProvider, SpanishOrganContent};
use crate::engine::memory::MemoryStore;
use crate::engine::session::SessionContext;
use crate::engine::special_input::SpecialInputMatcher;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const FAREWELL_PHRASES: &[&str] = &[
    "adiós", "chao", "hasta luego", "salir", "terminar", "cerrar", "bye", "me voy", "hasta pronto",
];
const HELP_MARKERS: &[&str] = &["ayuda", "help"];

pub struct Engine {
    config: EngineConfig,
    memory: MemoryStore,
    classifier: TopicClassifier,
    special: SpecialInputMatcher,
    content: Box<dyn ContentProvider>,
    rng: StdRng,
}

impl Engine {
    /// Engine with the built-in Spanish content, seeded from entropy.
    /// Fails when `config` does not pass [`EngineConfig::validate`].
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine whose random choices are reproducible.
    pub fn with_seed(config: EngineConfig, seed: u64) -> EngineResult<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EngineConfig, rng: StdRng) -> EngineResult<Self> {
        // intervals are divisors in the turn flow
        config.validate()?;
        let memory = MemoryStore::open(config.store_path.clone());
        let classifier = TopicClassifier::from_config(&config);
        Ok(Engine {
            config,
            memory,
            classifier,
            special: SpecialInputMatcher::spanish(),
            content: Box::new(SpanishOrganContent),
            rng,
        })
    }

    pub fn with_content(mut self, content: impl ContentProvider + 'static) -> Self {
        self.content = Box::new(content);
        self
    }

    pub fn with_special_inputs(mut self, special: SpecialInputMatcher) -> Self {
        self.special = special;
        self
    }

    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    /// Start a session bound to this engine.
    pub fn session(&mut self) -> Session<'_> {
        Session { engine: self, ctx: SessionContext::new() }
    }

    pub fn greeting(&mut self) -> String {
        pick(self.content.greetings(), &mut self.rng).to_string()
    }

    /// Suggestions to show before reading the next input, on every non-zero
    /// multiple of the suggestion interval in the turn log.
    pub fn suggestions_due(&self, ctx: &SessionContext) -> Option<Suggestions> {
        let turns = ctx.turns.len();
        if turns == 0 || turns % self.config.suggestion_interval != 0 {
            return None;
        }
        let questions = self.memory.suggestions(self.config.suggestion_count);
        if questions.is_empty() {
            return Some(Suggestions::Help(self.content.help().to_string()));
        }
        Some(Suggestions::Popular {
            header: self.content.suggestions_header().to_string(),
            questions,
        })
    }

    /// Process one input. After a farewell the context is ended and further
    /// input is ignored.
    pub fn submit(&mut self, ctx: &mut SessionContext, raw: &str) -> TurnReply {
        if ctx.ended {
            debug!("[dialogue] Input after session end ignored");
            return TurnReply { response_text: String::new(), session_ended: true };
        }

        ctx.turns.push(Turn::user(raw));
        ctx.answered_topic = None;

        if is_farewell(raw) {
            let text = pick(self.content.farewells(), &mut self.rng).to_string();
            ctx.turns.push(Turn::bot(text.clone()));
            self.memory.record_conversation(&ctx.turns);
            ctx.ended = true;
            info!("[dialogue] Session ended after {} turns", ctx.turns.len());
            return TurnReply { response_text: text, session_ended: true };
        }

        let text = if is_help(raw) {
            self.content.help().to_string()
        } else {
            self.respond(ctx, raw)
        };
        ctx.turns.push(Turn::bot(text.clone()));
        TurnReply { response_text: text, session_ended: false }
    }

    fn respond(&mut self, ctx: &mut SessionContext, raw: &str) -> String {
        if let Some(special) =
            self.special.check(raw, ctx, &mut self.memory, self.content.as_ref(), &mut self.rng)
        {
            debug!("[dialogue] Special input: {:?}", special.kind);
            return special.text;
        }

        ctx.question_count += 1;
        if ctx.question_count % self.config.milestone_interval == 0 {
            let trivia = pick(self.content.trivia(), &mut self.rng);
            return self.content.milestone(ctx.question_count, trivia);
        }

        match self.classifier.classify(raw, ctx) {
            Some(topic) => {
                ctx.answered_topic = Some(topic);
                self.memory.record_question(raw, topic);
                let answer = pick(self.content.responses(topic), &mut self.rng).to_string();
                if ctx.fun_mode {
                    self.fun_transform(&answer)
                } else {
                    answer
                }
            }
            None => pick(self.content.no_info(), &mut self.rng).to_string(),
        }
    }

    fn fun_transform(&mut self, text: &str) -> String {
        let symbols: Vec<char> = FUN_MODE_SYMBOLS.chars().collect();
        let lively = text.replace('.', "! 🎵").replace(',', ", ¡vaya! ");
        let first = symbols.choose(&mut self.rng).copied().unwrap_or('🎵');
        let second = symbols.choose(&mut self.rng).copied().unwrap_or('🎵');
        format!("{lively} {first}{second}")
    }

    /// Record whether the last reply helped. Returns `false` unless that
    /// reply was a topic answer.
    pub fn rate_last_answer(&mut self, ctx: &SessionContext, helpful: bool) -> bool {
        match ctx.answered_topic {
            Some(topic) => {
                self.memory.record_feedback(topic, helpful);
                true
            }
            None => false,
        }
    }

    /// Classification without side effects, for diagnostics.
    pub fn peek_topic(&self, raw: &str, ctx: &SessionContext) -> Option<Topic> {
        self.classifier.best(raw, ctx.last_topic).map(|(topic, _)| topic)
    }
}

fn is_farewell(raw: &str) -> bool {
    let lowered = raw.to_lowercase();
    FAREWELL_PHRASES.iter().any(|p| lowered.contains(p))
}

fn is_help(raw: &str) -> bool {
    let lowered = raw.to_lowercase();
    HELP_MARKERS.iter().any(|m| lowered.contains(m)) || raw == "?"
}

// ── Session ────────────────────────────────────────────────────────────────

/// One conversation against an engine.
pub struct Session<'e> {
    engine: &'e mut Engine,
    ctx: SessionContext,
}

impl<'e> Session<'e> {
    pub fn submit(&mut self, raw: &str) -> TurnReply {
        self.engine.submit(&mut self.ctx, raw)
    }

    pub fn suggestions_due(&self) -> Option<Suggestions> {
        self.engine.suggestions_due(&self.ctx)
    }

    pub fn rate_last_answer(&mut self, helpful: bool) -> bool {
        self.engine.rate_last_answer(&self.ctx, helpful)
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    pub fn engine(&self) -> &Engine {
        &*self.engine
    }

    pub fn greeting(&mut self) -> String {
        self.engine.greeting()
    }
}
