// ── OrgueBot Engine: Special-Input Matcher ────────────────────────────────────
//
// Intercepts raw input before classification, in strict priority order:
//   1. hidden commands   - ordered list, first predicate that matches wins;
//                          the first discovery is persisted and announced
//   2. fun-mode toggle   - exact phrase, flips `SessionContext::fun_mode`
//   3. trivia request    - any of a few exact phrases, one random trivia line
//
// Input is lowercased and trimmed but not stop-word filtered.
// Hidden commands are data (`HiddenCommand`), so adding one never touches
// the dispatch loop.

use crate::atoms::constants::FIRST_DISCOVERY_SUFFIX;
use crate::engine::content::{pick, ContentProvider};
use crate::engine::memory::MemoryStore;
use crate::engine::session::SessionContext;
use log::info;
use rand::Rng;
use std::fmt;

type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;
type ResponseBuilder = Box<dyn Fn() -> String + Send + Sync>;

/// One hidden command: identifier, trigger predicate and response.
pub struct HiddenCommand {
    id: String,
    predicate: Predicate,
    respond: ResponseBuilder,
}

impl HiddenCommand {
    pub fn new(
        id: impl Into<String>,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
        respond: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        Self { id: id.into(), predicate: Box::new(predicate), respond: Box::new(respond) }
    }

    /// Triggers when the input contains `phrase` anywhere.
    pub fn containing(id: &str, phrase: &str, response: &str) -> Self {
        let phrase = phrase.to_lowercase();
        let response = response.to_string();
        Self::new(id, move |input| input.contains(phrase.as_str()), move || response.clone())
    }

    /// Triggers only when the whole input equals `phrase`.
    pub fn exact(id: &str, phrase: &str, response: &str) -> Self {
        let phrase = phrase.to_lowercase();
        let response = response.to_string();
        Self::new(id, move |input| input == phrase, move || response.clone())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn matches(&self, input: &str) -> bool {
        (self.predicate)(input)
    }

    pub fn response(&self) -> String {
        (self.respond)()
    }
}

impl fmt::Debug for HiddenCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HiddenCommand").field("id", &self.id).finish_non_exhaustive()
    }
}

/// What intercepted the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialKind {
    Hidden { id: String, first_discovery: bool },
    FunMode { enabled: bool },
    Trivia,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialMatch {
    pub kind: SpecialKind,
    pub text: String,
}

#[derive(Debug)]
pub struct SpecialInputMatcher {
    commands: Vec<HiddenCommand>,
    fun_mode_phrase: String,
    trivia_phrases: Vec<String>,
}

impl SpecialInputMatcher {
    pub fn new(commands: Vec<HiddenCommand>, fun_mode_phrase: &str, trivia_phrases: &[&str]) -> Self {
        Self {
            commands,
            fun_mode_phrase: fun_mode_phrase.to_string(),
            trivia_phrases: trivia_phrases.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Built-in Spanish commands and phrases.
    pub fn spanish() -> Self {
        Self::new(default_hidden_commands(), FUN_MODE_PHRASE, TRIVIA_PHRASES)
    }

    pub fn commands(&self) -> &[HiddenCommand] {
        &self.commands
    }

    /// Check `raw` against every special input. `None` means classification
    /// should proceed.
    pub fn check<R: Rng + ?Sized>(
        &self,
        raw: &str,
        ctx: &mut SessionContext,
        memory: &mut MemoryStore,
        content: &dyn ContentProvider,
        rng: &mut R,
    ) -> Option<SpecialMatch> {
        let input = raw.trim().to_lowercase();

        if let Some(command) = self.commands.iter().find(|c| c.matches(&input)) {
            let first_discovery = memory.unlock(command.id());
            let response = command.response();
            let text = if first_discovery {
                info!("[special] First discovery of '{}'", command.id());
                format!("{} {}", response, FIRST_DISCOVERY_SUFFIX)
            } else {
                response
            };
            return Some(SpecialMatch {
                kind: SpecialKind::Hidden { id: command.id().to_string(), first_discovery },
                text,
            });
        }

        if input == self.fun_mode_phrase {
            ctx.fun_mode = !ctx.fun_mode;
            let text = if ctx.fun_mode { content.fun_mode_on() } else { content.fun_mode_off() };
            return Some(SpecialMatch {
                kind: SpecialKind::FunMode { enabled: ctx.fun_mode },
                text: text.to_string(),
            });
        }

        if self.trivia_phrases.iter().any(|p| *p == input) {
            return Some(SpecialMatch {
                kind: SpecialKind::Trivia,
                text: pick(content.trivia(), rng).to_string(),
            });
        }

        None
    }
}

impl Default for SpecialInputMatcher {
    fn default() -> Self {
        Self::spanish()
    }
}

// ── Built-in commands ──────────────────────────────────────────────────────

const FUN_MODE_PHRASE: &str = "modo divertido";
const TRIVIA_PHRASES: &[&str] = &["dato curioso", "datos curiosos", "curiosidad", "cuéntame algo interesante"];

/// Hidden commands in priority order.
pub fn default_hidden_commands() -> Vec<HiddenCommand> {
    vec![
        HiddenCommand::containing(
            "konami_code",
            "arriba arriba abajo abajo izquierda derecha izquierda derecha b a",
            "🎮 ¡CÓDIGO KONAMI ACTIVADO! Acabas de desbloquear el modo organista invencible. Ahora puedes tocar Bach a 200 BPM sin equivocarte. ¡Poderes ilimitados! 🎹🔥",
        ),
        HiddenCommand::containing(
            "jedi_organista",
            "que la fuerza te acompañe",
            "🎵 *Suena el tema de Star Wars en el órgano* 🚀 El Maestro Yoda dice: 'Tocar el órgano debes, mmm sí. El camino al lado luminoso de la música es.'",
        ),
        // exact match, so questions that merely mention the piece still classify
        HiddenCommand::exact(
            "phantom_dracula",
            "toccata y fuga",
            "🧛\u{200d}♂️ *Relámpagos y truenos* ¡Muahaha! Has invocado al Fantasma de la Ópera y al Conde Drácula simultáneamente. Ambos te piden autógrafos por tu exquisito gusto musical. La Toccata y Fuga en Re menor de Bach es su melodía favorita para hacer entradas dramáticas.",
        ),
        HiddenCommand::containing(
            "organroll",
            "never gonna give you up",
            "🎵 *El órgano comienza a tocar 'Never Gonna Give You Up'* ¡Has sido ORGANROLLADO! Rick Astley estaría orgulloso de esta versión para órgano de su clásico. 🎹🕺",
        ),
        HiddenCommand::containing(
            "motivo_bach",
            "b a c h",
            "🎼 *El órgano toca la secuencia de notas Si♭-La-Do-Si♮* ¡Has descubierto el motivo BACH! En notación alemana, estas notas deletrean B-A-C-H. El propio Johann Sebastian usó este motivo en sus composiciones. ¡Eres un verdadero conocedor! 👏",
        ),
    ]
}
