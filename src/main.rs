// OrgueBot console: reads questions from stdin and prints the engine's
// replies. Lines starting with ':' are console commands and never reach the
// engine (":+" / ":-" rate the last answer).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use orguebot_core::engine::paths::default_config_path;
use orguebot_core::{Engine, EngineConfig, MemoryStore, Session, Suggestions, Topic};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orguebot", version, about = "Console assistant about the pipe organ")]
struct Cli {
    /// Config file (TOML). Defaults to the user config directory.
    #[arg(long, env = "ORGUEBOT_CONFIG")]
    config: Option<PathBuf>,

    /// Memory store file, overrides `store_path` from the config.
    #[arg(long, env = "ORGUEBOT_STORE")]
    store: Option<PathBuf>,

    /// Seed for reproducible answers.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start a conversation (default).
    Chat,
    /// Print what the memory store has accumulated.
    Stats,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let mut config = EngineConfig::load_or_default(&config_path)
        .with_context(|| format!("cannot load config {}", config_path.display()))?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => {
            let mut engine = match cli.seed {
                Some(seed) => Engine::with_seed(config, seed),
                None => Engine::new(config),
            }
            .context("invalid engine configuration")?;
            chat(&mut engine.session())
        }
        Command::Stats => stats(&MemoryStore::open(config.store_path)),
    }
}

fn chat(session: &mut Session<'_>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", session.greeting().green())?;
    writeln!(stdout, "{}", "Escribe 'ayuda' en cualquier momento para ver opciones.".cyan())?;

    let mut lines = stdin.lock().lines();
    loop {
        if let Some(suggestions) = session.suggestions_due() {
            print_suggestions(&mut stdout, &suggestions)?;
        }

        write!(stdout, "{}", "Tú: ".yellow())?;
        stdout.flush()?;
        let Some(line) = lines.next() else {
            // EOF ends the session without a farewell; nothing is stored
            writeln!(stdout)?;
            return Ok(());
        };
        let line = line?;

        if let Some(command) = line.trim().strip_prefix(':') {
            console_command(session, &mut stdout, command)?;
            continue;
        }

        let reply = session.submit(&line);
        writeln!(stdout, "{}", format!("Bot: {}", reply.response_text).green())?;
        if reply.session_ended {
            return Ok(());
        }
    }
}

fn console_command(session: &mut Session<'_>, out: &mut impl Write, command: &str) -> Result<()> {
    let helpful = match command {
        "+" => true,
        "-" => false,
        other => {
            writeln!(out, "Comando desconocido ':{}'. Usa ':+' o ':-' para valorar la última respuesta.", other)?;
            return Ok(());
        }
    };
    if session.rate_last_answer(helpful) {
        writeln!(out, "¡Gracias por tu valoración!")?;
    } else {
        writeln!(out, "Todavía no hay ninguna respuesta que valorar.")?;
    }
    Ok(())
}

fn print_suggestions(out: &mut impl Write, suggestions: &Suggestions) -> io::Result<()> {
    writeln!(out)?;
    match suggestions {
        Suggestions::Popular { header, questions } => {
            writeln!(out, "{}", header.cyan())?;
            for (i, question) in questions.iter().enumerate() {
                writeln!(out, "{}", format!("{}. {}", i + 1, question).cyan())?;
            }
        }
        Suggestions::Help(text) => writeln!(out, "{}", text.cyan())?,
    }
    Ok(())
}

fn stats(memory: &MemoryStore) -> Result<()> {
    let mut out = io::stdout();
    let record = memory.record();

    writeln!(out, "Almacén: {}", memory.path().display())?;
    writeln!(out, "Conversaciones guardadas: {}", record.transcripts.len())?;

    writeln!(out, "\nPreguntas frecuentes:")?;
    let questions = memory.suggestions(record.frequencies.len());
    if questions.is_empty() {
        writeln!(out, "  (ninguna)")?;
    }
    for question in questions {
        if let Some(entry) = memory.frequency(&question) {
            writeln!(out, "  {:>4}  [{}] {}", entry.count, entry.topic, question)?;
        }
    }

    writeln!(out, "\nEaster eggs descubiertos: {}", record.unlocked.len())?;
    for id in &record.unlocked {
        writeln!(out, "  {}", id)?;
    }

    writeln!(out, "\nValoraciones:")?;
    for topic in Topic::ALL {
        let fb = memory.feedback(topic);
        if fb.positive + fb.negative > 0 {
            writeln!(out, "  {:<18} +{} / -{}", topic, fb.positive, fb.negative)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(suggestions: &Suggestions) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_suggestions(&mut out, suggestions).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_popular_questions_are_numbered() {
        let text = render(&Suggestions::Popular {
            header: "Populares:".into(),
            questions: vec!["¿qué es un registro?".into(), "¿quién era bach?".into()],
        });
        assert_eq!(text, "\nPopulares:\n1. ¿qué es un registro?\n2. ¿quién era bach?\n");
    }

    #[test]
    fn test_help_suggestion_printed_verbatim() {
        assert_eq!(render(&Suggestions::Help("ayuda".into())), "\nayuda\n");
    }
}
