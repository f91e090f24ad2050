// End-to-end conversations against a real store file in a temp directory.

use orguebot_core::atoms::constants::FIRST_DISCOVERY_SUFFIX;
use orguebot_core::{
    ContentProvider, Engine, EngineConfig, MemoryStore, Role, SpanishOrganContent, Suggestions, Topic,
};
use std::path::Path;

const COMPOSER_QUESTION: &str = "¿Quién escribió la Toccata y fuga?";

fn config(store: &Path) -> EngineConfig {
    EngineConfig { store_path: store.to_path_buf(), ..EngineConfig::default() }
}

#[test]
fn test_composer_question_gets_composer_answer() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = Engine::with_seed(config(&dir.path().join("m.json")), 7).unwrap();
    let mut session = engine.session();

    let reply = session.submit(COMPOSER_QUESTION);
    assert!(!reply.session_ended);
    assert!(SpanishOrganContent.responses(Topic::Composers).contains(&reply.response_text.as_str()));
    assert_eq!(session.context().last_topic, Some(Topic::Composers));
}

#[test]
fn test_hidden_command_discovery_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("m.json");

    {
        let mut engine = Engine::with_seed(config(&store), 1).unwrap();
        let reply = engine.session().submit("b a c h");
        assert!(reply.response_text.ends_with(FIRST_DISCOVERY_SUFFIX));
    }

    let mut engine = Engine::with_seed(config(&store), 1).unwrap();
    assert!(engine.memory().is_unlocked("motivo_bach"));
    let reply = engine.session().submit("B A C H");
    assert!(!reply.response_text.contains(FIRST_DISCOVERY_SUFFIX));
}

#[test]
fn test_every_tenth_counted_question_is_a_milestone() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = Engine::with_seed(config(&dir.path().join("m.json")), 3).unwrap();
    let mut session = engine.session();

    // special inputs and help do not advance the count
    session.submit("modo divertido");
    session.submit("ayuda");
    session.submit("dato curioso");

    for n in 1..=20u32 {
        let reply = session.submit(COMPOSER_QUESTION);
        let is_milestone = reply.response_text.starts_with("¡Pregunta número");
        assert_eq!(is_milestone, n % 10 == 0, "question {n}");
    }
    assert_eq!(session.context().question_count, 20);
}

#[test]
fn test_conversation_round_trips_through_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("m.json");
    {
        let mut engine = Engine::with_seed(config(&store), 11).unwrap();
        let mut session = engine.session();
        session.submit(COMPOSER_QUESTION);
        session.submit(COMPOSER_QUESTION);
        assert!(session.rate_last_answer(true));
        let bye = session.submit("adiós");
        assert!(bye.session_ended);
    }

    let memory = MemoryStore::open(&store);
    let entry = memory.frequency(COMPOSER_QUESTION).unwrap();
    assert_eq!(entry.count, 2);
    assert_eq!(entry.topic, Topic::Composers);
    assert_eq!(memory.feedback(Topic::Composers).positive, 1);

    let transcripts = memory.transcripts();
    assert_eq!(transcripts.len(), 1);
    let turns = &transcripts[0].turns;
    assert_eq!(turns.len(), 6);
    assert_eq!(turns[0].role, Role::User);
    assert_eq!(turns[5].role, Role::Bot);
    assert!(SpanishOrganContent.farewells().contains(&turns[5].text.as_str()));
}

#[test]
fn test_popular_questions_offered_every_five_turns() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = Engine::with_seed(config(&dir.path().join("m.json")), 5).unwrap();
    let mut session = engine.session();

    for _ in 0..3 {
        session.submit(COMPOSER_QUESTION);
    }
    session.submit("Háblame de la historia del órgano");
    assert_eq!(session.context().turns.len(), 8);
    assert!(session.suggestions_due().is_none());

    session.submit("¿Qué es el pedal?");
    assert_eq!(session.context().turns.len(), 10);
    match session.suggestions_due() {
        Some(Suggestions::Popular { header, questions }) => {
            assert_eq!(header, SpanishOrganContent.suggestions_header());
            assert_eq!(questions.len(), 3);
            assert_eq!(questions[0], COMPOSER_QUESTION.to_lowercase());
        }
        other => panic!("expected popular questions, got {other:?}"),
    }
}

#[test]
fn test_help_offered_when_nothing_is_popular_yet() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = Engine::with_seed(config(&dir.path().join("m.json")), 5).unwrap();
    let mut session = engine.session();

    for _ in 0..5 {
        session.submit("xyz");
    }
    match session.suggestions_due() {
        Some(Suggestions::Help(text)) => assert_eq!(text, SpanishOrganContent.help()),
        other => panic!("expected help text, got {other:?}"),
    }
}

#[test]
fn test_corrupt_store_starts_empty_and_is_rewritten() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("m.json");
    std::fs::write(&store, "{ esto no es json").unwrap();

    let mut engine = Engine::with_seed(config(&store), 2).unwrap();
    assert!(engine.memory().transcripts().is_empty());
    engine.session().submit(COMPOSER_QUESTION);

    let reloaded = MemoryStore::try_load(&store).unwrap();
    assert_eq!(reloaded.frequencies.len(), 1);
}

#[test]
fn test_keyword_overrides_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let store = dir.path().join("m.json");
    std::fs::write(
        &config_path,
        format!("store_path = {:?}\n\n[keywords]\nmantenimiento = [\"Zanfona\", \"cromorno\"]\n", store),
    )
    .unwrap();

    let loaded = EngineConfig::load(&config_path).unwrap();
    let engine = Engine::with_seed(loaded, 9).unwrap();
    let ctx = orguebot_core::SessionContext::new();
    assert_eq!(engine.peek_topic("zanfona cromorno", &ctx), Some(Topic::Maintenance));

    let plain = Engine::with_seed(config(&store), 9).unwrap();
    assert_eq!(plain.peek_topic("zanfona cromorno", &ctx), None);
}
