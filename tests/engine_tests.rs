use bunagram::{
    load_engine, Dictionary, Engine, EngineConfig, EngineError, EngineRegistry, Signature, Verdict,
    WordSource,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;

fn get_test_engine() -> Engine {
    let dict: Dictionary = ["listen", "silent", "enlist", "cat"].into_iter().collect();
    Engine::with_seed("test", dict, 17).unwrap()
}

#[test]
fn test_example_scenario() {
    let engine = get_test_engine();

    for _ in 0..10 {
        let pick = engine.pick().unwrap();
        assert!(["listen", "silent", "enlist"].contains(&pick.base.as_str()));
    }

    assert!(engine.check("listen", "silent"));
    assert!(!engine.check("listen", "cat"));
    assert_eq!(engine.judge("listen", "cat"), Verdict::LengthMismatch);
    assert!(!engine.check("listen", "xyz"));
}

#[test]
fn test_check_base_against_itself() {
    let engine = get_test_engine();
    assert!(engine.check("listen", "listen"));
    assert!(engine.check("cat", "cat"));
}

#[test]
fn test_check_ignores_case_and_whitespace() {
    let engine = get_test_engine();
    assert!(engine.check("listen", "  SILENT "));
    assert!(engine.check("listen", "Enlist\n"));
    assert!(engine.check("listen", "\tsIlEnT"));
}

#[test]
fn test_judge_reasons() {
    let engine = get_test_engine();
    assert_eq!(engine.judge("listen", "silent"), Verdict::Correct);
    assert_eq!(engine.judge("listen", "   "), Verdict::Empty);
    assert_eq!(engine.judge("listen", "sil3nt"), Verdict::NotAlphabetic);
    assert_eq!(engine.judge("listen", "si lent"), Verdict::NotAlphabetic);
    assert_eq!(engine.judge("listen", "tinsel"), Verdict::NotInDictionary);
    assert_eq!(engine.judge("listen", "listens"), Verdict::LengthMismatch);
}

#[test]
fn test_same_length_non_anagram_rejected() {
    let dict = Dictionary::parse("listen\nsilent\nbanana\ncat\ntac");
    let engine = Engine::with_seed("test", dict, 1).unwrap();
    assert_eq!(engine.judge("listen", "banana"), Verdict::NotAnagram);
    assert!(!engine.check("listen", "banana"));
}

#[test]
fn test_real_anagram_outside_dictionary_rejected() {
    let engine = get_test_engine();
    // "tinsel" is an anagram of "listen" but the word list does not have it
    assert!(!engine.check("listen", "tinsel"));
}

#[test]
fn test_engine_requires_playable_group() {
    let dict = Dictionary::parse("cat\ndog\nbird");
    assert!(matches!(
        Engine::new("tiny", dict),
        Err(EngineError::NoPlayableGroups)
    ));
    assert!(matches!(
        Engine::new("empty", Dictionary::default()),
        Err(EngineError::NoPlayableGroups)
    ));
}

#[test]
fn test_puzzle() {
    let engine = get_test_engine();
    for _ in 0..20 {
        let puzzle = engine.puzzle().unwrap();
        assert_eq!(puzzle.difficulty, "test");
        assert_ne!(puzzle.scrambled, puzzle.base);
        assert_eq!(Signature::of(&puzzle.scrambled), Signature::of(&puzzle.base));
        assert_eq!(puzzle.signature, Signature::of(&puzzle.base));

        let example = puzzle.example.unwrap();
        assert_ne!(example, puzzle.base);
        assert!(engine.check(&puzzle.base, &example));
    }
}

#[test]
fn test_example_lookup() {
    let engine = get_test_engine();
    let example = engine.example("listen").unwrap();
    assert!(example == "silent" || example == "enlist");
    assert_eq!(engine.example("cat"), None);
    assert_eq!(engine.example("dog"), None);
}

#[test]
fn test_reset_starts_new_cycle() {
    let dict = Dictionary::parse("tea\neat\npots\nstop\nevil\nlive");
    let engine = Engine::with_seed("test", dict, 8).unwrap();

    let first = engine.pick().unwrap().signature;
    engine.reset();
    let mut seen = HashSet::new();
    for _ in 0..3 {
        assert!(seen.insert(engine.pick().unwrap().signature));
    }
    assert!(seen.contains(&first));
}

#[test]
fn test_concurrent_picks_never_double_issue() {
    let engine = Arc::new(Engine::new("medium", bunagram::load_builtin("medium").unwrap()).unwrap());
    let playable = engine.index().playable_count();
    let threads = 4;
    let per_thread = playable / threads;

    let seen = Arc::new(Mutex::new(Vec::new()));
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let seen = Arc::clone(&seen);
            thread::spawn(move || {
                for _ in 0..per_thread {
                    let signature = engine.pick().unwrap().signature;
                    seen.lock().unwrap().push(signature);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let seen = seen.lock().unwrap();
    let unique: HashSet<&Signature> = seen.iter().collect();
    assert_eq!(seen.len(), threads * per_thread);
    assert_eq!(unique.len(), seen.len());
}

#[test]
fn test_builtin_registry() {
    let registry = EngineRegistry::load(&EngineConfig::builtin().with_seed(5)).unwrap();
    let names: Vec<&str> = registry.difficulties().collect();
    assert_eq!(names, vec!["easy", "hard", "medium"]);

    for name in names {
        let engine = registry.engine(name).unwrap();
        assert_eq!(engine.difficulty(), name);
        assert!(engine.index().playable_count() > 0);
        let pick = engine.pick().unwrap();
        assert!(engine.check(&pick.base, &pick.anagrams[1]));
    }
}

#[test]
fn test_unknown_difficulty() {
    let registry = EngineRegistry::load(&EngineConfig::builtin()).unwrap();
    assert!(matches!(
        registry.engine("nightmare"),
        Err(EngineError::UnknownDifficulty(name)) if name == "nightmare"
    ));
    assert!(matches!(
        load_engine(&EngineConfig::builtin(), "nightmare"),
        Err(EngineError::UnknownDifficulty(_))
    ));
}

#[test]
fn test_custom_sources() {
    let config = EngineConfig::new()
        .with_source("tiny", WordSource::Embedded("tea\neat\nate"))
        .with_source("missing", WordSource::File("/no/such/dir/words.txt".into()));

    let engine = load_engine(&config, "tiny").unwrap();
    assert_eq!(engine.dictionary().len(), 3);

    assert!(matches!(
        load_engine(&config, "missing"),
        Err(EngineError::Load { .. })
    ));
    assert!(EngineRegistry::load(&config).is_err());
}

#[test]
fn test_unplayable_source_fails_registry() {
    let config = EngineConfig::new().with_source("flat", WordSource::Embedded("cat\ndog"));
    assert!(matches!(
        EngineRegistry::load(&config),
        Err(EngineError::NoPlayableGroups)
    ));
}

#[test]
fn test_seeded_config_is_deterministic() {
    let config = EngineConfig::builtin().with_seed(2024);
    let a = load_engine(&config, "easy").unwrap();
    let b = load_engine(&config, "easy").unwrap();
    for _ in 0..10 {
        assert_eq!(a.puzzle().unwrap(), b.puzzle().unwrap());
    }
}
