//! Bunagram CLI
//!
//! Interactive anagram game plus one-shot `pick`, `check` and `stats` commands.

use anyhow::{bail, Context, Result};
use bunagram::{load_engine, Engine, EngineConfig, EngineRegistry, Puzzle};
use std::io::{self, BufRead, Write};

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const USAGE_TEXT: &str = include_str!("text/usage.txt");

const DEFAULT_DIFFICULTY: &str = "easy";

fn print_banner() {
    for line in BANNER_TEXT.lines().take(5) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

fn print_puzzle(puzzle: &Puzzle) {
    println!();
    println!("[{}] Unscramble: {}", puzzle.difficulty, puzzle.scrambled.to_uppercase());
}

fn print_stats(engine: &Engine) {
    let index = engine.index();
    println!();
    println!("Difficulty: {}", engine.difficulty());
    println!("Words: {}", index.word_count());
    println!("Anagram groups: {}", index.group_count());
    println!("Playable groups: {}", index.playable_count());
    println!();
    println!("Group sizes:");

    let distribution = index.size_distribution();
    let total: usize = distribution.iter().map(|(_, c)| c).sum();
    for (size, count) in &distribution {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        println!("  {:>2} words: {:>5} ({:>5.1}%) {}", size, count, pct, bar);
    }
    println!();
}

/// Read one trimmed line; `None` on end of input.
fn prompt(stdin: &io::Stdin, text: &str) -> Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn run_interactive(registry: &EngineRegistry, difficulty: &str) -> Result<()> {
    print_banner();

    let mut engine = registry.engine(difficulty)?;
    println!(
        "Loaded {} words, {} puzzles ({}).",
        engine.dictionary().len(),
        engine.index().playable_count(),
        engine.difficulty()
    );
    println!("Type a guess, 'skip' to move on, or 'help' for commands.");

    let stdin = io::stdin();
    let mut score = 0u32;
    let mut puzzle = engine.puzzle()?;
    print_puzzle(&puzzle);

    loop {
        let line = match prompt(&stdin, "Your guess: ")? {
            Some(line) => line,
            None => break,
        };

        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = parts.first().map(|p| p.to_lowercase()).unwrap_or_default();

        match command.as_str() {
            "" => {
                println!("Please enter a guess (or 'quit' to exit).");
            }
            "help" | "h" | "?" => {
                print_help();
                continue;
            }
            "quit" | "exit" | "q" => break,
            "stats" => {
                print_stats(engine);
                continue;
            }
            "hint" => {
                match &puzzle.example {
                    Some(example) => println!("Starts with '{}'.", &example[..1].to_uppercase()),
                    None => println!("No hint available."),
                }
                continue;
            }
            "difficulty" | "d" => {
                let Some(name) = parts.get(1) else {
                    let names: Vec<&str> = registry.difficulties().collect();
                    println!("Usage: difficulty <{}>", names.join("|"));
                    continue;
                };
                match registry.engine(name) {
                    Ok(next) => {
                        engine = next;
                        puzzle = engine.puzzle()?;
                        print_puzzle(&puzzle);
                    }
                    Err(e) => println!("{}", e),
                }
                continue;
            }
            "skip" | "s" => {
                println!(
                    "The word was {}.",
                    puzzle.example.as_deref().unwrap_or(&puzzle.base).to_uppercase()
                );
            }
            _ => {
                let verdict = engine.judge(&puzzle.base, &line);
                if verdict.is_correct() {
                    score += 1;
                    println!("✓ Correct! You earn 1 point.");
                } else {
                    println!(
                        "✗ Wrong ({}). Example valid anagram: {}",
                        verdict,
                        puzzle.example.as_deref().unwrap_or("(none)").to_uppercase()
                    );
                }
            }
        }

        println!("Score: {}", score);
        match prompt(&stdin, "Play again? (y/n) ")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => {
                puzzle = engine.puzzle()?;
                print_puzzle(&puzzle);
            }
            _ => break,
        }
    }

    println!();
    println!("Final score: {}. Bye!", score);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let config = EngineConfig::from_env();

    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE_TEXT);
            }
            "--difficulty" | "-d" => {
                let difficulty = args.get(2).context("--difficulty needs a value")?;
                let registry = EngineRegistry::load(&config).context("failed to load dictionaries")?;
                run_interactive(&registry, difficulty)?;
            }
            "pick" => {
                let difficulty = args.get(2).map_or(DEFAULT_DIFFICULTY, String::as_str);
                let engine = load_engine(&config, difficulty)?;
                let puzzle = engine.puzzle()?;

                println!("Difficulty: {}", puzzle.difficulty);
                println!("Scrambled: {}", puzzle.scrambled);
                println!("Base: {}", puzzle.base);
                if let Some(example) = &puzzle.example {
                    println!("Example: {}", example);
                }
            }
            "check" => {
                if args.len() < 4 {
                    bail!("Usage: bunagram check <base> <guess> [<difficulty>]");
                }
                let difficulty = args.get(4).map_or(DEFAULT_DIFFICULTY, String::as_str);
                let engine = load_engine(&config, difficulty)?;

                let verdict = engine.judge(&args[2], &args[3]);
                println!("{}", verdict);
                if !verdict.is_correct() {
                    if let Some(example) = engine.example(&args[2]) {
                        println!("Example valid anagram: {}", example);
                    }
                    std::process::exit(1);
                }
            }
            "stats" => {
                let difficulty = args.get(2).map_or(DEFAULT_DIFFICULTY, String::as_str);
                let engine = load_engine(&config, difficulty)?;
                print_stats(&engine);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    } else {
        let registry = EngineRegistry::load(&config).context("failed to load dictionaries")?;
        run_interactive(&registry, DEFAULT_DIFFICULTY)?;
    }

    Ok(())
}
