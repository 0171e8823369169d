//! WordJar CLI - a vocabulary jar for young learners.

mod app;
mod console;
mod play;

use std::path::PathBuf;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;
use wordjar_ai::AssistConfig;
use wordjar_core::{AiProvider, OverallProgress, PartOfSpeech, Word, MAX_STARS_PER_CATEGORY};
use wordjar_games::SpellingMode;
use wordjar_progress::{evaluate, star_bar};
use wordjar_storage::Storage;
use wordjar_words::{FillOutcome, FillSource, WordError, WordUpdate};
use crate::app::App;
use crate::console::Console;

#[derive(Parser)]
#[command(name = "wordjar")]
#[command(about = "Collect English words and practice them with mini-games", long_about = None)]
struct Cli {
    /// Data directory
    #[arg(long, env = "WORDJAR_DATA", default_value = ".wordjar")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a word
    Add {
        /// The word
        word: String,
        /// Its meaning
        meaning: Option<String>,
    },
    /// Add many words, one per line ("word, meaning", "word - meaning" or "word")
    Bulk {
        /// File to read (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// List words
    List,
    /// Edit a word
    Edit {
        /// Word to edit
        word: String,
        /// New spelling
        #[arg(long = "word")]
        new_word: Option<String>,
        /// New meaning
        #[arg(long)]
        meaning: Option<String>,
        /// New word type (noun, verb, adjective, adverb; "none" clears it)
        #[arg(long)]
        pos: Option<String>,
        /// New example sentence
        #[arg(long)]
        example: Option<String>,
    },
    /// Delete a word and its stars
    Delete {
        /// Word to delete
        word: String,
    },
    /// Fill in a word's meaning, type and example
    Fill {
        /// Word to fill
        word: String,
    },
    /// Show stars and per-word progress
    Progress,
    /// Show badges
    Badges,
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
    /// Delete all words, stars, streak and settings
    Reset {
        /// Confirm
        #[arg(long)]
        yes: bool,
    },
    /// Play a game
    Play {
        #[command(subcommand)]
        game: Game,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Change settings (asks a parents-only question first)
    Set {
        /// Turn AI help on or off
        #[arg(long, value_parser = clap::builder::BoolishValueParser::new())]
        ai: Option<bool>,
        /// AI provider (gemini or claude)
        #[arg(long)]
        provider: Option<AiProvider>,
        /// Provider API key
        #[arg(long)]
        api_key: Option<String>,
    },
}

#[derive(Subcommand)]
enum Game {
    /// Spell words from their meaning
    Spelling {
        /// Test mode: no hints, keeps score
        #[arg(long)]
        test: bool,
    },
    /// Pick each word's type
    Pos,
    /// Write sentences with each word
    Sentences,
    /// Spelling, word types and sentences in a row
    Challenge,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut app = App::open(&cli.data, AssistConfig::from_env()).await?;
    let streak = app.streak.touch_today().await?;

    match cli.command {
        Commands::Add { word, meaning } => {
            match app.words.add(&word, meaning.as_deref().unwrap_or_default()).await {
                Ok(word) => println!("Added \"{}\"", word.word),
                Err(e @ (WordError::EmptyWord | WordError::DuplicateWord(_))) => println!("{}", e),
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Bulk { file } => {
            let text = match file {
                Some(path) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("reading {}", path.display()))?,
                None => {
                    let mut text = String::new();
                    tokio::io::stdin().read_to_string(&mut text).await?;
                    text
                }
            };
            let report = app.words.add_bulk(&text).await?;
            println!("Added {} words", report.added.len());
            if !report.rejected.is_empty() {
                println!("Skipped {} (empty or already in the list):", report.rejected.len());
                for line in report.rejected {
                    println!("  {}", line);
                }
            }
        }
        Commands::List => {
            let words = app.words.list().await?;
            if words.is_empty() {
                println!("No words yet. Add one with `wordjar add <word> <meaning>`.");
            }
            println!("My Words ({})", words.len());
            for word in words {
                print_word(&word);
            }
        }
        Commands::Edit { word, new_word, meaning, pos, example } => {
            let target = find(&app, &word).await?;
            let pos = match pos.as_deref() {
                None => None,
                Some("none" | "") => Some(None),
                Some(name) => Some(Some(name.parse::<PartOfSpeech>()?)),
            };
            let changes = WordUpdate { word: new_word, meaning, pos, example };
            match app.words.update(target.id, changes).await {
                Ok(word) => print_word(&word),
                Err(e @ (WordError::EmptyWord | WordError::DuplicateWord(_))) => println!("{}", e),
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Delete { word } => {
            let target = find(&app, &word).await?;
            app.words.remove(target.id).await?;
            println!("Deleted \"{}\"", target.word);
        }
        Commands::Fill { word } => {
            let target = find(&app, &word).await?;
            match app.filler().fill(&app.words, target.id).await? {
                FillOutcome::Filled { word, source } => {
                    match source {
                        FillSource::Dictionary => println!("Filled \"{}\" from the dictionary 📚", word.word),
                        FillSource::Remote | FillSource::Guess => println!("AI filled \"{}\" 🤖", word.word),
                    }
                    print_word(&word);
                }
                FillOutcome::AlreadyComplete => println!("\"{}\" is already complete ✅", target.word),
                FillOutcome::NeedsManualEntry { prefill } => {
                    println!("Could not find details for \"{}\". Fill them in with `wordjar edit`:", target.word);
                    println!("  meaning: {}", prefill.meaning);
                    println!("  type:    {}", prefill.pos.map(|p| p.label()).unwrap_or("-"));
                    println!("  example: {}", prefill.example);
                }
            }
        }
        Commands::Progress => {
            let stats = app.stats.collect().await?;
            println!("📚 Words: {}", stats.total_words);
            println!("⭐ Stars: {}", stats.total_stars);
            println!("🏆 Mastered: {}", stats.mastered);
            println!("🔥 Streak: {} days", stats.streak);

            let OverallProgress { stars, max_stars, percent } = stats.overall();
            if max_stars > 0 {
                println!("{} / {} stars ({}%)", stars, max_stars, percent);
            } else {
                println!("Add words to start!");
            }

            for row in app.stats.report().await? {
                println!(
                    "  {:<12} ✏️ {}  🏷️ {}  💬 {}",
                    row.word,
                    star_bar(row.stars.spelling, MAX_STARS_PER_CATEGORY),
                    star_bar(row.stars.pos, MAX_STARS_PER_CATEGORY),
                    star_bar(row.stars.sentences, MAX_STARS_PER_CATEGORY),
                );
            }
        }
        Commands::Badges => {
            let stats = app.stats.collect().await?;
            for status in evaluate(&stats) {
                let badge = status.badge;
                if status.earned {
                    println!("  {} {}", badge.icon, badge.name);
                } else {
                    println!("  🔒 {}", badge.name);
                }
            }
        }
        Commands::Settings { action: None } => {
            let settings = app.storage.load_settings().await?;
            println!("AI help:  {}", if settings.ai_enabled { "on" } else { "off" });
            println!("Provider: {}", settings.ai_provider);
            let key = if settings.api_key.is_empty() { "(not set)" } else { "(set)" };
            println!("{}: {}", settings.ai_provider.key_label(), key);
        }
        Commands::Settings { action: Some(SettingsAction::Set { ai, provider, api_key }) } => {
            let mut console = Console::new();
            if !console.parental_gate(&mut app.rng).await? {
                bail!("Wrong answer");
            }
            let mut settings = app.storage.load_settings().await?;
            if let Some(ai) = ai {
                settings.ai_enabled = ai;
            }
            if let Some(provider) = provider {
                settings.ai_provider = provider;
            }
            if let Some(key) = api_key {
                settings.api_key = key.trim().to_string();
            }
            app.storage.save_settings(&settings).await?;
            println!("Settings saved");
        }
        Commands::Reset { yes } => {
            if !yes {
                bail!("This deletes ALL data and cannot be undone. Run again with --yes.");
            }
            app.words.reset_all().await?;
            println!("All data deleted");
        }
        Commands::Play { game } => {
            if streak > 1 {
                println!("🔥 {} day streak!", streak);
            }
            let mut console = Console::new();
            match game {
                Game::Spelling { test } => {
                    let mode = if test { SpellingMode::Test } else { SpellingMode::Practice };
                    play::spelling(&mut app, &mut console, mode).await?;
                }
                Game::Pos => play::pos(&mut app, &mut console).await?,
                Game::Sentences => play::sentences(&mut app, &mut console).await?,
                Game::Challenge => play::challenge(&mut app, &mut console).await?,
            }
        }
    }

    Ok(())
}

async fn find(app: &App, word: &str) -> Result<Word> {
    match app.words.find(word).await? {
        Some(word) => Ok(word),
        None => bail!("No word \"{}\" in the list", word.trim()),
    }
}

fn print_word(word: &Word) {
    let pos = word
        .pos
        .map(|p| format!(" [{} {}]", p.icon(), p.label()))
        .unwrap_or_default();
    println!("  {}{}  {}", word.word, pos, word.meaning);
    if !word.example.is_empty() {
        println!("      \"{}\"", word.example);
    }
}
