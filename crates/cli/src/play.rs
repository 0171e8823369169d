//! Interactive game screens.
//!
//! Each screen drives one game state machine from stdin, runs its effects
//! through the app's stores, and sends assistant requests through the
//! game so late replies are dropped.

use anyhow::Result;
use wordjar_core::{PartOfSpeech, StarCategory, Word};
use wordjar_games::{
    Answer, ChallengeGame, Effect, Feedback, GameError, Hint, LetterMark, PosFeedback, PosGame,
    SentenceFeedback, SentenceGame, SpellingFeedback, SpellingGame, SpellingMode, Stage,
};
use crate::app::App;
use crate::console::{encouragement, print_summary, Console, Titles};

const SPELLING_TITLES: Titles = ["Amazing! 🎉", "Great Job! 🌟", "Good Try! 👏", "Keep Practicing! 💪"];
const POS_TITLES: Titles = ["Word Type Master! 🎉", "Great Job! 🌟", "Good Try! 👏", "Keep Learning! 💪"];
const SENTENCE_TITLES: Titles = ["Sentence Master! 🎉", "Great Writing! 🌟", "Nice Try! 👏", "Keep Writing! 💪"];
const CHALLENGE_TITLES: Titles = ["Champion! 🏆", "Great Job! 🌟", "Good Try! 👏", "Keep Going! 💪"];
const RETRY_TITLES: Titles = ["Retry Results!"; 4];

/// What the learner did with a question.
enum Step {
    Answered,
    Quit,
}

/// Apply store-bound effects and show the rest. Assistant requests are
/// handed back.
async fn run_effects(app: &App, effects: Vec<Effect>) -> Result<Vec<Effect>> {
    let mut requests = Vec::new();
    for effect in app.applier.apply(effects).await? {
        match effect {
            Effect::Celebrate => println!("🎉 🎊 🎉 🎊 🎉"),
            Effect::Speak { text } => println!("🔊 {}", text),
            request @ (Effect::RequestHint { .. } | Effect::RequestReview { .. }) => requests.push(request),
            Effect::AwardStar { .. } | Effect::Retag { .. } => {}
        }
    }
    Ok(requests)
}

fn start_failed(err: GameError) -> Result<()> {
    match err {
        GameError::NotEnoughWords { .. } => {
            println!("{}.", err);
            println!("Add words with `wordjar add`, or set word types with `wordjar fill` or `wordjar edit --pos`.");
            Ok(())
        }
        other => Err(other.into()),
    }
}

fn render_marks(marks: &[LetterMark]) -> String {
    marks
        .iter()
        .map(|m| if m.correct { m.letter.to_string() } else { format!("[{}]", m.letter) })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_spelling(feedback: &SpellingFeedback, app: &mut App) {
    if !feedback.marks.is_empty() {
        println!("   {}", render_marks(&feedback.marks));
    }
    if feedback.correct {
        println!("{}", encouragement(true, &mut app.rng));
    } else {
        println!("{} The word is \"{}\"", encouragement(false, &mut app.rng), feedback.target);
    }
}

fn print_pos(feedback: &PosFeedback, word: &Word, app: &mut App) {
    let expected = feedback.expected;
    if feedback.correct {
        println!(
            "{} \"{}\" is a {} - {}!",
            encouragement(true, &mut app.rng),
            word.word,
            expected.label(),
            expected.description()
        );
    } else {
        println!("{} \"{}\" is a {}", encouragement(false, &mut app.rng), word.word, expected.label());
    }
}

/// Show sentence feedback. Returns whether a result was recorded.
fn print_sentence(feedback: &SentenceFeedback, word: &Word, app: &mut App) -> bool {
    match feedback {
        SentenceFeedback::Empty => {
            println!("Write a sentence first!");
            false
        }
        SentenceFeedback::MissingWord => {
            println!("Try to use the word \"{}\" in your sentence!", word.word);
            false
        }
        SentenceFeedback::Checked { issue: Some(issue), .. } => {
            println!("{}", issue.message(&word.word));
            true
        }
        SentenceFeedback::Checked { issue: None, .. } => {
            println!("{}", encouragement(true, &mut app.rng));
            true
        }
    }
}

fn parse_choice(input: &str) -> Option<PartOfSpeech> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return PartOfSpeech::ALL.get(n.checked_sub(1)?).copied();
    }
    input.parse().ok()
}

fn print_choices() {
    let choices: Vec<String> = PartOfSpeech::ALL
        .iter()
        .enumerate()
        .map(|(i, pos)| format!("{}) {} {}", i + 1, pos.icon(), pos.label()))
        .collect();
    println!("   {}", choices.join("   "));
}

/// Spelling round.
pub async fn spelling(app: &mut App, console: &mut Console, mode: SpellingMode) -> Result<()> {
    let words = app.words.list().await?;
    let mut game = match SpellingGame::start(&words, mode, &mut app.rng) {
        Ok(game) => game,
        Err(e) => return start_failed(e),
    };

    match mode {
        SpellingMode::Practice => println!("Type the word. `?` for a hint, `:quit` to stop."),
        SpellingMode::Test => println!("Spelling test! `:quit` to stop."),
    }

    while let Some(word) = game.current().cloned() {
        println!();
        println!("[{} / {}] {}", game.round().position(), game.round().len(), word.prompt());
        println!("   {}", "_ ".repeat(word.word.chars().count()).trim_end());

        loop {
            let Some(line) = console.ask("✏️  ").await? else {
                return Ok(());
            };
            match line.trim() {
                ":quit" => return Ok(()),
                "" => continue,
                "?" => {
                    let turn = game.hint();
                    match &turn.outcome {
                        Hint::Shown(text) => println!("💡 {}", text),
                        Hint::Requested => println!("💡 Thinking..."),
                        Hint::Unavailable => println!("No more hints for this word."),
                    }
                    for request in run_effects(app, turn.effects).await? {
                        if let Some(reply) = request.ask(app.assistant.as_ref()).await {
                            if let Some(text) = game.accept_assist(&request, reply) {
                                println!("💡 {}", text);
                            }
                        }
                    }
                }
                answer => {
                    let turn = game.submit(answer);
                    if let Some(feedback) = &turn.outcome {
                        print_spelling(feedback, app);
                    }
                    run_effects(app, turn.effects).await?;
                    if let Some(score) = game.score() {
                        println!("Score: {}", score);
                    }
                    break;
                }
            }
        }

        let effects = game.next();
        run_effects(app, effects).await?;
    }

    print_summary(&game.summary(), &SPELLING_TITLES);
    for attempt in game.round().attempts() {
        println!("  {} {}", if attempt.correct { "✅" } else { "🔄" }, attempt.word);
    }
    Ok(())
}

/// Parts-of-speech quiz.
pub async fn pos(app: &mut App, console: &mut Console) -> Result<()> {
    let words = app.words.list().await?;
    let (mut game, effects) = match PosGame::start(&words, &app.guesser, &mut app.rng) {
        Ok(started) => started,
        Err(e) => return start_failed(e),
    };
    if !effects.is_empty() {
        println!("Guessed word types for {} words.", effects.len());
    }
    run_effects(app, effects).await?;

    println!("Pick the word type: a number or a name. `:quit` to stop.");

    while let Some(word) = game.current().cloned() {
        println!();
        println!("[{} / {}] {}  {}", game.round().position(), game.round().len(), word.word, word.meaning);
        print_choices();

        loop {
            let Some(line) = console.ask("🏷️  ").await? else {
                return Ok(());
            };
            match line.trim() {
                ":quit" => return Ok(()),
                input => {
                    let Some(choice) = parse_choice(input) else {
                        println!("Pick 1-4.");
                        continue;
                    };
                    let turn = game.choose(choice);
                    if let Some(feedback) = &turn.outcome {
                        print_pos(feedback, &word, app);
                    }
                    run_effects(app, turn.effects).await?;
                    break;
                }
            }
        }

        let effects = game.next();
        run_effects(app, effects).await?;
    }

    print_summary(&game.summary(), &POS_TITLES);
    for attempt in game.round().attempts() {
        if let wordjar_games::AttemptDetail::Pos { expected, .. } = attempt.detail {
            println!(
                "  {} {} → {} {}",
                if attempt.correct { "✅" } else { "🔄" },
                attempt.word,
                expected.icon(),
                expected.label()
            );
        }
    }
    Ok(())
}

/// Sentence-writing round.
pub async fn sentences(app: &mut App, console: &mut Console) -> Result<()> {
    let words = app.words.list().await?;
    let mut game = match SentenceGame::start(&words, &mut app.rng) {
        Ok(game) => game,
        Err(e) => return start_failed(e),
    };

    println!("Write a sentence using the word.");
    println!("`:example` shows an example, `:start` helps you begin, `:quit` stops.");

    while let Some(word) = game.current().cloned() {
        println!();
        println!("[{} / {}] {}  {}", game.round().position(), game.round().len(), word.word, word.meaning);

        loop {
            let Some(line) = console.ask("💬 ").await? else {
                return Ok(());
            };
            let request = match line.trim() {
                ":quit" => return Ok(()),
                ":example" => game.example(),
                ":start" => game.starter(),
                sentence => {
                    let turn = game.submit(sentence);
                    let recorded = match &turn.outcome {
                        Some(feedback) => print_sentence(feedback, &word, app),
                        None => true,
                    };
                    for request in run_effects(app, turn.effects).await? {
                        if let Some(reply) = request.ask(app.assistant.as_ref()).await {
                            if let Some(review) = game.accept_assist(&request, reply) {
                                println!("🤖 {}", review);
                            }
                        }
                    }
                    if recorded {
                        break;
                    }
                    continue;
                }
            };

            let Some(request) = request else {
                println!("Already used for this word.");
                continue;
            };
            let Some(reply) = request.ask(app.assistant.as_ref()).await else {
                continue;
            };
            if let Some(text) = game.accept_assist(&request, reply) {
                match request {
                    Effect::RequestHint { kind: wordjar_games::HintKind::Example, .. } => {
                        println!("Example: \"{}\"", text)
                    }
                    _ => println!("Start with: {} ...", text),
                }
            }
        }

        let effects = game.next();
        run_effects(app, effects).await?;
    }

    print_summary(&game.summary(), &SENTENCE_TITLES);
    for attempt in game.round().attempts() {
        if let wordjar_games::AttemptDetail::Sentence { text } = &attempt.detail {
            println!("  {} {}: {}", if attempt.correct { "✅" } else { "🔄" }, attempt.word, text);
        }
    }
    Ok(())
}

/// One challenge question.
async fn challenge_question(
    app: &mut App,
    console: &mut Console,
    game: &mut ChallengeGame,
    category: StarCategory,
    word: &Word,
) -> Result<Step> {
    match category {
        StarCategory::Spelling => {
            println!("{}", word.prompt());
            println!("   {}", "_ ".repeat(word.word.chars().count()).trim_end());
        }
        StarCategory::Pos => {
            println!("{}  {}", word.word, word.meaning);
            print_choices();
        }
        StarCategory::Sentences => println!("{}  {}", word.word, word.meaning),
    }

    loop {
        let Some(line) = console.ask(&format!("{}  ", category.icon())).await? else {
            return Ok(Step::Quit);
        };
        let input = line.trim();
        match input {
            ":quit" => return Ok(Step::Quit),
            "" if category != StarCategory::Sentences => continue,
            _ => {}
        }

        let answer = match category {
            StarCategory::Spelling => Answer::Spelling(input.to_string()),
            StarCategory::Pos => match parse_choice(input) {
                Some(choice) => Answer::Pos(choice),
                None => {
                    println!("Pick 1-4.");
                    continue;
                }
            },
            StarCategory::Sentences => Answer::Sentence(input.to_string()),
        };

        let turn = game.answer(answer);
        let recorded = match &turn.outcome {
            Some(Feedback::Spelling(feedback)) => {
                print_spelling(feedback, app);
                true
            }
            Some(Feedback::Pos(feedback)) => {
                print_pos(feedback, word, app);
                true
            }
            Some(Feedback::Sentence(feedback)) => print_sentence(feedback, word, app),
            None => true,
        };
        run_effects(app, turn.effects).await?;
        if recorded {
            return Ok(Step::Answered);
        }
    }
}

/// Three-phase challenge, with retries of missed words.
pub async fn challenge(app: &mut App, console: &mut Console) -> Result<()> {
    let words = app.words.list().await?;
    let (mut game, effects) = match ChallengeGame::start(&words, &app.guesser, &mut app.rng) {
        Ok(started) => started,
        Err(e) => return start_failed(e),
    };
    run_effects(app, effects).await?;

    println!("Challenge! Spelling, word types, then sentences. `:quit` stops.");

    loop {
        match game.stage() {
            Stage::Intro(category) => {
                println!();
                println!("{} {}: {} words", category.icon(), category.label(), game.round().len());
                game.begin();
            }
            Stage::Question(category) => {
                if let Some(word) = game.current().cloned() {
                    println!();
                    println!("{} {} / {}", category.icon(), game.round().position(), game.round().len());
                    if let Step::Quit = challenge_question(app, console, &mut game, category, &word).await? {
                        return Ok(());
                    }
                }
                let effects = game.next();
                run_effects(app, effects).await?;
            }
            Stage::Results => {
                let report = game.report();
                let titles = if report.is_retry { &RETRY_TITLES } else { &CHALLENGE_TITLES };
                print_summary(&report.summary, titles);
                for score in &report.categories {
                    println!("  {} {}: {} / {}", score.category.icon(), score.category.label(), score.correct, score.total);
                }
                println!();
                for result in &report.words {
                    let marks: Vec<String> = StarCategory::ALL
                        .iter()
                        .map(|c| {
                            let mark = if result.get(*c) == Some(true) { "✅" } else { "❌" };
                            format!("{} {}", mark, c.icon())
                        })
                        .collect();
                    println!("  {:<12} {}", result.word, marks.join("  "));
                }

                if report.retry_words == 0 {
                    return Ok(());
                }
                let question = format!("Retry wrong ones ({} words)?", report.retry_words);
                if !console.confirm(&question).await? {
                    return Ok(());
                }
                let current = app.words.list().await?;
                if !game.retry(&current, &mut app.rng) {
                    println!("Nothing left to retry.");
                    return Ok(());
                }
            }
        }
    }
}
