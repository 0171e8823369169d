//! Line-based terminal input and the bits of output every screen shares.

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use wordjar_games::{Summary, Tier};

const CORRECT_MESSAGES: &[&str] = &[
    "Amazing job! 🎉",
    "You did it! ⭐",
    "Wonderful! 🌟",
    "Fantastic! 🎊",
    "Superstar! 🌠",
    "You're getting better! 🌈",
];

const WRONG_MESSAGES: &[&str] = &[
    "So close! Try again! 😊",
    "Almost there! 🚀",
    "Great try! 👏",
    "Keep going! 💪",
];

/// Reads answers from stdin.
pub struct Console {
    lines: Lines<BufReader<Stdin>>,
}

impl Console {
    /// Console over the process's stdin.
    pub fn new() -> Self {
        Self { lines: BufReader::new(tokio::io::stdin()).lines() }
    }

    /// Print `prompt` and read one line. `None` at end of input.
    pub async fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        Ok(self.lines.next_line().await?)
    }

    /// Ask a yes/no question; anything but `y`/`yes` is no.
    pub async fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("{} [y/N] ", question)).await?;
        Ok(matches!(answer.as_deref().map(str::trim), Some("y" | "Y" | "yes")))
    }

    /// Multiplication question that keeps settings away from small hands.
    pub async fn parental_gate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<bool> {
        let a: u32 = rng.gen_range(3..13);
        let b: u32 = rng.gen_range(3..13);
        let answer = self.ask(&format!("Parents only: what is {} × {}? ", a, b)).await?;
        Ok(answer.and_then(|s| s.trim().parse::<u32>().ok()) == Some(a * b))
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// A random cheer or consolation.
pub fn encouragement<R: Rng + ?Sized>(correct: bool, rng: &mut R) -> &'static str {
    let messages = if correct { CORRECT_MESSAGES } else { WRONG_MESSAGES };
    messages.choose(rng).copied().unwrap_or_default()
}

/// Titles for each result tier, best first.
pub type Titles = [&'static str; 4];

/// Print a results screen.
pub fn print_summary(summary: &Summary, titles: &Titles) {
    let title = match summary.tier {
        Tier::Top => titles[0],
        Tier::Mid => titles[1],
        Tier::Low => titles[2],
        Tier::Bottom => titles[3],
    };
    println!();
    println!("{} {}", title, "⭐".repeat(summary.tier.stars() as usize));
    println!(
        "{} / {} correct ({}%)",
        summary.correct, summary.total, summary.percent
    );
}
