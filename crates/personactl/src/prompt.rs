//! Interactive questionnaire prompts.
//!
//! Terminal question flow for the diagnosis session: numbered
//! forced-choice prompts, with a blocking re-ask loop for tie-breakers.

use owo_colors::OwoColorize;
use persona_common::{Question, Selection, TieQuestion};
use std::io::{self, BufRead, Write};

/// Outcome of one prompt: a selection, or the user backing out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Selected(Selection),
    Cancelled,
}

/// Ask one catalog question, numbered `position`/`total`.
pub fn ask_question(question: &Question, position: usize, total: usize) -> io::Result<PromptOutcome> {
    println!();
    println!(
        "{}  {}",
        format!("[{position}/{total}]").bright_cyan().bold(),
        question.text.bright_white()
    );
    ask_choices(&question.choices)
}

/// Ask a tie-break question. No default, no skip: the caller keeps
/// invoking this until it returns a selection or the user cancels the
/// whole session.
pub fn ask_tie_breaker(tie: &TieQuestion) -> io::Result<PromptOutcome> {
    println!();
    println!(
        "{}  {}",
        "tie".yellow().bold(),
        format!("The {} scores are even - one more question.", tie.pair.name()).yellow()
    );
    println!("   {}", tie.text.bright_white());
    ask_choices(&tie.choices)
}

/// Yes/no consent gate shown before the questionnaire starts.
pub fn ask_consent() -> io::Result<bool> {
    println!(
        "Results are stored anonymously and feed the aggregate statistics."
    );
    print!("{}  ", "Continue? [y/N]:".bright_magenta());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let input = input.trim().to_ascii_lowercase();
    Ok(input == "y" || input == "yes")
}

/// Free-text prompt, e.g. for naming a robot.
pub fn ask_line(label: &str) -> io::Result<String> {
    print!("{}  ", label.bright_magenta());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Pick one item from a list by number. Returns the chosen index.
pub fn ask_pick(label: &str, items: &[String]) -> io::Result<Option<usize>> {
    println!();
    println!("   {}", label.bright_white());
    for (i, item) in items.iter().enumerate() {
        println!("   {}  {}", format!("[{}]", i + 1).cyan(), item);
    }
    println!();

    loop {
        print!("   {}  ", "Enter number:".bright_magenta());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        let input = input.trim();

        if input.eq_ignore_ascii_case("cancel") || input.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }

        if let Ok(num) = input.parse::<usize>() {
            if num >= 1 && num <= items.len() {
                return Ok(Some(num - 1));
            }
        }

        println!(
            "   {}  Please enter a number between 1 and {}",
            "!".yellow(),
            items.len()
        );
    }
}

fn ask_choices(choices: &[String; 2]) -> io::Result<PromptOutcome> {
    for (i, choice) in choices.iter().enumerate() {
        println!("   {}  {}", format!("[{}]", i + 1).cyan(), choice);
    }
    println!();

    loop {
        print!("   {}  ", "Enter number:".bright_magenta());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        let input = input.trim();

        if input.eq_ignore_ascii_case("cancel") || input.eq_ignore_ascii_case("quit") {
            return Ok(PromptOutcome::Cancelled);
        }

        match input {
            "1" => return Ok(PromptOutcome::Selected(Selection::First)),
            "2" => return Ok(PromptOutcome::Selected(Selection::Second)),
            _ => {
                println!("   {}  Please enter 1 or 2 (or 'cancel')", "!".yellow());
            }
        }
    }
}
