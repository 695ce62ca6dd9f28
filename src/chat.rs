//! Interactive terminal front end.
//!
//! Owns one [`ConversationState`] for the session and drives it turn by
//! turn: menu photos in, bounded clarifying questions, final ranked
//! recommendation. Nothing is persisted; quitting ends the conversation.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use image::DynamicImage;
use tracing::warn;

use ai_llm_service::ChatCompletion;
use menu_advisor::conversation::transcript;
use menu_advisor::{ConversationState, Stage, StartOutcome, TurnOutcome};

const DEFAULT_LANGUAGE: &str = "English";

/// Runs one conversation to completion (or until stdin closes).
pub async fn run(llm: &dyn ChatCompletion) -> anyhow::Result<()> {
    println!(
        "{}",
        "Not sure what to order? Let the advisor recommend!".bold()
    );

    let language = match prompt_line(&format!("Conversation language [{DEFAULT_LANGUAGE}]: "))? {
        Some(line) if !line.is_empty() => line,
        Some(_) => DEFAULT_LANGUAGE.to_string(),
        None => return Ok(()),
    };

    let mut state = ConversationState::new(&language);

    // Keep asking for photos until extraction yields dishes.
    loop {
        let Some(line) = prompt_line("Menu photo path(s), space-separated: ")? else {
            return Ok(());
        };

        let images = match load_images(&line) {
            Ok(images) => images,
            Err(message) => {
                println!("{}", message.yellow());
                continue;
            }
        };

        match state.start(llm, &language, &images).await {
            Ok(StartOutcome::Started(question)) => {
                print_bot(&question);
                break;
            }
            Ok(StartOutcome::NoImages) => {
                println!("{}", "Please upload menu photo(s).".yellow());
            }
            Ok(StartOutcome::NoDishes) => {
                println!("{}", "Couldn't parse dishes.".yellow());
            }
            Err(e) => {
                warn!(error = %e, "failed to start conversation");
                println!("{}", format!("Something went wrong: {e}").red());
            }
        }
    }

    while state.stage == Stage::Asking {
        let Some(answer) = prompt_line(&format!("{} ", "you:".green().bold()))? else {
            return Ok(());
        };
        if answer.is_empty() {
            continue;
        }

        match state.submit_answer(llm, &answer).await {
            Ok(TurnOutcome::Question(question)) => print_bot(&question),
            Ok(TurnOutcome::Recommendation(recommendation)) => print_bot(&recommendation),
            Ok(TurnOutcome::Ignored) => {}
            Err(e) => {
                // The answer was rolled back; the turn can simply be retried.
                warn!(error = %e, "turn failed");
                println!("{}", format!("Something went wrong, try again: {e}").red());
            }
        }
    }

    print_recap(&state);
    Ok(())
}

fn print_bot(text: &str) {
    println!("{} {}", "advisor:".cyan().bold(), text);
}

/// Full conversation recap, rendered from the accumulated history.
fn print_recap(state: &ConversationState) {
    println!();
    println!("{}", "--- conversation recap ---".dimmed());
    for (user_line, bot_line) in transcript(&state.qa) {
        if let Some(user_line) = user_line {
            println!("{} {}", "you:".green().bold(), user_line);
        }
        println!("{} {}", "advisor:".cyan().bold(), bot_line);
    }
}

/// Prints a prompt and reads one trimmed line; `None` once stdin closes.
fn prompt_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Decodes every whitespace-separated path into an image.
fn load_images(line: &str) -> Result<Vec<DynamicImage>, String> {
    let mut images = Vec::new();
    for path in line.split_whitespace() {
        let image =
            image::open(path).map_err(|e| format!("Could not read image {path}: {e}"))?;
        images.push(image);
    }
    Ok(images)
}
