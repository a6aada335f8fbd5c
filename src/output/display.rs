//! Display functions for rounds and command results

use super::formatters::{display_mask, hearts_row, spaced_word};
use crate::commands::ReplayResult;
use crate::core::{GameState, GuessOutcome, Mascot, Phase, WordEntry};
use crate::game::Statistics;
use colored::Colorize;
use std::io::{self, Write};

pub const TITLE: &str = "PsiCACOlogia";
pub const TIP_LABEL: &str = "Dica da Ingra";
pub const WIN_MESSAGE: &str = "Aí se garante!";
pub const LOSS_MESSAGE: &str = "Vixe. Errou...";
pub const ANSWER_LABEL: &str = "A resposta era:";

/// Print the board for the current round
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_round(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    let mascot = Mascot::for_round(state);

    writeln!(out)?;
    writeln!(out, "  {}", mascot.face().bright_yellow())?;
    writeln!(
        out,
        "  {}",
        hearts_row(state.remaining_attempts(), state.max_attempts()).red()
    )?;

    if state.is_game_over() {
        return write_round_end(out, state);
    }

    writeln!(
        out,
        "\n  {} {}",
        format!("{TIP_LABEL}:").bright_magenta(),
        state.tip().italic()
    )?;
    writeln!(out, "\n  {}\n", display_mask(state).bright_white().bold())?;
    Ok(())
}

/// Print the win/loss banner and the answer
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_round_end(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    let answer = spaced_word(state.word());

    writeln!(out)?;
    match state.phase() {
        Phase::Won => {
            writeln!(out, "  {}", WIN_MESSAGE.green().bold())?;
            writeln!(out, "\n  {}", ANSWER_LABEL.bright_black())?;
            writeln!(out, "  {}\n", answer.green().bold())?;
        }
        Phase::Lost => {
            writeln!(out, "  {}", LOSS_MESSAGE.red().bold())?;
            writeln!(out, "\n  {}", ANSWER_LABEL.bright_black())?;
            writeln!(out, "  {}\n", answer.red().bold())?;
        }
        Phase::Playing => {}
    }
    Ok(())
}

/// One-line description of a guess outcome
#[must_use]
pub fn describe_outcome(guess: &str, outcome: &GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Correct { revealed } if revealed.len() > 1 => {
            format!("✓ '{guess}' está na palavra (revelou {})", revealed.join(", "))
        }
        GuessOutcome::Correct { .. } => format!("✓ '{guess}' está na palavra"),
        GuessOutcome::Repeated => format!("• '{guess}' já foi encontrada"),
        GuessOutcome::Wrong if guess.is_empty() => "✗ Nenhuma letra informada".to_string(),
        GuessOutcome::Wrong => format!("✗ '{guess}' não está na palavra"),
        GuessOutcome::Ignored => "A rodada já terminou".to_string(),
    }
}

/// Colored version of [`describe_outcome`]
#[must_use]
pub fn outcome_line(guess: &str, outcome: &GuessOutcome) -> String {
    let text = describe_outcome(guess, outcome);
    match outcome {
        GuessOutcome::Correct { .. } => text.green().to_string(),
        GuessOutcome::Repeated | GuessOutcome::Ignored => text.yellow().to_string(),
        GuessOutcome::Wrong => text.red().to_string(),
    }
}

/// Print session statistics
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_statistics(out: &mut impl Write, stats: &Statistics) -> io::Result<()> {
    writeln!(
        out,
        "  Rodadas: {} | Vitórias: {} ({:.0}%) | Sequência: {} (melhor {})",
        stats.rounds_played,
        stats.rounds_won,
        stats.win_rate(),
        stats.current_streak,
        stats.best_streak
    )
}

/// Print the result of a replay
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replaying: {} ({} attempts)",
        result.word.to_uppercase().bright_yellow().bold(),
        result.max_attempts
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\n{:>2}. {:<8} {}",
            i + 1,
            format!("'{}'", step.guess),
            outcome_line(&step.guess, &step.outcome)
        );
        println!(
            "    {}  {}  {}",
            step.mask.to_uppercase().bright_white().bold(),
            hearts_row(step.remaining_attempts, result.max_attempts).red(),
            step.mascot.face().bright_black()
        );
    }

    println!();
    match result.phase {
        Phase::Won => println!(
            "{}",
            format!(
                "✅ {WIN_MESSAGE} {} attempt(s) left",
                result.remaining_attempts
            )
            .green()
            .bold()
        ),
        Phase::Lost => println!(
            "{}",
            format!("❌ {LOSS_MESSAGE} {ANSWER_LABEL} {}", result.word.to_uppercase())
                .red()
                .bold()
        ),
        Phase::Playing => println!(
            "{}",
            format!(
                "⏸  Round still open: {} attempt(s) left",
                result.remaining_attempts
            )
            .yellow()
        ),
    }
}

/// Print the active word list
pub fn print_word_list(words: &[WordEntry]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", format!("{TITLE}: {} palavras", words.len()).bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (i, entry) in words.iter().enumerate() {
        println!(
            "\n{:>3}. {} ({} letras)",
            i + 1,
            entry.word().to_uppercase().bright_yellow().bold(),
            entry.letter_count()
        );
        if !entry.tip().is_empty() {
            println!("     {}", entry.tip().italic());
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_output(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn describe_outcomes() {
        assert_eq!(
            describe_outcome("e", &GuessOutcome::Correct {
                revealed: vec!["e".into(), "ê".into()]
            }),
            "✓ 'e' está na palavra (revelou e, ê)"
        );
        assert_eq!(
            describe_outcome("x", &GuessOutcome::Wrong),
            "✗ 'x' não está na palavra"
        );
        assert_eq!(
            describe_outcome("", &GuessOutcome::Wrong),
            "✗ Nenhuma letra informada"
        );
        assert_eq!(
            describe_outcome("a", &GuessOutcome::Repeated),
            "• 'a' já foi encontrada"
        );
    }

    #[test]
    fn round_shows_tip_and_mask() {
        let mut state = GameState::new(WordEntry::new("papez", "Dica de teste").unwrap(), 6);
        state.submit_guess("p");

        let text = plain_output(|out| write_round(out, &state));
        assert!(text.contains("Dica de teste"));
        assert!(text.contains("P _ P _ _"));
        assert!(text.contains("♥ ♥ ♥ ♥ ♥ ♥"));
    }

    #[test]
    fn finished_round_reveals_answer() {
        let mut state = GameState::new(WordEntry::new("ri", "segredo").unwrap(), 1);
        state.submit_guess("x");

        let text = plain_output(|out| write_round(out, &state));
        assert!(text.contains(LOSS_MESSAGE));
        assert!(text.contains(ANSWER_LABEL));
        assert!(text.contains("R I"));
        assert!(!text.contains("segredo"));
    }

    #[test]
    fn statistics_line() {
        let stats = Statistics {
            rounds_played: 4,
            rounds_won: 3,
            current_streak: 2,
            best_streak: 2,
        };
        let text = plain_output(|out| write_statistics(out, &stats));
        assert!(text.contains("Rodadas: 4"));
        assert!(text.contains("(75%)"));
    }
}
