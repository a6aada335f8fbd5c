//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one letter per line.

use crate::core::Phase;
use crate::game::{Game, WordSelector};
use crate::output::display::{TITLE, outcome_line, write_round, write_statistics};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: WordSelector>(game: &mut Game<'_, S>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple_with(game, &mut stdin.lock(), &mut stdout)
}

/// Run the simple interactive mode on arbitrary input and output
///
/// Commands: `sair` / `quit` to exit, `novo` / `new` to start a new round.
/// Any other line is a guess and must be a single letter; an empty line is
/// submitted as an empty guess.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<S: WordSelector>(
    game: &mut Game<'_, S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║{:^46}║", format!("{TITLE} - Jogo da Forca"))?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(out, "Adivinhe a palavra, uma letra por vez.")?;
    writeln!(out, "Comandos: 'sair' para sair, 'novo' para uma nova palavra\n")?;

    loop {
        write_round(out, game.state())?;

        if game.state().is_game_over() {
            write_statistics(out, game.stats())?;
            let Some(answer) = prompt(input, out, "Jogar novamente? (s/n)")? else {
                break;
            };
            if matches!(answer.as_str(), "s" | "sim" | "y" | "yes") {
                game.restart();
                writeln!(out, "\n🔄 Nova rodada!")?;
                continue;
            }
            break;
        }

        let Some(line) = prompt(input, out, "Letra")? else {
            break;
        };

        match line.as_str() {
            "sair" | "quit" | "exit" => break,
            "novo" | "new" => {
                game.restart();
                writeln!(out, "\n🔄 Nova rodada!")?;
            }
            guess if guess.chars().count() > 1 => {
                writeln!(out, "{}", "Digite apenas uma letra.".yellow())?;
            }
            guess => {
                let outcome = game.submit_guess(guess);
                writeln!(out, "{}", outcome_line(guess, &outcome))?;
                if game.state().phase() == Phase::Won {
                    writeln!(out, "\n{}", "═".repeat(48).bright_cyan())?;
                }
            }
        }
    }

    writeln!(out, "\n👋 Até a próxima!\n")?;
    Ok(())
}

/// Prompt for one line; `None` at end of input
fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::WordEntry;

    fn run(words: &[WordEntry], script: &str) -> (String, crate::game::Statistics) {
        colored::control::set_override(false);
        let mut game = Game::new(GameConfig::default(), words).unwrap();
        let mut input = io::Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run_simple_with(&mut game, &mut input, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), game.stats().clone())
    }

    fn words() -> Vec<WordEntry> {
        vec![
            WordEntry::new("papez", "Dica um").unwrap(),
            WordEntry::new("racial", "Dica dois").unwrap(),
        ]
    }

    #[test]
    fn win_then_quit() {
        let (text, stats) = run(&words(), "p\na\ne\nz\nn\n");
        assert!(text.contains("Dica um"));
        assert!(text.contains("P A P E _"));
        assert!(text.contains("Aí se garante!"));
        assert!(text.contains("P A P E Z"));
        assert_eq!(stats.rounds_won, 1);
    }

    #[test]
    fn play_again_moves_to_next_word() {
        let (text, stats) = run(&words(), "p\na\ne\nz\ns\nsair\n");
        assert!(text.contains("Nova rodada"));
        assert!(text.contains("Dica dois"));
        assert_eq!(stats.rounds_played, 1);
    }

    #[test]
    fn multi_letter_input_is_rejected() {
        let (text, _) = run(&words(), "pa\nsair\n");
        assert!(text.contains("Digite apenas uma letra."));
        assert!(text.contains("♥ ♥ ♥ ♥ ♥ ♥"));
    }

    #[test]
    fn loss_reveals_answer() {
        let (text, stats) = run(&words(), "x\nw\nk\nq\nj\nv\nn\n");
        assert!(text.contains("Vixe. Errou..."));
        assert!(text.contains("A resposta era:"));
        assert_eq!(stats.rounds_played, 1);
        assert_eq!(stats.rounds_won, 0);
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (text, _) = run(&words(), "p\n");
        assert!(text.contains("Até a próxima"));
    }
}
