use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;

use imp_core::{Game, Role, View};

use crate::GameArgs;

pub fn run(args: &GameArgs) -> Result<(), String> {
    let mut game = super::build_game(args)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let clear = stdout.is_terminal();
    play(&mut game, &mut stdin.lock(), &mut stdout, clear)
}

/// Read the roster, walk every seat through its card, then reveal.
fn play(
    game: &mut Game,
    input: &mut impl BufRead,
    output: &mut impl Write,
    clear: bool,
) -> Result<(), String> {
    writeln!(output, "  {}\n", "IMPOSTOR".green().bold()).map_err(|e| e.to_string())?;
    writeln!(
        output,
        "Introduce los nombres de los participantes (uno por línea, línea vacía para terminar):"
    )
    .map_err(|e| e.to_string())?;

    let names = read_names(input)?;
    game.start(names).map_err(|e| e.to_string())?;

    loop {
        match game.view() {
            View::NoSession => break,
            View::AwaitingReveal { player, role, .. } => {
                show_card(&player, &role, input, output, clear)?;
                game.advance();
            }
            View::AllRevealed { starter } => {
                writeln!(output, "\n✅ ¡Todos listos!").map_err(|e| e.to_string())?;
                writeln!(output, "🗣️  {} empieza a hablar.", starter.bold())
                    .map_err(|e| e.to_string())?;
                prompt(output, input, "Pulsa Enter para desvelar al impostor.")?;
                writeln!(
                    output,
                    "🚨 ¡El impostor era... {}!",
                    game.reveal().name().red().bold()
                )
                .map_err(|e| e.to_string())?;
                break;
            }
        }
    }

    Ok(())
}

fn read_names(input: &mut impl BufRead) -> Result<Vec<String>, String> {
    let mut names = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
            break;
        }
        let name = line.trim();
        if name.is_empty() {
            break;
        }
        names.push(name.to_string());
    }
    Ok(names)
}

fn show_card(
    player: &str,
    role: &Role,
    input: &mut impl BufRead,
    output: &mut impl Write,
    clear: bool,
) -> Result<(), String> {
    writeln!(output, "\n{}", player.red().bold()).map_err(|e| e.to_string())?;
    prompt(output, input, "Pulsa Enter para desvelar tu rol.")?;

    let text = role.to_string();
    let text = match role {
        Role::Impostor { .. } => text.red(),
        Role::Crew { .. } => text.green(),
    };
    writeln!(output, "{text}").map_err(|e| e.to_string())?;
    prompt(output, input, "Pulsa Enter cuando lo hayas visto.")?;

    if clear {
        // Wipe the screen so the next player can't scroll back.
        write!(output, "\x1B[2J\x1B[H").map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Print `message` and wait for a line. EOF counts as Enter.
fn prompt(output: &mut impl Write, input: &mut impl BufRead, message: &str) -> Result<(), String> {
    writeln!(output, "{}", message.dimmed()).map_err(|e| e.to_string())?;
    output.flush().map_err(|e| e.to_string())?;
    let mut line = String::new();
    input.read_line(&mut line).map_err(|e| e.to_string())?;
    Ok(())
}
