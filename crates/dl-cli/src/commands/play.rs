use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use dl_engine::narrator;
use dl_engine::{GameError, GameSession, Outcome};

pub fn run(data: Option<&Path>, start: Option<u32>, max_moves: Option<u32>) -> Result<(), String> {
    let map = super::load_map(data)?;
    let config = super::session_config(start, max_moves);

    let mut session =
        GameSession::new(map, &config).map_err(|e| format!("failed to start session: {e}"))?;

    println!("{}", narrator::briefing(session.map(), session.rules()));
    let arrival = session.arrive().map_err(|e| e.to_string())?;
    println!("{arrival}\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        println!("{}", narrator::menu().dimmed());
        let actions = session.available_actions();
        if !actions.is_empty() {
            println!("{}", format!("Here you can: {}", actions.join(", ")).dimmed());
        }
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(turn) => {
                println!("You decided to: {}", turn.command);
                let text = turn.text();
                match turn.outcome {
                    Outcome::Won => println!("{}\n", text.green().bold()),
                    Outcome::Lost => println!("{}\n", text.red().bold()),
                    _ if turn.is_denied() => println!("{}\n", text.yellow()),
                    _ => println!("{text}\n"),
                }
                if turn.outcome.is_terminal() {
                    break;
                }
            }
            Err(GameError::InvalidCommand { input, suggestion }) => {
                println!("{}", format!("That was an invalid command: {input}").yellow());
                if let Some(suggestion) = suggestion {
                    println!("Did you mean '{suggestion}'?");
                }
                println!();
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    Ok(())
}
