use std::path::Path;

use colored::Colorize;
use dl_core::LocationId;
use dl_engine::{Outcome, Simulation};

pub fn run(
    script: &Path,
    data: Option<&Path>,
    start: Option<u32>,
    expect: Option<&[u32]>,
    replay: bool,
    json: bool,
) -> Result<(), String> {
    let source = std::fs::read_to_string(script)
        .map_err(|e| format!("cannot read {}: {e}", script.display()))?;
    let commands = parse_script(&source);

    let map = super::load_map(data)?;
    let config = super::session_config(start, None);
    let sim = Simulation::run(map, &config, &commands).map_err(|e| format!("simulation failed: {e}"))?;
    let trace = sim.id_log();

    if json {
        let out = serde_json::to_string_pretty(sim.log()).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        if replay {
            print!("{}", sim.render_replay());
            println!();
        }

        let player = sim.session().player();
        println!("  {} {}", "Trace:".bold(), format_trace(&trace));
        println!(
            "  {} {} {}",
            "Outcome:".bold(),
            colorize_outcome(sim.outcome()),
            format!(
                "(score {}, {} moves, {} commands)",
                player.score,
                player.moves,
                sim.turns().len()
            )
            .dimmed()
        );
    }

    if let Some(expected) = expect {
        let expected: Vec<LocationId> = expected.iter().copied().map(LocationId::from).collect();
        if expected != trace {
            return Err(format!(
                "trace mismatch: expected {}, got {}",
                format_trace(&expected),
                format_trace(&trace)
            ));
        }
    }

    Ok(())
}

/// One command per line; blank lines and `#` comments are skipped.
fn parse_script(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn format_trace(trace: &[LocationId]) -> String {
    trace
        .iter()
        .map(LocationId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn colorize_outcome(outcome: Outcome) -> colored::ColoredString {
    let label = outcome.to_string();
    match outcome {
        Outcome::Won => label.green().bold(),
        Outcome::Lost => label.red().bold(),
        Outcome::Quit => label.yellow(),
        Outcome::Ongoing => label.normal(),
    }
}
