use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(data: Option<&Path>) -> Result<(), String> {
    let map = super::load_map(data)?;
    let rules = &map.rules;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Location", "Exits", "Items", "Notes"]);

    for location in map.locations() {
        let exits = location
            .exits()
            .map(|(direction, to)| format!("{direction} -> {to}"))
            .collect::<Vec<_>>()
            .join("\n");
        let items = location.items().collect::<Vec<_>>().join(", ");

        let mut notes = Vec::new();
        if location.id == rules.start_location {
            notes.push("start".to_string());
        }
        if location.id == rules.deposit_site {
            notes.push("deposit site".to_string());
        }
        if let Some(gate) = rules.gate_at(location.id) {
            notes.push(format!("needs {}", gate.key));
        }

        table.add_row(vec![
            location.id.to_string(),
            location.name.clone(),
            exits,
            items,
            notes.join(", "),
        ]);
    }

    println!("{table}");
    println!();

    let mut items = Table::new();
    items.set_content_arrangement(ContentArrangement::Dynamic);
    items.set_header(vec!["Item", "Start", "Target", "Points", "Required"]);
    for item in map.items() {
        items.add_row(vec![
            item.name.clone(),
            item.start.to_string(),
            item.target.to_string(),
            item.points.to_string(),
            if rules.is_required(&item.name) { "yes" } else { "" }.to_string(),
        ]);
    }
    println!("{items}");
    println!();

    println!("  {}", "All checks passed.".green().bold());
    println!(
        "  {} locations, {} items, {} moves, carry {}",
        map.location_count(),
        map.items().len(),
        rules.max_moves,
        rules.inventory_capacity
    );

    Ok(())
}
