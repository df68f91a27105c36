//! # Seatify CLI Demo
//!
//! Terminal walkthrough of the floor plan engine: lays out a small
//! reception, runs validation, and prints the results plus a JSON dump of
//! the plan for piping into other tools.

use std::io::{self, BufRead, Write};

use plan_core::catalog::ElementKind;
use plan_core::element::{Patch, PropertyPatch};
use plan_core::session::EditorSession;
use plan_core::storage::MemoryStore;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Seatify CLI - Event Floor Plan Builder");
    println!("======================================");
    println!();

    let width_ft = prompt_f64("Venue width (ft) [60]: ", 60.0);
    let length_ft = prompt_f64("Venue length (ft) [80]: ", 80.0);

    let mut session = EditorSession::open(MemoryStore::new());
    session.rename("CLI Demo Reception");
    session.resize_venue(width_ft, length_ft);

    println!();
    println!("Laying out a demo reception...");
    println!();

    // two rows of round tables
    for row in 0..2 {
        for col in 0..3 {
            let x = 12.0 + 12.0 * col as f64;
            let y = 12.0 + 12.0 * row as f64;
            session.add_element(ElementKind::TableRound60, x, y);
        }
    }

    // dance floor, bar, and a deliberately over-seated head table
    session.add_element(ElementKind::DanceFloor, width_ft / 2.0, length_ft - 15.0);
    session.add_element(ElementKind::Bar, width_ft - 8.0, 10.0);

    let head_table = session.add_element(ElementKind::TableBanquet8, width_ft / 2.0, 5.0);
    session.update_element_properties(
        head_table,
        PropertyPatch {
            label: Patch::Set("Head Table".to_string()),
            seats: Patch::Set(10),
            ..PropertyPatch::default()
        },
    );

    let plan = session.plan();
    println!("═══════════════════════════════════════");
    println!("  FLOOR PLAN: {}", plan.name);
    println!("═══════════════════════════════════════");
    println!();
    println!("Venue:    {:.0} x {:.0} ft", plan.venue.width_ft, plan.venue.length_ft);
    println!("Grid:     {:.0} ft (snap: {})", plan.settings.grid_size_ft, plan.settings.snap_to_grid);
    println!("Elements: {}", plan.element_count());
    println!();
    for el in &plan.elements {
        let spec = el.kind.spec();
        let seats = match el.effective_seats() {
            Some(n) => format!("{} seats", n),
            None => "no seating".to_string(),
        };
        println!(
            "  {} {:<12} at ({:>5.1}, {:>5.1})  {:.0}x{:.0} ft  {}",
            spec.icon,
            el.effective_label(),
            el.x,
            el.y,
            el.effective_width_ft(),
            el.effective_length_ft(),
            seats
        );
    }

    let warnings = session.warnings();
    println!();
    println!("═══════════════════════════════════════");
    if warnings.is_empty() {
        println!("  No warnings - layout looks good");
    } else {
        println!("  {} WARNING(S)", warnings.len());
        println!("═══════════════════════════════════════");
        for warning in &warnings {
            println!("  [{:?}] {}", warning.kind, warning.message);
        }
    }
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for export/rendering use):");
    if let Ok(json) = serde_json::to_string_pretty(session.plan()) {
        println!("{}", json);
    }
}
