//! Terminal rendering for diagnosis results and statistics tables.

use owo_colors::OwoColorize;
use persona_common::stats::Distribution;
use persona_common::{
    compatibility::CompatibilityLevel, AxisPair, AxisTally, CategoryCode, DiagnosisRecord,
};

/// Bar rendering width per pair side.
const BAR_WIDTH: usize = 12;

/// Section header.
pub fn header(title: &str) {
    println!();
    println!("{}", title.bright_white().bold());
    println!("{}", "─".repeat(46).dimmed());
}

/// The headline result line.
pub fn result_code(robot: &str, code: &CategoryCode) {
    println!();
    println!(
        "{}  [{}] diagnosed type: {}",
        "◆".bright_green(),
        robot.bright_white(),
        code.to_string().bright_green().bold()
    );
}

/// Per-pair tally bars.
///
/// Each pair renders both sides scaled against the pair total, e.g.
/// `E ███████░░░░░ 2   I ░░░░░█████░░ 1`.
pub fn tally_bars(tally: &AxisTally) {
    println!();
    for pair in AxisPair::ALL {
        let (first, second) = tally.pair_counts(pair);
        let total = (first + second).max(1);

        let first_filled = (first as usize * BAR_WIDTH) / total as usize;
        let second_filled = (second as usize * BAR_WIDTH) / total as usize;

        println!(
            "   {} {}{} {:>2}    {} {}{} {:>2}",
            pair.first().to_string().bright_cyan(),
            "█".repeat(first_filled),
            "░".repeat(BAR_WIDTH - first_filled),
            first,
            pair.second().to_string().bright_cyan(),
            "█".repeat(second_filled),
            "░".repeat(BAR_WIDTH - second_filled),
            second,
        );
    }
}

/// Guide block for the diagnosed type.
pub fn guide(code: &CategoryCode) {
    if let Some(guide) = persona_common::guide::guide_for(code) {
        header("Interaction guide");
        println!("{}", guide.description);
        for example in guide.examples {
            println!("   {} {}", "-".dimmed(), example.italic());
        }
    }
}

/// Feedback/recommendation lines.
pub fn note(text: &str) {
    println!("{}  {}", "i".bright_blue(), text);
}

/// History table for stored diagnoses.
pub fn history_table(records: &[DiagnosisRecord]) {
    if records.is_empty() {
        println!("No diagnoses recorded yet.");
        return;
    }
    println!(
        "{:<20} {:<14} {:<12} {:<6}",
        "when".dimmed(),
        "robot".dimmed(),
        "location".dimmed(),
        "type".dimmed()
    );
    for record in records {
        println!(
            "{:<20} {:<14} {:<12} {:<6}",
            record.created_at.format("%Y-%m-%d %H:%M"),
            record.robot_id,
            record.location,
            record.category.to_string().bright_green()
        );
    }
}

/// Distribution table with proportional bars.
pub fn distribution_table(distribution: &Distribution) {
    if distribution.is_empty() {
        println!("No data yet.");
        return;
    }
    let total: u32 = distribution.values().sum();
    let max = distribution.values().copied().max().unwrap_or(1).max(1);

    for (code, count) in distribution {
        let filled = (*count as usize * 24) / max as usize;
        let share = 100.0 * *count as f64 / total as f64;
        println!(
            "   {:<6} {}{} {:>3}  {:>5.1}%",
            code.to_string().bright_green(),
            "█".repeat(filled),
            "░".repeat(24 - filled),
            count,
            share
        );
    }
    println!("   {:<6} {:>28}", "total".dimmed(), total);
}

/// Compatibility verdict line.
pub fn compatibility_line(
    user: &CategoryCode,
    robot: &CategoryCode,
    score: f32,
    level: CompatibilityLevel,
) {
    println!(
        "{} x {}: affinity {:.1} ({})",
        user.to_string().bright_green(),
        robot.to_string().bright_cyan(),
        score,
        level
    );
}
