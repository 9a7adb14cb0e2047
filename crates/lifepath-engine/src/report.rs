//! Plain-text rendering of a finished life.

use lifepath_core::SimulationOutcome;

/// Number of key events listed in the report.
const REPORTED_EVENTS: usize = 5;

/// Render the outcome as a short human-readable report.
pub fn render(outcome: &SimulationOutcome) -> String {
    let summary = &outcome.summary;
    let stats = &summary.statistics;
    let last = &summary.final_state;
    let world = &outcome.world;
    let rule = "=".repeat(60);

    let mut lines = vec![
        rule.clone(),
        "LIFE TRAJECTORY SIMULATION - SUMMARY".to_owned(),
        rule.clone(),
        String::new(),
        "Narrative:".to_owned(),
        format!("   {}", summary.narrative),
        String::new(),
        "Highlights:".to_owned(),
    ];
    lines.extend(summary.highlights.iter().map(|h| format!("   - {h}")));

    lines.extend([
        String::new(),
        "Statistics:".to_owned(),
        format!("   Total Events: {}", stats.total_events),
        "   Events by Category:".to_owned(),
    ]);
    lines.extend(
        stats
            .events_by_category
            .iter()
            .map(|(category, count)| format!("     - {category:?}: {count}")),
    );

    lines.extend([
        format!("   Peak Wealth: {:.2}", stats.peak_wealth),
        String::new(),
        "Final State:".to_owned(),
        format!("   Age: {} years ({:?})", last.age, outcome.end_reason),
        format!("   Health: {:.2}", last.health),
        format!("   Wealth: {:.2}", last.wealth),
        format!("   Income: {:.2}", last.income),
        format!("   Education: {:.2}", last.education_level),
        format!("   Social Capital: {:.2}", last.social_capital),
        String::new(),
        "World:".to_owned(),
        format!(
            "   {} / {} (era {}, window missed: {})",
            world.country.country, world.city.name, world.country.era, world.country.window_missed
        ),
        format!(
            "   Siblings: {}, competition intensity {:.2}",
            outcome.family.state.siblings, outcome.family.competition_intensity
        ),
        String::new(),
        format!("Key Events (first {REPORTED_EVENTS}):"),
    ]);
    for event in summary.key_events.iter().take(REPORTED_EVENTS) {
        lines.push(format!("   Age {}: {}", event.age, event.title));
        lines.push(format!("      {}", event.description));
    }

    lines.extend([String::new(), format!("Seed: {}", outcome.seed), rule]);
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
