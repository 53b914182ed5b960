//! Human-readable renderings of a plan: plain text for terminals and
//! Markdown for documents. Pure string building.

use crate::energy::EnergyLevel;
use crate::plan::{DayPlan, GeneratedPlan, PhaseSummary};

const BAR_CELLS: u32 = 20;

fn share_bar(phase: &PhaseSummary, total_days: u32) -> String {
    let width = phase.bar_width_percent(total_days);
    let filled = (width * BAR_CELLS).div_ceil(100).min(BAR_CELLS);
    format!(
        "[{}{}] {width}%",
        "#".repeat(filled as usize),
        ".".repeat((BAR_CELLS - filled) as usize)
    )
}

fn day_word(n: u32) -> &'static str {
    if n == 1 { "day" } else { "days" }
}

/// Plain-text rendering: phase cards, cadence overview, daily roadmap.
pub fn render_text(plan: &GeneratedPlan) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Learning sprint: {} ({} {})",
        plan.topic,
        plan.total_days,
        day_word(plan.total_days)
    ));
    lines.push(String::new());

    lines.push("PHASES".to_string());
    for phase in &plan.phases {
        lines.push(format!(
            "  {:<9} Days {} – {}  {}",
            phase.label,
            phase.start_day,
            phase.end_day,
            share_bar(phase, plan.total_days)
        ));
        lines.push(format!("    {}", phase.summary));
        lines.push(format!("    Milestone: {}", phase.milestone));
    }
    lines.push(String::new());

    lines.push("CADENCE OVERVIEW".to_string());
    for level in EnergyLevel::ALL {
        lines.push(format!(
            "  {:<13} {:>3}  {}",
            format!("{level} focus"),
            plan.cadence.count(level),
            level.hint()
        ));
    }
    lines.push(String::new());

    lines.push("DAILY ROADMAP".to_string());
    for day in &plan.days {
        lines.extend(text_day(day));
    }

    lines.join("\n")
}

fn text_day(day: &DayPlan) -> Vec<String> {
    let mut lines = vec![
        format!("Day {} · {} · {} focus", day.day, day.phase_label, day.energy),
        format!("  {}", day.focus),
    ];
    lines.extend(day.activities.iter().map(|a| format!("  - {a}")));
    if let Some(milestone) = &day.milestone {
        lines.push(format!("  Checkpoint: {milestone}"));
    }
    lines.push(String::new());
    lines
}

/// Markdown rendering with the same sections as [`render_text`].
pub fn render_markdown(plan: &GeneratedPlan) -> String {
    let mut lines = vec![
        format!("# Learning sprint: {}", plan.topic),
        String::new(),
        format!(
            "{} {} across {} phases.",
            plan.total_days,
            day_word(plan.total_days),
            plan.phases.len()
        ),
        String::new(),
        "## Phases".to_string(),
        String::new(),
    ];

    for phase in &plan.phases {
        lines.push(format!(
            "### {} (Days {} – {})",
            phase.label, phase.start_day, phase.end_day
        ));
        lines.push(String::new());
        lines.push(phase.summary.clone());
        lines.push(String::new());
        lines.push(format!("**Milestone:** {}", phase.milestone));
        lines.push(String::new());
        lines.push(format!("`{}`", share_bar(phase, plan.total_days)));
        lines.push(String::new());
    }

    lines.push("## Cadence overview".to_string());
    lines.push(String::new());
    lines.push("| Level | Days | Hint |".to_string());
    lines.push("|---|---:|---|".to_string());
    for level in EnergyLevel::ALL {
        lines.push(format!(
            "| {level} focus | {} | {} |",
            plan.cadence.count(level),
            level.hint()
        ));
    }
    lines.push(String::new());

    lines.push("## Daily roadmap".to_string());
    lines.push(String::new());
    for day in &plan.days {
        lines.push(format!("### Day {} · {} focus", day.day, day.energy));
        lines.push(String::new());
        lines.push(format!("*{}* · {}", day.phase_label, day.focus));
        lines.push(String::new());
        lines.extend(day.activities.iter().map(|a| format!("- {a}")));
        if let Some(milestone) = &day.milestone {
            lines.push(String::new());
            lines.push(format!("**Checkpoint:** {milestone}"));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::generate_plan;

    #[test]
    fn test_text_sections() {
        let out = render_text(&generate_plan("Rust", 10));
        assert!(out.starts_with("Learning sprint: Rust (10 days)"));
        assert!(out.contains("PHASES"));
        assert!(out.contains("Days 1 – 3"));
        assert!(out.contains("CADENCE OVERVIEW"));
        assert!(out.contains("DAILY ROADMAP"));
        assert!(out.contains("Day 10 · Polish · Medium focus"));
    }

    #[test]
    fn test_text_checkpoints_match_phase_ends() {
        let out = render_text(&generate_plan("Rust", 10));
        assert_eq!(out.matches("Checkpoint:").count(), 4);
        assert_eq!(out.matches("Milestone:").count(), 4);
    }

    #[test]
    fn test_single_day_wording() {
        let out = render_text(&generate_plan("Rust", 1));
        assert!(out.starts_with("Learning sprint: Rust (1 day)"));
    }

    #[test]
    fn test_share_bar_floor() {
        let plan = generate_plan("Rust", 10);
        let polish = plan.phases.last().unwrap();
        assert_eq!(share_bar(polish, 10), format!("[###{}] 12%", ".".repeat(17)));
    }

    #[test]
    fn test_markdown_sections() {
        let out = render_markdown(&generate_plan("Rust", 10));
        assert!(out.starts_with("# Learning sprint: Rust"));
        assert!(out.contains("\n10 days across 4 phases.\n"));
        assert!(out.contains("### Discover (Days 1 – 3)"));
        assert!(out.contains("| Deep focus | 3 |"));
        assert!(out.contains("### Day 5 · Deep focus"));
        assert_eq!(out.matches("**Checkpoint:**").count(), 4);
    }
}
