use anyhow::{Context, Result};
use sprint_core::{GeneratedPlan, catalog, export_json, render_markdown, render_text};

use crate::config::OutputFormat;

pub fn plan_output(plan: &GeneratedPlan, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(plan),
        OutputFormat::Markdown => render_markdown(plan),
        OutputFormat::Json => export_json(plan).context("failed to serialize plan")?,
    })
}

/// The phase catalog: key, nominal share, label and summary per phase.
pub fn catalog_output(format: OutputFormat) -> Result<String> {
    let share = |ratio: f64| (ratio * 100.0).round() as u32;
    Ok(match format {
        OutputFormat::Text => catalog()
            .iter()
            .map(|p| {
                format!(
                    "{:<9} {:>3}%  {:<9} {}",
                    p.key.as_str(),
                    share(p.ratio),
                    p.label(),
                    p.summary
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Markdown => {
            let mut lines = vec![
                "| Phase | Share | Summary |".to_string(),
                "|---|---:|---|".to_string(),
            ];
            lines.extend(catalog().iter().map(|p| {
                format!("| {} | {}% | {} |", p.label(), share(p.ratio), p.summary)
            }));
            lines.join("\n")
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(catalog()).context("failed to serialize catalog")?
        }
    })
}
