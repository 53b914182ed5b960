use crate::constants::JOURNAL_PROMPT;
use crate::phase::{PhaseDefinition, cycle};
use crate::template::format_with_topic;

/// Activities for day `day_index` (zero-based, local to the phase).
///
/// Order: core activity, kickoff (first day of the phase only), enrichment,
/// journal prompt. Pools are indexed cyclically so any index is valid.
pub fn build_daily_activities(
    phase: &PhaseDefinition,
    topic: &str,
    day_index: usize,
) -> Vec<String> {
    let kickoff = if day_index == 0 {
        cycle(phase.kickoffs, day_index)
    } else {
        None
    };

    cycle(phase.core_activities, day_index)
        .into_iter()
        .chain(kickoff)
        .chain(cycle(phase.enrichment_activities, day_index))
        .map(|template| format_with_topic(template, topic))
        .chain(std::iter::once(JOURNAL_PROMPT.to_string()))
        .collect()
}
