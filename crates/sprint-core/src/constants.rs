/// Marker replaced by the learner's topic in every catalog template.
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

/// Topic used when the caller supplies an empty or whitespace-only topic.
pub const PLACEHOLDER_TOPIC: &str = "your chosen topic";

/// Shortest plan the engine will build.
pub const MIN_DAYS: u32 = 1;

/// Longest plan the engine will build.
pub const MAX_DAYS: u32 = 365;

/// Closing prompt appended to every day. Not topic-substituted.
pub const JOURNAL_PROMPT: &str =
    "Log one insight, one blocker, and one next step in your learning journal.";

/// Minimum width (percent) of a phase's share bar, so short phases stay visible.
pub const MIN_BAR_PERCENT: u32 = 12;
