//! The phase catalog: four fixed stages of a learning sprint, their nominal
//! share of the total duration, and the template pools each day draws from.
//!
//! Catalog order is fixed (discover → practice → build → polish). Every
//! template may carry the `{topic}` marker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies one of the four catalog phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKey {
    Discover,
    Practice,
    Build,
    Polish,
}

impl PhaseKey {
    /// All keys in catalog order.
    pub const ALL: [PhaseKey; 4] = [
        PhaseKey::Discover,
        PhaseKey::Practice,
        PhaseKey::Build,
        PhaseKey::Polish,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PhaseKey::Discover => "discover",
            PhaseKey::Practice => "practice",
            PhaseKey::Build => "build",
            PhaseKey::Polish => "polish",
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            PhaseKey::Discover => "Discover",
            PhaseKey::Practice => "Practice",
            PhaseKey::Build => "Build",
            PhaseKey::Polish => "Polish",
        }
    }
}

impl fmt::Display for PhaseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no catalog phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePhaseKeyError(pub String);

impl fmt::Display for ParsePhaseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown phase '{}' (expected discover, practice, build or polish)",
            self.0
        )
    }
}

impl std::error::Error for ParsePhaseKeyError {}

impl FromStr for PhaseKey {
    type Err = ParsePhaseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        PhaseKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParsePhaseKeyError(s.to_string()))
    }
}

/// Static definition of a phase. Pools may differ in length across phases.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseDefinition {
    pub key: PhaseKey,
    /// Nominal fraction of the total days owned by this phase.
    pub ratio: f64,
    pub summary: &'static str,
    pub milestone: &'static str,
    pub focus_templates: &'static [&'static str],
    pub core_activities: &'static [&'static str],
    pub enrichment_activities: &'static [&'static str],
    pub kickoffs: &'static [&'static str],
}

impl PhaseDefinition {
    pub fn label(&self) -> &'static str {
        self.key.label()
    }
}

pub static PHASES: [PhaseDefinition; 4] = [
    PhaseDefinition {
        key: PhaseKey::Discover,
        ratio: 0.25,
        summary: "Map the fundamentals and build a nuanced understanding of the core ideas.",
        milestone: "You can explain the pillars of {topic} in a concise narrative tailored to a beginner.",
        focus_templates: &[
            "Orient yourself around the landscape of {topic} and gather high-quality resources.",
            "Deepen your conceptual grip on the building blocks that power {topic}.",
            "Connect foundational concepts in {topic} to things you already understand.",
            "Capture the vocabulary, patterns, and mental models that underpin {topic}.",
        ],
        core_activities: &[
            "Skim a respected primer or course overview for {topic} and highlight the 5 headline themes.",
            "Draft a personal glossary for {topic}—define 10 key terms in your own words.",
            "Diagram how the main components of {topic} relate to each other using a mind map or outline.",
            "List the frequent pitfalls or misconceptions people have when learning {topic}.",
            "Identify three expert voices or communities focused on {topic} and note why they stand out.",
        ],
        enrichment_activities: &[
            "Summarize what excites you about {topic} in a short paragraph.",
            "Capture lingering questions about {topic} for later investigation.",
            "Create a spaced-repetition deck (or notes) for the most essential {topic} facts.",
            "Document a real-world example of {topic} done well and break down why it works.",
        ],
        kickoffs: &[
            "Clarify your definition of success for this sprint: how will you know you understand {topic}?",
            "Decide which resource will be your primary guide for the first few days.",
        ],
    },
    PhaseDefinition {
        key: PhaseKey::Practice,
        ratio: 0.35,
        summary: "Translate knowledge into skill through targeted exercises and rapid feedback loops.",
        milestone: "You can complete core exercises in {topic} without looking up the solution first.",
        focus_templates: &[
            "Run hands-on drills to reinforce the mechanics of {topic}.",
            "Push into progressively harder reps to expose weak spots in {topic}.",
            "Alternate between guided tutorials and self-directed practice on {topic}.",
            "Use feedback to refine your workflow and habits around {topic}.",
        ],
        core_activities: &[
            "Complete a bite-sized tutorial or walkthrough centered on one key {topic} skill.",
            "Implement what you learned by replicating the example without peeking at the solution.",
            "Time-box a challenge from a community or platform focused on {topic}.",
            "Self-review your work—annotate what felt smooth and what felt brittle.",
            "Teach someone (or rubber duck) a concept from {topic} to confirm your mastery.",
        ],
        enrichment_activities: &[
            "Automate a small routine or create a cheatsheet for a repetitive {topic} task.",
            "Document your debugging or problem-solving process so you can iterate on it tomorrow.",
            "Share a micro-win or question with the {topic} community to invite feedback.",
            "Capture metrics about speed, accuracy, or confidence for each {topic} session.",
        ],
        kickoffs: &[
            "Pick 2–3 subskills of {topic} to emphasize this week and define a mini-outcome for each.",
        ],
    },
    PhaseDefinition {
        key: PhaseKey::Build,
        ratio: 0.25,
        summary: "Synthesize your skills in a project that simulates a real-world scenario.",
        milestone: "You have a tangible artifact or prototype that demonstrates applied {topic} skill.",
        focus_templates: &[
            "Design your project scope so it stretches you but remains feasible within the timeline.",
            "Advance your project by layering in new features or refinements in {topic}.",
            "Stress-test your work: hunt for bugs, edge cases, and opportunities to simplify.",
            "Document decisions and trade-offs in your {topic} project for future reflection.",
        ],
        core_activities: &[
            "Outline user stories or requirements for a focused {topic} project.",
            "Set up a version control or tracking system to capture your progress transparently.",
            "Implement a meaningful feature end-to-end and log any blockers you hit.",
            "Request feedback from a peer or mentor and note action items.",
            "Refine the project by improving structure, readability, or user experience.",
        ],
        enrichment_activities: &[
            "Add automated checks, tests, or validation around a fragile part of your project.",
            "Write a short changelog entry capturing what you built today in {topic}.",
            "Capture screenshots or demos that evidence your progress on {topic}.",
            "List ideas for future iterations while keeping scope disciplined.",
        ],
        kickoffs: &[
            "Decide what 'done' looks like for the project and map the must-have components.",
        ],
    },
    PhaseDefinition {
        key: PhaseKey::Polish,
        ratio: 0.15,
        summary: "Lock in the learning with reflection, spaced review, and forward-looking plans.",
        milestone: "You can articulate your learning journey and confidently outline your next steps in {topic}.",
        focus_templates: &[
            "Review and reinforce the most important ideas and heuristics from {topic}.",
            "Codify habits, templates, or systems so {topic} stays fresh beyond the sprint.",
            "Integrate feedback, close any knowledge gaps, and celebrate progress in {topic}.",
            "Plan the next 30 days of maintenance to keep momentum with {topic}.",
        ],
        core_activities: &[
            "Conduct a retrospective: what clicked about {topic}, what was hard, and why?",
            "Consolidate your notes into a single evergreen document or knowledge base.",
            "Turn your project into a shareable artifact (README, post, short presentation).",
            "Schedule spaced reviews or recurring practice blocks for {topic}.",
            "Write a short narrative about your {topic} journey and post it or share with peers.",
        ],
        enrichment_activities: &[
            "Identify 3 advanced resources to tackle next and capture why they matter.",
            "Create a checklist for how you'll practice {topic} weekly after this plan ends.",
            "Audit your toolkit—what tools, libraries, or references for {topic} will you keep using?",
            "Celebrate a win: note what future-you will thank present-you for learning about {topic}.",
        ],
        kickoffs: &[
            "Choose how you'll demonstrate your {topic} growth (portfolio, presentation, mentor review).",
        ],
    },
];

/// The full catalog in phase order.
pub fn catalog() -> &'static [PhaseDefinition] {
    &PHASES
}

/// Look up a phase definition by key.
pub fn phase(key: PhaseKey) -> &'static PhaseDefinition {
    match key {
        PhaseKey::Discover => &PHASES[0],
        PhaseKey::Practice => &PHASES[1],
        PhaseKey::Build => &PHASES[2],
        PhaseKey::Polish => &PHASES[3],
    }
}

/// Pick `pool[index mod len]`; `None` only for an empty pool.
pub(crate) fn cycle(pool: &'static [&'static str], index: usize) -> Option<&'static str> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[index % pool.len()])
}
