//! End-of-life summary: narrative, highlights, and statistics.
//!
//! The narrative is a fixed decision tree over the final state and the
//! event log. It runs once, after the yearly loop exits.

use std::collections::BTreeMap;

use lifepath_types::{BirthProfile, EventCategory, IndividualState, LifeEvent, Personality};
use serde::Serialize;

/// Number of events echoed in [`LifeSummary::key_events`].
pub const KEY_EVENT_LIMIT: usize = 20;

/// Final wealth above which the narrative speaks of financial success.
pub const FINANCIAL_SUCCESS_WEALTH: f64 = 50_000.0;

/// Everything the summary is computed from.
#[derive(Debug, Clone, Copy)]
pub struct SummaryInput<'a> {
    /// State at the end of the run.
    pub final_state: &'a IndividualState,
    /// Full event log.
    pub events: &'a [LifeEvent],
    /// Birth profile.
    pub birth: &'a BirthProfile,
    /// Personality after family adjustments.
    pub personality: &'a Personality,
    /// Highest wealth observed at any year end.
    pub peak_wealth: f64,
}

/// Aggregate numbers of a life.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeStatistics {
    /// Number of events in the log.
    pub total_events: usize,
    /// Event counts per category; every category is present.
    pub events_by_category: BTreeMap<EventCategory, usize>,
    /// Highest wealth observed at any year end.
    pub peak_wealth: f64,
    /// Wealth at the end of the run.
    pub final_wealth: f64,
    /// Income at the end of the run.
    pub final_income: f64,
    /// Education level at the end of the run.
    pub education_level: f64,
    /// Skill depth at the end of the run.
    pub skill_depth: f64,
}

/// Short form of an event for the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDigest {
    /// Calendar year.
    pub year: i32,
    /// Age at the time.
    pub age: u32,
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: String,
    /// Event category.
    pub category: EventCategory,
}

/// The generated summary of one life.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeSummary {
    /// Narrative text.
    pub narrative: String,
    /// Notable features, or `"Ordinary Life"`.
    pub highlights: Vec<String>,
    /// Aggregate numbers.
    pub statistics: LifeStatistics,
    /// The full final state.
    pub final_state: IndividualState,
    /// The first events of the log.
    pub key_events: Vec<EventDigest>,
    /// The birth profile.
    pub birth_profile: BirthProfile,
    /// The personality.
    pub personality: Personality,
}

/// Build the summary of a finished life.
pub fn generate_summary(input: &SummaryInput<'_>) -> LifeSummary {
    let counts = category_counts(input.events);
    LifeSummary {
        narrative: narrative(input.final_state, input.events, &counts),
        highlights: highlights(input.final_state, &counts),
        statistics: LifeStatistics {
            total_events: input.events.len(),
            events_by_category: counts,
            peak_wealth: input.peak_wealth,
            final_wealth: input.final_state.wealth,
            final_income: input.final_state.income,
            education_level: input.final_state.education_level,
            skill_depth: input.final_state.skill_depth,
        },
        final_state: input.final_state.clone(),
        key_events: input
            .events
            .iter()
            .take(KEY_EVENT_LIMIT)
            .map(|event| EventDigest {
                year: event.year,
                age: event.age,
                title: event.title.clone(),
                description: event.description.clone(),
                category: event.category,
            })
            .collect(),
        birth_profile: input.birth.clone(),
        personality: input.personality.clone(),
    }
}

fn category_counts(events: &[LifeEvent]) -> BTreeMap<EventCategory, usize> {
    let mut counts: BTreeMap<EventCategory, usize> =
        EventCategory::ALL.into_iter().map(|c| (c, 0)).collect();
    for event in events {
        *counts.entry(event.category).or_default() += 1;
    }
    counts
}

fn count(counts: &BTreeMap<EventCategory, usize>, category: EventCategory) -> usize {
    counts.get(&category).copied().unwrap_or(0)
}

fn narrative(
    state: &IndividualState,
    events: &[LifeEvent],
    counts: &BTreeMap<EventCategory, usize>,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if state.age < 50 {
        parts.push(format!("This was a life cut short at age {}.", state.age));
    } else {
        parts.push(format!("This was a life that spanned {} years.", state.age));
    }

    parts.push(
        if state.wealth > FINANCIAL_SUCCESS_WEALTH {
            "Financial success was achieved through dedication and opportunity."
        } else if state.wealth < 0.0 {
            "Financial struggles were a constant challenge throughout life."
        } else {
            "Financial stability was maintained through careful management."
        }
        .to_owned(),
    );

    if count(counts, EventCategory::Career) > 0 {
        parts.push("Significant career milestones were reached.".to_owned());
    }
    if state.skill_depth > 0.7 {
        parts.push("Deep expertise was developed in chosen fields.".to_owned());
    }

    if state.loneliness > 0.7 {
        parts.push("Social isolation was a recurring theme.".to_owned());
    } else if state.social_capital > 0.7 {
        parts.push("Strong social connections were built and maintained.".to_owned());
    }

    if count(counts, EventCategory::Health) > 2 {
        parts.push("Health challenges were faced multiple times.".to_owned());
    } else if state.health > 0.7 {
        parts.push("Good health was maintained throughout most of life.".to_owned());
    }

    parts.push(
        if state.mental_health > 0.7 && !events.is_empty() {
            "Overall, this was a life marked by resilience and adaptation."
        } else if state.stress > 0.7 {
            "This life was characterized by high stress and constant challenges."
        } else {
            "This was a life of relative stability and gradual progress."
        }
        .to_owned(),
    );

    parts.join(" ")
}

fn highlights(state: &IndividualState, counts: &BTreeMap<EventCategory, usize>) -> Vec<String> {
    let mut found: Vec<&str> = Vec::new();

    if state.education_level > 0.8 {
        found.push("High Education Achievement");
    }
    if count(counts, EventCategory::Career) > 0 {
        found.push("Career Breakthroughs");
    }
    if state.wealth > 100_000.0 {
        found.push("Significant Wealth Accumulation");
    } else if state.wealth < -10_000.0 {
        found.push("Financial Hardship");
    }
    if state.social_capital > 0.8 {
        found.push("Strong Social Network");
    } else if state.loneliness > 0.8 {
        found.push("Chronic Loneliness");
    }
    if count(counts, EventCategory::Health) > 3 {
        found.push("Multiple Health Challenges");
    }

    if found.is_empty() {
        found.push("Ordinary Life");
    }
    found.into_iter().map(str::to_owned).collect()
}
