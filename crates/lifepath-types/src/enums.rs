//! Enumeration types for the Lifepath simulation.
//!
//! Every categorical value that crosses a crate boundary lives here:
//! yearly actions, event kinds and categories, birth regions, and the
//! closed set of individual-state fields that event impacts address.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// An activity an individual can spend a year on.
///
/// The declaration order is the enumeration order used when filling the
/// remaining action slots of a year, and the iteration order of
/// [`ActionSet`](crate::ActionSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Formal or informal learning; raises education and skills.
    Study,
    /// Paid employment; produces income and savings.
    Work,
    /// Recovery; lowers stress, restores energy and health.
    Rest,
    /// Relocation or job change; a probabilistic gamble on stability.
    Move,
    /// Entrepreneurial or speculative venture.
    Risk,
    /// Investment in relationships; lowers loneliness.
    Relation,
}

impl Action {
    /// All actions in enumeration order.
    pub const ALL: [Self; 6] = [
        Self::Study,
        Self::Work,
        Self::Rest,
        Self::Move,
        Self::Risk,
        Self::Relation,
    ];

    /// Lowercase identifier used in configuration files and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::Work => "work",
            Self::Rest => "rest",
            Self::Move => "move",
            Self::Risk => "risk",
            Self::Relation => "relation",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Life events
// ---------------------------------------------------------------------------

/// Coarse grouping of life events used by the summary statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// Physical or mental health shocks.
    Health,
    /// Professional milestones.
    Career,
    /// Relationship and isolation events.
    Social,
    /// Financial shocks.
    Economic,
    /// Personal achievements.
    Milestone,
}

impl EventCategory {
    /// All categories in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Health,
        Self::Career,
        Self::Social,
        Self::Economic,
        Self::Milestone,
    ];
}

/// The fixed set of detectable life events.
///
/// Declaration order is the order in which detection rules are evaluated
/// and their impacts applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Stress crossed the burnout line.
    Burnout,
    /// Deep skills met a stable job in a growing economy.
    CareerBreakthrough,
    /// Loneliness crossed the isolation line.
    SocialIsolation,
    /// Debt, low income, and a recession at the same time.
    EconomicHardship,
    /// Education reached the advanced level.
    EducationalAchievement,
    /// Health fell into the critical range.
    HealthCrisis,
}

impl EventKind {
    /// All event kinds in rule-evaluation order.
    pub const ALL: [Self; 6] = [
        Self::Burnout,
        Self::CareerBreakthrough,
        Self::SocialIsolation,
        Self::EconomicHardship,
        Self::EducationalAchievement,
        Self::HealthCrisis,
    ];

    /// Category this kind is reported under.
    pub const fn category(self) -> EventCategory {
        match self {
            Self::Burnout | Self::HealthCrisis => EventCategory::Health,
            Self::CareerBreakthrough => EventCategory::Career,
            Self::SocialIsolation => EventCategory::Social,
            Self::EconomicHardship => EventCategory::Economic,
            Self::EducationalAchievement => EventCategory::Milestone,
        }
    }

    /// Human-readable title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Burnout => "Burnout",
            Self::CareerBreakthrough => "Career Breakthrough",
            Self::SocialIsolation => "Social Isolation",
            Self::EconomicHardship => "Economic Hardship",
            Self::EducationalAchievement => "Educational Achievement",
            Self::HealthCrisis => "Health Crisis",
        }
    }

    /// Fixed description text.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Burnout => "Extreme stress leads to burnout. Health and productivity suffer.",
            Self::CareerBreakthrough => {
                "Your expertise and dedication pay off. Major career advancement."
            }
            Self::SocialIsolation => {
                "Extreme loneliness takes its toll. Mental health deteriorates."
            }
            Self::EconomicHardship => "Financial difficulties during economic downturn.",
            Self::EducationalAchievement => {
                "Reached high level of education. New opportunities open."
            }
            Self::HealthCrisis => {
                "Serious health problems emerge. Requires attention and resources."
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Birth region
// ---------------------------------------------------------------------------

/// Settlement type of the birthplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// City proper.
    Urban,
    /// Outskirts of a city.
    Suburban,
    /// Countryside.
    Rural,
    /// Large metropolitan core.
    Metropolitan,
}

impl Region {
    /// All regions in declaration order.
    pub const ALL: [Self; 4] = [Self::Urban, Self::Suburban, Self::Rural, Self::Metropolitan];

    /// Whether family policy treats this region as urban.
    pub const fn is_urban(self) -> bool {
        matches!(self, Self::Urban | Self::Metropolitan)
    }
}

// ---------------------------------------------------------------------------
// Individual state fields
// ---------------------------------------------------------------------------

/// A named field of [`IndividualState`](crate::IndividualState).
///
/// Event impacts address state through this closed set,
/// so every update site is checked exhaustively at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateField {
    /// Physical health.
    Health,
    /// Mental health.
    MentalHealth,
    /// Available energy.
    Energy,
    /// Accumulated stress.
    Stress,
    /// Education level.
    EducationLevel,
    /// Depth of specialized skill.
    SkillDepth,
    /// Breadth of general skill.
    SkillWidth,
    /// Speed of learning.
    LearningRate,
    /// Job security.
    EmploymentStability,
    /// Network and social standing.
    SocialCapital,
    /// Subjective loneliness.
    Loneliness,
    /// Yearly income (unbounded).
    Income,
    /// Net wealth (unbounded, may be negative).
    Wealth,
}

impl StateField {
    /// The fields constrained to `[0, 1]`.
    pub const BOUNDED: [Self; 11] = [
        Self::Health,
        Self::MentalHealth,
        Self::Energy,
        Self::Stress,
        Self::EducationLevel,
        Self::SkillDepth,
        Self::SkillWidth,
        Self::LearningRate,
        Self::EmploymentStability,
        Self::SocialCapital,
        Self::Loneliness,
    ];

    /// Whether the field is constrained to `[0, 1]`.
    pub const fn is_bounded(self) -> bool {
        !matches!(self, Self::Income | Self::Wealth)
    }
}
