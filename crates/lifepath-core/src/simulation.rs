//! The yearly loop that drives one simulated life.
//!
//! Each iteration runs these steps in a fixed order:
//!
//! 1. **Advance** -- move the world stack to `birth_year + age`.
//! 2. **Decide** -- compute the admissible set and select actions.
//! 3. **Snapshot** -- keep a copy of the state for event detection.
//! 4. **Transition** -- apply actions, aging, and the clamp.
//! 5. **Detect** -- fire rising-edge events and apply their impacts.
//! 6. **Age** -- increment the age, then run the family update.
//!
//! The loop stops at the configured maximum age or when health reaches
//! zero. The summary is generated once, after the loop. With the same
//! configuration and seed, every draw happens in the same order and the
//! outcome is identical.

use std::collections::BTreeMap;

use lifepath_agents::{
    ActionContext, ActionOutcome, FamilyDynamics, TransitionConfig, apply_year, available_actions,
};
use lifepath_events::{EventDetector, LifeSummary, SummaryInput, generate_summary};
use lifepath_types::{
    Action, BirthProfile, FamilyState, IndividualState, LifeEvent, Personality, ProfileError,
};
use lifepath_world::family_policy::competition_intensity;
use lifepath_world::{City, SimRng, WorldError, WorldSnapshot};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::decision::DecisionEngine;

/// Errors that can occur when setting up a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// The birth profile or personality is out of range.
    #[error("invalid profile: {source}")]
    Profile {
        /// The underlying profile error.
        #[from]
        source: ProfileError,
    },

    /// The country or city key does not resolve.
    #[error("invalid world selection: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The configured maximum age was reached.
    MaxAge,
    /// Health fell to zero.
    HealthExhausted,
}

/// One completed year of the trajectory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearRecord {
    /// Calendar year.
    pub year: i32,
    /// Age at the start of the year.
    pub age: u32,
    /// Country era in force.
    pub era: &'static str,
    /// Actions taken, in execution order.
    pub actions: Vec<Action>,
    /// How each action turned out.
    pub outcomes: Vec<ActionOutcome>,
    /// Number of events that fired.
    pub events_fired: usize,
    /// State at the end of the year.
    pub state: IndividualState,
}

/// Family state plus the competition pressure it implies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyReport {
    /// The family as it stands at the end of the run.
    pub state: FamilyState,
    /// Competition intensity under the birth-year policy, `[0, 1]`.
    pub competition_intensity: f64,
}

/// Everything a finished run produces.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutcome {
    /// Seed the generator was created from.
    pub seed: u64,
    /// Why the loop stopped.
    pub end_reason: EndReason,
    /// State at the end of the run.
    pub final_state: IndividualState,
    /// Snapshot of all world layers at the end of the run.
    pub world: WorldSnapshot,
    /// Family state and competition.
    pub family: FamilyReport,
    /// Full event log.
    pub events: Vec<LifeEvent>,
    /// One record per completed year.
    pub trajectory: Vec<YearRecord>,
    /// Narrative summary.
    pub summary: LifeSummary,
}

/// A life in progress.
///
/// Owns every piece of mutable state for one run: the world stack, the
/// individual, the family, the event log, and the generator.
#[derive(Debug)]
pub struct LifeSimulation {
    birth: BirthProfile,
    personality: Personality,
    state: IndividualState,
    city: City,
    family: FamilyDynamics,
    competition_intensity: f64,
    detector: EventDetector,
    decision: DecisionEngine,
    transition: TransitionConfig,
    overrides: BTreeMap<u32, Vec<Action>>,
    max_age: u32,
    rng: SimRng,
    trajectory: Vec<YearRecord>,
    peak_wealth: f64,
}

impl LifeSimulation {
    /// Validate the configuration and set up a run.
    ///
    /// Draws the family and applies the one-time only-child adjustment, so
    /// the generator has already advanced when this returns.
    pub fn new(config: &SimulationConfig) -> Result<Self, SimulationError> {
        config.birth.validate()?;
        config.personality.validate()?;

        let mut rng = config.run.seed.map_or_else(SimRng::from_entropy, SimRng::seeded);
        let birth = config.birth.clone();
        let city = City::from_keys(
            &config.world.country,
            &config.world.city,
            birth.birth_year,
            birth.region.is_urban(),
        )?;

        let family_policy = city.country().family_policy();
        let family = FamilyDynamics::new(
            family_policy.generate_family(birth.family_class, &mut rng),
        );
        let competition_intensity =
            competition_intensity(family.state(), city.is_tier_one(), family_policy.policy);

        let mut state = IndividualState::from_birth(&birth);
        let mut personality = config.personality.clone();
        family.apply_birth_effects(&mut state, &mut personality, city.is_tier_one());

        info!(
            seed = rng.seed(),
            country = %config.world.country,
            city = %config.world.city,
            birth_year = birth.birth_year,
            only_child = family.state().is_only_child,
            "Simulation started"
        );

        Ok(Self {
            peak_wealth: state.wealth,
            birth,
            personality,
            state,
            city,
            family,
            competition_intensity,
            detector: EventDetector::new(),
            decision: DecisionEngine::new(config.run.max_actions_per_year),
            transition: config.transition(),
            overrides: config.overrides.clone(),
            max_age: config.run.max_age,
            rng,
            trajectory: Vec::new(),
        })
    }

    /// The current individual state.
    pub const fn state(&self) -> &IndividualState {
        &self.state
    }

    /// The personality after family adjustments.
    pub const fn personality(&self) -> &Personality {
        &self.personality
    }

    /// The world stack.
    pub const fn city(&self) -> &City {
        &self.city
    }

    /// The family state.
    pub const fn family(&self) -> &FamilyState {
        self.family.state()
    }

    /// Events detected so far.
    pub fn events(&self) -> &[LifeEvent] {
        self.detector.events()
    }

    /// Whether another year will run.
    pub const fn is_running(&self) -> bool {
        self.state.age < self.max_age && self.state.health > 0.0
    }

    /// Records of the years completed so far.
    pub fn trajectory(&self) -> &[YearRecord] {
        &self.trajectory
    }

    /// Run one year and append its record to the trajectory.
    pub fn step_year(&mut self) {
        let age = self.state.age;
        let year = self
            .birth
            .birth_year
            .saturating_add(i32::try_from(age).unwrap_or(i32::MAX));

        self.city.advance(year, &mut self.rng);

        let available = available_actions(&self.state, self.city.base(), &self.personality);
        let requested = self.overrides.get(&age).map(Vec::as_slice);
        let actions =
            self.decision
                .select_actions(available, &self.state, &self.personality, requested);

        let previous = self.state.clone();
        let ctx = ActionContext {
            city: &self.city,
            birth: &self.birth,
            personality: &self.personality,
            config: &self.transition,
        };
        let outcomes = apply_year(&mut self.state, &actions, &ctx, &mut self.rng);

        let events_fired = self.detector.detect(
            &previous,
            &mut self.state,
            self.city.base().economic_cycle(),
            year,
        );

        self.state.age += 1;
        self.family.end_of_year(&mut self.state);
        self.peak_wealth = self.peak_wealth.max(self.state.wealth);

        debug!(
            year,
            age,
            era = self.city.country().era_name(),
            actions = ?actions,
            events_fired,
            health = self.state.health,
            wealth = self.state.wealth,
            "Year completed"
        );

        self.trajectory.push(YearRecord {
            year,
            age,
            era: self.city.country().era_name(),
            actions,
            outcomes,
            events_fired,
            state: self.state.clone(),
        });
    }

    /// Run the remaining years and produce the outcome.
    pub fn run(mut self) -> SimulationOutcome {
        while self.is_running() {
            self.step_year();
        }
        self.finish()
    }

    fn finish(self) -> SimulationOutcome {
        let end_reason = if self.state.health > 0.0 {
            EndReason::MaxAge
        } else {
            EndReason::HealthExhausted
        };

        let summary = generate_summary(&SummaryInput {
            final_state: &self.state,
            events: self.detector.events(),
            birth: &self.birth,
            personality: &self.personality,
            peak_wealth: self.peak_wealth,
        });

        info!(
            seed = self.rng.seed(),
            age = self.state.age,
            end_reason = ?end_reason,
            events = self.detector.events().len(),
            wealth = self.state.wealth,
            draws = self.rng.draws(),
            "Simulation finished"
        );

        SimulationOutcome {
            seed: self.rng.seed(),
            end_reason,
            world: self.city.snapshot(),
            family: FamilyReport {
                state: self.family.into_state(),
                competition_intensity: self.competition_intensity,
            },
            events: self.detector.into_events(),
            trajectory: self.trajectory,
            summary,
            final_state: self.state,
        }
    }
}

/// Run a complete life from a scenario configuration.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationOutcome, SimulationError> {
    Ok(LifeSimulation::new(config)?.run())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config(seed: u64) -> SimulationConfig {
        let mut config = SimulationConfig::default();
        config.run.seed = Some(seed);
        config
    }

    #[test]
    fn out_of_range_profile_is_rejected() {
        let mut config = config(1);
        config.birth.genetic_health = 1.5;
        let err = LifeSimulation::new(&config).unwrap_err();
        assert!(matches!(err, SimulationError::Profile { .. }));
    }

    #[test]
    fn unknown_city_is_rejected() {
        let mut config = config(1);
        config.world.city = "atlantis".to_owned();
        let err = simulate(&config).unwrap_err();
        assert!(matches!(err, SimulationError::World { .. }));
    }

    #[test]
    fn unknown_country_is_rejected() {
        let mut config = config(1);
        config.world.country = "narnia".to_owned();
        assert!(simulate(&config).is_err());
    }

    #[test]
    fn step_year_records_age_and_calendar() {
        let mut sim = LifeSimulation::new(&config(3)).unwrap();
        sim.step_year();
        let record = sim.trajectory().last().unwrap();
        assert_eq!(record.year, 1980);
        assert_eq!(record.age, 0);
        assert_eq!(record.state.age, 1);
        assert_eq!(sim.state().age, 1);

        sim.step_year();
        let record = sim.trajectory().last().unwrap();
        assert_eq!(record.year, 1981);
        assert_eq!(record.age, 1);
        assert_eq!(sim.trajectory().len(), 2);
    }

    #[test]
    fn zero_max_age_runs_no_years() {
        let mut config = config(5);
        config.run.max_age = 0;
        let outcome = simulate(&config).unwrap();
        assert!(outcome.trajectory.is_empty());
        assert_eq!(outcome.end_reason, EndReason::MaxAge);
        assert_eq!(outcome.final_state.age, 0);
    }

    #[test]
    fn overrides_are_honoured_when_admissible() {
        let mut config = config(11);
        config.run.max_age = 5;
        config.overrides.insert(2, vec![Action::Relation, Action::Work]);
        let outcome = simulate(&config).unwrap();
        let year_two = outcome.trajectory.iter().find(|r| r.age == 2).unwrap();
        // Work needs adulthood and is filtered out.
        assert!(year_two.actions.iter().all(|a| *a != Action::Work));
        assert!(year_two.actions.len() <= 2);
    }

    #[test]
    fn peak_wealth_bounds_every_year_end() {
        let outcome = simulate(&config(17)).unwrap();
        let peak = outcome.summary.statistics.peak_wealth;
        assert!(outcome.trajectory.iter().all(|r| r.state.wealth <= peak));
        assert!(outcome.final_state.wealth <= peak);
    }

    #[test]
    fn unseeded_runs_report_their_seed() {
        let mut first = SimulationConfig::default();
        first.run.max_age = 10;
        let outcome = simulate(&first).unwrap();

        let mut replay = first.clone();
        replay.run.seed = Some(outcome.seed);
        let again = simulate(&replay).unwrap();
        assert_eq!(outcome.final_state, again.final_state);
    }
}
