//! Execution handlers for the six yearly actions.
//!
//! Every handler reads the modifiers of all three world layers through an
//! [`ActionContext`], mutates the individual state, and may push bounded
//! fields out of range. Clamping happens once per year in
//! [`apply_year`](crate::transition::apply_year), not here.
//!
//! Noise is multiplicative: a nominal value `v` becomes `v x N(1, sigma)`.

use lifepath_types::{Action, BirthProfile, IndividualState, Personality};
use lifepath_world::{City, ParetoMultipliers, SimRng};
use serde::Serialize;

use crate::config::TransitionConfig;

use super::costs;

/// Read-only inputs shared by all handlers for one year.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
    /// The world stack.
    pub city: &'a City,
    /// The individual's birth profile.
    pub birth: &'a BirthProfile,
    /// The individual's personality.
    pub personality: &'a Personality,
    /// Transition parameters.
    pub config: &'a TransitionConfig,
}

impl ActionContext<'_> {
    /// Pareto multipliers for the individual's current position.
    pub fn pareto(&self, state: &IndividualState) -> ParetoMultipliers {
        let base = self.city.base();
        base.pareto(base.person_score(state, self.birth))
    }

    /// Combined country and city multiplier for `action`.
    pub fn modifier(&self, action: Action) -> f64 {
        self.city.country().action_modifier(action) * self.city.action_modifier(action)
    }

    fn noise(&self, rng: &mut SimRng, value: f64) -> f64 {
        rng.noise(value, self.config.noise_std)
    }
}

/// How an action turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The action has no success condition.
    Applied,
    /// A gamble that paid off.
    Succeeded,
    /// A gamble that did not.
    Failed,
}

/// Record of one executed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    /// The executed action.
    pub action: Action,
    /// How it turned out.
    pub outcome: Outcome,
}

/// Study: raise education and skills at the cost of energy and earnings.
pub fn execute_study(
    state: &mut IndividualState,
    ctx: &ActionContext<'_>,
    rng: &mut SimRng,
) -> Outcome {
    let pareto = ctx.pareto(state);
    let tech = ctx.city.base().tech_level();
    let base_gain = state.learning_rate
        * (0.5 + 0.5 * tech)
        * costs::STUDY_BASE_GAIN
        * ctx.modifier(Action::Study)
        * pareto.tech_benefit;
    let gain = ctx.noise(rng, base_gain);

    state.education_level += gain;
    state.skill_depth += gain * 0.8;
    state.skill_width += gain * 0.3;
    state.energy -= ctx.noise(rng, costs::energy_cost(Action::Study));
    state.stress += ctx.noise(rng, costs::stress_cost(Action::Study));

    if state.age >= costs::ADULT_AGE {
        state.income *= costs::STUDY_INCOME_RETENTION;
    }
    Outcome::Applied
}

/// Work: earn income from skills and education, save part of it.
pub fn execute_work(
    state: &mut IndividualState,
    ctx: &ActionContext<'_>,
    rng: &mut SimRng,
) -> Outcome {
    let pareto = ctx.pareto(state);
    let base = ctx.city.base();
    let skill = state.skill_depth * 0.7 + state.skill_width * 0.3;
    let cycle = (base.economic_cycle() + 1.0) / 2.0;
    let base_income = (skill * 0.5 + state.education_level * 0.3 + cycle * 0.2)
        * costs::WORK_BASE_INCOME
        * base.long_cycle_effect()
        * pareto.wealth
        * ctx.modifier(Action::Work)
        * ctx.city.income_multiplier();

    state.income = f64::max(
        state.income * costs::WORK_INCOME_FLOOR,
        ctx.noise(rng, base_income),
    );
    state.wealth += state.income * costs::SAVINGS_RATE * pareto.wealth;

    if ctx.personality.conscientiousness > 0.6 {
        state.employment_stability += ctx.noise(rng, 0.02);
        state.skill_depth += ctx.noise(rng, 0.01);
    }

    state.energy -= ctx.noise(rng, costs::energy_cost(Action::Work));
    let pressure = ctx.city.country().work_stress_factor() + ctx.city.stress_modifier();
    state.stress += ctx.noise(rng, costs::stress_cost(Action::Work) + pressure * 0.1);

    if state.stress > costs::OVERWORK_STRESS {
        state.health -= ctx.noise(rng, 0.01);
        if let Some(weight) = ctx.city.country().mental_strain_weight() {
            state.mental_health -= ctx.noise(rng, 0.05 * weight);
        }
    }
    Outcome::Applied
}

/// Rest: recover energy, stress, and health.
///
/// Consumes exactly one Gaussian draw.
pub fn execute_rest(
    state: &mut IndividualState,
    ctx: &ActionContext<'_>,
    rng: &mut SimRng,
) -> Outcome {
    let recovery = ctx.noise(rng, 0.1 * (1.0 + ctx.personality.resilience));
    state.energy += recovery;
    state.stress -= recovery * 0.8;
    state.health += recovery * 0.3;
    state.mental_health += recovery * 0.2;

    if state.income > 0.0 {
        state.income *= costs::REST_INCOME_RETENTION;
    }
    Outcome::Applied
}

/// Move: gamble on relocation; always pay the moving costs.
pub fn execute_move(
    state: &mut IndividualState,
    ctx: &ActionContext<'_>,
    rng: &mut SimRng,
) -> Outcome {
    let pareto = ctx.pareto(state);
    let chance = (costs::MOVE_BASE_CHANCE * pareto.opportunity * ctx.modifier(Action::Move))
        .min(costs::MOVE_CHANCE_CAP);
    let succeeded = rng.uniform() < chance;

    if succeeded {
        state.employment_stability += ctx.noise(rng, 0.1);
        state.income += ctx.noise(rng, state.income * 0.2 * pareto.wealth);
        state.social_capital += ctx.noise(rng, 0.05);
    } else {
        state.employment_stability -= ctx.noise(rng, 0.1);
        state.income *= ctx.noise(rng, 0.8);
        state.stress += ctx.noise(rng, 0.1);
    }

    state.wealth -= ctx.noise(rng, costs::MOVE_COST * ctx.city.living_cost_multiplier());
    state.energy -= ctx.noise(rng, costs::energy_cost(Action::Move));
    state.stress += ctx.noise(rng, costs::stress_cost(Action::Move));

    if succeeded {
        Outcome::Succeeded
    } else {
        Outcome::Failed
    }
}

/// Risk: a venture decided by a fixed threshold on its chance.
///
/// The chance includes one uniform draw, but success is `chance > 0.5`
/// rather than a Bernoulli trial.
pub fn execute_risk(
    state: &mut IndividualState,
    ctx: &ActionContext<'_>,
    rng: &mut SimRng,
) -> Outcome {
    let pareto = ctx.pareto(state);
    let cycle = (ctx.city.base().economic_cycle() + 1.0) / 2.0;
    let mut chance = (state.skill_depth * 0.3
        + state.social_capital * 0.2
        + cycle * 0.3
        + rng.uniform() * 0.2)
        * pareto.opportunity
        * ctx.modifier(Action::Risk);
    if ctx.city.age_penalized(state.age) {
        chance *= costs::RISK_AGE_PENALTY;
    }
    let succeeded = chance > costs::RISK_THRESHOLD;

    if succeeded {
        let stake = costs::RISK_STAKE + state.wealth.max(0.0) * 0.5;
        state.wealth += ctx.noise(rng, stake) * pareto.wealth;
        state.income *= ctx.noise(rng, 1.5);
        state.social_capital += ctx.noise(rng, 0.1);
    } else {
        let exposure = (1.0 / pareto.opportunity).min(1.0);
        state.wealth -= ctx.noise(rng, state.wealth.max(0.0) * 0.3) * exposure;
        state.stress += ctx.noise(rng, 0.15);
        state.employment_stability -= ctx.noise(rng, 0.1);
    }

    state.energy -= ctx.noise(rng, costs::energy_cost(Action::Risk));
    state.stress += ctx.noise(rng, costs::stress_cost(Action::Risk));

    if succeeded {
        Outcome::Succeeded
    } else {
        Outcome::Failed
    }
}

/// Relation: invest in relationships.
///
/// Consumes exactly three Gaussian draws.
pub fn execute_relation(
    state: &mut IndividualState,
    ctx: &ActionContext<'_>,
    rng: &mut SimRng,
) -> Outcome {
    let gain = ctx.noise(rng, 0.1 * (1.0 + ctx.personality.social_drive))
        * ctx.city.action_modifier(Action::Relation);
    state.social_capital += gain;
    state.loneliness -= gain * 0.8;
    state.mental_health += gain * 0.3;
    state.energy -= ctx.noise(rng, costs::energy_cost(Action::Relation));
    state.wealth -= ctx.noise(rng, costs::RELATION_SPENDING);
    Outcome::Applied
}

/// Dispatch an action to its handler.
pub fn execute_action(
    action: Action,
    state: &mut IndividualState,
    ctx: &ActionContext<'_>,
    rng: &mut SimRng,
) -> ActionOutcome {
    let outcome = match action {
        Action::Study => execute_study(state, ctx, rng),
        Action::Work => execute_work(state, ctx, rng),
        Action::Rest => execute_rest(state, ctx, rng),
        Action::Move => execute_move(state, ctx, rng),
        Action::Risk => execute_risk(state, ctx, rng),
        Action::Relation => execute_relation(state, ctx, rng),
    };
    ActionOutcome { action, outcome }
}
