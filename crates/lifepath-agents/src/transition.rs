//! The yearly transition: actions, then aging, then one clamp.

use lifepath_types::{Action, IndividualState};
use lifepath_world::SimRng;
use tracing::debug;

use crate::actions::handlers::{ActionContext, ActionOutcome, execute_action};
use crate::vitals::apply_aging;

/// Apply one year of actions and aging to `state`.
///
/// Actions run in the given order, each seeing the effects of the ones
/// before it. After aging, every bounded field is clamped back into
/// `[0, 1]`. The age counter is left to the caller.
pub fn apply_year(
    state: &mut IndividualState,
    actions: &[Action],
    ctx: &ActionContext<'_>,
    rng: &mut SimRng,
) -> Vec<ActionOutcome> {
    let outcomes: Vec<ActionOutcome> = actions
        .iter()
        .map(|action| execute_action(*action, state, ctx, rng))
        .collect();

    apply_aging(state, ctx.config, rng);
    state.clamp();

    debug!(
        age = state.age,
        actions = outcomes.len(),
        wealth = state.wealth,
        income = state.income,
        "Transition applied"
    );
    outcomes
}
