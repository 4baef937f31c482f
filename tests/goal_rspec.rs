//! Behavioural tests for level completion via goal doors.

use tandem::{BodyColor, BodyIntent, Simulation};
use test_utils::levels::{simulation, GOAL_DOORS};
use test_utils::{body, run_steps, step_until};

#[derive(Clone, Debug)]
struct Env {
    sim: Simulation,
}

impl Default for Env {
    fn default() -> Self {
        Self {
            sim: simulation(&GOAL_DOORS),
        }
    }
}

#[test]
fn both_bodies_on_their_doors_complete_the_level() {
    rspec::run(&rspec::given(
        "each body directly above its own door",
        Env::default(),
        |ctx| {
            ctx.when("they drop into the doors", |ctx| {
                ctx.before_each(|env| {
                    env.sim = simulation(&GOAL_DOORS);
                    run_steps(&mut env.sim, &[BodyIntent::IDLE; 2], 1);
                });
                ctx.then("the level is complete on that step", |env| {
                    assert!(env.sim.is_level_complete());
                    assert!(body(&env.sim, BodyColor::Red).is_in_goal());
                });
            });
            ctx.when("red walks out of its door", |ctx| {
                ctx.before_each(|env| {
                    env.sim = simulation(&GOAL_DOORS);
                    run_steps(&mut env.sim, &[BodyIntent::IDLE; 2], 5);
                    let left = step_until(
                        &mut env.sim,
                        &[BodyIntent::LEFT, BodyIntent::IDLE],
                        20,
                        |sim| !body(sim, BodyColor::Red).is_in_goal(),
                    );
                    assert!(left.is_some(), "red never left its door");
                });
                ctx.then("completion drops on the same step", |env| {
                    assert!(!env.sim.is_level_complete());
                    assert!(body(&env.sim, BodyColor::Blue).is_in_goal());
                });
            });
        },
    ));
}
