//! Behavioural tests for colour-restricted floor zones.

use tandem::{BodyColor, BodyIntent, RespawnCause, Simulation};
use test_utils::levels::{simulation, COLOR_FLOORS};
use test_utils::{body, respawn_causes, run_steps};

#[derive(Clone, Debug)]
struct Env {
    sim: Simulation,
    causes: Vec<RespawnCause>,
}

impl Default for Env {
    fn default() -> Self {
        Self {
            sim: simulation(&COLOR_FLOORS),
            causes: Vec::new(),
        }
    }
}

#[test]
fn colour_zones_filter_by_identity() {
    rspec::run(&rspec::given(
        "red over red zones and blue straddling a red zone",
        Env::default(),
        |ctx| {
            ctx.when("both bodies idle for a few steps", |ctx| {
                ctx.before_each(|env| {
                    let events = run_steps(&mut env.sim, &[BodyIntent::IDLE; 2], 3);
                    env.causes = respawn_causes(&events);
                });
                ctx.then("the red body stands on its own zone", |env| {
                    let red = body(&env.sim, BodyColor::Red);
                    assert!(red.is_grounded());
                    assert!((red.bounding_box().bottom() - 120.0).abs() < 1e-4);
                });
                ctx.then("the blue body respawns every step", |env| {
                    assert_eq!(env.causes, vec![RespawnCause::WrongColor; 3]);
                });
            });
        },
    ));
}
