//! Behavioural tests for walking over ramps.

use tandem::{BodyColor, BodyEvent, BodyIntent, Simulation};
use test_utils::levels::{simulation, LOW_RAMP_CEILING, RAMP_HILL};
use test_utils::{assert_clear_of_solids, body};

const FLOOR_TOP: f32 = 120.0;

/// Bottom edge, centre and grounded flag of one body after a step.
#[derive(Clone, Copy, Debug)]
struct Sample {
    centre: f32,
    bottom: f32,
    grounded: bool,
}

#[derive(Clone, Debug)]
struct Env {
    sim: Simulation,
    walker: BodyColor,
    trace: Vec<Sample>,
    events: Vec<BodyEvent>,
}

impl Env {
    fn new(rows: &'static [&'static str]) -> Self {
        Self {
            sim: simulation(rows),
            walker: BodyColor::Red,
            trace: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Restarts on `rows` and walks `walker` for `steps`, checking solid
    /// clearance after every step.
    fn walk(&mut self, rows: &[&str], walker: BodyColor, intent: BodyIntent, steps: usize) {
        self.sim = simulation(rows);
        self.walker = walker;
        self.trace.clear();
        self.events.clear();
        let intents = match walker {
            BodyColor::Red => [intent, BodyIntent::IDLE],
            BodyColor::Blue => [BodyIntent::IDLE, intent],
        };
        let start = body(&self.sim, walker).bounding_box();
        self.trace.push(Sample {
            centre: start.center_x(),
            bottom: start.bottom(),
            grounded: false,
        });
        for _ in 0..steps {
            self.sim.step(&intents);
            self.events.extend(self.sim.drain_events());
            for b in self.sim.bodies() {
                assert_clear_of_solids(&self.sim, b);
            }
            let w = body(&self.sim, walker);
            let bounds = w.bounding_box();
            self.trace.push(Sample {
                centre: bounds.center_x(),
                bottom: bounds.bottom(),
                grounded: w.is_grounded(),
            });
        }
    }

    fn landings(&self) -> usize {
        let id = body(&self.sim, self.walker).id();
        self.events
            .iter()
            .filter(|e| **e == BodyEvent::Landed(id))
            .count()
    }

    fn assert_steady_progress(&self, direction: f32) {
        for pair in self.trace.windows(2) {
            if let [before, after] = pair {
                let moved = after.centre - before.centre;
                assert!(
                    (moved - 5.0 * direction).abs() < 1e-3,
                    "moved {moved} between {before:?} and {after:?}"
                );
            }
        }
    }

    fn assert_back_on_the_floor(&self) {
        let last = self.trace.last().expect("walk recorded");
        assert!(last.grounded);
        assert!((last.bottom - FLOOR_TOP).abs() < 1e-4);
    }

    fn highest_bottom(&self) -> f32 {
        self.trace
            .iter()
            .map(|s| s.bottom)
            .fold(f32::INFINITY, f32::min)
    }
}

#[test]
fn walking_over_a_ramp_hill() {
    rspec::run(&rspec::given("a ramp hill between two bodies", Env::new(&RAMP_HILL), |ctx| {
        ctx.when("red walks right across it", |ctx| {
            ctx.before_each(|env| env.walk(&RAMP_HILL, BodyColor::Red, BodyIntent::RIGHT, 50));
            ctx.then("it never stalls or slides back", |env| {
                env.assert_steady_progress(1.0);
            });
            ctx.then("it climbs to the crest", |env| {
                assert!(env.highest_bottom() <= 100.0);
            });
            ctx.then("it lands once more after dropping off the far side", |env| {
                assert_eq!(env.landings(), 2);
                env.assert_back_on_the_floor();
            });
        });
        ctx.when("blue walks left across it", |ctx| {
            ctx.before_each(|env| env.walk(&RAMP_HILL, BodyColor::Blue, BodyIntent::LEFT, 50));
            ctx.then("it never stalls or slides back", |env| {
                env.assert_steady_progress(-1.0);
            });
            ctx.then("it climbs the far slope and comes back down", |env| {
                assert!(env.highest_bottom() <= 100.0);
                env.assert_back_on_the_floor();
            });
        });
    }));
}

#[test]
fn low_ceiling_over_ramps() {
    rspec::run(&rspec::given(
        "ramps under a ledge one tile above head height",
        Env::new(&LOW_RAMP_CEILING),
        |ctx| {
            ctx.when("red walks right underneath", |ctx| {
                ctx.before_each(|env| {
                    env.walk(&LOW_RAMP_CEILING, BodyColor::Red, BodyIntent::RIGHT, 50);
                });
                ctx.then("it is never lifted into the ledge", |env| {
                    assert!(env
                        .trace
                        .iter()
                        .skip(1)
                        .all(|s| s.grounded && (s.bottom - FLOOR_TOP).abs() < 1e-4));
                });
                ctx.then("it keeps walking at full speed", |env| {
                    env.assert_steady_progress(1.0);
                });
            });
        },
    ));
}
