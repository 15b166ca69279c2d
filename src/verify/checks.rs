//! The verification predicates
//!
//! Every check here is a pure function of the problem, the solution and the
//! configured constants. Nothing raises: length-mismatched comparisons come
//! back as the `None` sentinel and count as violations, and an empty path
//! simply fails the endpoint checks.

use std::f64::consts::PI;

use crate::core::VerifyConfig;
use crate::geom::Rect;
use crate::model::{Configuration, Problem, Solution};

/// Stateless verifier over one problem/solution pair
///
/// Constructed once with the tolerance and constants; every method is a
/// pure query. `*_states`/`*_steps` methods return the offending path
/// indices in path order.
pub struct Verifier<'a> {
    problem: &'a Problem,
    solution: &'a Solution,
    config: VerifyConfig,
    lenient_bounds: Rect,
}

/// Normalise an angle into (-pi, pi]
fn normalise_angle(mut angle: f64) -> f64 {
    while angle <= -PI {
        angle += 2.0 * PI;
    }
    while angle > PI {
        angle -= 2.0 * PI;
    }
    angle
}

impl<'a> Verifier<'a> {
    pub fn new(problem: &'a Problem, solution: &'a Solution, config: VerifyConfig) -> Self {
        let lenient_bounds = config.bounds.grow(config.max_error);
        Self {
            problem,
            solution,
            config,
            lenient_bounds,
        }
    }

    pub fn problem(&self) -> &Problem {
        self.problem
    }

    pub fn solution(&self) -> &Solution {
        self.solution
    }

    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// Whether the first configuration matches the initial state
    pub fn has_initial_first(&self) -> bool {
        match self.solution.path.first() {
            Some(first) => match first.max_distance(&self.problem.initial) {
                Some(d) => d <= self.config.max_error,
                None => false,
            },
            None => false,
        }
    }

    /// Whether the last configuration matches the goal state
    pub fn has_goal_last(&self) -> bool {
        match self.solution.path.last() {
            Some(last) => match last.max_distance(&self.problem.goal) {
                Some(d) => d <= self.config.max_error,
                None => false,
            },
            None => false,
        }
    }

    /// Whether the move from `c0` to `c1` is a legal primitive step
    pub fn is_valid_step(&self, c0: &Configuration, c1: &Configuration) -> bool {
        match c0.max_distance(c1) {
            Some(d) => d <= self.config.max_error + self.config.max_step,
            None => false,
        }
    }

    /// Start indices of every oversized step
    pub fn invalid_steps(&self) -> Vec<usize> {
        self.solution
            .path
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| !self.is_valid_step(&pair[0], &pair[1]))
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether every boom in the configuration has legal length
    pub fn has_valid_boom_lengths(&self, cfg: &Configuration) -> bool {
        cfg.booms().all(|boom| {
            let len = boom.length();
            len >= self.config.min_boom_length - self.config.max_error
                && len <= self.config.max_boom_length + self.config.max_error
        })
    }

    /// Path indices of every configuration with a bad boom
    pub fn invalid_boom_states(&self) -> Vec<usize> {
        self.bad_states(|cfg| !self.has_valid_boom_lengths(cfg))
    }

    /// Whether the configuration polygon is convex (and not self-intersecting)
    ///
    /// Walks the closed vertex loop (wrapping past the first two points so
    /// every turn is visited) and requires a consistent turning sign.
    /// Turns below tolerance count as straight. An exact pi turn is a
    /// degenerate reversal and fails outright, and more than 3*pi of
    /// accumulated unsigned turning means the loop crosses itself even if
    /// the signs agree.
    pub fn is_convex(&self, cfg: &Configuration) -> bool {
        let points = cfg.points();
        if points.len() < 3 {
            return false;
        }
        let wrapped: Vec<_> = points
            .iter()
            .chain(points.iter().take(2))
            .copied()
            .collect();

        let mut required_sign = 0i32;
        let mut total_turned = 0.0;
        let mut p1 = wrapped[1];
        let mut heading = (p1.y - wrapped[0].y).atan2(p1.x - wrapped[0].x);

        for &p2 in &wrapped[2..] {
            let next_heading = (p2.y - p1.y).atan2(p2.x - p1.x);
            let turning = normalise_angle(next_heading - heading);

            if turning == PI {
                return false;
            }

            total_turned += turning.abs();
            if total_turned > 3.0 * PI {
                return false;
            }

            let turn_sign = if turning < -self.config.max_error {
                -1
            } else if turning > self.config.max_error {
                1
            } else {
                0
            };

            if turn_sign * required_sign < 0 {
                return false;
            }
            if turn_sign != 0 {
                required_sign = turn_sign;
            }

            p1 = p2;
            heading = next_heading;
        }

        true
    }

    /// Path indices of every non-convex configuration
    pub fn non_convex_states(&self) -> Vec<usize> {
        self.bad_states(|cfg| !self.is_convex(cfg))
    }

    /// Whether the configuration encloses at least the required area
    pub fn has_enough_area(&self, cfg: &Configuration) -> bool {
        let area = cfg.signed_area().abs() / 2.0;
        area >= self.config.minimum_area(cfg.len()) - self.config.max_error
    }

    /// Path indices of every configuration with insufficient area
    pub fn insufficient_area_states(&self) -> Vec<usize> {
        self.bad_states(|cfg| !self.has_enough_area(cfg))
    }

    /// Whether the whole configuration fits within the lenient bounds
    ///
    /// Every point must lie strictly inside the tolerance-grown bounds, so
    /// a point exactly on the workspace boundary is still in bounds.
    pub fn fits_bounds(&self, cfg: &Configuration) -> bool {
        cfg.points().iter().all(|p| self.lenient_bounds.contains(p))
    }

    /// Path indices of every out-of-bounds configuration
    pub fn out_of_bounds_states(&self) -> Vec<usize> {
        self.bad_states(|cfg| !self.fits_bounds(cfg))
    }

    /// Whether any boom of the configuration hits any obstacle
    ///
    /// Obstacles are shrunk by the tolerance before testing, so a boom
    /// resting exactly on an obstacle boundary is tolerated.
    pub fn has_collision(&self, cfg: &Configuration) -> bool {
        self.problem.obstacles.iter().any(|obstacle| {
            let lenient = obstacle.grow(-self.config.max_error);
            cfg.booms().any(|boom| boom.intersects_rect(&lenient))
        })
    }

    /// Path indices of every colliding configuration
    pub fn colliding_states(&self) -> Vec<usize> {
        self.bad_states(|cfg| self.has_collision(cfg))
    }

    /// Difference between the declared cost and the recomputed one
    pub fn cost_discrepancy(&self) -> f64 {
        (self.solution.cost - self.solution.calculate_total_cost()).abs()
    }

    /// Whether the declared cost matches the recomputed one
    pub fn has_correct_cost(&self) -> bool {
        !self.solution.path.is_empty() && self.cost_discrepancy() <= self.config.max_error
    }

    fn bad_states(&self, is_bad: impl Fn(&Configuration) -> bool) -> Vec<usize> {
        self.solution
            .path
            .iter()
            .enumerate()
            .filter(|(_, cfg)| is_bad(cfg))
            .map(|(i, _)| i)
            .collect()
    }
}
