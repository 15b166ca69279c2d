use serde::{Deserialize, Serialize};

use super::{Configuration, Problem};

/// A proposed path: ordered configurations plus the declared total cost
///
/// The declared cost is what the solver claims; `calculate_total_cost`
/// recomputes the true value and the cost check compares the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub path: Vec<Configuration>,
    pub cost: f64,
}

impl Solution {
    pub fn new(path: Vec<Configuration>, cost: f64) -> Self {
        Self { path, cost }
    }

    /// The degenerate two-configuration path straight from initial to goal
    pub fn direct(problem: &Problem) -> Self {
        let path = vec![problem.initial.clone(), problem.goal.clone()];
        let mut solution = Self { path, cost: 0.0 };
        solution.cost = solution.calculate_total_cost();
        solution
    }

    /// Sum of per-step total link displacement over the whole path
    ///
    /// Length-mismatched steps contribute nothing here; they are reported
    /// by the step check instead.
    pub fn calculate_total_cost(&self) -> f64 {
        self.path
            .windows(2)
            .filter_map(|pair| pair[0].total_distance(&pair[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;

    fn line_cfg(x0: f64) -> Configuration {
        Configuration::new(vec![
            Point::new(x0, 0.5),
            Point::new(x0 + 0.05, 0.5),
            Point::new(x0 + 0.1, 0.5),
        ])
    }

    #[test]
    fn total_cost_sums_steps() {
        // Two steps, each moving three vessels by 0.001
        let solution = Solution::new(
            vec![line_cfg(0.1), line_cfg(0.101), line_cfg(0.102)],
            0.0,
        );
        let cost = solution.calculate_total_cost();
        assert!((cost - 0.006).abs() < 1e-12);
    }

    #[test]
    fn direct_solution_spans_initial_to_goal() {
        let problem = Problem::new(3, line_cfg(0.1), line_cfg(0.2), Vec::new());
        let solution = Solution::direct(&problem);
        assert_eq!(solution.path.len(), 2);
        assert_eq!(solution.path[0], problem.initial);
        assert_eq!(solution.path[1], problem.goal);
        assert!((solution.cost - 0.3).abs() < 1e-12);
    }
}
