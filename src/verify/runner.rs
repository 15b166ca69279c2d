//! Named-check dispatch and PASS/FAIL reporting
//!
//! Each check name maps to its predicate through a static lookup table, so
//! adding a check is one table entry. Failure output mirrors the verbose
//! convention of the solution file format: a configuration at path index
//! `i` sits on 1-based source line `i + 2` (one configuration per line
//! after the 2-line header).

use std::str::FromStr;

use serde::Serialize;

use super::Verifier;
use crate::core::error::BoomwalkError;

/// Offset from a path index to its 1-based solution-file line number
const LINE_OFFSET: usize = 2;

/// The nine named checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Initial,
    Goal,
    Steps,
    Booms,
    Convexity,
    Areas,
    Bounds,
    Collisions,
    Cost,
}

impl CheckKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Goal => "goal",
            Self::Steps => "steps",
            Self::Booms => "booms",
            Self::Convexity => "convexity",
            Self::Areas => "areas",
            Self::Bounds => "bounds",
            Self::Collisions => "collisions",
            Self::Cost => "cost",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Initial => "Initial state",
            Self::Goal => "Goal state",
            Self::Steps => "Step sizes",
            Self::Booms => "Boom lengths",
            Self::Convexity => "Convexity",
            Self::Areas => "Areas",
            Self::Bounds => "Bounds",
            Self::Collisions => "Collisions",
            Self::Cost => "Solution cost",
        }
    }
}

impl FromStr for CheckKind {
    type Err = BoomwalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DISPATCH
            .iter()
            .map(|(kind, _)| *kind)
            .find(|kind| kind.name() == s)
            .ok_or_else(|| BoomwalkError::UnknownCheck(s.to_string()))
    }
}

type CheckFn = fn(&Verifier) -> Outcome;

/// Static dispatch table: check name to predicate, in report order
const DISPATCH: &[(CheckKind, CheckFn)] = &[
    (CheckKind::Initial, check_initial),
    (CheckKind::Goal, check_goal),
    (CheckKind::Steps, check_steps),
    (CheckKind::Booms, check_booms),
    (CheckKind::Convexity, check_convexity),
    (CheckKind::Areas, check_areas),
    (CheckKind::Bounds, check_bounds),
    (CheckKind::Collisions, check_collisions),
    (CheckKind::Cost, check_cost),
];

/// All checks in default run order
pub const ALL_CHECKS: [CheckKind; 9] = [
    CheckKind::Initial,
    CheckKind::Goal,
    CheckKind::Steps,
    CheckKind::Booms,
    CheckKind::Convexity,
    CheckKind::Areas,
    CheckKind::Bounds,
    CheckKind::Collisions,
    CheckKind::Cost,
];

struct Outcome {
    passed: bool,
    failure: Option<String>,
    bad_indices: Vec<usize>,
    /// What the verbose index list is a list of
    index_label: &'static str,
}

impl Outcome {
    fn pass() -> Self {
        Self {
            passed: true,
            failure: None,
            bad_indices: Vec::new(),
            index_label: "",
        }
    }

    fn fail(message: String) -> Self {
        Self {
            passed: false,
            failure: Some(message),
            bad_indices: Vec::new(),
            index_label: "",
        }
    }

    fn fail_at(message: String, bad_indices: Vec<usize>, index_label: &'static str) -> Self {
        Self {
            passed: false,
            failure: Some(message),
            bad_indices,
            index_label,
        }
    }
}

fn check_initial(v: &Verifier) -> Outcome {
    if v.solution().path.is_empty() {
        Outcome::fail("Solution path is empty.".into())
    } else if v.has_initial_first() {
        Outcome::pass()
    } else {
        Outcome::fail("Solution must start at initial state.".into())
    }
}

fn check_goal(v: &Verifier) -> Outcome {
    if v.solution().path.is_empty() {
        Outcome::fail("Solution path is empty.".into())
    } else if v.has_goal_last() {
        Outcome::pass()
    } else {
        Outcome::fail("Solution path must end at goal state.".into())
    }
}

fn check_steps(v: &Verifier) -> Outcome {
    let bad = v.invalid_steps();
    if bad.is_empty() {
        Outcome::pass()
    } else {
        let total = v.solution().path.len().saturating_sub(1);
        Outcome::fail_at(
            format!(
                "Distance exceeds {} for {} of {} step(s).",
                v.config().max_step,
                bad.len(),
                total
            ),
            bad,
            "Starting line for each invalid step:",
        )
    }
}

fn check_booms(v: &Verifier) -> Outcome {
    state_outcome(
        v,
        v.invalid_boom_states(),
        |n, total| format!("Invalid boom length for {n} of {total} state(s)."),
    )
}

fn check_convexity(v: &Verifier) -> Outcome {
    state_outcome(
        v,
        v.non_convex_states(),
        |n, total| format!("{n} of {total} state(s) are not convex."),
    )
}

fn check_areas(v: &Verifier) -> Outcome {
    state_outcome(
        v,
        v.insufficient_area_states(),
        |n, total| format!("{n} of {total} state(s) have insufficient area."),
    )
}

fn check_bounds(v: &Verifier) -> Outcome {
    state_outcome(
        v,
        v.out_of_bounds_states(),
        |n, total| format!("{n} of {total} state(s) go out of the workspace bounds."),
    )
}

fn check_collisions(v: &Verifier) -> Outcome {
    state_outcome(
        v,
        v.colliding_states(),
        |n, total| format!("{n} of {total} state(s) collide with obstacles."),
    )
}

fn check_cost(v: &Verifier) -> Outcome {
    if v.solution().path.is_empty() {
        Outcome::fail("Solution path is empty.".into())
    } else if v.has_correct_cost() {
        Outcome::pass()
    } else {
        Outcome::fail(format!(
            "Incorrect solution cost; was {} but should have been {}",
            v.solution().cost,
            v.solution().calculate_total_cost()
        ))
    }
}

fn state_outcome(
    v: &Verifier,
    bad: Vec<usize>,
    message: impl Fn(usize, usize) -> String,
) -> Outcome {
    if bad.is_empty() {
        Outcome::pass()
    } else {
        let total = v.solution().path.len();
        Outcome::fail_at(
            message(bad.len(), total),
            bad,
            "Line for each invalid configuration:",
        )
    }
}

/// Result of one named check
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub check: CheckKind,
    pub title: &'static str,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    /// 1-based solution-file line numbers of the offenders
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bad_lines: Vec<usize>,
}

/// Aggregated results across all requested checks
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub results: Vec<CheckResult>,
    pub all_passed: bool,
}

/// Runs named checks against a verifier and prints per-check reports
pub struct Runner<'a> {
    verifier: Verifier<'a>,
    verbose: bool,
    quiet: bool,
}

impl<'a> Runner<'a> {
    pub fn new(verifier: Verifier<'a>, verbose: bool) -> Self {
        Self {
            verifier,
            verbose,
            quiet: false,
        }
    }

    /// Collect results without printing (JSON output mode)
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Run one named check, printing its PASS/FAIL line
    pub fn run_check(&self, check: CheckKind, test_no: usize) -> CheckResult {
        let (_, run) = DISPATCH
            .iter()
            .find(|(kind, _)| *kind == check)
            .expect("every CheckKind has a dispatch entry");
        let outcome = run(&self.verifier);

        let bad_lines: Vec<usize> = outcome
            .bad_indices
            .iter()
            .map(|i| i + LINE_OFFSET)
            .collect();

        if !self.quiet {
            println!("Test {}: {}", test_no, check.title());
            match &outcome.failure {
                None => println!("Passed."),
                Some(message) => {
                    println!("FAILED: {message}");
                    if self.verbose && !bad_lines.is_empty() {
                        println!("{}", outcome.index_label);
                        println!("{bad_lines:?}");
                    }
                }
            }
        }

        CheckResult {
            check,
            title: check.title(),
            passed: outcome.passed,
            failure: outcome.failure,
            bad_lines,
        }
    }

    /// Run the given checks in order and aggregate
    pub fn run(&self, checks: &[CheckKind]) -> Report {
        let results: Vec<CheckResult> = checks
            .iter()
            .enumerate()
            .map(|(i, &check)| self.run_check(check, i + 1))
            .collect();
        let all_passed = results.iter().all(|r| r.passed);
        Report {
            results,
            all_passed,
        }
    }
}
