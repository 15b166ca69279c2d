//! End-to-end tests through the public API: load, verify, report

use std::str::FromStr;

use boomwalk::core::VerifyConfig;
use boomwalk::geom::{Point, Rect};
use boomwalk::io::{load_problem, load_solution, save_solution};
use boomwalk::model::{Configuration, Problem, Solution};
use boomwalk::verify::{CheckKind, Runner, Verifier, ALL_CHECKS};

fn cfg(points: &[(f64, f64)]) -> Configuration {
    Configuration::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

/// A 3-vessel chain lying flat at height y, leftmost vessel at x0
fn chain(x0: f64, y: f64) -> Configuration {
    cfg(&[(x0, y), (x0 + 0.05, y), (x0 + 0.1, y)])
}

fn report_for(problem: &Problem, solution: &Solution) -> boomwalk::verify::Report {
    let verifier = Verifier::new(problem, solution, VerifyConfig::default());
    Runner::new(verifier, false).quiet().run(&ALL_CHECKS)
}

fn result_of(
    report: &boomwalk::verify::Report,
    kind: CheckKind,
) -> &boomwalk::verify::CheckResult {
    report
        .results
        .iter()
        .find(|r| r.check == kind)
        .expect("check was run")
}

#[test]
fn small_step_path_passes_all_checks() {
    // One primitive step of exactly the step limit, bent chain so convexity
    // and area hold
    let initial = cfg(&[(0.2, 0.2), (0.25, 0.2), (0.25, 0.25)]);
    let goal = cfg(&[(0.2, 0.201), (0.25, 0.201), (0.25, 0.251)]);
    let problem = Problem::new(3, initial.clone(), goal.clone(), Vec::new());

    let solution = Solution::new(
        vec![initial.clone(), goal.clone()],
        initial.total_distance(&goal).unwrap(),
    );

    let report = report_for(&problem, &solution);
    assert!(report.all_passed, "{:?}", report.results);
}

#[test]
fn oversized_direct_step_fails_only_the_step_check() {
    // Direct initial-to-goal path with a displacement far above the step
    // limit: endpoints still match, only the step check complains.
    let initial = cfg(&[(0.2, 0.2), (0.25, 0.2), (0.25, 0.25)]);
    let goal = cfg(&[(0.6, 0.2), (0.65, 0.2), (0.65, 0.25)]);
    let problem = Problem::new(3, initial, goal, Vec::new());
    let solution = Solution::direct(&problem);

    let report = report_for(&problem, &solution);
    assert!(result_of(&report, CheckKind::Initial).passed);
    assert!(result_of(&report, CheckKind::Goal).passed);
    assert!(result_of(&report, CheckKind::Cost).passed);
    assert!(!result_of(&report, CheckKind::Steps).passed);
}

#[test]
fn configuration_inside_an_obstacle_fails_collisions() {
    let initial = cfg(&[(0.1, 0.5), (0.15, 0.5), (0.15, 0.55)]);
    let inside = cfg(&[(0.45, 0.45), (0.5, 0.45), (0.5, 0.5)]);
    let goal = cfg(&[(0.8, 0.5), (0.85, 0.5), (0.85, 0.55)]);
    let problem = Problem::new(
        3,
        initial.clone(),
        goal.clone(),
        vec![Rect::new(0.4, 0.3, 0.2, 0.4)],
    );
    let solution = Solution::new(vec![initial, inside, goal], 0.0);

    let verifier = Verifier::new(&problem, &solution, VerifyConfig::default());
    let runner = Runner::new(verifier, true).quiet();
    let report = runner.run(&ALL_CHECKS);

    let collisions = result_of(&report, CheckKind::Collisions);
    assert!(!collisions.passed);
    // The middle configuration is index 1, solution-file line 3
    assert_eq!(collisions.bad_lines, vec![3]);
    // The endpoints and the offending configuration are otherwise sound
    assert!(result_of(&report, CheckKind::Bounds).passed);
    assert!(result_of(&report, CheckKind::Convexity).passed);
}

#[test]
fn boundary_inclusion_asymmetry() {
    // A vessel exactly on the workspace corner is in bounds (bounds are
    // grown by the tolerance) while a boom exactly on an obstacle edge is
    // not a collision (obstacles are shrunk by it). The two policies are
    // deliberately different.
    let on_corner = cfg(&[(0.0, 0.0), (0.05, 0.0), (0.05, 0.05)]);
    let problem = Problem::new(
        3,
        on_corner.clone(),
        on_corner.clone(),
        vec![Rect::new(0.0, 0.05, 0.2, 0.2)],
    );
    let solution = Solution::direct(&problem);

    let report = report_for(&problem, &solution);
    assert!(result_of(&report, CheckKind::Bounds).passed);
    assert!(result_of(&report, CheckKind::Collisions).passed);

    // Nudge one vessel just outside: bounds now fail
    let outside = cfg(&[(-0.001, 0.0), (0.049, 0.0), (0.049, 0.05)]);
    let problem = Problem::new(3, outside.clone(), outside, Vec::new());
    let solution = Solution::direct(&problem);
    let report = report_for(&problem, &solution);
    assert!(!result_of(&report, CheckKind::Bounds).passed);
}

#[test]
fn flat_chain_fails_convexity_and_area() {
    let flat = chain(0.2, 0.5);
    let problem = Problem::new(3, flat.clone(), flat, Vec::new());
    let solution = Solution::direct(&problem);

    let report = report_for(&problem, &solution);
    assert!(!result_of(&report, CheckKind::Convexity).passed);
    assert!(!result_of(&report, CheckKind::Areas).passed);
}

#[test]
fn wrong_declared_cost_fails_cost_check_with_discrepancy() {
    let initial = cfg(&[(0.2, 0.2), (0.25, 0.2), (0.25, 0.25)]);
    let goal = cfg(&[(0.2, 0.201), (0.25, 0.201), (0.25, 0.251)]);
    let problem = Problem::new(3, initial.clone(), goal.clone(), Vec::new());
    let solution = Solution::new(vec![initial, goal], 42.0);

    let report = report_for(&problem, &solution);
    let cost = result_of(&report, CheckKind::Cost);
    assert!(!cost.passed);
    let message = cost.failure.as_deref().unwrap();
    assert!(message.contains("42"), "{message}");
}

#[test]
fn problem_and_solution_files_round_trip() {
    let dir = std::env::temp_dir().join("boomwalk_io_test");
    std::fs::create_dir_all(&dir).unwrap();
    let problem_path = dir.join("problem.txt");
    let solution_path = dir.join("solution.txt");

    std::fs::write(
        &problem_path,
        "3\n\
         0.2 0.2 0.25 0.2 0.25 0.25\n\
         0.2 0.201 0.25 0.201 0.25 0.251\n\
         1\n\
         0.5 0.5 0.7 0.5 0.7 0.8 0.5 0.8\n",
    )
    .unwrap();

    let problem = load_problem(&problem_path).unwrap();
    assert_eq!(problem.asv_count, 3);
    assert_eq!(problem.obstacles, vec![Rect::new(0.5, 0.5, 0.2, 0.3)]);

    let solution = Solution::direct(&problem);
    save_solution(&solution_path, &solution).unwrap();
    let reloaded = load_solution(&solution_path).unwrap();
    assert_eq!(reloaded.path, solution.path);
    assert!((reloaded.cost - solution.cost).abs() < 1e-12);

    let report = report_for(&problem, &reloaded);
    assert!(report.all_passed, "{:?}", report.results);
}

#[test]
fn malformed_files_are_hard_errors() {
    let dir = std::env::temp_dir().join("boomwalk_io_err_test");
    std::fs::create_dir_all(&dir).unwrap();

    let bad_problem = dir.join("bad_problem.txt");
    std::fs::write(&bad_problem, "three\n0.1 0.1\n").unwrap();
    assert!(load_problem(&bad_problem).is_err());

    let bad_solution = dir.join("bad_solution.txt");
    std::fs::write(&bad_solution, "2 0.5\n0.1 0.1 0.15 0.1\n").unwrap();
    // Header promises two configurations, file has one
    assert!(load_solution(&bad_solution).is_err());

    assert!(load_problem(dir.join("missing.txt")).is_err());
}

#[test]
fn check_selection_by_name() {
    for name in [
        "initial",
        "goal",
        "steps",
        "booms",
        "convexity",
        "areas",
        "bounds",
        "collisions",
        "cost",
    ] {
        assert!(CheckKind::from_str(name).is_ok(), "{name}");
    }
    assert!(CheckKind::from_str("teleports").is_err());
}
