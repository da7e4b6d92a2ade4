//! Plan runner integration tests: the full problem-file + plan-file
//! workflow an external planner's output goes through.

use ricochet_engine::{
    board_to_string, move_walkthrough, parse_plan, run_plan, Direction, Event, Move,
    PlanParseError, PlanVerdict, Problem, RobotId,
};

/// 4x4 problem, robot-1 at (1,1) and robot-2 at (1,4), goal robot-1 on
/// cell-2-4. Reachable in three moves: east, south, west (bouncing off
/// robot-2).
fn problem() -> Problem {
    problem_with_goal("cell-2-4")
}

fn problem_with_goal(goal_cell: &str) -> Problem {
    let mut init = String::new();
    for x in 1..=4 {
        for y in 1..4 {
            init.push_str(&format!("    (NEXT cell-{x}-{y} cell-{x}-{} south)\n", y + 1));
            init.push_str(&format!("    (NEXT cell-{x}-{} cell-{x}-{y} north)\n", y + 1));
        }
    }
    for y in 1..=4 {
        for x in 1..4 {
            init.push_str(&format!("    (NEXT cell-{x}-{y} cell-{}-{y} east)\n", x + 1));
            init.push_str(&format!("    (NEXT cell-{}-{y} cell-{x}-{y} west)\n", x + 1));
        }
    }
    for i in 1..=4 {
        init.push_str(&format!("    (BLOCKED cell-{i}-1 north)\n"));
        init.push_str(&format!("    (BLOCKED cell-{i}-4 south)\n"));
        init.push_str(&format!("    (BLOCKED cell-1-{i} west)\n"));
        init.push_str(&format!("    (BLOCKED cell-4-{i} east)\n"));
    }
    init.push_str("    (at robot-1 cell-1-1)\n");
    init.push_str("    (at robot-2 cell-1-4)\n");

    let text = format!("(:init\n{init})\n(:goal\n    (at robot-1 {goal_cell})\n)\n");
    Problem::parse(&text).unwrap()
}

const SKELETON: &str = "\
; cost = 3 (unit cost)
(go robot-1 east)
(go robot-1 south)
(go robot-1 west)
";

#[test]
fn test_three_move_plan_verifies() {
    let problem = problem();
    let board = problem.reconstruct().unwrap();
    let moves = parse_plan(SKELETON, &problem.robots).unwrap();

    let report = run_plan(&board, &problem.occupancy, problem.goal, &moves).unwrap();

    assert_eq!(report.verdict, PlanVerdict::Reached);
    assert_eq!(report.move_count(), 3);
}

#[test]
fn test_truncated_plan_fails_verification() {
    let problem = problem();
    let board = problem.reconstruct().unwrap();
    let mut moves = parse_plan(SKELETON, &problem.robots).unwrap();
    moves.pop();

    let report = run_plan(&board, &problem.occupancy, problem.goal, &moves).unwrap();

    assert_eq!(report.verdict, PlanVerdict::CellUnoccupied);
    assert!(!report.is_reached());
}

#[test]
fn test_wrong_robot_is_not_success() {
    // robot-2 rides east onto the goal cell instead of robot-1.
    let problem = problem_with_goal("cell-4-4");
    let board = problem.reconstruct().unwrap();
    let moves = [Move::new(RobotId(1), Direction::East)];

    let report = run_plan(&board, &problem.occupancy, problem.goal, &moves).unwrap();

    assert_eq!(report.verdict, PlanVerdict::WrongRobot(RobotId(1)));
}

#[test]
fn test_expanded_plan_reconstruction() {
    let problem = problem();
    let board = problem.reconstruct().unwrap();
    let moves = parse_plan(SKELETON, &problem.robots).unwrap();

    let report = run_plan(&board, &problem.occupancy, problem.goal, &moves).unwrap();
    let expanded = report.expanded_plan(&problem.cells, &problem.robots);

    assert_eq!(
        expanded,
        "(go robot-1 east)\n\
         (step robot-1 cell-1-1 cell-2-1 east)\n\
         (step robot-1 cell-2-1 cell-3-1 east)\n\
         (step robot-1 cell-3-1 cell-4-1 east)\n\
         (stop-at-barrier robot-1 cell-4-1 east)\n\
         (go robot-1 south)\n\
         (step robot-1 cell-4-1 cell-4-2 south)\n\
         (step robot-1 cell-4-2 cell-4-3 south)\n\
         (step robot-1 cell-4-3 cell-4-4 south)\n\
         (stop-at-barrier robot-1 cell-4-4 south)\n\
         (go robot-1 west)\n\
         (step robot-1 cell-4-4 cell-3-4 west)\n\
         (step robot-1 cell-3-4 cell-2-4 west)\n\
         (stop-at-robot robot-1 cell-2-4 cell-1-4 west)\n"
    );
}

#[test]
fn test_trace_events_in_temporal_order() {
    let problem = problem();
    let board = problem.reconstruct().unwrap();
    let moves = parse_plan(SKELETON, &problem.robots).unwrap();

    let report = run_plan(&board, &problem.occupancy, problem.goal, &moves).unwrap();

    // Each coarse move contributes go ... terminal, in order.
    let mut expecting_go = true;
    for event in &report.trace {
        match event {
            Event::Go { .. } => {
                assert!(expecting_go, "go in the middle of a move");
                expecting_go = false;
            }
            e if e.is_terminal() => {
                assert!(!expecting_go, "terminal without a go");
                expecting_go = true;
            }
            _ => assert!(!expecting_go, "step outside a move"),
        }
    }
    assert!(expecting_go, "last move never terminated");
}

#[test]
fn test_rerun_is_deterministic() {
    let problem = problem();
    let board = problem.reconstruct().unwrap();
    let moves = parse_plan(SKELETON, &problem.robots).unwrap();

    let a = run_plan(&board, &problem.occupancy, problem.goal, &moves).unwrap();
    let b = run_plan(&board, &problem.occupancy, problem.goal, &moves).unwrap();

    assert_eq!(a.verdict, b.verdict);
    assert_eq!(a.trace, b.trace);
    assert_eq!(a.occupancy, b.occupancy);
}

#[test]
fn test_plan_naming_unplaced_robot_rejected() {
    let problem = problem();

    let err = parse_plan("(go robot-3 east)\n", &problem.robots).unwrap_err();

    assert_eq!(
        err,
        PlanParseError::UnknownRobot {
            line: 1,
            label: "robot-3".to_string()
        }
    );
}

#[test]
fn test_walkthrough_renders_each_move() {
    let problem = problem();
    let board = problem.reconstruct().unwrap();
    let moves = parse_plan(SKELETON, &problem.robots).unwrap();

    let mut occupancy = problem.occupancy.clone();
    let mut displays = Vec::new();
    for &mv in &moves {
        let outcome = ricochet_engine::apply_move(&board, &occupancy, mv).unwrap();
        displays.push(move_walkthrough(
            &board,
            &occupancy,
            &outcome.occupancy,
            Some(problem.goal),
            &outcome.events,
            &problem.robots,
        ));
        occupancy = outcome.occupancy;
    }

    assert_eq!(displays.len(), 3);
    assert!(displays[0].contains("GO robot-1 east"));
    // Before the first move the goal cell shows as a lowercase marker.
    assert!(displays[0].contains('a'));
    // After the last move the goal cell shows the robot standing on it.
    let final_board = board_to_string(&board, &occupancy, Some(problem.goal));
    assert!(final_board.contains('A'));
}
