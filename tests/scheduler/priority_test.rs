/*!
 * Priority Scheduling Tests
 */

use pretty_assertions::assert_eq;
use sched_sim::{run, Process, SchedulingPolicy, SimConfig};

fn ids(processes: &[Process]) -> Vec<String> {
    run(SchedulingPolicy::SjfPriority, processes, &SimConfig::default())
        .unwrap()
        .gantt
        .into_iter()
        .map(|s| s.pid.to_string())
        .collect()
}

#[test]
fn test_lowest_value_served_first() {
    let processes = vec![
        Process::new("P3", 0, 1, 3),
        Process::new("P1", 0, 1, 1),
        Process::new("P2", 0, 1, 2),
    ];

    assert_eq!(ids(&processes), vec!["P1", "P2", "P3"]);
}

#[test]
fn test_priority_one_preempts_priority_three_at_next_tick() {
    let processes = vec![Process::new("bg", 0, 5, 3), Process::new("urgent", 3, 2, 1)];

    let report = run(SchedulingPolicy::SjfPriority, &processes, &SimConfig::default()).unwrap();
    let first_urgent = report
        .gantt
        .iter()
        .find(|s| s.pid == "urgent")
        .unwrap();
    assert_eq!(first_urgent.start, 3);

    assert_eq!(
        ids(&processes),
        vec!["bg", "bg", "bg", "urgent", "urgent", "bg", "bg"]
    );
    assert_eq!(report.outcomes[0].completion_time, 7);
    assert_eq!(report.outcomes[1].completion_time, 5);
}

#[test]
fn test_lower_priority_arrival_waits() {
    let processes = vec![Process::new("fg", 0, 3, 1), Process::new("bg", 1, 2, 4)];

    assert_eq!(ids(&processes), vec!["fg", "fg", "fg", "bg", "bg"]);
}

#[test]
fn test_equal_priority_ties_follow_admission() {
    let processes = vec![
        Process::new("X", 0, 2, 2),
        Process::new("Y", 1, 2, 2),
        Process::new("Z", 1, 1, 2),
    ];

    assert_eq!(ids(&processes), vec!["X", "X", "Y", "Y", "Z"]);
}
