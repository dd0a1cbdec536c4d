/*!
 * First-Come, First-Serve Tests
 */

use pretty_assertions::assert_eq;
use sched_sim::{run, Process, SchedError, SchedulingPolicy, SimConfig};

fn fcfs(processes: &[Process]) -> sched_sim::ScheduleReport {
    run(SchedulingPolicy::Fcfs, processes, &SimConfig::default()).unwrap()
}

#[test]
fn test_reference_workload() {
    let processes = vec![
        Process::new("P1", 0, 5, 1),
        Process::new("P2", 1, 3, 1),
        Process::new("P3", 2, 2, 1),
    ];

    let report = fcfs(&processes);

    let rows: Vec<(&str, i64, i64, i64)> = report
        .outcomes
        .iter()
        .map(|o| (o.id.as_str(), o.waiting_time, o.turnaround_time, o.completion_time))
        .collect();
    assert_eq!(rows, vec![("P1", 0, 5, 5), ("P2", 4, 7, 8), ("P3", 6, 8, 10)]);

    assert!((report.summary.average_wait - 10.0 / 3.0).abs() < 1e-9);
    assert!((report.summary.average_turnaround - 6.667).abs() < 1e-3);
    assert!((report.summary.throughput - 0.3).abs() < 1e-9);
}

#[test]
fn test_one_slice_per_process_in_input_order() {
    let processes = vec![
        Process::new("A", 0, 2, 3),
        Process::new("B", 0, 4, 1),
        Process::new("C", 3, 1, 2),
    ];

    let report = fcfs(&processes);
    let slices: Vec<(&str, i64, i64)> = report
        .gantt
        .iter()
        .map(|s| (s.pid.as_str(), s.start, s.stop))
        .collect();
    assert_eq!(slices, vec![("A", 0, 2), ("B", 2, 6), ("C", 6, 7)]);
}

#[test]
fn test_zero_arrival_does_not_carry_over_previous_wait() {
    // A zero-arrival process after a waiting one still waits for the full
    // service time, not the previous process's waiting time
    let processes = vec![
        Process::new("A", 0, 3, 1),
        Process::new("B", 0, 2, 1),
        Process::new("C", 0, 1, 1),
    ];

    let report = fcfs(&processes);
    let waits: Vec<i64> = report.outcomes.iter().map(|o| o.waiting_time).collect();
    assert_eq!(waits, vec![0, 3, 5]);
}

#[test]
fn test_waiting_plus_burst_equals_turnaround() {
    let processes = vec![
        Process::new("A", 0, 7, 1),
        Process::new("B", 2, 1, 1),
        Process::new("C", 20, 4, 1),
    ];

    for outcome in fcfs(&processes).outcomes {
        assert_eq!(
            outcome.turnaround_time,
            outcome.burst_duration + outcome.waiting_time
        );
        assert_eq!(
            outcome.turnaround_time,
            outcome.completion_time - outcome.arrival_time
        );
    }
}

#[test]
fn test_unsorted_input_is_rejected() {
    let processes = vec![Process::new("late", 5, 1, 1), Process::new("early", 0, 1, 1)];

    let err = run(SchedulingPolicy::Fcfs, &processes, &SimConfig::default()).unwrap_err();
    assert!(matches!(err, SchedError::UnsortedInput { .. }));
}
