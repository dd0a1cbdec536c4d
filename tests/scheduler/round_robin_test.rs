/*!
 * Round-Robin Tests
 */

use pretty_assertions::assert_eq;
use sched_sim::{run, Process, SchedulingPolicy, SimConfig, TimeQuantum};

fn rr(processes: &[Process], quantum: i64) -> sched_sim::ScheduleReport {
    let config = SimConfig::default().with_quantum(TimeQuantum::new(quantum).unwrap());
    run(SchedulingPolicy::RoundRobin, processes, &config).unwrap()
}

#[test]
fn test_default_quantum_is_four() {
    let processes = vec![Process::new("A", 0, 9, 1)];

    let report = run(SchedulingPolicy::RoundRobin, &processes, &SimConfig::default()).unwrap();
    let lengths: Vec<i64> = report.gantt.iter().map(|s| s.len()).collect();
    assert_eq!(lengths, vec![4, 4, 1]);
}

#[test]
fn test_rotation_order() {
    let processes = vec![
        Process::new("A", 0, 5, 1),
        Process::new("B", 0, 5, 1),
        Process::new("C", 0, 2, 1),
    ];

    let slices: Vec<(String, i64, i64)> = rr(&processes, 2)
        .gantt
        .into_iter()
        .map(|s| (s.pid.to_string(), s.start, s.stop))
        .collect();

    let expected: Vec<(String, i64, i64)> = [
        ("A", 0, 2),
        ("B", 2, 4),
        ("C", 4, 6),
        ("A", 6, 8),
        ("B", 8, 10),
        ("A", 10, 11),
        ("B", 11, 12),
    ]
    .into_iter()
    .map(|(id, start, stop)| (id.to_string(), start, stop))
    .collect();

    assert_eq!(slices, expected);
}

#[test]
fn test_newcomer_queues_ahead_of_expired_process() {
    let processes = vec![Process::new("A", 0, 8, 1), Process::new("B", 1, 4, 1)];

    let ids: Vec<String> = rr(&processes, 4)
        .gantt
        .into_iter()
        .map(|s| s.pid.to_string())
        .collect();
    assert_eq!(ids, vec!["A", "B", "A"]);
}

#[test]
fn test_idle_cpu_until_arrival() {
    let processes = vec![Process::new("A", 0, 1, 1), Process::new("B", 4, 2, 1)];

    let report = rr(&processes, 4);
    assert_eq!(report.gantt[1].start, 4);
    assert_eq!(report.outcomes[1].waiting_time, 0);
    assert_eq!(report.summary.last_completion, 6);
}
