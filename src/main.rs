/*!
 * Scheduling Simulator - Command Line Entry Point
 *
 * Usage: schedsim <input.csv> [--policy fcfs|sjf|priority|rr|all] [--quantum N] [--json]
 *
 * Runs the selected policies over the processes in the input file and
 * writes one report per policy to stdout.
 */

use miette::{bail, IntoDiagnostic, Result};
use sched_sim::{
    init_tracing, load_processes, run, write_json, write_report, SchedulingPolicy, SimConfig,
};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

const USAGE: &str =
    "usage: schedsim <input.csv> [--policy fcfs|sjf|priority|rr|all] [--quantum N] [--json]";

struct Args {
    input: PathBuf,
    policies: Vec<SchedulingPolicy>,
    quantum: Option<String>,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut input = None;
    let mut policies = SchedulingPolicy::ALL.to_vec();
    let mut quantum = None;
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--policy" | "-p" => {
                let Some(value) = args.next() else {
                    bail!("--policy needs a value\n{}", USAGE);
                };
                policies = if value == "all" {
                    SchedulingPolicy::ALL.to_vec()
                } else {
                    vec![value.parse()?]
                };
            }
            "--quantum" | "-q" => {
                let Some(value) = args.next() else {
                    bail!("--quantum needs a value\n{}", USAGE);
                };
                quantum = Some(value);
            }
            "--json" => json = true,
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other if other.starts_with('-') => bail!("unknown option '{}'\n{}", other, USAGE),
            other => {
                if input.replace(PathBuf::from(other)).is_some() {
                    bail!("more than one input file given\n{}", USAGE);
                }
            }
        }
    }

    let Some(input) = input else {
        bail!("missing input file\n{}", USAGE);
    };

    Ok(Args {
        input,
        policies,
        quantum,
        json,
    })
}

fn main() -> Result<()> {
    init_tracing("warn");

    let args = parse_args()?;

    let mut config = SimConfig::from_env()?;
    if let Some(quantum) = &args.quantum {
        config = config.with_quantum_str(quantum)?;
    }

    let mut processes = load_processes(&args.input)?;
    // First-come, first-serve expects arrival order; the other policies don't care
    processes.sort_by_key(|p| p.arrival_time);

    info!(
        input = %args.input.display(),
        processes = processes.len(),
        quantum = config.time_quantum.ticks(),
        "Starting simulations"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for policy in &args.policies {
        let report = run(*policy, &processes, &config)?;
        if args.json {
            write_json(&mut out, &report)?;
        } else {
            write_report(&mut out, &report).into_diagnostic()?;
        }
    }

    out.flush().into_diagnostic()?;
    Ok(())
}
