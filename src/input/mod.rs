/*!
 * Process Input Loading
 * Line-oriented, comma-separated process records
 *
 * One record per line: `id, arrival, burst, priority`. Blank lines and lines
 * starting with `#` are ignored.
 */

use crate::core::errors::{SchedError, SchedResult};
use crate::core::types::Ticks;
use crate::process::{validate_processes, Process};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

const FIELD_COUNT: usize = 4;

/// Load and validate processes from a file
pub fn load_processes(path: impl AsRef<Path>) -> SchedResult<Vec<Process>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let processes = parse_processes(BufReader::new(file))?;
    info!(path = %path.display(), count = processes.len(), "Loaded processes");
    Ok(processes)
}

/// Parse and validate processes from any buffered reader
pub fn parse_processes<R: BufRead>(reader: R) -> SchedResult<Vec<Process>> {
    let mut processes = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(process) = parse_line(&line, i + 1)? {
            processes.push(process);
        }
    }

    validate_processes(&processes)?;
    Ok(processes)
}

/// Parse processes from an in-memory string
pub fn parse_str(input: &str) -> SchedResult<Vec<Process>> {
    parse_processes(input.as_bytes())
}

/// Parse one line; `Ok(None)` for blank and comment lines
fn parse_line(line: &str, line_no: usize) -> SchedResult<Option<Process>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(SchedError::Parse {
            line: line_no,
            reason: format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                fields.len()
            ),
        });
    }

    let process = Process::new(
        fields[0],
        parse_int(fields[1], "arrival", line_no)?,
        parse_int(fields[2], "burst", line_no)?,
        parse_int(fields[3], "priority", line_no)?,
    );
    debug!(line = line_no, id = %process.id, "Parsed process record");

    Ok(Some(process))
}

fn parse_int(field: &str, name: &str, line_no: usize) -> SchedResult<Ticks> {
    field.parse().map_err(|_| SchedError::Parse {
        line: line_no,
        reason: format!("{} '{}' is not an integer", name, field),
    })
}
