//! Process list loading.
//!
//! Input is plain text, one process per line, three whitespace-separated
//! integers and no header:
//!
//! ```text
//! process_id arrival_time burst_time
//! ```
//!
//! Blank lines are skipped. Any other malformed line aborts the whole load;
//! no partial list is returned.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::{Result, SchedError};
use crate::models::Process;
use crate::validation::validate_processes;

/// Parses process records from text and validates them.
///
/// # Errors
/// - `Parse { line }` for a line with the wrong token count or a
///   non-integer token.
/// - `InvalidInput` if the parsed list fails validation.
pub fn parse_processes(text: &str) -> Result<Vec<Process>> {
    let mut processes = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 3 {
            return Err(SchedError::parse(
                line_no,
                format!("expected 3 fields, found {}", fields.len()),
            ));
        }

        let mut values = [0i64; 3];
        for (slot, field) in values.iter_mut().zip(&fields) {
            *slot = field
                .parse()
                .map_err(|_| SchedError::parse(line_no, format!("not an integer: {field:?}")))?;
        }
        let [process_id, arrival_time, burst_time] = values;
        processes.push(Process::new(process_id, arrival_time, burst_time));
    }

    validate_processes(&processes).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        SchedError::invalid_input(messages.join("; "))
    })?;

    Ok(processes)
}

/// Reads and parses a process file.
pub fn read_processes(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        let mut err = SchedError::from(e);
        err.message = format!("{}: {}", path.display(), err.message);
        err
    })?;
    let processes = parse_processes(&text)?;
    info!(
        "loaded {} processes from {}",
        processes.len(),
        path.display()
    );
    Ok(processes)
}

/// Formats processes back into the input file format.
pub fn format_processes(processes: &[Process]) -> String {
    processes
        .iter()
        .map(|p| format!("{} {} {}\n", p.process_id, p.arrival_time, p.burst_time))
        .collect()
}
