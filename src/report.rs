//! Plain-text rendering of simulation results.
//!
//! Produces the per-process listing, the metrics block, a one-line Gantt
//! timeline, and horizontal bar charts comparing algorithms.

use std::fmt::Write as _;

use crate::models::Schedule;
use crate::scheduler::{Comparison, ScheduleMetrics, SimulationResult};

const RULE: &str = "-----------------------------------------------";

/// Per-process lines, in finalization order.
pub fn render_processes(schedule: &Schedule) -> String {
    let mut out = String::new();
    for p in &schedule.processes {
        let _ = writeln!(
            out,
            "Process {}->  Completion Time = {}, Waiting Time = {}, Turnaround Time = {}",
            p.process_id, p.completion_time, p.waiting_time, p.turnaround_time
        );
    }
    out
}

/// Aggregate metrics, two decimals.
pub fn render_metrics(metrics: &ScheduleMetrics) -> String {
    format!(
        "CPU Utilization: {:.2}%\nAverage Waiting Time: {:.2}\nAverage Turnaround Time: {:.2}\n",
        metrics.cpu_utilization, metrics.avg_waiting_time, metrics.avg_turnaround_time
    )
}

/// One-line timeline: `|0 P1 2|2 P2 4|` with idle stretches shown as `idle`.
pub fn render_gantt(schedule: &Schedule) -> String {
    let mut out = String::new();
    let mut clock = 0;
    for slice in &schedule.slices {
        if slice.start > clock {
            let _ = write!(out, "|{} idle {}", clock, slice.start);
        }
        let _ = write!(out, "|{} P{} {}", slice.start, slice.process_id, slice.end);
        clock = slice.end;
    }
    if !out.is_empty() {
        out.push('|');
    }
    out
}

/// Full report for one algorithm run.
pub fn render_result(result: &SimulationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} SCHEDULING", result.schedule.algorithm);
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&render_processes(&result.schedule));
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&render_metrics(&result.metrics));
    let gantt = render_gantt(&result.schedule);
    if !gantt.is_empty() {
        let _ = writeln!(out, "Timeline: {gantt}");
    }
    out
}

/// Two bar charts (average waiting time, average turnaround time)
/// followed by the algorithm with the lowest value in each.
///
/// Bars are scaled so the largest value in each chart spans `width` cells.
pub fn render_comparison_chart(comparison: &Comparison, width: usize) -> String {
    let mut out = String::new();
    render_bars(
        &mut out,
        "Average Waiting Time Comparison",
        comparison
            .entries
            .iter()
            .map(|e| (e.algorithm.as_str(), e.avg_waiting_time)),
        width,
    );
    out.push('\n');
    render_bars(
        &mut out,
        "Average Turnaround Time Comparison",
        comparison
            .entries
            .iter()
            .map(|e| (e.algorithm.as_str(), e.avg_turnaround_time)),
        width,
    );
    if let Some(best) = comparison.best_by_waiting() {
        let _ = writeln!(
            out,
            "\nLowest Average Waiting Time: {} ({:.2})",
            best.algorithm, best.avg_waiting_time
        );
    }
    if let Some(best) = comparison.best_by_turnaround() {
        let _ = writeln!(
            out,
            "Lowest Average Turnaround Time: {} ({:.2})",
            best.algorithm, best.avg_turnaround_time
        );
    }
    out
}

fn render_bars<'a, I>(out: &mut String, title: &str, values: I, width: usize)
where
    I: Iterator<Item = (&'a str, f64)> + Clone,
{
    let max = values.clone().map(|(_, v)| v).fold(0.0_f64, f64::max);
    let label_width = values.clone().map(|(l, _)| l.len()).max().unwrap_or(0);

    let _ = writeln!(out, "{title}");
    for (label, value) in values {
        let cells = if max > 0.0 {
            (value / max * width as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{label:<label_width$} | {} {value:.2}",
            "#".repeat(cells)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{compare, simulate, Algorithm, FcfsScheduler, SjfMode};

    fn sample() -> Vec<Process> {
        vec![Process::new(1, 0, 5), Process::new(2, 2, 3)]
    }

    #[test]
    fn test_render_processes() {
        let result = simulate(&FcfsScheduler::new(), &sample()).unwrap();
        let text = render_processes(&result.schedule);
        assert_eq!(
            text,
            "Process 1->  Completion Time = 5, Waiting Time = 0, Turnaround Time = 5\n\
             Process 2->  Completion Time = 8, Waiting Time = 3, Turnaround Time = 6\n"
        );
    }

    #[test]
    fn test_render_metrics() {
        let result = simulate(&FcfsScheduler::new(), &sample()).unwrap();
        let text = render_metrics(&result.metrics);
        assert!(text.contains("CPU Utilization: 100.00%"));
        assert!(text.contains("Average Waiting Time: 1.50"));
        assert!(text.contains("Average Turnaround Time: 5.50"));
    }

    #[test]
    fn test_render_gantt_with_idle() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 5, 1)];
        let result = simulate(&FcfsScheduler::new(), &processes).unwrap();
        assert_eq!(
            render_gantt(&result.schedule),
            "|0 P1 2|2 idle 5|5 P2 6|"
        );
    }

    #[test]
    fn test_render_result_has_header() {
        let result = simulate(&FcfsScheduler::new(), &sample()).unwrap();
        let text = render_result(&result);
        assert!(text.starts_with("FCFS SCHEDULING\n"));
        assert!(text.contains("Timeline: |0 P1 5|5 P2 8|"));
    }

    #[test]
    fn test_comparison_chart_scales_to_width() {
        let algorithms = [
            Algorithm::Fcfs,
            Algorithm::RoundRobin { quantum: 1 },
            Algorithm::Sjf {
                mode: SjfMode::Global,
            },
        ];
        let comparison = compare(&algorithms, &sample()).unwrap();
        let chart = render_comparison_chart(&comparison, 10);

        assert!(chart.contains("Average Waiting Time Comparison"));
        assert!(chart.contains("Average Turnaround Time Comparison"));
        let longest = chart
            .lines()
            .map(|l| l.matches('#').count())
            .max()
            .unwrap();
        assert_eq!(longest, 10);
    }

    #[test]
    fn test_comparison_chart_names_best() {
        // P1 (0,8), P2 (1,4), P3 (2,2): SJF has both the lowest average
        // waiting (11/3) and turnaround (25/3) time.
        let processes = vec![
            Process::new(1, 0, 8),
            Process::new(2, 1, 4),
            Process::new(3, 2, 2),
        ];
        let algorithms = [
            Algorithm::Fcfs,
            Algorithm::RoundRobin { quantum: 2 },
            Algorithm::Sjf {
                mode: SjfMode::Global,
            },
        ];
        let comparison = compare(&algorithms, &processes).unwrap();
        let chart = render_comparison_chart(&comparison, 10);

        assert!(chart.contains("Lowest Average Waiting Time: SJF (3.67)"));
        assert!(chart.contains("Lowest Average Turnaround Time: SJF (8.33)"));
    }

    #[test]
    fn test_chart_all_zero() {
        let comparison = compare(&[Algorithm::Fcfs], &[Process::new(1, 0, 3)]).unwrap();
        let chart = render_comparison_chart(&comparison, 10);
        assert!(chart.contains("FCFS |  0.00"));
    }
}
