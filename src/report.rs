//! Plain-text rendering of simulation results.
//!
//! Three views, each a `Display` adapter:
//! - [`TraceTable`]: one row per simulated unit, plus completion rows
//! - [`ResultsTable`]: per-process metrics and averages
//! - [`TextReport`]: trace, Gantt chart, and results together

use std::fmt;

use crate::gantt::GanttChart;
use crate::models::ProcessState;
use crate::scheduler::{SimulationMetrics, TickEvent};
use crate::simulation::SimulationReport;

/// Tick-by-tick trace table.
#[derive(Debug, Clone, Copy)]
pub struct TraceTable<'a> {
    events: &'a [TickEvent],
}

impl<'a> TraceTable<'a> {
    pub fn new(events: &'a [TickEvent]) -> Self {
        Self { events }
    }
}

impl fmt::Display for TraceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time   PID   State       Remaining")?;
        writeln!(f, "{}", "=".repeat(35))?;
        for event in self.events {
            match *event {
                TickEvent::Idle { time } => {
                    writeln!(f, "{:<6}{:<5}{:<12}{}", time, "-", "Idle", "-")?;
                }
                TickEvent::Ran {
                    time,
                    id,
                    remaining,
                } => {
                    writeln!(
                        f,
                        "{:<6}P{:<4}{:<12}{}",
                        time,
                        id,
                        ProcessState::Running.to_string(),
                        remaining
                    )?;
                }
                TickEvent::Completed { time, id } => {
                    writeln!(
                        f,
                        "{:<6}P{:<4}{:<12}{:<10} (Completed)",
                        time,
                        id,
                        ProcessState::Completed.to_string(),
                        0
                    )?;
                }
            }
        }
        Ok(())
    }
}

/// Per-process results and averages.
#[derive(Debug, Clone, Copy)]
pub struct ResultsTable<'a> {
    metrics: &'a SimulationMetrics,
}

impl<'a> ResultsTable<'a> {
    pub fn new(metrics: &'a SimulationMetrics) -> Self {
        Self { metrics }
    }
}

impl fmt::Display for ResultsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SRTF Performance Results:")?;
        writeln!(
            f,
            "PID  Arrival  Burst  Completion  Turnaround  Waiting  Response"
        )?;
        writeln!(f, "{}", "-".repeat(65))?;
        for m in &self.metrics.processes {
            writeln!(
                f,
                "P{:<3} {:<8} {:<6} {:<11} {:<11} {:<8} {}",
                m.id, m.arrival, m.burst, m.completion, m.turnaround, m.waiting, m.response
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Average Turnaround Time  = {:.2}",
            self.metrics.avg_turnaround
        )?;
        writeln!(f, "Average Waiting Time     = {:.2}", self.metrics.avg_waiting)?;
        writeln!(f, "Average Response Time    = {:.2}", self.metrics.avg_response)
    }
}

/// Full text report of a finished run.
#[derive(Debug, Clone, Copy)]
pub struct TextReport<'a> {
    report: &'a SimulationReport,
}

impl<'a> TextReport<'a> {
    pub fn new(report: &'a SimulationReport) -> Self {
        Self { report }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TraceTable::new(&self.report.events))?;
        if !self.report.segments.is_empty() {
            writeln!(f)?;
            writeln!(f, "Gantt Chart:")?;
            writeln!(f)?;
            write!(f, "{}", GanttChart::new(&self.report.segments))?;
        }
        writeln!(f)?;
        write!(f, "{}", ResultsTable::new(&self.report.metrics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{run, SimulationRequest};

    fn preemption_report() -> SimulationReport {
        run(&SimulationRequest::new(Vec::new())
            .with_process(0, 5)
            .with_process(1, 3))
        .unwrap()
    }

    #[test]
    fn test_trace_rows() {
        let report = run(&SimulationRequest::new(Vec::new()).with_process(1, 1)).unwrap();
        let text = TraceTable::new(&report.events).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Time   PID   State       Remaining");
        assert_eq!(lines[2], "0     -    Idle        -");
        assert_eq!(lines[3], "1     P1   Running     0");
        assert_eq!(lines[4], "2     P1   Completed   0          (Completed)");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_results_rows() {
        let report = preemption_report();
        let text = ResultsTable::new(&report.metrics).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], "P1   0        5      8           8           3        0");
        assert_eq!(lines[4], "P2   1        3      4           3           0        0");
        assert!(text.contains("Average Turnaround Time  = 5.50"));
        assert!(text.contains("Average Waiting Time     = 1.50"));
        assert!(text.contains("Average Response Time    = 0.00"));
    }

    #[test]
    fn test_full_report_sections() {
        let report = preemption_report();
        let text = TextReport::new(&report).to_string();
        let trace_at = text.find("Time   PID").unwrap();
        let gantt_at = text.find("Gantt Chart:").unwrap();
        let results_at = text.find("SRTF Performance Results:").unwrap();
        assert!(trace_at < gantt_at && gantt_at < results_at);
        assert!(text.contains("      |P1|-P2|-P1-|"));
    }
}
