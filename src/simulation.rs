//! One complete simulation run.
//!
//! # Pipeline
//!
//! 1. Validate the raw process specs.
//! 2. Build a fresh process list (ids 1..=N in input order).
//! 3. Run the SRTF scheduler.
//! 4. Encode the timeline into Gantt segments.
//! 5. Aggregate metrics.
//!
//! Every call owns its state; nothing is carried between runs.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::gantt::{encode_segments, Segment};
use crate::models::{Process, ProcessSpec, Slot, Tick};
use crate::scheduler::{SimulationMetrics, SrtfScheduler, TickEvent};
use crate::validation::validate_input;

/// Input container for a simulation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes in input order.
    pub processes: Vec<ProcessSpec>,
    /// Run limits.
    #[serde(default)]
    pub config: SimulationConfig,
}

impl SimulationRequest {
    /// Creates a request with default limits.
    pub fn new(processes: Vec<ProcessSpec>) -> Self {
        Self {
            processes,
            config: SimulationConfig::default(),
        }
    }

    /// Sets the run limits.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Appends a process.
    pub fn with_process(mut self, arrival: Tick, burst: Tick) -> Self {
        self.processes.push(ProcessSpec::new(arrival, burst));
        self
    }
}

/// Everything a reporter needs from a finished run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// What ran in each unit, `[0, makespan)`.
    pub timeline: Vec<Slot>,
    /// Run-length encoded timeline.
    pub segments: Vec<Segment>,
    /// Step-by-step trace.
    pub events: Vec<TickEvent>,
    /// Per-process and aggregate metrics.
    pub metrics: SimulationMetrics,
}

impl SimulationReport {
    /// Time at which the last process completed.
    pub fn makespan(&self) -> Tick {
        self.timeline.len() as Tick
    }
}

/// Runs one simulation from raw input.
///
/// # Example
///
/// ```
/// use u_srtf::simulation::{run, SimulationRequest};
///
/// let request = SimulationRequest::new(Vec::new())
///     .with_process(0, 5)
///     .with_process(1, 3);
/// let report = run(&request).unwrap();
///
/// assert_eq!(report.makespan(), 8);
/// assert_eq!(report.segments.len(), 3);
/// assert!((report.metrics.avg_waiting - 1.5).abs() < 1e-10);
/// ```
pub fn run(request: &SimulationRequest) -> Result<SimulationReport, SimulationError> {
    validate_input(&request.processes, &request.config)?;

    let processes: Vec<Process> = request
        .processes
        .iter()
        .enumerate()
        .map(|(index, spec)| Process::from_spec(index, spec))
        .collect();

    info!(processes = processes.len(), "starting SRTF simulation");

    let outcome = SrtfScheduler::new(request.config).schedule(processes)?;
    let segments = encode_segments(outcome.timeline.slots());
    let metrics = SimulationMetrics::calculate(&outcome.processes);

    info!(
        makespan = outcome.makespan(),
        segments = segments.len(),
        avg_turnaround = metrics.avg_turnaround,
        avg_waiting = metrics.avg_waiting,
        "simulation finished"
    );

    Ok(SimulationReport {
        timeline: outcome.timeline.slots().to_vec(),
        segments,
        events: outcome.events,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_single_process_report() {
        let report = run(&SimulationRequest::new(vec![ProcessSpec::new(0, 5)])).unwrap();
        assert_eq!(report.segments, vec![Segment::new(Slot::Busy(1), 0, 5)]);

        let p = report.metrics.process(1).unwrap();
        assert_eq!(p.turnaround, 5);
        assert_eq!(p.waiting, 0);
        assert_eq!(p.response, 0);
    }

    #[test]
    fn test_idle_gap_report() {
        let report = run(&SimulationRequest::new(Vec::new()).with_process(2, 2)).unwrap();
        assert_eq!(
            report.segments,
            vec![
                Segment::new(Slot::Idle, 0, 2),
                Segment::new(Slot::Busy(1), 2, 4),
            ]
        );
        assert_eq!(report.metrics.process(1).unwrap().completion, 4);
        assert_eq!(report.metrics.process(1).unwrap().waiting, 0);
    }

    #[test]
    fn test_three_equal_bursts() {
        let request = SimulationRequest::new(Vec::new())
            .with_process(0, 1)
            .with_process(0, 1)
            .with_process(0, 1);
        let report = run(&request).unwrap();
        assert_eq!(report.makespan(), 3);
        assert_eq!(
            report.timeline,
            vec![Slot::Busy(1), Slot::Busy(2), Slot::Busy(3)]
        );
        assert!((report.metrics.avg_waiting - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_input_rejected_before_scheduling() {
        let request = SimulationRequest::new(Vec::new())
            .with_process(-1, 3)
            .with_process(0, 0);
        let err = run(&request).unwrap_err();
        let kinds: Vec<ValidationErrorKind> =
            err.validation_errors().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::InvalidArrival,
                ValidationErrorKind::InvalidBurst
            ]
        );
    }

    #[test]
    fn test_empty_request_rejected() {
        let err = run(&SimulationRequest::default()).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::InvalidProcessCount
        );
    }

    #[test]
    fn test_overrun_reported() {
        let request = SimulationRequest::new(Vec::new())
            .with_process(0, 8)
            .with_config(SimulationConfig::default().with_max_time(5));
        assert!(matches!(
            run(&request),
            Err(SimulationError::Overrun { ceiling: 5, .. })
        ));
    }

    #[test]
    fn test_runs_are_independent() {
        let request = SimulationRequest::new(Vec::new())
            .with_process(0, 5)
            .with_process(1, 3);
        let first = run(&request).unwrap();
        let second = run(&request).unwrap();
        assert_eq!(first.timeline, second.timeline);
        assert_eq!(first.metrics, second.metrics);
    }

    #[test]
    fn test_request_from_json() {
        let request: SimulationRequest = serde_json::from_str(
            r#"{"processes": [{"arrival": 0, "burst": 5}, {"arrival": 1, "burst": 3}]}"#,
        )
        .unwrap();
        assert_eq!(request.config, SimulationConfig::default());

        let report = run(&request).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["segments"].as_array().unwrap().len(), 3);
        assert_eq!(json["metrics"]["processes"][1]["completion"], 4);
    }

    #[test]
    fn test_request_with_maximal_ceiling() {
        let request: SimulationRequest = serde_json::from_str(
            r#"{"processes": [{"arrival": 0, "burst": 2}],
                "config": {"max_processes": 10, "max_time": 9223372036854775807}}"#,
        )
        .unwrap();
        assert_eq!(request.config.max_time, i64::MAX);

        let report = run(&request).unwrap();
        assert_eq!(report.makespan(), 2);
        assert_eq!(report.timeline.len(), 2);
    }
}
