//! Interactive prompt loop.
//!
//! Reads a process count and per-process arrival/burst times from a text
//! stream, runs one simulation, prints the report, then asks whether to
//! restart or exit. Works over any `BufRead`/`Write` pair so it can be
//! driven by stdin/stdout or by in-memory buffers.
//!
//! Input is whitespace-tokenized: values may be given one per line or
//! several per line. Malformed or out-of-range values abort the current
//! run and fall through to the restart prompt. End of input ends the
//! session.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use tracing::{debug, info_span};

use crate::config::SimulationConfig;
use crate::models::{ProcessSpec, Tick};
use crate::report::TextReport;
use crate::simulation::{self, SimulationRequest};
use crate::validation::{validate_arrival, validate_burst, validate_count};

/// Whitespace-separated token reader.
#[derive(Debug)]
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Outcome of reading one numeric field.
enum Field {
    Value(Tick),
    Malformed,
    EndOfInput,
}

/// How a single run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunEnd {
    /// The run finished (successfully or not); ask about restarting.
    Finished,
    /// Input ran out mid-run.
    EndOfInput,
}

/// Answer to the restart prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Restart,
    Exit,
}

/// An interactive simulation session.
#[derive(Debug)]
pub struct Session<R, W> {
    input: Tokens<R>,
    output: W,
    config: SimulationConfig,
    runs: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with default limits.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Tokens::new(input),
            output,
            config: SimulationConfig::default(),
            runs: 0,
        }
    }

    /// Sets the limits applied to every run.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Number of runs started so far.
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs simulations until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if self.run_once()? == RunEnd::EndOfInput {
                return Ok(());
            }
            if self.prompt_restart()? == Choice::Exit {
                return Ok(());
            }
        }
    }

    fn run_once(&mut self) -> io::Result<RunEnd> {
        self.runs += 1;
        let _span = info_span!("run", n = self.runs).entered();

        let prompt = format!(
            "Enter number of processes (1-{}): ",
            self.config.max_processes
        );
        let count = match self.read_field(&prompt)? {
            Field::Value(n) => n,
            Field::Malformed => return self.abort("Invalid input."),
            Field::EndOfInput => return Ok(RunEnd::EndOfInput),
        };
        if let Err(e) = validate_count(count, &self.config) {
            return self.abort(&format!("Error: {e}."));
        }

        let mut specs = Vec::new();
        for id in 1..=count as usize {
            let arrival = match self.read_field(&format!("Process {id} - Enter Arrival Time: "))? {
                Field::Value(v) => v,
                Field::Malformed => return self.abort("Invalid input for Arrival Time."),
                Field::EndOfInput => return Ok(RunEnd::EndOfInput),
            };
            if let Err(e) = validate_arrival(id, arrival) {
                return self.abort(&format!("{e}."));
            }

            let burst = match self.read_field(&format!("Process {id} - Enter Burst Time: "))? {
                Field::Value(v) => v,
                Field::Malformed => return self.abort("Invalid input for Burst Time."),
                Field::EndOfInput => return Ok(RunEnd::EndOfInput),
            };
            if let Err(e) = validate_burst(id, burst) {
                return self.abort(&format!("{e}."));
            }

            specs.push(ProcessSpec::new(arrival, burst));
        }

        writeln!(self.output)?;
        writeln!(self.output, "--- Start Simulation (SRTF) ---")?;
        writeln!(self.output)?;

        let request = SimulationRequest::new(specs).with_config(self.config);
        match simulation::run(&request) {
            Ok(report) => write!(self.output, "{}", TextReport::new(&report))?,
            Err(e) => writeln!(self.output, "Error: {e}.")?,
        }
        Ok(RunEnd::Finished)
    }

    fn read_field(&mut self, prompt: &str) -> io::Result<Field> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(match self.input.next_token()? {
            None => Field::EndOfInput,
            Some(token) => token.parse().map_or(Field::Malformed, Field::Value),
        })
    }

    fn abort(&mut self, message: &str) -> io::Result<RunEnd> {
        debug!(message, "run aborted");
        writeln!(self.output, "{message}")?;
        Ok(RunEnd::Finished)
    }

    fn prompt_restart(&mut self) -> io::Result<Choice> {
        writeln!(self.output)?;
        write!(self.output, "Press E to exit, Press A to restart: ")?;
        self.output.flush()?;
        loop {
            let Some(token) = self.input.next_token()? else {
                return Ok(Choice::Exit);
            };
            match token.chars().next() {
                Some('E' | 'e') => return Ok(Choice::Exit),
                Some('A' | 'a') => return Ok(Choice::Restart),
                _ => {
                    write!(
                        self.output,
                        "Invalid choice. Press E to exit, Press A to restart: "
                    )?;
                    self.output.flush()?;
                }
            }
        }
    }
}
