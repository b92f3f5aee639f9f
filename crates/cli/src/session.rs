// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The read-eval loop.
//!
//! One line is read, dispatched and fully answered before the next is read.
//! A rejected command only produces its rejection line; the session keeps
//! going until a quit line or end of input.

use std::io::{self, BufRead, Write};

use tracing::trace;
use vms::{Clock, State, apply};

use crate::dispatch::{Request, parse_line};

pub const STARTUP_BANNER: &str = "Vehicle Management System is running.";
pub const SHUTDOWN_BANNER: &str = "Vehicle Management System is terminated.";

/// Holds the in-memory state between commands.
pub struct Session<'c> {
    state: State,
    clock: &'c dyn Clock,
}

impl<'c> Session<'c> {
    /// Creates a session over an empty state.
    pub const fn new(clock: &'c dyn Clock) -> Self {
        Self {
            state: State::new(),
            clock,
        }
    }

    /// Handles one request and returns the lines to print.
    ///
    /// `Quit` produces no output here; the loop prints the shutdown banner.
    pub fn handle(&mut self, request: Request) -> Vec<String> {
        match request {
            Request::Apply(command) => match apply(&self.state, command, self.clock) {
                Ok(transition) => {
                    self.state = transition.new_state;
                    vec![transition.outcome.to_string()]
                }
                Err(err) => vec![err.to_string()],
            },
            Request::Print(report) => report.render(&self.state),
            Request::Invalid(name) => vec![format!("{name} - invalid command!")],
            Request::MissingArguments(name) => vec![format!("{name} - missing arguments!")],
            Request::Quit => Vec::new(),
        }
    }

    #[cfg(test)]
    const fn state(&self) -> &State {
        &self.state
    }
}

/// Runs the console until a quit line or end of input.
///
/// # Errors
///
/// Returns an error if reading a line or writing output fails.
pub fn run<R: BufRead, W: Write>(reader: R, mut writer: W, clock: &dyn Clock) -> io::Result<()> {
    writeln!(writer, "{STARTUP_BANNER}")?;
    writer.flush()?;

    let mut session: Session<'_> = Session::new(clock);
    for line in reader.lines() {
        let line: String = line?;
        trace!(line = %line, "Read input line");

        let Some(request) = parse_line(&line) else {
            continue;
        };

        if request == Request::Quit {
            writeln!(writer, "{SHUTDOWN_BANNER}")?;
            break;
        }

        for output in session.handle(request) {
            writeln!(writer, "{output}")?;
        }
        writer.flush()?;
    }

    writer.flush()
}
