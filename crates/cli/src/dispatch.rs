// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Turns one console line into a request.
//!
//! | Line                               | Request                          |
//! |------------------------------------|----------------------------------|
//! | `A plate obtained make mileage`    | add vehicle                      |
//! | `D plate`                          | delete vehicle                   |
//! | `B begin end plate employee`       | book vehicle                     |
//! | `C begin end plate`                | cancel booking                   |
//! | `R end plate mileage`              | return vehicle                   |
//! | `PF`, `PR`, `PD`, `PT`             | print a listing                  |
//! | anything starting with `Q`         | quit                             |

use vms::{Command, Report};

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// A state-changing command for the rule engine.
    Apply(Command),
    /// A read-only listing.
    Print(Report),
    /// Stop the session.
    Quit,
    /// The first token is not a known command.
    Invalid(String),
    /// A known command with too few arguments.
    MissingArguments(String),
}

/// Parses one input line.
///
/// Returns `None` for blank lines. Tokens are separated by whitespace,
/// command names are case-sensitive and extra trailing tokens are ignored.
///
/// Add and book only need their first argument here. The rule engine checks
/// the rest in order and reports a missing one when it gets to it.
#[must_use]
pub fn parse_line(line: &str) -> Option<Request> {
    let line: &str = line.trim();
    if line.starts_with('Q') {
        return Some(Request::Quit);
    }

    let mut tokens = line.split_whitespace();
    let name: &str = tokens.next()?;
    let args: Vec<&str> = tokens.collect();

    let command: Option<Command> = match name {
        "A" => arguments::<1>(&args).map(|[plate]| Command::AddVehicle {
            plate,
            obtained: optional(&args, 1),
            make: optional(&args, 2),
            mileage: optional(&args, 3),
        }),
        "D" => arguments::<1>(&args).map(|[plate]| Command::DeleteVehicle { plate }),
        "B" => arguments::<1>(&args).map(|[begin]| Command::BookVehicle {
            begin,
            end: optional(&args, 1),
            plate: optional(&args, 2),
            employee: optional(&args, 3),
        }),
        "C" => arguments::<3>(&args).map(|[begin, end, plate]| Command::CancelBooking {
            begin,
            end,
            plate,
        }),
        "R" => arguments::<3>(&args).map(|[end, plate, mileage]| Command::ReturnVehicle {
            end,
            plate,
            mileage,
        }),
        "PF" => return Some(Request::Print(Report::Fleet)),
        "PR" => return Some(Request::Print(Report::BookingsByVehicle)),
        "PD" => return Some(Request::Print(Report::BookingsByDepartment)),
        "PT" => return Some(Request::Print(Report::Trips)),
        _ => return Some(Request::Invalid(name.to_string())),
    };

    Some(command.map_or_else(
        || Request::MissingArguments(name.to_string()),
        Request::Apply,
    ))
}

/// Takes the first `N` arguments, or `None` if there are fewer.
fn arguments<const N: usize>(args: &[&str]) -> Option<[String; N]> {
    let head: &[&str] = args.get(..N)?;
    Some(std::array::from_fn(|i| head[i].to_string()))
}

/// Takes the argument at `index` if the line has one.
fn optional(args: &[&str], index: usize) -> Option<String> {
    args.get(index).map(ToString::to_string)
}
