//! Run command implementation.
//!
//! Executes a YAML script of reservation steps against a coordinator built
//! from the resolved configuration:
//!
//! ```yaml
//! steps:
//!   - book: { guest: g1, room: 101, check_in: 2024-01-01, check_out: 2024-01-03, as: ada }
//!   - check_in: { reservation: ada }
//!   - check_out: { reservation: ada, payment: { cash: 150 } }
//!     expect: payment_failed
//!   - check_out: { reservation: ada, payment: { card: "4242" } }
//! ```
//!
//! Reservations are referenced by the alias given with `as:`, or by a
//! literal id. Every step is expected to succeed unless `expect:` names the
//! failure it should produce.

use crate::error::CliError;
use crate::utils::{formatter_for, open_hotel, GlobalOptions};
use chrono::NaiveDate;
use clap::Args;
use hotelier::{
    CardPayment, CashPayment, Error, GuestId, Money, OperationPlan, OutputFormat,
    PaymentCapability, ReservationCoordinator, ReservationId, RoomId, RoomView, StayDates,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Execute a reservation script.
#[derive(Args)]
pub struct RunCommand {
    /// Script file to execute
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Output format for the final room listing
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "HOTELIER_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Show the plan for each step without executing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// A parsed script file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Steps, executed in order.
    pub steps: Vec<Step>,
}

/// One script step and the outcome it is expected to produce.
#[derive(Debug, Deserialize)]
pub struct Step {
    #[serde(flatten)]
    pub action: Action,

    #[serde(default)]
    pub expect: Expectation,
}

/// A coordinator operation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Book {
        guest: GuestId,
        room: RoomId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        #[serde(rename = "as")]
        alias: Option<String>,
    },
    CheckIn {
        reservation: String,
    },
    CheckOut {
        reservation: String,
        payment: PaymentSpec,
    },
    Cancel {
        reservation: String,
    },
}

/// How a checkout step pays.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSpec {
    /// A card; always approves.
    Card(String),
    /// Cash; approves when the tendered amount covers the bill.
    Cash(Money),
}

impl PaymentSpec {
    fn capability(&self) -> Box<dyn PaymentCapability> {
        match self {
            PaymentSpec::Card(last_four) => Box::new(CardPayment::new(last_four.clone())),
            PaymentSpec::Cash(tendered) => Box::new(CashPayment::new(*tendered)),
        }
    }
}

/// The outcome a step is expected to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    #[default]
    Ok,
    NotFound,
    ResourceUnavailable,
    InvalidState,
    PaymentFailed,
    /// Any other library error.
    Error,
}

impl Expectation {
    fn of(result: &Result<String, Error>) -> Self {
        match result {
            Ok(_) => Expectation::Ok,
            Err(Error::NotFound { .. }) => Expectation::NotFound,
            Err(Error::ResourceUnavailable { .. }) => Expectation::ResourceUnavailable,
            Err(Error::InvalidState { .. }) => Expectation::InvalidState,
            Err(Error::PaymentFailed { .. }) => Expectation::PaymentFailed,
            Err(_) => Expectation::Error,
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Expectation::Ok => "ok",
            Expectation::NotFound => "not_found",
            Expectation::ResourceUnavailable => "resource_unavailable",
            Expectation::InvalidState => "invalid_state",
            Expectation::PaymentFailed => "payment_failed",
            Expectation::Error => "error",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Book {
                guest,
                room,
                check_in,
                check_out,
                ..
            } => write!(f, "book {room} for {guest} {check_in}..{check_out}"),
            Action::CheckIn { reservation } => write!(f, "check_in {reservation}"),
            Action::CheckOut { reservation, .. } => write!(f, "check_out {reservation}"),
            Action::Cancel { reservation } => write!(f, "cancel {reservation}"),
        }
    }
}

/// Script state: the coordinator and the aliases issued so far.
struct ScriptRunner<'h> {
    hotel: &'h ReservationCoordinator,
    aliases: HashMap<String, ReservationId>,
}

impl<'h> ScriptRunner<'h> {
    fn new(hotel: &'h ReservationCoordinator) -> Self {
        Self {
            hotel,
            aliases: HashMap::new(),
        }
    }

    fn resolve(&self, reference: &str) -> Result<ReservationId, CliError> {
        if let Some(id) = self.aliases.get(reference) {
            return Ok(id.clone());
        }
        reference
            .parse()
            .map_err(|e| CliError::InvalidArguments(format!("reservation '{reference}': {e}")))
    }

    /// Runs a step; `Ok` carries a short description of what happened.
    fn execute(&mut self, action: &Action) -> Result<Result<String, Error>, CliError> {
        let outcome = match action {
            Action::Book {
                guest,
                room,
                check_in,
                check_out,
                alias,
            } => {
                let booked = StayDates::new(*check_in, *check_out)
                    .and_then(|stay| self.hotel.book(guest, room, stay));
                booked.map(|id| {
                    if let Some(alias) = alias {
                        self.aliases.insert(alias.clone(), id.clone());
                    }
                    format!("booked {id}")
                })
            }
            Action::CheckIn { reservation } => {
                let id = self.resolve(reservation)?;
                self.hotel
                    .check_in(&id)
                    .map(|()| format!("{id} checked in"))
            }
            Action::CheckOut {
                reservation,
                payment,
            } => {
                let id = self.resolve(reservation)?;
                self.hotel
                    .check_out(&id, payment.capability().as_ref())
                    .map(|receipt| format!("{id} checked out, paid {}", receipt.amount))
            }
            Action::Cancel { reservation } => {
                let id = self.resolve(reservation)?;
                self.hotel.cancel(&id).map(|()| format!("{id} cancelled"))
            }
        };
        Ok(outcome)
    }

    /// Plans a step without executing it.
    fn preview(&self, action: &Action) -> Result<Result<OperationPlan, Error>, CliError> {
        let plan = match action {
            Action::Book {
                guest,
                room,
                check_in,
                check_out,
                ..
            } => {
                StayDates::new(*check_in, *check_out)
                    .and_then(|stay| self.hotel.preview_book(guest, room, stay))
            }
            Action::CheckIn { reservation } => {
                self.hotel.preview_check_in(&self.resolve(reservation)?)
            }
            Action::CheckOut { reservation, .. } => {
                self.hotel.preview_check_out(&self.resolve(reservation)?)
            }
            Action::Cancel { reservation } => {
                self.hotel.preview_cancel(&self.resolve(reservation)?)
            }
        };
        Ok(plan)
    }
}

impl RunCommand {
    /// Execute the run command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let script = load_script(&self.script)?;
        let hotel = open_hotel(global)?;
        let mut runner = ScriptRunner::new(&hotel);

        if self.dry_run {
            for (index, step) in script.steps.iter().enumerate() {
                report_preview(global, index + 1, &step.action, runner.preview(&step.action)?);
            }
            return Ok(());
        }

        let mut mismatches = 0;
        for (index, step) in script.steps.iter().enumerate() {
            let outcome = runner.execute(&step.action)?;
            let actual = Expectation::of(&outcome);
            let detail = match &outcome {
                Ok(message) => message.clone(),
                Err(e) => e.to_string(),
            };

            if actual == step.expect {
                if !global.quiet {
                    eprintln!("[{}] {}: {detail}", index + 1, step.action);
                }
            } else {
                mismatches += 1;
                eprintln!(
                    "[{}] {}: expected {}, got {actual}: {detail}",
                    index + 1,
                    step.action,
                    step.expect
                );
            }
        }

        let output = formatter_for(self.format).format_rooms(&RoomView::collect(&hotel))?;
        println!("{output}");

        if mismatches > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{mismatches} of {} step(s) did not match expectations",
                script.steps.len()
            )));
        }
        Ok(())
    }
}

fn report_preview(
    global: &GlobalOptions,
    number: usize,
    action: &Action,
    plan: Result<OperationPlan, Error>,
) {
    match plan {
        Ok(plan) => {
            println!("[{number}] {}", plan.description);
            for planned in &plan.actions {
                println!("    - {}", planned.description());
            }
            for warning in &plan.warnings {
                println!("    ! {warning}");
            }
        }
        // Later steps may depend on bookings a dry run never makes.
        Err(e) => {
            if !global.quiet {
                println!("[{number}] {action}: would fail: {e}");
            }
        }
    }
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> Result<Script, CliError> {
    if !path.exists() {
        return Err(CliError::InvalidArguments(format!(
            "Script not found: {}",
            path.display()
        )));
    }

    let contents = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(|e| {
        CliError::InvalidArguments(format!("invalid script {}: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelier::{Guest, Room, RoomCategory, RoomStatus};

    const SCRIPT: &str = r#"
steps:
  - book: { guest: g1, room: 101, check_in: 2024-01-01, check_out: 2024-01-03, as: ada }
  - book: { guest: g1, room: 101, check_in: 2024-01-01, check_out: 2024-01-02 }
    expect: resource_unavailable
  - check_in: { reservation: ada }
  - check_out: { reservation: ada, payment: { cash: 150 } }
    expect: payment_failed
  - check_out: { reservation: ada, payment: { card: "4242" } }
  - cancel: { reservation: ada }
    expect: invalid_state
"#;

    fn hotel() -> ReservationCoordinator {
        let hotel = ReservationCoordinator::new();
        hotel
            .register_room(Room::new(
                RoomId::new("101").unwrap(),
                RoomCategory::Double,
                Money::from_major(100),
            ))
            .unwrap();
        hotel
            .register_guest(Guest::builder(GuestId::new("g1").unwrap(), "Ada").build().unwrap())
            .unwrap();
        hotel
    }

    #[test]
    fn test_parse_script() {
        let script: Script = serde_yaml::from_str(SCRIPT).unwrap();
        assert_eq!(script.steps.len(), 6);
        assert_eq!(script.steps[0].expect, Expectation::Ok);
        assert_eq!(script.steps[1].expect, Expectation::ResourceUnavailable);
        assert!(matches!(
            script.steps[0].action,
            Action::Book { alias: Some(ref a), .. } if a == "ada"
        ));
        assert!(matches!(
            script.steps[3].action,
            Action::CheckOut { payment: PaymentSpec::Cash(_), .. }
        ));
    }

    #[test]
    fn test_script_outcomes_match() {
        let hotel = hotel();
        let script: Script = serde_yaml::from_str(SCRIPT).unwrap();
        let mut runner = ScriptRunner::new(&hotel);

        for step in &script.steps {
            let outcome = runner.execute(&step.action).unwrap();
            assert_eq!(Expectation::of(&outcome), step.expect, "step {}", step.action);
        }
        assert_eq!(
            hotel.room_status(&RoomId::new("101").unwrap()).unwrap(),
            RoomStatus::Available
        );
    }

    #[test]
    fn test_literal_ids_resolve() {
        let hotel = hotel();
        let runner = ScriptRunner::new(&hotel);
        let action = Action::Cancel {
            reservation: "RES00000042".into(),
        };
        let plan = runner.preview(&action).unwrap();
        assert!(matches!(plan, Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_preview_does_not_book() {
        let hotel = hotel();
        let script: Script = serde_yaml::from_str(SCRIPT).unwrap();
        let runner = ScriptRunner::new(&hotel);

        let plan = runner.preview(&script.steps[0].action).unwrap().unwrap();
        assert_eq!(plan.len(), 1);
        assert!(hotel.active_reservations().is_empty());
    }

    #[test]
    fn test_unknown_step_rejected() {
        let result: Result<Script, _> = serde_yaml::from_str("steps:\n  - teleport: {}\n");
        assert!(result.is_err());
    }
}
