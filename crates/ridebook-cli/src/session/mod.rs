//! The interactive menu session.
//!
//! A [`Session`] owns every piece of state for one run: the driver and
//! rider registries and the ride ledger, each behind its service. Nothing
//! outlives the session.
//!
//! Validation failures from an action are printed with that action's
//! failure line and the loop carries on. Anything else an action returns is
//! reported as `Error: <message>`, unless the console itself failed, which
//! ends the session.

use std::io::{BufRead, Write};

use tracing::{debug, info, instrument};

use ridebook_adapters::{InMemoryDriverRegistry, InMemoryRideStore, InMemoryRiderRegistry};
use ridebook_core::{
    application::{PeopleService, RideService, UpdateOutcome},
    domain::{Distance, Driver, DriverEvent, Ride, RideListing, Rider},
};

use crate::error::CliResult;

pub mod console;
pub mod menu;

pub use console::Console;
pub use menu::MenuChoice;

/// Knobs taken from configuration and `run` flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub strict_validation: bool,
    pub currency_prefix: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            strict_validation: false,
            currency_prefix: "R$".into(),
        }
    }
}

/// How the menu loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `0` was selected.
    Exit,
    /// Standard input closed.
    EndOfInput,
}

pub struct Session<R, W> {
    console: Console<R, W>,
    rides: RideService,
    people: PeopleService,
    currency_prefix: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// A fresh session with empty in-memory stores.
    pub fn new(console: Console<R, W>, settings: SessionSettings) -> Self {
        let rides = RideService::new(Box::new(InMemoryRideStore::new()))
            .with_strict_validation(settings.strict_validation);
        let people = PeopleService::new(
            Box::new(InMemoryDriverRegistry::new()),
            Box::new(InMemoryRiderRegistry::new()),
        );
        Self::with_services(console, rides, people, settings.currency_prefix)
    }

    pub fn with_services(
        console: Console<R, W>,
        rides: RideService,
        people: PeopleService,
        currency_prefix: String,
    ) -> Self {
        Self {
            console,
            rides,
            people,
            currency_prefix,
        }
    }

    /// Show the menu and run actions until `0` or end of input.
    #[instrument(skip_all, fields(strict = self.rides.is_strict()))]
    pub fn run(&mut self) -> CliResult<SessionEnd> {
        info!("Session started");
        loop {
            for line in MenuChoice::menu_lines() {
                self.console.say(line)?;
            }

            let Some(answer) = self.console.ask("Choose an option: ")? else {
                self.console.say("")?;
                self.console.say("Exiting...")?;
                info!("Input closed, session ended");
                return Ok(SessionEnd::EndOfInput);
            };

            let Some(choice) = MenuChoice::from_input(&answer) else {
                debug!(input = %answer, "Unknown menu option");
                self.console.say("Invalid option. Try again.")?;
                continue;
            };

            if choice == MenuChoice::Exit {
                self.console.say("Exiting...")?;
                info!("Session ended");
                return Ok(SessionEnd::Exit);
            }

            debug!(?choice, "Menu option selected");
            if let Err(err) = self.dispatch(choice) {
                if !err.is_recoverable() {
                    return Err(err);
                }
                err.log();
                self.console.say(format!("Error: {err}"))?;
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> CliResult<()> {
        match choice {
            MenuChoice::RegisterDriver => self.register_driver(),
            MenuChoice::RegisterRider => self.register_rider(),
            MenuChoice::CreateRide => self.create_ride(),
            MenuChoice::ListRides => self.list_rides(),
            MenuChoice::SearchByOrigin => self.search_by_origin(),
            MenuChoice::RemoveRide => self.remove_ride(),
            MenuChoice::UpdateRide => self.update_ride(),
            MenuChoice::StartRide => self.start_ride(),
            MenuChoice::FinishRide => self.finish_ride(),
            MenuChoice::CalculateFare => self.calculate_fare(),
            MenuChoice::Exit => Ok(()),
        }
    }

    // ── people ────────────────────────────────────────────────────────────

    fn register_driver(&mut self) -> CliResult<()> {
        self.console.say("Registering a new driver")?;
        let name = self.console.ask_or_empty("Driver name: ")?;
        let email = self.console.ask_or_empty("Driver email: ")?;
        let phone = self.console.ask_or_empty("Driver phone: ")?;
        let license = self.console.ask_or_empty("Driver license: ")?;
        let vehicle = self.console.ask_or_empty("Vehicle type: ")?;

        match Driver::new(name, email, phone, license, vehicle) {
            Ok(driver) => {
                self.people.register_driver(driver)?;
                self.console.say("Driver registered successfully!")?;
            }
            Err(err) => {
                debug!(error = %err, "Driver rejected");
                self.console.say("Driver could not be registered")?;
                self.console.say(err.to_string())?;
            }
        }
        Ok(())
    }

    fn register_rider(&mut self) -> CliResult<()> {
        self.console.say("Registering a new rider")?;
        let name = self.console.ask_or_empty("Rider name: ")?;
        let email = self.console.ask_or_empty("Rider email: ")?;
        let phone = self.console.ask_or_empty("Rider phone: ")?;
        let payment = self.console.ask_or_empty("Payment method: ")?;

        match Rider::new(name, email, phone, payment) {
            Ok(rider) => {
                self.people.register_rider(rider)?;
                self.console.say("Rider registered successfully!")?;
            }
            Err(err) => {
                debug!(error = %err, "Rider rejected");
                self.console.say("Rider could not be registered")?;
                self.console.say(err.to_string())?;
            }
        }
        Ok(())
    }

    fn start_ride(&mut self) -> CliResult<()> {
        let name = self.console.ask_or_empty("Driver name to start the ride: ")?;
        let event = self.people.start_ride(&name)?;
        self.report_driver_event(event)
    }

    fn finish_ride(&mut self) -> CliResult<()> {
        let name = self.console.ask_or_empty("Driver name to finish the ride: ")?;
        let event = self.people.finish_ride(&name)?;
        self.report_driver_event(event)
    }

    fn report_driver_event(&mut self, event: Option<DriverEvent>) -> CliResult<()> {
        match event {
            Some(event) => self.console.say(event.to_string())?,
            None => self.console.say("Driver not found.")?,
        }
        Ok(())
    }

    // ── rides ─────────────────────────────────────────────────────────────

    fn read_ride(&mut self, prompts: [&str; 4]) -> CliResult<Ride> {
        let [origin, destination, rider, driver] = prompts;
        let origin = self.console.ask_or_empty(origin)?;
        let destination = self.console.ask_or_empty(destination)?;
        let rider = self.console.ask_or_empty(rider)?;
        let driver = self.console.ask_or_empty(driver)?;
        Ok(Ride::new(origin, destination, rider, driver))
    }

    fn create_ride(&mut self) -> CliResult<()> {
        self.console.say("Registering a new ride")?;
        let ride = self.read_ride([
            "Ride origin: ",
            "Ride destination: ",
            "Rider name: ",
            "Driver name: ",
        ])?;

        match self.rides.add(ride) {
            Ok(()) => self.console.say("Ride added successfully!")?,
            Err(err) => {
                debug!(error = %err, "Ride rejected");
                self.console.say("The ride was not added to the system")?;
                self.console.say(err.to_string())?;
            }
        }
        Ok(())
    }

    fn list_rides(&mut self) -> CliResult<()> {
        let rides = self.rides.list_all()?;
        self.console.say("All rides:")?;
        for line in RideListing::new(&rides).lines() {
            self.console.say(line)?;
        }
        Ok(())
    }

    fn search_by_origin(&mut self) -> CliResult<()> {
        let origin = self.console.ask_or_empty("Origin to search for: ")?;
        let found = self.rides.find_by_origin(&origin)?;
        if found.is_empty() {
            self.console.say("No ride found with that origin")?;
        }
        for ride in found {
            self.console.say(ride.render())?;
        }
        Ok(())
    }

    fn remove_ride(&mut self) -> CliResult<()> {
        let origin = self.console.ask_or_empty("Origin of the ride to remove: ")?;
        if self.rides.find_by_origin(&origin)?.is_empty() {
            self.console.say("Ride not found")?;
            return Ok(());
        }

        let question = format!("Do you really want to remove the ride from {origin}? (y/n) ");
        let answer = self.console.ask_or_empty(&question)?;
        if answer.trim().eq_ignore_ascii_case("y") {
            self.rides.remove_by_origin(&origin)?;
            self.console.say("Ride removed successfully!")?;
        } else {
            self.console.say("Operation cancelled")?;
        }
        Ok(())
    }

    fn update_ride(&mut self) -> CliResult<()> {
        let origin = self.console.ask_or_empty("Origin of the ride to update: ")?;
        if self.rides.find_by_origin(&origin)?.is_empty() {
            self.console.say("Ride not found")?;
            return Ok(());
        }

        let replacement = self.read_ride([
            "New origin: ",
            "New destination: ",
            "New rider: ",
            "New driver: ",
        ])?;

        match self.rides.update_by_origin(&origin, replacement) {
            Ok(UpdateOutcome::Replaced { .. }) => self.console.say("Ride updated successfully!")?,
            Ok(UpdateOutcome::NotFound) => self.console.say("Ride not found")?,
            Err(err) => {
                debug!(error = %err, "Update rejected");
                self.console.say("Could not update the ride")?;
                self.console.say(err.to_string())?;
            }
        }
        Ok(())
    }

    fn calculate_fare(&mut self) -> CliResult<()> {
        let answer = self.console.ask_or_empty("Ride distance (km): ")?;
        match Distance::parse(&answer) {
            Ok(distance) => {
                let fare = self.rides.quote(distance);
                self.console
                    .say(format!("Ride fare: {}", fare.display_with(&self.currency_prefix)))?;
            }
            Err(_) => self.console.say("Invalid distance.")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use ridebook_core::{
        application::{ApplicationError, RideStore},
        error::{RidebookError, RidebookResult},
    };

    fn run_script(script: &str, settings: SessionSettings) -> (SessionEnd, String) {
        let mut out = Vec::new();
        let console = Console::new(Cursor::new(script.as_bytes().to_vec()), &mut out);
        let end = Session::new(console, settings).run().unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    fn run(script: &str) -> String {
        run_script(script, SessionSettings::default()).1
    }

    fn run_bytes(script: &[u8]) -> String {
        let mut out = Vec::new();
        let console = Console::new(Cursor::new(script.to_vec()), &mut out);
        Session::new(console, SessionSettings::default())
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    /// A ride store whose every call fails.
    struct UnavailableRides;

    fn unavailable() -> RidebookError {
        ApplicationError::StoreFailure {
            store: "rides",
            reason: "unavailable".into(),
        }
        .into()
    }

    impl RideStore for UnavailableRides {
        fn add(&mut self, _ride: Ride) -> RidebookResult<()> {
            Err(unavailable())
        }
        fn list(&self) -> RidebookResult<Vec<Ride>> {
            Err(unavailable())
        }
        fn find_by_origin(&self, _origin: &str) -> RidebookResult<Vec<Ride>> {
            Err(unavailable())
        }
        fn remove_by_origin(&mut self, _origin: &str) -> RidebookResult<usize> {
            Err(unavailable())
        }
        fn len(&self) -> RidebookResult<usize> {
            Err(unavailable())
        }
    }

    fn run_with_broken_rides(script: &str) -> (SessionEnd, String) {
        let mut out = Vec::new();
        let console = Console::new(Cursor::new(script.as_bytes().to_vec()), &mut out);
        let rides = RideService::new(Box::new(UnavailableRides));
        let people = PeopleService::new(
            Box::new(InMemoryDriverRegistry::new()),
            Box::new(InMemoryRiderRegistry::new()),
        );
        let end = Session::with_services(console, rides, people, "R$".into())
            .run()
            .unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    const RIDE_A: &str = "3\nA\nB\nRider1\nDriver1\n";
    const RIDE_A_LOWER: &str = "3\na \n Z\nRider2\nDriver2\n";

    #[test]
    fn exit_option_ends_session() {
        let (end, out) = run_script("0\n", SessionSettings::default());
        assert_eq!(end, SessionEnd::Exit);
        assert!(out.contains("1 - Register driver"));
        assert!(out.contains("0 - Exit"));
        assert!(out.ends_with("Exiting...\n"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let (end, out) = run_script("", SessionSettings::default());
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn invalid_options_redisplay_menu() {
        let out = run("42\nabc\n\n0\n");
        assert_eq!(out.matches("Invalid option. Try again.").count(), 3);
        assert_eq!(out.matches("0 - Exit").count(), 4);
    }

    #[test]
    fn create_and_list_rides() {
        let out = run(&format!("{RIDE_A}{RIDE_A_LOWER}4\n0\n"));
        assert_eq!(out.matches("Ride added successfully!").count(), 2);
        assert!(out.contains("All rides:\n"));
        assert!(out.contains("1. Origin: A, Destination: B, Rider: Rider1, Driver: Driver1\n"));
        assert!(out.contains("2. Origin: a , Destination:  Z, Rider: Rider2, Driver: Driver2\n"));
    }

    #[test]
    fn empty_ledger_listing() {
        let out = run("4\n0\n");
        assert!(out.contains("All rides:\nNo rides registered.\n"));
    }

    #[test]
    fn search_is_case_and_space_insensitive() {
        let out = run(&format!("{RIDE_A}{RIDE_A_LOWER}5\n  a\n5\nnowhere\n0\n"));
        assert!(out.contains("Origin: A, Destination: B, Rider: Rider1, Driver: Driver1\n"));
        assert!(out.contains("Origin: a , Destination:  Z, Rider: Rider2, Driver: Driver2\n"));
        assert!(out.contains("No ride found with that origin"));
    }

    #[test]
    fn remove_confirmed_removes_every_match() {
        let out = run(&format!("{RIDE_A}{RIDE_A_LOWER}6\nA\nY\n4\n0\n"));
        assert!(out.contains("Do you really want to remove the ride from A? (y/n)"));
        assert!(out.contains("Ride removed successfully!"));
        assert!(out.contains("All rides:\nNo rides registered.\n"));
    }

    #[test]
    fn remove_declined_keeps_rides() {
        let out = run(&format!("{RIDE_A}6\nA\nn\n4\n0\n"));
        assert!(out.contains("Operation cancelled"));
        assert!(out.contains("1. Origin: A, Destination: B"));
    }

    #[test]
    fn remove_unknown_origin() {
        let out = run("6\nX\n0\n");
        assert!(out.contains("Ride not found"));
        assert!(!out.contains("Do you really want"));
    }

    #[test]
    fn update_replaces_all_matches() {
        let out = run(&format!("{RIDE_A}{RIDE_A_LOWER}7\nA\nC\nD\nR3\nD3\n4\n0\n"));
        assert!(out.contains("Ride updated successfully!"));
        assert!(out.contains("1. Origin: C, Destination: D, Rider: R3, Driver: D3\n"));
        assert!(!out.contains("2. Origin:"));
    }

    #[test]
    fn update_unknown_origin_does_not_prompt() {
        let out = run("7\nX\n0\n");
        assert!(out.contains("Ride not found"));
        assert!(!out.contains("New origin: "));
    }

    #[test]
    fn strict_update_with_empty_field_removes_nothing() {
        let settings = SessionSettings {
            strict_validation: true,
            ..SessionSettings::default()
        };
        let script = format!("{RIDE_A}7\nA\n\nD\nR3\nD3\n4\n0\n");
        let (_, out) = run_script(&script, settings);
        assert!(out.contains("Could not update the ride\nempty origin\n"));
        assert!(out.contains("1. Origin: A, Destination: B"));
    }

    #[test]
    fn strict_mode_rejects_empty_ride() {
        let settings = SessionSettings {
            strict_validation: true,
            ..SessionSettings::default()
        };
        let (_, out) = run_script("3\nA\n\nR\nD\n4\n0\n", settings);
        assert!(out.contains("The ride was not added to the system\nempty destination\n"));
        assert!(out.contains("No rides registered."));
    }

    #[test]
    fn permissive_mode_accepts_empty_ride() {
        let out = run("3\n\n\n\n\n4\n0\n");
        assert!(out.contains("Ride added successfully!"));
        assert!(out.contains("1. Origin: , Destination: , Rider: , Driver: \n"));
    }

    #[test]
    fn driver_lifecycle() {
        let script = "1\nAna\nana@x.com\n11999999999\nCNH1\ncar\n8\nAna\n9\nAna\n8\nBob\n0\n";
        let out = run(script);
        assert!(out.contains("Driver registered successfully!"));
        assert!(out.contains("Driver Ana started the ride"));
        assert!(out.contains("Driver Ana finished the ride"));
        assert!(out.contains("Driver not found."));
    }

    #[test]
    fn driver_lookup_is_case_sensitive() {
        let out = run("1\nAna\nana@x.com\n11999999999\nCNH1\ncar\n8\nana\n0\n");
        assert!(out.contains("Driver not found."));
    }

    #[test]
    fn invalid_driver_is_reported_and_loop_continues() {
        let out = run("1\nAna\nnot-an-email\n11999999999\nCNH1\ncar\n8\nAna\n0\n");
        assert!(out.contains("Driver could not be registered\ninvalid email\n"));
        assert!(out.contains("Driver not found."));
        assert!(out.ends_with("Exiting...\n"));
    }

    #[test]
    fn rider_registration() {
        let out = run("2\nBia\nbia@x.com\n1199999999\npix\n2\nBia\nbia@x.com\n123\npix\n0\n");
        assert!(out.contains("Rider registered successfully!"));
        assert!(out.contains("Rider could not be registered\ninvalid phone\n"));
    }

    #[test]
    fn fare_uses_configured_prefix() {
        let out = run("10\n10\n");
        assert!(out.contains("Ride fare: R$ 25.00"));

        let settings = SessionSettings {
            currency_prefix: "US$".into(),
            ..SessionSettings::default()
        };
        let (_, out) = run_script("10\n4\n0\n", settings);
        assert!(out.contains("Ride fare: US$ 10.00"));
    }

    #[test]
    fn invalid_distance_aborts_only_the_action() {
        let out = run("10\nabc\n10\n-5\n10\n0\n10\n2.5\n0\n");
        assert_eq!(out.matches("Invalid distance.").count(), 3);
        assert!(out.contains("Ride fare: R$ 6.25"));
    }

    #[test]
    fn end_of_input_mid_action_reads_empty() {
        let (end, out) = run_script("5\n", SessionSettings::default());
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(out.contains("No ride found with that origin"));
    }

    #[test]
    fn store_failure_is_reported_and_menu_returns() {
        let (end, out) = run_with_broken_rides("4\n5\nA\n0\n");
        assert_eq!(end, SessionEnd::Exit);
        assert_eq!(
            out.matches("Error: Application error: rides store failed: unavailable")
                .count(),
            2
        );
        // initial menu, after each failed action, then the exit
        assert_eq!(out.matches("0 - Exit").count(), 3);
        assert!(out.ends_with("Exiting...\n"));
    }

    #[test]
    fn failed_insert_uses_the_action_failure_line() {
        let (_, out) = run_with_broken_rides("3\nA\nB\nR\nD\n0\n");
        assert!(out.contains(
            "The ride was not added to the system\nApplication error: rides store failed: unavailable\n"
        ));
    }

    #[test]
    fn latin1_input_does_not_end_the_session() {
        let out = run_bytes(b"3\nA\nB\nR\nD\n3\nS\xE3o Paulo\nB\nR\nD\n4\n0\n");
        assert_eq!(out.matches("Ride added successfully!").count(), 2);
        assert!(out.contains("All rides:\n1. Origin: A"));
        assert!(out.contains("2. Origin: S\u{FFFD}o Paulo, Destination: B"));
        assert!(out.ends_with("Exiting...\n"));
    }
}
