use clap::{Args, Parser, Subcommand};

/// What a command needs locally before any request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No session required.
    Public,
    /// Any persisted session.
    LoggedIn,
    /// A persisted session whose role is exactly `Admin`.
    Admin,
}

/// command line client for the NTC bus booking service
#[derive(Parser)]
#[command(name = "ntc", version)]
pub struct Cli {
    /// Base URL of the booking API
    #[arg(
        long,
        env = "NTC_API_URL",
        default_value = "https://ntc-booking-system-1.onrender.com/api"
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new user
    Register {
        #[arg(value_name = "NAME")]
        name: String,
        #[arg(value_name = "EMAIL")]
        email: String,
        #[arg(value_name = "PASSWORD")]
        password: String,
        /// Account role (Admin, Operator, Commuter)
        #[arg(value_name = "ROLE")]
        role: String,
    },

    /// Log in and persist the returned session locally
    Login {
        #[arg(value_name = "EMAIL")]
        email: String,
        #[arg(value_name = "PASSWORD")]
        password: String,
    },

    /// Add a new transport route (Admin only)
    AddRoute {
        #[arg(value_name = "ROUTE_NUMBER")]
        route_number: String,
        #[arg(value_name = "ROUTE_NAME")]
        route_name: String,
        #[arg(value_name = "STARTING_POINT")]
        starting_point: String,
        #[arg(value_name = "ENDING_POINT")]
        ending_point: String,
        /// Route length in kilometres
        #[arg(value_name = "DISTANCE")]
        distance: f64,
    },

    /// List all transport routes (Admin only)
    ViewRoutes,

    /// Add a new bus (Admin only)
    AddBus(BusArgs),

    /// List all buses with their assigned routes (Admin only)
    ViewBuses,

    /// Search buses by departure point, arrival point and date
    ViewAvailableBuses {
        #[arg(value_name = "DEPARTURE_POINT")]
        departure_point: String,
        #[arg(value_name = "ARRIVAL_POINT")]
        arrival_point: String,
        #[arg(value_name = "DATE")]
        date: String,
    },

    /// Book seats on a scheduled bus
    BookBus(BookingArgs),

    /// Add a new bus schedule
    AddSchedule(ScheduleArgs),

    /// Update a bus schedule by its schedule token
    UpdateSchedule {
        #[arg(value_name = "SCHEDULE_TOKEN")]
        schedule_token: String,
        #[arg(value_name = "DEPARTURE_POINT")]
        departure_point: String,
        #[arg(value_name = "DEPARTURE_TIME")]
        departure_time: String,
        #[arg(value_name = "ARRIVAL_POINT")]
        arrival_point: String,
        #[arg(value_name = "ARRIVAL_TIME")]
        arrival_time: String,
        /// Comma-separated list of stop names
        #[arg(value_name = "STOPS")]
        stops: String,
    },

    /// Delete a bus schedule by its schedule token
    DeleteSchedule {
        #[arg(value_name = "SCHEDULE_TOKEN")]
        schedule_token: String,
    },

    /// List published bus schedules
    ViewSchedules,

    /// Save a note locally
    AddNote {
        #[arg(value_name = "CONTENT")]
        content: String,
    },

    /// List locally saved notes
    ViewNotes,
}

#[derive(Args)]
pub struct BusArgs {
    #[arg(value_name = "BUS_NUMBER")]
    pub bus_number: String,
    #[arg(value_name = "DRIVER_NAME")]
    pub driver_name: String,
    #[arg(value_name = "CONDUCTOR_NAME")]
    pub conductor_name: String,
    #[arg(value_name = "OPERATOR_NAME")]
    pub operator_name: String,
    #[arg(value_name = "BUS_TYPE")]
    pub bustype: String,
    #[arg(value_name = "CAPACITY")]
    pub capacity: u32,
    #[arg(value_name = "PRICE")]
    pub price: f64,
    #[arg(value_name = "AVAILABLE_SEATS")]
    pub available_seats: u32,
    #[arg(value_name = "REGISTRATION_NUMBER")]
    pub registration_number: String,
    /// Route the bus is assigned to
    #[arg(value_name = "ROUTE_NUMBER")]
    pub route_number: String,
}

#[derive(Args)]
pub struct BookingArgs {
    #[arg(value_name = "BOOKING_NUMBER")]
    pub booking_number: String,
    #[arg(value_name = "USER_NAME")]
    pub user_name: String,
    #[arg(value_name = "SEAT_COUNT")]
    pub seat_count: u32,
    #[arg(value_name = "BOOKING_DATE")]
    pub booking_date: String,
    #[arg(value_name = "SCHEDULE_TOKEN")]
    pub schedule_token: String,
    #[arg(value_name = "BOOKING_TOKEN")]
    pub booking_token: String,
}

#[derive(Args)]
pub struct ScheduleArgs {
    #[arg(value_name = "ROUTE_NUMBER")]
    pub route_number: String,
    #[arg(value_name = "ROUTE_NAME")]
    pub route_name: String,
    #[arg(value_name = "REGISTRATION_NUMBER")]
    pub registration_number: String,
    #[arg(value_name = "OPERATOR_NAME")]
    pub operator_name: String,
    #[arg(value_name = "BUS_TYPE")]
    pub bus_type: String,
    #[arg(value_name = "TICKET_PRICE")]
    pub ticket_price: f64,
    #[arg(value_name = "CAPACITY")]
    pub capacity: u32,
    #[arg(value_name = "AVAILABLE_SEATS")]
    pub available_seats: u32,
    #[arg(value_name = "DEPARTURE_POINT")]
    pub departure_point: String,
    #[arg(value_name = "DEPARTURE_TIME")]
    pub departure_time: String,
    #[arg(value_name = "ARRIVAL_POINT")]
    pub arrival_point: String,
    #[arg(value_name = "ARRIVAL_TIME")]
    pub arrival_time: String,
    /// Comma-separated list of stop names
    #[arg(value_name = "STOPS")]
    pub stops: String,
    #[arg(value_name = "START_DATE")]
    pub start_date: String,
    #[arg(value_name = "END_DATE")]
    pub end_date: String,
    #[arg(value_name = "SCHEDULE_TOKEN")]
    pub schedule_token: String,
    /// The literal `true` activates the schedule; anything else leaves it inactive
    #[arg(value_name = "IS_ACTIVE")]
    pub is_active: String,
}

impl Commands {
    /// Access level checked before the command runs.
    pub fn access(&self) -> Access {
        match self {
            Commands::Register { .. }
            | Commands::Login { .. }
            | Commands::ViewSchedules
            | Commands::AddNote { .. }
            | Commands::ViewNotes => Access::Public,

            Commands::ViewAvailableBuses { .. }
            | Commands::BookBus(_)
            | Commands::AddSchedule(_)
            | Commands::UpdateSchedule { .. }
            | Commands::DeleteSchedule { .. } => Access::LoggedIn,

            Commands::AddRoute { .. }
            | Commands::ViewRoutes
            | Commands::AddBus(_)
            | Commands::ViewBuses => Access::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn admin_commands_require_admin_access() {
        let cli = parse(&["ntc", "view-routes"]);
        assert_eq!(cli.command.access(), Access::Admin);
        let cli = parse(&[
            "ntc",
            "add-route",
            "R1",
            "Galle Express",
            "Colombo",
            "Galle",
            "116",
        ]);
        assert_eq!(cli.command.access(), Access::Admin);
    }

    #[test]
    fn schedule_commands_require_login_only() {
        let cli = parse(&["ntc", "delete-schedule", "SCH-1"]);
        assert_eq!(cli.command.access(), Access::LoggedIn);
    }

    #[test]
    fn public_commands_need_no_session() {
        assert_eq!(
            parse(&["ntc", "view-schedules"]).command.access(),
            Access::Public
        );
        assert_eq!(parse(&["ntc", "view-notes"]).command.access(), Access::Public);
    }

    #[test]
    fn numeric_fields_are_parsed_at_the_boundary() {
        let cli = parse(&[
            "ntc",
            "add-bus",
            "B42",
            "Nimal",
            "Sunil",
            "SLTB",
            "Luxury",
            "54",
            "1450.50",
            "54",
            "WP-NA-4321",
            "R1",
        ]);
        match cli.command {
            Commands::AddBus(bus) => {
                assert_eq!(bus.capacity, 54);
                assert_eq!(bus.price, 1450.50);
                assert_eq!(bus.available_seats, 54);
            }
            _ => panic!("expected add-bus"),
        }
    }

    #[test]
    fn non_numeric_capacity_is_rejected_locally() {
        let result = Cli::try_parse_from([
            "ntc",
            "add-bus",
            "B42",
            "Nimal",
            "Sunil",
            "SLTB",
            "Luxury",
            "fifty",
            "1450.50",
            "54",
            "WP-NA-4321",
            "R1",
        ]);
        assert!(result.is_err());
    }
}
