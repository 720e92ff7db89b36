use clap::Parser;

use ntc_cli::cli::{Cli, Commands};
use ntc_cli::logic::client::{account, buses, commuter, routes, schedules};
use ntc_cli::logic::notes::{self, NoteStore};
use ntc_cli::logic::session::{authorize, SessionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let api = args.api_url;

    // Gate on the cached session before any request is built. Precondition
    // failures print and leave the exit code alone, matching the service's
    // other clients; only transport-level errors escape through anyhow.
    let store = SessionStore::open()?;
    let session = match authorize(args.command.access(), store.load()) {
        Ok(session) => session,
        Err(msg) => {
            eprintln!("✗ {}", msg);
            return Ok(());
        }
    };
    let token = session.map(|s| s.token).unwrap_or_default();

    match args.command {
        Commands::Register {
            name,
            email,
            password,
            role,
        } => account::register(&api, name, email, password, role).await?,

        Commands::Login { email, password } => {
            account::login(&api, &store, email, password).await?
        }

        Commands::AddRoute {
            route_number,
            route_name,
            starting_point,
            ending_point,
            distance,
        } => {
            routes::add(
                &api,
                &token,
                route_number,
                route_name,
                starting_point,
                ending_point,
                distance,
            )
            .await?
        }

        Commands::ViewRoutes => routes::list(&api, &token).await?,

        Commands::AddBus(bus) => buses::add(&api, &token, bus).await?,

        Commands::ViewBuses => buses::list(&api, &token).await?,

        Commands::ViewAvailableBuses {
            departure_point,
            arrival_point,
            date,
        } => commuter::search(&api, &token, departure_point, arrival_point, date).await?,

        Commands::BookBus(booking) => commuter::book(&api, &token, booking).await?,

        Commands::AddSchedule(schedule) => schedules::add(&api, &token, schedule).await?,

        Commands::UpdateSchedule {
            schedule_token,
            departure_point,
            departure_time,
            arrival_point,
            arrival_time,
            stops,
        } => {
            schedules::update(
                &api,
                &token,
                schedule_token,
                departure_point,
                departure_time,
                arrival_point,
                arrival_time,
                stops,
            )
            .await?
        }

        Commands::DeleteSchedule { schedule_token } => {
            schedules::delete(&api, &token, schedule_token).await?
        }

        Commands::ViewSchedules => schedules::view(&api).await?,

        Commands::AddNote { content } => {
            let store = NoteStore::open()?;
            notes::add(&store, content)?
        }

        Commands::ViewNotes => {
            let store = NoteStore::open()?;
            notes::view(&store)
        }
    }

    Ok(())
}
