//! Nearby stops example.
//!
//! Looks up the network, then lists the bus stops closest to Chambéry station
//! along with the next departures of the first line serving the nearest one.
//!
//! Run with: cargo run --example nearby_stops

use synchro_sdk::{ProximityQuery, ScheduleQuery, SynchroClient, SynchroResult};

#[tokio::main]
async fn main() -> SynchroResult<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let client = SynchroClient::builder().build()?;

    let network = client.network().get().await?;
    println!("Network: {} (ID: {})", network.name, network.id);

    let query = ProximityQuery {
        precision: Some(500.0),
        ..ProximityQuery::new(45.5713, 5.9195)
    };
    let nearby = client.proximity().search(&query).await?;

    let stops: Vec<_> = nearby
        .proximities
        .iter()
        .filter_map(|p| p.stop_area.as_ref().map(|sa| (p.distance, sa)))
        .collect();
    println!("\nFound {} stops nearby", stops.len());

    for (distance, stop) in stops.iter().take(5) {
        println!("  {} ({}) - {}m", stop.name, stop.city, distance);
    }

    let Some((_, nearest)) = stops.first() else {
        return Ok(());
    };
    let Some(line) = nearest.lines.first() else {
        return Ok(());
    };

    let schedules = client
        .lines()
        .schedules(&line.id, &nearest.id, &ScheduleQuery::default())
        .await?;
    println!("\nNext departures of line {} at {}:", line.s_name, nearest.name);

    for schedule in schedules.iter().take(5) {
        println!(
            "  {} towards {} (in {} min)",
            schedule.departure_date_time, schedule.destination_display, schedule.departure_wait
        );
    }

    Ok(())
}
