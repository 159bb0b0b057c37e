//! # Synchro SDK
//!
//! Async client for the Instant-System transit API, scoped to one network
//! (Synchro Bus, Chambéry, by default).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use synchro_sdk::{ProximityQuery, SynchroClient, SynchroResult};
//!
//! #[tokio::main]
//! async fn main() -> SynchroResult<()> {
//!     let client = SynchroClient::builder().build()?;
//!
//!     let network = client.network().get().await?;
//!     println!("Network: {}", network.name);
//!
//!     let stops = client.lines().stop_areas("B").await?;
//!     println!("Line B serves {} stop areas", stops.len());
//!
//!     let nearby = client
//!         .proximity()
//!         .search(&ProximityQuery::new(45.5646, 5.9178))
//!         .await?;
//!     println!("{} points of interest nearby", nearby.proximities.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

// Re-export main client
pub use client::{SynchroClient, SynchroClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{SynchroError, SynchroResult};

// Re-export query types
pub use api::{DisruptionQuery, ProximityQuery, ScheduleQuery};

// Re-export core types for convenience
pub use synchro_core::types::{
    BikePark, CarSharingStation, Disruption, Line, Network, NetworkId, ParkAndRide, Proximity,
    ProximityKind, ProximityResponse, ProximityStopArea, Raw, Schedule, StopArea,
    VehicleJourneyDirection,
};
