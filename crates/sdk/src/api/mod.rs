//! API endpoint groups, one per upstream resource.

pub mod disruptions;
pub mod lines;
pub mod network;
pub mod proximity;

pub use disruptions::{DisruptionQuery, DisruptionsApi};
pub use lines::{LinesApi, ScheduleQuery};
pub use network::NetworkApi;
pub use proximity::{ProximityApi, ProximityQuery};
