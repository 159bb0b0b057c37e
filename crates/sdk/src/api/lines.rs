//! Lines API endpoints: lines, their stop areas, schedules and directions.

use crate::client::SynchroClient;
use crate::error::SynchroResult;
use crate::transport::QueryPairs;
use serde::Deserialize;
use synchro_core::{Line, Raw, Schedule, StopArea, VehicleJourneyDirection};

/// Lines API for the configured network.
pub struct LinesApi<'a> {
    client: &'a SynchroClient,
}

impl<'a> LinesApi<'a> {
    pub(crate) fn new(client: &'a SynchroClient) -> Self {
        Self { client }
    }

    /// List all lines.
    pub async fn list(&self) -> SynchroResult<Vec<Raw<Line>>> {
        let network_id = self.client.network_id().to_string();
        self.client.http.get(&["networks", &network_id, "lines"]).await
    }

    /// Get a specific line by ID.
    pub async fn get(&self, line_id: &str) -> SynchroResult<Raw<Line>> {
        let network_id = self.client.network_id().to_string();
        self.client
            .http
            .get(&["networks", &network_id, "lines", line_id])
            .await
    }

    /// List the stop areas served by a line.
    pub async fn stop_areas(&self, line_id: &str) -> SynchroResult<Vec<Raw<StopArea>>> {
        let network_id = self.client.network_id().to_string();
        let response: StopAreasResponse = self
            .client
            .http
            .get(&["networks", &network_id, "lines", line_id, "stopAreas"])
            .await?;
        Ok(response.stop_areas)
    }

    /// Get upcoming departures of a line at a stop area.
    pub async fn schedules(
        &self,
        line_id: &str,
        stop_area_id: &str,
        query: &ScheduleQuery,
    ) -> SynchroResult<Vec<Raw<Schedule>>> {
        let network_id = self.client.network_id().to_string();
        self.client
            .http
            .get_with_query(
                &[
                    "networks",
                    &network_id,
                    "lines",
                    line_id,
                    "stopAreas",
                    stop_area_id,
                    "schedules",
                ],
                &query.to_pairs(),
            )
            .await
    }

    /// List the directions of travel of a line.
    pub async fn directions(&self, line_id: &str) -> SynchroResult<Vec<Raw<VehicleJourneyDirection>>> {
        let network_id = self.client.network_id().to_string();
        let query: QueryPairs = vec![("key", network_id.clone())];
        self.client
            .http
            .get_with_query(
                &[
                    "networks",
                    &network_id,
                    "lines",
                    line_id,
                    "vehicleJourneys",
                    "directions",
                ],
                &query,
            )
            .await
    }
}

/// Optional parameters of the schedules endpoint.
///
/// All three parameters are always sent; missing values become `""` except
/// `key`, which defaults to `"0"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub display_name: Option<String>,
    pub key: Option<String>,
    pub userlatlon: Option<String>,
}

impl ScheduleQuery {
    pub(crate) fn to_pairs(&self) -> QueryPairs {
        vec![
            ("displayName", self.display_name.clone().unwrap_or_default()),
            ("key", self.key.clone().unwrap_or_else(|| "0".to_string())),
            ("userlatlon", self.userlatlon.clone().unwrap_or_default()),
        ]
    }
}

/// `stopAreas` must be present; its entries are read leniently.
#[derive(Debug, Deserialize)]
struct StopAreasResponse {
    #[serde(rename = "stopAreas")]
    stop_areas: Vec<Raw<StopArea>>,
}
