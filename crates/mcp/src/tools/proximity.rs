// Proximity search tool

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_boolean, json_schema_key, json_schema_number, json_schema_object,
    json_schema_string, parse_arguments, upstream_failure_with_hint, KeyArg, Tool, ToolError,
};
use serde::Deserialize;
use serde_json::json;
use synchro_sdk::{Proximity, ProximityKind, ProximityQuery, SynchroClient, SynchroError};

const COVERAGE_HINT: &str =
    "Make sure the coordinates are valid and within the network's coverage area.";

/// Tool to find points of interest around a location
pub struct ProximityGetTool {
    client: SynchroClient,
}

impl ProximityGetTool {
    pub fn new(client: SynchroClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ProximityGetArgs {
    lat: f64,
    lon: f64,
    #[serde(default)]
    precision: Option<f64>,
    #[serde(default)]
    accessibility: Option<bool>,
    #[serde(default)]
    scholar: Option<f64>,
    #[serde(default)]
    context: Option<String>,
    #[serde(default)]
    key: Option<KeyArg>,
}

#[async_trait::async_trait]
impl Tool for ProximityGetTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "proximityGet".to_string(),
            description: "Find bus stops, bike parks, park & ride facilities and car sharing stations near a location".to_string(),
            input_schema: json_schema_object(
                json!({
                    "lat": json_schema_number("Latitude of the location"),
                    "lon": json_schema_number("Longitude of the location"),
                    "precision": json_schema_number("Search precision"),
                    "accessibility": json_schema_boolean("Whether to consider accessibility"),
                    "scholar": json_schema_number("Scholar mode"),
                    "context": json_schema_string("Context for the search"),
                    "key": json_schema_key("API key (optional, defaults to the network ID)")
                }),
                vec!["lat", "lon"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args: ProximityGetArgs = parse_arguments("proximityGet", arguments)?;

        let query = ProximityQuery {
            lat: args.lat,
            lon: args.lon,
            precision: args.precision,
            accessibility: args.accessibility,
            scholar: args.scholar,
            context: args.context,
            key: args.key.and_then(KeyArg::into_query_value),
        };

        let response = match self.client.proximity().search(&query).await {
            Ok(response) => response,
            Err(e @ SynchroError::InvalidResponse { .. }) => {
                tracing::error!(tool = "proximityGet", error = %e, "Unexpected upstream response");
                return Ok(CallToolResult::error(e.to_string()));
            }
            Err(e) => {
                return Ok(upstream_failure_with_hint(
                    "proximityGet",
                    "Error finding nearby points of interest",
                    &e,
                    COVERAGE_HINT,
                ));
            }
        };

        if response.proximities.is_empty() {
            return Ok(CallToolResult::text(format!(
                "No points of interest found near the specified location ({}, {}). Try adjusting the search area.",
                args.lat, args.lon
            )));
        }

        let text = format_proximities(args.lat, args.lon, &response.proximities);

        let mut metadata = serde_json::Map::new();
        for field in ["proximities", "shapes"] {
            if let Some(value) = response.json().get(field) {
                metadata.insert(field.to_string(), value.clone());
            }
        }
        Ok(CallToolResult::text(text).with_metadata(metadata.into()))
    }
}

/// Render proximity results grouped by category.
///
/// Categories always appear in the same order; empty ones are skipped.
pub fn format_proximities(lat: f64, lon: f64, proximities: &[Proximity]) -> String {
    let mut text = format!(
        "Found {} points of interest near the location ({}, {}):\n\n",
        proximities.len(),
        lat,
        lon
    );

    let sections = [
        (ProximityKind::StopArea, "Bus Stops"),
        (ProximityKind::BikePark, "Bike Parks"),
        (ProximityKind::ParkAndRide, "Park & Ride"),
        (ProximityKind::CarSharingStation, "Car Sharing Stations"),
    ];

    for (kind, label) in sections {
        let entries: Vec<String> = proximities
            .iter()
            .filter(|p| p.kind() == Some(kind))
            .filter_map(format_entry)
            .collect();

        if entries.is_empty() {
            continue;
        }

        text.push_str(&format!("{} ({}):\n", label, entries.len()));
        text.push_str(&entries.join("\n"));
        text.push_str("\n\n");
    }

    text.truncate(text.trim_end().len());
    text
}

fn format_entry(p: &Proximity) -> Option<String> {
    if let Some(sa) = &p.stop_area {
        let lines = sa
            .lines
            .iter()
            .map(|l| l.s_name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return Some(format!(
            "- {} ({}) - {}m away\n  Lines: {}\n  ID: {}",
            sa.name, sa.city, p.distance, lines, sa.id
        ));
    }

    if let Some(bp) = &p.bike_park {
        let capacity = if bp.capacity > 0 {
            bp.capacity.to_string()
        } else {
            "unknown".to_string()
        };
        return Some(format!(
            "- {} ({}) - {}m away\n  Capacity: {}\n  Covered: {}\n  ID: {}",
            bp.name,
            bp.city,
            p.distance,
            capacity,
            if bp.covered { "yes" } else { "no" },
            bp.id
        ));
    }

    if let Some(pr) = &p.park_and_ride {
        return Some(format!(
            "- {} ({}) - {}m away\n  Available spots: {}\n  ID: {}",
            pr.name, pr.city, p.distance, pr.available_parks, pr.id
        ));
    }

    p.car_sharing_station.as_ref().map(|cs| {
        format!(
            "- {} ({}) - {}m away\n  Available vehicles: {}\n  Address: {}\n  ID: {}",
            cs.name, cs.city, p.distance, cs.available_vehicles, cs.address, cs.id
        )
    })
}
