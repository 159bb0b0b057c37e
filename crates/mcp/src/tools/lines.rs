// Line tools: lines, stop areas, schedules and directions

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_key, json_schema_object, json_schema_string, parse_arguments, require_non_empty,
    upstream_failure, upstream_failure_with_hint, KeyArg, Tool, ToolError,
};
use serde::Deserialize;
use serde_json::json;
use synchro_sdk::{ScheduleQuery, SynchroClient};

const STOP_AREAS_HINT: &str =
    "Make sure to call this function first to get the stop area IDs before using lineStopAreaSchedulesGet.";

#[derive(Debug, Deserialize)]
struct NoArgs {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineArgs {
    line_id: String,
}

fn line_id_schema() -> serde_json::Value {
    json_schema_object(
        json!({
            "lineId": json_schema_string("The ID of the line (e.g. \"B\", \"1\", \"2\")")
        }),
        vec!["lineId"],
    )
}

fn parse_line_args(tool: &str, arguments: serde_json::Value) -> Result<LineArgs, ToolError> {
    let args: LineArgs = parse_arguments(tool, arguments)?;
    require_non_empty(tool, "lineId", &args.line_id)?;
    Ok(args)
}

/// Tool to list every line of the network
pub struct LinesGetTool {
    client: SynchroClient,
}

impl LinesGetTool {
    pub fn new(client: SynchroClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for LinesGetTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "linesGet".to_string(),
            description: "List all lines of the Synchro Bus network".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let _args: NoArgs = parse_arguments("linesGet", arguments)?;

        match self.client.lines().list().await {
            Ok(lines) => {
                let text = format!(
                    "Found {} lines for network {}",
                    lines.len(),
                    self.client.network_id()
                );
                Ok(CallToolResult::text(text).with_metadata(json!({ "lines": lines })))
            }
            Err(e) => Ok(upstream_failure("linesGet", "Error getting lines", &e)),
        }
    }
}

/// Tool to describe a single line
pub struct LineGetTool {
    client: SynchroClient,
}

impl LineGetTool {
    pub fn new(client: SynchroClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for LineGetTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "lineGet".to_string(),
            description: "Get information about a specific line".to_string(),
            input_schema: line_id_schema(),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args = parse_line_args("lineGet", arguments)?;

        match self.client.lines().get(&args.line_id).await {
            Ok(line) => {
                let text = format!("Line {}: {} (ID: {})", line.s_name, line.l_name, line.id);
                Ok(CallToolResult::text(text).with_metadata(serde_json::to_value(&line)?))
            }
            Err(e) => Ok(upstream_failure("lineGet", "Error getting line", &e)),
        }
    }
}

/// Tool to list the stop areas served by a line.
///
/// This is how callers discover the stop area IDs that
/// `lineStopAreaSchedulesGet` needs.
pub struct LineStopAreasGetTool {
    client: SynchroClient,
}

impl LineStopAreasGetTool {
    pub fn new(client: SynchroClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for LineStopAreasGetTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "lineStopAreasGet".to_string(),
            description: "List the stop areas of a line with their IDs. Call this first to find the stopAreaId required by lineStopAreaSchedulesGet".to_string(),
            input_schema: line_id_schema(),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args = parse_line_args("lineStopAreasGet", arguments)?;

        let stop_areas = match self.client.lines().stop_areas(&args.line_id).await {
            Ok(stop_areas) => stop_areas,
            Err(e) => {
                return Ok(upstream_failure_with_hint(
                    "lineStopAreasGet",
                    "Error getting stop areas",
                    &e,
                    STOP_AREAS_HINT,
                ));
            }
        };

        if stop_areas.is_empty() {
            return Ok(CallToolResult::error(format!(
                "No stop areas found for line {}. Please verify the line ID is correct.",
                args.line_id
            )));
        }

        let listing = stop_areas
            .iter()
            .map(|sa| format!("- {} (ID: {})", sa.name, sa.id))
            .collect::<Vec<_>>()
            .join("\n");
        let text = format!(
            "Found {} stop areas for line {}:\n{}\n\nUse these stop area IDs with lineStopAreaSchedulesGet to get schedules for specific stops.",
            stop_areas.len(),
            args.line_id,
            listing
        );

        Ok(CallToolResult::text(text).with_metadata(json!({ "stopAreas": stop_areas })))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchedulesArgs {
    line_id: String,
    stop_area_id: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    key: Option<KeyArg>,
    #[serde(default)]
    userlatlon: Option<String>,
}

/// Tool to get upcoming departures of a line at a stop area
pub struct LineStopAreaSchedulesGetTool {
    client: SynchroClient,
}

impl LineStopAreaSchedulesGetTool {
    pub fn new(client: SynchroClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for LineStopAreaSchedulesGetTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "lineStopAreaSchedulesGet".to_string(),
            description: "Get upcoming departures of a line at a stop area. Use lineStopAreasGet to find stop area IDs".to_string(),
            input_schema: json_schema_object(
                json!({
                    "lineId": json_schema_string("The ID of the line"),
                    "stopAreaId": json_schema_string("The ID of the stop area, as returned by lineStopAreasGet"),
                    "displayName": json_schema_string("Display name of the stop area (optional)"),
                    "key": json_schema_key("API key (optional, default 0)"),
                    "userlatlon": json_schema_string("User position as \"lat,lon\" (optional)")
                }),
                vec!["lineId", "stopAreaId"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let tool = "lineStopAreaSchedulesGet";
        let args: SchedulesArgs = parse_arguments(tool, arguments)?;
        require_non_empty(tool, "lineId", &args.line_id)?;
        require_non_empty(tool, "stopAreaId", &args.stop_area_id)?;

        let query = ScheduleQuery {
            display_name: args.display_name,
            key: args.key.and_then(KeyArg::into_query_value),
            userlatlon: args.userlatlon,
        };

        match self
            .client
            .lines()
            .schedules(&args.line_id, &args.stop_area_id, &query)
            .await
        {
            Ok(schedules) => {
                let text = format!(
                    "Found {} schedules for stop area {} on line {}",
                    schedules.len(),
                    args.stop_area_id,
                    args.line_id
                );
                Ok(CallToolResult::text(text).with_metadata(json!({ "schedules": schedules })))
            }
            Err(e) => Ok(upstream_failure(tool, "Error getting schedules", &e)),
        }
    }
}

/// Tool to list the directions of travel of a line
pub struct VehicleJourneysDirectionsGetTool {
    client: SynchroClient,
}

impl VehicleJourneysDirectionsGetTool {
    pub fn new(client: SynchroClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for VehicleJourneysDirectionsGetTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "vehicleJourneysDirectionsGet".to_string(),
            description: "List the directions of travel (and their stop areas) of a line".to_string(),
            input_schema: line_id_schema(),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let tool = "vehicleJourneysDirectionsGet";
        let args = parse_line_args(tool, arguments)?;

        match self.client.lines().directions(&args.line_id).await {
            Ok(directions) => {
                let text = format!("Found {} directions for line {}", directions.len(), args.line_id);
                Ok(CallToolResult::text(text).with_metadata(json!({ "directions": directions })))
            }
            Err(e) => Ok(upstream_failure(tool, "Error getting directions", &e)),
        }
    }
}
