pub mod disruptions;
pub mod lines;
pub mod network;
pub mod proximity;
mod registry;

pub use disruptions::DisruptionsGetTool;
pub use lines::{
    LineGetTool, LineStopAreaSchedulesGetTool, LineStopAreasGetTool, LinesGetTool,
    VehicleJourneysDirectionsGetTool,
};
pub use network::NetworkGetTool;
pub use proximity::{format_proximities, ProximityGetTool};
pub use registry::{
    json_schema_boolean, json_schema_key, json_schema_number, json_schema_object,
    json_schema_string, parse_arguments, require_non_empty, KeyArg, Tool, ToolError, ToolRegistry,
};

use crate::protocol::CallToolResult;
use std::sync::Arc;
use synchro_sdk::{SynchroClient, SynchroError};

/// Register the eight transit tools against one upstream client.
pub fn register_transit_tools(registry: &mut ToolRegistry, client: &SynchroClient) {
    registry.register(Arc::new(NetworkGetTool::new(client.clone())));
    registry.register(Arc::new(LinesGetTool::new(client.clone())));
    registry.register(Arc::new(LineGetTool::new(client.clone())));
    registry.register(Arc::new(LineStopAreasGetTool::new(client.clone())));
    registry.register(Arc::new(LineStopAreaSchedulesGetTool::new(client.clone())));
    registry.register(Arc::new(DisruptionsGetTool::new(client.clone())));
    registry.register(Arc::new(VehicleJourneysDirectionsGetTool::new(client.clone())));
    registry.register(Arc::new(ProximityGetTool::new(client.clone())));
}

/// Error-flagged result for a failed upstream call: `"{prefix}: {error}"`.
pub(crate) fn upstream_failure(tool: &str, prefix: &str, err: &SynchroError) -> CallToolResult {
    tracing::error!(tool, error = %err, "Upstream call failed");
    CallToolResult::error(format!("{}: {}", prefix, err))
}

/// Like [`upstream_failure`], followed by a blank line and a usage hint.
pub(crate) fn upstream_failure_with_hint(
    tool: &str,
    prefix: &str,
    err: &SynchroError,
    hint: &str,
) -> CallToolResult {
    tracing::error!(tool, error = %err, "Upstream call failed");
    CallToolResult::error(format!("{}: {}\n\n{}", prefix, err, hint))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;
    use synchro_sdk::SynchroClient;
    use wiremock::MockServer;

    pub fn client_for(server: &MockServer) -> SynchroClient {
        SynchroClient::builder()
            .base_url(server.uri())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }

    /// Client pointed at a port nothing listens on.
    pub fn unreachable_client() -> SynchroClient {
        SynchroClient::builder()
            .base_url("http://127.0.0.1:1")
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap()
    }
}
