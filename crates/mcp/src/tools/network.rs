// Network-level tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, parse_arguments, upstream_failure, Tool, ToolError};
use serde::Deserialize;
use synchro_sdk::SynchroClient;

/// Tool to describe the configured transit network
pub struct NetworkGetTool {
    client: SynchroClient,
}

impl NetworkGetTool {
    pub fn new(client: SynchroClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct NetworkGetArgs {}

#[async_trait::async_trait]
impl Tool for NetworkGetTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "networkGet".to_string(),
            description: "Get information about the Synchro Bus network (name, transport modes, location)".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let _args: NetworkGetArgs = parse_arguments("networkGet", arguments)?;

        match self.client.network().get().await {
            Ok(network) => {
                let text = format!("Network: {} (ID: {})", network.name, network.id);
                Ok(CallToolResult::text(text).with_metadata(serde_json::to_value(&network)?))
            }
            Err(e) => Ok(upstream_failure("networkGet", "Error getting network", &e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::client_for;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_network_get() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/networks/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 3,
                "name": "Synchro Bus",
                "networkLoaded": true,
                "modes": ["BUS"]
            })))
            .mount(&server)
            .await;

        let tool = NetworkGetTool::new(client_for(&server));
        let result = tool.execute(json!({})).await.unwrap();

        assert!(!result.is_error());
        assert_eq!(result.first_text(), Some("Network: Synchro Bus (ID: 3)"));
        let metadata = result.metadata.unwrap();
        assert_eq!(metadata["name"], json!("Synchro Bus"));
        assert_eq!(metadata["networkLoaded"], json!(true));
    }

    #[tokio::test]
    async fn test_network_get_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/networks/3"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"message": "Network 3 unavailable"})),
            )
            .mount(&server)
            .await;

        let tool = NetworkGetTool::new(client_for(&server));
        let result = tool.execute(serde_json::Value::Null).await.unwrap();

        assert!(result.is_error());
        let text = result.first_text().unwrap();
        assert!(text.starts_with("Error getting network: "));
        assert!(text.contains("Network 3 unavailable"));
        assert!(result.metadata.is_none());
    }
}
