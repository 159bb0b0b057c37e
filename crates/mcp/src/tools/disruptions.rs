// Disruption tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_key, json_schema_object, json_schema_string, parse_arguments, upstream_failure,
    KeyArg, Tool, ToolError,
};
use serde::Deserialize;
use serde_json::json;
use synchro_sdk::{DisruptionQuery, SynchroClient};

/// Tool to list current disruptions on the network
pub struct DisruptionsGetTool {
    client: SynchroClient,
}

impl DisruptionsGetTool {
    pub fn new(client: SynchroClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DisruptionsGetArgs {
    #[serde(default)]
    sub_networks: Option<String>,
    #[serde(default)]
    key: Option<KeyArg>,
    #[serde(default)]
    userlatlon: Option<String>,
}

#[async_trait::async_trait]
impl Tool for DisruptionsGetTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "disruptionsGet".to_string(),
            description: "List current service disruptions on the network's lines".to_string(),
            input_schema: json_schema_object(
                json!({
                    "subNetworks": json_schema_string("Restrict to a sub-network (optional)"),
                    "key": json_schema_key("API key (optional, default 0)"),
                    "userlatlon": json_schema_string("User position as \"lat,lon\" (optional)")
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args: DisruptionsGetArgs = parse_arguments("disruptionsGet", arguments)?;

        let query = DisruptionQuery {
            sub_networks: args
                .sub_networks
                .filter(|s| !s.is_empty())
                .into_iter()
                .collect(),
            key: args.key.and_then(KeyArg::into_query_value),
            userlatlon: args.userlatlon,
        };

        match self.client.disruptions().list(&query).await {
            Ok(disruptions) => {
                let text = format!(
                    "Found {} disruptions for network {}",
                    disruptions.len(),
                    self.client.network_id()
                );
                Ok(CallToolResult::text(text).with_metadata(json!({ "disruptions": disruptions })))
            }
            Err(e) => Ok(upstream_failure("disruptionsGet", "Error getting disruptions", &e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{client_for, unreachable_client};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_disruptions_get() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/networks/3/lines/disruptions"))
            .and(query_param("subNetworks[]", "urbain"))
            .and(query_param("key", "5"))
            .and(query_param("userlatlon", "45.56,5.91"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "DIS-1", "title": "Travaux", "level": "WARNING"},
                {"id": "DIS-2", "title": "Manifestation", "level": "BLOCKING"}
            ])))
            .mount(&server)
            .await;

        let result = DisruptionsGetTool::new(client_for(&server))
            .execute(json!({"subNetworks": "urbain", "key": 5, "userlatlon": "45.56,5.91"}))
            .await
            .unwrap();

        assert!(!result.is_error());
        assert_eq!(result.first_text(), Some("Found 2 disruptions for network 3"));
        assert_eq!(
            result.metadata.unwrap()["disruptions"][1]["title"],
            json!("Manifestation")
        );
    }

    #[tokio::test]
    async fn test_disruptions_defaults() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/networks/3/lines/disruptions"))
            .and(query_param("key", "0"))
            .and(query_param("userlatlon", ""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let result = DisruptionsGetTool::new(client_for(&server))
            .execute(json!({}))
            .await
            .unwrap();

        assert!(!result.is_error());
        assert_eq!(result.first_text(), Some("Found 0 disruptions for network 3"));
    }

    #[tokio::test]
    async fn test_disruptions_transport_error() {
        let result = DisruptionsGetTool::new(unreachable_client())
            .execute(json!({}))
            .await
            .unwrap();

        assert!(result.is_error());
        assert!(result
            .first_text()
            .unwrap()
            .starts_with("Error getting disruptions: HTTP error"));
    }


    #[tokio::test]
    async fn test_disruptions_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/networks/3/lines/disruptions"))
            .respond_with(
                ResponseTemplate::new(503).set_body_json(json!({"message": "Disruption feed unavailable"})),
            )
            .mount(&server)
            .await;

        let result = DisruptionsGetTool::new(client_for(&server))
            .execute(json!({}))
            .await
            .unwrap();

        assert!(result.is_error());
        let text = result.first_text().unwrap();
        assert!(text.starts_with("Error getting disruptions: "));
        assert!(text.contains("Disruption feed unavailable"));
    }
}
