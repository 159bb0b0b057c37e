//! Disruptions API endpoints.

use crate::client::SynchroClient;
use crate::error::SynchroResult;
use crate::transport::QueryPairs;
use synchro_core::{Disruption, Raw};

/// Disruptions API for the configured network.
pub struct DisruptionsApi<'a> {
    client: &'a SynchroClient,
}

impl<'a> DisruptionsApi<'a> {
    pub(crate) fn new(client: &'a SynchroClient) -> Self {
        Self { client }
    }

    /// List current disruptions on the network's lines.
    pub async fn list(&self, query: &DisruptionQuery) -> SynchroResult<Vec<Raw<Disruption>>> {
        let network_id = self.client.network_id().to_string();
        self.client
            .http
            .get_with_query(
                &["networks", &network_id, "lines", "disruptions"],
                &query.to_pairs(),
            )
            .await
    }
}

/// Optional parameters of the disruptions endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisruptionQuery {
    /// Sent as one `subNetworks[]` parameter per entry.
    pub sub_networks: Vec<String>,
    pub key: Option<String>,
    pub userlatlon: Option<String>,
}

impl DisruptionQuery {
    pub(crate) fn to_pairs(&self) -> QueryPairs {
        let mut pairs: QueryPairs = self
            .sub_networks
            .iter()
            .map(|s| ("subNetworks[]", s.clone()))
            .collect();
        pairs.push(("key", self.key.clone().unwrap_or_else(|| "0".to_string())));
        pairs.push(("userlatlon", self.userlatlon.clone().unwrap_or_default()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_disruption_query_without_sub_networks() {
        let pairs = DisruptionQuery::default().to_pairs();

        assert_eq!(
            pairs,
            vec![("key", "0".to_string()), ("userlatlon", String::new())]
        );
    }

    #[test]
    fn test_disruption_query_repeats_sub_networks() {
        let query = DisruptionQuery {
            sub_networks: vec!["urbain".to_string(), "scolaire".to_string()],
            key: Some("12".to_string()),
            userlatlon: Some("45.56,5.91".to_string()),
        };

        assert_eq!(
            query.to_pairs(),
            vec![
                ("subNetworks[]", "urbain".to_string()),
                ("subNetworks[]", "scolaire".to_string()),
                ("key", "12".to_string()),
                ("userlatlon", "45.56,5.91".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_disruptions() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/networks/3/lines/disruptions"))
            .and(query_param("subNetworks[]", "urbain"))
            .and(query_param("key", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": "DIS-1",
                    "title": "Travaux avenue de Lyon",
                    "level": "WARNING",
                    "messages": [{"text": "Arrêt Curial non desservi"}]
                }
            ])))
            .mount(&server)
            .await;

        let client = SynchroClient::builder().base_url(server.uri()).build().unwrap();
        let query = DisruptionQuery {
            sub_networks: vec!["urbain".to_string()],
            ..Default::default()
        };

        let disruptions = client.disruptions().list(&query).await.unwrap();
        assert_eq!(disruptions.len(), 1);
        assert_eq!(disruptions[0].messages[0].text, "Arrêt Curial non desservi");
    }
}
