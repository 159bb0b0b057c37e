//! Proximity API endpoints.

use crate::client::SynchroClient;
use crate::error::{SynchroError, SynchroResult};
use crate::transport::QueryPairs;
use synchro_core::{NetworkId, ProximityResponse, Raw};

/// Proximity API for nearby points of interest.
pub struct ProximityApi<'a> {
    client: &'a SynchroClient,
}

impl<'a> ProximityApi<'a> {
    pub(crate) fn new(client: &'a SynchroClient) -> Self {
        Self { client }
    }

    /// Search points of interest around a location.
    ///
    /// Fails with [`SynchroError::InvalidResponse`] when the body has no
    /// `proximities` array.
    pub async fn search(&self, query: &ProximityQuery) -> SynchroResult<Raw<ProximityResponse>> {
        let network_id = self.client.network_id();
        let body: serde_json::Value = self
            .client
            .http
            .get_with_query(
                &["networks", &network_id.to_string(), "proximity"],
                &query.to_pairs(network_id),
            )
            .await?;

        if !body.get("proximities").is_some_and(|p| p.is_array()) {
            return Err(SynchroError::InvalidResponse {
                endpoint: "proximity".to_string(),
                body: body.to_string(),
            });
        }

        Ok(Raw::from_json(body))
    }
}

/// Parameters of the proximity endpoint.
///
/// Optional parameters are omitted when unset; `key` defaults to the network
/// identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProximityQuery {
    pub lat: f64,
    pub lon: f64,
    pub precision: Option<f64>,
    pub accessibility: Option<bool>,
    pub scholar: Option<f64>,
    pub context: Option<String>,
    pub key: Option<String>,
}

impl ProximityQuery {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            ..Default::default()
        }
    }

    pub(crate) fn to_pairs(&self, network_id: NetworkId) -> QueryPairs {
        let mut pairs: QueryPairs = vec![("lat", self.lat.to_string()), ("lon", self.lon.to_string())];

        if let Some(precision) = self.precision {
            pairs.push(("precision", precision.to_string()));
        }
        if let Some(accessibility) = self.accessibility {
            pairs.push(("accessibility", accessibility.to_string()));
        }
        if let Some(scholar) = self.scholar {
            pairs.push(("scholar", scholar.to_string()));
        }
        if let Some(ref context) = self.context {
            pairs.push(("context", context.clone()));
        }

        let key = self.key.clone().unwrap_or_else(|| network_id.to_string());
        pairs.push(("key", key));
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
    fn test_proximity_query_minimal() {
        let pairs = ProximityQuery::new(45.5646, 5.9178).to_pairs(NetworkId(3));

        assert_eq!(
            pairs,
            vec![
                ("lat", "45.5646".to_string()),
                ("lon", "5.9178".to_string()),
                ("key", "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_proximity_query_all_parameters() {
        let query = ProximityQuery {
            precision: Some(500.0),
            accessibility: Some(true),
            scholar: Some(1.0),
            context: Some("HOME".to_string()),
            key: Some("abc".to_string()),
            ..ProximityQuery::new(45.0, 5.0)
        };

        assert_eq!(
            query.to_pairs(NetworkId(3)),
            vec![
                ("lat", "45".to_string()),
                ("lon", "5".to_string()),
                ("precision", "500".to_string()),
                ("accessibility", "true".to_string()),
                ("scholar", "1".to_string()),
                ("context", "HOME".to_string()),
                ("key", "abc".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_search() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/networks/3/proximity"))
            .and(query_param("lat", "45.5646"))
            .and(query_param("lon", "5.9178"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "proximities": [
                    {"distance": 85, "stopArea": {"id": "SA:1", "name": "Gare", "city": "Chambéry"}}
                ],
                "shapes": ["abc"]
            })))
            .mount(&server)
            .await;

        let client = SynchroClient::builder().base_url(server.uri()).build().unwrap();

        let result = client
            .proximity()
            .search(&ProximityQuery::new(45.5646, 5.9178))
            .await
            .unwrap();
        assert_eq!(result.proximities.len(), 1);
        assert_eq!(result.shapes, vec![json!("abc")]);
    }

    #[tokio::test]
    async fn test_search_rejects_body_without_proximities() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/networks/3/proximity"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .mount(&server)
            .await;

        let client = SynchroClient::builder().base_url(server.uri()).build().unwrap();

        let err = client
            .proximity()
            .search(&ProximityQuery::new(45.0, 5.0))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Invalid response format from proximity API. Response: {"status":"ok"}"#
        );
    }
}
