//! Network API endpoints.

use crate::client::SynchroClient;
use crate::error::SynchroResult;
use synchro_core::{Network, Raw};

/// Network API for the configured network's description.
pub struct NetworkApi<'a> {
    client: &'a SynchroClient,
}

impl<'a> NetworkApi<'a> {
    pub(crate) fn new(client: &'a SynchroClient) -> Self {
        Self { client }
    }

    /// Get the network description.
    pub async fn get(&self) -> SynchroResult<Raw<Network>> {
        let network_id = self.client.network_id().to_string();
        self.client.http.get(&["networks", &network_id]).await
    }
}
