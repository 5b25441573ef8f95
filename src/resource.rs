// resource.rs
//! Generic plumbing shared by every resource service.
//!
//! All collection endpoints speak the same protocol: GET against a base
//! path with an optional raw OData query, responses wrapped in a `{"d":
//! [...]}` envelope, singular lookups expecting 0 or 1 entities, mutations
//! answered with either a bare entity body or an opaque acknowledgement.
//! `Resource` captures that protocol once; the per-resource services only
//! contribute paths, filter queries and response types.

use bytes::Bytes;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::client::FleetHubClient;
use crate::error::FleetHubError;
use crate::response_ext::ResponseExt;

type Result<T> = std::result::Result<T, FleetHubError>;

/// The `{"d": [...]}` wrapper every collection response uses.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default = "Vec::new")]
    pub(crate) d: Vec<T>,
}

pub(crate) struct Resource<T> {
    client: FleetHubClient,
    base_path: &'static str,
    // Singular noun used in error messages, e.g. "device".
    entity: &'static str,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> Resource<T> {
    pub(crate) fn new(client: FleetHubClient, base_path: &'static str, entity: &'static str) -> Self {
        Self { client, base_path, entity, _marker: PhantomData }
    }

    /// GET the collection, optionally constrained by a raw OData query.
    /// An empty result is a valid, non-error outcome.
    pub(crate) async fn list(&self, query: &str) -> Result<Vec<T>> {
        self.list_at(self.base_path, query).await
    }

    async fn list_at(&self, path: &str, query: &str) -> Result<Vec<T>> {
        let req = self.client.new_request(Method::GET, path, query, None::<&()>)?;
        let envelope: Envelope<T> = self.client.execute(req).await?.json()?;
        Ok(envelope.d)
    }

    /// GET constrained to at most one entity. Zero entities is `Ok(None)`;
    /// more than one is a data-integrity error, never a partial result.
    pub(crate) async fn get_one(&self, path: &str, query: &str) -> Result<Option<T>> {
        let mut entities = self.list_at(path, query).await?;
        if entities.len() > 1 {
            return Err(FleetHubError::DataIntegrity(format!(
                "received more than 1 {}, expected 0 or 1",
                self.entity
            )));
        }
        Ok(entities.pop())
    }

    /// POST a new entity; the API answers with the bare created entity body.
    pub(crate) async fn create<B: Serialize>(&self, body: &B) -> Result<T> {
        let req = self.client.new_request(Method::POST, self.base_path, "", Some(body))?;
        self.client.execute(req).await?.json()
    }

    /// PATCH entities matched by path/query. The acknowledgement body is
    /// opaque text (typically `OK`) and is returned verbatim.
    pub(crate) async fn update<B: Serialize>(&self, path: &str, query: &str, body: &B) -> Result<Bytes> {
        let req = self.client.new_request(Method::PATCH, path, query, Some(body))?;
        Ok(self.client.execute(req).await?.bytes())
    }

    /// DELETE entities matched by the query. Deleting a filtered target that
    /// does not exist succeeds silently.
    pub(crate) async fn delete(&self, query: &str) -> Result<()> {
        let req = self.client.new_request(Method::DELETE, self.base_path, query, None::<&()>)?;
        self.client.execute(req).await?;
        Ok(())
    }

    pub(crate) fn client(&self) -> &FleetHubClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_tolerates_missing_d() {
        let envelope: Envelope<i64> = serde_json::from_str("{}").unwrap();
        assert!(envelope.d.is_empty());
    }

    #[test]
    fn test_envelope_decodes_entities_in_order() {
        let envelope: Envelope<i64> = serde_json::from_str(r#"{"d":[3,1,2]}"#).unwrap();
        assert_eq!(envelope.d, vec![3, 1, 2]);
    }
}
