//! Incarnation repository client.
//!
//! The single choke point for all incarnation I/O. Every operation
//! translates between wire and view shapes through [`crate::translate`];
//! no caller ever sees raw wire data. The client is stateless and safe
//! to share across concurrent in-flight operations.

use effigy_core::incarnation::{Incarnation, IncarnationBase, IncarnationInput};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::translate;
use crate::transport::Transport;
use crate::wire::{IncarnationResponse, IncarnationSummaryResponse, UpdateIncarnationRequest};

/// Maximum number of rows returned by [`IncarnationsClient::list`].
///
/// The inventory view is deliberately capped to a single incarnation for
/// now; lifting the cap is a product decision, not a code change to make
/// in passing.
pub const LIST_LIMIT: usize = 1;

/// Client for the `/incarnations` endpoints.
pub struct IncarnationsClient {
    transport: Transport,
}

impl IncarnationsClient {
    /// Create a client with its own transport.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    /// Build a client on top of an existing transport.
    pub fn with_transport(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch the incarnation inventory.
    ///
    /// Returns at most [`LIST_LIMIT`] translated rows.
    pub async fn list(&self) -> ApiResult<Vec<IncarnationBase>> {
        tracing::debug!("Listing incarnations");
        let rows: Vec<IncarnationSummaryResponse> =
            self.transport.get_json("/incarnations").await?;
        Ok(rows
            .into_iter()
            .take(LIST_LIMIT)
            .map(translate::base_view)
            .collect())
    }

    /// Fetch a single incarnation.
    ///
    /// `id` is the raw route parameter; an empty value fails with
    /// [`ApiError::MissingId`] before any request is issued.
    pub async fn get_by_id(&self, id: &str) -> ApiResult<Incarnation> {
        if id.is_empty() {
            return Err(ApiError::MissingId);
        }
        tracing::debug!(id, "Fetching incarnation");
        let response: IncarnationResponse = self
            .transport
            .get_json(&format!("/incarnations/{id}"))
            .await?;
        Ok(translate::detail_view(response))
    }

    /// Create a new incarnation from form state.
    ///
    /// Creation never auto-merges; the input's automerge flag is ignored
    /// on this path (see [`translate::create_request`]).
    pub async fn create(&self, input: &IncarnationInput) -> ApiResult<Incarnation> {
        let payload = translate::create_request(input);
        tracing::debug!(repository = %payload.incarnation_repository, "Creating incarnation");
        let response: IncarnationResponse =
            self.transport.post_json("/incarnations", &payload).await?;
        Ok(translate::detail_view(response))
    }

    /// Submit edited form state as a partial update.
    pub async fn update(&self, id: &str, input: &IncarnationInput) -> ApiResult<Incarnation> {
        let payload = translate::update_request(&input.to_update());
        tracing::debug!(id, version = %payload.template_repository_version, "Updating incarnation");
        let response: IncarnationResponse = self
            .transport
            .put_json(&format!("/incarnations/{id}"), &payload)
            .await?;
        Ok(translate::detail_view(response))
    }

    /// Move an existing incarnation to a new template version.
    ///
    /// The held incarnation's template-data mapping is carried over
    /// unchanged; only the version and the automerge flag are mutable
    /// through this path. The caller-held value fully determines the
    /// outgoing payload -- there is no server-side merge.
    pub async fn update_template_version(
        &self,
        incarnation: &Incarnation,
        template_version: &str,
        automerge: bool,
    ) -> ApiResult<Incarnation> {
        let payload = UpdateIncarnationRequest {
            template_repository_version: template_version.to_string(),
            template_data: incarnation.template_data.clone(),
            automerge,
        };
        tracing::debug!(
            id = incarnation.id,
            version = template_version,
            "Bumping template version"
        );
        let response: IncarnationResponse = self
            .transport
            .put_json(&format!("/incarnations/{}", incarnation.id), &payload)
            .await?;
        Ok(translate::detail_view(response))
    }

    /// Delete an incarnation.
    ///
    /// The backend answers with an empty text body, not JSON. An empty
    /// `id` fails with [`ApiError::MissingId`] before any request is
    /// issued.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        if id.is_empty() {
            return Err(ApiError::MissingId);
        }
        tracing::debug!(id, "Deleting incarnation");
        self.transport
            .delete_text(&format!("/incarnations/{id}"))
            .await
    }
}
