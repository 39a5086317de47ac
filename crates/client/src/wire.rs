//! Wire shapes of the incarnation API.
//!
//! The exact snake_case JSON exchanged with the backend. Response types
//! only deserialize, request types only serialize; the view shapes in
//! `effigy-core` are produced exclusively by the translator, never by
//! hand from raw wire data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use effigy_core::incarnation::MergeRequestStatus;
use effigy_core::types::{IncarnationId, Timestamp};

/// One row of the `GET /incarnations` collection response.
#[derive(Debug, Clone, Deserialize)]
pub struct IncarnationSummaryResponse {
    pub id: IncarnationId,
    pub incarnation_repository: String,
    pub target_directory: String,
    pub template_repository: Option<String>,
    pub revision: i64,
    pub r#type: String,
    pub requested_version: String,
    pub created_at: Timestamp,
    pub commit_sha: String,
    pub commit_url: String,
    pub merge_request_id: Option<String>,
    pub merge_request_url: Option<String>,
}

/// Detail response for a single incarnation, returned by `GET`, `POST`
/// and `PUT` on the incarnation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct IncarnationResponse {
    pub id: IncarnationId,
    pub incarnation_repository: String,
    pub target_directory: String,
    pub status: String,
    pub merge_request_status: Option<MergeRequestStatus>,
    pub template_repository: Option<String>,
    pub template_repository_version: Option<String>,
    pub template_repository_version_hash: Option<String>,
    /// Absent or null when the incarnation carries no template variables.
    pub template_data: Option<BTreeMap<String, String>>,
    pub commit_sha: String,
    pub commit_url: String,
    pub merge_request_id: Option<String>,
    pub merge_request_url: Option<String>,
}

/// Body of `POST /incarnations`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIncarnationRequest {
    pub incarnation_repository: String,
    pub template_repository: String,
    pub template_repository_version: String,
    pub target_directory: String,
    pub template_data: BTreeMap<String, String>,
    pub automerge: bool,
}

/// Body of `PUT /incarnations/{id}`. A partial update: repository,
/// target directory, and template repository are immutable once the
/// incarnation exists.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateIncarnationRequest {
    pub template_repository_version: String,
    pub template_data: BTreeMap<String, String>,
    pub automerge: bool,
}
