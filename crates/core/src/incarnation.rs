//! Incarnation view types.
//!
//! These are the UI-facing projections of an incarnation: the list row,
//! the detail view, and the form write models. They serialize with
//! camelCase field names and are exported to TypeScript via ts-rs so the
//! frontend consumes the exact same shapes.
//!
//! View values are only ever constructed from a fresh API response by the
//! translator in `effigy-client`; they are never mutated in place. Every
//! state change is a new input submitted through the client, replacing
//! the held view with the translated response.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{IncarnationId, Timestamp};

// ---------------------------------------------------------------------------
// Merge request status
// ---------------------------------------------------------------------------

/// State of the merge request attached to an incarnation change.
///
/// Values unknown to this client deserialize as [`Unknown`](Self::Unknown)
/// so that a newer backend cannot break the inventory view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MergeRequestStatus {
    Open,
    Merged,
    Closed,
    #[serde(other)]
    Unknown,
}

impl MergeRequestStatus {
    /// Return the status as its lowercase wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Merged => "merged",
            Self::Closed => "closed",
            Self::Unknown => "unknown",
        }
    }
}

// ---------------------------------------------------------------------------
// Read projections
// ---------------------------------------------------------------------------

/// List-row projection of an incarnation, as shown in the inventory table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IncarnationBase {
    pub id: IncarnationId,
    /// Repository the template was instantiated into.
    pub incarnation_repository: String,
    pub target_directory: String,
    pub template_repository: Option<String>,
    /// UI-only field. The list endpoint does not carry a template version,
    /// so this is always the empty string here; it must never feed
    /// business logic.
    pub template_version: String,
    pub revision: i64,
    pub r#type: String,
    pub requested_version: String,
    pub created_at: Timestamp,
    pub commit_sha: String,
    pub commit_url: String,
    pub merge_request_id: Option<String>,
    pub merge_request_url: Option<String>,
}

/// Detail projection of a single incarnation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Incarnation {
    pub id: IncarnationId,
    pub incarnation_repository: String,
    pub target_directory: String,
    pub status: String,
    pub merge_request_status: Option<MergeRequestStatus>,
    pub template_repository: Option<String>,
    pub template_repository_version: Option<String>,
    pub template_repository_version_hash: Option<String>,
    /// Template variable assignments. Empty when the backend reported
    /// none; never absent on the view side.
    pub template_data: BTreeMap<String, String>,
    pub commit_sha: String,
    pub commit_url: String,
    pub merge_request_id: Option<String>,
    pub merge_request_url: Option<String>,
}

impl Incarnation {
    /// Project this detail view into edit-form state.
    ///
    /// A missing template repository or version becomes the empty string
    /// (the form renders blanks, not nulls), and the template-data mapping
    /// is exploded into ordered key/value rows.
    pub fn to_input(&self) -> IncarnationInput {
        IncarnationInput {
            automerge: false,
            repository: self.incarnation_repository.clone(),
            target_directory: self.target_directory.clone(),
            template_repository: self.template_repository.clone().unwrap_or_default(),
            template_version: self.template_repository_version.clone().unwrap_or_default(),
            template_data: self
                .template_data
                .iter()
                .map(|(key, value)| TemplateDataEntry {
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Write models
// ---------------------------------------------------------------------------

/// One template-variable row of the create/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TemplateDataEntry {
    pub key: String,
    pub value: String,
}

/// Full create/edit form state.
///
/// `template_data` is an ordered sequence here, mirroring form-row order;
/// it is folded into a mapping (last occurrence of a duplicate key wins)
/// when translated to a wire payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IncarnationInput {
    pub automerge: bool,
    pub repository: String,
    pub target_directory: String,
    pub template_repository: String,
    pub template_version: String,
    pub template_data: Vec<TemplateDataEntry>,
}

impl IncarnationInput {
    /// Narrow the full form state to the partial-update write model.
    ///
    /// Repository, target directory, and template repository are immutable
    /// once an incarnation exists; updates only carry the version, the
    /// automerge flag, and the variable rows.
    pub fn to_update(&self) -> IncarnationUpdateInput {
        IncarnationUpdateInput {
            template_version: self.template_version.clone(),
            automerge: self.automerge,
            template_data: self.template_data.clone(),
        }
    }
}

/// Partial-update write model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IncarnationUpdateInput {
    pub template_version: String,
    pub automerge: bool,
    pub template_data: Vec<TemplateDataEntry>,
}
