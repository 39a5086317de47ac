//! Pure translation between wire and view shapes.
//!
//! The only place a view value may be built from wire data. All
//! functions are side-effect free and total: the single recovered null
//! is a detail payload without `template_data`, which becomes an empty
//! mapping.

use std::collections::BTreeMap;

use effigy_core::incarnation::{
    Incarnation, IncarnationBase, IncarnationInput, IncarnationUpdateInput, TemplateDataEntry,
};

use crate::wire::{
    CreateIncarnationRequest, IncarnationResponse, IncarnationSummaryResponse,
    UpdateIncarnationRequest,
};

/// Translate a collection row into the list projection.
pub fn base_view(wire: IncarnationSummaryResponse) -> IncarnationBase {
    IncarnationBase {
        id: wire.id,
        incarnation_repository: wire.incarnation_repository,
        target_directory: wire.target_directory,
        template_repository: wire.template_repository,
        // Not part of the collection payload; the UI fills it in later.
        template_version: String::new(),
        revision: wire.revision,
        r#type: wire.r#type,
        requested_version: wire.requested_version,
        created_at: wire.created_at,
        commit_sha: wire.commit_sha,
        commit_url: wire.commit_url,
        merge_request_id: wire.merge_request_id,
        merge_request_url: wire.merge_request_url,
    }
}

/// Translate a detail response into the detail projection.
pub fn detail_view(wire: IncarnationResponse) -> Incarnation {
    Incarnation {
        id: wire.id,
        incarnation_repository: wire.incarnation_repository,
        target_directory: wire.target_directory,
        status: wire.status,
        merge_request_status: wire.merge_request_status,
        template_repository: wire.template_repository,
        template_repository_version: wire.template_repository_version,
        template_repository_version_hash: wire.template_repository_version_hash,
        template_data: wire.template_data.unwrap_or_default(),
        commit_sha: wire.commit_sha,
        commit_url: wire.commit_url,
        merge_request_id: wire.merge_request_id,
        merge_request_url: wire.merge_request_url,
    }
}

/// Build the creation payload from form state.
///
/// Creation never auto-merges: `automerge` is forced to `false` here no
/// matter what the form says. The flag is only honored on update.
pub fn create_request(input: &IncarnationInput) -> CreateIncarnationRequest {
    CreateIncarnationRequest {
        incarnation_repository: input.repository.clone(),
        template_repository: input.template_repository.clone(),
        template_repository_version: input.template_version.clone(),
        target_directory: input.target_directory.clone(),
        template_data: fold_template_data(&input.template_data),
        automerge: false,
    }
}

/// Build the partial-update payload from the narrowed write model.
///
/// Unlike [`create_request`], `automerge` is taken verbatim.
pub fn update_request(input: &IncarnationUpdateInput) -> UpdateIncarnationRequest {
    UpdateIncarnationRequest {
        template_repository_version: input.template_version.clone(),
        template_data: fold_template_data(&input.template_data),
        automerge: input.automerge,
    }
}

/// Fold ordered form rows into the wire mapping.
///
/// Left-to-right; a later duplicate key silently overwrites an earlier
/// one.
pub fn fold_template_data(entries: &[TemplateDataEntry]) -> BTreeMap<String, String> {
    entries
        .iter()
        .fold(BTreeMap::new(), |mut mapping, entry| {
            mapping.insert(entry.key.clone(), entry.value.clone());
            mapping
        })
}
