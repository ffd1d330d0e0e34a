use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::project_fields::{
    check_listing, check_text, CO2_ESTIMATE_REDUCTION, DESCRIPTION, LISTING, NAME, OWNER,
};
use crate::modules::project::application::domain::entities::AffectedRows;
use crate::modules::project::application::ports::outgoing::project_repository::{
    PatchField, PatchProjectData,
};
use crate::shared::validation::ValidationErrors;

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

/// Partial update body. Omitted fields are kept; unknown fields (`id`,
/// `createdAt`, `deletedAt`, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectInput {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub owner: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<f64>>)]
    pub co2_estimate_reduction: PatchField<Vec<f64>>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub listing: PatchField<Vec<String>>,
}

pub fn validate_update_project(
    input: UpdateProjectInput,
) -> Result<PatchProjectData, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name =
        provided(&mut errors, NAME, input.name).and_then(|v| check_text(&mut errors, NAME, v));
    let description = provided(&mut errors, DESCRIPTION, input.description)
        .and_then(|v| check_text(&mut errors, DESCRIPTION, v));
    let owner =
        provided(&mut errors, OWNER, input.owner).and_then(|v| check_text(&mut errors, OWNER, v));
    let co2_estimate_reduction = provided(
        &mut errors,
        CO2_ESTIMATE_REDUCTION,
        input.co2_estimate_reduction,
    );
    let listing =
        provided(&mut errors, LISTING, input.listing).and_then(|v| check_listing(&mut errors, v));

    let data = PatchProjectData {
        name,
        description,
        owner,
        co2_estimate_reduction,
        listing,
    };

    if errors.is_empty() && data.is_empty() {
        errors.add("patch", "must contain at least one field");
    }

    errors.into_result(|| data)
}

fn provided<T>(errors: &mut ValidationErrors, field: &str, value: PatchField<T>) -> Option<T> {
    match value {
        PatchField::Unset => None,
        PatchField::Null => {
            errors.add(field, "must not be null");
            None
        }
        PatchField::Value(v) => Some(v),
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: i32,
        data: PatchProjectData,
    ) -> Result<AffectedRows, UpdateProjectError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> UpdateProjectInput {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_single_field_patch() {
        let data = validate_update_project(parse(json!({ "name": "Renamed" }))).unwrap();

        assert_eq!(data.name.as_deref(), Some("Renamed"));
        assert!(data.description.is_none());
        assert!(data.listing.is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let data = validate_update_project(parse(json!({
            "id": 7,
            "createdAt": "2024-01-01T00:00:00Z",
            "deletedAt": null,
            "co2EstimateReduction": [1.5, 3.0]
        })))
        .unwrap();

        assert_eq!(data.co2_estimate_reduction, Some(vec![1.5, 3.0]));
        assert!(data.name.is_none());
    }

    #[test]
    fn test_empty_patch_rejected() {
        let errors = validate_update_project(parse(json!({}))).unwrap_err();
        assert!(errors.has_field("patch"));
    }

    #[test]
    fn test_null_on_required_column_rejected() {
        let errors = validate_update_project(parse(json!({ "owner": null }))).unwrap_err();

        assert!(errors.has_field("owner"));
        assert!(!errors.has_field("patch"));
    }

    #[test]
    fn test_empty_listing_rejected() {
        let errors = validate_update_project(parse(json!({ "listing": [] }))).unwrap_err();
        assert!(errors.has_field("listing"));
    }

    #[test]
    fn test_empty_description_rejected() {
        let errors =
            validate_update_project(parse(json!({ "description": "", "name": "ok" })))
                .unwrap_err();

        assert_eq!(errors.errors().len(), 1);
        assert!(errors.has_field("description"));
    }

    #[test]
    fn test_whitespace_and_empty_listing_entries_accepted() {
        let data =
            validate_update_project(parse(json!({ "owner": " ", "listing": ["step", ""] })))
                .unwrap();

        assert_eq!(data.owner.as_deref(), Some(" "));
        assert_eq!(data.listing, Some(vec!["step".to_string(), "".to_string()]));
    }
}
