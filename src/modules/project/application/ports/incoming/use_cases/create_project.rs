use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::project_fields::{
    check_listing, check_text, CO2_ESTIMATE_REDUCTION, DESCRIPTION, LISTING, NAME, OWNER,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_repository::CreateProjectData;
use crate::shared::validation::ValidationErrors;

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

/// Raw creation body. Every field is optional here so that a missing field
/// becomes a field error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectInput {
    #[schema(example = "Solar roof retrofit")]
    pub name: Option<String>,

    #[schema(example = "Replace diesel generators with rooftop solar")]
    pub description: Option<String>,

    #[schema(example = "jane@example.com")]
    pub owner: Option<String>,

    #[schema(example = json!([100.0, 200.0]))]
    pub co2_estimate_reduction: Option<Vec<f64>>,

    /// At least one entry
    #[schema(example = json!(["Install panels"]))]
    pub listing: Option<Vec<String>>,
}

/// Checks every field and reports all failures at once.
pub fn validate_create_project(
    input: CreateProjectInput,
) -> Result<CreateProjectData, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name =
        required(&mut errors, NAME, input.name).and_then(|v| check_text(&mut errors, NAME, v));
    let description = required(&mut errors, DESCRIPTION, input.description)
        .and_then(|v| check_text(&mut errors, DESCRIPTION, v));
    let owner =
        required(&mut errors, OWNER, input.owner).and_then(|v| check_text(&mut errors, OWNER, v));
    let co2_estimate_reduction =
        required(&mut errors, CO2_ESTIMATE_REDUCTION, input.co2_estimate_reduction);
    let listing =
        required(&mut errors, LISTING, input.listing).and_then(|v| check_listing(&mut errors, v));

    match (name, description, owner, co2_estimate_reduction, listing) {
        (Some(name), Some(description), Some(owner), Some(co2_estimate_reduction), Some(listing))
            if errors.is_empty() =>
        {
            Ok(CreateProjectData {
                name,
                description,
                owner,
                co2_estimate_reduction,
                listing,
            })
        }
        _ => Err(errors),
    }
}

fn required<T>(errors: &mut ValidationErrors, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.add(field, "is required");
    }
    value
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: CreateProjectData) -> Result<Project, CreateProjectError>;
}
