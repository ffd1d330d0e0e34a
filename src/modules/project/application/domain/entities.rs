use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored project. `deleted_at` is the whole lifecycle: `None` while
/// active, set once soft deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Solar roof retrofit")]
    pub name: String,

    #[schema(example = "Replace diesel generators with rooftop solar")]
    pub description: String,

    /// Identity of the owner, usually an email. Not enforced by the store.
    #[schema(example = "jane@example.com")]
    pub owner: String,

    /// Low/high estimate of the CO2 reduction.
    #[schema(example = json!([100.0, 200.0]))]
    pub co2_estimate_reduction: Vec<f64>,

    #[schema(example = json!(["Install panels", "Decommission generators"]))]
    pub listing: Vec<String>,

    pub created_at: DateTime<Utc>,

    pub deleted_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Outcome of an update, soft delete or restore. Zero means nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AffectedRows {
    #[schema(example = 1)]
    pub affected: u64,
}

impl AffectedRows {
    pub fn new(affected: u64) -> Self {
        Self { affected }
    }

    pub fn none() -> Self {
        Self { affected: 0 }
    }
}
