use chrono::{TimeZone, Utc};

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, PatchProjectData,
};

pub fn sample_project(id: i32) -> Project {
    Project {
        id,
        name: format!("Project {}", id),
        description: "The description".to_string(),
        owner: "John Doe".to_string(),
        co2_estimate_reduction: vec![100.0, 200.0],
        listing: vec!["Lorem ipsum dolor sit amet".to_string()],
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        deleted_at: None,
    }
}

pub fn deleted_project(id: i32) -> Project {
    Project {
        deleted_at: Some(Utc.with_ymd_and_hms(2024, 3, 2, 8, 30, 0).unwrap()),
        ..sample_project(id)
    }
}

pub fn sample_create_data() -> CreateProjectData {
    CreateProjectData {
        name: "Project 1".to_string(),
        description: "The description".to_string(),
        owner: "John Doe".to_string(),
        co2_estimate_reduction: vec![100.0, 200.0],
        listing: vec!["Lorem ipsum dolor sit amet".to_string()],
    }
}

pub fn rename_patch(name: &str) -> PatchProjectData {
    PatchProjectData {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

/// Creation body as a client would send it.
pub fn create_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Project 1",
        "description": "The description",
        "owner": "John Doe",
        "co2EstimateReduction": [100.0, 200.0],
        "listing": ["Lorem ipsum dolor sit amet"]
    })
}
