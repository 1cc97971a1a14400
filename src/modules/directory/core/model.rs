// Projects, user profiles and roles.
//
// Validation rules live here so every inbound adapter rejects the same input.

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub color: String,
    pub budget: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub display_name: String,
    pub daily_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User,
    Admin,
    /// May create and delete projects.
    ProjectOwner,
}

pub const DEFAULT_PROJECT_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("project name is required")]
    MissingName,
    #[error("display name is required")]
    MissingDisplayName,
    #[error("{0} must be a finite amount of zero or more")]
    InvalidAmount(&'static str),
}

/// Trimmed project name, rejected when blank.
pub fn project_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    Ok(name.to_string())
}

pub fn display_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingDisplayName);
    }
    Ok(name.to_string())
}

/// Budgets and daily costs share one rule.
pub fn amount(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidAmount(field))
    }
}
