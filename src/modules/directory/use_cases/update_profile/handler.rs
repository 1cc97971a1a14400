// Update profile use case.
//
// Responsibilities
// - Users edit their own display name. Admins edit anyone's.
// - Only admins set the daily cost used by the admin report.
// - The first update of an unknown user creates the profile and needs a display name.

use crate::modules::directory::adapters::outbound::directory::{
    ProfileDirectory, RoleDirectory, has_any_role,
};
use crate::modules::directory::core::model::{
    Profile, UserRole, ValidationError, amount, display_name,
};
use crate::modules::directory::use_cases::errors::DirectoryError;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProfile {
    pub user_id: String,
    pub display_name: Option<String>,
    pub daily_cost: Option<f64>,
    pub requested_by: String,
}

pub struct UpdateProfileHandler {
    profiles: Arc<dyn ProfileDirectory>,
    roles: Arc<dyn RoleDirectory>,
}

impl UpdateProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileDirectory>, roles: Arc<dyn RoleDirectory>) -> Self {
        Self { profiles, roles }
    }

    pub async fn handle(&self, command: UpdateProfile) -> Result<Profile, DirectoryError> {
        let is_admin =
            has_any_role(&*self.roles, &command.requested_by, &[UserRole::Admin]).await?;
        let is_self = !command.requested_by.is_empty() && command.requested_by == command.user_id;
        if !(is_admin || is_self) || (command.daily_cost.is_some() && !is_admin) {
            tracing::warn!(
                requester = command.requested_by.as_str(),
                user_id = command.user_id.as_str(),
                "profile update refused"
            );
            return Err(DirectoryError::Forbidden(command.requested_by));
        }

        let current = self.profiles.profile_of(&command.user_id).await?;
        let name = match (command.display_name.as_deref(), &current) {
            (Some(raw), _) => display_name(raw)?,
            (None, Some(profile)) => profile.display_name.clone(),
            (None, None) => return Err(ValidationError::MissingDisplayName.into()),
        };
        let daily_cost = match (command.daily_cost, &current) {
            (Some(cost), _) => amount("daily_cost", cost)?,
            (None, Some(profile)) => profile.daily_cost,
            (None, None) => 0.0,
        };

        let profile = Profile {
            user_id: command.user_id,
            display_name: name,
            daily_cost,
        };
        self.profiles.save_profile(profile.clone()).await?;
        tracing::info!(user_id = profile.user_id.as_str(), "profile updated");
        Ok(profile)
    }
}
