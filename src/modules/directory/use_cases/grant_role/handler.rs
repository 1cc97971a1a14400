use crate::modules::directory::adapters::outbound::directory::{RoleDirectory, has_any_role};
use crate::modules::directory::core::model::UserRole;
use crate::modules::directory::use_cases::errors::DirectoryError;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct GrantRole {
    pub user_id: String,
    pub role: UserRole,
    pub requested_by: String,
}

pub struct GrantRoleHandler {
    roles: Arc<dyn RoleDirectory>,
}

impl GrantRoleHandler {
    pub fn new(roles: Arc<dyn RoleDirectory>) -> Self {
        Self { roles }
    }

    /// Admins grant roles. Granting a held role is a no-op.
    pub async fn handle(&self, command: GrantRole) -> Result<(), DirectoryError> {
        if !has_any_role(&*self.roles, &command.requested_by, &[UserRole::Admin]).await? {
            tracing::warn!(
                requester = command.requested_by.as_str(),
                "role grant refused"
            );
            return Err(DirectoryError::Forbidden(command.requested_by));
        }

        self.roles.grant(&command.user_id, command.role).await?;
        tracing::info!(
            user_id = command.user_id.as_str(),
            role = ?command.role,
            "role granted"
        );
        Ok(())
    }
}
