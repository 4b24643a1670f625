// src/application/commands/users/update.rs
use super::{UserCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{EmailAddress, Role, UserId, UserUpdate, specifications},
};

pub struct UpdateUserCommand {
    pub user_id: i64,
    pub role: Option<Role>,
    pub email: Option<String>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        ensure_capability(actor, "users", "update")?;

        let user_id = UserId::new(command.user_id)?;

        if command.role.is_none() && command.email.is_none() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let mut update = UserUpdate::new(user_id);

        if let Some(role) = command.role {
            update = update.with_role(role);
        }

        if let Some(email) = command.email {
            update = update.with_email(EmailAddress::new(email)?);
        }

        let user = self.user_repo.update(update).await?;

        // Invariant check on the record that came back from the save, not
        // on what changed: a journalist holds no subscriptions, period.
        if specifications::must_clear_subscriptions(&user) {
            self.subscription_repo.clear_for_user(user.id).await?;
        }

        Ok(user.into())
    }
}
