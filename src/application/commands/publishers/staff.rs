// src/application/commands/publishers/staff.rs
use super::{PublisherCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        publisher::PublisherId,
        user::{Role, User, UserId},
    },
};

pub struct AddStaffCommand {
    pub publisher_id: i64,
    pub user_id: i64,
}

impl PublisherCommandService {
    pub async fn add_editor(
        &self,
        actor: &AuthenticatedUser,
        command: AddStaffCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "publishers", "manage")?;

        let (publisher_id, member) = self.load_member(&command).await?;
        ensure_member_role(&member, Role::Editor)?;

        self.publisher_repo
            .add_editor(publisher_id, member.id)
            .await?;
        Ok(())
    }

    pub async fn add_journalist(
        &self,
        actor: &AuthenticatedUser,
        command: AddStaffCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "publishers", "manage")?;

        let (publisher_id, member) = self.load_member(&command).await?;
        ensure_member_role(&member, Role::Journalist)?;

        self.publisher_repo
            .add_journalist(publisher_id, member.id)
            .await?;
        Ok(())
    }

    async fn load_member(
        &self,
        command: &AddStaffCommand,
    ) -> ApplicationResult<(PublisherId, User)> {
        let publisher_id = PublisherId::new(command.publisher_id)?;
        self.publisher_repo
            .find_by_id(publisher_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;

        let user_id = UserId::new(command.user_id)?;
        let member = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        Ok((publisher_id, member))
    }
}

/// Membership is role-scoped: the check runs here, at assignment time,
/// rather than being re-validated by the store.
fn ensure_member_role(member: &User, expected: Role) -> ApplicationResult<()> {
    if member.role == expected {
        Ok(())
    } else {
        Err(ApplicationError::validation(format!(
            "user '{}' must have role {expected} to join as {expected}",
            member.username
        )))
    }
}
