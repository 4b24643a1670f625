// src/application/commands/users/register.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{EmailAddress, NewUser, PasswordHash, Role, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl UserCommandService {
    /// The very first account becomes an editor so the system can be
    /// bootstrapped. Readers may self-register afterwards; any other role
    /// has to be created by someone holding `users:create`.
    pub async fn register(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: RegisterUserCommand,
    ) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;
        let email = command.email.map(EmailAddress::new).transpose()?;

        let existing = self.user_repo.count().await?;
        let role = determine_role(existing, actor, command.role)?;

        self.ensure_username_available(existing, &username).await?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(username, email, password_hash, role, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;

        Ok(user.into())
    }

    async fn ensure_username_available(
        &self,
        existing: u64,
        username: &Username,
    ) -> ApplicationResult<()> {
        if existing == 0 {
            return Ok(());
        }

        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        Ok(())
    }
}

fn determine_role(
    existing: u64,
    actor: Option<&AuthenticatedUser>,
    requested: Option<Role>,
) -> ApplicationResult<Role> {
    if existing == 0 {
        return Ok(Role::Editor);
    }

    let role = requested.unwrap_or(Role::Reader);
    if role == Role::Reader {
        return Ok(role);
    }

    let requester =
        actor.ok_or_else(|| ApplicationError::forbidden("editorial privileges are required"))?;
    super::capability::ensure_capability(requester, "users", "create")?;
    Ok(role)
}
