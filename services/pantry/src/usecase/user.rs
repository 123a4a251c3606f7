use rand::RngExt;
use tracing::info;

use beforeyougo_domain::id::UserId;

use crate::domain::repository::{
    CredentialHasher, RegistrationNotifier, RegistrationRepository, UserRepository,
};
use crate::domain::types::{NewUser, REGISTRATION_TOKEN_LEN, User, is_valid_user_name};
use crate::error::PantryServiceError;

/// Charset for activation tokens.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

fn generate_token() -> String {
    let mut rng = rand::rng();
    (0..REGISTRATION_TOKEN_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Validate a new user name and make sure nobody holds it yet.
async fn check_new_name<U: UserRepository>(users: &U, name: &str) -> Result<(), PantryServiceError> {
    if !is_valid_user_name(name) {
        return Err(PantryServiceError::InvalidName);
    }
    if users.find_by_name(name).await?.is_some() {
        return Err(PantryServiceError::UserAlreadyExists);
    }
    Ok(())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub name: String,
    pub password: String,
    pub email: Option<String>,
}

pub struct RegisterUserUseCase<U, H, N>
where
    U: UserRepository,
    H: CredentialHasher,
    N: RegistrationNotifier,
{
    pub users: U,
    pub hasher: H,
    pub notifier: N,
    /// Store the user unactivated with a registration token and send the link.
    pub require_activation: bool,
}

impl<U, H, N> RegisterUserUseCase<U, H, N>
where
    U: UserRepository,
    H: CredentialHasher,
    N: RegistrationNotifier,
{
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, PantryServiceError> {
        let name = input.name.trim();
        check_new_name(&self.users, name).await?;
        if input.password.is_empty() {
            return Err(PantryServiceError::MissingData);
        }
        let new_user = NewUser {
            name: name.to_owned(),
            password_hash: self.hasher.hash(&input.password)?,
            email: non_empty(input.email.as_deref()).map(str::to_owned),
            is_activated: !self.require_activation,
        };

        if !self.require_activation {
            let user = self.users.create(&new_user).await?;
            info!(user_id = %user.id, "user registered");
            return Ok(user);
        }

        let token = generate_token();
        let user = self.users.create_with_registration(&new_user, &token).await?;
        self.notifier.send_activation(&user, &token).await?;
        info!(user_id = %user.id, "user registered, awaiting activation");
        Ok(user)
    }
}

// ── ActivateUser ─────────────────────────────────────────────────────────────

pub struct ActivateUserUseCase<R: RegistrationRepository> {
    pub registrations: R,
}

impl<R: RegistrationRepository> ActivateUserUseCase<R> {
    pub async fn execute(&self, token: &str) -> Result<UserId, PantryServiceError> {
        let user_id = self
            .registrations
            .consume(token)
            .await?
            .ok_or(PantryServiceError::InvalidToken)?;
        info!(user_id = %user_id, "user activated");
        Ok(user_id)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginUseCase<U, R, H, N>
where
    U: UserRepository,
    R: RegistrationRepository,
    H: CredentialHasher,
    N: RegistrationNotifier,
{
    pub users: U,
    pub registrations: R,
    pub hasher: H,
    pub notifier: N,
}

impl<U, R, H, N> LoginUseCase<U, R, H, N>
where
    U: UserRepository,
    R: RegistrationRepository,
    H: CredentialHasher,
    N: RegistrationNotifier,
{
    /// Unactivated users get their activation link again instead of a session.
    pub async fn execute(&self, name: &str, password: &str) -> Result<User, PantryServiceError> {
        let user = self
            .users
            .find_by_name(name.trim())
            .await?
            .ok_or(PantryServiceError::InvalidUser)?;
        if !user.is_activated {
            if let Some(registration) = self.registrations.find_by_user(user.id).await? {
                self.notifier
                    .send_activation(&user, &registration.token)
                    .await?;
            }
            return Err(PantryServiceError::UserNotActivated);
        }
        if !self.hasher.verify(password, &user.password_hash) {
            return Err(PantryServiceError::InvalidCredentials);
        }
        Ok(user)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> GetUserUseCase<U> {
    pub async fn execute(&self, user_id: UserId) -> Result<User, PantryServiceError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(PantryServiceError::InvalidUser)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

/// Optional overwrites; empty strings are ignored.
#[derive(Default)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

pub struct UpdateUserUseCase<U: UserRepository, H: CredentialHasher> {
    pub users: U,
    pub hasher: H,
}

impl<U: UserRepository, H: CredentialHasher> UpdateUserUseCase<U, H> {
    pub async fn execute(
        &self,
        user_id: UserId,
        input: UpdateUserInput,
    ) -> Result<User, PantryServiceError> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(PantryServiceError::InvalidUser)?;

        if let Some(name) = non_empty(input.name.as_deref()) {
            if name != user.name {
                check_new_name(&self.users, name).await?;
                user.name = name.to_owned();
            }
        }
        if let Some(password) = input.password.as_deref().filter(|p| !p.is_empty()) {
            user.password_hash = self.hasher.hash(password)?;
        }
        if let Some(email) = non_empty(input.email.as_deref()) {
            user.email = Some(email.to_owned());
        }

        let user = self.users.update(&user).await?;
        info!(user_id = %user.id, "user updated");
        Ok(user)
    }
}

// ── ClearEmail ───────────────────────────────────────────────────────────────

pub struct ClearEmailUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> ClearEmailUseCase<U> {
    pub async fn execute(&self, user_id: UserId) -> Result<User, PantryServiceError> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(PantryServiceError::InvalidUser)?;
        user.email = None;
        self.users.update(&user).await
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> DeleteUserUseCase<U> {
    pub async fn execute(&self, user_id: UserId) -> Result<(), PantryServiceError> {
        if !self.users.delete(user_id).await? {
            return Err(PantryServiceError::InvalidUser);
        }
        info!(user_id = %user_id, "user deleted");
        Ok(())
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> ListUsersUseCase<U> {
    pub async fn execute(&self) -> Result<Vec<User>, PantryServiceError> {
        self.users.list_activated().await
    }
}
