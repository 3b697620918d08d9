//! User signup, login, and CRUD.
//!
//! Passwords are argon2-hashed at signup and verified with the library's
//! constant-time comparison at login. The legacy system stored and compared
//! plaintext; that is corrected here, with the external signup/login
//! contracts unchanged.

use argon2::password_hash::{PasswordHash, SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use rand::RngExt;

use crate::domain::repository::UserRepository;
use crate::domain::types::{User, UserPatch};
use crate::error::InventoryError;

/// Generate a user id: upper-cased name initials plus five random digits.
fn generate_user_id(first_name: &str, last_name: &str) -> String {
    let first_initial = initial(first_name);
    let last_initial = initial(last_name);
    let digits: u32 = rand::rng().random_range(10_000..100_000);
    format!("{first_initial}{last_initial}{digits}")
}

fn initial(name: &str) -> char {
    name.trim()
        .chars()
        .flat_map(char::to_uppercase)
        .next()
        .unwrap_or('X')
}

fn hash_password(password: &str) -> Result<String, InventoryError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InventoryError::Internal(anyhow::anyhow!("password hashing failed: {e}")))
}

fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .and_then(|parsed| Argon2::default().verify_password(password.as_bytes(), &parsed))
        .is_ok()
}

// ── SignUp ───────────────────────────────────────────────────────────────────

pub struct SignUpInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub status: Option<String>,
    pub role: Option<String>,
}

pub struct SignUpUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> SignUpUseCase<R> {
    /// Create a user with a generated id. An id collision is retried once
    /// with one extra random digit appended; a second collision propagates.
    pub async fn execute(&self, input: SignUpInput) -> Result<String, InventoryError> {
        let first_name = required(input.first_name, "first name")?;
        let last_name = required(input.last_name, "last name")?;
        let email = required(input.email, "email")?;
        let password = required(input.password, "password")?;
        let status = required(input.status, "status")?;
        let role = input.role.unwrap_or_else(|| "student".to_owned());

        let mut user = User {
            user_id: generate_user_id(&first_name, &last_name),
            first_name,
            last_name,
            email,
            password_hash: hash_password(&password)?,
            status,
            role,
        };

        match self.repo.create(&user).await {
            Err(InventoryError::UserIdCollision) => {
                let extra: u32 = rand::rng().random_range(0..10);
                user.user_id = format!(
                    "{}{extra}",
                    generate_user_id(&user.first_name, &user.last_name)
                );
                self.repo.create(&user).await?;
            }
            other => other?,
        }
        Ok(user.user_id)
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, InventoryError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(InventoryError::MissingField(field)),
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginInput) -> Result<User, InventoryError> {
        let (Some(email), Some(password)) = (input.email, input.password) else {
            return Err(InventoryError::InvalidInput(
                "Email and password are required",
            ));
        };
        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(InventoryError::InvalidCredentials)?;
        if !verify_password(&password, &user.password_hash) {
            return Err(InventoryError::InvalidCredentials);
        }
        Ok(user)
    }
}

// ── Reads / Update / Delete ──────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, InventoryError> {
        self.repo.list().await
    }
}

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: &str) -> Result<User, InventoryError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(InventoryError::UserNotFound)
    }
}

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub async fn execute(&self, user_id: &str, patch: UserPatch) -> Result<(), InventoryError> {
        self.repo.update_fields(user_id, &patch).await?;
        Ok(())
    }
}

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub async fn execute(&self, user_id: &str) -> Result<(), InventoryError> {
        self.repo.delete(user_id).await?;
        Ok(())
    }
}
