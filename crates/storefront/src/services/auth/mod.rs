//! Demo authentication service.
//!
//! Registered accounts live as one flat list under a single global storage
//! key, with plaintext-equivalent credentials for login matching. This is
//! explicitly a demo-only credential store, not a security surface: there is
//! no hashing, no sessions beyond the in-memory current account, and no
//! authorization. The flat list is encapsulated behind
//! [`AccountRepository`]; a linear scan is fine at demo scale, and callers
//! never touch the raw collection.

mod error;

pub use error::AuthError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clementine_core::{Email, UserId};

use crate::identity;
use crate::storage::{ACCOUNTS_KEY, UserStorage};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// A registered demo account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Derived id; the namespace key for all of this account's data.
    pub user_id: UserId,
    pub email: Email,
    /// Plaintext by design - see the module docs.
    pub password: String,
    /// Display name.
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Repository over the registered accounts list.
pub struct AccountRepository {
    storage: UserStorage,
}

impl AccountRepository {
    /// Create a repository over the given storage.
    #[must_use]
    pub const fn new(storage: UserStorage) -> Self {
        Self { storage }
    }

    /// Find an account by (normalized) email.
    #[must_use]
    pub fn find_by_email(&self, email: &Email) -> Option<Account> {
        self.storage
            .load_global::<Account>(ACCOUNTS_KEY)
            .into_iter()
            .find(|account| &account.email == email)
    }

    /// Append a new account.
    pub fn insert(&self, account: &Account) {
        let mut accounts = self.storage.load_global::<Account>(ACCOUNTS_KEY);
        accounts.push(account.clone());
        self.storage.save_global(ACCOUNTS_KEY, &accounts);
    }
}

/// Authentication service: registration, login, logout, and resolution of
/// the active user id.
pub struct AuthService {
    accounts: AccountRepository,
    current: Option<Account>,
}

impl AuthService {
    /// Create a service over the given storage, with no active session.
    #[must_use]
    pub const fn new(storage: UserStorage) -> Self {
        Self {
            accounts: AccountRepository::new(storage),
            current: None,
        }
    }

    /// Register a new account and start a session for it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid,
    /// `AuthError::WeakPassword` if the password is too short, and
    /// `AuthError::AccountAlreadyExists` for a duplicate email.
    pub fn register(&mut self, email: &str, password: &str, name: &str) -> Result<&Account, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        if self.accounts.find_by_email(&email).is_some() {
            return Err(AuthError::AccountAlreadyExists);
        }

        let account = Account {
            user_id: identity::user_id(email.as_str()),
            email,
            password: password.to_owned(),
            name: name.trim().to_owned(),
            created_at: Utc::now(),
        };
        self.accounts.insert(&account);
        tracing::debug!(user = %account.user_id, "account registered");

        Ok(self.current.insert(account))
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` for a malformed email and
    /// `AuthError::InvalidCredentials` when the email is unknown or the
    /// password does not match.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&Account, AuthError> {
        let email = Email::parse(email)?;

        let account = self
            .accounts
            .find_by_email(&email)
            .filter(|account| account.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        tracing::debug!(user = %account.user_id, "login");
        Ok(self.current.insert(account))
    }

    /// End the current session, falling back to guest.
    pub fn logout(&mut self) {
        if let Some(account) = self.current.take() {
            tracing::debug!(user = %account.user_id, "logout");
        }
    }

    /// The active account, if logged in.
    #[must_use]
    pub const fn current(&self) -> Option<&Account> {
        self.current.as_ref()
    }

    /// The id every user-scoped store should be initialized with right now:
    /// the session's account id, or the guest sentinel.
    #[must_use]
    pub fn resolved_user_id(&self) -> UserId {
        self.current
            .as_ref()
            .map_or_else(UserId::guest, |account| account.user_id.clone())
    }

    /// Display name for the active user, `"Guest"` when anonymous.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.current
            .as_ref()
            .map_or_else(|| "Guest".to_string(), |account| account.name.clone())
    }
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}
