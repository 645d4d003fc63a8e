//! Auth service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::{Arc, PoisonError, RwLock},
    thread,
    time::Duration,
};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use mockall::automock;
use sha2::{Digest, Sha256};

use crate::{
    auth::{
        errors::AuthServiceError,
        models::{Account, AccountRecord, ProfileUpdate},
        repository::AuthRepository,
        seed,
    },
    notify::{Notifier, Severity},
    storage::Storage,
};

/// Digest a password for persistence and comparison.
pub(crate) fn password_digest(password: &str) -> String {
    STANDARD.encode(Sha256::digest(password.as_bytes()))
}

/// Auth service backed by local key-value storage.
///
/// Login and registration block for the configured simulated latency before
/// completing; the delay cannot be interrupted.
pub struct LocalAuthService {
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
    repository: AuthRepository,
    simulated_latency: Duration,
    state: RwLock<AuthState>,
}

struct AuthState {
    accounts: Vec<AccountRecord>,
    current: Option<Account>,
}

impl Debug for LocalAuthService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LocalAuthService").finish_non_exhaustive()
    }
}

impl LocalAuthService {
    /// Open the auth service, loading persisted accounts and session or
    /// seeding the demo account when no account list was ever stored.
    ///
    /// # Errors
    ///
    /// Returns an error when persisted state cannot be read or parsed.
    pub fn open(
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
        simulated_latency: Duration,
    ) -> Result<Self, AuthServiceError> {
        let repository = AuthRepository::new();

        let accounts = match repository.load_accounts(storage.as_ref())? {
            Some(accounts) => accounts,
            None => {
                let accounts = seed::initial_accounts();
                repository.save_accounts(storage.as_ref(), &accounts)?;
                accounts
            }
        };

        let current = repository.load_session(storage.as_ref())?;

        Ok(Self {
            storage,
            notifier,
            repository,
            simulated_latency,
            state: RwLock::new(AuthState { accounts, current }),
        })
    }

    fn simulate_round_trip(&self) {
        if !self.simulated_latency.is_zero() {
            thread::sleep(self.simulated_latency);
        }
    }
}

#[automock]
pub trait AuthService: Send + Sync {
    /// The active account, if any. This is the identity provider consumed by
    /// checkout orchestration.
    fn current_user(&self) -> Option<Account>;

    /// Authenticate against the persisted account list and activate the
    /// matching account.
    fn login(&self, email: &str, password: &str) -> Result<Account, AuthServiceError>;

    /// Create a new account and activate it.
    fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, AuthServiceError>;

    /// Deactivate the current account.
    fn logout(&self) -> Result<(), AuthServiceError>;

    /// Merge profile fields into the active account.
    fn update_profile(&self, update: ProfileUpdate) -> Result<Account, AuthServiceError>;
}

impl AuthService for LocalAuthService {
    fn current_user(&self) -> Option<Account> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);

        state.current.clone()
    }

    fn login(&self, email: &str, password: &str) -> Result<Account, AuthServiceError> {
        self.simulate_round_trip();

        let digest = password_digest(password);

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        let Some(account) = state
            .accounts
            .iter()
            .find(|account| account.email == email && account.password_digest == digest)
            .map(AccountRecord::profile)
        else {
            self.notifier
                .notify("Login failed", "Invalid credentials", Severity::Error);
            return Err(AuthServiceError::InvalidCredentials);
        };

        self.repository.save_session(self.storage.as_ref(), &account)?;
        state.current = Some(account.clone());

        self.notifier.notify(
            "Login successful",
            &format!("Welcome back, {}!", account.username),
            Severity::Info,
        );

        Ok(account)
    }

    fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, AuthServiceError> {
        self.simulate_round_trip();

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if state.accounts.iter().any(|account| account.email == email) {
            self.notifier.notify(
                "Registration failed",
                "User with this email already exists",
                Severity::Error,
            );
            return Err(AuthServiceError::EmailTaken);
        }

        let record = AccountRecord {
            uuid: crate::uuids::TypedUuid::new(),
            username: username.to_string(),
            email: email.to_string(),
            password_digest: password_digest(password),
        };
        let account = record.profile();

        let mut accounts = state.accounts.clone();
        accounts.push(record);

        self.repository.save_accounts(self.storage.as_ref(), &accounts)?;
        self.repository.save_session(self.storage.as_ref(), &account)?;

        state.accounts = accounts;
        state.current = Some(account.clone());

        self.notifier.notify(
            "Registration successful",
            &format!("Welcome, {username}!"),
            Severity::Info,
        );

        Ok(account)
    }

    fn logout(&self) -> Result<(), AuthServiceError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        self.repository.clear_session(self.storage.as_ref())?;
        state.current = None;

        self.notifier.notify(
            "Logged out",
            "You have been successfully logged out.",
            Severity::Info,
        );

        Ok(())
    }

    fn update_profile(&self, update: ProfileUpdate) -> Result<Account, AuthServiceError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        let Some(current) = state.current.clone() else {
            return Err(AuthServiceError::NotLoggedIn);
        };

        let mut account = current;
        if let Some(username) = update.username {
            account.username = username;
        }
        if let Some(email) = update.email {
            account.email = email;
        }

        let mut accounts = state.accounts.clone();
        for record in &mut accounts {
            if record.uuid == account.uuid {
                record.username = account.username.clone();
                record.email = account.email.clone();
            }
        }

        self.repository.save_accounts(self.storage.as_ref(), &accounts)?;
        self.repository.save_session(self.storage.as_ref(), &account)?;

        state.accounts = accounts;
        state.current = Some(account.clone());

        self.notifier.notify(
            "Profile updated",
            "Your profile has been successfully updated.",
            Severity::Info,
        );

        Ok(account)
    }
}
