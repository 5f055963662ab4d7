//! Main authentication service implementation

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use av_shared::utils::validation;

use crate::domain::entities::account::Account;
use crate::domain::entities::token::{Claims, TokenKind, TokenPair};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::AccountRepository;
use crate::services::password::PasswordVerifier;
use crate::services::token::TokenService;

/// An established session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The authenticated account id
    pub user_id: Uuid,

    /// Present when the access token was silently renewed; the caller is
    /// responsible for transporting it back to the client
    pub renewed_access_token: Option<String>,
}

impl Session {
    fn established(user_id: Uuid) -> Self {
        Self {
            user_id,
            renewed_access_token: None,
        }
    }

    fn renewed(user_id: Uuid, access_token: String) -> Self {
        Self {
            user_id,
            renewed_access_token: Some(access_token),
        }
    }
}

/// Authentication service for the complete account flow
pub struct AuthService<R, P>
where
    R: AccountRepository,
    P: PasswordVerifier,
{
    /// Account repository for persistence
    account_repository: Arc<R>,
    /// One-way password hashing and comparison
    password_verifier: Arc<P>,
    /// Token codec for issuing and validating session tokens
    token_service: Arc<TokenService>,
}

impl<R, P> AuthService<R, P>
where
    R: AccountRepository,
    P: PasswordVerifier,
{
    /// Create a new authentication service
    pub fn new(
        account_repository: Arc<R>,
        password_verifier: Arc<P>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            account_repository,
            password_verifier,
            token_service,
        }
    }

    /// Register a new account
    ///
    /// Validates field shapes, refuses duplicate emails (case-insensitive),
    /// hashes the password and persists the account. No transactional
    /// guarantee spans the existence check and the create; the repository's
    /// own uniqueness constraint is the final arbiter.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<Account> {
        let username = validation::normalize(username);
        let email = validation::normalize(email);

        validation::validate_username(&username)
            .map_err(|message| DomainError::Validation { message })?;
        validation::validate_email(&email)
            .map_err(|message| DomainError::Validation { message })?;
        validation::validate_password(password)
            .map_err(|message| DomainError::Validation { message })?;

        if self.account_repository.exists_by_email(&email).await? {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = self.password_verifier.hash(password).await?;
        let account = Account::new(username, email, password_hash);
        let created = self.account_repository.create(account).await?;

        info!(account_id = %created.id, "account registered");
        Ok(created)
    }

    /// Authenticate with email and password, issuing a fresh token pair
    ///
    /// An unknown email and a wrong password fail identically, so callers
    /// cannot enumerate registered addresses.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let email = validation::normalize(email);

        let account = self
            .account_repository
            .find_by_email(&email)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        let matches = self
            .password_verifier
            .matches(password, &account.password_hash)
            .await?;
        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        let pair = self.token_service.issue_pair(account.id)?;
        info!(account_id = %account.id, "login succeeded");
        Ok(pair)
    }

    /// Verify a session from an access/refresh token pair
    ///
    /// The state machine:
    /// - an identity established upstream short-circuits to success;
    /// - either token absent rejects with `MissingCredentials`;
    /// - a valid access token authenticates directly;
    /// - an *expired* access token falls back to the refresh token, and on
    ///   success a renewed access token for the same subject is handed back;
    /// - a malformed access token rejects with `InvalidCredentials` without
    ///   ever consulting the refresh token.
    ///
    /// Token validation is pure CPU work; this path performs no I/O.
    pub fn authenticate(
        &self,
        identity: Option<Uuid>,
        access_token: Option<&str>,
        refresh_token: Option<&str>,
    ) -> DomainResult<Session> {
        if let Some(user_id) = identity {
            return Ok(Session::established(user_id));
        }

        let (access_token, refresh_token) = match (access_token, refresh_token) {
            (Some(access), Some(refresh)) => (access, refresh),
            _ => return Err(AuthError::MissingCredentials.into()),
        };

        match self.token_service.validate(TokenKind::Access, access_token) {
            Ok(claims) => Ok(Session::established(subject_id(&claims)?)),
            // Expiry is the only trigger for the renewal path; a tampered
            // access token must never reach the refresh token.
            Err(TokenError::Expired) => self.renew_session(refresh_token),
            Err(TokenError::Malformed) => Err(AuthError::InvalidCredentials.into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Renew an expired access token against the refresh token
    fn renew_session(&self, refresh_token: &str) -> DomainResult<Session> {
        match self.token_service.validate(TokenKind::Refresh, refresh_token) {
            Ok(claims) => {
                let user_id = subject_id(&claims)?;
                let renewed = self.token_service.issue(TokenKind::Access, user_id)?;
                info!(account_id = %user_id, "access token renewed");
                Ok(Session::renewed(user_id, renewed))
            }
            Err(TokenError::Expired) | Err(TokenError::Malformed) => {
                Err(AuthError::SessionExpired.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch the account behind an authenticated session
    pub async fn fetch_account(&self, user_id: Uuid) -> DomainResult<Account> {
        self.account_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Account".to_string(),
            })
    }
}

/// Extract the subject id from verified claims
///
/// A verified token whose subject is not a UUID is treated as tampered.
fn subject_id(claims: &Claims) -> Result<Uuid, DomainError> {
    claims
        .user_id()
        .map_err(|_| DomainError::Auth(AuthError::InvalidCredentials))
}
