//! Authentication service
//!
//! Handles sign-in, sign-out, session restore and account administration.
//!
//! The signed-in identity lives in two places: the in-process slot on the
//! context and the durable single-slot session store. Sign-in writes the
//! store first so a persistence failure leaves the slot anonymous;
//! sign-out clears the slot first so local sign-out always wins.

use tracing::{info, instrument, warn};
use validator::Validate;

use igreja_common::auth::{hash_password, validate_password_strength, verify_password};
use igreja_common::AppError;
use igreja_core::traits::AccountPatch;
use igreja_core::DomainError;

use crate::dto::{AccountResponse, CreateAccountRequest, SignInRequest, UpdateAccountRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication and account administration service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sign in with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn sign_in(&self, request: SignInRequest) -> ServiceResult<AccountResponse> {
        request.validate()?;

        // Look up with the role joined; an unknown email is its own error,
        // distinct from a wrong password
        let identity = self
            .ctx
            .account_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Sign-in failed: unknown email");
                ServiceError::Domain(DomainError::AccountEmailNotFound(request.email.clone()))
            })?;

        let password_hash = self
            .ctx
            .account_repo()
            .password_hash(identity.id)
            .await?
            .ok_or_else(|| {
                warn!(account_id = identity.id, "Sign-in failed: no stored hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)?;
        if !is_valid {
            warn!(account_id = identity.id, "Sign-in failed: wrong password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        // Persist before exposing; a failed save leaves the slot anonymous
        self.ctx
            .session_store()
            .save(&identity)
            .await
            .map_err(|e| ServiceError::App(AppError::Session(e.to_string())))?;

        self.ctx.current().set(identity.clone()).await;

        info!(account_id = identity.id, "Signed in");

        Ok(AccountResponse::from(identity))
    }

    /// Sign out the current identity
    ///
    /// Always succeeds: the in-process slot is cleared first and a store
    /// error only costs the durable record.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) {
        self.ctx.current().clear().await;

        if let Err(e) = self.ctx.session_store().clear().await {
            warn!(error = %e, "Session record could not be cleared");
        }

        info!("Signed out");
    }

    /// Restore the persisted session at process start
    ///
    /// The stored record becomes the current identity as-is; no account
    /// lookup, no credential check, no expiry. An unreadable record is
    /// logged and left in place, and the process starts anonymous.
    #[instrument(skip(self))]
    pub async fn restore_session(&self) -> Option<AccountResponse> {
        match self.ctx.session_store().load().await {
            Ok(Some(identity)) => {
                info!(account_id = identity.id, "Session restored");
                self.ctx.current().set(identity.clone()).await;
                Some(AccountResponse::from(identity))
            }
            Ok(None) => None,
            Err(e) => {
                // The next sign-in overwrites whatever is on disk
                warn!(error = %e, "Session record unreadable, starting anonymous");
                None
            }
        }
    }

    /// The identity signed in right now, if any
    pub async fn current_user(&self) -> Option<AccountResponse> {
        self.ctx.current().get().await.map(AccountResponse::from)
    }

    /// Whether anyone is signed in
    pub async fn is_authenticated(&self) -> bool {
        self.ctx.current().is_signed_in().await
    }

    /// Create a new account, optionally with a role
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> ServiceResult<AccountResponse> {
        request.validate()?;
        validate_password_strength(&request.password)?;

        let password_hash = hash_password(&request.password)?;

        let account = self
            .ctx
            .account_repo()
            .create(&request.email, &password_hash)
            .await?;

        info!(account_id = account.id, "Account created");

        // The role row lands after the account row; a failure here surfaces
        // as an error but the account stands, roleless
        if let Some(role_id) = request.role_id {
            self.ctx
                .account_repo()
                .insert_role_assignment(account.id, role_id)
                .await?;

            let joined = self
                .ctx
                .account_repo()
                .find_by_id(account.id)
                .await?
                .ok_or(DomainError::AccountNotFound(account.id))?;
            return Ok(AccountResponse::from(joined));
        }

        Ok(AccountResponse::from(account))
    }

    /// Apply a partial update to an account
    ///
    /// A role change replaces any existing assignment. A request that only
    /// changes the role leaves the account row untouched.
    #[instrument(skip(self, request), fields(account_id = id))]
    pub async fn update_account(
        &self,
        id: i64,
        request: UpdateAccountRequest,
    ) -> ServiceResult<AccountResponse> {
        request.validate()?;

        // Existence check up front so the role upsert cannot point at a
        // missing account
        self.ctx
            .account_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::AccountNotFound(id))?;

        let password_hash = match &request.password {
            Some(password) => {
                validate_password_strength(password)?;
                Some(hash_password(password)?)
            }
            None => None,
        };

        let patch = AccountPatch {
            email: request.email,
            password_hash,
        };

        if !patch.is_empty() {
            self.ctx.account_repo().update(id, patch).await?;
        }

        if let Some(role_id) = request.role_id {
            self.ctx
                .account_repo()
                .upsert_role_assignment(id, role_id)
                .await?;
        }

        let updated = self
            .ctx
            .account_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::AccountNotFound(id))?;

        info!(account_id = id, "Account updated");

        Ok(AccountResponse::from(updated))
    }

    /// Hard delete an account; role assignment and authored notes cascade
    #[instrument(skip(self), fields(account_id = id))]
    pub async fn delete_account(&self, id: i64) -> ServiceResult<()> {
        self.ctx.account_repo().delete(id).await?;

        info!(account_id = id, "Account deleted");

        Ok(())
    }

    /// List all accounts with their roles, ordered by id
    pub async fn list_accounts(&self) -> ServiceResult<Vec<AccountResponse>> {
        let accounts = self.ctx.account_repo().list().await?;
        Ok(accounts.into_iter().map(AccountResponse::from).collect())
    }
}
