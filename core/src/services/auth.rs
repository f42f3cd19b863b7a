//! Registration, login, and logout.
//!
//! Registration input is checked locally first; a mismatched confirmation
//! never reaches the network. Login derives the artifact for the configured
//! scheme and persists it together with the profile.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::dispatch::{ApiRequest, Dispatcher};
use crate::error::ApiError;
use crate::session::{AuthScheme, Profile, encode_credentials};
use crate::types::{AuthResponse, LoginRequest, RegisterRequest};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Check registration input before any request is made.
///
/// # Errors
///
/// Returns the inline message to show when the input is unusable.
pub fn validate_registration(form: &RegisterRequest) -> Result<(), &'static str> {
    if form.email.trim().is_empty() {
        return Err("Email is required");
    }
    if form.password.is_empty() {
        return Err("Password is required");
    }
    if form.password != form.confirm_password {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(())
}

/// Check login input before any request is made.
///
/// # Errors
///
/// Returns the inline message to show when the input is unusable.
pub fn validate_login(form: &LoginRequest) -> Result<(), &'static str> {
    if form.email.trim().is_empty() || form.password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(())
}

/// Create an account via `POST /auth/register`.
///
/// Returns the server's confirmation text.
///
/// # Errors
///
/// [`ApiError::Validation`] for local input errors; otherwise any dispatch error.
pub async fn register(dispatcher: &Dispatcher, form: &RegisterRequest) -> Result<String, ApiError> {
    validate_registration(form).map_err(|message| ApiError::Validation(message.to_owned()))?;
    let request = ApiRequest::post("/auth/register").with_json(form)?;
    let response = dispatcher.send(request).await?;
    Ok(response.body)
}

/// Establish a session via `POST /auth/login` and persist it.
///
/// # Errors
///
/// Any dispatch error, [`ApiError::MissingToken`] when a bearer deployment
/// gets no token back, or [`ApiError::Storage`] if persisting fails.
pub async fn login(dispatcher: &Dispatcher, form: &LoginRequest) -> Result<Profile, ApiError> {
    validate_login(form).map_err(|message| ApiError::Validation(message.to_owned()))?;
    let email = form.email.trim();
    let body = LoginRequest {
        email: email.to_owned(),
        password: form.password.clone(),
    };
    let auth: AuthResponse = dispatcher.send_json(ApiRequest::post("/auth/login"), &body).await?;

    let session = dispatcher.session();
    let artifact = match session.scheme() {
        AuthScheme::Bearer => auth.token.filter(|t| !t.is_empty()).ok_or(ApiError::MissingToken)?,
        AuthScheme::Basic => encode_credentials(email, &form.password),
    };
    let profile = Profile {
        id: auth.user_id,
        email: auth.email,
        role: auth.role,
    };
    session.save(&artifact, &profile)?;
    log::info!("auth: logged in as {}", profile.email);
    Ok(profile)
}

/// End the local session. The backend keeps no session state to revoke.
pub fn logout(dispatcher: &Dispatcher) {
    dispatcher.session().clear();
}
