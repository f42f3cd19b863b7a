//! Durable session store: the authentication artifact plus cached profile.
//!
//! ARCHITECTURE
//! ============
//! A deployment picks one [`AuthScheme`]. The scheme decides which storage
//! key holds the artifact (`token` or `credentials`) and how the dispatcher
//! renders the `Authorization` header. The profile always lives under `user`.
//!
//! INVARIANTS
//! ==========
//! A reader never observes a profile without an artifact: `save` writes the
//! artifact before the profile, `clear` removes them in reverse, and
//! `current_profile` reports `None` whenever the artifact is missing.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::storage::KeyValueStorage;

/// Storage key for the serialized profile.
pub const PROFILE_KEY: &str = "user";

/// How the authentication artifact is obtained and presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    /// Server-issued token sent as `Authorization: Bearer <token>`.
    #[default]
    Bearer,
    /// `base64(email:password)` sent as `Authorization: Basic <credentials>`.
    Basic,
}

impl AuthScheme {
    /// Storage key holding the artifact for this scheme.
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Bearer => "token",
            Self::Basic => "credentials",
        }
    }

    /// Full `Authorization` header value for `artifact`.
    #[must_use]
    pub fn header_value(self, artifact: &str) -> String {
        match self {
            Self::Bearer => format!("Bearer {artifact}"),
            Self::Basic => format!("Basic {artifact}"),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bearer => "bearer",
            Self::Basic => "basic",
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Bearer => Self::Basic,
            Self::Basic => Self::Bearer,
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown scheme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown auth scheme `{0}` (expected `bearer` or `basic`)")]
pub struct UnknownScheme(pub String);

impl FromStr for AuthScheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bearer" => Ok(Self::Bearer),
            "basic" => Ok(Self::Basic),
            _ => Err(UnknownScheme(s.to_owned())),
        }
    }
}

/// Encode basic-scheme credentials as `base64(email:password)`.
#[must_use]
pub fn encode_credentials(email: &str, password: &str) -> String {
    STANDARD.encode(format!("{email}:{password}"))
}

/// Minimal identity cached from the last successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub email: String,
    pub role: String,
}

/// Session store over an injected durable storage backend.
#[derive(Clone)]
pub struct SessionStore {
    scheme: AuthScheme,
    storage: Rc<dyn KeyValueStorage>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("scheme", &self.scheme)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionStore {
    pub fn new(scheme: AuthScheme, storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            scheme,
            storage: Rc::new(storage),
        }
    }

    #[must_use]
    pub fn scheme(&self) -> AuthScheme {
        self.scheme
    }

    /// Persist `artifact` and `profile` as one logical unit.
    ///
    /// Any artifact left behind by the other scheme is removed first. If the
    /// profile cannot be written the artifact is rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if either write fails.
    pub fn save(&self, artifact: &str, profile: &Profile) -> Result<(), StorageError> {
        let raw_profile =
            serde_json::to_string(profile).map_err(|e| StorageError::Write(e.to_string()))?;

        self.storage.remove_item(self.scheme.other().storage_key());
        self.storage.set_item(self.scheme.storage_key(), artifact)?;
        if let Err(e) = self.storage.set_item(PROFILE_KEY, &raw_profile) {
            log::warn!("session: profile write failed, rolling back artifact: {e}");
            self.storage.remove_item(self.scheme.storage_key());
            return Err(e);
        }
        log::debug!("session: saved {} session for {}", self.scheme, profile.email);
        Ok(())
    }

    /// Remove the profile and artifact. Idempotent.
    pub fn clear(&self) {
        self.storage.remove_item(PROFILE_KEY);
        self.storage.remove_item(self.scheme.storage_key());
    }

    /// The stored artifact, if any. Empty strings count as absent.
    #[must_use]
    pub fn current_artifact(&self) -> Option<String> {
        self.storage
            .get_item(self.scheme.storage_key())
            .filter(|artifact| !artifact.is_empty())
    }

    /// The cached profile, or `None` if missing, unparseable, or orphaned.
    #[must_use]
    pub fn current_profile(&self) -> Option<Profile> {
        self.current_artifact()?;
        let raw = self.storage.get_item(PROFILE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::debug!("session: ignoring unreadable profile: {e}");
                None
            }
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_artifact().is_some()
    }
}
