//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Timestamps stay as the
//! ISO-8601 strings the server sends; the client only displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a job application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Interviewing,
    Offered,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [Self; 4] = [Self::Applied, Self::Interviewing, Self::Offered, Self::Rejected];

    /// Wire name, e.g. `"APPLIED"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "APPLIED",
            Self::Interviewing => "INTERVIEWING",
            Self::Offered => "OFFERED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Human label, e.g. `"Interviewing"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interviewing => "Interviewing",
            Self::Offered => "Offered",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown status `{s}`"))
    }
}

/// A job application as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: i64,
    pub company_name: String,
    pub job_role: String,
    pub status: ApplicationStatus,
    /// `YYYY-MM-DD`.
    pub applied_date: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Owning user, when the server includes it.
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Body for creating or fully replacing an application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub company_name: String,
    pub job_role: String,
    pub status: ApplicationStatus,
    pub applied_date: String,
}

impl From<&JobApplication> for ApplicationForm {
    fn from(app: &JobApplication) -> Self {
        Self {
            company_name: app.company_name.clone(),
            job_role: app.job_role.clone(),
            status: app.status,
            applied_date: app.applied_date.clone(),
        }
    }
}

/// One page of a paged list response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    /// Zero-based page index.
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

impl<T> Page<T> {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages
    }
}

/// Which page to fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub const DEFAULT_SIZE: u32 = 10;

    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.max(1),
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::new(self.page.saturating_add(1), self.size)
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self::new(self.page.saturating_sub(1), self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }
}

/// Aggregate counts shown on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_applications: u64,
    #[serde(default)]
    pub applied_count: u64,
    #[serde(default)]
    pub interviewing_count: u64,
    #[serde(default)]
    pub offered_count: u64,
    #[serde(default)]
    pub rejected_count: u64,
}

impl DashboardStats {
    /// Count for a single status.
    #[must_use]
    pub fn count(&self, status: ApplicationStatus) -> u64 {
        match status {
            ApplicationStatus::Applied => self.applied_count,
            ApplicationStatus::Interviewing => self.interviewing_count,
            ApplicationStatus::Offered => self.offered_count,
            ApplicationStatus::Rejected => self.rejected_count,
        }
    }
}

/// Kind of interview round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundType {
    Hr,
    Technical,
    Managerial,
}

/// Outcome of an interview round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundResult {
    Passed,
    Failed,
    Pending,
}

impl FromStr for RoundType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HR" => Ok(Self::Hr),
            "TECHNICAL" => Ok(Self::Technical),
            "MANAGERIAL" => Ok(Self::Managerial),
            _ => Err(format!("unknown round type `{s}`")),
        }
    }
}

impl FromStr for RoundResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PASSED" => Ok(Self::Passed),
            "FAILED" => Ok(Self::Failed),
            "PENDING" => Ok(Self::Pending),
            _ => Err(format!("unknown round result `{s}`")),
        }
    }
}

/// An interview round attached to an application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRound {
    pub id: i64,
    pub round_type: RoundType,
    /// `YYYY-MM-DD`.
    pub interview_date: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub result: RoundResult,
    pub job_application_id: i64,
}

/// Body for adding or replacing an interview round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewForm {
    pub round_type: RoundType,
    pub interview_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub result: RoundResult,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Present when the server issues bearer tokens.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, rename = "type")]
    pub token_type: Option<String>,
    pub user_id: i64,
    pub email: String,
    pub role: String,
}
