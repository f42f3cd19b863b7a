//! Interview rounds attached to an application.

use crate::dispatch::{ApiRequest, Dispatcher};
use crate::error::ApiError;
use crate::types::{InterviewForm, InterviewRound};

fn rounds_for_application(application_id: i64) -> String {
    format!("/interviews/application/{application_id}")
}

fn round_endpoint(id: i64) -> String {
    format!("/interviews/{id}")
}

/// `GET /interviews/application/{application_id}`
///
/// # Errors
///
/// Any dispatch or decode error.
pub async fn list(dispatcher: &Dispatcher, application_id: i64) -> Result<Vec<InterviewRound>, ApiError> {
    dispatcher.get_json(ApiRequest::get(rounds_for_application(application_id))).await
}

/// `POST /interviews/application/{application_id}`
///
/// # Errors
///
/// Any dispatch or decode error.
pub async fn add(
    dispatcher: &Dispatcher,
    application_id: i64,
    form: &InterviewForm,
) -> Result<InterviewRound, ApiError> {
    dispatcher
        .send_json(ApiRequest::post(rounds_for_application(application_id)), form)
        .await
}

/// `PUT /interviews/{id}`
///
/// # Errors
///
/// Any dispatch or decode error.
pub async fn update(dispatcher: &Dispatcher, id: i64, form: &InterviewForm) -> Result<InterviewRound, ApiError> {
    dispatcher.send_json(ApiRequest::put(round_endpoint(id)), form).await
}

/// `DELETE /interviews/{id}`
///
/// # Errors
///
/// Any dispatch error.
pub async fn delete(dispatcher: &Dispatcher, id: i64) -> Result<(), ApiError> {
    dispatcher.send_empty(ApiRequest::delete(round_endpoint(id))).await
}
