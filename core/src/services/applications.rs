//! Job application CRUD.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use crate::dispatch::{ApiRequest, Dispatcher};
use crate::error::ApiError;
use crate::types::{ApplicationForm, JobApplication, Page, PageRequest};

fn application_endpoint(id: i64) -> String {
    format!("/applications/{id}")
}

/// `GET /applications?page=&size=`
///
/// # Errors
///
/// Any dispatch or decode error.
pub async fn list(dispatcher: &Dispatcher, page: PageRequest) -> Result<Page<JobApplication>, ApiError> {
    let request = ApiRequest::get("/applications")
        .with_query("page", page.page)
        .with_query("size", page.size);
    dispatcher.get_json(request).await
}

/// `GET /applications/{id}`
///
/// # Errors
///
/// Any dispatch or decode error.
pub async fn get(dispatcher: &Dispatcher, id: i64) -> Result<JobApplication, ApiError> {
    dispatcher.get_json(ApiRequest::get(application_endpoint(id))).await
}

/// `POST /applications`
///
/// # Errors
///
/// Any dispatch or decode error.
pub async fn create(dispatcher: &Dispatcher, form: &ApplicationForm) -> Result<JobApplication, ApiError> {
    dispatcher.send_json(ApiRequest::post("/applications"), form).await
}

/// `PUT /applications/{id}` (full replace).
///
/// # Errors
///
/// Any dispatch or decode error.
pub async fn update(
    dispatcher: &Dispatcher,
    id: i64,
    form: &ApplicationForm,
) -> Result<JobApplication, ApiError> {
    dispatcher.send_json(ApiRequest::put(application_endpoint(id)), form).await
}

/// `DELETE /applications/{id}`
///
/// # Errors
///
/// Any dispatch error.
pub async fn delete(dispatcher: &Dispatcher, id: i64) -> Result<(), ApiError> {
    dispatcher.send_empty(ApiRequest::delete(application_endpoint(id))).await
}
