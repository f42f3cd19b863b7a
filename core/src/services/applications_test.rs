use super::*;
use crate::dispatch::Method;
use crate::services::interviews;
use crate::session::AuthScheme;
use crate::test_support::Harness;
use crate::types::{ApplicationStatus, InterviewForm, RoundResult, RoundType};

const APP: &str = r#"{"id":3,"companyName":"Acme","jobRole":"SRE","status":"APPLIED","appliedDate":"2024-02-01","createdAt":"2024-02-01T08:00:00","updatedAt":"2024-02-01T08:00:00","userId":1}"#;

fn form() -> ApplicationForm {
    ApplicationForm {
        company_name: "Acme".to_owned(),
        job_role: "SRE".to_owned(),
        status: ApplicationStatus::Applied,
        applied_date: "2024-02-01".to_owned(),
    }
}

#[tokio::test]
async fn list_sends_page_and_size() {
    let harness = Harness::logged_in(AuthScheme::Bearer, "tok");
    harness
        .transport
        .respond(200, &format!(r#"{{"content":[{APP}],"totalElements":11,"totalPages":2,"number":1,"size":10}}"#));

    let page = list(&harness.dispatcher, PageRequest::new(1, 10)).await.expect("list");

    assert_eq!(page.content.len(), 1);
    assert_eq!(page.total_elements, 11);
    let request = &harness.transport.requests()[0];
    assert_eq!(request.method, Method::Get);
    assert_eq!(
        request.query,
        vec![("page".to_owned(), "1".to_owned()), ("size".to_owned(), "10".to_owned())]
    );
}

#[tokio::test]
async fn crud_calls_hit_expected_endpoints() {
    let harness = Harness::logged_in(AuthScheme::Bearer, "tok");
    harness
        .transport
        .respond(201, APP)
        .respond(200, APP)
        .respond(200, APP)
        .respond(204, "");

    create(&harness.dispatcher, &form()).await.expect("create");
    get(&harness.dispatcher, 3).await.expect("get");
    update(&harness.dispatcher, 3, &form()).await.expect("update");
    delete(&harness.dispatcher, 3).await.expect("delete");

    let calls: Vec<(Method, String)> = harness
        .transport
        .requests()
        .into_iter()
        .map(|r| (r.method, r.path))
        .collect();
    assert_eq!(
        calls,
        vec![
            (Method::Post, "/applications".to_owned()),
            (Method::Get, "/applications/3".to_owned()),
            (Method::Put, "/applications/3".to_owned()),
            (Method::Delete, "/applications/3".to_owned()),
        ]
    );
}

#[tokio::test]
async fn update_sends_full_form() {
    let harness = Harness::logged_in(AuthScheme::Bearer, "tok");
    harness.transport.respond(200, APP);

    update(&harness.dispatcher, 3, &form()).await.expect("update");

    let body = harness.transport.requests()[0].body.clone().expect("body");
    assert_eq!(body["companyName"], "Acme");
    assert_eq!(body["appliedDate"], "2024-02-01");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let harness = Harness::logged_in(AuthScheme::Bearer, "tok");
    harness.transport.respond(200, "<html>");

    let err = get(&harness.dispatcher, 3).await.expect_err("decode");

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn interview_rounds_use_application_scoped_paths() {
    let harness = Harness::logged_in(AuthScheme::Bearer, "tok");
    let round = r#"{"id":8,"roundType":"TECHNICAL","interviewDate":"2024-03-05","notes":null,"result":"PENDING","jobApplicationId":3}"#;
    harness
        .transport
        .respond(200, &format!("[{round}]"))
        .respond(201, round)
        .respond(204, "");
    let form = InterviewForm {
        round_type: RoundType::Technical,
        interview_date: "2024-03-05".to_owned(),
        notes: None,
        result: RoundResult::Pending,
    };

    let rounds = interviews::list(&harness.dispatcher, 3).await.expect("list");
    interviews::add(&harness.dispatcher, 3, &form).await.expect("add");
    interviews::delete(&harness.dispatcher, 8).await.expect("delete");

    assert_eq!(rounds[0].round_type, RoundType::Technical);
    let paths: Vec<String> = harness.transport.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "/interviews/application/3".to_owned(),
            "/interviews/application/3".to_owned(),
            "/interviews/8".to_owned(),
        ]
    );
}
