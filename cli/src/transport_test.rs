use super::*;

#[test]
fn endpoint_url_joins_without_double_slashes() {
    assert_eq!(
        endpoint_url("http://localhost:8080/", "/applications/3"),
        "http://localhost:8080/applications/3"
    );
    assert_eq!(endpoint_url("https://api.example.com/v1", "auth/login"), "https://api.example.com/v1/auth/login");
}

#[test]
fn methods_map_to_reqwest() {
    assert_eq!(reqwest_method(Method::Get), reqwest::Method::GET);
    assert_eq!(reqwest_method(Method::Post), reqwest::Method::POST);
    assert_eq!(reqwest_method(Method::Put), reqwest::Method::PUT);
    assert_eq!(reqwest_method(Method::Delete), reqwest::Method::DELETE);
}

#[test]
fn transport_trims_trailing_slash_from_base() {
    let transport = ReqwestTransport::new("http://localhost:8080///");
    assert_eq!(transport.url("/dashboard/stats"), "http://localhost:8080/dashboard/stats");
}
