use super::*;

#[test]
fn join_url_inserts_exactly_one_slash() {
    assert_eq!(join_url("http://api", "/login"), "http://api/login");
    assert_eq!(join_url("http://api/", "login"), "http://api/login");
    assert_eq!(join_url("http://api/", "/login"), "http://api/login");
    assert_eq!(join_url("http://api", "login"), "http://api/login");
}

#[test]
fn join_url_keeps_nested_paths_intact() {
    assert_eq!(
        join_url("http://localhost:8080", "/api/products/1"),
        "http://localhost:8080/api/products/1"
    );
}

#[test]
fn bearer_header_format() {
    assert_eq!(bearer("eyFakeToken12345"), "Bearer eyFakeToken12345");
}
