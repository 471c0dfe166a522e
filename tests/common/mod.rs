#![allow(dead_code)]

use github_repo_search::github::{ClientConfig, GitHubClient};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn repo_json(id: u64, owner: &str, name: &str) -> Value {
    json!({
        "id": id,
        "node_id": format!("R_{}", id),
        "name": name,
        "full_name": format!("{}/{}", owner, name),
        "private": false,
        "owner": {
            "login": owner,
            "id": 583231,
            "avatar_url": format!("https://avatars.githubusercontent.com/{}", owner),
        },
        "html_url": format!("https://github.com/{}/{}", owner, name),
        "description": format!("{} description", name),
        "fork": false,
        "stargazers_count": id * 10,
        "language": "Rust",
    })
}

pub fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::with_config(ClientConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
    })
    .expect("Failed to create client")
}

/// Client pointed at a port nothing listens on.
pub fn unreachable_client() -> GitHubClient {
    GitHubClient::with_config(ClientConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout: Duration::from_secs(5),
    })
    .expect("Failed to create client")
}

pub async fn mount_repos(server: &MockServer, username: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{}/repos", username)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, username: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{}/repos", username)))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(server)
        .await;
}
