//! Choreography tests for the pull-request builder against a mock upstream.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use github_gateway::types::NewPullRequest;
use github_gateway::{GatewayConfig, GatewayError, GitHubGateway};

fn gateway_for(server: &MockServer) -> GitHubGateway {
    GitHubGateway::from_config(GatewayConfig {
        base_api: server.uri(),
        token: "test-token".into(),
    })
    .expect("gateway should build")
}

fn demo_request() -> NewPullRequest {
    NewPullRequest {
        owner: "acme".into(),
        repo: "demo".into(),
        base: "main".into(),
        branch_name: "feature-x".into(),
        title: "Add docs".into(),
        body: "Adds a new document.".into(),
        file_path: "docs/new.md".into(),
        file_content: "# Hello".into(),
    }
}

/// Mounts the full happy-path upstream, mirroring the shas a real GitHub
/// would hand back at each step.
async fn mount_happy_path(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/repos/acme/demo/git/refs/heads/main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ref": "refs/heads/main",
            "object": { "sha": "abc123", "type": "commit" }
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/repos/acme/demo/git/refs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "ref": "refs/heads/feature-x",
            "object": { "sha": "abc123" }
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/repos/acme/demo/git/blobs"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "sha": "blob456" })),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/demo/git/commits/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": "abc123",
            "tree": { "sha": "tree789" }
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/repos/acme/demo/git/trees"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "sha": "treeNEW" })),
        )
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/repos/acme/demo/git/commits"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "sha": "commitNEW" })),
        )
        .mount(server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/repos/acme/demo/git/refs/heads/feature-x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ref": "refs/heads/feature-x",
            "object": { "sha": "commitNEW" }
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/repos/acme/demo/pulls"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1,
            "number": 42,
            "title": "Add docs",
            "html_url": "https://github.com/acme/demo/pull/42",
            "state": "open",
            "head": { "ref": "feature-x", "sha": "commitNEW" },
            "base": { "ref": "main", "sha": "abc123" },
            // Extra upstream fields the reshaping must drop.
            "mergeable": true,
            "user": { "login": "acme-bot", "id": 77 },
            "_links": { "self": { "href": "https://api.github.com/..." } }
        })))
        .mount(server)
        .await;
}

fn request_body(req: &wiremock::Request) -> Value {
    serde_json::from_slice(&req.body).expect("request body should be JSON")
}

#[tokio::test]
async fn issues_eight_calls_in_fixed_order_each_feeding_the_next() {
    let server = MockServer::start().await;
    mount_happy_path(&server).await;

    let result = gateway_for(&server)
        .create_pull_request(&demo_request())
        .await
        .expect("choreography should succeed");

    assert_eq!(result.number, 42);
    assert_eq!(result.head.sha, "commitNEW");
    assert_eq!(result.base.sha, "abc123");

    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    let seen: Vec<(String, String)> = requests
        .iter()
        .map(|r| (r.method.to_string(), r.url.path().to_string()))
        .collect();

    let expected = [
        ("GET", "/repos/acme/demo/git/refs/heads/main"),
        ("POST", "/repos/acme/demo/git/refs"),
        ("POST", "/repos/acme/demo/git/blobs"),
        ("GET", "/repos/acme/demo/git/commits/abc123"),
        ("POST", "/repos/acme/demo/git/trees"),
        ("POST", "/repos/acme/demo/git/commits"),
        ("PATCH", "/repos/acme/demo/git/refs/heads/feature-x"),
        ("POST", "/repos/acme/demo/pulls"),
    ];
    assert_eq!(seen.len(), expected.len(), "exactly eight upstream calls");
    for (got, want) in seen.iter().zip(expected.iter()) {
        assert_eq!(got.0, want.0);
        assert_eq!(got.1, want.1);
    }

    // Each write carries the sha obtained from its predecessor.
    let ref_create = request_body(&requests[1]);
    assert_eq!(ref_create["ref"], "refs/heads/feature-x");
    assert_eq!(ref_create["sha"], "abc123");

    let tree_create = request_body(&requests[4]);
    assert_eq!(tree_create["base_tree"], "tree789");
    assert_eq!(tree_create["tree"][0]["sha"], "blob456");
    assert_eq!(tree_create["tree"][0]["path"], "docs/new.md");
    assert_eq!(tree_create["tree"][0]["mode"], "100644");
    assert_eq!(tree_create["tree"][0]["type"], "blob");

    let commit_create = request_body(&requests[5]);
    assert_eq!(commit_create["message"], "Add docs/new.md");
    assert_eq!(commit_create["tree"], "treeNEW");
    assert_eq!(commit_create["parents"], json!(["abc123"]));

    let ref_update = request_body(&requests[6]);
    assert_eq!(ref_update["sha"], "commitNEW");
    assert_eq!(ref_update["force"], false);

    let pr_open = request_body(&requests[7]);
    assert_eq!(pr_open["base"], "main");
    assert_eq!(pr_open["head"], "acme:feature-x");
}

#[tokio::test]
async fn missing_base_branch_stops_after_the_first_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/demo/git/refs/heads/main"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&server)
        .await;

    let err = gateway_for(&server)
        .create_pull_request(&demo_request())
        .await
        .expect_err("missing base branch should fail");

    match err {
        GatewayError::Upstream { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1, "no further calls after the 404");
}

#[tokio::test]
async fn mid_sequence_failure_leaves_earlier_effects_in_place() {
    let server = MockServer::start().await;

    // Steps 1-5 succeed; step 6 (commit creation) blows up after the
    // branch, blob and tree already exist upstream.
    Mock::given(method("GET"))
        .and(path("/repos/acme/demo/git/refs/heads/main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ref": "refs/heads/main",
            "object": { "sha": "abc123" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/demo/git/refs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "ref": "refs/heads/feature-x",
            "object": { "sha": "abc123" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/demo/git/blobs"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "sha": "blob456" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/demo/git/commits/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": "abc123",
            "tree": { "sha": "tree789" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/demo/git/trees"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "sha": "treeNEW" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/demo/git/commits"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Server Error"
        })))
        .mount(&server)
        .await;

    let err = gateway_for(&server)
        .create_pull_request(&demo_request())
        .await
        .expect_err("commit failure should abort");

    match err {
        GatewayError::Upstream { status, .. } => assert_eq!(status, 500),
        other => panic!("unexpected error: {other:?}"),
    }

    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");

    // The branch ref created in step 2 was written and is never undone: the
    // sequence stops at the failing call and no DELETE is ever issued.
    assert_eq!(requests.len(), 6, "sequence stops at the failing step");
    assert!(
        requests
            .iter()
            .any(|r| r.method.to_string() == "POST"
                && r.url.path() == "/repos/acme/demo/git/refs"),
        "branch creation took effect before the failure"
    );
    assert!(
        requests.iter().all(|r| r.method.to_string() != "DELETE"),
        "no compensating deletion is attempted"
    );
}

#[tokio::test]
async fn result_exposes_exactly_the_whitelisted_fields() {
    let server = MockServer::start().await;
    mount_happy_path(&server).await;

    let result = gateway_for(&server)
        .create_pull_request(&demo_request())
        .await
        .expect("choreography should succeed");

    let value = serde_json::to_value(&result).expect("result serializes");
    let obj = value.as_object().expect("result is an object");

    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["base", "head", "html_url", "id", "number", "state", "title"]
    );

    for side in ["head", "base"] {
        let mut ref_keys: Vec<&str> = value[side]
            .as_object()
            .expect("ref pointer is an object")
            .keys()
            .map(String::as_str)
            .collect();
        ref_keys.sort_unstable();
        assert_eq!(ref_keys, ["ref", "sha"]);
    }
}

#[tokio::test]
async fn blob_body_carries_the_content_verbatim() {
    let server = MockServer::start().await;
    mount_happy_path(&server).await;

    let mut req = demo_request();
    req.file_content = "hello world".into();

    gateway_for(&server)
        .create_pull_request(&req)
        .await
        .expect("choreography should succeed");

    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    let blob = requests
        .iter()
        .find(|r| r.url.path() == "/repos/acme/demo/git/blobs")
        .expect("blob call was made");

    assert_eq!(
        request_body(blob),
        json!({ "content": "hello world", "encoding": "utf-8" }),
        "no transformation, no base64"
    );
}
