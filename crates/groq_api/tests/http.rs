use groq_api::payload::ChatMessage;
use groq_api::{normalize_groq_url, ChatCompletionRequest, GroqApiClient, GroqApiConfig};
use serde_json::Value;

#[test]
fn http_request_builds_chat_completions_endpoint() {
    let config = GroqApiConfig::new("gsk-test").with_base_url("https://api.groq.com/openai/v1");
    let client = GroqApiClient::new(config).expect("client");
    let request = ChatCompletionRequest::new(
        "gemma2-9b-it",
        vec![
            ChatMessage::system("sys"),
            ChatMessage::user("Question: payload"),
        ],
    );

    let http_request = client
        .build_request(&request)
        .expect("build request")
        .build()
        .expect("request");

    assert_eq!(
        http_request.url().as_str(),
        normalize_groq_url("https://api.groq.com/openai/v1")
    );
    assert_eq!(http_request.method(), "POST");
}

#[test]
fn http_request_carries_bearer_auth_and_json_headers() {
    let config = GroqApiConfig::new("  gsk-test  ").insert_header("x-request-tag", "turn");
    let client = GroqApiClient::new(config).expect("client");
    let request = ChatCompletionRequest::new("gemma2-9b-it", vec![ChatMessage::user("hi")]);

    let http_request = client
        .build_request(&request)
        .expect("build request")
        .build()
        .expect("request");
    let headers = http_request.headers();

    assert_eq!(
        headers.get("authorization").expect("authorization header"),
        "Bearer gsk-test"
    );
    assert_eq!(
        headers.get("content-type").expect("content-type header"),
        "application/json"
    );
    assert_eq!(
        headers.get("accept").expect("accept header"),
        "application/json"
    );
    assert_eq!(
        headers.get("x-request-tag").expect("extra header"),
        "turn"
    );
}

#[test]
fn http_request_body_forces_non_streaming_transport() {
    let client = GroqApiClient::new(GroqApiConfig::new("gsk-test")).expect("client");
    let mut request = ChatCompletionRequest::new("gemma2-9b-it", vec![ChatMessage::user("hi")]);
    request.stream = true;

    let http_request = client
        .build_request(&request)
        .expect("build request")
        .build()
        .expect("request");
    let body = http_request
        .body()
        .and_then(|body| body.as_bytes())
        .expect("json body");
    let payload: Value = serde_json::from_slice(body).expect("parse body");

    assert_eq!(payload["stream"], false);
    assert_eq!(payload["messages"].as_array().map(Vec::len), Some(1));
}

#[test]
fn missing_api_key_fails_request_construction() {
    let client = GroqApiClient::new(GroqApiConfig::default()).expect("client");
    let request = ChatCompletionRequest::new("gemma2-9b-it", vec![ChatMessage::user("hi")]);

    assert!(client.build_request(&request).is_err());
}
