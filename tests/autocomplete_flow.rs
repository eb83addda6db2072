use github_autocomplete::autocomplete::{Key, KeyResponse};
use github_autocomplete::network::{HttpClient, Transport};
use github_autocomplete::{Autocomplete, GithubSearch, SearchProvider};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DEBOUNCE: Duration = Duration::from_millis(50);

async fn server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "login": "octocat", "html_url": "https://github.com/octocat" },
                { "login": "Octavia", "html_url": "https://github.com/Octavia" }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "full_name": "octo/hello", "html_url": "https://github.com/octo/hello" }
            ]
        })))
        .mount(&server)
        .await;
    server
}

fn autocomplete(server: &MockServer) -> Autocomplete {
    let endpoints = ["/search/users", "/search/repositories"]
        .iter()
        .map(|endpoint| Url::parse(&format!("{}{}?per_page=50", server.uri(), endpoint)).unwrap())
        .collect();
    let client: Arc<dyn Transport> = Arc::new(HttpClient::new().unwrap());
    let provider: Arc<dyn SearchProvider> = Arc::new(GithubSearch::new(client, endpoints));
    Autocomplete::new(provider).with_debounce(DEBOUNCE)
}

#[tokio::test]
async fn typing_settles_into_sorted_results() {
    let server = server().await;
    let mut autocomplete = autocomplete(&server);

    for text in ["o", "oc", "oct", "octo"] {
        autocomplete.on_input_change(text);
    }
    assert!(autocomplete.is_loading());

    autocomplete.settled().await;

    let texts: Vec<_> = autocomplete
        .result_items()
        .iter()
        .map(|item| item.display_text.as_str())
        .collect();
    assert_eq!(texts, vec!["Octavia", "octo/hello", "octocat"]);
    assert_eq!(autocomplete.error(), None);

    // One debounced search hit both endpoints once.
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn keyboard_selection_navigates() {
    let server = server().await;
    let mut autocomplete = autocomplete(&server);

    autocomplete.on_input_change("octo");
    autocomplete.settled().await;

    autocomplete.on_key_press(Key::ArrowDown, || {});
    autocomplete.on_key_press(Key::ArrowDown, || {});
    assert_eq!(autocomplete.selected_result_index(), 1);

    let response = autocomplete.on_key_press(Key::Enter, || {});
    assert_eq!(
        response,
        KeyResponse::Navigate("https://github.com/octo/hello".to_string())
    );
}

#[tokio::test]
async fn short_input_never_reaches_github() {
    let server = server().await;
    let mut autocomplete = autocomplete(&server);

    autocomplete.on_input_change("oc");
    tokio::time::sleep(DEBOUNCE * 4).await;
    autocomplete.drain_events();

    assert!(!autocomplete.is_loading());
    assert!(autocomplete.result_items().is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}
