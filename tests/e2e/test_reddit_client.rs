use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;

use subdeck_bot::domain::subreddit::{RedditGateway, RedditGatewayError};
use subdeck_bot::infrastructure::reddit::RedditClient;

fn client(server: &mockito::ServerGuard) -> RedditClient {
    RedditClient::new(
        server.url(),
        "subdeck-bot-tests",
        Duration::from_secs(2),
    )
    .expect("client builds")
}

#[tokio::test]
async fn it_should_recognize_an_existing_subreddit() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/r/aww/about.json")
        .match_header("user-agent", "subdeck-bot-tests")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"kind": "t5", "data": {"url": "/r/aww/"}}).to_string())
        .create_async()
        .await;

    let exists = client(&server).subreddit_exists("aww").await.unwrap();

    assert!(exists);
    mock.assert_async().await;
}

#[tokio::test]
async fn it_should_treat_a_payload_without_a_subreddit_url_as_unknown() {
    let mut server = mockito::Server::new_async().await;
    // Unknown names answer with a search listing instead of subreddit
    // metadata.
    server
        .mock("GET", "/r/nope/about.json")
        .with_status(200)
        .with_body(json!({"kind": "Listing", "data": {"children": []}}).to_string())
        .create_async()
        .await;

    let exists = client(&server).subreddit_exists("nope").await.unwrap();

    assert!(!exists);
}

#[tokio::test]
async fn it_should_treat_a_404_as_unknown() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/r/gone/about.json")
        .with_status(404)
        .create_async()
        .await;

    let exists = client(&server).subreddit_exists("gone").await.unwrap();

    assert!(!exists);
}

#[tokio::test]
async fn it_should_surface_a_server_error_as_a_transport_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/r/aww/about.json")
        .with_status(500)
        .create_async()
        .await;

    let err = client(&server).subreddit_exists("aww").await.unwrap_err();

    assert!(matches!(err, RedditGatewayError::Transport(_)), "{:?}", err);
}

#[tokio::test]
async fn it_should_surface_invalid_json_as_a_malformed_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/r/aww/about.json")
        .with_status(200)
        .with_body("<html>rate limited</html>")
        .create_async()
        .await;

    let err = client(&server).subreddit_exists("aww").await.unwrap_err();

    assert!(matches!(err, RedditGatewayError::Malformed(_)), "{:?}", err);
}

#[tokio::test]
async fn it_should_decode_the_first_post_of_the_first_listing() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/r/aww/random.json")
        .with_status(200)
        .with_body(
            json!([
                {
                    "kind": "Listing",
                    "data": {
                        "children": [
                            {
                                "kind": "t3",
                                "data": {
                                    "subreddit": "aww",
                                    "title": "A very good dog",
                                    "url": "https://i.redd.it/dog.jpg"
                                }
                            }
                        ]
                    }
                },
                {
                    "kind": "Listing",
                    "data": {"children": []}
                }
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let post = client(&server)
        .random_post("aww")
        .await
        .unwrap()
        .expect("post decoded");

    assert_eq!(post.title, "A very good dog");
    assert_eq!(post.subreddit, "aww");
    assert_eq!(post.url, "https://i.redd.it/dog.jpg");
}

#[tokio::test]
async fn it_should_default_a_missing_title_to_empty() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/r/aww/random.json")
        .with_status(200)
        .with_body(
            json!([
                {
                    "kind": "Listing",
                    "data": {
                        "children": [
                            {
                                "kind": "t3",
                                "data": {
                                    "subreddit": "aww",
                                    "url": "https://i.redd.it/dog.jpg"
                                }
                            }
                        ]
                    }
                }
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let post = client(&server)
        .random_post("aww")
        .await
        .unwrap()
        .expect("post decoded");

    assert_eq!(post.title, "");
}

#[tokio::test]
async fn it_should_yield_nothing_when_the_listing_is_empty() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/r/aww/random.json")
        .with_status(200)
        .with_body(json!([]).to_string())
        .create_async()
        .await;

    let post = client(&server).random_post("aww").await.unwrap();

    assert_eq!(post, None);
}

#[tokio::test]
async fn it_should_yield_nothing_on_a_404() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/r/gone/random.json")
        .with_status(404)
        .create_async()
        .await;

    let post = client(&server).random_post("gone").await.unwrap();

    assert_eq!(post, None);
}
