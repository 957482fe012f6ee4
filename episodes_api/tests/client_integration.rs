use episodes_api::{Client, EpisodeQuery, Error, Query};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_episodes_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("episodes.json");

    Mock::given(method("GET"))
        .and(path("/episode"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_episodes(&EpisodeQuery::default()).await;
    assert!(result.is_ok());

    let resp = result.unwrap();
    assert_eq!(resp.results.len(), 2);
    assert_eq!(resp.results[0].name, "Pilot");
    assert_eq!(resp.info.pages, 3);
}

#[tokio::test]
async fn get_episodes_requests_given_page() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("episodes_last_page.json");

    Mock::given(method("GET"))
        .and(path("/episode"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client
        .get_episodes(&EpisodeQuery::default().with_page(3))
        .await
        .unwrap();
    assert_eq!(resp.results[0].id, 51);
    assert!(resp.info.next.is_none());
}

#[tokio::test]
async fn get_episodes_sends_filters() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("episodes.json");

    Mock::given(method("GET"))
        .and(path("/episode"))
        .and(query_param("name", "Pilot"))
        .and(query_param("episode", "S01"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = EpisodeQuery::default().with_name("Pilot").with_episode("S01");
    assert!(client.get_episodes(&query).await.is_ok());
}

#[tokio::test]
async fn get_episode_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("episode.json");

    Mock::given(method("GET"))
        .and(path("/episode/28"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let episode = client.get_episode(28).await.unwrap();
    assert_eq!(episode.id, 28);
    assert_eq!(episode.episode, "S03E07");
}

#[tokio::test]
async fn get_character_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("character.json");

    Mock::given(method("GET"))
        .and(path("/character/2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let character = client.get_character(2).await.unwrap();
    assert_eq!(character.name, "Morty Smith");
    assert_eq!(character.location.name, "Citadel of Ricks");
    assert_eq!(character.episode_count(), 3);
}

#[tokio::test]
async fn get_character_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/character/9999"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"error":"Character not found"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_character(9999).await;
    assert!(matches!(result, Err(Error::HttpStatus { status: 404, .. })));
}

#[tokio::test]
async fn get_episodes_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/episode"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_episodes(&EpisodeQuery::default()).await;
    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        _ => panic!("expected HttpStatus error"),
    }
}

#[tokio::test]
async fn get_episodes_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/episode"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_episodes(&EpisodeQuery::default()).await;
    assert!(matches!(result, Err(Error::Decoding(_))));
}

#[tokio::test]
async fn get_episodes_connection_refused() {
    // Bind then drop a listener so the port is known to be closed.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = Client::with_base_url(&format!("http://127.0.0.1:{}", port));
    let result = client.get_episodes(&EpisodeQuery::default()).await;
    assert!(matches!(result, Err(Error::Transport(_))));
}
