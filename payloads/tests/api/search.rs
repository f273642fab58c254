use payloads::{ClientError, PAGE_SIZE};
use reqwest::StatusCode;
use test_helpers::{Catalog, assert_status_code, spawn_app, spawn_app_with};

#[tokio::test]
async fn first_page_is_full() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let results = app.client.search_images("cats", 1).await?;
    assert_eq!(results.total_hits, 40);
    assert_eq!(results.hits.len(), PAGE_SIZE as usize);

    Ok(())
}

#[tokio::test]
async fn pages_do_not_overlap() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let first = app.client.search_images("cats", 1).await?;
    let second = app.client.search_images("cats", 2).await?;
    assert!(
        second
            .hits
            .iter()
            .all(|image| first.hits.iter().all(|seen| seen.id != image.id))
    );

    Ok(())
}

#[tokio::test]
async fn last_page_is_partial() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let results = app.client.search_images("dogs", 3).await?;
    assert_eq!(results.total_hits, 25);
    assert_eq!(results.hits.len(), 1);

    Ok(())
}

#[tokio::test]
async fn unknown_term_returns_no_hits() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let results = app.client.search_images("zzzznotfound", 1).await?;
    assert!(results.is_empty());
    assert!(results.hits.is_empty());

    Ok(())
}

#[tokio::test]
async fn terms_with_spaces_are_encoded() -> anyhow::Result<()> {
    let app = spawn_app_with(
        Catalog::new().with_term("red fox & hen", 3),
    )
    .await;

    let results = app.client.search_images("red fox & hen", 1).await?;
    assert_eq!(results.total_hits, 3);
    assert_eq!(results.hits.len(), 3);

    Ok(())
}

#[tokio::test]
async fn page_past_the_end_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.search_images("cats", 5).await;
    assert!(
        result
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("out of valid range")
    );
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn wrong_key_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = app.client_with_key("not-the-key");

    let result = client.search_images("cats", 1).await;
    assert!(matches!(
        &result,
        Err(ClientError::APIError(_, body)) if body.contains("Invalid or missing API key")
    ));
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut client = app.client_with_key(test_helpers::TEST_API_KEY);
    // Port 1 is privileged and never has the test server on it
    client.address = "http://127.0.0.1:1".into();

    let result = client.search_images("cats", 1).await;
    assert!(matches!(result, Err(ClientError::Network(_))));

    Ok(())
}
