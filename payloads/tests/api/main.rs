mod search;

use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.health_check().await?;

    Ok(())
}

#[tokio::test]
async fn each_app_gets_its_own_port() -> anyhow::Result<()> {
    let first = spawn_app().await;
    let second = spawn_app().await;

    assert_ne!(first.port, 0);
    assert_ne!(first.port, second.port);
    assert!(first.client.address.ends_with(&format!(":{}", first.port)));

    first.client.health_check().await?;
    second.client.health_check().await?;

    Ok(())
}
