use anyhow::Result;
use api::headers::{IMMUTABLE_CACHE_CONTROL, PERMISSIONS_POLICY};
use test_helpers::{spawn_app, spawn_app_with_assets};
use uuid::Uuid;

#[tokio::test]
async fn every_path_carries_the_permissions_policy() -> Result<()> {
    let app = spawn_app().await;

    for path in ["/api/vhc", "/api/health_check"] {
        let url = format!("{}{path}", app.client.address);
        let response = app.client.inner_client.get(&url).send().await?;

        let policy = response
            .headers()
            .get("permissions-policy")
            .expect("Permissions-Policy header should be present")
            .to_str()?;
        assert_eq!(policy, PERMISSIONS_POLICY, "missing on {path}");
    }
    Ok(())
}

#[tokio::test]
async fn logo_and_svg_assets_get_immutable_caching() -> Result<()> {
    // Build a throwaway assets dir with a logo, an svg, and a stylesheet
    let assets_dir =
        std::env::temp_dir().join(format!("vhc-assets-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&assets_dir)?;
    std::fs::write(assets_dir.join("logo.png"), b"png bytes")?;
    std::fs::write(assets_dir.join("icon.svg"), b"<svg></svg>")?;
    std::fs::write(assets_dir.join("app.css"), b"body {}")?;

    let app = spawn_app_with_assets(assets_dir.clone()).await;

    for path in ["/logo.png", "/icon.svg"] {
        let url = format!("{}{path}", app.client.address);
        let response = app.client.inner_client.get(&url).send().await?;
        assert!(response.status().is_success());

        let cache_control = response
            .headers()
            .get("cache-control")
            .expect("Cache-Control header should be present")
            .to_str()?
            .to_string();
        assert_eq!(cache_control, IMMUTABLE_CACHE_CONTROL, "wrong on {path}");
    }

    // Other assets must not be marked immutable
    let url = format!("{}/app.css", app.client.address);
    let response = app.client.inner_client.get(&url).send().await?;
    assert!(response.status().is_success());
    if let Some(cache_control) = response.headers().get("cache-control") {
        assert!(!cache_control.to_str()?.contains("immutable"));
    }

    std::fs::remove_dir_all(&assets_dir)?;
    Ok(())
}

#[tokio::test]
async fn api_responses_are_not_marked_immutable() -> Result<()> {
    let app = spawn_app().await;

    let url = format!("{}/api/vhc", app.client.address);
    let response = app.client.inner_client.get(&url).send().await?;
    assert!(response.status().is_success());

    if let Some(cache_control) = response.headers().get("cache-control") {
        assert!(!cache_control.to_str()?.contains("immutable"));
    }
    Ok(())
}
