use anyhow::Result;
use payloads::requests::ChecksQuery;
use payloads::responses::CheckPage;
use payloads::{CheckId, ClientError, CodeState, PaymentState, SortOrder};
use reqwest::StatusCode;
use test_helpers::{sample_check, spawn_app};
use uuid::Uuid;

#[tokio::test]
async fn empty_store_returns_empty_page_with_defaults() -> Result<()> {
    let app = spawn_app().await;

    let page: CheckPage =
        app.client.list_checks(&ChecksQuery::default()).await?;

    assert_eq!(page.total, 0);
    assert!(page.checks.is_empty());
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 100);
    Ok(())
}

#[tokio::test]
async fn health_check_works() -> Result<()> {
    let app = spawn_app().await;
    app.client.health_check().await?;
    Ok(())
}

#[tokio::test]
async fn viewed_filter_is_tri_state_over_the_wire() -> Result<()> {
    let app = spawn_app().await;
    let mut viewed_check = sample_check("ABC-123", "Toyota Corolla", 1);
    viewed_check.viewed = true;
    app.store.seed([
        viewed_check,
        sample_check("DEF-456", "Honda Civic", 2),
        sample_check("GHI-789", "Kia Sorento", 3),
    ]);

    let unviewed: CheckPage = app
        .client
        .list_checks(&ChecksQuery {
            viewed: Some(false),
            ..Default::default()
        })
        .await?;
    assert_eq!(unviewed.total, 2);
    assert!(unviewed.checks.iter().all(|check| !check.viewed));

    let viewed: CheckPage = app
        .client
        .list_checks(&ChecksQuery {
            viewed: Some(true),
            ..Default::default()
        })
        .await?;
    assert_eq!(viewed.total, 1);
    assert_eq!(viewed.checks[0].plate_number, "ABC-123");

    let either: CheckPage =
        app.client.list_checks(&ChecksQuery::default()).await?;
    assert_eq!(either.total, 3);
    Ok(())
}

#[tokio::test]
async fn search_and_state_filters_compose() -> Result<()> {
    let app = spawn_app().await;
    let mut expired = sample_check("AAA-111", "Toyota Corolla", 1);
    expired.code_state = CodeState::Expired;
    let mut unpaid = sample_check("BBB-222", "Toyota Camry", 2);
    unpaid.payment_state = PaymentState::Unpaid;
    app.store.seed([
        expired,
        unpaid,
        sample_check("CCC-333", "Honda Civic", 3),
    ]);

    let page: CheckPage = app
        .client
        .list_checks(&ChecksQuery {
            search: Some("toyota".to_string()),
            code_state: Some(CodeState::Expired),
            ..Default::default()
        })
        .await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.checks[0].plate_number, "AAA-111");

    let page: CheckPage = app
        .client
        .list_checks(&ChecksQuery {
            payment_state: Some(PaymentState::Unpaid),
            ..Default::default()
        })
        .await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.checks[0].plate_number, "BBB-222");
    Ok(())
}

#[tokio::test]
async fn sorting_and_pagination_slice_the_listing() -> Result<()> {
    let app = spawn_app().await;
    app.store.seed(
        (1..=5).map(|i| {
            sample_check(&format!("PLT-{i:03}"), "Ford Focus", i)
        }),
    );

    let page: CheckPage = app
        .client
        .list_checks(&ChecksQuery {
            page: Some(2),
            limit: Some(2),
            sort_by: Some("plate_number".to_string()),
            sort_order: Some(SortOrder::Asc),
            ..Default::default()
        })
        .await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.page, 2);
    assert_eq!(page.limit, 2);
    let plates: Vec<&str> = page
        .checks
        .iter()
        .map(|check| check.plate_number.as_str())
        .collect();
    assert_eq!(plates, vec!["PLT-003", "PLT-004"]);
    Ok(())
}

#[tokio::test]
async fn mark_viewed_flips_the_flag() -> Result<()> {
    let app = spawn_app().await;
    let check = sample_check("ZZZ-999", "Tesla Model 3", 1);
    let check_id = check.id;
    app.store.insert(check);

    app.client.mark_viewed(&check_id).await?;

    let page: CheckPage = app
        .client
        .list_checks(&ChecksQuery {
            viewed: Some(true),
            ..Default::default()
        })
        .await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.checks[0].id, check_id);
    Ok(())
}

#[tokio::test]
async fn mark_viewed_unknown_id_is_404() -> Result<()> {
    let app = spawn_app().await;

    let err = app
        .client
        .mark_viewed(&CheckId(Uuid::new_v4()))
        .await
        .expect_err("marking an unknown check should fail");

    assert!(matches!(
        err,
        ClientError::APIError(StatusCode::NOT_FOUND, _)
    ));
    Ok(())
}
