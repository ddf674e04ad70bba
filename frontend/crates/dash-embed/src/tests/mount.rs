use crate::controller::SessionGeneration;
use crate::tests::{DASHBOARD_ID, DOMAIN, ScriptedEmbedder, Step};
use crate::{
    DashboardMount, DashboardUiConfig, EmbedError, EmbeddedFrame, GuestToken, GuestTokenClient,
    HeadlessContainer, MountTarget, UserIdentity,
};

use std::sync::Arc;
use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{eq, none};

fn mount_with(embedder: Arc<ScriptedEmbedder>) -> DashboardMount {
    let tokens = Arc::new(GuestTokenClient::new("http://127.0.0.1:9/guest-token"));
    DashboardMount::new(embedder, tokens, DOMAIN, DashboardUiConfig::default())
}

#[tokio::test]
async fn given_no_container_when_mount_then_container_missing_and_no_embed() {
    let embedder = Arc::new(ScriptedEmbedder::new(vec![]));
    let mount = mount_with(embedder.clone()).with_container_id("dash-root");

    let result = mount
        .mount(None, DASHBOARD_ID, &UserIdentity::new("john_usa"))
        .await;

    match result {
        Err(EmbedError::ContainerMissing { container_id, .. }) => {
            assert_that!(container_id.as_str(), eq("dash-root"))
        }
        other => panic!("expected ContainerMissing, got {other:?}"),
    }
    assert_that!(embedder.calls(), eq(0));
}

#[tokio::test]
async fn given_detached_container_when_mount_then_container_missing() {
    let embedder = Arc::new(ScriptedEmbedder::new(vec![]));
    let container = Arc::new(HeadlessContainer::new("superset-container"));
    container.detach();

    let result = mount_with(embedder.clone())
        .mount(Some(container), DASHBOARD_ID, &UserIdentity::new("john_usa"))
        .await;

    assert!(matches!(result, Err(EmbedError::ContainerMissing { .. })));
    assert_that!(embedder.calls(), eq(0));
}

#[tokio::test]
async fn given_previous_content_when_mount_fails_then_container_cleared() {
    let embedder = Arc::new(ScriptedEmbedder::new(vec![Step::Fail {
        delay: Duration::ZERO,
        message: "sdk exploded",
    }]));
    let container = Arc::new(HeadlessContainer::new("superset-container"));
    container.attach_frame(EmbeddedFrame::new("old", GuestToken::new("old")));

    let result = mount_with(embedder)
        .mount(
            Some(container.clone()),
            DASHBOARD_ID,
            &UserIdentity::new("john_usa"),
        )
        .await;

    assert!(matches!(result, Err(EmbedError::Embedding { .. })));
    assert_that!(container.frame(), none());
}

#[tokio::test]
async fn given_attached_container_when_mount_then_frame_rendered() {
    let embedder = Arc::new(ScriptedEmbedder::new(vec![]));
    let container = Arc::new(HeadlessContainer::new("superset-container"));

    let dashboard = mount_with(embedder)
        .mount(
            Some(container.clone()),
            DASHBOARD_ID,
            &UserIdentity::new("john_usa"),
        )
        .await
        .unwrap();

    assert_that!(container.frame().unwrap().src, eq(&dashboard.src));
}

#[tokio::test]
async fn given_superseded_fence_when_mount_completes_then_frame_dropped() {
    let embedder = Arc::new(ScriptedEmbedder::new(vec![Step::Render {
        delay: Duration::from_millis(50),
    }]));
    let container = Arc::new(HeadlessContainer::new("superset-container"));
    let generation = SessionGeneration::default();
    let fence = generation.advance();

    let mount = mount_with(embedder);
    let task = {
        let container = container.clone();
        tokio::spawn(async move {
            mount
                .mount_fenced(
                    Some(container),
                    DASHBOARD_ID,
                    &UserIdentity::new("john_usa"),
                    Some(fence),
                )
                .await
        })
    };

    tokio::time::sleep(Duration::from_millis(10)).await;
    let newer = generation.advance();
    assert!(newer.is_current());

    let result = task.await.unwrap();

    assert!(result.is_ok());
    assert_that!(container.frame(), none());
}
