// SPDX-License-Identifier: MPL-2.0
//! Lifecycle tests driving owner labels with a scripted fetcher.

use owner_lens::fetch::FetchError;
use owner_lens::test_utils::ScriptedFetcher;
use owner_lens::ui::owner_label::{Effect, OwnerLabel, Status};

#[test]
fn renders_empty_before_attach_for_any_source() {
    for source in ["/userinfo", "http://localhost:5000/api/owner/1", "", "not a url"] {
        let label = OwnerLabel::new(source);
        assert_eq!(label.current_view().text, ", ", "source {source:?}");
    }
}

#[tokio::test]
async fn labels_resolve_independently() {
    let fetcher = ScriptedFetcher::new();
    let mut first = OwnerLabel::new("/api/owner/1");
    let mut second = OwnerLabel::new("/api/owner/2");

    let first_request = first.on_attach(&fetcher).unwrap();
    let second_request = second.on_attach(&fetcher).unwrap();
    assert_eq!(fetcher.outstanding(), 2);

    fetcher.respond(Ok("alice".into()));
    fetcher.respond(Ok("bob".into()));

    // Completion order does not matter.
    second.update(second_request.await);
    first.update(first_request.await);

    assert_eq!(first.current_view().text, "alice, ");
    assert_eq!(second.current_view().text, "bob, ");
}

#[tokio::test]
async fn teardown_before_response_suppresses_update() {
    let fetcher = ScriptedFetcher::new();
    let mut label = OwnerLabel::new("/userinfo");
    let request = tokio::spawn(label.on_attach(&fetcher).unwrap());

    label.on_detach();
    fetcher.respond(Ok("eve".into()));
    let message = request.await.unwrap();

    assert_eq!(label.update(message), Effect::None);
    assert_eq!(label.username(), "");
    assert_eq!(label.revision(), 0);
}

#[test]
fn teardown_without_mount_and_twice_is_safe() {
    let mut label = OwnerLabel::new("/userinfo");
    label.on_detach();
    label.on_detach();
    assert_eq!(label.status(), &Status::Idle);
}

#[tokio::test]
async fn response_arriving_after_abandoned_future_is_not_delivered() {
    let fetcher = ScriptedFetcher::new();
    let mut label = OwnerLabel::new("/userinfo");
    let request = label.on_attach(&fetcher).unwrap();

    label.on_detach();
    drop(request);

    assert!(!fetcher.respond(Ok("eve".into())));
    assert_eq!(label.current_view().text, ", ");
}

#[tokio::test]
async fn transport_failure_keeps_previous_name() {
    let fetcher = ScriptedFetcher::new();
    let mut label = OwnerLabel::new("/userinfo");

    let request = label.on_attach(&fetcher).unwrap();
    fetcher.respond(Ok("alice".into()));
    label.update(request.await);
    label.on_detach();

    let request = label.on_attach(&fetcher).unwrap();
    fetcher.respond(Err(FetchError::Transport("reset by peer".into())));
    label.update(request.await);

    assert_eq!(label.current_view().text, "alice, ");
    assert!(matches!(label.status(), Status::Failed(FetchError::Transport(_))));
}
