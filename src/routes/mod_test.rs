use super::*;
use tokio::net::TcpListener;

async fn spawn_app() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(AppState::new())).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_and_robots() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/healthz")).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let resp = client.get(format!("{base}/robots.txt")).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp.headers()["content-type"].to_str().unwrap().starts_with("text/plain"));
    assert_eq!(resp.text().await.unwrap(), ROBOTS_TXT);
}

#[tokio::test]
async fn index_over_http() {
    let base = spawn_app().await;
    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp.text().await.unwrap().starts_with("<!DOCTYPE html>"));
}

#[tokio::test]
async fn todo_lifecycle_over_http() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let todos = format!("{base}/api/todos");

    let created = client
        .post(&todos)
        .header("content-type", "application/x-www-form-urlencoded")
        .body("todo=write+tests")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(created.contains("1. write tests"));

    let listed = client.get(&todos).send().await.unwrap().text().await.unwrap();
    assert!(listed.contains("1. write tests"));

    let resp = client.delete(format!("{todos}/1")).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let listed = client.get(&todos).send().await.unwrap().text().await.unwrap();
    assert_eq!(listed, "<div></div>");
}

#[tokio::test]
async fn clear_over_http() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let todos = format!("{base}/api/todos");

    for body in ["todo=a", "todo=b"] {
        client
            .post(&todos)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .unwrap();
    }
    let resp = client.delete(&todos).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp.text().await.unwrap().is_empty());

    let listed = client.get(&todos).send().await.unwrap().text().await.unwrap();
    assert_eq!(listed, "<div></div>");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let base = spawn_app().await;
    let resp = reqwest::get(format!("{base}/nope")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[test]
fn broken_markup_becomes_500() {
    let resp = fragment(Err(MarkupError::EmptyTag));
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
