//! HTTP-level integration tests for the `/people` routes.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_get_person(pool: PgPool) {
    let body = json!({
        "name": "Luke Skywalker",
        "height": 172,
        "mass": 77,
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "planet_id": 1,
        "url": "https://swapi.dev/api/people/1/"
    });
    let response = post_json(common::build_test_app(pool.clone()), "/people", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    for (key, value) in body.as_object().unwrap() {
        assert_eq!(&created[key], value, "field {key} should round-trip");
    }
    let id = created["id"].as_i64().unwrap();

    let response = get(common::build_test_app(pool), &format!("/people/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_planet_id_is_not_checked(pool: PgPool) {
    // No planets exist at all.
    let response = post_json(
        common::build_test_app(pool),
        "/people",
        json!({"name": "Rey", "url": "http://x/p/85", "planet_id": 31337}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["planet_id"], 31337);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_person_partially(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/people",
        json!({"name": "Anakin Skywalker", "url": "http://x/p/11", "hair_color": "blond"}),
    )
    .await;
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool),
        &format!("/people/{id}"),
        json!({"name": "Darth Vader", "height": 202}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Darth Vader");
    assert_eq!(updated["height"], 202);
    assert_eq!(updated["hair_color"], "blond");
    assert_eq!(updated["url"], "http://x/p/11");
    assert_eq!(updated["id"], created["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_person(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/people",
        json!({"name": "Jar Jar Binks", "url": "http://x/p/36"}),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = delete(common::build_test_app(pool.clone()), &format!("/people/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": format!("Deleted person {id}")})
    );

    let response = delete(common::build_test_app(pool.clone()), &format!("/people/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        format!("Person {id} not found")
    );

    let response = get(common::build_test_app(pool), "/people").await;
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_person_yields_404(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/people/77").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json(
        common::build_test_app(pool),
        "/people/77",
        json!({"mass": 80}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_field_is_ignored(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/people",
        json!({"name": "Yoda", "url": "http://x/p/20", "species": "unknown"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["name"], "Yoda");
    assert!(created.get("species").is_none());
}
