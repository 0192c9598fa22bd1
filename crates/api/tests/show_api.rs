//! HTTP-level integration tests for show booking and the shows listing.

mod common;

use axum::http::StatusCode;
use common::{body_json, book_show, create_artist, create_venue, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_book_future_show(pool: PgPool) {
    let venue_id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist_id = create_artist(&pool, "Guns N Petals").await;

    let response = book_show(&pool, artist_id, venue_id, "2099-06-15 21:30:00").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["artist_id"], artist_id);
    assert_eq!(json["venue_id"], venue_id);
    assert_eq!(json["start_time"], "2099-06-15 21:30:00");
    assert_eq!(json["upcoming"], true);

    let app = common::build_test_app(pool);
    let venue = body_json(get(app, &format!("/api/v1/venues/{venue_id}/edit")).await).await;
    assert_eq!(venue["upcoming_shows_count"], 1);
    assert_eq!(venue["past_shows_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_book_past_show(pool: PgPool) {
    let venue_id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist_id = create_artist(&pool, "Guns N Petals").await;

    let response = book_show(&pool, artist_id, venue_id, "2019-05-21T21:30:00").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["upcoming"], false);

    let app = common::build_test_app(pool);
    let artist = body_json(get(app, &format!("/api/v1/artists/{artist_id}/edit")).await).await;
    assert_eq!(artist["past_shows_count"], 1);
    assert_eq!(artist["upcoming_shows_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_book_show_with_unparsable_time_is_rejected(pool: PgPool) {
    let venue_id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist_id = create_artist(&pool, "Guns N Petals").await;

    let response = book_show(&pool, artist_id, venue_id, "next tuesday").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_book_show_for_unknown_venue_is_rejected(pool: PgPool) {
    let artist_id = create_artist(&pool, "Guns N Petals").await;

    let response = book_show(&pool, artist_id, 999999, "2099-06-15 21:30:00").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "CONSTRAINT_VIOLATION");

    let (shows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(shows, 0);

    let app = common::build_test_app(pool);
    let artist = body_json(get(app, &format!("/api/v1/artists/{artist_id}/edit")).await).await;
    assert_eq!(artist["upcoming_shows_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_upcoming_shows_only(pool: PgPool) {
    let venue_id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist_id = create_artist(&pool, "Guns N Petals").await;

    book_show(&pool, artist_id, venue_id, "2000-01-01 20:00:00").await;
    book_show(&pool, artist_id, venue_id, "2099-06-15 21:30:00").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/shows").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let shows = json["data"].as_array().unwrap();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0]["venue_id"], venue_id);
    assert_eq!(shows[0]["venue_name"], "The Musical Hop");
    assert_eq!(shows[0]["artist_name"], "Guns N Petals");
    assert_eq!(shows[0]["start_time"], "2099-06-15 21:30:00");
    assert!(shows[0].get("start_time_display").is_none());

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/shows?time_format=full").await).await;
    assert_eq!(
        json["data"][0]["start_time_display"],
        "Monday June, 15, 2099 at 9:30PM"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recent_listings(pool: PgPool) {
    for i in 0..12 {
        create_venue(&pool, &format!("Venue {i}"), "San Francisco", "CA").await;
    }
    create_artist(&pool, "Guns N Petals").await;
    create_artist(&pool, "Matt Quevedo").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/recent").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let venues = json["data"]["venues"].as_array().unwrap();
    assert_eq!(venues.len(), 10);
    assert_eq!(venues[0]["name"], "Venue 11");
    assert_eq!(venues[9]["name"], "Venue 2");

    let artists: Vec<&str> = json["data"]["artists"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(artists, ["Matt Quevedo", "Guns N Petals"]);
    assert_eq!(json["data"]["artists"][0]["upcoming_shows_count"], 0);
}
