//! HTTP-level integration tests for film listing, search and relationships.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_category, create_film, create_language, delete, film_body, get,
    link_category, post_json, put_json,
};
use sqlx::PgPool;

fn titles(json: &serde_json::Value) -> Vec<String> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|f| f["title"].as_str().unwrap().to_string())
        .collect()
}

/// English and French films with distinct years, rates and ratings.
///
/// | title     | language | year | rate | rating |
/// |-----------|----------|------|------|--------|
/// | Alpha     | English  | 2001 | 0.99 | G      |
/// | Bravo     | English  | 2005 | 2.99 | PG     |
/// | Charlie   | French   | 2010 | 4.99 | R      |
/// | Delta     | French   | 1999 | 0.99 | PG     |
/// | Echo      | English  | 2020 | 4.99 | NC-17  |
async fn seed_catalog(pool: &PgPool) {
    let english = create_language(pool, "English").await;
    let french = create_language(pool, "French").await;
    create_film(pool, "Alpha", english, 2001, 0.99, "G").await;
    create_film(pool, "Bravo", english, 2005, 2.99, "PG").await;
    create_film(pool, "Charlie", french, 2010, 4.99, "R").await;
    create_film(pool, "Delta", french, 1999, 0.99, "PG").await;
    create_film(pool, "Echo", english, 2020, 4.99, "NC-17").await;
}

async fn list_titles(pool: &PgPool, uri: &str) -> Vec<String> {
    let response = get(common::build_test_app(pool.clone()), uri).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    let json = body_json(response).await;
    titles(&json["films"])
}

// ---------------------------------------------------------------------------
// Film CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_film_returns_201(pool: PgPool) {
    let language_id = create_language(&pool, "English").await;
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/films",
        film_body("Academy Dinosaur", language_id, 2006, 0.99, "PG"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Academy Dinosaur");
    assert_eq!(json["language_id"], language_id);
    assert!(json["film_id"].is_number());
    assert!(json["last_update"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_film_with_empty_title_returns_400(pool: PgPool) {
    let language_id = create_language(&pool, "English").await;
    let app = common::build_test_app(pool);
    let response = post_json(app, "/films", film_body("", language_id, 2006, 0.99, "PG")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_film_with_unknown_language_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/films", film_body("Orphan", 999_999, 2006, 0.99, "PG")).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_film_update_and_delete(pool: PgPool) {
    let language_id = create_language(&pool, "English").await;
    let id = create_film(&pool, "Original", language_id, 2000, 1.99, "G").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/films/{id}"),
        film_body("Renamed", language_id, 2001, 2.99, "PG"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Renamed");
    assert_eq!(json["release_year"], 2001);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/films/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Renamed");

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/films/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/films/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_film_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/films/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Film with id 999999 not found");
}

// ---------------------------------------------------------------------------
// Listing: pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_third_page_of_25_films_has_5(pool: PgPool) {
    let language_id = create_language(&pool, "English").await;
    for i in 1..=25 {
        create_film(&pool, &format!("Film {i:02}"), language_id, 2000, 0.99, "G").await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/films?limit=10&page=3").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["films"].as_array().unwrap().len(), 5);
    assert_eq!(json["pagination"]["total_items"], 25);
    assert_eq!(json["pagination"]["page"], 3);
    assert_eq!(json["pagination"]["page_size"], 10);
    assert_eq!(json["pagination"]["total_pages"], 3);
    assert_eq!(titles(&json["films"])[0], "Film 21");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_past_the_end_is_empty_with_true_totals(pool: PgPool) {
    seed_catalog(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/films?limit=2&page=9").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["films"].as_array().unwrap().is_empty());
    assert_eq!(json["pagination"]["total_items"], 5);
    assert_eq!(json["pagination"]["total_pages"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_catalog_has_zero_pages(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/films").await).await;

    assert_eq!(json["pagination"]["total_items"], 0);
    assert_eq!(json["pagination"]["total_pages"], 0);
    assert_eq!(json["pagination"]["page_size"], 20);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_out_of_range_page_params_return_400(pool: PgPool) {
    for uri in ["/films?page=0", "/films?limit=0", "/films?limit=101"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "GET {uri}");
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_collection_answers_with_trailing_slash(pool: PgPool) {
    seed_catalog(&pool).await;
    assert_eq!(list_titles(&pool, "/films/").await.len(), 5);
}

// ---------------------------------------------------------------------------
// Listing: filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unfiltered_listing_defaults_to_id_order(pool: PgPool) {
    seed_catalog(&pool).await;
    assert_eq!(
        list_titles(&pool, "/films").await,
        vec!["Alpha", "Bravo", "Charlie", "Delta", "Echo"]
    );
}

// releaseYear and rentalRate have been exact-match filters in one revision
// of this API and upper bounds in another; they are inclusive upper bounds.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_release_year_is_an_upper_bound(pool: PgPool) {
    seed_catalog(&pool).await;
    assert_eq!(
        list_titles(&pool, "/films?releaseYear=2005").await,
        vec!["Alpha", "Bravo", "Delta"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rental_rate_is_an_upper_bound(pool: PgPool) {
    seed_catalog(&pool).await;
    assert_eq!(
        list_titles(&pool, "/films?rentalRate=0.99").await,
        vec!["Alpha", "Delta"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_languages_filter_by_name(pool: PgPool) {
    seed_catalog(&pool).await;
    assert_eq!(
        list_titles(&pool, "/films?languages=French").await,
        vec!["Charlie", "Delta"]
    );
    assert_eq!(
        list_titles(&pool, "/films?languages=English,%20French").await.len(),
        5
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_language_matches_nothing(pool: PgPool) {
    seed_catalog(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/films?languages=Klingon").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["films"].as_array().unwrap().is_empty());
    assert_eq!(json["pagination"]["total_items"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rating_filter_accepts_a_list(pool: PgPool) {
    seed_catalog(&pool).await;
    assert_eq!(
        list_titles(&pool, "/films?rating=PG,R").await,
        vec!["Bravo", "Charlie", "Delta"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_list_parameters_impose_no_constraint(pool: PgPool) {
    seed_catalog(&pool).await;
    assert_eq!(list_titles(&pool, "/films?rating=&languages=").await.len(), 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filters_combine_with_and(pool: PgPool) {
    seed_catalog(&pool).await;
    assert_eq!(
        list_titles(&pool, "/films?languages=English&rating=PG,G&rentalRate=1").await,
        vec!["Alpha"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_reflects_filter_not_page_window(pool: PgPool) {
    seed_catalog(&pool).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/films?languages=English&limit=1").await).await;

    assert_eq!(json["films"].as_array().unwrap().len(), 1);
    assert_eq!(json["pagination"]["total_items"], 3);
    assert_eq!(json["pagination"]["total_pages"], 3);
}

// ---------------------------------------------------------------------------
// Listing: sort
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sort_by_release_year_desc(pool: PgPool) {
    seed_catalog(&pool).await;
    assert_eq!(
        list_titles(&pool, "/films?sort=releaseYear_desc").await,
        vec!["Echo", "Charlie", "Bravo", "Alpha", "Delta"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sort_desc_puts_missing_values_last(pool: PgPool) {
    seed_catalog(&pool).await;
    let language_id = create_language(&pool, "German").await;
    let mut body = film_body("Undated", language_id, 0, 0.99, "G");
    body["release_year"] = serde_json::Value::Null;
    post_json(common::build_test_app(pool.clone()), "/films", body).await;

    let titles = list_titles(&pool, "/films?sort=releaseYear_desc").await;
    assert_eq!(titles.first().map(String::as_str), Some("Echo"));
    assert_eq!(titles.last().map(String::as_str), Some("Undated"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sort_ties_break_on_film_id(pool: PgPool) {
    seed_catalog(&pool).await;
    assert_eq!(
        list_titles(&pool, "/films?sort=rentalRate_desc").await,
        vec!["Charlie", "Echo", "Bravo", "Alpha", "Delta"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_sort_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/films?sort=bogusField_asc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_SORT_FIELD");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_sort_direction_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/films?sort=title_sideways").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_SORT_DIRECTION");
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

async fn seed_search(pool: &PgPool) {
    let language_id = create_language(pool, "English").await;
    for title in ["The Matrix", "Matrix Reloaded", "Inception"] {
        create_film(pool, title, language_id, 2000, 0.99, "R").await;
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_ranks_by_matching_terms(pool: PgPool) {
    seed_search(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/films/search?q=matrix%20reloaded").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(titles(&json), vec!["Matrix Reloaded", "The Matrix"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_is_case_insensitive_and_respects_limit(pool: PgPool) {
    seed_search(&pool).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/films/search?q=MATRIX&limit=1").await).await;
    assert_eq!(titles(&json), vec!["Matrix Reloaded"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_without_matches_returns_404(pool: PgPool) {
    seed_search(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/films/search?q=zebra").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NO_RESULTS");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_wildcards_match_literally(pool: PgPool) {
    seed_search(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/films/search?q=%25").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_rejects_blank_query_and_bad_limit(pool: PgPool) {
    for uri in [
        "/films/search",
        "/films/search?q=%20%20",
        "/films/search?q=matrix&limit=0",
        "/films/search?q=matrix&limit=101",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "GET {uri}");
    }
}

// ---------------------------------------------------------------------------
// Relationships
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_related_films_order_by_shared_categories(pool: PgPool) {
    let language_id = create_language(&pool, "English").await;
    let anchor = create_film(&pool, "Anchor", language_id, 2000, 0.99, "G").await;
    let twin = create_film(&pool, "Twin", language_id, 2000, 0.99, "G").await;
    let cousin = create_film(&pool, "Cousin", language_id, 2000, 0.99, "G").await;
    let stranger = create_film(&pool, "Stranger", language_id, 2000, 0.99, "G").await;

    let action = create_category(&pool, "Action").await;
    let comedy = create_category(&pool, "Comedy").await;
    let drama = create_category(&pool, "Drama").await;

    link_category(&pool, anchor, action).await;
    link_category(&pool, anchor, comedy).await;
    link_category(&pool, twin, action).await;
    link_category(&pool, twin, comedy).await;
    link_category(&pool, cousin, comedy).await;
    link_category(&pool, stranger, drama).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/films/{anchor}/related")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(titles(&body_json(response).await), vec!["Twin", "Cousin"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_film_relationships_of_missing_film_return_404(pool: PgPool) {
    for suffix in ["related", "categories", "actors"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/films/999999/{suffix}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{suffix}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_film_categories_and_actors(pool: PgPool) {
    let language_id = create_language(&pool, "English").await;
    let film_id = create_film(&pool, "Heat", language_id, 1995, 2.99, "R").await;
    let crime = create_category(&pool, "Crime").await;
    link_category(&pool, film_id, crime).await;

    let app = common::build_test_app(pool.clone());
    let actor = body_json(
        post_json(
            app,
            "/actors",
            serde_json::json!({"first_name": "Al", "last_name": "Pacino"}),
        )
        .await,
    )
    .await;
    let actor_id = actor["actor_id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/film-actors",
        serde_json::json!({"actor_id": actor_id, "film_id": film_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let categories = body_json(get(app, &format!("/films/{film_id}/categories")).await).await;
    assert_eq!(categories[0]["name"], "Crime");

    let app = common::build_test_app(pool);
    let actors = body_json(get(app, &format!("/films/{film_id}/actors")).await).await;
    assert_eq!(actors.as_array().unwrap().len(), 1);
    assert_eq!(actors[0]["last_name"], "Pacino");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_featured_films_need_a_backdrop(pool: PgPool) {
    let language_id = create_language(&pool, "English").await;
    create_film(&pool, "No Backdrop", language_id, 2022, 0.99, "G").await;

    for (title, year) in [("Older", 1990), ("Newer", 2015)] {
        let mut body = film_body(title, language_id, year, 0.99, "G");
        body["backdrop_path"] = serde_json::json!(format!("/img/{title}.jpg"));
        post_json(common::build_test_app(pool.clone()), "/films", body).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/featured-films/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(titles(&body_json(response).await), vec!["Newer", "Older"]);
}
