use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use nutrition_tracker::app::build_app;
use nutrition_tracker::state::AppState;

fn test_app() -> Router {
    build_app(AppState::fake())
}

/// Sends one request and returns the status with the body parsed as JSON.
/// Empty bodies come back as `Null`, plain text as a JSON string.
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

async fn log_manual(app: &Router, name: &str, calories: f64, date: &str) -> Value {
    let (status, meal) = send(
        app,
        "POST",
        "/api/v1/meals",
        Some(json!({
            "name": name,
            "calories": calories,
            "proteins": 10,
            "carbs": 20,
            "fats": 5,
            "date": date,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{meal}");
    meal
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));
}

#[tokio::test]
async fn test_meal_from_food_is_scaled_and_rounded() {
    let app = test_app();
    let (status, meal) = send(
        &app,
        "POST",
        "/api/v1/meals/food",
        Some(json!({ "foodName": "poulet (blanc, grillé)", "quantity": 150, "date": "2024-03-10" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "{meal}");
    assert_eq!(meal["name"], "Poulet (blanc, grillé) (150g)");
    assert_eq!(meal["calories"], 248.0);
    assert_eq!(meal["proteins"], 47.0);
    assert_eq!(meal["carbs"], 0.0);
    assert_eq!(meal["fats"], 5.0);
    assert!(meal["date"].as_str().unwrap().starts_with("2024-03-10T"));

    let (_, same_day) = send(&app, "GET", "/api/v1/meals?date=2024-03-10", None).await;
    assert_eq!(same_day.as_array().unwrap().len(), 1);
    let (_, other_day) = send(&app, "GET", "/api/v1/meals?date=2024-03-11", None).await;
    assert!(other_day.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_meal_from_unknown_food_is_not_found() {
    let app = test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/meals/food",
        Some(json!({ "foodName": "dragon fruit", "quantity": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, meals) = send(&app, "GET", "/api/v1/meals", None).await;
    assert!(meals.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_bad_date_is_rejected() {
    let app = test_app();
    let (status, _) = send(&app, "GET", "/api/v1/summary/daily?date=10/03/2024", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_out_of_range_date_is_rejected_and_log_unchanged() {
    let app = test_app();
    log_manual(&app, "Déjeuner", 600.0, "2024-03-10").await;

    for date in ["-0001-06-01", "0000-12-31", "9999-12-31"] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/meals",
            Some(json!({
                "name": "Hors limites",
                "calories": 100,
                "proteins": 1,
                "carbs": 1,
                "fats": 1,
                "date": date,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{date}");
    }

    let (status, meals) = send(&app, "GET", "/api/v1/meals", None).await;
    assert_eq!(status, StatusCode::OK);
    let meals = meals.as_array().unwrap();
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0]["name"], "Déjeuner");

    log_manual(&app, "Dîner", 700.0, "2024-03-10").await;
    let (status, meals) = send(&app, "GET", "/api/v1/meals", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(meals.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_meal() {
    let app = test_app();
    let meal = log_manual(&app, "Snack", 200.0, "2024-03-10").await;
    let uri = format!("/api/v1/meals/{}", meal["id"].as_str().unwrap());

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_custom_food_validation_and_search() {
    let app = test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/foods",
        Some(json!({ "name": "Air", "calories": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, food) = send(
        &app,
        "POST",
        "/api/v1/foods",
        Some(json!({ "name": "  Granola maison ", "calories": 450, "proteins": 10, "carbs": 60, "fats": 18 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(food["name"], "Granola maison");

    let (status, results) = send(&app, "GET", "/api/v1/foods?q=granola", None).await;
    assert_eq!(status, StatusCode::OK);
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["source"], "custom");
    assert_eq!(results[0]["calories"], 450.0);
}

#[tokio::test]
async fn test_recipe_lifecycle() {
    let app = test_app();
    let (status, recipe) = send(
        &app,
        "POST",
        "/api/v1/recipes",
        Some(json!({
            "name": "Riz au poulet",
            "servings": 2,
            "ingredients": [
                { "foodName": "Poulet (blanc, grillé)", "quantity": 100 },
                { "foodName": "Riz blanc (cuit)", "quantity": 100 },
            ],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{recipe}");
    assert_eq!(recipe["totalNutrition"]["calories"], 295.0);
    assert_eq!(recipe["perServing"]["calories"], 148.0);
    let id = recipe["id"].as_str().unwrap().to_string();

    let (status, _) = send(&app, "DELETE", &format!("/api/v1/recipes/{id}/ingredients/9"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, recipe) = send(&app, "DELETE", &format!("/api/v1/recipes/{id}/ingredients/1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(recipe["ingredients"].as_array().unwrap().len(), 1);
    assert_eq!(recipe["totalNutrition"]["calories"], 165.0);

    let (status, recipe) = send(
        &app,
        "POST",
        &format!("/api/v1/recipes/{id}/ingredients"),
        Some(json!({ "foodName": "pomme", "quantity": 200 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(recipe["totalNutrition"]["calories"], 269.0);

    let (status, meal) = send(
        &app,
        "POST",
        "/api/v1/meals/recipe",
        Some(json!({ "recipeId": id, "servings": 2, "date": "2024-03-10" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{meal}");
    assert_eq!(meal["name"], "Riz au poulet (2 portions)");
    assert_eq!(meal["calories"], 270.0);

    let (status, _) = send(&app, "DELETE", &format!("/api/v1/recipes/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/v1/recipes/{id}/ingredients"),
        Some(json!({ "foodName": "pomme", "quantity": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_goals_drive_daily_status() {
    let app = test_app();
    let (_, goals) = send(&app, "GET", "/api/v1/goals", None).await;
    assert_eq!(goals, json!({ "calories": 2000.0, "proteins": 150.0, "carbs": 250.0, "fats": 65.0 }));

    let (status, _) = send(
        &app,
        "PUT",
        "/api/v1/goals",
        Some(json!({ "calories": -1, "proteins": 150, "carbs": 250, "fats": 65 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    log_manual(&app, "Journée", 1850.0, "2024-03-10").await;
    let (status, summary) = send(&app, "GET", "/api/v1/summary/daily?date=2024-03-10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["date"], "2024-03-10");
    assert_eq!(summary["totals"]["calories"], 1850.0);
    assert_eq!(summary["progress"]["calories"]["status"], "near-limit");
    assert_eq!(summary["progress"]["proteins"]["status"], "on-track");

    log_manual(&app, "Carré de chocolat", 151.0, "2024-03-10").await;
    let (_, summary) = send(&app, "GET", "/api/v1/summary/daily?date=2024-03-10", None).await;
    assert_eq!(summary["progress"]["calories"]["status"], "exceeded");
    assert_eq!(summary["progress"]["calories"]["percent"], 100.0);

    let (status, _) = send(
        &app,
        "PUT",
        "/api/v1/goals",
        Some(json!({ "calories": 2500, "proteins": 150, "carbs": 250, "fats": 65 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, summary) = send(&app, "GET", "/api/v1/summary/daily?date=2024-03-10", None).await;
    assert_eq!(summary["progress"]["calories"]["status"], "on-track");
    assert_eq!(summary["meals"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_weekly_and_calendar_summaries() {
    let app = test_app();
    log_manual(&app, "A", 1000.0, "2024-03-08").await;
    log_manual(&app, "B", 1500.0, "2024-03-09").await;
    log_manual(&app, "C", 500.0, "2024-03-09").await;
    log_manual(&app, "D", 3000.0, "2024-04-01").await;

    let (status, weekly) = send(&app, "GET", "/api/v1/summary/weekly?end=2024-03-31&days=7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(weekly["days"].as_array().unwrap().len(), 2);
    assert_eq!(weekly["average"]["calories"], 1500.0);

    let (_, weekly) = send(&app, "GET", "/api/v1/summary/weekly?end=2024-03-31&days=1", None).await;
    assert_eq!(weekly["days"][0]["date"], "2024-03-09");
    assert_eq!(weekly["average"]["calories"], 2000.0);

    let (status, calendar) = send(&app, "GET", "/api/v1/summary/calendar/2024/3", None).await;
    assert_eq!(status, StatusCode::OK);
    let days = calendar.as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[1]["mealCount"], 2);

    let (status, _) = send(&app, "GET", "/api/v1/summary/calendar/2024/13", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_barcode_reports() {
    let app = test_app();
    let (status, outcome) = send(&app, "POST", "/api/v1/barcode", Some(json!({ "code": "4006381333931" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["code"], "4006381333931");
    assert!(outcome["food"].is_null());

    let (status, _) = send(&app, "POST", "/api/v1/barcode", Some(json!({ "code": "4006381333932" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, "POST", "/api/v1/barcode", Some(json!({ "error": "camera unavailable" }))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = send(&app, "POST", "/api/v1/barcode", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
