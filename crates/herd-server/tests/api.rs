//! End-to-end tests: a seeded in-memory database behind the real router on
//! an ephemeral port.

use herd_config::{AnalyticsConfig, ServerConfig};
use herd_db::HerdDb;
use herd_server::{AppState, router};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{Value, json};
use tokio::net::TcpListener;

const SEED: &str = "
    INSERT INTO farms (id, name) VALUES (1, 'La Esperanza'), (2, 'Vacia');
    INSERT INTO lands (id, farm_id, name) VALUES (1, 1, 'Lote Norte'), (2, 1, 'Lote Sur');
    INSERT INTO animals (id, farm_id, land_id) VALUES ('BOV-1', 1, 1), ('BOV-2', 1, 1), ('BOV-3', 1, 2);

    INSERT INTO weight_logs (animal_id, weight_kg, measured_at) VALUES
        ('BOV-1', 300.0, '2024-01-01T00:00:00Z'),
        ('BOV-1', 500.0, '2024-02-01 00:00:00'),
        ('BOV-2', 90.0, '2024-02-01T00:00:00Z');
    INSERT INTO health_records (id, animal_id, state, sampled_at) VALUES
        ('H-1', 'BOV-3', 'Enfermo', '2024-02-10'),
        ('H-2', 'BOV-1', 'healthy', '2024-02-10');
    INSERT INTO emission_logs (animal_id, co2, methane) VALUES ('BOV-1', 10.0, 2.5);
    INSERT INTO finance_logs (animal_id, feed_cost, medical_cost, sale_revenue) VALUES
        ('BOV-1', 100.0, 20.0, 0.0),
        ('BOV-1', 0.0, 0.0, 1500.0);
    INSERT INTO carcass_weighings (id, animal_id, slaughtered_at, live_weight_kg, carcass_weight_kg, yield_percentage)
        VALUES ('C-1', 'BOV-1', '2024-03-01T08:30:00Z', 500.0, 275.0, 55.0);
    INSERT INTO resource_logs (land_id, feed_available, water_available, logged_at) VALUES
        (1, 150.0, 80.0, '2024-02-01T00:00:00Z'),
        (2, 40.0, 80.0, '2024-02-01T00:00:00Z');
";

async fn spawn_server(db: HerdDb) -> String {
    let state = AppState::new(db, AnalyticsConfig::default());
    let app = router(state, &ServerConfig::default());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{address}/api/analytics")
}

async fn seeded_server() -> String {
    let db = HerdDb::open_local(":memory:").await.unwrap();
    db.conn().execute_batch(SEED).await.unwrap();
    spawn_server(db).await
}

async fn get(url: &str) -> (StatusCode, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn animal_endpoint_reports_full_analytics() {
    let base = seeded_server().await;
    let (status, body) = get(&format!("{base}/animal/BOV-1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "animal_id": "BOV-1",
            "status": "healthy",
            "latest_weight": 500.0,
            "total_emissions": 12.5,
            "total_costs": 120.0,
            "total_revenue": 1500.0,
            "energy_consumption": 250.0,
            "meat_yield": {
                "carcass_weight_kg": 275.0,
                "live_weight_kg": 500.0,
                "yield_percentage": 55.0,
                "slaughter_date": "2024-03-01T08:30:00Z"
            }
        })
    );
}

#[tokio::test]
async fn sick_and_underweight_animals() {
    let base = seeded_server().await;

    let (_, sick) = get(&format!("{base}/animal/BOV-3")).await;
    assert_eq!(sick["status"], "sick");
    assert_eq!(sick["latest_weight"], Value::Null);
    assert_eq!(sick["meat_yield"], Value::Null);

    let (_, thin) = get(&format!("{base}/animal/BOV-2")).await;
    assert_eq!(thin["status"], "underweight");
}

#[tokio::test]
async fn land_endpoint_flags_low_feed() {
    let base = seeded_server().await;

    let (status, body) = get(&format!("{base}/land/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "low_resources");
    assert_eq!(body["low_resources"], json!(["feed"]));
    assert_eq!(body["animal_count"], 1);

    let (_, good) = get(&format!("{base}/land/1")).await;
    assert_eq!(good["status"], "good");
    assert_eq!(good["low_resources"], json!([]));
    assert_eq!(good["total_meat_produced_kg"], 275.0);
    // BOV-1 averages 400 kg and BOV-2 90 kg.
    assert_eq!(good["avg_daily_weight_gain_kg"], 245.0 / 30.0);
}

#[tokio::test]
async fn farm_endpoint_rolls_up_lands() {
    let base = seeded_server().await;

    let (status, body) = get(&format!("{base}/farm/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "attention_needed");
    assert_eq!(body["total_lands"], 2);
    assert_eq!(body["total_animals"], 3);
    assert_eq!(body["total_meat_production_kg"], 275.0);
    assert_eq!(body["average_carcass_yield_percent"], 55.0);
    assert_eq!(body["lands_status"][0]["land_id"], 1);
    assert_eq!(body["lands_status"][1]["land_id"], 2);

    let (_, empty) = get(&format!("{base}/farm/2")).await;
    assert_eq!(empty["status"], "good");
    assert_eq!(empty["total_animals"], 0);
    assert_eq!(empty["lands_status"], json!([]));
}

#[tokio::test]
async fn unknown_ids_are_404() {
    let base = seeded_server().await;

    for path in ["animal/BOV-404", "land/404", "farm/404"] {
        let (status, body) = get(&format!("{base}/{path}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }
}

#[tokio::test]
async fn non_integer_land_id_is_rejected() {
    let base = seeded_server().await;
    let response = reqwest::get(format!("{base}/land/north")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn store_failure_is_503() {
    let db = HerdDb::open_local(":memory:").await.unwrap();
    db.conn().execute_batch(SEED).await.unwrap();
    db.conn().execute("DROP TABLE weight_logs", ()).await.unwrap();
    let base = spawn_server(db).await;

    let (status, body) = get(&format!("{base}/animal/BOV-1")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let base = seeded_server().await;
    let (_, first) = get(&format!("{base}/farm/1")).await;
    let (_, second) = get(&format!("{base}/farm/1")).await;
    assert_eq!(first, second);
}
