use std::{collections::BTreeMap, sync::Arc};

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

/// Stored record. `unit` is free text here; the client decides which units
/// it accepts.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: u32,
    pub unit: String,
    pub last_edited: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct UpsertIngredient {
    pub name: String,
    pub quantity: u32,
    pub unit: String,
}

#[derive(Deserialize)]
pub struct DeleteIngredients {
    pub names: Vec<String>,
}

/// Keyed by name, so listing is ordered by name.
pub type Db = Arc<RwLock<BTreeMap<String, Ingredient>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(BTreeMap::new()));
    Router::new()
        .route(
            "/api/ingredients",
            get(list_ingredients).post(upsert_ingredient).delete(delete_ingredients),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_ingredients(State(db): State<Db>) -> Json<Vec<Ingredient>> {
    let ingredients = db.read().await;
    Json(ingredients.values().cloned().collect())
}

async fn upsert_ingredient(
    State(db): State<Db>,
    Json(input): Json<UpsertIngredient>,
) -> Result<StatusCode, (StatusCode, String)> {
    if input.name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "name must not be empty".to_string()));
    }
    let ingredient = Ingredient {
        name: input.name,
        quantity: input.quantity,
        unit: input.unit,
        last_edited: Utc::now(),
    };
    info!(name = %ingredient.name, quantity = ingredient.quantity, "upserting ingredient");
    db.write().await.insert(ingredient.name.clone(), ingredient);
    Ok(StatusCode::OK)
}

/// Remove every named ingredient, or none of them if any name is unknown.
async fn delete_ingredients(
    State(db): State<Db>,
    Json(input): Json<DeleteIngredients>,
) -> Result<StatusCode, (StatusCode, String)> {
    let mut ingredients = db.write().await;
    let missing: Vec<&str> = input
        .names
        .iter()
        .filter(|name| !ingredients.contains_key(name.as_str()))
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        return Err((StatusCode::NOT_FOUND, format!("unknown ingredients: {}", missing.join(", "))));
    }
    for name in &input.names {
        ingredients.remove(name);
    }
    info!(count = input.names.len(), "deleted ingredients");
    Ok(StatusCode::OK)
}
