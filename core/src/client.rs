//! Stateless HTTP request builder and response parser for the inventory API.
//!
//! # Design
//! `InventoryClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Every parse method checks the status the same way: any 2xx is success,
//! anything else is logged with its body and returned as `ApiError::Http`.

use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{DeleteIngredients, Ingredient, UpsertIngredient};

const INGREDIENTS_PATH: &str = "/api/ingredients";

/// Synchronous, stateless client for the inventory API.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    base_url: String,
}

impl InventoryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self) -> String {
        format!("{}{INGREDIENTS_PATH}", self.base_url)
    }

    fn json_request<B: Serialize>(&self, method: HttpMethod, body: &B) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: self.url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_list_ingredients(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_upsert_ingredient(&self, input: &UpsertIngredient) -> Result<HttpRequest, ApiError> {
        debug!(name = %input.name, quantity = input.quantity, unit = %input.unit, "building upsert");
        self.json_request(HttpMethod::Post, input)
    }

    pub fn build_delete_ingredients(&self, names: &[String]) -> Result<HttpRequest, ApiError> {
        debug!(count = names.len(), "building batch delete");
        let payload = DeleteIngredients {
            names: names.to_vec(),
        };
        self.json_request(HttpMethod::Delete, &payload)
    }

    /// Parse the list response, dropping records that fail schema validation.
    ///
    /// The body itself must be a JSON array; anything else is a
    /// `Deserialization` error for the whole call.
    pub fn parse_list_ingredients(&self, response: HttpResponse) -> Result<Vec<Ingredient>, ApiError> {
        check_status(&response, "list")?;
        let records: Vec<serde_json::Value> =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))?;

        let mut ingredients = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Ingredient>(record) {
                Ok(ingredient) => ingredients.push(ingredient),
                Err(e) => warn!(index, error = %e, "rejecting malformed ingredient record"),
            }
        }
        Ok(ingredients)
    }

    pub fn parse_upsert_ingredient(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, "upsert")
    }

    pub fn parse_delete_ingredients(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, "delete")
    }
}

/// Map non-2xx status codes to `ApiError::Http`, logging status and body.
fn check_status(response: &HttpResponse, operation: &str) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    error!(operation, status = response.status, body = %response.body, "API call failed");
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Unit;

    fn client() -> InventoryClient {
        InventoryClient::new("http://localhost:9090")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_ingredients_produces_correct_request() {
        let req = client().build_list_ingredients();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:9090/api/ingredients");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_upsert_ingredient_produces_correct_request() {
        let input = UpsertIngredient {
            name: "Flour".to_string(),
            quantity: 500,
            unit: Unit::Gram,
        };
        let req = client().build_upsert_ingredient(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:9090/api/ingredients");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Flour", "quantity": 500, "unit": "Gram"}));
    }

    #[test]
    fn build_delete_ingredients_produces_correct_request() {
        let names = vec!["Flour".to_string(), "Salt".to_string()];
        let req = client().build_delete_ingredients(&names).unwrap();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:9090/api/ingredients");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"names": ["Flour", "Salt"]}));
    }

    #[test]
    fn parse_list_ingredients_success() {
        let body = r#"[{"name":"Salt","quantity":3,"unit":"Kilogram","last_edited":"2024-03-05T09:07:00Z"}]"#;
        let ingredients = client().parse_list_ingredients(response(200, body)).unwrap();
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].name, "Salt");
        assert_eq!(ingredients[0].quantity, 3);
        assert_eq!(ingredients[0].unit, Unit::Kilogram);
    }

    #[test]
    fn parse_list_ingredients_drops_malformed_records() {
        let body = r#"[
            {"name":"Salt","quantity":3,"unit":"Gram","last_edited":"2024-03-05T09:07:00Z"},
            {"name":"Sugar","quantity":"lots","unit":"Gram","last_edited":"2024-03-05T09:07:00Z"},
            {"name":"Milk","quantity":1,"unit":"Liter","last_edited":"not a date"},
            {"name":"Eggs","quantity":6,"unit":"Dozen","last_edited":"2024-03-05T09:07:00Z"},
            {"name":"Butter","quantity":250,"unit":"Gram","last_edited":"2024-03-06T18:30:00Z"}
        ]"#;
        let ingredients = client().parse_list_ingredients(response(200, body)).unwrap();
        let names: Vec<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Salt", "Eggs", "Butter"]);
        assert_eq!(ingredients[1].unit, Unit::Other("Dozen".to_string()));
    }

    #[test]
    fn parse_list_ingredients_bad_json() {
        let err = client().parse_list_ingredients(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_list_ingredients_object_body_is_rejected() {
        let err = client()
            .parse_list_ingredients(response(200, r#"{"name":"Salt"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_list_ingredients_server_error() {
        let err = client().parse_list_ingredients(response(500, "")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_upsert_accepts_any_2xx() {
        assert!(client().parse_upsert_ingredient(response(200, "")).is_ok());
        assert!(client().parse_upsert_ingredient(response(201, "{}")).is_ok());
        assert!(client().parse_upsert_ingredient(response(204, "")).is_ok());
    }

    #[test]
    fn parse_upsert_failure_carries_status_and_body() {
        let err = client()
            .parse_upsert_ingredient(response(500, "database locked"))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                body: "database locked".to_string()
            }
        );
    }

    #[test]
    fn parse_delete_failure_is_surfaced() {
        let err = client().parse_delete_ingredients(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 404, .. }));
        assert!(client().parse_delete_ingredients(response(200, "")).is_ok());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = InventoryClient::new("http://localhost:9090/");
        assert_eq!(client.base_url(), "http://localhost:9090");
        assert_eq!(
            client.build_list_ingredients().path,
            "http://localhost:9090/api/ingredients"
        );
    }
}
