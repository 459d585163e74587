//! Users HTTP Routes
//!
//! `GET /users/:id` checks its query string against a fixed rule set
//! before answering.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::errors::QueryRejection;
use crate::validation::{ObservedParams, QueryValidator, RuleSet};

// ==================
// Shared State
// ==================

/// Users state shared across handlers
pub struct UsersState {
    validator: Arc<QueryValidator>,
    rules: RuleSet,
}

impl UsersState {
    pub fn new(validator: Arc<QueryValidator>) -> Self {
        Self {
            validator,
            rules: users_rules(),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

/// Query parameters accepted by the users route
pub fn users_rules() -> RuleSet {
    RuleSet::new()
        .param("age", "number")
        .param("status", "string")
        .param("search", "string")
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct UserQueryResponse {
    pub id: String,
    pub query: BTreeMap<String, String>,
}

// ==================
// Router
// ==================

/// Create users routes
pub fn users_routes(state: Arc<UsersState>) -> Router {
    Router::new()
        .route("/:id", get(get_user_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn get_user_handler(
    State(state): State<Arc<UsersState>>,
    Path(id): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<UserQueryResponse>, QueryRejection> {
    let observed: ObservedParams = pairs.into_iter().collect();
    let errors = state.validator.validate_query(&observed, state.rules());

    if let Some(rejection) = QueryRejection::from_errors(errors) {
        tracing::debug!(
            user_id = %id,
            error_count = rejection.errors().len(),
            "rejected users query"
        );
        return Err(rejection);
    }

    let query = observed
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    Ok(Json(UserQueryResponse { id, query }))
}
