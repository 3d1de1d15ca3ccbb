//! HTTP request handlers

use super::twiml::MessageReply;
use super::types::{ErrorResponse, InboundMessage, ListReviewsQuery, StatusResponse};
use super::AppState;
use crate::db::Review;
use crate::runtime::ReviewStore;
use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status))
        // Inbound messages from the messaging provider
        .route("/whatsapp/webhook", post(whatsapp_webhook))
        // Review listing for the dashboard
        .route("/api/reviews", get(list_reviews))
        .with_state(state)
}

async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "WhatsApp Review Collector API is running".to_string(),
    })
}

// ============================================================
// Inbound Webhook
// ============================================================

async fn whatsapp_webhook(
    State(state): State<AppState>,
    form: Result<Form<InboundMessage>, FormRejection>,
) -> Result<MessageReply, AppError> {
    let Form(message) = form.map_err(|e| AppError::BadRequest(e.body_text()))?;

    match state.runtime.handle_message(&message.from, &message.body).await {
        Ok(reply) => Ok(MessageReply::ok(reply)),
        Err(e) => Ok(MessageReply::internal_error(e.reply())),
    }
}

// ============================================================
// Review Listing
// ============================================================

async fn list_reviews(
    State(state): State<AppState>,
    query: Result<Query<ListReviewsQuery>, QueryRejection>,
) -> Result<Json<Vec<Review>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    if query.limit == 0 {
        return Err(AppError::BadRequest(
            "limit must be greater than 0".to_string(),
        ));
    }

    let reviews = state
        .runtime
        .reviews()
        .list_reviews(query.skip, query.limit)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(reviews))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
