//! HTTP handlers, one module per resource family.
//!
//! Handlers authenticate through `BearerIdentity`, authorize through `AuthGuard`, convert
//! payload DTOs into validated params and wrap service results in response envelopes.

pub mod auth;
pub mod contact;
pub mod donation;
pub mod event;
pub mod merchandise;
pub mod order;
pub mod order_item;
pub mod player_statistic;
pub mod squad;
pub mod ticket;
pub mod user;

#[cfg(test)]
mod test;

/// Tag for grouping service-level endpoints in OpenAPI documentation
pub static INDEX_TAG: &str = "index";

/// Service banner.
///
/// # Returns
/// - `200 OK` - Plain-text banner
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "Service banner", body = String, content_type = "text/plain")
    ),
)]
pub async fn index() -> &'static str {
    "Website Api"
}
