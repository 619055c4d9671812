use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        order::{OrderListDto, OrderPayloadDto, OrderResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerIdentity},
        model::order::{CreateOrderParams, UpdateOrderParams},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "orders";

/// Place an order.
///
/// The caller becomes the owner of the order.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    post,
    path = "/api/v1/orders/create",
    tag = ORDER_TAG,
    request_body = OrderPayloadDto,
    responses(
        (status = 201, description = "Order created", body = OrderResponseDto),
        (status = 400, description = "Invalid order data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    identity: BearerIdentity,
    payload: Result<Json<OrderPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let Json(payload) = payload?;
    let params = CreateOrderParams::from_dto(caller.id, payload)?;

    let order = OrderService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderResponseDto {
            message: Some("Order created successfully".to_string()),
            order: order.into_dto(),
        }),
    ))
}

/// List the caller's orders.
///
/// # Access Control
/// - Any authenticated user; only their own orders are returned
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "The caller's orders", body = OrderListDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    identity: BearerIdentity,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let orders = OrderService::new(&state.db).get_all_for(&caller).await?;

    Ok((
        StatusCode::OK,
        Json(OrderListDto {
            orders: orders.into_iter().map(|o| o.into_dto()).collect(),
        }),
    ))
}

/// Get one order.
///
/// # Access Control
/// - `Owner` - Only the user who placed the order
#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "The order", body = OrderResponseDto),
        (status = 400, description = "Order belongs to another user", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let order = OrderService::new(&state.db)
        .get_by_id(id, &caller)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(OrderResponseDto {
            message: None,
            order: order.into_dto(),
        }),
    ))
}

/// Edit an order.
///
/// # Access Control
/// - `Owner` - Only the user who placed the order
#[utoipa::path(
    put,
    path = "/api/v1/orders/edit/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    request_body = OrderPayloadDto,
    responses(
        (status = 200, description = "Order updated", body = OrderResponseDto),
        (status = 400, description = "Invalid data or order belongs to another user", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
    payload: Result<Json<OrderPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let Json(payload) = payload?;
    let params = UpdateOrderParams::from_dto(payload)?;

    let order = OrderService::new(&state.db)
        .update(id, &caller, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(OrderResponseDto {
            message: Some("Order updated successfully".to_string()),
            order: order.into_dto(),
        }),
    ))
}

/// Delete an order.
///
/// Fails with 400 while the order still has items.
///
/// # Access Control
/// - `Owner` - Only the user who placed the order
#[utoipa::path(
    delete,
    path = "/api/v1/orders/delete/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted", body = MessageDto),
        (status = 400, description = "Order belongs to another user or still has items", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    if !OrderService::new(&state.db).delete(id, &caller).await? {
        return Err(AppError::NotFound("Order not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageDto::new("Order deleted successfully"))))
}
