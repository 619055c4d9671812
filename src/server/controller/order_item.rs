use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        order_item::{OrderItemListDto, OrderItemPayloadDto, OrderItemResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerIdentity},
        model::order_item::{CreateOrderItemParams, UpdateOrderItemParams},
        service::order_item::OrderItemService,
        state::AppState,
    },
};

/// Tag for grouping order item endpoints in OpenAPI documentation
pub static ORDER_ITEM_TAG: &str = "orderitem";

/// Add a line item to an order.
///
/// The total is computed as quantity times unit price.
///
/// # Access Control
/// - `Owner` - The parent order must belong to the caller
///
/// # Returns
/// - `201 Created` - The line item
/// - `400 Bad Request` - Invalid data or order belongs to another user
/// - `404 Not Found` - Order or merchandise does not exist
#[utoipa::path(
    post,
    path = "/api/v1/orderitem/create",
    tag = ORDER_ITEM_TAG,
    request_body = OrderItemPayloadDto,
    responses(
        (status = 201, description = "Order item created", body = OrderItemResponseDto),
        (status = 400, description = "Invalid data or order belongs to another user", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Order or merchandise not found", body = ErrorDto)
    ),
)]
pub async fn create_order_item(
    State(state): State<AppState>,
    identity: BearerIdentity,
    payload: Result<Json<OrderItemPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let Json(payload) = payload?;
    let params = CreateOrderItemParams::from_dto(payload)?;

    let item = OrderItemService::new(&state.db)
        .create(&caller, params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderItemResponseDto {
            message: Some("Order item created successfully".to_string()),
            order_item: item.into_dto(),
        }),
    ))
}

/// List the items of every order the caller owns.
#[utoipa::path(
    get,
    path = "/api/v1/orderitem",
    tag = ORDER_ITEM_TAG,
    responses(
        (status = 200, description = "The caller's order items", body = OrderItemListDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto)
    ),
)]
pub async fn get_order_items(
    State(state): State<AppState>,
    identity: BearerIdentity,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let items = OrderItemService::new(&state.db).get_all_for(&caller).await?;

    Ok((
        StatusCode::OK,
        Json(OrderItemListDto {
            order_items: items.into_iter().map(|i| i.into_dto()).collect(),
        }),
    ))
}

/// List the items of one order.
///
/// # Access Control
/// - `Owner` - The order must belong to the caller
#[utoipa::path(
    get,
    path = "/api/v1/orderitem/order/{order_id}",
    tag = ORDER_ITEM_TAG,
    params(("order_id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Items of the order", body = OrderItemListDto),
        (status = 400, description = "Order belongs to another user", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn get_order_items_by_order(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let items = OrderItemService::new(&state.db)
        .get_by_order(order_id, &caller)
        .await?;

    Ok((
        StatusCode::OK,
        Json(OrderItemListDto {
            order_items: items.into_iter().map(|i| i.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/orderitem/{id}",
    tag = ORDER_ITEM_TAG,
    params(("id" = i32, Path, description = "Order item ID")),
    responses(
        (status = 200, description = "The order item", body = OrderItemResponseDto),
        (status = 400, description = "Order belongs to another user", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Order item not found", body = ErrorDto)
    ),
)]
pub async fn get_order_item(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let item = OrderItemService::new(&state.db)
        .get_by_id(id, &caller)
        .await?
        .ok_or_else(|| AppError::NotFound("Order item not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(OrderItemResponseDto {
            message: None,
            order_item: item.into_dto(),
        }),
    ))
}

/// Edit a line item and recompute its total.
///
/// The parent order cannot be changed.
///
/// # Access Control
/// - `Owner` - The parent order must belong to the caller
#[utoipa::path(
    put,
    path = "/api/v1/orderitem/edit/{id}",
    tag = ORDER_ITEM_TAG,
    params(("id" = i32, Path, description = "Order item ID")),
    request_body = OrderItemPayloadDto,
    responses(
        (status = 200, description = "Order item updated", body = OrderItemResponseDto),
        (status = 400, description = "Invalid data or order belongs to another user", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Order item or merchandise not found", body = ErrorDto)
    ),
)]
pub async fn update_order_item(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
    payload: Result<Json<OrderItemPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let Json(payload) = payload?;
    let params = UpdateOrderItemParams::from_dto(payload)?;

    let item = OrderItemService::new(&state.db)
        .update(id, &caller, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Order item not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(OrderItemResponseDto {
            message: Some("Order item updated successfully".to_string()),
            order_item: item.into_dto(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/orderitem/delete/{id}",
    tag = ORDER_ITEM_TAG,
    params(("id" = i32, Path, description = "Order item ID")),
    responses(
        (status = 200, description = "Order item deleted", body = MessageDto),
        (status = 400, description = "Order belongs to another user", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Order item not found", body = ErrorDto)
    ),
)]
pub async fn delete_order_item(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    if !OrderItemService::new(&state.db).delete(id, &caller).await? {
        return Err(AppError::NotFound("Order item not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageDto::new("Order item deleted successfully"))))
}
