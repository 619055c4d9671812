use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth, contact, donation, event, index, merchandise, order, order_item, player_statistic,
        squad, ticket, user,
    },
    doc::ApiDoc,
    state::AppState,
};

/// Swagger UI mount point.
pub const DOCS_PATH: &str = "/api/docs";

/// Location of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api/openapi.json";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .nest("/api/v1/user", user_routes())
        .nest("/api/v1/contacts", contact_routes())
        .nest("/api/v1/donation", donation_routes())
        .nest("/api/v1/squad", squad_routes())
        .nest("/api/v1/playerstatistics", player_statistic_routes())
        .nest("/api/v1/event", event_routes())
        .nest("/api/v1/ticket", ticket_routes())
        .nest("/api/v1/merchandise", merchandise_routes())
        .nest("/api/v1/orders", order_routes())
        .nest("/api/v1/orderitem", order_item_routes())
        .merge(collection_routes())
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
}

/// Read-all on the collection path with a trailing slash.
///
/// A nested `/` route only matches the bare prefix, so `/api/v1/<resource>/` is routed
/// here explicitly.
fn collection_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/user/", get(user::get_users))
        .route("/api/v1/contacts/", get(contact::get_contacts))
        .route("/api/v1/donation/", get(donation::get_donations))
        .route("/api/v1/squad/", get(squad::get_squads))
        .route(
            "/api/v1/playerstatistics/",
            get(player_statistic::get_statistics),
        )
        .route("/api/v1/event/", get(event::get_events))
        .route("/api/v1/ticket/", get(ticket::get_tickets))
        .route("/api/v1/merchandise/", get(merchandise::get_merchandises))
        .route("/api/v1/orders/", get(order::get_orders))
        .route("/api/v1/orderitem/", get(order_item::get_order_items))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/", get(user::get_users))
        .route("/users", get(user::get_users))
        .route("/{id}", get(user::get_user))
        .route("/user/{id}", get(user::get_user))
        .route("/edit/{id}", put(user::update_user).patch(user::update_user))
        .route("/delete/{id}", delete(user::delete_user))
}

fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(contact::create_contact))
        .route("/", get(contact::get_contacts))
        .route("/{id}", get(contact::get_contact))
        .route(
            "/edit/{id}",
            put(contact::update_contact).patch(contact::update_contact),
        )
        .route("/delete/{id}", delete(contact::delete_contact))
}

fn donation_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(donation::create_donation))
        .route("/", get(donation::get_donations))
        .route("/{id}", get(donation::get_donation))
        .route(
            "/edit/{id}",
            put(donation::update_donation).patch(donation::update_donation),
        )
        .route("/delete/{id}", delete(donation::delete_donation))
}

fn squad_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(squad::create_squad))
        .route("/", get(squad::get_squads))
        .route("/squads", get(squad::get_squads))
        .route("/{id}", get(squad::get_squad))
        .route("/squad/{id}", get(squad::get_squad))
        .route("/edit/{id}", put(squad::update_squad).patch(squad::update_squad))
        .route("/delete/{id}", delete(squad::delete_squad))
}

fn player_statistic_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(player_statistic::create_statistic))
        .route("/", get(player_statistic::get_statistics))
        .route("/playerstatistics", get(player_statistic::get_statistics))
        .route("/{id}", get(player_statistic::get_statistic))
        .route(
            "/squad/{squad_id}",
            get(player_statistic::get_statistics_by_squad),
        )
        .route(
            "/edit/{id}",
            put(player_statistic::update_statistic).patch(player_statistic::update_statistic),
        )
        .route(
            "/edit/squad/{squad_id}",
            put(player_statistic::update_statistics_by_squad)
                .patch(player_statistic::update_statistics_by_squad),
        )
        .route("/delete/{id}", delete(player_statistic::delete_statistic))
        .route(
            "/delete/squad/{squad_id}",
            delete(player_statistic::delete_statistics_by_squad),
        )
}

fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(event::create_event))
        .route("/", get(event::get_events))
        .route("/{id}", get(event::get_event))
        .route("/edit/{id}", put(event::update_event).patch(event::update_event))
        .route("/delete/{id}", delete(event::delete_event))
}

fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(ticket::create_ticket))
        .route("/", get(ticket::get_tickets))
        .route("/{id}", get(ticket::get_ticket))
        .route("/edit/{id}", put(ticket::update_ticket).patch(ticket::update_ticket))
        .route("/delete/{id}", delete(ticket::delete_ticket))
        .route("/tickets/{id}", delete(ticket::delete_ticket))
}

fn merchandise_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(merchandise::create_merchandise))
        .route("/", get(merchandise::get_merchandises))
        .route("/merchandise", get(merchandise::get_merchandises))
        .route("/{id}", get(merchandise::get_merchandise))
        .route("/merchandise/{id}", get(merchandise::get_merchandise))
        .route(
            "/edit/{id}",
            put(merchandise::update_merchandise).patch(merchandise::update_merchandise),
        )
        .route("/delete/{id}", delete(merchandise::delete_merchandise))
}

fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(order::create_order))
        .route("/", get(order::get_orders))
        .route("/{id}", get(order::get_order))
        .route("/edit/{id}", put(order::update_order).patch(order::update_order))
        .route("/delete/{id}", delete(order::delete_order))
}

fn order_item_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(order_item::create_order_item))
        .route("/", get(order_item::get_order_items))
        .route("/{id}", get(order_item::get_order_item))
        .route(
            "/order/{order_id}",
            get(order_item::get_order_items_by_order),
        )
        .route(
            "/edit/{id}",
            put(order_item::update_order_item).patch(order_item::update_order_item),
        )
        .route("/delete/{id}", delete(order_item::delete_order_item))
}
