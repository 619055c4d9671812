//! OpenAPI document for the REST API.
//!
//! Registers every handler annotated with `#[utoipa::path]` together with the DTO schemas
//! and a bearer token security scheme. The router serves the document next to Swagger UI.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        contact::{ContactDto, ContactListDto, ContactPayloadDto, ContactResponseDto},
        donation::{DonationDto, DonationListDto, DonationPayloadDto, DonationResponseDto},
        event::{EventDto, EventListDto, EventPayloadDto, EventResponseDto},
        merchandise::{
            MerchandiseDto, MerchandiseListDto, MerchandisePayloadDto, MerchandiseResponseDto,
        },
        order::{OrderDto, OrderListDto, OrderPayloadDto, OrderResponseDto},
        order_item::{OrderItemDto, OrderItemListDto, OrderItemPayloadDto, OrderItemResponseDto},
        player_statistic::{
            PlayerStatisticDto, PlayerStatisticListDto, PlayerStatisticPayloadDto,
            PlayerStatisticResponseDto,
        },
        squad::{SquadDto, SquadListDto, SquadPayloadDto, SquadResponseDto},
        ticket::{TicketDto, TicketListDto, TicketPayloadDto, TicketResponseDto},
        user::{
            LoginDto, LoginResponseDto, UserDto, UserListDto, UserPayloadDto, UserResponseDto,
        },
    },
    server::controller,
};

/// Name of the bearer token security scheme.
pub const BEARER_SCHEME: &str = "bearer";

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Access token issued by POST /api/v1/user/login."))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Clubhouse API",
        description = "Members, squad, events, tickets, shop and orders of the club."
    ),
    security(("bearer" = [])),
    paths(
        controller::index,
        controller::auth::register,
        controller::auth::login,
        controller::user::get_users,
        controller::user::get_user,
        controller::user::update_user,
        controller::user::delete_user,
        controller::contact::create_contact,
        controller::contact::get_contacts,
        controller::contact::get_contact,
        controller::contact::update_contact,
        controller::contact::delete_contact,
        controller::donation::create_donation,
        controller::donation::get_donations,
        controller::donation::get_donation,
        controller::donation::update_donation,
        controller::donation::delete_donation,
        controller::squad::create_squad,
        controller::squad::get_squads,
        controller::squad::get_squad,
        controller::squad::update_squad,
        controller::squad::delete_squad,
        controller::player_statistic::create_statistic,
        controller::player_statistic::get_statistics,
        controller::player_statistic::get_statistic,
        controller::player_statistic::get_statistics_by_squad,
        controller::player_statistic::update_statistic,
        controller::player_statistic::update_statistics_by_squad,
        controller::player_statistic::delete_statistic,
        controller::player_statistic::delete_statistics_by_squad,
        controller::event::create_event,
        controller::event::get_events,
        controller::event::get_event,
        controller::event::update_event,
        controller::event::delete_event,
        controller::ticket::create_ticket,
        controller::ticket::get_tickets,
        controller::ticket::get_ticket,
        controller::ticket::update_ticket,
        controller::ticket::delete_ticket,
        controller::merchandise::create_merchandise,
        controller::merchandise::get_merchandises,
        controller::merchandise::get_merchandise,
        controller::merchandise::update_merchandise,
        controller::merchandise::delete_merchandise,
        controller::order::create_order,
        controller::order::get_orders,
        controller::order::get_order,
        controller::order::update_order,
        controller::order::delete_order,
        controller::order_item::create_order_item,
        controller::order_item::get_order_items,
        controller::order_item::get_order_items_by_order,
        controller::order_item::get_order_item,
        controller::order_item::update_order_item,
        controller::order_item::delete_order_item,
    ),
    components(schemas(
        ErrorDto, MessageDto,
        UserDto, UserPayloadDto, UserResponseDto, UserListDto, LoginDto, LoginResponseDto,
        ContactDto, ContactPayloadDto, ContactResponseDto, ContactListDto,
        DonationDto, DonationPayloadDto, DonationResponseDto, DonationListDto,
        SquadDto, SquadPayloadDto, SquadResponseDto, SquadListDto,
        PlayerStatisticDto, PlayerStatisticPayloadDto, PlayerStatisticResponseDto,
        PlayerStatisticListDto,
        EventDto, EventPayloadDto, EventResponseDto, EventListDto,
        TicketDto, TicketPayloadDto, TicketResponseDto, TicketListDto,
        MerchandiseDto, MerchandisePayloadDto, MerchandiseResponseDto, MerchandiseListDto,
        OrderDto, OrderPayloadDto, OrderResponseDto, OrderListDto,
        OrderItemDto, OrderItemPayloadDto, OrderItemResponseDto, OrderItemListDto,
    )),
    tags(
        (name = "index", description = "Service banner"),
        (name = "auth", description = "Registration and login"),
        (name = "user", description = "Member accounts"),
        (name = "contacts", description = "Contact form submissions"),
        (name = "donation", description = "Donations"),
        (name = "squad", description = "Squad players"),
        (name = "playerstatistics", description = "Per-player match statistics"),
        (name = "event", description = "Club events"),
        (name = "ticket", description = "Event tickets"),
        (name = "merchandise", description = "Shop items"),
        (name = "orders", description = "Shop orders of the caller"),
        (name = "orderitem", description = "Line items of the caller's orders")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_resource_paths() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/v1/user/login",
            "/api/v1/contacts/create",
            "/api/v1/squad/{id}",
            "/api/v1/playerstatistics/squad/{squad_id}",
            "/api/v1/orderitem/order/{order_id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn document_declares_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key(BEARER_SCHEME));
    }
}
