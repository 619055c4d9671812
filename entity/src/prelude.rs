pub use super::contact::Entity as Contact;
pub use super::donation::Entity as Donation;
pub use super::event::Entity as Event;
pub use super::merchandise::Entity as Merchandise;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::player_statistic::Entity as PlayerStatistic;
pub use super::squad::Entity as Squad;
pub use super::ticket::Entity as Ticket;
pub use super::user::Entity as User;
