pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users_table;
mod m20250101_000002_create_contacts_table;
mod m20250101_000003_create_donations_table;
mod m20250101_000004_create_squads_table;
mod m20250101_000005_create_player_statistics_table;
mod m20250101_000006_create_events_table;
mod m20250101_000007_create_tickets_table;
mod m20250101_000008_create_merchandise_table;
mod m20250101_000009_create_orders_table;
mod m20250101_000010_create_order_items_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users_table::Migration),
            Box::new(m20250101_000002_create_contacts_table::Migration),
            Box::new(m20250101_000003_create_donations_table::Migration),
            Box::new(m20250101_000004_create_squads_table::Migration),
            Box::new(m20250101_000005_create_player_statistics_table::Migration),
            Box::new(m20250101_000006_create_events_table::Migration),
            Box::new(m20250101_000007_create_tickets_table::Migration),
            Box::new(m20250101_000008_create_merchandise_table::Migration),
            Box::new(m20250101_000009_create_orders_table::Migration),
            Box::new(m20250101_000010_create_order_items_table::Migration),
        ]
    }
}
