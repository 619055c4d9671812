//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of their parents explicitly, so a
//! test always states which foreign keys it relies on.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let squad = factory::squad::create_squad(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, merchandise, order, item) =
//!         factory::helpers::create_order_item_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@club.test")
//!     .role("admin")
//!     .build()
//!     .await?;
//! ```

pub mod event;
pub mod helpers;
pub mod merchandise;
pub mod order;
pub mod squad;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use event::{create_event, create_ticket};
pub use merchandise::create_merchandise;
pub use order::{create_order, create_order_item};
pub use squad::{create_player_statistic, create_squad};
pub use user::{create_admin, create_user};
