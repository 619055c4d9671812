//! Test support for the clubhouse backend.
//!
//! Every test gets its own in-memory SQLite database holding just the tables it asks for.
//! Tables are registered on a [`builder::TestBuilder`], which produces a
//! [`context::TestContext`] owning the connection. The [`factory`] module inserts rows
//! with valid defaults so a test only spells out the columns it cares about.
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn orders_belong_to_their_user() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_order_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     let order = factory::create_order(db, user.id).await?;
//!     assert_eq!(order.user_id, user.id);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
