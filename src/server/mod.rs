//! HTTP backend of the club: routing, access control, business rules and persistence.
//!
//! A request passes through the layers top to bottom:
//!
//! - `router` maps `/api/v1/<resource>` paths to `controller` handlers
//! - `middleware` recovers the caller from the bearer token and checks permissions
//! - `controller` turns payload DTOs into validated `model` params and shapes envelopes
//! - `service` applies existence and ownership rules inside one transaction
//! - `data` repositories run the queries and convert entities into domain models
//!
//! `config`, `state` and `startup` assemble the application, `error` maps every failure
//! onto a status code and `doc` serves the OpenAPI document.

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
