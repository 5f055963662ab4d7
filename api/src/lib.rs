//! HTTP transport layer for the AccountVault server
//!
//! actix-web routes, session middleware and request/response DTOs over the
//! services in `av_core`.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
