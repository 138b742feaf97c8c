//! Client for the remote extraction API.
//!
//! DESIGN
//! ======
//! [`http`] is the one place requests are dispatched: it attaches the
//! bearer credential, classifies failures into [`error::ApiError`], and
//! fires the cross-cutting unauthorized hook. [`api`] holds one typed
//! function per endpoint; [`types`] mirrors the service's response
//! schemas.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
