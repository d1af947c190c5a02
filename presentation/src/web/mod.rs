//! Web form UI
//!
//! A single-page form: one text field in, one answer field out, with a
//! static set of example questions. Errors surface in the same output field
//! as answers (`Error: ...`) — the handler never fails.

mod page;
mod routes;

pub use routes::{router, serve};
