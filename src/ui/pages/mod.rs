//! Per-page rendering. Each function builds one page of the demo from the
//! transient state it is handed; none holds state of its own.

pub mod admin;
pub mod insight;
pub mod overview;
pub mod services;
pub mod trade;
