#![forbid(unsafe_code)]

//! `rs-people` — personnel records service.
//!
//! An HTTP record API over `SQLite` for the four personnel collections
//! (employees, payroll runs, job postings, time-off requests), plus the
//! generic data-grid model and client-side view controller the dashboard
//! renders them with.

pub mod config;
pub mod errors;
pub mod gateway;
pub mod http;
pub mod ident;
pub mod models;
pub mod store;
pub mod table;
pub mod transport;
pub mod view;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
