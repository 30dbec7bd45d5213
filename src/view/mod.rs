//! Client-side view orchestration over the record API.

pub mod controller;

pub use controller::RecordView;
