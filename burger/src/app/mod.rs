//! Application layer
//!
//! Use cases that combine the menu catalog with the burger aggregate.

pub mod order_service;

pub use order_service::OrderService;
