//! Core types for Recmart.
//!
//! Records as stored and returned by the API, plus the request payloads
//! used to create them.

pub mod id;
pub mod order;
pub mod product;
pub mod user;

pub use id::*;
pub use order::{NewOrder, Order, Orderline};
pub use product::{NewProduct, Product};
pub use user::{NewUser, User};
