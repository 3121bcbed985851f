//! Business logic layered over the [`Store`](crate::store::Store).
//!
//! Services take the store by reference so handlers decide which lock
//! guard (read or write) they hold while calling in.

pub mod ordering;
pub mod recommendation;

pub use ordering::place_order;
pub use recommendation::recommend;
