// Entity Models
// "Identity persists, values change"
//
// - Client: caller-assigned id (identity) + profile values
// - Category: closed classification set every client carries

pub mod category;
pub mod client;

pub use category::Category;
pub use client::{Client, ClientKind, DEFAULT_VIP_DISCOUNT};
