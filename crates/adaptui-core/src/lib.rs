#![forbid(unsafe_code)]

//! Core data model for AdaptUI: detents, the detent resolver, and
//! presentation options.
//!
//! Everything in this crate is a pure value type or a pure function. The
//! stateful half of the system — the controller that turns a stream of
//! content measurements into stable detent state — lives in
//! `adaptui-runtime`, and the host-facing presentation surface lives in
//! `adaptui-widgets`.

pub mod detent;
pub mod geometry;
pub mod options;
pub mod resolve;

pub use detent::Detent;
pub use geometry::Size;
pub use options::{AdaptiveOptions, PlatformContext};
pub use resolve::{SHADOW_OFFSET, resolve};
