#![forbid(unsafe_code)]

//! Host-facing overlay surfaces for AdaptUI.
//!
//! A [`SheetSurface`] wraps an adaptation controller with everything a
//! host overlay mechanism needs to present it: the offered detent set,
//! dismiss policy, bottom-pinned accessory plumbing, and per-kind presets
//! (sheet, alert, navigation sheet, navigation list). Rendering chrome is
//! the host's business; this crate only carries the data chrome reads.

pub mod accessory;
pub mod detent_set;
pub mod sheet;

pub use accessory::AccessorySlot;
pub use detent_set::DetentSet;
pub use sheet::{SheetAction, SheetConfig, SheetKind, SheetSurface};
