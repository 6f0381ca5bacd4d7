//! Synchronization Support
//!
//! - **Primitives** (`primitives`): [`CriticalSectionCell`], ISR-safe
//!   interior mutability
//! - **Shared Wrappers** (`shared`): [`SharedControl`], an AC200 control bus
//!   shared between the chip's function drivers
//!
//! # Feature Flags
//!
//! - `critical-section`: Enables this module
//!
//! # Example
//!
//! ```ignore
//! use ac200_ephy::sync::SharedControl;
//!
//! static AC200: SharedControl<MyAc200Bus> = SharedControl::new(MyAc200Bus::new());
//!
//! fn main() {
//!     let device = Ac200EphyDevice::probe(&AC200, &mut sid, &mut registry, config).unwrap();
//! }
//! ```

mod primitives;

pub use primitives::CriticalSectionCell;

mod shared;

pub use shared::SharedControl;
