//! AC200 EPHY Driver
//!
//! A `no_std`, `no_alloc` driver for the 10/100 Ethernet PHY embedded in the
//! X-Powers AC200 companion chip, as paired with Allwinner H6 SoCs.
//!
//! The EPHY is unusual in two ways. It sits behind the AC200's power and
//! reset gates, so it has to be switched on over the AC200 control bus before
//! it answers on MDIO at all. And it needs a factory calibration value that
//! lives in the host SoC's eFuse, not in the AC200.
//!
//! # Architecture
//!
//! 1. **Device Layer** ([`driver::ephy`]): probe/remove, power sequencing,
//!    registration with the host PHY framework
//! 2. **PHY Layer** ([`phy`]): [`Ac200Ephy`] MDIO tuning sequence and
//!    IEEE 802.3 link handling
//! 3. **HAL Layer** ([`hal`]): MDIO bus, AC200 control bus and NVMEM cell seams
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for error types and bring-up logging
//! - `critical-section`: Enable [`sync::SharedControl`] for sharing the AC200 bus
//!
//! # Example
//!
//! ```ignore
//! use ac200_ephy::{Ac200EphyDevice, EphyConfig, I2cControl, PhyDriver};
//! use ac200_ephy::boards::h6::{H6, SidCalibration};
//!
//! let ac200 = I2cControl::new(twi);
//! let mut sid = unsafe { SidCalibration::new(sid_base) };
//!
//! let mut device = Ac200EphyDevice::probe(ac200, &mut sid, &mut phylib, H6::ephy_config())?;
//!
//! // Once the MAC driver has bound the PHY
//! let mut phy = device.phy_driver();
//! phy.init(&mut mdio)?;
//! if let Some(link) = phy.poll_link(&mut mdio)? {
//!     mac.set_speed(link.speed);
//! }
//!
//! device.remove(&mut phylib)?;
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements,
    clippy::let_underscore_future
)]

// =============================================================================
// Modules
// =============================================================================

pub mod boards;
pub mod driver;
pub mod error;
pub mod hal;
pub mod phy;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::config::{DEFAULT_PHY_ADDR, Duplex, EphyConfig, PhyInterface, Speed};
pub use driver::ephy::{
    Ac200EphyDevice, COMPATIBLE, DRIVER_NAME, PhyDescriptor, PhyRegistry, State,
    matches_compatible,
};
pub use error::{
    CalibrationError, CalibrationResult, ConfigError, ConfigResult, Error, IoError, IoResult,
    Result,
};
pub use hal::{Ac200Control, Calibration, FixedCell, I2cControl, MdioBus, NvmemCell};

// Re-export PHY types
pub use phy::{Ac200Ephy, LinkStatus, PhyCapabilities, PhyDriver};

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedControl;

/// Register maps for advanced use.
///
/// These are separated from the primary facade. Most users should prefer
/// the driver APIs over touching AC200 or EPHY registers directly.
pub mod registers {
    /// AC200 control bus registers
    pub mod ac200 {
        pub use crate::internal::ac200_regs::{ephy_ctl, i2c, reg, sys_ephy_ctl0, sys_ephy_ctl1};
    }

    /// EPHY vendor MDIO registers
    pub mod ephy {
        pub use crate::internal::ephy_regs::{afe, bits, mmd, page, phy_id, reg};
    }
}
