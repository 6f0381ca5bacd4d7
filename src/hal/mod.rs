//! Hardware Abstraction Layer
//!
//! This module defines the three hardware seams the EPHY driver works
//! through. The driver never touches hardware directly; the integrator
//! supplies implementations for each seam.
//!
//! # Modules
//!
//! - [`mdio`]: MDIO bus to the EPHY (provided by the host MAC driver)
//! - [`control`]: Register map of the AC200 parent chip, with an I2C backend
//! - [`nvmem`]: Named one-time-programmable cells holding the calibration value

pub mod control;
pub mod mdio;
pub mod nvmem;

// Re-export commonly used types
pub use control::{Ac200Control, I2cControl};
pub use mdio::MdioBus;
pub use nvmem::{Calibration, FixedCell, NvmemCell};
