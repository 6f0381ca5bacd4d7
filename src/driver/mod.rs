//! Core driver components for the AC200 EPHY.
//!
//! - [`config`] - Configuration types and builder patterns
//! - [`ephy`] - Device lifecycle (probe/remove) and PHY registration
//!
//! # Example
//!
//! ```ignore
//! use ac200_ephy::driver::{Ac200EphyDevice, EphyConfig};
//!
//! let config = EphyConfig::new().with_phy_addr(1);
//! let device = Ac200EphyDevice::probe(ac200, &mut nvmem, &mut registry, config)?;
//! ```

// Submodules
pub mod config;
pub mod ephy;

// Re-exports for convenience
pub use config::{DEFAULT_PHY_ADDR, Duplex, EphyConfig, PhyInterface, Speed};
pub use ephy::{Ac200EphyDevice, PhyDescriptor, PhyRegistry, State};
