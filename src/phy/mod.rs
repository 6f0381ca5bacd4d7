//! Ethernet PHY Drivers
//!
//! The PHY layer talks to the EPHY only through the [`MdioBus`] interface
//! (plus the AC200 control bus for the one setting that lives in the parent
//! chip). This allows:
//!
//! - Reuse with any host MAC that exposes MDIO
//! - Testing with mock MDIO implementations
//!
//! # Example
//!
//! ```ignore
//! use ac200_ephy::phy::{Ac200Ephy, PhyDriver};
//!
//! let mut phy = device.phy_driver();
//! phy.soft_reset(&mut mdio)?;
//! phy.init(&mut mdio)?;
//!
//! loop {
//!     if let Some(link) = phy.poll_link(&mut mdio)? {
//!         mac.set_speed(link.speed);
//!         break;
//!     }
//! }
//! ```
//!
//! [`MdioBus`]: crate::hal::mdio::MdioBus

pub mod ac200;
pub mod generic;

pub use ac200::{AC200_EPHY_ID, AC200_EPHY_ID_MASK, AC200_EPHY_NAME, Ac200Ephy};
pub use generic::{LinkStatus, PhyCapabilities, PhyDriver};
