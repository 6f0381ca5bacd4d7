//! MDIO (Management Data Input/Output) HAL
//!
//! This module provides the bus abstraction used to talk to the AC200 EPHY.
//! The EPHY sits on the MDIO bus of the host SoC's Ethernet MAC, so the MAC
//! driver supplies the [`MdioBus`] implementation; this crate only drives
//! register sequences over it.
//!
//! Besides plain Clause 22 access, the helpers here cover the two indirect
//! access schemes the EPHY needs:
//!
//! - vendor register pages selected through register 0x1F
//! - Clause 45 MMD registers reached through registers 13/14

use crate::error::Result;

// =============================================================================
// MDIO Constants
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// This trait can be implemented by different backends, allowing
/// the PHY driver to work with any MAC that exposes a management interface.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;

    /// Read-modify-write a PHY register
    ///
    /// Bits in `clear` are cleared before bits in `set` are set.
    fn modify(&mut self, phy_addr: u8, reg_addr: u8, clear: u16, set: u16) -> Result<()> {
        let value = self.read(phy_addr, reg_addr)?;
        self.write(phy_addr, reg_addr, (value & !clear) | set)
    }
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg_addr, value)
    }
}

// =============================================================================
// PHY Register Definitions (IEEE 802.3 standard registers)
// =============================================================================

/// Standard PHY register addresses (IEEE 802.3 Clause 22)
pub mod phy_reg {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 1;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 2;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 3;
    /// Auto-Negotiation Advertisement Register
    pub const ANAR: u8 = 4;
    /// Auto-Negotiation Link Partner Ability Register
    pub const ANLPAR: u8 = 5;
    /// Auto-Negotiation Expansion Register
    pub const ANER: u8 = 6;
    /// MMD Access Control Register
    pub const MMD_CTRL: u8 = 13;
    /// MMD Access Data Register
    pub const MMD_DATA: u8 = 14;
    /// Extended Status Register
    pub const ESTATUS: u8 = 15;
}

/// BMCR (Basic Mode Control Register) bits
pub mod bmcr {
    /// Soft reset
    pub const RESET: u16 = 1 << 15;
    /// Loopback mode
    pub const LOOPBACK: u16 = 1 << 14;
    /// Speed select (100 Mbps if set)
    pub const SPEED_100: u16 = 1 << 13;
    /// Auto-negotiation enable
    pub const AN_ENABLE: u16 = 1 << 12;
    /// Power down
    pub const POWER_DOWN: u16 = 1 << 11;
    /// Isolate
    pub const ISOLATE: u16 = 1 << 10;
    /// Restart auto-negotiation
    pub const AN_RESTART: u16 = 1 << 9;
    /// Duplex mode (full duplex if set)
    pub const DUPLEX_FULL: u16 = 1 << 8;
}

/// BMSR (Basic Mode Status Register) bits
pub mod bmsr {
    /// 100BASE-TX full duplex capable
    pub const TX_FD_CAPABLE: u16 = 1 << 14;
    /// 100BASE-TX half duplex capable
    pub const TX_HD_CAPABLE: u16 = 1 << 13;
    /// 10BASE-T full duplex capable
    pub const T10_FD_CAPABLE: u16 = 1 << 12;
    /// 10BASE-T half duplex capable
    pub const T10_HD_CAPABLE: u16 = 1 << 11;
    /// Auto-negotiation complete
    pub const AN_COMPLETE: u16 = 1 << 5;
    /// Remote fault
    pub const REMOTE_FAULT: u16 = 1 << 4;
    /// Auto-negotiation ability
    pub const AN_ABILITY: u16 = 1 << 3;
    /// Link status
    pub const LINK_STATUS: u16 = 1 << 2;
    /// Extended capabilities
    pub const EXT_CAPABLE: u16 = 1 << 0;
}

/// ANAR (Auto-Negotiation Advertisement Register) bits
///
/// ANLPAR shares this layout for the link partner's abilities.
pub mod anar {
    /// Pause capable
    pub const PAUSE: u16 = 1 << 10;
    /// 100BASE-TX full duplex
    pub const TX_FD: u16 = 1 << 8;
    /// 100BASE-TX half duplex
    pub const TX_HD: u16 = 1 << 7;
    /// 10BASE-T full duplex
    pub const T10_FD: u16 = 1 << 6;
    /// 10BASE-T half duplex
    pub const T10_HD: u16 = 1 << 5;
    /// IEEE 802.3 selector value
    pub const SELECTOR_IEEE802_3: u16 = 0x0001;
}

/// MMD access control register (13) fields
pub mod mmd_ctrl {
    /// Function: address
    pub const FUNC_ADDR: u16 = 0x0000;
    /// Function: data, no post increment
    pub const FUNC_DATA: u16 = 1 << 14;
    /// Device address mask
    pub const DEVAD_MASK: u16 = 0x001F;
}

// =============================================================================
// Indirect Access Helpers
// =============================================================================

/// Vendor page select register
pub const PAGE_SELECT_REG: u8 = 0x1F;

/// Select a vendor register page
///
/// The page number is carried in the high byte of register 0x1F.
pub fn select_page<M: MdioBus>(mdio: &mut M, phy_addr: u8, page: u8) -> Result<()> {
    mdio.write(phy_addr, PAGE_SELECT_REG, (page as u16) << 8)
}

/// Issue the address phase of a Clause 45 over Clause 22 access
fn mmd_address<M: MdioBus>(mdio: &mut M, phy_addr: u8, devad: u8, reg: u16) -> Result<()> {
    let devad = devad as u16 & mmd_ctrl::DEVAD_MASK;
    mdio.write(phy_addr, phy_reg::MMD_CTRL, mmd_ctrl::FUNC_ADDR | devad)?;
    mdio.write(phy_addr, phy_reg::MMD_DATA, reg)?;
    mdio.write(phy_addr, phy_reg::MMD_CTRL, mmd_ctrl::FUNC_DATA | devad)
}

/// Read an MMD register through registers 13/14
pub fn mmd_read<M: MdioBus>(mdio: &mut M, phy_addr: u8, devad: u8, reg: u16) -> Result<u16> {
    mmd_address(mdio, phy_addr, devad, reg)?;
    mdio.read(phy_addr, phy_reg::MMD_DATA)
}

/// Write an MMD register through registers 13/14
pub fn mmd_write<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    devad: u8,
    reg: u16,
    value: u16,
) -> Result<()> {
    mmd_address(mdio, phy_addr, devad, reg)?;
    mdio.write(phy_addr, phy_reg::MMD_DATA, value)
}

// =============================================================================
// Unit Tests
// =============================================================================
