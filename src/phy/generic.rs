//! Generic PHY Driver Trait
//!
//! This module defines the common interface for Ethernet PHY drivers,
//! based on IEEE 802.3 Clause 22 standard registers.

use crate::driver::config::{Duplex, Speed};
use crate::error::{IoError, Result};
use crate::hal::mdio::MdioBus;

// =============================================================================
// Link Status
// =============================================================================

/// Ethernet link status information
///
/// Contains the negotiated or configured link parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    /// Link speed
    pub speed: Speed,
    /// Duplex mode
    pub duplex: Duplex,
}

impl LinkStatus {
    /// Create a new link status
    pub const fn new(speed: Speed, duplex: Duplex) -> Self {
        Self { speed, duplex }
    }

    /// 10 Mbps Half Duplex
    pub const fn slow_half() -> Self {
        Self::new(Speed::Mbps10, Duplex::Half)
    }
}

// =============================================================================
// PHY Capabilities
// =============================================================================

/// PHY hardware capabilities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyCapabilities {
    /// Supports 100BASE-TX Full Duplex
    pub speed_100_fd: bool,
    /// Supports 100BASE-TX Half Duplex
    pub speed_100_hd: bool,
    /// Supports 10BASE-T Full Duplex
    pub speed_10_fd: bool,
    /// Supports 10BASE-T Half Duplex
    pub speed_10_hd: bool,
    /// Supports auto-negotiation
    pub auto_negotiation: bool,
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// Trait for Ethernet PHY drivers
///
/// This trait defines the common interface for all PHY drivers. Implementations
/// handle chip-specific initialization; the rest usually forwards to the
/// [`ieee802_3`] helpers.
pub trait PhyDriver {
    /// Get the PHY address (0-31)
    fn address(&self) -> u8;

    /// Initialize the PHY
    ///
    /// Runs the chip-specific configuration sequence. Called by the host
    /// framework after the PHY has been bound and reset.
    fn init<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Perform a soft reset
    ///
    /// Writes to BMCR.RESET and waits for it to self-clear.
    fn soft_reset<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Enter low-power mode (BMCR.POWER_DOWN)
    fn suspend<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Leave low-power mode
    fn resume<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Check if the link is up
    fn is_link_up<M: MdioBus>(&self, mdio: &mut M) -> Result<bool>;

    /// Get current link status with speed/duplex
    ///
    /// Returns `None` if link is down.
    fn link_status<M: MdioBus>(&self, mdio: &mut M) -> Result<Option<LinkStatus>>;

    /// Poll for link changes
    ///
    /// Returns `Some(LinkStatus)` when a new link is established,
    /// `None` if link is still down or unchanged.
    fn poll_link<M: MdioBus>(&mut self, mdio: &mut M) -> Result<Option<LinkStatus>>;

    /// Enable and restart auto-negotiation
    fn enable_auto_negotiation<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Force specific speed and duplex
    fn force_link<M: MdioBus>(&mut self, mdio: &mut M, status: LinkStatus) -> Result<()>;

    /// Get PHY capabilities
    fn capabilities<M: MdioBus>(&self, mdio: &mut M) -> Result<PhyCapabilities>;

    /// Read the PHY identifier
    ///
    /// Returns a 32-bit value: `(PHYIDR1 << 16) | PHYIDR2`
    fn phy_id<M: MdioBus>(&self, mdio: &mut M) -> Result<u32>;

    /// Check if auto-negotiation is complete
    fn is_auto_negotiation_complete<M: MdioBus>(&self, mdio: &mut M) -> Result<bool>;
}

// =============================================================================
// Default Implementations
// =============================================================================

/// Helper functions using standard IEEE 802.3 registers
pub mod ieee802_3 {
    use super::*;
    use crate::hal::mdio::{anar, bmcr, bmsr, phy_reg};

    /// Read BMSR and check link status bit
    pub fn is_link_up<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::LINK_STATUS) != 0)
    }

    /// Read BMSR and check AN complete bit
    pub fn is_an_complete<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::AN_COMPLETE) != 0)
    }

    /// Perform soft reset via BMCR
    ///
    /// Keeps auto-negotiation restarting if it was enabled. Fails with
    /// [`IoError::Timeout`] if the reset bit has not cleared after
    /// `max_attempts` reads.
    pub fn soft_reset<M: MdioBus>(mdio: &mut M, phy_addr: u8, max_attempts: u32) -> Result<()> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        let mut reset = bmcr_val | bmcr::RESET;
        if bmcr_val & bmcr::AN_ENABLE != 0 {
            reset |= bmcr::AN_RESTART;
        }
        mdio.write(phy_addr, phy_reg::BMCR, reset)?;

        for _ in 0..max_attempts {
            let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
            if (bmcr_val & bmcr::RESET) == 0 {
                return Ok(());
            }
        }

        Err(IoError::Timeout.into())
    }

    /// Set BMCR.POWER_DOWN
    pub fn suspend<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        mdio.modify(phy_addr, phy_reg::BMCR, 0, bmcr::POWER_DOWN)
    }

    /// Clear BMCR.POWER_DOWN
    pub fn resume<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        mdio.modify(phy_addr, phy_reg::BMCR, bmcr::POWER_DOWN, 0)
    }

    /// Enable auto-negotiation and restart
    pub fn enable_auto_negotiation<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        mdio.modify(
            phy_addr,
            phy_reg::BMCR,
            bmcr::ISOLATE,
            bmcr::AN_ENABLE | bmcr::AN_RESTART,
        )
    }

    /// Force speed and duplex
    pub fn force_link<M: MdioBus>(mdio: &mut M, phy_addr: u8, status: LinkStatus) -> Result<()> {
        let mut bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;

        // Disable auto-negotiation
        bmcr_val &= !(bmcr::AN_ENABLE | bmcr::ISOLATE);

        if matches!(status.speed, Speed::Mbps100) {
            bmcr_val |= bmcr::SPEED_100;
        } else {
            bmcr_val &= !bmcr::SPEED_100;
        }

        if matches!(status.duplex, Duplex::Full) {
            bmcr_val |= bmcr::DUPLEX_FULL;
        } else {
            bmcr_val &= !bmcr::DUPLEX_FULL;
        }

        mdio.write(phy_addr, phy_reg::BMCR, bmcr_val)
    }

    /// Read PHY ID from PHYIDR1 and PHYIDR2
    pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
        let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)? as u32;
        let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)? as u32;
        Ok((id1 << 16) | id2)
    }

    /// Read capabilities from BMSR
    pub fn read_capabilities<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<PhyCapabilities> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;

        Ok(PhyCapabilities {
            speed_100_fd: (bmsr_val & bmsr::TX_FD_CAPABLE) != 0,
            speed_100_hd: (bmsr_val & bmsr::TX_HD_CAPABLE) != 0,
            speed_10_fd: (bmsr_val & bmsr::T10_FD_CAPABLE) != 0,
            speed_10_hd: (bmsr_val & bmsr::T10_HD_CAPABLE) != 0,
            auto_negotiation: (bmsr_val & bmsr::AN_ABILITY) != 0,
        })
    }

    /// Resolve the link mode currently in effect
    ///
    /// With auto-negotiation enabled this is the best mode both ends
    /// advertise; otherwise it is the mode forced through BMCR.
    pub fn resolve_link_status<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<LinkStatus> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        if bmcr_val & bmcr::AN_ENABLE == 0 {
            return link_status_from_bmcr(mdio, phy_addr);
        }
        link_status_from_negotiation(mdio, phy_addr)
    }

    /// Get link status from the common ANAR/ANLPAR abilities
    ///
    /// Priority: 100 FD, 100 HD, 10 FD, 10 HD.
    pub fn link_status_from_negotiation<M: MdioBus>(
        mdio: &mut M,
        phy_addr: u8,
    ) -> Result<LinkStatus> {
        let adv = mdio.read(phy_addr, phy_reg::ANAR)?;
        let lpa = mdio.read(phy_addr, phy_reg::ANLPAR)?;
        let common = adv & lpa;

        let status = if common & anar::TX_FD != 0 {
            LinkStatus::new(Speed::Mbps100, Duplex::Full)
        } else if common & anar::TX_HD != 0 {
            LinkStatus::new(Speed::Mbps100, Duplex::Half)
        } else if common & anar::T10_FD != 0 {
            LinkStatus::new(Speed::Mbps10, Duplex::Full)
        } else {
            LinkStatus::slow_half()
        };
        Ok(status)
    }

    /// Get link status from BMCR
    ///
    /// Only meaningful when auto-negotiation is disabled.
    pub fn link_status_from_bmcr<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<LinkStatus> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;

        let speed = if (bmcr_val & bmcr::SPEED_100) != 0 {
            Speed::Mbps100
        } else {
            Speed::Mbps10
        };

        let duplex = if (bmcr_val & bmcr::DUPLEX_FULL) != 0 {
            Duplex::Full
        } else {
            Duplex::Half
        };

        Ok(LinkStatus::new(speed, duplex))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
