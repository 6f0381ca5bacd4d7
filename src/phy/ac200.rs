//! AC200 EPHY Driver
//!
//! Driver for the 10/100 Ethernet PHY embedded in the X-Powers AC200
//! companion chip (found next to Allwinner H6 SoCs).
//!
//! The EPHY itself is a plain Clause 22 PHY on the host MAC's MDIO bus, but
//! it powers up with vendor features that break links on most boards:
//! auto power saving, "Intelligent IEEE" and 802.3az EEE. [`Ac200Ephy::init`]
//! disables all three, applies the vendor's analog front-end tuning and
//! selects MII or RMII inside the AC200.
//!
//! # Register Pages
//!
//! Vendor registers 16-30 are banked. Writing `page << 8` to register 0x1F
//! selects the bank; page 0 holds the standard view.
//!
//! # Example
//!
//! ```ignore
//! use ac200_ephy::phy::{Ac200Ephy, PhyDriver};
//! use ac200_ephy::PhyInterface;
//!
//! let mut phy = Ac200Ephy::new(1, PhyInterface::Rmii, &mut ac200);
//! if phy.matches_id(&mut mdio)? {
//!     phy.soft_reset(&mut mdio)?;
//!     phy.init(&mut mdio)?;
//! }
//! ```

use crate::driver::config::PhyInterface;
use crate::error::Result;
use crate::hal::control::Ac200Control;
use crate::hal::mdio::{self, MdioBus};
use crate::internal::ac200_regs::{ephy_ctl, reg as ac200_reg};
use crate::internal::ephy_regs::{afe, bits, mmd, page, phy_id, reg};

use super::generic::{LinkStatus, PhyCapabilities, PhyDriver, ieee802_3};

// =============================================================================
// AC200 EPHY Constants
// =============================================================================

/// AC200 EPHY identifier
pub const AC200_EPHY_ID: u32 = phy_id::ID;
/// PHY ID mask (ignores revision bits)
pub const AC200_EPHY_ID_MASK: u32 = phy_id::MASK;
/// Name the PHY is registered under
pub const AC200_EPHY_NAME: &str = "AC200 EPHY";

/// Maximum soft reset polling iterations
const RESET_MAX_ATTEMPTS: u32 = 1000;

/// Check a PHY identifier against the AC200 EPHY ID
pub const fn id_matches(id: u32) -> bool {
    (id & AC200_EPHY_ID_MASK) == (AC200_EPHY_ID & AC200_EPHY_ID_MASK)
}

// =============================================================================
// AC200 EPHY Driver
// =============================================================================

/// AC200 EPHY driver
///
/// Holds the AC200 control interface because part of the configuration
/// (`EPHY_CTL.XMII_SEL`) lives in the parent chip rather than behind MDIO.
#[derive(Debug)]
pub struct Ac200Ephy<C: Ac200Control> {
    /// PHY address (0-31)
    addr: u8,
    /// Interface toward the host MAC
    interface: PhyInterface,
    /// Apply the H6 RX fixup at the end of init
    h6_rx_fixup: bool,
    /// AC200 parent chip
    control: C,
    /// Last known link state
    last_link_up: bool,
}

impl<C: Ac200Control> Ac200Ephy<C> {
    /// Create a new AC200 EPHY driver
    ///
    /// The H6 RX fixup is enabled; see [`with_h6_rx_fixup`](Self::with_h6_rx_fixup).
    pub fn new(addr: u8, interface: PhyInterface, control: C) -> Self {
        Self {
            addr,
            interface,
            h6_rx_fixup: true,
            control,
            last_link_up: false,
        }
    }

    /// Enable or disable the H6 RX fixup
    #[must_use]
    pub fn with_h6_rx_fixup(mut self, enabled: bool) -> Self {
        self.h6_rx_fixup = enabled;
        self
    }

    /// Interface toward the host MAC
    pub fn interface(&self) -> PhyInterface {
        self.interface
    }

    /// Consume the driver and return the control interface
    pub fn release(self) -> C {
        self.control
    }

    /// Verify this is an AC200 EPHY by reading the PHY ID
    pub fn matches_id<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        let id = ieee802_3::read_phy_id(mdio, self.addr)?;
        Ok(id_matches(id))
    }

    /// Get the revision number from PHY ID
    pub fn revision<M: MdioBus>(&self, mdio: &mut M) -> Result<u8> {
        let id = ieee802_3::read_phy_id(mdio, self.addr)?;
        Ok((id & 0x0F) as u8)
    }

    fn select_page<M: MdioBus>(&self, mdio: &mut M, page: u8) -> Result<()> {
        mdio::select_page(mdio, self.addr, page)
    }

    /// Write the vendor analog front-end tuning values
    ///
    /// Also disables auto power saving. Leaves page 8 selected.
    pub fn tune_afe<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.select_page(mdio, page::POWER)?;
        mdio.write(self.addr, reg::APS_CTRL, afe::APS_DISABLED)?;

        self.select_page(mdio, page::AFE_TRX)?;
        mdio.write(self.addr, reg::AFE_TRX, afe::TRX_PAGE2)?;

        self.select_page(mdio, page::AFE_TXRX)?;
        mdio.write(self.addr, reg::AFE_TX, afe::TX)?;
        mdio.write(self.addr, reg::AFE_RX, afe::RX)?;
        mdio.write(self.addr, reg::AFE_BIAS, afe::BIAS)?;

        self.select_page(mdio, page::AFE_TRX_FINE)?;
        mdio.write(self.addr, reg::AFE_TRX, afe::TRX_PAGE8)
    }

    /// Disable the vendor "Intelligent IEEE" feature
    ///
    /// Returns with page 0 selected.
    pub fn disable_intelligent_ieee<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.select_page(mdio, page::POWER)?;
        mdio.modify(self.addr, reg::INTELLIGENT_IEEE, bits::INTELLIGENT_IEEE_EN, 0)?;
        self.select_page(mdio, page::STANDARD)
    }

    /// Stop advertising 802.3az EEE for 100BASE-TX
    ///
    /// Leaves page 2 selected with its TRX register cleared again.
    pub fn disable_eee<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        let adv = mdio::mmd_read(mdio, self.addr, mmd::DEVAD_AN, mmd::EEE_ADV)?;
        mdio::mmd_write(
            mdio,
            self.addr,
            mmd::DEVAD_AN,
            mmd::EEE_ADV,
            adv & !mmd::EEE_ADV_100TX,
        )?;

        self.select_page(mdio, page::AFE_TRX)?;
        mdio.write(self.addr, reg::AFE_TRX, afe::TRX_PAGE2)
    }

    /// Route the EPHY through the AC200's RMII adapter or straight MII
    pub fn select_interface(&mut self) -> Result<()> {
        let value = if self.interface.is_rmii() {
            ephy_ctl::XMII_SEL
        } else {
            0
        };
        self.control
            .update_bits(ac200_reg::EPHY_CTL, ephy_ctl::XMII_SEL, value)
    }

    fn apply_h6_rx_fixup<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        mdio.modify(self.addr, reg::AFE_RX, 0, bits::RX_FIXUP_H6)
    }
}

impl<C: Ac200Control> PhyDriver for Ac200Ephy<C> {
    fn address(&self) -> u8 {
        self.addr
    }

    fn init<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.tune_afe(mdio)?;
        self.disable_intelligent_ieee(mdio)?;
        self.disable_eee(mdio)?;
        self.select_page(mdio, page::STANDARD)?;

        self.select_interface()?;

        if self.h6_rx_fixup {
            self.apply_h6_rx_fixup(mdio)?;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("AC200 EPHY at {} configured ({})", self.addr, self.interface);

        self.last_link_up = false;
        Ok(())
    }

    fn soft_reset<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::soft_reset(mdio, self.addr, RESET_MAX_ATTEMPTS)
    }

    fn suspend<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::suspend(mdio, self.addr)
    }

    fn resume<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::resume(mdio, self.addr)
    }

    fn is_link_up<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        ieee802_3::is_link_up(mdio, self.addr)
    }

    fn link_status<M: MdioBus>(&self, mdio: &mut M) -> Result<Option<LinkStatus>> {
        if !self.is_link_up(mdio)? {
            return Ok(None);
        }
        ieee802_3::resolve_link_status(mdio, self.addr).map(Some)
    }

    fn poll_link<M: MdioBus>(&mut self, mdio: &mut M) -> Result<Option<LinkStatus>> {
        let link_up = self.is_link_up(mdio)?;

        if link_up && !self.last_link_up {
            self.last_link_up = true;
            return ieee802_3::resolve_link_status(mdio, self.addr).map(Some);
        }

        if !link_up && self.last_link_up {
            self.last_link_up = false;
        }

        Ok(None)
    }

    fn enable_auto_negotiation<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::enable_auto_negotiation(mdio, self.addr)
    }

    fn force_link<M: MdioBus>(&mut self, mdio: &mut M, status: LinkStatus) -> Result<()> {
        ieee802_3::force_link(mdio, self.addr, status)
    }

    fn capabilities<M: MdioBus>(&self, mdio: &mut M) -> Result<PhyCapabilities> {
        ieee802_3::read_capabilities(mdio, self.addr)
    }

    fn phy_id<M: MdioBus>(&self, mdio: &mut M) -> Result<u32> {
        ieee802_3::read_phy_id(mdio, self.addr)
    }

    fn is_auto_negotiation_complete<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        ieee802_3::is_an_complete(mdio, self.addr)
    }
}
