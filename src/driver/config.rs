//! Configuration types for the AC200 EPHY driver

use crate::error::{ConfigError, ConfigResult};
use crate::hal::mdio::MAX_PHY_ADDR;
use crate::hal::nvmem::CALIBRATION_CELL;

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps
    #[default]
    Mbps100,
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    #[default]
    Full,
}

/// Interface between the EPHY and the host MAC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyInterface {
    /// Media Independent Interface
    Mii,
    /// Reduced Media Independent Interface
    #[default]
    Rmii,
}

impl PhyInterface {
    /// Whether the AC200 must route the EPHY through its RMII adapter
    pub const fn is_rmii(self) -> bool {
        matches!(self, PhyInterface::Rmii)
    }
}

/// Default MDIO address the EPHY answers on
pub const DEFAULT_PHY_ADDR: u8 = 1;

/// EPHY driver configuration
///
/// Defaults reproduce the vendor bring-up: address 1, RMII, active-low LEDs,
/// internal clock select and the H6 RX fixup applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EphyConfig {
    /// MDIO address programmed into `EPHY_CTL.ADDR`
    pub phy_addr: u8,
    /// Interface toward the host MAC
    pub interface: PhyInterface,
    /// Drive LEDs active low (`EPHY_CTL.LED_POL`)
    pub led_active_low: bool,
    /// Set `EPHY_CTL.CLK_SEL`
    pub clock_select: bool,
    /// Name of the NVMEM cell holding the calibration value
    pub calibration_cell: &'static str,
    /// Set bit 12 of page 0 register 0x13 at the end of `config_init`
    ///
    /// Needed on H6 boards; other SoCs are untested.
    pub h6_rx_fixup: bool,
}

impl Default for EphyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EphyConfig {
    /// Create the default configuration
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phy_addr: DEFAULT_PHY_ADDR,
            interface: PhyInterface::Rmii,
            led_active_low: true,
            clock_select: true,
            calibration_cell: CALIBRATION_CELL,
            h6_rx_fixup: true,
        }
    }

    /// Set the MDIO address
    #[must_use]
    pub const fn with_phy_addr(mut self, addr: u8) -> Self {
        self.phy_addr = addr;
        self
    }

    /// Set the interface toward the host MAC
    #[must_use]
    pub const fn with_interface(mut self, interface: PhyInterface) -> Self {
        self.interface = interface;
        self
    }

    /// Set LED polarity
    #[must_use]
    pub const fn with_led_active_low(mut self, active_low: bool) -> Self {
        self.led_active_low = active_low;
        self
    }

    /// Set the clock select bit
    #[must_use]
    pub const fn with_clock_select(mut self, enabled: bool) -> Self {
        self.clock_select = enabled;
        self
    }

    /// Use a differently named calibration cell
    #[must_use]
    pub const fn with_calibration_cell(mut self, name: &'static str) -> Self {
        self.calibration_cell = name;
        self
    }

    /// Enable or disable the H6 RX fixup
    #[must_use]
    pub const fn with_h6_rx_fixup(mut self, enabled: bool) -> Self {
        self.h6_rx_fixup = enabled;
        self
    }

    /// Check the configuration for values the hardware cannot take
    pub fn validate(&self) -> ConfigResult<()> {
        if self.phy_addr > MAX_PHY_ADDR {
            return Err(ConfigError::InvalidPhyAddress);
        }
        if self.calibration_cell.is_empty() {
            return Err(ConfigError::InvalidConfig);
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
