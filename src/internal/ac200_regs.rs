//! AC200 Parent Chip Register Definitions
//!
//! This module contains the internal register definitions for the parts of
//! the X-Powers AC200 system and EPHY control blocks that the EPHY driver
//! touches. All registers are 16 bits wide and addressed with 16-bit offsets.
//!
//! # Module Organization
//!
//! - `reg`: Register addresses
//! - `sys_ephy_ctl0`: System EPHY control 0 bits (reset and clock gating)
//! - `sys_ephy_ctl1`: System EPHY control 1 bits (pad enables)
//! - `ephy_ctl`: EPHY control register bits and fields
//! - `i2c`: Control bus paging constants

#![allow(dead_code)]

// =============================================================================
// Register Addresses
// =============================================================================

/// AC200 register addresses
pub mod reg {
    /// System EPHY control 0 (reset release, clock gating)
    pub const SYS_EPHY_CTL0: u16 = 0x0014;
    /// System EPHY control 1 (MII and LED pad enables)
    pub const SYS_EPHY_CTL1: u16 = 0x0016;
    /// EPHY control register
    pub const EPHY_CTL: u16 = 0x6000;
}

// =============================================================================
// System EPHY Control 0
// =============================================================================

/// System EPHY control 0 register bits
pub mod sys_ephy_ctl0 {
    /// Release the EPHY from reset
    pub const RESET_INVALID: u16 = 1 << 0;
    /// Enable the EPHY system clock
    pub const SYSCLK_GATING: u16 = 1 << 1;
}

// =============================================================================
// System EPHY Control 1
// =============================================================================

/// System EPHY control 1 register bits
pub mod sys_ephy_ctl1 {
    /// Enable the MII pads
    pub const E_EPHY_MII_IO_EN: u16 = 1 << 0;
    /// Enable the link LED pad
    pub const E_LNK_LED_IO_EN: u16 = 1 << 1;
    /// Enable the speed LED pad
    pub const E_SPD_LED_IO_EN: u16 = 1 << 2;
    /// Enable the duplex LED pad
    pub const E_DPX_LED_IO_EN: u16 = 1 << 3;

    /// All pad enables
    pub const ALL_IO_EN: u16 = E_EPHY_MII_IO_EN | E_LNK_LED_IO_EN | E_SPD_LED_IO_EN | E_DPX_LED_IO_EN;
}

// =============================================================================
// EPHY Control
// =============================================================================

/// EPHY control register bits and fields
pub mod ephy_ctl {
    /// Shut the EPHY down
    pub const SHUTDOWN: u16 = 1 << 0;
    /// LED polarity (active low when set)
    pub const LED_POL: u16 = 1 << 1;
    /// Clock source select
    pub const CLK_SEL: u16 = 1 << 2;
    /// PHY address field shift (bits 8:4)
    pub const ADDR_SHIFT: u16 = 4;
    /// PHY address field mask
    pub const ADDR_MASK: u16 = 0x1F << ADDR_SHIFT;
    /// Select RMII instead of MII toward the host MAC
    pub const XMII_SEL: u16 = 1 << 11;
    /// Calibration field shift (bits 15:12)
    pub const CALIB_SHIFT: u16 = 12;
    /// Calibration field mask
    pub const CALIB_MASK: u16 = 0xF << CALIB_SHIFT;

    /// Encode a PHY address into the ADDR field
    #[inline(always)]
    pub const fn addr(addr: u8) -> u16 {
        ((addr as u16) & 0x1F) << ADDR_SHIFT
    }

    /// Encode a calibration value into the CALIB field (low nibble only)
    #[inline(always)]
    pub const fn calib(value: u16) -> u16 {
        (value & 0xF) << CALIB_SHIFT
    }
}

// =============================================================================
// Control Bus Paging
// =============================================================================

/// I2C control bus paging constants
///
/// Register offsets on the wire are 8 bits; the high address byte selects
/// a 256-register page through the page select register.
pub mod i2c {
    /// Default 7-bit I2C address of the AC200
    pub const DEFAULT_ADDR: u8 = 0x10;
    /// Page select register
    pub const PAGE_SELECT: u8 = 0xFE;
}
