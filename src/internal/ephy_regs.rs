//! AC200 EPHY Vendor-Specific MDIO Register Definitions
//!
//! The AC200 EPHY banks its vendor registers (16-31) into pages selected
//! through register 0x1F. Register values here are the ones the vendor
//! bring-up sequence programs; their meaning beyond the comment is not
//! publicly documented.
//!
//! # Module Organization
//!
//! - `phy_id`: PHY identifier constants
//! - `page`: Page numbers and page select encoding
//! - `reg`: Register addresses
//! - `afe`: Analog front-end tuning values
//! - `bits`: Individual control bits
//! - `mmd`: Clause 45 addresses reached through registers 13/14

#![allow(dead_code)]

// =============================================================================
// PHY Identifier
// =============================================================================

/// PHY identifier constants
pub mod phy_id {
    /// AC200 EPHY identifier
    ///
    /// - PHYIDR1 (reg 2): 0x0044
    /// - PHYIDR2 (reg 3): 0x140x (x = revision)
    pub const ID: u32 = 0x0044_1400;
    /// PHY ID mask (ignores revision bits and the top nibble)
    pub const MASK: u32 = 0x0FFF_FFF0;
}

// =============================================================================
// Pages
// =============================================================================

/// Page selection
pub mod page {
    /// Standard register page
    pub const STANDARD: u8 = 0;
    /// Power saving and IEEE feature page
    pub const POWER: u8 = 1;
    /// AFE TRX page
    pub const AFE_TRX: u8 = 2;
    /// AFE TX/RX tuning page
    pub const AFE_TXRX: u8 = 6;
    /// AFE TRX fine tuning page
    pub const AFE_TRX_FINE: u8 = 8;
}

// =============================================================================
// Register Addresses
// =============================================================================

/// Vendor register addresses
pub mod reg {
    /// Auto power saving control (page 1)
    pub const APS_CTRL: u8 = 0x12;
    /// Intelligent IEEE control (page 1)
    pub const INTELLIGENT_IEEE: u8 = 0x17;
    /// AFE RX optimization (page 6) and RX fixup (page 0)
    pub const AFE_RX: u8 = 0x13;
    /// AFE TX optimization (page 6)
    pub const AFE_TX: u8 = 0x14;
    /// AFE TX/RX bias (page 6)
    pub const AFE_BIAS: u8 = 0x15;
    /// AFE TRX optimization (pages 2 and 8)
    pub const AFE_TRX: u8 = 0x18;
}

// =============================================================================
// AFE Tuning Values
// =============================================================================

/// Analog front-end tuning values written during `config_init`
pub mod afe {
    /// Page 1 reg 0x12: APS disabled
    pub const APS_DISABLED: u16 = 0x4824;
    /// Page 2 reg 0x18: TRX optimization
    pub const TRX_PAGE2: u16 = 0x0000;
    /// Page 6 reg 0x14: TX optimization
    pub const TX: u16 = 0x708F;
    /// Page 6 reg 0x13: RX optimization
    pub const RX: u16 = 0xF000;
    /// Page 6 reg 0x15: bias
    pub const BIAS: u16 = 0x1530;
    /// Page 8 reg 0x18: TRX optimization
    pub const TRX_PAGE8: u16 = 0x00BC;
}

// =============================================================================
// Control Bits
// =============================================================================

/// Individual control bits
pub mod bits {
    /// Page 1 reg 0x17: Intelligent IEEE enable
    pub const INTELLIGENT_IEEE_EN: u16 = 1 << 3;
    /// Page 0 reg 0x13: RX fixup needed on H6 boards
    pub const RX_FIXUP_H6: u16 = 1 << 12;
}

// =============================================================================
// MMD (Clause 45 over Clause 22)
// =============================================================================

/// MMD addresses used by the driver
pub mod mmd {
    /// EEE / auto-negotiation MMD device
    pub const DEVAD_AN: u8 = 7;
    /// EEE advertisement register in MMD 7
    pub const EEE_ADV: u16 = 0x003C;
    /// EEE advertisement: 100BASE-TX EEE
    pub const EEE_ADV_100TX: u16 = 1 << 1;
}
