//! Allwinner H6 board configuration (H6 + AC200).
//!
//! On the H6 the AC200's EPHY calibration is burned into the SoC's SID
//! eFuse block rather than into the AC200 itself. [`SidCalibration`] reads it
//! straight from the memory-mapped SID and serves it as the `ephy_calib`
//! NVMEM cell.

use crate::driver::config::{EphyConfig, PhyInterface};
use crate::error::{CalibrationError, CalibrationResult};
use crate::hal::nvmem::{CALIBRATION_CELL, CALIBRATION_LEN, NvmemCell};
use crate::internal::ac200_regs::i2c;
use crate::phy::ac200::id_matches;

/// H6 board configuration constants and helpers.
pub struct H6;

impl H6 {
    // =========================================================================
    // SID eFuse
    // =========================================================================

    /// SID controller base address.
    pub const SID_BASE: usize = 0x0300_6000;

    /// Offset of the eFuse value area from the SID base.
    pub const SID_VALUE_OFFSET: usize = 0x200;

    /// Offset of the EPHY calibration cell within the value area.
    pub const EPHY_CALIB_OFFSET: usize = 0x2c;

    // =========================================================================
    // AC200 Wiring
    // =========================================================================

    /// AC200 I2C address.
    pub const AC200_I2C_ADDR: u8 = i2c::DEFAULT_ADDR;

    /// EPHY MDIO address.
    pub const PHY_ADDR: u8 = 1;

    /// Board name.
    pub const BOARD_NAME: &'static str = "Allwinner H6 + AC200";

    // =========================================================================
    // Helper Methods
    // =========================================================================

    /// Check if a PHY ID matches the AC200 EPHY.
    #[inline]
    pub const fn is_valid_phy_id(id: u32) -> bool {
        id_matches(id)
    }

    /// Default EPHY configuration for the H6.
    ///
    /// RMII toward the EMAC, with the H6 RX fixup applied.
    #[must_use]
    pub const fn ephy_config() -> EphyConfig {
        EphyConfig::new()
            .with_phy_addr(Self::PHY_ADDR)
            .with_interface(PhyInterface::Rmii)
            .with_h6_rx_fixup(true)
    }
}

// =============================================================================
// SID Calibration Reader
// =============================================================================

/// EPHY calibration cell read from the H6 SID eFuse.
#[derive(Debug)]
pub struct SidCalibration {
    /// Start of the SID register block
    base: *const u8,
}

impl SidCalibration {
    /// Create a reader for a SID block mapped at `base`.
    ///
    /// # Safety
    ///
    /// `base` must point to the SID register block (or a copy of it) and
    /// the calibration cell at `base + 0x22c` must stay readable for as long
    /// as the reader exists.
    pub const unsafe fn new(base: *const u8) -> Self {
        Self { base }
    }

    /// Create a reader for the SID at its physical address.
    ///
    /// # Safety
    ///
    /// Only valid with an identity-mapped SID, i.e. bare metal or a boot
    /// stage running before the MMU remaps peripherals.
    pub const unsafe fn at_physical_address() -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { Self::new(H6::SID_BASE as *const u8) }
    }

    fn read_byte(&self, index: usize) -> u8 {
        let offset = H6::SID_VALUE_OFFSET + H6::EPHY_CALIB_OFFSET + index;
        // SAFETY: `new` requires the calibration cell to be readable and
        // `index` is below `CALIBRATION_LEN`.
        unsafe { self.base.add(offset).read_volatile() }
    }
}

impl NvmemCell for SidCalibration {
    fn read_cell(&mut self, name: &str, buf: &mut [u8]) -> CalibrationResult<usize> {
        if name != CALIBRATION_CELL {
            return Err(CalibrationError::Missing);
        }
        if self.base.is_null() {
            return Err(CalibrationError::ReadFailed);
        }
        for (index, byte) in buf.iter_mut().take(CALIBRATION_LEN).enumerate() {
            *byte = self.read_byte(index);
        }
        Ok(CALIBRATION_LEN)
    }
}
