//! NVMEM Calibration HAL
//!
//! Each AC200 is trimmed at the factory and the trim value is burned into a
//! one-time-programmable cell of the host SoC (on the H6 it lives in the SID
//! eFuse block). The cell is named [`CALIBRATION_CELL`] and is exactly two
//! bytes long.
//!
//! [`NvmemCell`] is the provider seam; [`Calibration`] validates the raw cell
//! contents and derives the trim value programmed into `EPHY_CTL`.

use crate::error::{CalibrationError, CalibrationResult};
use crate::internal::ac200_regs::ephy_ctl;

// =============================================================================
// Constants
// =============================================================================

/// Default name of the calibration cell
pub const CALIBRATION_CELL: &str = "ephy_calib";

/// Required calibration cell length in bytes
pub const CALIBRATION_LEN: usize = 2;

/// Offset added to the raw factory value before it is applied
pub const CALIBRATION_OFFSET: u16 = 3;

// =============================================================================
// Provider Trait
// =============================================================================

/// Source of named NVMEM cells
pub trait NvmemCell {
    /// Read the cell called `name` into `buf`
    ///
    /// Copies at most `buf.len()` bytes and returns the full length of the
    /// cell, which may be larger than `buf`. Returns
    /// [`CalibrationError::Missing`] if no such cell exists and
    /// [`CalibrationError::ReadFailed`] if it exists but cannot be read.
    fn read_cell(&mut self, name: &str, buf: &mut [u8]) -> CalibrationResult<usize>;
}

impl<N: NvmemCell + ?Sized> NvmemCell for &mut N {
    fn read_cell(&mut self, name: &str, buf: &mut [u8]) -> CalibrationResult<usize> {
        (**self).read_cell(name, buf)
    }
}

/// A single named cell with fixed contents
///
/// Useful when the calibration value is known ahead of time, e.g. copied
/// out of the eFuse by a bootloader and handed over in a boot parameter.
#[derive(Debug, Clone, Copy)]
pub struct FixedCell<'a> {
    name: &'a str,
    data: &'a [u8],
}

impl<'a> FixedCell<'a> {
    /// Create a fixed cell
    pub const fn new(name: &'a str, data: &'a [u8]) -> Self {
        Self { name, data }
    }

    /// Create a fixed calibration cell named [`CALIBRATION_CELL`]
    pub const fn calibration(data: &'a [u8]) -> Self {
        Self::new(CALIBRATION_CELL, data)
    }
}

impl NvmemCell for FixedCell<'_> {
    fn read_cell(&mut self, name: &str, buf: &mut [u8]) -> CalibrationResult<usize> {
        if name != self.name {
            return Err(CalibrationError::Missing);
        }
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        Ok(self.data.len())
    }
}

// =============================================================================
// Calibration Value
// =============================================================================

/// Factory calibration value for the EPHY analog front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    /// Raw value as stored in the cell
    raw: u16,
}

impl Calibration {
    /// Wrap a raw factory value
    pub const fn from_raw(raw: u16) -> Self {
        Self { raw }
    }

    /// Validate cell contents and decode the raw value (little-endian)
    pub fn from_cell_bytes(bytes: &[u8]) -> CalibrationResult<Self> {
        match *bytes {
            [lo, hi] => Ok(Self::from_raw(u16::from_le_bytes([lo, hi]))),
            _ => Err(CalibrationError::WrongLength {
                expected: CALIBRATION_LEN,
                actual: bytes.len(),
            }),
        }
    }

    /// Read and validate the calibration cell from a provider
    pub fn read<N: NvmemCell>(nvmem: &mut N, cell: &str) -> CalibrationResult<Self> {
        let mut buf = [0u8; CALIBRATION_LEN];
        let len = nvmem.read_cell(cell, &mut buf)?;
        if len != CALIBRATION_LEN {
            return Err(CalibrationError::WrongLength {
                expected: CALIBRATION_LEN,
                actual: len,
            });
        }
        Self::from_cell_bytes(&buf)
    }

    /// Raw value as stored in the cell
    pub const fn raw(&self) -> u16 {
        self.raw
    }

    /// Trim value applied to the hardware (raw + 3, wrapping)
    pub const fn trim(&self) -> u16 {
        self.raw.wrapping_add(CALIBRATION_OFFSET)
    }

    /// `EPHY_CTL.CALIB` field bits for this calibration
    ///
    /// Only the low nibble of the trim value fits the field.
    pub const fn ctl_bits(&self) -> u16 {
        ephy_ctl::calib(self.trim())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
