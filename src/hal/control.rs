//! AC200 Control Bus HAL
//!
//! The EPHY's reset, clock gating, pad enables and analog control word live
//! in the AC200's own register map, not behind MDIO. This module defines the
//! [`Ac200Control`] trait for that register map and an I2C backend built on
//! `embedded_hal::i2c::I2c`.
//!
//! # Wire Format
//!
//! The AC200 exposes 16-bit registers through an 8-bit offset window of 256
//! registers. The upper address byte is programmed into the page select
//! register (0xFE) first. Values travel big-endian.
//!
//! ```text
//! page select:  [0xFE, 0x00, page]
//! write:        [offset, value_hi, value_lo]
//! read:         [offset] then read 2 bytes (hi, lo)
//! ```

use embedded_hal::i2c::{Error as I2cError, ErrorKind, I2c};

use crate::error::{IoError, Result};
use crate::internal::ac200_regs::i2c;

// =============================================================================
// Control Bus Trait
// =============================================================================

/// Register access to the AC200 parent chip
///
/// Implemented by whatever owns the AC200 control interface. The EPHY
/// driver only needs plain reads and writes; [`update_bits`](Self::update_bits)
/// is provided on top.
pub trait Ac200Control {
    /// Read a 16-bit AC200 register
    fn read(&mut self, reg: u16) -> Result<u16>;

    /// Write a 16-bit AC200 register
    fn write(&mut self, reg: u16, value: u16) -> Result<()>;

    /// Update only the bits selected by `mask`
    ///
    /// Skips the write when the register already holds the requested bits.
    fn update_bits(&mut self, reg: u16, mask: u16, value: u16) -> Result<()> {
        let current = self.read(reg)?;
        let updated = (current & !mask) | (value & mask);
        if updated == current {
            return Ok(());
        }
        self.write(reg, updated)
    }
}

impl<C: Ac200Control + ?Sized> Ac200Control for &mut C {
    fn read(&mut self, reg: u16) -> Result<u16> {
        (**self).read(reg)
    }

    fn write(&mut self, reg: u16, value: u16) -> Result<()> {
        (**self).write(reg, value)
    }

    fn update_bits(&mut self, reg: u16, mask: u16, value: u16) -> Result<()> {
        (**self).update_bits(reg, mask, value)
    }
}

// =============================================================================
// I2C Backend
// =============================================================================

/// AC200 register access over I2C
///
/// Tracks the currently selected page so consecutive accesses within one
/// page cost a single transaction each.
#[derive(Debug)]
pub struct I2cControl<I: I2c> {
    /// I2C bus
    bus: I,
    /// 7-bit device address
    address: u8,
    /// Page last written to the page select register
    page: Option<u8>,
}

impl<I: I2c> I2cControl<I> {
    /// Create a control interface at the default AC200 address (0x10)
    pub const fn new(bus: I) -> Self {
        Self::with_address(bus, i2c::DEFAULT_ADDR)
    }

    /// Create a control interface at a specific 7-bit address
    pub const fn with_address(bus: I, address: u8) -> Self {
        Self {
            bus,
            address,
            page: None,
        }
    }

    /// Get the 7-bit device address
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Forget the cached page, forcing the next access to reselect it
    ///
    /// Call this if something else may have touched the page register.
    pub fn invalidate_page(&mut self) {
        self.page = None;
    }

    /// Consume the interface and return the I2C bus
    pub fn release(self) -> I {
        self.bus
    }

    fn select_page(&mut self, reg: u16) -> Result<u8> {
        let [page, offset] = reg.to_be_bytes();
        if self.page != Some(page) {
            self.bus
                .write(self.address, &[i2c::PAGE_SELECT, 0x00, page])
                .map_err(map_i2c_error)?;
            self.page = Some(page);
        }
        Ok(offset)
    }
}

impl<I: I2c> Ac200Control for I2cControl<I> {
    fn read(&mut self, reg: u16) -> Result<u16> {
        let offset = self.select_page(reg)?;
        let mut buf = [0u8; 2];
        self.bus
            .write_read(self.address, &[offset], &mut buf)
            .map_err(map_i2c_error)?;
        Ok(u16::from_be_bytes(buf))
    }

    fn write(&mut self, reg: u16, value: u16) -> Result<()> {
        let offset = self.select_page(reg)?;
        let [hi, lo] = value.to_be_bytes();
        self.bus
            .write(self.address, &[offset, hi, lo])
            .map_err(map_i2c_error)?;
        Ok(())
    }
}

fn map_i2c_error<E: I2cError>(err: E) -> crate::error::Error {
    match err.kind() {
        ErrorKind::NoAcknowledge(_) => IoError::Nack.into(),
        _ => IoError::BusError.into(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
