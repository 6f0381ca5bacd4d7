//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the EPHY driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::vec::Vec;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

use crate::driver::ephy::{PhyDescriptor, PhyRegistry};
use crate::error::{CalibrationError, CalibrationResult, ConfigError, IoError, Result};
use crate::hal::control::Ac200Control;
use crate::hal::mdio::{MdioBus, PAGE_SELECT_REG, anar, bmcr, bmsr, mmd_ctrl, phy_reg};
use crate::hal::nvmem::NvmemCell;
use crate::internal::ac200_regs::i2c as ac200_i2c;

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// First banked vendor register
const VENDOR_FIRST: u8 = 0x10;
/// Last banked vendor register
const VENDOR_LAST: u8 = 0x1E;

/// Mock MDIO bus for testing PHY drivers without hardware
///
/// Registers 0x10-0x1E are banked by the page written to register 0x1F, and
/// registers 13/14 behave like the Clause 45 indirect access pair.
///
/// # Example
///
/// ```ignore
/// let mut mdio = MockMdioBus::new();
/// mdio.set_register(1, 0x01, 0x786D); // Set BMSR with link up
///
/// let phy = Ac200Ephy::new(1, PhyInterface::Rmii, &mut ctrl);
/// assert!(phy.is_link_up(&mut mdio).unwrap());
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Register values: (phy_addr, page, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8, u8), u16>>,
    /// Selected page per PHY
    pages: RefCell<HashMap<u8, u8>>,
    /// MMD registers: (phy_addr, devad, reg) -> value
    mmd: RefCell<HashMap<(u8, u8, u16), u16>>,
    /// Last value written to the MMD control register per PHY
    mmd_ctrl: RefCell<HashMap<u8, u16>>,
    /// Latched MMD register address: (phy_addr, devad) -> reg
    mmd_addr: RefCell<HashMap<(u8, u8), u16>>,
    /// Bits cleared by hardware right after a write: (phy_addr, reg_addr) -> mask
    self_clearing: RefCell<HashMap<(u8, u8), u16>>,
    /// Writes accepted before the bus starts failing
    write_budget: RefCell<Option<usize>>,
    /// Record of writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    fn page_for(&self, phy_addr: u8, reg_addr: u8) -> u8 {
        if (VENDOR_FIRST..=VENDOR_LAST).contains(&reg_addr) {
            self.current_page(phy_addr)
        } else {
            0
        }
    }

    /// Page currently selected on a PHY
    pub fn current_page(&self, phy_addr: u8) -> u8 {
        self.pages.borrow().get(&phy_addr).copied().unwrap_or(0)
    }

    /// Set a register value in the currently selected page
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        let page = self.page_for(phy_addr, reg_addr);
        self.set_paged_register(phy_addr, page, reg_addr, value);
    }

    /// Get the current value of a register in the currently selected page
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        let page = self.page_for(phy_addr, reg_addr);
        self.get_paged_register(phy_addr, page, reg_addr)
    }

    /// Set a register value in a specific page
    pub fn set_paged_register(&self, phy_addr: u8, page: u8, reg_addr: u8, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, page, reg_addr), value);
    }

    /// Get a register value from a specific page
    pub fn get_paged_register(&self, phy_addr: u8, page: u8, reg_addr: u8) -> Option<u16> {
        self.registers
            .borrow()
            .get(&(phy_addr, page, reg_addr))
            .copied()
    }

    /// Set an MMD register value
    pub fn set_mmd_register(&self, phy_addr: u8, devad: u8, reg: u16, value: u16) {
        self.mmd.borrow_mut().insert((phy_addr, devad, reg), value);
    }

    /// Get an MMD register value
    pub fn get_mmd_register(&self, phy_addr: u8, devad: u8, reg: u16) -> Option<u16> {
        self.mmd.borrow().get(&(phy_addr, devad, reg)).copied()
    }

    /// Make bits of a register self-clearing
    pub fn set_self_clearing(&self, phy_addr: u8, reg_addr: u8, mask: u16) {
        self.self_clearing
            .borrow_mut()
            .insert((phy_addr, reg_addr), mask);
    }

    /// Accept `count` more writes, then fail every write after that
    pub fn fail_after_writes(&self, count: usize) {
        *self.write_budget.borrow_mut() = Some(count);
    }

    /// Get all writes that have been made
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }

    /// Clear the write log
    pub fn clear_writes(&self) {
        self.write_log.borrow_mut().clear();
    }

    /// Setup for an AC200 EPHY with default register values
    pub fn setup_ac200_ephy(&self, phy_addr: u8) {
        self.set_paged_register(phy_addr, 0, phy_reg::PHYIDR1, 0x0044);
        self.set_paged_register(phy_addr, 0, phy_reg::PHYIDR2, 0x1400);

        // BMSR: 10/100 capabilities, link down initially
        let bmsr_value = bmsr::TX_FD_CAPABLE
            | bmsr::TX_HD_CAPABLE
            | bmsr::T10_FD_CAPABLE
            | bmsr::T10_HD_CAPABLE
            | bmsr::AN_ABILITY
            | bmsr::EXT_CAPABLE;
        self.set_paged_register(phy_addr, 0, phy_reg::BMSR, bmsr_value);

        self.set_paged_register(phy_addr, 0, phy_reg::BMCR, bmcr::AN_ENABLE);
        self.set_paged_register(phy_addr, 0, phy_reg::ANAR, 0x01E1);
    }

    /// Simulate link coming up against a fully capable partner
    pub fn simulate_link_up_100_fd(&self, phy_addr: u8) {
        let anlpar_val =
            anar::SELECTOR_IEEE802_3 | anar::TX_FD | anar::TX_HD | anar::T10_FD | anar::T10_HD;
        self.simulate_link_up_negotiated(phy_addr, anlpar_val);
    }

    /// Simulate link coming up after negotiating with a partner advertising `anlpar`
    pub fn simulate_link_up_negotiated(&self, phy_addr: u8, anlpar: u16) {
        let bmsr_val = self.get_paged_register(phy_addr, 0, phy_reg::BMSR).unwrap_or(0);
        self.set_paged_register(
            phy_addr,
            0,
            phy_reg::BMSR,
            bmsr_val | bmsr::LINK_STATUS | bmsr::AN_COMPLETE,
        );
        self.set_paged_register(phy_addr, 0, phy_reg::ANLPAR, anlpar);
    }

    /// Simulate link going down
    pub fn simulate_link_down(&self, phy_addr: u8) {
        let bmsr_val = self.get_paged_register(phy_addr, 0, phy_reg::BMSR).unwrap_or(0);
        self.set_paged_register(
            phy_addr,
            0,
            phy_reg::BMSR,
            bmsr_val & !(bmsr::LINK_STATUS | bmsr::AN_COMPLETE),
        );
        self.set_paged_register(phy_addr, 0, phy_reg::ANLPAR, 0x0000);
    }

    fn mmd_devad(&self, phy_addr: u8) -> (u8, bool) {
        let ctrl = self.mmd_ctrl.borrow().get(&phy_addr).copied().unwrap_or(0);
        let devad = (ctrl & mmd_ctrl::DEVAD_MASK) as u8;
        (devad, ctrl & !mmd_ctrl::DEVAD_MASK != mmd_ctrl::FUNC_ADDR)
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        if reg_addr == phy_reg::MMD_DATA {
            let (devad, data) = self.mmd_devad(phy_addr);
            let reg = self
                .mmd_addr
                .borrow()
                .get(&(phy_addr, devad))
                .copied()
                .unwrap_or(0);
            if data {
                return Ok(self.get_mmd_register(phy_addr, devad, reg).unwrap_or(0));
            }
            return Ok(reg);
        }

        Ok(self.get_register(phy_addr, reg_addr).unwrap_or(0))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        if let Some(remaining) = self.write_budget.borrow_mut().as_mut() {
            if *remaining == 0 {
                return Err(IoError::PhyError.into());
            }
            *remaining -= 1;
        }

        self.write_log.borrow_mut().push((phy_addr, reg_addr, value));

        match reg_addr {
            PAGE_SELECT_REG => {
                self.pages.borrow_mut().insert(phy_addr, (value >> 8) as u8);
            }
            phy_reg::MMD_CTRL => {
                self.mmd_ctrl.borrow_mut().insert(phy_addr, value);
                return Ok(());
            }
            phy_reg::MMD_DATA => {
                let (devad, data) = self.mmd_devad(phy_addr);
                if data {
                    let reg = self
                        .mmd_addr
                        .borrow()
                        .get(&(phy_addr, devad))
                        .copied()
                        .unwrap_or(0);
                    self.set_mmd_register(phy_addr, devad, reg, value);
                } else {
                    self.mmd_addr.borrow_mut().insert((phy_addr, devad), value);
                }
                return Ok(());
            }
            _ => {}
        }

        let clear = self
            .self_clearing
            .borrow()
            .get(&(phy_addr, reg_addr))
            .copied()
            .unwrap_or(0);
        self.set_register(phy_addr, reg_addr, value & !clear);
        Ok(())
    }
}

// =============================================================================
// Mock AC200 Control Interface
// =============================================================================

/// Mock AC200 register file
#[derive(Debug, Default)]
pub struct MockControl {
    /// Register values
    registers: HashMap<u16, u16>,
    /// Record of writes: (reg, value)
    write_log: Vec<(u16, u16)>,
    /// Registers whose accesses fail
    failing: HashSet<u16>,
}

impl MockControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_register(&mut self, reg: u16, value: u16) {
        self.registers.insert(reg, value);
    }

    pub fn get_register(&self, reg: u16) -> Option<u16> {
        self.registers.get(&reg).copied()
    }

    pub fn get_writes(&self) -> Vec<(u16, u16)> {
        self.write_log.clone()
    }

    /// Make every access to `reg` fail with a bus error
    pub fn fail_on_register(&mut self, reg: u16) {
        self.failing.insert(reg);
    }
}

impl Ac200Control for MockControl {
    fn read(&mut self, reg: u16) -> Result<u16> {
        if self.failing.contains(&reg) {
            return Err(IoError::BusError.into());
        }
        Ok(self.get_register(reg).unwrap_or(0))
    }

    fn write(&mut self, reg: u16, value: u16) -> Result<()> {
        if self.failing.contains(&reg) {
            return Err(IoError::BusError.into());
        }
        self.write_log.push((reg, value));
        self.registers.insert(reg, value);
        Ok(())
    }
}

// =============================================================================
// Mock I2C Bus
// =============================================================================

/// Mock I2C bus emulating the AC200's paged register file
///
/// Understands the page select write `[0xFE, 0x00, page]`, register writes
/// `[offset, hi, lo]` and register reads (`[offset]` then a 2-byte read).
#[derive(Debug, Default)]
pub struct MockI2c {
    /// Register values keyed by full 16-bit address
    registers: RefCell<HashMap<u16, u16>>,
    /// Selected page
    page: RefCell<u8>,
    /// Register pointer for the next read
    pointer: RefCell<u8>,
    /// Refuse every transaction
    nack: RefCell<bool>,
    /// Record of write operations: (address, bytes)
    write_log: RefCell<Vec<(u8, Vec<u8>)>>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_register(&self, reg: u16, value: u16) {
        self.registers.borrow_mut().insert(reg, value);
    }

    pub fn get_register(&self, reg: u16) -> Option<u16> {
        self.registers.borrow().get(&reg).copied()
    }

    pub fn set_nack(&self, nack: bool) {
        *self.nack.borrow_mut() = nack;
    }

    pub fn get_writes(&self) -> Vec<(u8, Vec<u8>)> {
        self.write_log.borrow().clone()
    }

    fn full_address(&self, offset: u8) -> u16 {
        u16::from_be_bytes([*self.page.borrow(), offset])
    }

    fn handle_write(&self, address: u8, bytes: &[u8]) {
        self.write_log.borrow_mut().push((address, bytes.to_vec()));
        match *bytes {
            [ac200_i2c::PAGE_SELECT, _, page] => *self.page.borrow_mut() = page,
            [offset, hi, lo] => {
                let reg = self.full_address(offset);
                self.set_register(reg, u16::from_be_bytes([hi, lo]));
            }
            [offset] => *self.pointer.borrow_mut() = offset,
            _ => {}
        }
    }

    fn handle_read(&self, buf: &mut [u8]) {
        let reg = self.full_address(*self.pointer.borrow());
        let value = self.get_register(reg).unwrap_or(0).to_be_bytes();
        for (dst, src) in buf.iter_mut().zip(value.iter()) {
            *dst = *src;
        }
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> core::result::Result<(), Self::Error> {
        if *self.nack.borrow() || address != ac200_i2c::DEFAULT_ADDR {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => self.handle_write(address, bytes),
                Operation::Read(buf) => self.handle_read(buf),
            }
        }
        Ok(())
    }
}

// =============================================================================
// Mock NVMEM Provider
// =============================================================================

/// Mock NVMEM provider holding named cells
#[derive(Debug, Default)]
pub struct MockNvmem {
    cells: HashMap<&'static str, Vec<u8>>,
    read_error: bool,
}

impl MockNvmem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, data: &[u8]) {
        self.cells.insert(name, data.to_vec());
    }

    /// Make reads of existing cells fail
    pub fn set_read_error(&mut self, fail: bool) {
        self.read_error = fail;
    }
}

impl NvmemCell for MockNvmem {
    fn read_cell(&mut self, name: &str, buf: &mut [u8]) -> CalibrationResult<usize> {
        let data = self.cells.get(name).ok_or(CalibrationError::Missing)?;
        if self.read_error {
            return Err(CalibrationError::ReadFailed);
        }
        let n = data.len().min(buf.len());
        buf[..n].copy_from_slice(&data[..n]);
        Ok(data.len())
    }
}

// =============================================================================
// Mock PHY Registry
// =============================================================================

/// Mock host PHY framework
#[derive(Debug, Default)]
pub struct MockRegistry {
    registered: Vec<PhyDescriptor>,
    fail: bool,
    unregister_count: usize,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next registrations fail
    pub fn set_fail(&mut self, fail: bool) {
        self.fail = fail;
    }

    pub fn registered(&self) -> Vec<PhyDescriptor> {
        self.registered.clone()
    }

    pub fn unregister_count(&self) -> usize {
        self.unregister_count
    }
}

impl PhyRegistry for MockRegistry {
    fn register(&mut self, phy: &PhyDescriptor) -> Result<()> {
        if self.fail {
            return Err(ConfigError::RegistrationFailed.into());
        }
        self.registered.push(*phy);
        Ok(())
    }

    fn unregister(&mut self, phy: &PhyDescriptor) {
        self.registered.retain(|p| p != phy);
        self.unregister_count += 1;
    }
}

// =============================================================================
// Mock Self-Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;

    #[test]
    fn mock_mdio_read_write() {
        let mut mdio = MockMdioBus::new();
        mdio.write(1, phy_reg::BMCR, 0x1234).unwrap();
        assert_eq!(mdio.read(1, phy_reg::BMCR).unwrap(), 0x1234);
        assert_eq!(mdio.read(1, phy_reg::BMSR).unwrap(), 0);
        assert_eq!(mdio.get_writes(), vec![(1, phy_reg::BMCR, 0x1234)]);
    }

    #[test]
    fn mock_mdio_banks_vendor_registers() {
        let mut mdio = MockMdioBus::new();
        mdio.write(1, PAGE_SELECT_REG, 0x0600).unwrap();
        mdio.write(1, 0x13, 0xF000).unwrap();
        mdio.write(1, PAGE_SELECT_REG, 0x0000).unwrap();

        assert_eq!(mdio.read(1, 0x13).unwrap(), 0);
        assert_eq!(mdio.get_paged_register(1, 6, 0x13), Some(0xF000));
        // Standard registers are not banked
        mdio.write(1, PAGE_SELECT_REG, 0x0600).unwrap();
        mdio.write(1, phy_reg::BMCR, 0x1000).unwrap();
        assert_eq!(mdio.get_paged_register(1, 0, phy_reg::BMCR), Some(0x1000));
    }

    #[test]
    fn mock_mdio_self_clearing_bits() {
        let mut mdio = MockMdioBus::new();
        mdio.set_self_clearing(1, phy_reg::BMCR, bmcr::RESET);
        mdio.write(1, phy_reg::BMCR, bmcr::RESET | bmcr::AN_ENABLE).unwrap();
        assert_eq!(mdio.read(1, phy_reg::BMCR).unwrap(), bmcr::AN_ENABLE);
    }

    #[test]
    fn mock_mdio_write_budget() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_after_writes(1);
        assert!(mdio.write(1, 0, 1).is_ok());
        assert_eq!(mdio.write(1, 0, 2), Err(IoError::PhyError.into()));
        assert_eq!(mdio.get_writes().len(), 1);
    }

    #[test]
    fn mock_i2c_rejects_other_addresses() {
        let mut bus = MockI2c::new();
        assert!(bus.write(0x11, &[0x00]).is_err());
        assert!(bus.write(0x10, &[0x00]).is_ok());
    }

    #[test]
    fn mock_registry_tracks_registrations() {
        use crate::driver::config::EphyConfig;

        let mut registry = MockRegistry::new();
        let phy = PhyDescriptor::for_config(&EphyConfig::new());
        registry.register(&phy).unwrap();
        assert_eq!(registry.registered(), vec![phy]);

        registry.unregister(&phy);
        assert!(registry.registered().is_empty());
        assert_eq!(registry.unregister_count(), 1);
    }
}
