//! ISR-safe AC200 bus wrapper using critical sections.
//!
//! The AC200 exposes several functions (EPHY, audio codec, TV encoder)
//! behind one control bus. [`SharedControl`] lets each function driver hold
//! a `&SharedControl` instead of the bus itself.

use super::primitives::CriticalSectionCell;
use crate::error::Result;
use crate::hal::control::Ac200Control;

/// ISR-safe AC200 control bus wrapper.
///
/// All access goes through `critical_section::with()`, disabling interrupts
/// for the duration of the closure.
///
/// # Example
///
/// ```ignore
/// let ac200 = SharedControl::new(I2cControl::new(twi));
///
/// let device = Ac200EphyDevice::probe(&ac200, &mut sid, &mut registry, config)?;
/// let ctl = ac200.with(|bus| bus.read(reg::EPHY_CTL))?;
/// ```
pub struct SharedControl<B> {
    inner: CriticalSectionCell<B>,
}

impl<B> SharedControl<B> {
    /// Wrap a control bus (const, suitable for static initialization).
    pub const fn new(bus: B) -> Self {
        Self {
            inner: CriticalSectionCell::new(bus),
        }
    }

    /// Execute a closure with exclusive access to the bus.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut B) -> R,
    {
        self.inner.with(f)
    }

    /// Try to execute a closure, returning `None` if already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut B) -> R,
    {
        self.inner.try_with(f)
    }

    /// Consume the wrapper and return the bus
    pub fn into_inner(self) -> B {
        self.inner.into_inner()
    }
}

impl<B: Ac200Control> Ac200Control for &SharedControl<B> {
    fn read(&mut self, reg: u16) -> Result<u16> {
        self.inner.with(|bus| bus.read(reg))
    }

    fn write(&mut self, reg: u16, value: u16) -> Result<()> {
        self.inner.with(|bus| bus.write(reg, value))
    }

    // One critical section for the whole read-modify-write
    fn update_bits(&mut self, reg: u16, mask: u16, value: u16) -> Result<()> {
        self.inner.with(|bus| bus.update_bits(reg, mask, value))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec;

    use super::*;
    use crate::driver::config::EphyConfig;
    use crate::driver::ephy::Ac200EphyDevice;
    use crate::hal::nvmem::FixedCell;
    use crate::internal::ac200_regs::reg;
    use crate::hal::control::I2cControl;
    use crate::test_utils::{MockControl, MockI2c, MockRegistry};

    #[test]
    fn shared_control_forwards_accesses() {
        let shared = SharedControl::new(MockControl::new());
        let mut ctrl = &shared;

        ctrl.write(reg::EPHY_CTL, 0x1016).unwrap();
        ctrl.update_bits(reg::EPHY_CTL, 1 << 11, 1 << 11).unwrap();
        assert_eq!(ctrl.read(reg::EPHY_CTL).unwrap(), 0x1816);

        let bus = shared.into_inner();
        assert_eq!(
            bus.get_writes(),
            vec![(reg::EPHY_CTL, 0x1016), (reg::EPHY_CTL, 0x1816)]
        );
    }

    #[test]
    fn shared_control_try_with_reports_busy() {
        let shared = SharedControl::new(MockControl::new());
        let nested = shared.with(|_| shared.try_with(|bus| bus.get_register(reg::EPHY_CTL)));
        assert_eq!(nested, None);
    }

    #[test]
    fn device_probes_through_shared_bus() {
        let shared = SharedControl::new(MockControl::new());
        let mut nvmem = FixedCell::calibration(&[0x00, 0x00]);
        let mut registry = MockRegistry::new();

        let device =
            Ac200EphyDevice::probe(&shared, &mut nvmem, &mut registry, EphyConfig::new()).unwrap();
        drop(device);

        // Other AC200 functions still reach the bus
        let ctl = shared.with(|bus| bus.get_register(reg::EPHY_CTL));
        assert_eq!(ctl, Some(0x3016));
    }

    #[test]
    fn shared_i2c_control_reads_ephy_ctl() {
        let bus = MockI2c::new();
        bus.set_register(reg::EPHY_CTL, 0x1016);

        let ac200 = SharedControl::new(I2cControl::new(bus));
        let ctl = ac200.with(|bus| bus.read(reg::EPHY_CTL));
        assert_eq!(ctl, Ok(0x1016));
    }
}
