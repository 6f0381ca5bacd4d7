//! AC200 EPHY device lifecycle
//!
//! [`Ac200EphyDevice`] is the device context created when the EPHY function
//! of an AC200 is attached. Attaching (probe) powers the EPHY up inside the
//! AC200, applies the factory calibration and hands a [`PhyDescriptor`] to
//! the host's PHY framework. Detaching (remove) withdraws the descriptor
//! and powers the EPHY back down.
//!
//! # Probe Sequence
//!
//! | Step | Action |
//! |------|--------|
//! | 1 | Read and validate the 2-byte calibration cell |
//! | 2 | `SYS_EPHY_CTL0 = RESET_INVALID \| SYSCLK_GATING` |
//! | 3 | `SYS_EPHY_CTL1 = MII/LNK/SPD/DPX IO enables` |
//! | 4 | `EPHY_CTL = LED_POL \| CLK_SEL \| ADDR \| CALIB` |
//! | 5 | Register the PHY descriptor |
//!
//! The first failure aborts probe. Nothing is retried or rolled back.

use crate::driver::config::{EphyConfig, PhyInterface};
use crate::error::{ConfigError, Result};
use crate::hal::control::Ac200Control;
use crate::hal::nvmem::{Calibration, NvmemCell};
use crate::internal::ac200_regs::{ephy_ctl, reg, sys_ephy_ctl0, sys_ephy_ctl1};
use crate::phy::ac200::{AC200_EPHY_ID, AC200_EPHY_ID_MASK, AC200_EPHY_NAME, Ac200Ephy};

// =============================================================================
// Device Matching
// =============================================================================

/// Device-tree compatible string of the EPHY function
pub const COMPATIBLE: &str = "x-powers,ac200-ephy";

/// Platform driver name
pub const DRIVER_NAME: &str = "ac200-ephy";

/// Check a device-tree compatible string against this driver
pub fn matches_compatible(compatible: &str) -> bool {
    compatible == COMPATIBLE
}

// =============================================================================
// PHY Registration
// =============================================================================

/// Description of the PHY driver handed to the host framework
///
/// The framework binds it to any PHY on the MDIO bus whose masked ID
/// matches, then calls [`Ac200Ephy::init`](crate::phy::PhyDriver::init).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyDescriptor {
    /// PHY identifier
    pub phy_id: u32,
    /// Mask applied before comparing identifiers
    pub phy_id_mask: u32,
    /// Driver name
    pub name: &'static str,
    /// MDIO address the EPHY was told to answer on
    pub phy_addr: u8,
    /// Interface toward the host MAC
    pub interface: PhyInterface,
    /// Apply the H6 RX fixup during init
    pub h6_rx_fixup: bool,
}

impl PhyDescriptor {
    /// Build the descriptor for a configuration
    pub const fn for_config(config: &EphyConfig) -> Self {
        Self {
            phy_id: AC200_EPHY_ID,
            phy_id_mask: AC200_EPHY_ID_MASK,
            name: AC200_EPHY_NAME,
            phy_addr: config.phy_addr,
            interface: config.interface,
            h6_rx_fixup: config.h6_rx_fixup,
        }
    }

    /// Whether a PHY reporting `id` is handled by this descriptor
    pub const fn matches(&self, id: u32) -> bool {
        (id & self.phy_id_mask) == (self.phy_id & self.phy_id_mask)
    }
}

/// Host PHY framework registration hooks
pub trait PhyRegistry {
    /// Make the PHY driver available for binding
    fn register(&mut self, phy: &PhyDescriptor) -> Result<()>;

    /// Withdraw a previously registered PHY driver
    fn unregister(&mut self, phy: &PhyDescriptor);
}

impl<R: PhyRegistry + ?Sized> PhyRegistry for &mut R {
    fn register(&mut self, phy: &PhyDescriptor) -> Result<()> {
        (**self).register(phy)
    }

    fn unregister(&mut self, phy: &PhyDescriptor) {
        (**self).unregister(phy);
    }
}

// =============================================================================
// Power Sequencing
// =============================================================================

/// `EPHY_CTL` value written at probe
pub const fn ephy_ctl_value(config: &EphyConfig, calibration: Calibration) -> u16 {
    let mut value = ephy_ctl::addr(config.phy_addr) | calibration.ctl_bits();
    if config.led_active_low {
        value |= ephy_ctl::LED_POL;
    }
    if config.clock_select {
        value |= ephy_ctl::CLK_SEL;
    }
    value
}

/// Release the EPHY from reset, enable its pads and program its control word
pub fn power_up<C: Ac200Control>(
    control: &mut C,
    config: &EphyConfig,
    calibration: Calibration,
) -> Result<()> {
    control.write(
        reg::SYS_EPHY_CTL0,
        sys_ephy_ctl0::RESET_INVALID | sys_ephy_ctl0::SYSCLK_GATING,
    )?;
    control.write(reg::SYS_EPHY_CTL1, sys_ephy_ctl1::ALL_IO_EN)?;
    control.write(reg::EPHY_CTL, ephy_ctl_value(config, calibration))
}

/// Shut the EPHY down, disable its pads and put it back in reset
///
/// All three writes are attempted; the first failure is returned.
pub fn power_down<C: Ac200Control>(control: &mut C) -> Result<()> {
    let shutdown = control.write(reg::EPHY_CTL, ephy_ctl::SHUTDOWN);
    let pads = control.write(reg::SYS_EPHY_CTL1, 0);
    let reset = control.write(reg::SYS_EPHY_CTL0, 0);
    shutdown.and(pads).and(reset)
}

// =============================================================================
// Device
// =============================================================================

/// Device lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Powered up and registered with the host framework
    Registered,
    /// Unregistered and powered down
    Removed,
}

/// AC200 EPHY device context
///
/// Owns the AC200 control interface for as long as the EPHY is attached.
/// Pass `&mut control` instead of the value to keep ownership outside.
#[derive(Debug)]
pub struct Ac200EphyDevice<C: Ac200Control> {
    /// AC200 parent chip
    control: C,
    /// Registered PHY description
    descriptor: PhyDescriptor,
    /// Calibration applied at probe
    calibration: Calibration,
    /// Configuration used at probe
    config: EphyConfig,
    /// Lifecycle state
    state: State,
}

impl<C: Ac200Control> Ac200EphyDevice<C> {
    /// Attach the EPHY
    ///
    /// Reads the calibration cell named in `config`, powers the EPHY up and
    /// registers its [`PhyDescriptor`] with `registry`.
    pub fn probe<N, R>(
        mut control: C,
        nvmem: &mut N,
        registry: &mut R,
        config: EphyConfig,
    ) -> Result<Self>
    where
        N: NvmemCell,
        R: PhyRegistry,
    {
        config.validate()?;

        let calibration = match Calibration::read(nvmem, config.calibration_cell) {
            Ok(calibration) => calibration,
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::error!("AC200 EPHY: {=str}", err.as_str());
                return Err(err.into());
            }
        };

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "AC200 EPHY calibration raw={=u16:#x} trim={=u16:#x}",
            calibration.raw(),
            calibration.trim()
        );

        power_up(&mut control, &config, calibration)?;

        let descriptor = PhyDescriptor::for_config(&config);
        if let Err(err) = registry.register(&descriptor) {
            #[cfg(feature = "defmt")]
            defmt::error!("AC200 EPHY: unable to register phy ({})", err);
            return Err(err);
        }

        #[cfg(feature = "defmt")]
        defmt::info!("AC200 EPHY registered at MDIO address {}", config.phy_addr);

        Ok(Self {
            control,
            descriptor,
            calibration,
            config,
            state: State::Registered,
        })
    }

    /// Detach the EPHY
    ///
    /// Unregisters the descriptor, then powers the EPHY down. The power-down
    /// writes are all attempted even if one fails.
    pub fn remove<R: PhyRegistry>(&mut self, registry: &mut R) -> Result<()> {
        if self.state != State::Registered {
            return Err(ConfigError::NotRegistered.into());
        }

        registry.unregister(&self.descriptor);
        self.state = State::Removed;

        let result = power_down(&mut self.control);

        #[cfg(feature = "defmt")]
        {
            if let Err(err) = result {
                defmt::warn!("AC200 EPHY: power down incomplete: {}", err);
            }
        }

        result
    }

    /// PHY driver bound to this device's control interface
    ///
    /// This is what the host framework runs once the descriptor has been
    /// matched against a PHY on the MDIO bus.
    pub fn phy_driver(&mut self) -> Ac200Ephy<&mut C> {
        Ac200Ephy::new(
            self.descriptor.phy_addr,
            self.descriptor.interface,
            &mut self.control,
        )
        .with_h6_rx_fixup(self.descriptor.h6_rx_fixup)
    }

    /// Registered PHY description
    pub fn descriptor(&self) -> &PhyDescriptor {
        &self.descriptor
    }

    /// Calibration applied at probe
    pub fn calibration(&self) -> Calibration {
        self.calibration
    }

    /// Configuration used at probe
    pub fn config(&self) -> &EphyConfig {
        &self.config
    }

    /// Lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// Consume the device and return the control interface
    pub fn release(self) -> C {
        self.control
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
