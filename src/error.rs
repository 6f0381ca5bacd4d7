//! Error types for the AC200 EPHY driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Configuration and registration failures
//! - [`CalibrationError`]: Factory calibration lookup and validation
//! - [`IoError`]: MDIO and AC200 control bus failures
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by most driver methods. Every error is fatal to device bring-up; none
//! are retried.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and registration errors
///
/// These errors occur while validating driver configuration or while
/// handing the PHY description to the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Invalid configuration parameter
    InvalidConfig,
    /// Invalid PHY address (must be 0-31)
    InvalidPhyAddress,
    /// The device is not registered (already removed)
    NotRegistered,
    /// The host framework rejected the PHY description
    RegistrationFailed,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidConfig => "invalid configuration",
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::NotRegistered => "PHY not registered",
            ConfigError::RegistrationFailed => "unable to register PHY",
        }
    }
}

// =============================================================================
// Calibration Errors
// =============================================================================

/// Factory calibration errors
///
/// The calibration value lives in a one-time-programmable NVMEM cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// The calibration cell does not exist
    Missing,
    /// The calibration cell exists but could not be read
    ReadFailed,
    /// The calibration cell has an unexpected size
    WrongLength {
        /// Required cell length in bytes
        expected: usize,
        /// Length reported by the provider
        actual: usize,
    },
}

impl core::fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CalibrationError::WrongLength { expected, actual } => write!(
                f,
                "calibration data has wrong length: {expected} != {actual}"
            ),
            _ => f.write_str(self.as_str()),
        }
    }
}

impl CalibrationError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CalibrationError::Missing => "unable to find calibration data",
            CalibrationError::ReadFailed => "unable to read calibration data",
            CalibrationError::WrongLength { .. } => "calibration data has wrong length",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Register access errors
///
/// These errors occur on the MDIO bus (PHY side) or on the AC200
/// control bus (parent chip side).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// Bus transaction failed
    BusError,
    /// Operation timed out
    Timeout,
    /// Device did not acknowledge its address
    Nack,
    /// PHY communication error (MDIO failure)
    PhyError,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::BusError => "bus error",
            IoError::Timeout => "operation timed out",
            IoError::Nack => "no acknowledge",
            IoError::PhyError => "PHY communication error",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match Ac200EphyDevice::probe(ctrl, &mut nvmem, &mut registry, config) {
///     Err(Error::Calibration(CalibrationError::Missing)) => { /* ... */ }
///     Err(Error::Io(IoError::Nack)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// Calibration error
    Calibration(CalibrationError),
    /// I/O error
    Io(IoError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {e}"),
            Error::Calibration(e) => write!(f, "calibration: {e}"),
            Error::Io(e) => write!(f, "io: {e}"),
        }
    }
}

// From impls for automatic conversion
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<CalibrationError> for Error {
    fn from(e: CalibrationError) -> Self {
        Error::Calibration(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for calibration operations
pub type CalibrationResult<T> = core::result::Result<T, CalibrationError>;

/// Result type alias for I/O operations
pub type IoResult<T> = core::result::Result<T, IoError>;

// =============================================================================
// Unit Tests
// =============================================================================
