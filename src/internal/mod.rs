//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//!
//! # Contents
//!
//! - [`ac200_regs`]: AC200 system and EPHY control register map
//! - [`ephy_regs`]: EPHY vendor MDIO register pages and tuning values
//!
//! # Stability
//!
//! **WARNING:** This module is `pub(crate)` only. Register names are
//! re-exported read-only through [`crate::registers`].

pub(crate) mod ac200_regs;
pub(crate) mod ephy_regs;
