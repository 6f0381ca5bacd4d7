//! Board-specific helpers.
//!
//! The board helpers encapsulate EPHY defaults and SoC assumptions for a
//! specific platform. They define the "happy path" for bring-up code.
//!
//! # Supported Boards
//!
//! - Allwinner H6 + AC200 (calibration in the SID eFuse, RMII, PHY addr 1)

pub mod h6;
