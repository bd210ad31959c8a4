//! BME280 register map.
//!
//! | Register | Addr | Width | Access |
//! |---|---|---|---|
//! | calibration | 0x88..0xE7 | 1-2 | R |
//! | ID | 0xD0 | 1 | R |
//! | CTRL_HUM | 0xF2 | 1 | R/W |
//! | CTRL_MEAS | 0xF4 | 1 | R/W |
//! | CONFIG | 0xF5 | 1 | R/W |
//! | BURST_DATA | 0xF7 | 8 | R |

pub mod calibration;
pub mod config;
pub mod ctrl_hum;
pub mod ctrl_meas;
pub mod data;
pub mod id;
