//! CCS811 register map.
//!
//! | Register | Addr | Width | Access |
//! |---|---|---|---|
//! | STATUS | 0x00 | 1 | R |
//! | MEAS_MODE | 0x01 | 1 | R/W |
//! | ALG_RESULT_DATA | 0x02 | 4 | R |
//! | ENV_DATA | 0x05 | 4 | W |
//! | HW_ID | 0x20 | 1 | R |
//! | ERROR_ID | 0xE0 | 1 | R |
//! | APP_START | 0xF4 | 0 | W |
//! | SW_RESET | 0xFF | 4 | W |

pub mod alg_result;
pub mod app_start;
pub mod env_data;
pub mod error_id;
pub mod hw_id;
pub mod meas_mode;
pub mod status;
pub mod sw_reset;
