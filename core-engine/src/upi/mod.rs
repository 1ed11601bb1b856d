//! UPI Module - Deep-Link Codec
//!
//! Parse scanned deep links into structured params and rebuild canonical
//! `upi://pay?...` links for payment hand-off. Synchronous string
//! transformation only, no I/O.

pub mod types;
pub mod codec;

pub use types::UpiParams;
pub use codec::{
    build_upi_deeplink, parse_upi_string, payment_instructions, UpiError, DEFAULT_CURRENCY,
    UPI_SCHEME_PREFIX,
};
