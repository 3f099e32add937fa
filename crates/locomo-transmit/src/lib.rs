//! locomo-transmit
//!
//! Forwards a classified result to the remote logging endpoint. The payload
//! has a single, versioned shape; transport failures are reported back to
//! the caller and never retried here.

pub mod client;
pub mod error;
pub mod payload;
