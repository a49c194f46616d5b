//! Common types for legacy Ethereum transaction signing.
//!
//! This crate provides the value types shared by the `ethtx` signer and
//! the command-line driver:
//! - [`Buffer`]: the byte container every transaction field flows through
//! - [`TxError`]: error codes for encoding, signing and recovery
//! - fixed-width aliases and the recoverable signature layout
//!
//! The crate is `no_std` + `alloc`; the `std` feature adds
//! `std::error::Error` and the `serde` feature adds hex-string
//! serialization for [`Buffer`].

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod buffer;
pub mod error;
pub mod types;

pub use buffer::Buffer;
pub use error::TxError;
pub use types::*;
