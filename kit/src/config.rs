//! Compile-time configuration.
//!
//! `bluecap-kit` has configuration settings that are set at compile time, through
//! environment variables at build time: set the variable named `BLUECAP_KIT_<value>`. For example
//! `BLUECAP_KIT_MAX_VALUE_LEN=244 cargo build`. You can also set them in the `[env]` section of
//! `.cargo/config.toml`.
//!
//! ## Compatibility warning
//!
//! Lowering these values shrinks the buffers used by the bounded encode path. Records that
//! used to fit in a [`ValueBuffer`](crate::ValueBuffer) may then fail with
//! [`Error::InsufficientSpace`](crate::Error::InsufficientSpace).

mod raw {
    #![allow(unused)]
    include!(concat!(env!("OUT_DIR"), "/config.rs"));
}

/// Maximum characteristic value length
///
/// Capacity of [`ValueBuffer`](crate::ValueBuffer), the no-alloc output of the bounded
/// serializers. Set it to the negotiated ATT MTU payload if values must fit in one PDU.
///
/// Default: 512.
pub const MAX_VALUE_LEN: usize = raw::MAX_VALUE_LEN;
