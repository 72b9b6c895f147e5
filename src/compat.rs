//! Allocation types for every module.
//!
//! The crate only needs `alloc`, so these come from `alloc` in both `std` and
//! `no_std` builds.

pub use alloc::borrow::Cow;
pub use alloc::format;
pub use alloc::string::{String, ToString};
pub use alloc::vec;
pub use alloc::vec::Vec;
