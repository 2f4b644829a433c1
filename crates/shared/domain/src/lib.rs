//! # Domain Models
//!
//! Plain data shared by every slice: the event catalog, the registration draft and
//! request, user-facing notifications and the site configuration.
//! Keep it lean: no I/O and no async, only types and small helpers.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod notification;
pub mod registration;
