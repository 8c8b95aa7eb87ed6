//! Platform-agnostic logic behind the landing page, plus the browser glue in
//! [`platform`].

pub mod anchors;
pub mod cursor;
pub mod error;
pub mod language;
pub mod navigator;
pub mod newsletter;
pub mod platform;
pub mod preview;
pub mod tilt;
pub mod timing;
pub mod tracker;

#[cfg(test)]
pub(crate) mod testing;
