#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Client-side analysis over a fetched incident list.
//!
//! [`filter`] narrows the list to the selected category and [`hotspot`]
//! ranks locations by incident count. Both are pure functions of their
//! input; nothing here is cached between fetches.

pub mod filter;
pub mod hotspot;

pub use filter::filter_incidents;
pub use hotspot::{DEFAULT_HOTSPOT_LIMIT, count_by_location, detect_hotspots};
