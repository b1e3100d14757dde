//! Response bodies of the JSON API.

pub mod bags;
pub mod feed;
pub mod weights;
