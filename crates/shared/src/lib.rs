//! Wire and domain types shared between the vendor client and its front-ends.

pub mod domain;
pub mod protocol;
