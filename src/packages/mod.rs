//! Configuration-as-code: one builder per package. Each builder fetches
//! its dependencies' descriptors through the registry and assembles its
//! own package from them.

pub mod cbase;
pub mod chash;
pub mod csocket;
pub mod ctime;
pub mod cunittest;
pub mod cuuid;
