//! Foundation utilities shared by the player and its binaries

pub mod logging;
