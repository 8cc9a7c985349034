//! Embedded fallback corpus
//!
//! Curated word list compiled into the binary at build time, installed
//! synchronously so gameplay never waits on the network.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/fallback.rs"));
