//! Embedded frequency tables
//!
//! Tables compiled into the binary at build time.

// Include generated tables from build script
include!(concat!(env!("OUT_DIR"), "/letters.rs"));
include!(concat!(env!("OUT_DIR"), "/bigrams.rs"));
