//! Compile-time build information embedded by build.rs.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
