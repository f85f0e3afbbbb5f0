//! CLI library components for the serovar QC tool.

pub mod logging;
