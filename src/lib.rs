//! cwmerge: CloudWatch agent configuration merger
//!
//! Combines two CloudWatch agent configuration files into one that keeps every
//! distinct metric, dimension and setting from both, without duplicates.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod merge;
