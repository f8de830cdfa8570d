//! End-to-end smoke tester for the Arenda PRO rental API. Drives a running
//! server instance over HTTP and reports pass/fail per check.

pub mod cli;
pub mod scenarios;
