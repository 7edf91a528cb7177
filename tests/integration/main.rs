//! Integration tests for segshuf
//!
//! All test modules build into one binary.

mod helpers;

mod cli_test;
mod navigator_test;
mod session_test;
mod source_test;
