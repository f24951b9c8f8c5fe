//! User-facing output.

pub mod formatter;

pub use formatter::{
    describe_update, display_error, display_result, display_stage, display_status,
    display_success, format_error, PROGRAM_TAG,
};
