//! JSON input/output for the command-line front end.

pub mod outcome_writer;
pub mod snapshot_reader;
