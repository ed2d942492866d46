//! Everything the selector sends out of the process: the panel presented to the user
//! and the execution of the selected build
pub mod executors;
pub mod panel;
