//! The higher abstractions of the program

pub mod commands;
pub mod descriptor;
pub mod reference;
pub mod target;
