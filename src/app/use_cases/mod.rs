//! Use-Cases der Application-Layer-Orchestrierung.

pub mod automaton;
pub mod clipboard;
pub mod editing;
pub mod file_io;
pub mod selection;
