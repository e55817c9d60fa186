// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! A single shared “Intcode computer”: a register-free, memory-based
//! machine with position, immediate, and relative addressing, sparse
//! auto-growing memory, cooperative suspend/resume around input and
//! output, and deep-copy snapshots for forking search. The other
//! modules are layers over its public contract.

pub mod machine;
pub mod bignum;
pub mod amplifiers;
pub mod ascii;
pub mod droid;

pub use machine::{Cell, Fault, Machine, Memory, Snapshot, Step};
