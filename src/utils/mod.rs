/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Shared utilities for plane-wave DFT calculations

pub mod constants;

pub use constants::*;
