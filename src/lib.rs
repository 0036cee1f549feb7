// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod clientset;
pub mod config;
pub mod constants;
pub mod error;
pub mod flowcontrol;
pub mod kubernetes;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use clientset::{Clientset, Interface};
pub use config::RestConfig;
