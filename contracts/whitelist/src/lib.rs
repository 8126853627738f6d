#![no_std]

mod registry;
mod storage;

pub use registry::{WhitelistRegistry, WhitelistRegistryClient};

#[cfg(test)]
mod test;
