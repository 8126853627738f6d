#![no_std]

mod ballot;
mod storage;

pub use ballot::{BallotContract, BallotContractClient};
