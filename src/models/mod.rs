// src/models/mod.rs

pub mod records;
pub mod topology;

pub use records::{merge, BagTable, CoffeeData, CountryRecord};
pub use topology::{Feature, Topology};
