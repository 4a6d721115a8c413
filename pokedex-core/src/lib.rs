//! Pokedex core library exports

pub mod catalog;
pub mod config;
pub mod favorites;
pub mod storage;
