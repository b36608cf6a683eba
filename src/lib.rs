// src/lib.rs

//! Blog generator Lambda library

pub mod config;
pub mod error;
pub mod handler;
pub mod inference;
pub mod models;
pub mod storage;
