//! Route tables, one per adapter

pub mod api;
pub mod health;
pub mod pages;
