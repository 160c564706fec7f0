// ABOUTME: Library crate for the tradein storefront exposing public API for testing and the binary

#![allow(missing_docs)]

pub mod api;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod models;
pub mod server;
pub mod wizard;
