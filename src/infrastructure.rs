//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing and configuration files
//! - The blog service REST client
//! - Durable session storage

pub mod api;
pub mod cli;
pub mod config;
pub mod storage;
pub mod tui;
