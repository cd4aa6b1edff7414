//! # SlotDesk Client
//!
//! Connects the pure state in `slotdesk-core` to the dashboard REST API.
//!
//! - **api**: collaborator traits and their `reqwest` implementation
//! - **schedule**: load and save the weekly working schedule
//! - **uploads**: push pending attachments and assign returned URLs
//! - **notify**: turn errors into user-facing notices
//! - **config**: environment configuration

pub mod api;
pub mod config;
pub mod display;
pub mod notify;
pub mod schedule;
pub mod uploads;

pub mod mock;
