//! # SlotDesk Core
//!
//! Pure, synchronous domain logic for the SlotDesk dashboard:
//!
//! - **grid**: the weekly time-bucket grid and row visibility
//! - **selection**: the working set of selected slots and its bulk operations
//! - **upload**: reconciliation of displayed attachments against a new selection
//! - **preview**: lifecycle of locally created preview URLs
//! - **cache**: an explicit keyed cache for fetched resources
//!
//! Nothing in this crate performs I/O. Network collaborators live in
//! `slotdesk-client`.

pub mod cache;
pub mod errors;
pub mod grid;
pub mod matching;
pub mod models;
pub mod preview;
pub mod selection;
pub mod upload;
