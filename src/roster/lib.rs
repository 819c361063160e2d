//! # Roster Architecture
//!
//! Roster keeps a list of players and edits them through short, prefix-style
//! commands such as `editemail pl/Sergio Ramos e/iamramos@gmail.com`. The
//! library does all of the work; the binary only reads lines and prints.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                              │
//! │  - Reads lines, prints results, owns stdout/stderr          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parsing Layer (parser/)                                    │
//! │  - Command word dispatch, prefix tokenizing                 │
//! │  - Raw tokens → validated field values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PersonStore trait, InMemoryStore                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validated Values
//!
//! Every field of a [`model::Person`] is a newtype whose constructor is the
//! only way in. Parsing, deserializing and editing all go through those
//! constructors, so a `Person` never holds a malformed email or name.
//!
//! ## Errors
//!
//! Each layer has its own error enum in [`error`]: [`error::ParseError`] for
//! malformed input, [`error::CommandError`] for failures against the roster,
//! [`error::StoreError`] at the storage boundary. None of them end the
//! program; the CLI reports them and reads the next line.
//!
//! ## Module Overview
//!
//! - [`parser`]: Command word dispatch and argument parsing
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and the in-memory roster
//! - [`model`]: `Person` and its validated field types
//! - [`validation`]: Pure format rules for each field
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod store;
pub mod validation;
