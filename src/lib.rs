// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)         cmd::forward
//!           argv verbatim     env file, invoke, relay
//!                                      |
//!           ,--------------------------+--,
//!           |            config           |
//!           | forge-env.toml, FORGE_ENV_* |
//!           '--------------+--------------'
//!                          v
//!                          forge
//!                 ForgeCommand, Invocation
//!
//!   +-----------------------------------------+
//!   |  core   process, env (.env loading)     |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod forge;
pub mod logging;
