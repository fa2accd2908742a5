// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::resolve("forge", &env, cwd)
//!   .args() .cwd() .env()
//!   .run()
//!       --> tokio::process::Command
//!           stdin null, stdout/stderr buffered
//!       --> ProcessOutput { termination, stdout, stderr }
//! ```

pub mod builder;
mod io;
mod runner;
