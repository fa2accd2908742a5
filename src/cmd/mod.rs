// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::forward::run_forward_command
//! ```

pub mod forward;
