// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// artproof-server — thin HTTP plumbing in front of the validation engine.

pub mod routes;

pub use routes::router;
