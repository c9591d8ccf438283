// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::cargo_common_metadata, clippy::multiple_crate_versions)]

mod client;
mod config;
mod error;
mod export;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use client::{EmployeeApi, HttpEmployeeApi};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{ApiError, ConsoleError, Mutation};
pub use export::{EXPORT_HEADERS, write_employees_csv};
pub use handlers::ConsoleSession;
pub use request_response::EmployeeDto;
