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
#![allow(clippy::cargo_common_metadata)]

mod chart;
mod error;
mod form;
mod list_view;
mod store;

#[cfg(test)]
mod tests;

pub use chart::ChartAggregator;
pub use error::CoreError;
pub use form::{FormController, FormState, SaveCompletion, SaveKind, SaveRejection, SaveTicket};
pub use list_view::{ListPage, ListRow, ListView, ListViewState, PAGE_SIZE, total_pages_for};
pub use store::{LoadTicket, RecordStore};
