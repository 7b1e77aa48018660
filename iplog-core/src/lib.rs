#![allow(clippy::type_complexity)]
#![allow(clippy::from_over_into)]
#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

pub use error::IplogError;
pub use hostname::{normalize, Rejection, Validator};
pub use pipeline::{Outcome, Pipeline, SENTINEL_BACK};
pub use store::{RecordId, RecordStore, ResolvedRecord, SqliteStore};

pub type Result<T> = std::result::Result<T, IplogError>;

mod error;
pub mod history;
pub mod hostname;
mod pipeline;
pub mod resolver;
pub mod store;
