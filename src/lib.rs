//! Core library for the ipmdb-tools command line application.
//!
//! The library exposes the release pipeline that turns the two curated Excel
//! workbooks into the flat-file form of the database. The modules are
//! structured to keep responsibilities narrow and composable: IO adapters live
//! under [`ipmdb::tools::io`], data representations inside
//! [`ipmdb::tools::model`], the fixed table schema in [`ipmdb::tools::schema`],
//! the merge and normalization stages in [`ipmdb::tools::merge`] and
//! [`ipmdb::tools::normalize`], and the release orchestration under
//! [`ipmdb::tools::pipeline`].

pub mod ipmdb;

pub use ipmdb::tools::{Result, ToolError, error, io, merge, model, normalize, pipeline, schema};
