pub(crate) mod backfill;
pub(crate) mod build_catalog;
pub(crate) mod config;
pub(crate) mod drop_level;
pub(crate) mod merge_report;
pub(crate) mod organize;
