//! CLI subcommands.

pub(crate) mod convert;
pub(crate) mod paths;
pub(crate) mod show;
