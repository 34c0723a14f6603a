//! CLI command implementations.

pub(crate) mod export;
pub(crate) mod routes;
pub(crate) mod serve;

pub(crate) use export::ExportArgs;
pub(crate) use routes::RoutesArgs;
pub(crate) use serve::ServeArgs;
