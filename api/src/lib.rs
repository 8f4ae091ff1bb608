// Module layout
// - bootstrap: configuration and shared application context
// - infrastructure: Postgres adapters for the repository ports
// - presentation: HTTP handlers, access middleware and routing
// - application: access policy, validation and use cases
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

#[cfg(test)]
pub(crate) mod test_support;
