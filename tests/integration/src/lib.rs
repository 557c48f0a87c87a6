//! Shared helpers for the integration tests.

use tracing_subscriber::EnvFilter;
use xds_resource_cache::prelude::*;

/// Install a test-writer tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to `xds_cache=trace` so cache operations show
/// up in `--nocapture` output.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("xds_cache=trace"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// A virtual host named `name` serving `domains`.
pub fn vhost(name: &str, domains: &[&str]) -> VirtualHost {
    VirtualHost::new(name, domains.iter().copied())
}

/// A virtual host for the `i`th application, routed to its own cluster.
pub fn app_vhost(i: usize) -> VirtualHost {
    let name = format!("default/app-{:05}", i);
    VirtualHost::new(name.clone(), [format!("app-{}.example.com", i)])
        .with_route(Route::prefix("/", name))
}
