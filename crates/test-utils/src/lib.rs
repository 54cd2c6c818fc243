//! Shared helpers for the `fakerun` test suites.

pub mod builders;

use std::future::Future;
use std::sync::OnceLock;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

/// Upper bound for any single async test body.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

static TRACING: OnceLock<()> = OnceLock::new();

/// Route `tracing` output into the libtest capture buffer.
///
/// Idempotent across tests in one binary. `RUST_LOG` picks the filter and
/// defaults to `fakerun=debug`, so responder decisions show up next to a
/// failing assertion.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("fakerun=debug"));

        // Another harness may have installed a subscriber first; keep theirs.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init();
    });
}

/// Await `fut`, panicking if it outlives [`TEST_TIMEOUT`].
pub async fn with_timeout<F: Future>(fut: F) -> F::Output {
    match tokio::time::timeout(TEST_TIMEOUT, fut).await {
        Ok(out) => out,
        Err(_) => panic!("test body exceeded {TEST_TIMEOUT:?}"),
    }
}
