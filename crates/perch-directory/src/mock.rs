//! Mock bench directory for deterministic testing.
//!
//! Serves a configured set of bench records without any network I/O, with
//! optional simulated latency and failures. Clones share one call log, so a
//! test can hand a clone to the engine and assert on calls afterwards.
//!
//! ## Usage
//!
//! ```rust
//! use perch_core::BenchDirectory;
//! use perch_directory::MockDirectory;
//!
//! #[tokio::main]
//! async fn main() -> perch_core::Result<()> {
//!     let directory = MockDirectory::new().with_latency_ms(5);
//!     let benches = directory.fetch_all().await?;
//!     assert!(benches.is_empty());
//!     Ok(())
//! }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use perch_core::{BenchDirectory, BenchRecord, Error, Result};

/// Mock bench directory for testing.
#[derive(Clone)]
pub struct MockDirectory {
    config: Arc<MockDirectoryConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Debug, Clone, Default)]
struct MockDirectoryConfig {
    benches: Vec<BenchRecord>,
    latency_ms: u64,
    failure_rate: f64,
}

/// One logged directory call.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub operation: String,
    pub timestamp: std::time::Instant,
}

impl MockDirectory {
    /// Create a new empty mock directory.
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockDirectoryConfig::default()),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the bench records the directory serves.
    pub fn with_benches(mut self, benches: Vec<BenchRecord>) -> Self {
        Arc::make_mut(&mut self.config).benches = benches;
        self
    }

    /// Set simulated latency for all operations.
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        Arc::make_mut(&mut self.config).latency_ms = latency_ms;
        self
    }

    /// Set failure rate (0.0 - 1.0) for testing error handling.
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        Arc::make_mut(&mut self.config).failure_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Get all logged calls for assertion.
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Clear the call log.
    pub fn clear_calls(&self) {
        self.call_log.lock().unwrap().clear()
    }

    /// Get number of fetch calls.
    pub fn fetch_call_count(&self) -> usize {
        self.call_log
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.operation == "fetch_all")
            .count()
    }

    fn log_call(&self, operation: &str) {
        self.call_log.lock().unwrap().push(MockCall {
            operation: operation.to_string(),
            timestamp: std::time::Instant::now(),
        });
    }

    fn should_fail(&self) -> bool {
        use rand::Rng;
        if self.config.failure_rate > 0.0 {
            rand::thread_rng().gen::<f64>() < self.config.failure_rate
        } else {
            false
        }
    }

    async fn simulate_latency(&self) {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;
        }
    }
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BenchDirectory for MockDirectory {
    async fn fetch_all(&self) -> Result<Vec<BenchRecord>> {
        self.log_call("fetch_all");
        self.simulate_latency().await;

        if self.should_fail() {
            return Err(Error::Directory(
                "Simulated directory failure".to_string(),
            ));
        }

        Ok(self.config.benches.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
