//! Top-level client orchestrating the Runtime and Frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (battle loop and state ownership)
//!   └─→ Frontend (UI layer - CLI, future GUI)
//! ```
//!
//! The frontend only ever sees a [`RuntimeHandle`](runtime::RuntimeHandle);
//! the client owns the runtime and shuts it down when the frontend returns.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use tracing::{info, warn};

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() receives a built runtime and a frontend
/// 2. Client::run() transfers control to the frontend (blocking)
/// 3. On frontend exit the runtime is asked to quit and joined
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend to completion, then stop the runtime.
    ///
    /// A frontend error takes precedence over a shutdown error.
    pub async fn run(self) -> Result<()> {
        let handle = self.runtime.handle();

        let mut frontend = self.frontend;
        let frontend_result = frontend.run(handle).await;

        match self.runtime.shutdown().await {
            Ok(()) => info!("runtime stopped"),
            Err(error) => {
                warn!(%error, "runtime did not stop cleanly");
                frontend_result?;
                return Err(error.into());
            }
        }

        frontend_result
    }
}
