//! Stop flag shared by the signal handler and the server.

use std::future::Future;

use tokio::sync::watch;

/// Latching stop flag.
///
/// Once triggered it stays triggered, so a waiter created after the
/// trigger resolves immediately.
#[derive(Clone)]
pub struct Shutdown {
    stopped: watch::Sender<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (stopped, _) = watch::channel(false);
        Self { stopped }
    }

    /// Ask everything waiting on this flag to stop.
    pub fn trigger(&self) {
        self.stopped.send_replace(true);
    }

    /// A future that resolves once `trigger` has been called.
    pub fn wait(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.stopped.subscribe();
        async move {
            let _ = rx.wait_for(|stopped| *stopped).await;
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
