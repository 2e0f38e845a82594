//! Tokio-driven automatic stop for timed runs.
//!
//! The controller stays on the host's update loop. A timer task only sleeps and then
//! delivers the [`AutoStopToken`] back to that loop, which passes it to
//! [`BenchmarkRunController::on_auto_stop`](crate::BenchmarkRunController::on_auto_stop).
//! The timer is never cancelled: if the run was stopped, exited or restarted in the
//! meantime, the controller ignores the token.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "async-tokio")]
//! # async fn run() {
//! use std::time::Duration;
//!
//! use framebench::{async_timer, BenchmarkRunController, RunMode};
//! use tokio::sync::mpsc;
//!
//! let (tx, mut rx) = mpsc::unbounded_channel();
//! let mut controller = BenchmarkRunController::new();
//!
//! if let Some(token) = controller.start(RunMode::Timed, Duration::from_secs(10)) {
//!     async_timer::spawn_auto_stop(token, tx);
//! }
//!
//! // In the update loop:
//! while let Ok(token) = rx.try_recv() {
//!     controller.on_auto_stop(token);
//! }
//! # }
//! ```

use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};

use crate::controller::AutoStopToken;

/// Resolves to `token` once its delay has elapsed.
pub async fn auto_stop_after(token: AutoStopToken) -> AutoStopToken {
    tokio::time::sleep(token.after()).await;
    token
}

/// Spawns a task that sends `token` on `tx` once its delay has elapsed.
///
/// A closed channel is not an error: the session that would have received the token
/// is gone.
pub fn spawn_auto_stop(token: AutoStopToken, tx: UnboundedSender<AutoStopToken>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let token = auto_stop_after(token).await;
        if tx.send(token).is_err() {
            tracing::debug!(run_id = token.run_id(), "automatic stop receiver dropped");
        }
    })
}
