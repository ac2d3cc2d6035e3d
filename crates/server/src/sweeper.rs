//! Idle-session sweeper
//!
//! The engine never expires sessions itself; this background task is the
//! supervising TTL policy. It periodically resets sessions whose last
//! interaction is older than the configured retention window.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use tourbot_engine::ChatEngine;

/// Start the periodic sweep task.
///
/// Returns a shutdown sender; send `true` to stop the task.
pub fn start_sweeper(
    engine: Arc<ChatEngine>,
    session_ttl: Duration,
    interval: Duration,
) -> watch::Sender<bool> {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let ttl = chrono::Duration::seconds(session_ttl.as_secs() as i64);

    tokio::spawn(async move {
        let mut timer = tokio::time::interval(interval);
        timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = timer.tick() => {
                    engine.sweep_idle(ttl);
                }
                _ = shutdown_rx.changed() => {
                    if *shutdown_rx.borrow() {
                        tracing::info!("session sweeper shutting down");
                        break;
                    }
                }
            }
        }
    });

    shutdown_tx
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourbot_config::Settings;

    #[tokio::test]
    async fn test_sweeper_removes_idle_sessions() {
        let engine = Arc::new(ChatEngine::new(&Settings::default()));
        let id = engine.create_session("idler", None).unwrap();

        // Zero TTL: everything is idle as soon as the first tick fires
        let shutdown = start_sweeper(
            engine.clone(),
            Duration::from_secs(0),
            Duration::from_millis(10),
        );

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(engine.session(&id).is_err());

        let _ = shutdown.send(true);
    }
}
