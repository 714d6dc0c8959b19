//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues a command for the backend worker. Returns false when the command
/// was not queued, so the caller can settle any in-flight state instead of
/// waiting for an event that will never arrive.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = match &cmd {
        BackendCommand::FetchRecommendations { .. } => "fetch_recommendations",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "Request queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend command processor disconnected; restart the app".to_string();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::domain::RequestGeneration;

    fn sample_command() -> BackendCommand {
        BackendCommand::FetchRecommendations {
            query: "Korean movies similar to Parasite".to_string(),
            generation: RequestGeneration(1),
        }
    }

    #[test]
    fn queues_command_and_leaves_status_alone() {
        let (tx, rx) = bounded(4);
        let mut status = String::new();

        assert!(dispatch_backend_command(&tx, sample_command(), &mut status));
        assert!(status.is_empty());
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn full_queue_reports_and_returns_false() {
        let (tx, _rx) = bounded(0);
        let mut status = String::new();

        assert!(!dispatch_backend_command(&tx, sample_command(), &mut status));
        assert!(status.contains("full"));
    }

    #[test]
    fn disconnected_queue_reports_and_returns_false() {
        let (tx, rx) = bounded(4);
        drop(rx);
        let mut status = String::new();

        assert!(!dispatch_backend_command(&tx, sample_command(), &mut status));
        assert!(status.contains("disconnected"));
    }
}
