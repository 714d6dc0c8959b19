//! Runtime bridge between UI command queue and backend event intake.
//!
//! One worker thread owns a tokio runtime and drains commands sequentially,
//! so at most one request is in flight and settlements come back in
//! submission order.

use std::thread;

use client_core::{ClientConfig, RecommendationClient};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(config: ClientConfig, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Info(format!(
                    "Backend worker startup failure: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = RecommendationClient::new(config);
            tracing::info!(base_url = client.base_url(), "backend worker ready");
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            // Exits when the UI drops its sender; pending sends after the UI
            // is gone are discarded by try_send.
            while let Ok(cmd) = cmd_rx.recv() {
                handle_command(&client, cmd, &ui_tx).await;
            }
        });
    });
}

async fn handle_command(
    client: &RecommendationClient,
    cmd: BackendCommand,
    ui_tx: &Sender<UiEvent>,
) {
    match cmd {
        BackendCommand::FetchRecommendations { query, generation } => {
            tracing::info!(
                generation = generation.0,
                query_len = query.len(),
                "backend: fetch_recommendations"
            );
            match client.fetch_recommendations(&query).await {
                Ok(text) => {
                    let _ = ui_tx.try_send(UiEvent::RecommendationsReady { generation, text });
                }
                Err(err) => {
                    tracing::error!(
                        generation = generation.0,
                        "backend: fetch_recommendations failed: {err}"
                    );
                    let _ = ui_tx.try_send(UiEvent::RecommendationsFailed {
                        generation,
                        message: err.user_message(),
                    });
                }
            }
        }
    }
}
