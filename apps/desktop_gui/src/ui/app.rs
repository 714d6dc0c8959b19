//! Application shell: query input, request lifecycle, and rendering of the
//! recommendation text.
//!
//! The response text is untrusted. It is rendered one label per line, never
//! parsed as markup, so whatever the service sends shows up as plain text.

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{RequestCoordinator, RequestState};
use crate::ui::theme;

const EXAMPLE_QUERIES: [&str; 4] = [
    "Suggest thriller movies similar to Inception",
    "Top-rated comedy movies from the last 2 years",
    "Korean movies similar to Parasite",
    "Family-friendly adventure movies",
];

const QUERY_HINT: &str = "Describe what you're looking for... (e.g., 'Suggest thriller movies similar to Inception and Shutter Island')";

pub struct CinemaMatchApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    query: String,
    coordinator: RequestCoordinator,
    status: String,
    theme_applied: bool,
}

impl CinemaMatchApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            query: String::new(),
            coordinator: RequestCoordinator::new(),
            status: "Starting backend worker...".to_string(),
            theme_applied: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::RecommendationsReady { generation, text } => {
                    if self.coordinator.apply_success(generation, text) {
                        self.status = "Recommendations ready".to_string();
                    } else {
                        tracing::debug!(
                            generation = generation.0,
                            "discarded settlement for a request no longer in flight"
                        );
                    }
                }
                UiEvent::RecommendationsFailed {
                    generation,
                    message,
                } => {
                    if self.coordinator.apply_failure(generation, message) {
                        self.status = "Request failed".to_string();
                    } else {
                        tracing::debug!(
                            generation = generation.0,
                            "discarded failure for a request no longer in flight"
                        );
                    }
                }
            }
        }
    }

    fn submit_query(&mut self) {
        let Some(submission) = self.coordinator.begin_submission(&self.query) else {
            return;
        };
        let generation = submission.generation;
        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::FetchRecommendations {
                query: submission.query,
                generation,
            },
            &mut self.status,
        );
        if !queued {
            // The worker will never answer this submission; settle it now so
            // the UI does not stay loading forever.
            self.coordinator
                .apply_failure(generation, client_core::FALLBACK_ERROR_MESSAGE.to_string());
        }
    }

    fn show_header(&self, ctx: &egui::Context) {
        let palette = theme::cinema_match_palette();
        egui::TopBottomPanel::top("app_header")
            .resizable(false)
            .frame(
                egui::Frame::new()
                    .fill(palette.header_background)
                    .inner_margin(egui::Margin::symmetric(16, 12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("🎬").size(26.0));
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new("CinemaMatch")
                                .strong()
                                .size(24.0)
                                .color(palette.title_text),
                        );
                        ui.label(
                            egui::RichText::new("Your Personal AI Movie Curator")
                                .small()
                                .color(palette.tagline_text),
                        );
                    });
                });
            });
    }

    fn show_footer(&self, ctx: &egui::Context) {
        let palette = theme::cinema_match_palette();
        egui::TopBottomPanel::bottom("app_footer")
            .resizable(false)
            .frame(
                egui::Frame::new()
                    .fill(palette.header_background)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Built with ❤️ using Agno AI and OpenAI GPT-4o")
                            .small()
                            .color(palette.hint_text),
                    );
                    ui.label(
                        egui::RichText::new("© 2024 CinemaMatch. All rights reserved.")
                            .small()
                            .color(palette.footer_text),
                    );
                });
            });
    }

    fn show_main(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let avail = ui.available_size();
                    let card_width = avail.x.clamp(440.0, 720.0);
                    let top_space = (avail.y * 0.08).clamp(12.0, 60.0);

                    ui.add_space(top_space);
                    ui.vertical_centered(|ui| {
                        ui.set_width(card_width);
                        self.show_search_card(ui);

                        match self.coordinator.state() {
                            RequestState::Error(message) => {
                                ui.add_space(12.0);
                                show_error_card(ui, message);
                            }
                            RequestState::Success(text) => {
                                ui.add_space(12.0);
                                show_results_card(ui, text.lines());
                            }
                            RequestState::Idle | RequestState::Loading(_) => {}
                        }
                    });
                    ui.add_space(top_space);
                });
        });
    }

    fn show_search_card(&mut self, ui: &mut egui::Ui) {
        let palette = theme::cinema_match_palette();
        egui::Frame::NONE
            .fill(palette.card_background)
            .corner_radius(14.0)
            .stroke(egui::Stroke::new(1.0, palette.card_stroke))
            .inner_margin(egui::Margin::symmetric(20, 18))
            .show(ui, |ui| {
                ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("✨").size(18.0));
                    ui.heading(
                        egui::RichText::new("Discover Your Next Favorite Movie")
                            .color(palette.title_text),
                    );
                });

                let edit = egui::TextEdit::multiline(&mut self.query)
                    .id_salt("query_text")
                    .hint_text(egui::RichText::new(QUERY_HINT).color(palette.hint_text))
                    .desired_rows(4)
                    .desired_width(f32::INFINITY);
                ui.add(edit);

                let loading = self.coordinator.is_loading();
                let can_submit = self.coordinator.can_submit(&self.query);
                let button_label = if loading {
                    "Finding Movies..."
                } else {
                    "Get Recommendations"
                };
                let button = egui::Button::new(
                    egui::RichText::new(button_label)
                        .strong()
                        .size(16.0)
                        .color(palette.title_text),
                )
                .fill(palette.accent)
                .min_size(egui::vec2(ui.available_width(), 40.0));
                if ui.add_enabled(can_submit, button).clicked() {
                    self.submit_query();
                }

                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("Try these examples:")
                        .small()
                        .color(palette.hint_text),
                );
                ui.horizontal_wrapped(|ui| {
                    for example in EXAMPLE_QUERIES {
                        if ui.small_button(example).clicked() {
                            self.query = example.to_string();
                        }
                    }
                });

                ui.add_space(4.0);
                ui.separator();
                ui.horizontal_wrapped(|ui| {
                    if self.coordinator.is_loading() {
                        ui.add(egui::Spinner::new().size(12.0));
                    }
                    ui.small("Status:");
                    ui.small(egui::RichText::new(&self.status).weak());
                });
            });
    }
}

fn show_error_card(ui: &mut egui::Ui, message: &str) {
    let palette = theme::cinema_match_palette();
    egui::Frame::NONE
        .fill(palette.error_background)
        .corner_radius(12.0)
        .stroke(egui::Stroke::new(1.0, palette.error_stroke))
        .inner_margin(egui::Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("Error")
                    .strong()
                    .color(palette.error_text),
            );
            ui.label(
                egui::RichText::new(message)
                    .small()
                    .color(palette.error_text),
            );
        });
}

fn show_results_card<'a>(ui: &mut egui::Ui, lines: impl Iterator<Item = &'a str>) {
    let palette = theme::cinema_match_palette();
    egui::Frame::NONE
        .fill(palette.card_background)
        .corner_radius(14.0)
        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
        .inner_margin(egui::Margin::symmetric(20, 18))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("🎬").size(18.0));
                ui.heading(
                    egui::RichText::new("Your Personalized Recommendations")
                        .color(palette.title_text),
                );
            });
            ui.add_space(8.0);
            // One label per line; blank lines keep their vertical space so
            // paragraph breaks stay visible.
            for line in lines {
                if line.is_empty() {
                    ui.add_space(8.0);
                } else {
                    ui.label(egui::RichText::new(line).color(palette.body_text));
                }
            }
        });
}

impl eframe::App for CinemaMatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        self.show_header(ctx);
        self.show_footer(ctx);
        self.show_main(ctx);

        // Poll the event queue faster while a request is in flight.
        if self.coordinator.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(500));
        }
    }
}
