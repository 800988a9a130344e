use eframe::egui;
use eframe::egui::{Color32, RichText, Stroke};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};
use tracing::{info, warn};

use crate::charts::{
    BiomarkerRadar, ChartColor, ChartSet, ProbabilityBar, ProfileBars, build_charts, polar_to_xy,
};
use crate::input::form::FormState;
use crate::model::features::feature_order;
use crate::model::profile::ModelProfile;
use crate::pipeline::evaluate;

pub const WINDOW_TITLE: &str = "Metastasis Diagnostic Panel";

const PLOT_HEIGHT: f32 = 240.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Result(String),
    Error(String),
}

pub struct MetaRiskApp {
    profile: ModelProfile,
    form: FormState,
    charts: Option<ChartSet>,
    dialog: Option<Dialog>,
}

impl MetaRiskApp {
    pub fn new(profile: ModelProfile) -> Self {
        Self {
            profile,
            form: FormState::defaults(),
            charts: None,
            dialog: None,
        }
    }

    pub fn calculate(&mut self) {
        match self.form.parse() {
            Ok(input) => {
                let eval = evaluate(&input, &self.profile);
                self.dialog = Some(Dialog::Result(format!(
                    "Risk category: {}",
                    eval.result.category.label()
                )));
                self.charts = Some(build_charts(&eval));
            }
            Err(err) => {
                warn!(%err, "form input rejected");
                self.dialog = Some(Dialog::Error(err.to_string()));
            }
        }
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    fn draw_form(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("clinical_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for &feature in feature_order() {
                    ui.label(feature.label());
                    ui.add(
                        egui::TextEdit::singleline(self.form.field_mut(feature))
                            .desired_width(120.0),
                    );
                    ui.end_row();
                }
            });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Calculate").clicked() {
                self.calculate();
            }
            if ui.button("Reset").clicked() {
                self.form.reset();
            }
        });
    }

    fn draw_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &self.dialog else {
            return;
        };
        let (title, message, color) = match dialog {
            Dialog::Result(msg) => ("Result", msg.clone(), None),
            Dialog::Error(msg) => ("Error", msg.clone(), Some(Color32::RED)),
        };
        let mut close = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let text = RichText::new(message);
                match color {
                    Some(c) => ui.label(text.color(c)),
                    None => ui.label(text),
                };
                ui.add_space(6.0);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        if close {
            self.dismiss_dialog();
        }
    }

    fn draw_charts(&self, ui: &mut egui::Ui) {
        let Some(charts) = &self.charts else {
            ui.label("Press Calculate to draw the charts.");
            return;
        };
        ui.columns(3, |cols| {
            draw_probability(&mut cols[0], &charts.probability);
            draw_profile(&mut cols[1], &charts.profile);
            draw_radar(&mut cols[2], &charts.radar);
        });
    }
}

impl eframe::App for MetaRiskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.draw_dialog(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.dialog.is_some() {
                ui.disable();
            }
            self.draw_form(ui);
            ui.separator();
            self.draw_charts(ui);
        });
    }
}

pub fn run(profile: ModelProfile) -> Result<(), eframe::Error> {
    info!(profile = %profile.name, "opening window");
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1000.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(MetaRiskApp::new(profile)))),
    )
}

fn color32(color: ChartColor) -> Color32 {
    let [r, g, b] = color.rgb();
    Color32::from_rgb(r, g, b)
}

fn draw_probability(ui: &mut egui::Ui, bar: &ProbabilityBar) {
    ui.label(RichText::new(bar.title).strong());
    let chart = BarChart::new(vec![
        Bar::new(0.0, bar.value)
            .name(bar.label)
            .fill(color32(bar.color))
            .width(0.6),
    ]);
    Plot::new("probability_plot")
        .height(PLOT_HEIGHT)
        .include_x(-0.6)
        .include_x(0.6)
        .include_y(0.0)
        .include_y(1.0)
        .show_axes([false, true])
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
            plot_ui.text(Text::new(PlotPoint::new(0.0, -0.05), bar.label));
        });
}

fn draw_profile(ui: &mut egui::Ui, profile: &ProfileBars) {
    ui.label(RichText::new(profile.title).strong());
    let fill = color32(profile.color);
    let bars = profile
        .bars
        .iter()
        .enumerate()
        .map(|(i, &(name, value))| Bar::new(i as f64, value).name(name).fill(fill).width(0.6))
        .collect();
    let chart = BarChart::new(bars);
    let n = profile.bars.len() as f64;
    Plot::new("profile_plot")
        .height(PLOT_HEIGHT)
        .include_x(-0.6)
        .include_x(n - 0.4)
        .include_y(0.0)
        .include_y(1.0)
        .y_axis_label(profile.y_label)
        .show_axes([false, true])
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
            for (i, &(name, _)) in profile.bars.iter().enumerate() {
                plot_ui.text(Text::new(PlotPoint::new(i as f64, -0.05), name));
            }
        });
}

fn draw_radar(ui: &mut egui::Ui, radar: &BiomarkerRadar) {
    ui.label(RichText::new(radar.title).strong());
    let accent = Color32::from_rgb(31, 119, 180);
    let grid = Color32::from_gray(160);
    Plot::new("radar_plot")
        .height(PLOT_HEIGHT)
        .data_aspect(1.0)
        .include_x(-1.3)
        .include_x(1.3)
        .include_y(-1.3)
        .include_y(1.3)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for ring in [0.5, 1.0] {
                let circle: Vec<[f64; 2]> = (0..=64)
                    .map(|i| polar_to_xy(ring, std::f64::consts::TAU * i as f64 / 64.0))
                    .collect();
                plot_ui.line(Line::new(PlotPoints::new(circle)).color(grid).width(0.5));
            }
            for spoke in &radar.spokes {
                let tip = polar_to_xy(1.0, spoke.angle);
                plot_ui.line(
                    Line::new(PlotPoints::new(vec![[0.0, 0.0], tip]))
                        .color(grid)
                        .width(0.5),
                );
                let [x, y] = polar_to_xy(1.18, spoke.angle);
                plot_ui.text(Text::new(PlotPoint::new(x, y), spoke.label));
            }
            plot_ui.polygon(
                Polygon::new(PlotPoints::new(radar.outline.clone()))
                    .fill_color(accent.gamma_multiply(0.25))
                    .stroke(Stroke::new(2.0, accent)),
            );
            plot_ui.points(
                Points::new(PlotPoints::new(radar.outline.clone()))
                    .radius(3.5)
                    .color(accent),
            );
        });
}

#[cfg(test)]
#[path = "../../tests/src_inline/gui/tests.rs"]
mod tests;
