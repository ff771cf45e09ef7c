use crate::config::AppConfig;
use crate::event::{SelectionEvent, SelectionLog};
use crate::model::{Item, ItemId};
use crate::selection::SelectionStore;
use crate::stats::{to_percent, Stats, StatsCache, TargetSpec};
use crate::theme::Theme;
use eframe::egui::{self, Key, KeyboardShortcut, Modifiers, Pos2, RichText, ScrollArea, Sense};

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

pub struct PickerApp {
    items: Vec<Item>,
    target: TargetSpec,
    store: SelectionStore,
    stats: StatsCache,
    selection_log: SelectionLog,
    theme: Theme,
}

impl PickerApp {
    pub fn new(config: &AppConfig, items: Vec<Item>) -> Self {
        Self {
            items,
            target: config.target,
            store: SelectionStore::new(),
            stats: StatsCache::new(),
            selection_log: SelectionLog::default(),
            theme: Theme::default(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn toggle_item(&mut self, id: ItemId) -> bool {
        let selected = self.store.toggle(id);
        self.selection_log.push(SelectionEvent::ItemToggled {
            item_id: id,
            selected,
            history_depth: self.store.depth(),
        });
        selected
    }

    pub fn undo(&mut self) -> bool {
        let applied = self.store.undo();
        let event = if applied {
            SelectionEvent::UndoApplied {
                history_depth: self.store.depth(),
            }
        } else {
            SelectionEvent::UndoIgnored
        };
        self.selection_log.push(event);
        applied
    }

    pub fn current_stats(&mut self) -> Stats {
        self.stats
            .get(&self.items, self.store.current(), &self.target)
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let mut undo_now = ctx.input_mut(|input| input.consume_shortcut(&UNDO_SHORTCUT));
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Ratio Picker");
                ui.separator();
                undo_now |= ui
                    .button("Undo")
                    .on_hover_text(ctx.format_shortcut(&UNDO_SHORTCUT))
                    .clicked();
                ui.separator();
                ui.label(
                    RichText::new(format!(
                        "{} of {} selected · history {}",
                        self.store.current().len(),
                        self.items.len(),
                        self.store.depth()
                    ))
                    .color(self.theme.text_muted),
                );
            });
        });

        if undo_now {
            self.undo();
        }
    }

    fn render_stats_panel(&mut self, ctx: &egui::Context) {
        let stats = self.current_stats();
        let theme = self.theme.clone();
        let target = self.target;
        egui::SidePanel::right("stats_panel")
            .resizable(false)
            .exact_width(260.0)
            .show(ctx, |ui| {
                ui.add_space(theme.spacing_8);
                theme.card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        RichText::new(format!(
                            "{} Target: {}",
                            target.value().label(),
                            to_percent(target.ratio())
                        ))
                        .strong(),
                    );
                    ui.add_space(theme.spacing_8);
                    render_target_chart(ui, &theme, stats.actual_ratio, target.ratio());
                    ui.add_space(theme.spacing_8);
                    ui.label(format!("Actual: {}", to_percent(stats.actual_ratio)));
                    ui.label(
                        RichText::new(format!("Difference: {}", to_percent(stats.difference)))
                            .color(theme.difference_color(stats.difference)),
                    );
                    ui.label(
                        RichText::new(format!(
                            "{} of {} selected match",
                            stats.matching_count, stats.selected_count
                        ))
                        .color(theme.text_muted)
                        .size(12.0),
                    );
                });
            });
    }

    fn render_diagnostics(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("diagnostics").show(ctx, |ui| {
            egui::CollapsingHeader::new("Selection log")
                .default_open(false)
                .show(ui, |ui| {
                    ScrollArea::vertical()
                        .id_salt("selection_log")
                        .max_height(120.0)
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for entry in self.selection_log.entries() {
                                ui.monospace(entry.to_log_line());
                            }
                        });
                });
        });
    }

    fn render_grid(&mut self, ctx: &egui::Context) {
        let mut clicked: Option<ItemId> = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().id_salt("item_grid").show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for item in &self.items {
                        let selected = self.store.is_selected(item.id);
                        if render_item(ui, &self.theme, item, selected).clicked() {
                            clicked = Some(item.id);
                        }
                    }
                });
            });
        });

        if let Some(id) = clicked {
            self.toggle_item(id);
        }
    }
}

fn render_item(ui: &mut egui::Ui, theme: &Theme, item: &Item, selected: bool) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(theme.cell_size, theme.cell_size), Sense::click());
    let painter = ui.painter();
    let corner_radius = egui::CornerRadius::same(theme.radius_8);

    painter.rect_filled(rect, corner_radius, theme.surface_2);
    if response.hovered() {
        painter.rect_filled(rect, corner_radius, theme.hover_overlay);
    }
    if selected {
        painter.rect_stroke(
            rect,
            corner_radius,
            theme.selected_stroke(),
            egui::StrokeKind::Inside,
        );
    }

    let center = rect.center();
    painter.circle_filled(center, theme.item_radius(item), theme.item_fill(item.color));
    if item.has_dot() {
        painter.circle_filled(center, theme.spacing_4, theme.item_dot);
    }

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Target marker above a center line, actual marker below it.
fn render_target_chart(ui: &mut egui::Ui, theme: &Theme, actual: f64, target: f64) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, theme.chart_height), Sense::hover());
    let painter = ui.painter();
    let mid_y = rect.center().y;
    let marker = theme.spacing_8;
    let x_at = |ratio: f64| rect.left() + rect.width() * ratio.clamp(0.0, 1.0) as f32;

    painter.line_segment(
        [Pos2::new(rect.left(), mid_y), Pos2::new(rect.right(), mid_y)],
        egui::Stroke::new(2.0, theme.text_muted),
    );

    let target_x = x_at(target);
    painter.add(egui::Shape::convex_polygon(
        vec![
            Pos2::new(target_x - marker / 2.0, rect.top()),
            Pos2::new(target_x + marker / 2.0, rect.top()),
            Pos2::new(target_x, mid_y - 2.0),
        ],
        theme.accent_primary,
        egui::Stroke::NONE,
    ));

    let actual_x = x_at(actual);
    painter.add(egui::Shape::convex_polygon(
        vec![
            Pos2::new(actual_x, mid_y + 2.0),
            Pos2::new(actual_x + marker / 2.0, rect.bottom()),
            Pos2::new(actual_x - marker / 2.0, rect.bottom()),
        ],
        theme.warning,
        egui::Stroke::NONE,
    ));
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_top_bar(ctx);
        self.render_stats_panel(ctx);
        self.render_diagnostics(ctx);
        self.render_grid(ctx);
    }
}
