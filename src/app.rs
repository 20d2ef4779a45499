use egui::{
    Align, Align2, Button, Color32, CornerRadius, FontId, Image, Layout, Pos2, Rect, RichText,
    Sense, Shape, Stroke, StrokeKind, Ui, Vec2, pos2, vec2,
};

use crate::assets::ComponentGraphics;
use crate::config::CanvasConfig;
use crate::controller::{UiController, UiEvent};
use crate::render::Board;
use crate::template::{CircuitKind, ComponentKind, ComponentLayout};
use crate::wire::WireColor;

pub const PANEL_BUTTON_MIN_SIZE: Vec2 = vec2(64.0, 28.0);
pub const LABEL_TEXT_SIZE: f32 = 13.0;
pub const TERMINAL_LABEL_SIZE: f32 = 11.0;
pub const TOOLTIP_OFFSET: Vec2 = vec2(10.0, 10.0);
pub const PREVIEW_DASH: f32 = 6.0;
pub const PREVIEW_GAP: f32 = 4.0;

pub const COLOR_LABEL_LIGHT: Color32 = Color32::from_rgb(60, 60, 60);
pub const COLOR_LABEL_DARK: Color32 = Color32::from_rgb(210, 210, 210);
pub const COLOR_TOOLTIP_BG: Color32 = Color32::from_rgb(40, 40, 40);
pub const COLOR_SELECTED_WIRE: Color32 = Color32::YELLOW;

pub struct App {
    pub canvas_config: CanvasConfig,
    pub controller: UiController,
    pub show_debug: bool,
    pub show_grid: bool,
}

impl Default for App {
    fn default() -> Self {
        let canvas_config = CanvasConfig::default();
        let controller = UiController::new(&canvas_config);
        Self {
            show_grid: canvas_config.grid_visible,
            canvas_config,
            controller,
            show_debug: false,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let is_web = cfg!(target_arch = "wasm32");
                if !is_web {
                    ui.menu_button("File", |ui| {
                        if ui.button("Quit").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                    ui.add_space(16.0);
                }

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug");
                    if ui.checkbox(&mut self.show_grid, "Grid").changed() {
                        events.push(UiEvent::GridVisibility(self.show_grid));
                    }
                });

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    egui::widgets::global_theme_preference_buttons(ui);
                });
            });

            ui.horizontal(|ui| {
                let active = self.controller.registry().active_kind();
                for kind in CircuitKind::ALL {
                    if ui.selectable_label(kind == active, kind.title()).clicked() {
                        events.push(UiEvent::TabSelected(kind));
                    }
                }
            });
            ui.add_space(4.0);
            self.draw_wire_selector(ui, &mut events);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.controller.scene().status.as_str());
        });

        if self.show_debug {
            self.draw_debug_window(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui, &mut events);
        });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(UiEvent::CancelRequested);
        }

        let repaint = !events.is_empty();
        for event in events {
            self.controller.handle(event);
        }

        let now = ctx.input(|i| i.time);
        self.controller
            .scene_mut()
            .expire_tooltip(now, self.canvas_config.tooltip_duration);
        if self.controller.scene().tooltip.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
        if repaint {
            ctx.request_repaint();
        }
    }
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self::default()
    }

    fn draw_wire_selector(&self, ui: &mut Ui, events: &mut Vec<UiEvent>) {
        ui.horizontal(|ui| {
            ui.label("Wire:");
            let selected = self.controller.selected_color();
            for color in WireColor::ALL {
                let stroke = if selected == Some(color) {
                    Stroke::new(2.0, COLOR_SELECTED_WIRE)
                } else {
                    Stroke::NONE
                };
                let button = Button::new(RichText::new(color.title()).color(Color32::WHITE))
                    .fill(color.color32())
                    .stroke(stroke)
                    .min_size(PANEL_BUTTON_MIN_SIZE);
                if ui.add(button).clicked() {
                    events.push(UiEvent::SelectWireColor(color));
                }
            }

            ui.add_space(24.0);
            if ui
                .add(Button::new("Reset").min_size(PANEL_BUTTON_MIN_SIZE))
                .clicked()
            {
                events.push(UiEvent::ResetRequested);
            }
        });
    }

    fn draw_debug_window(&mut self, ctx: &egui::Context) {
        egui::Window::new("Debug")
            .open(&mut self.show_debug)
            .show(ctx, |ui| {
                egui_logger::logger_ui().show(ui);
                ui.separator();
                let state = serde_json::to_string_pretty(self.controller.registry().active())
                    .unwrap_or_else(|e| format!("failed to serialize state: {e}"));
                egui::ScrollArea::vertical()
                    .max_height(320.0)
                    .show(ui, |ui| {
                        ui.monospace(state);
                    });
            });
    }

    fn draw_canvas(&self, ui: &mut Ui, events: &mut Vec<UiEvent>) {
        let (resp, _painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        let canvas_rect = resp.rect;
        ui.set_clip_rect(canvas_rect);

        let engine = self.controller.registry().active();
        let template = engine.template();
        let board = self.controller.scene().board(engine.kind());
        let origin = canvas_rect.min.to_vec2();

        Self::draw_grid(ui, canvas_rect, board, &self.canvas_config);

        if template.is_stub() {
            ui.painter().text(
                canvas_rect.center(),
                Align2::CENTER_CENTER,
                "This exercise is not available yet.",
                FontId::proportional(18.0),
                label_color(ui),
            );
            return;
        }

        for component in template.components {
            self.draw_component(ui, component, board, origin, events);
        }

        for (_, line) in &board.wires {
            let points = line.points.iter().map(|p| *p + origin).collect();
            ui.painter().add(Shape::line(
                points,
                Stroke::new(self.canvas_config.wire_thickness, line.color.color32()),
            ));
        }

        if let Some(line) = &board.preview {
            let points: Vec<Pos2> = line.points.iter().map(|p| *p + origin).collect();
            let stroke = Stroke::new(self.canvas_config.wire_thickness, line.color.color32());
            if let (Some(last), Some(mouse)) = (points.last(), ui.ctx().pointer_hover_pos()) {
                ui.painter().extend(Shape::dashed_line(
                    &[*last, mouse],
                    stroke,
                    PREVIEW_DASH,
                    PREVIEW_GAP,
                ));
            }
            ui.painter().add(Shape::line(points, stroke));
        }

        let session_start = engine.draw_state().session().map(|s| s.start);
        for component in template.components {
            for (terminal, center) in component.terminal_positions() {
                let screen = center + origin;
                let hit = Rect::from_center_size(
                    screen,
                    Vec2::splat(self.canvas_config.terminal_hit_radius * 2.0),
                );
                let terminal_resp = ui.interact(
                    hit,
                    ui.id().with((terminal.component, terminal.name)),
                    Sense::click(),
                );
                if terminal_resp.clicked() {
                    events.push(UiEvent::TerminalClicked(terminal));
                }
                let painter = ui.painter();
                painter.circle_filled(
                    screen,
                    self.canvas_config.terminal_radius,
                    self.canvas_config.terminal_color,
                );
                if session_start == Some(terminal) || terminal_resp.hovered() {
                    painter.circle_stroke(
                        screen,
                        self.canvas_config.terminal_radius + 3.0,
                        Stroke::new(2.0, self.canvas_config.terminal_active_color),
                    );
                }
            }
            for t in component.terminals {
                ui.painter().text(
                    component.pos + t.offset + origin + vec2(0.0, 10.0),
                    Align2::CENTER_TOP,
                    t.label,
                    FontId::proportional(TERMINAL_LABEL_SIZE),
                    label_color(ui),
                );
            }
        }

        // background clicks only; terminal and switch clicks were taken above
        if resp.clicked()
            && let Some(pos) = resp.interact_pointer_pos()
        {
            events.push(UiEvent::SurfaceClicked(pos - origin));
        }

        self.draw_tooltip(ui, origin);
    }

    fn draw_component(
        &self,
        ui: &Ui,
        component: &ComponentLayout,
        board: &Board,
        origin: Vec2,
        events: &mut Vec<UiEvent>,
    ) {
        let center = component.pos + origin;
        let rect = Rect::from_center_size(center, self.canvas_config.component_size);

        let on = match component.kind {
            ComponentKind::Switch(id) => board.switches.get(&id).copied().unwrap_or(true),
            ComponentKind::Lamp => board.lamp_on,
            ComponentKind::DistributionBoard => true,
        };

        if component.kind == ComponentKind::Lamp && on {
            let glow_radius = 45.0;
            let gradient_steps = 30;
            for i in 0..gradient_steps {
                let t = i as f32 / gradient_steps as f32;
                let radius = glow_radius * (1.0 - t);
                let alpha = (255.0 * (1.0 - t) * 0.4) as u8;
                ui.painter().circle_filled(
                    center + vec2(0.0, -10.0),
                    radius,
                    Color32::from_rgba_unmultiplied(255, 255, 0, alpha),
                );
            }
        }

        let image = get_icon(ui, ComponentGraphics::for_kind(component.kind).image(on));
        image.paint_at(ui, rect);

        ui.painter().text(
            rect.center_top() - vec2(0.0, 4.0),
            Align2::CENTER_BOTTOM,
            component.label,
            FontId::proportional(LABEL_TEXT_SIZE),
            label_color(ui),
        );

        if let ComponentKind::Switch(id) = component.kind {
            let resp = ui.interact(rect, ui.id().with(component.id), Sense::click());
            if resp.hovered() {
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(6),
                    Stroke::new(1.5, Color32::GRAY),
                    StrokeKind::Outside,
                );
            }
            if resp.clicked()
                && let Some(pos) = resp.interact_pointer_pos()
            {
                events.push(UiEvent::ToggleSwitch {
                    switch: id,
                    anchor: pos - origin,
                });
            }
        }
    }

    fn draw_grid(ui: &Ui, canvas_rect: Rect, board: &Board, config: &CanvasConfig) {
        let grid = board.grid;
        if !grid.visible || grid.cell_size <= 0.0 {
            return;
        }
        let grid_color = if ui.visuals().dark_mode {
            config.grid_color_dark
        } else {
            config.grid_color_light
        };
        let stroke = Stroke::new(0.5, grid_color);
        let painter = ui.painter();

        let mut x = canvas_rect.left();
        while x <= canvas_rect.right() {
            painter.line_segment(
                [pos2(x, canvas_rect.top()), pos2(x, canvas_rect.bottom())],
                stroke,
            );
            x += grid.cell_size;
        }

        let mut y = canvas_rect.top();
        while y <= canvas_rect.bottom() {
            painter.line_segment(
                [pos2(canvas_rect.left(), y), pos2(canvas_rect.right(), y)],
                stroke,
            );
            y += grid.cell_size;
        }
    }

    fn draw_tooltip(&self, ui: &Ui, origin: Vec2) {
        let Some(tooltip) = &self.controller.scene().tooltip else {
            return;
        };
        let painter = ui.painter();
        let galley = painter.layout_no_wrap(
            tooltip.text.clone(),
            FontId::proportional(LABEL_TEXT_SIZE),
            Color32::WHITE,
        );
        let min = tooltip.anchor + origin + TOOLTIP_OFFSET;
        let rect = Rect::from_min_size(min, galley.size()).expand(4.0);
        painter.rect_filled(rect, CornerRadius::same(4), COLOR_TOOLTIP_BG);
        painter.galley(min, galley, Color32::WHITE);
    }
}

fn label_color(ui: &Ui) -> Color32 {
    if ui.visuals().dark_mode {
        COLOR_LABEL_DARK
    } else {
        COLOR_LABEL_LIGHT
    }
}

fn get_icon<'a>(ui: &Ui, source: egui::ImageSource<'a>) -> Image<'a> {
    let mut image = egui::Image::new(source);

    if ui.visuals().dark_mode {
        image = image.bg_fill(Color32::WHITE);
    }

    image
}
