use egui::{Color32, Vec2, vec2};

#[derive(Clone, Debug, serde::Serialize)]
pub struct CanvasConfig {
    /// Spacing of the snapping grid, in container pixels
    pub grid_size: f32,
    pub grid_visible: bool,
    pub component_size: Vec2,
    pub terminal_radius: f32,
    /// Terminals accept clicks a bit outside their painted circle
    pub terminal_hit_radius: f32,
    pub terminal_color: Color32,
    pub terminal_active_color: Color32,
    pub wire_thickness: f32,
    pub grid_color_light: Color32,
    pub grid_color_dark: Color32,
    /// Seconds before a tooltip hides itself
    pub tooltip_duration: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            grid_size: 10.0,
            grid_visible: true,
            component_size: vec2(90.0, 80.0),
            terminal_radius: 6.0,
            terminal_hit_radius: 10.0,
            terminal_color: Color32::from_rgb(200, 160, 60),
            terminal_active_color: Color32::YELLOW,
            wire_thickness: 3.0,
            grid_color_light: Color32::from_rgb(221, 221, 221),
            grid_color_dark: Color32::from_rgb(50, 50, 50),
            tooltip_duration: 2.0,
        }
    }
}
