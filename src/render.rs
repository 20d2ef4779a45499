//! The engine never paints. It tells a [`Renderer`] what changed and the
//! renderer keeps whatever it needs to draw the next frame.

use std::collections::BTreeMap;

use egui::Pos2;

use crate::connection_store::ConnectionId;
use crate::template::{CircuitKind, SwitchId};
use crate::wire::WireColor;

/// Which polyline a wire call refers to.
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireVisual {
    /// The wire still being drawn
    Preview,
    Committed(ConnectionId),
}

pub trait Renderer {
    fn render_lamp(&mut self, on: bool);
    fn render_switch(&mut self, switch: SwitchId, on: bool);
    /// Create or replace the polyline for `wire`.
    fn render_wire_segment(&mut self, wire: WireVisual, points: &[Pos2], color: WireColor);
    fn remove_wire_visual(&mut self, wire: WireVisual);
    fn render_grid(&mut self, cell_size: f32, visible: bool);
    fn show_status_message(&mut self, text: &str);
    fn show_tooltip(&mut self, text: &str, anchor: Pos2);
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Pos2>,
    pub color: WireColor,
}

#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq)]
pub struct GridView {
    pub cell_size: f32,
    pub visible: bool,
}

impl Default for GridView {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            visible: true,
        }
    }
}

/// Visual state of one circuit's drawing surface.
#[derive(serde::Serialize, Debug, Clone, Default)]
pub struct Board {
    pub lamp_on: bool,
    pub switches: BTreeMap<SwitchId, bool>,
    pub preview: Option<Polyline>,
    /// Committed wires in drawing order
    pub wires: Vec<(ConnectionId, Polyline)>,
    pub grid: GridView,
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub anchor: Pos2,
    /// Stamped by the app on the first frame the tooltip is painted
    #[serde(skip)]
    pub shown_at: Option<f64>,
}

/// Everything the app paints: one board per circuit plus the shared status
/// line and tooltip.
#[derive(serde::Serialize, Debug, Clone, Default)]
pub struct Scene {
    boards: [Board; 3],
    pub status: String,
    pub tooltip: Option<Tooltip>,
}

impl Scene {
    pub fn board(&self, kind: CircuitKind) -> &Board {
        &self.boards[kind.index()]
    }

    /// Renderer that draws onto `kind`'s board.
    pub fn for_circuit(&mut self, kind: CircuitKind) -> BoardRenderer<'_> {
        BoardRenderer {
            board: &mut self.boards[kind.index()],
            status: &mut self.status,
            tooltip: &mut self.tooltip,
        }
    }

    /// Hide the tooltip once it has been visible for `duration` seconds.
    pub fn expire_tooltip(&mut self, now: f64, duration: f64) {
        let Some(tooltip) = &mut self.tooltip else {
            return;
        };
        match tooltip.shown_at {
            None => tooltip.shown_at = Some(now),
            Some(t) if now - t >= duration => self.tooltip = None,
            Some(_) => {}
        }
    }
}

pub struct BoardRenderer<'a> {
    board: &'a mut Board,
    status: &'a mut String,
    tooltip: &'a mut Option<Tooltip>,
}

impl Renderer for BoardRenderer<'_> {
    fn render_lamp(&mut self, on: bool) {
        self.board.lamp_on = on;
    }

    fn render_switch(&mut self, switch: SwitchId, on: bool) {
        self.board.switches.insert(switch, on);
    }

    fn render_wire_segment(&mut self, wire: WireVisual, points: &[Pos2], color: WireColor) {
        let line = Polyline {
            points: points.to_vec(),
            color,
        };
        match wire {
            WireVisual::Preview => self.board.preview = Some(line),
            WireVisual::Committed(id) => {
                if let Some((_, existing)) = self.board.wires.iter_mut().find(|(w, _)| *w == id) {
                    *existing = line;
                } else {
                    self.board.wires.push((id, line));
                }
            }
        }
    }

    fn remove_wire_visual(&mut self, wire: WireVisual) {
        match wire {
            WireVisual::Preview => self.board.preview = None,
            WireVisual::Committed(id) => self.board.wires.retain(|(w, _)| *w != id),
        }
    }

    fn render_grid(&mut self, cell_size: f32, visible: bool) {
        self.board.grid = GridView { cell_size, visible };
    }

    fn show_status_message(&mut self, text: &str) {
        text.clone_into(self.status);
    }

    fn show_tooltip(&mut self, text: &str, anchor: Pos2) {
        // replaces whatever was showing, timer included
        *self.tooltip = Some(Tooltip {
            text: text.to_owned(),
            anchor,
            shown_at: None,
        });
    }
}
