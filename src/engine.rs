use std::collections::BTreeMap;

use egui::Pos2;

use crate::config::CanvasConfig;
use crate::connection_store::{ConnectionId, ConnectionStore};
use crate::draw::{DrawState, TerminalStep};
use crate::error::WiringError;
use crate::grid::GridSnapper;
use crate::render::{Renderer, WireVisual};
use crate::status;
use crate::template::{CircuitKind, CircuitTemplate, SwitchId};
use crate::terminal::{Terminal, TerminalPair};
use crate::validator::{self, Verdict};
use crate::wire::WireColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalOutcome {
    Started,
    Connected(ConnectionId),
}

/// One wiring exercise: its wires, switches, the wire being drawn and the
/// derived lamp state. Every variant runs on this same engine; only the
/// template differs.
#[derive(serde::Serialize, Debug, Clone)]
pub struct CircuitEngine {
    #[serde(skip)]
    template: &'static CircuitTemplate,
    grid: GridSnapper,
    grid_visible: bool,
    store: ConnectionStore,
    draw: DrawState,
    switches: BTreeMap<SwitchId, bool>,
    verdict: Verdict,
}

impl CircuitEngine {
    pub fn new(template: &'static CircuitTemplate, config: &CanvasConfig) -> Self {
        Self {
            template,
            grid: GridSnapper::new(config.grid_size),
            grid_visible: config.grid_visible,
            store: ConnectionStore::new(),
            draw: DrawState::default(),
            switches: Self::default_switches(template),
            verdict: Verdict::default(),
        }
    }

    fn default_switches(template: &CircuitTemplate) -> BTreeMap<SwitchId, bool> {
        template.switches().map(|id| (id, true)).collect()
    }

    pub fn kind(&self) -> CircuitKind {
        self.template.kind
    }

    pub fn template(&self) -> &'static CircuitTemplate {
        self.template
    }

    pub fn connections(&self) -> &ConnectionStore {
        &self.store
    }

    pub fn draw_state(&self) -> &DrawState {
        &self.draw
    }

    pub fn switch_on(&self, id: SwitchId) -> Option<bool> {
        self.switches.get(&id).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.verdict.complete
    }

    pub fn is_lamp_on(&self) -> bool {
        self.verdict.lamp_on
    }

    /// Push the whole current state to a fresh renderer.
    pub fn render_all(&self, r: &mut dyn Renderer) {
        r.render_grid(self.grid.size, self.grid_visible);
        for (id, on) in &self.switches {
            r.render_switch(*id, *on);
        }
        for (id, c) in self.store.all() {
            r.render_wire_segment(WireVisual::Committed(id), &c.path, c.color);
        }
        match self.draw.session() {
            Some(s) => r.render_wire_segment(WireVisual::Preview, &s.points, s.color),
            None => r.remove_wire_visual(WireVisual::Preview),
        }
        r.render_lamp(self.verdict.lamp_on);
    }

    pub fn set_grid_visible(&mut self, visible: bool, r: &mut dyn Renderer) {
        self.grid_visible = visible;
        r.render_grid(self.grid.size, visible);
    }

    pub fn terminal_clicked(
        &mut self,
        terminal: Terminal,
        color: Option<WireColor>,
        r: &mut dyn Renderer,
    ) -> Result<TerminalOutcome, WiringError> {
        let center = self
            .template
            .terminal_center(terminal)
            .ok_or(WiringError::UnknownTerminal(terminal))?;

        match self.draw.click_terminal(terminal, center, color) {
            Err(WiringError::NoColorSelected) => {
                r.show_status_message(status::NO_COLOR_SELECTED);
                Err(WiringError::NoColorSelected)
            }
            Err(e) => Err(e),
            Ok(TerminalStep::Started) => {
                if let Some(s) = self.draw.session() {
                    r.render_wire_segment(WireVisual::Preview, &s.points, s.color);
                }
                r.show_status_message(&status::wire_started(terminal));
                log::debug!("{:?}: wire started at {terminal}", self.kind());
                Ok(TerminalOutcome::Started)
            }
            Ok(TerminalStep::Finished(wire)) => {
                r.remove_wire_visual(WireVisual::Preview);
                let (a, b, color) = (wire.a, wire.b, wire.color);
                let path = wire.path.clone();

                let id = match self.store.add(wire, self.template.policy.reject_duplicates) {
                    Ok(id) => id,
                    Err(e) => {
                        log::info!("{:?}: rejected {}", self.kind(), TerminalPair::new(a, b));
                        r.show_status_message(&status::duplicate_connection(a, b));
                        return Err(e);
                    }
                };

                r.render_wire_segment(WireVisual::Committed(id), &path, color);
                r.show_status_message(&status::connection_made(color, a, b));
                log::info!("{:?}: {color} wire {a} -> {b}", self.kind());

                self.reevaluate(r);
                if let Some(text) = self
                    .template
                    .status
                    .completion(self.verdict.complete, self.verdict.lamp_on)
                {
                    r.show_status_message(text);
                }
                Ok(TerminalOutcome::Connected(id))
            }
        }
    }

    /// Background click while drawing: add a snapped bend point.
    pub fn surface_clicked(&mut self, raw: Pos2, r: &mut dyn Renderer) -> Option<Pos2> {
        let p = self.draw.add_point(raw, &self.grid)?;
        if let Some(s) = self.draw.session() {
            r.render_wire_segment(WireVisual::Preview, &s.points, s.color);
        }
        r.show_status_message(&status::point_added(p));
        Some(p)
    }

    /// Flip a switch and report the new position.
    pub fn toggle_switch(
        &mut self,
        id: SwitchId,
        anchor: Pos2,
        r: &mut dyn Renderer,
    ) -> Result<bool, WiringError> {
        let on = {
            let state = self
                .switches
                .get_mut(&id)
                .ok_or(WiringError::UnknownSwitch(id))?;
            *state = !*state;
            *state
        };
        r.render_switch(id, on);
        self.reevaluate(r);

        let Verdict { complete, lamp_on } = self.verdict;
        r.show_tooltip(status::tooltip(complete, lamp_on), anchor);

        let label = self
            .template
            .switch_component(id)
            .map_or("Switch", |c| c.label);
        r.show_status_message(
            &self
                .template
                .status
                .switch_toggled(label, on, complete, lamp_on),
        );
        log::debug!("{:?}: switch {id} -> {on}, lamp {lamp_on}", self.kind());
        Ok(on)
    }

    /// Drop the wire being drawn. Returns whether there was one.
    pub fn cancel(&mut self, r: &mut dyn Renderer) -> bool {
        let Some(session) = self.draw.cancel() else {
            return false;
        };
        r.remove_wire_visual(WireVisual::Preview);
        r.show_status_message(status::DRAWING_CANCELLED);
        log::debug!("{:?}: wire from {} cancelled", self.kind(), session.start);
        true
    }

    /// Back to the initial state: no wires, switches on, not drawing.
    pub fn reset(&mut self, r: &mut dyn Renderer) {
        if self.draw.cancel().is_some() {
            r.remove_wire_visual(WireVisual::Preview);
        }
        for id in self.store.clear() {
            r.remove_wire_visual(WireVisual::Committed(id));
        }
        self.switches = Self::default_switches(self.template);
        for (id, on) in &self.switches {
            r.render_switch(*id, *on);
        }
        r.render_grid(self.grid.size, self.grid_visible);
        self.reevaluate(r);
        log::info!("{:?}: reset", self.kind());
    }

    fn reevaluate(&mut self, r: &mut dyn Renderer) {
        let complete = match validator::check(self.store.all().map(|(_, c)| c), self.template) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("{:?}: {e}", self.kind());
                false
            }
        };
        let lamp_on = validator::derive_lamp_state(complete, &self.switches, self.template.lamp_rule);
        self.verdict = Verdict { complete, lamp_on };
        r.render_lamp(lamp_on);
    }
}
