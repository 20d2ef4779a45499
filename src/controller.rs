use egui::Pos2;

use crate::config::CanvasConfig;
use crate::error::WiringError;
use crate::registry::CircuitRegistry;
use crate::render::{Renderer as _, Scene};
use crate::status;
use crate::template::{CircuitKind, SwitchId};
use crate::terminal::Terminal;
use crate::wire::WireColor;

pub const WELCOME: &str = "Select a wire and click two terminals to connect them.";

/// Input coming from the UI, already resolved to what was hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    SelectWireColor(WireColor),
    TerminalClicked(Terminal),
    /// Click on empty board space, container-local
    SurfaceClicked(Pos2),
    ToggleSwitch { switch: SwitchId, anchor: Pos2 },
    ResetRequested,
    CancelRequested,
    TabSelected(CircuitKind),
    GridVisibility(bool),
}

/// Top-level UI state: the selected wire colour, the circuit tabs and the
/// scene they draw into.
#[derive(serde::Serialize, Debug, Clone)]
pub struct UiController {
    selected_color: Option<WireColor>,
    registry: CircuitRegistry,
    #[serde(skip)]
    scene: Scene,
}

impl UiController {
    pub fn new(config: &CanvasConfig) -> Self {
        let registry = CircuitRegistry::new(config);
        let mut scene = Scene::default();
        for e in registry.engines() {
            e.render_all(&mut scene.for_circuit(e.kind()));
        }
        WELCOME.clone_into(&mut scene.status);
        Self {
            selected_color: None,
            registry,
            scene,
        }
    }

    pub fn selected_color(&self) -> Option<WireColor> {
        self.selected_color
    }

    pub fn registry(&self) -> &CircuitRegistry {
        &self.registry
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn handle(&mut self, event: UiEvent) {
        let kind = self.registry.active_kind();
        match event {
            UiEvent::SelectWireColor(color) => {
                self.selected_color = Some(color);
                let r = &mut self.scene.for_circuit(kind);
                r.show_status_message(&status::color_selected(color));
                // picking a colour, even the same one, restarts drawing
                self.registry.active_mut().cancel(r);
            }
            UiEvent::TerminalClicked(terminal) => {
                let r = &mut self.scene.for_circuit(kind);
                match self
                    .registry
                    .active_mut()
                    .terminal_clicked(terminal, self.selected_color, r)
                {
                    Ok(_) | Err(WiringError::SelfConnectionAttempt(_)) => {}
                    Err(e @ (WiringError::NoColorSelected | WiringError::DuplicateConnection { .. })) => {
                        log::debug!("{e}");
                    }
                    Err(e) => log::warn!("{e}"),
                }
            }
            UiEvent::SurfaceClicked(p) => {
                self.registry
                    .active_mut()
                    .surface_clicked(p, &mut self.scene.for_circuit(kind));
            }
            UiEvent::ToggleSwitch { switch, anchor } => {
                if let Err(e) = self.registry.active_mut().toggle_switch(
                    switch,
                    anchor,
                    &mut self.scene.for_circuit(kind),
                ) {
                    log::warn!("{e}");
                }
            }
            UiEvent::ResetRequested => {
                let r = &mut self.scene.for_circuit(kind);
                self.registry.active_mut().reset(r);
                r.show_status_message(status::BOARD_RESET);
                self.selected_color = None;
            }
            UiEvent::CancelRequested => {
                self.registry
                    .active_mut()
                    .cancel(&mut self.scene.for_circuit(kind));
            }
            UiEvent::TabSelected(next) => {
                self.registry.select(next, &mut self.scene);
                self.scene
                    .for_circuit(next)
                    .show_status_message(&status::tab_selected(next));
            }
            UiEvent::GridVisibility(visible) => {
                for e in self.registry.engines_mut() {
                    e.set_grid_visible(visible, &mut self.scene.for_circuit(e.kind()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn controller() -> UiController {
        env_logger::builder().is_test(true).try_init().ok();
        UiController::new(&CanvasConfig::default())
    }

    fn click(c: &mut UiController, component: &'static str, name: &'static str) {
        c.handle(UiEvent::TerminalClicked(Terminal::new(component, name)));
    }

    fn wire(c: &mut UiController, color: WireColor, a: (&'static str, &'static str), b: (&'static str, &'static str)) {
        c.handle(UiEvent::SelectWireColor(color));
        click(c, a.0, a.1);
        click(c, b.0, b.1);
    }

    #[test]
    fn simple_scenario_end_to_end() {
        let mut c = controller();
        wire(&mut c, WireColor::Red, ("db", "phase"), ("switch", "phase"));
        wire(&mut c, WireColor::Blue, ("db", "neutral"), ("lamp", "neutral"));
        c.handle(UiEvent::SelectWireColor(WireColor::Black));
        click(&mut c, "switch", "return");
        c.handle(UiEvent::SurfaceClicked(pos2(452.0, 138.0)));
        click(&mut c, "lamp", "return");

        let simple = c.registry().active();
        assert!(simple.is_complete(), "complete");
        assert!(simple.is_lamp_on(), "lit");
        assert!(c.scene().board(CircuitKind::Simple).lamp_on, "rendered lit");
    }

    #[test]
    fn parallel_scenario_switch1_off_switch2_on() {
        let mut c = controller();
        c.handle(UiEvent::TabSelected(CircuitKind::Parallel));
        wire(&mut c, WireColor::Red, ("db-p", "phase"), ("switch-p1", "top"));
        wire(&mut c, WireColor::Blue, ("db-p", "neutral"), ("lamp-p", "neutral"));
        wire(&mut c, WireColor::Black, ("switch-p2", "bottom"), ("lamp-p", "return"));
        wire(&mut c, WireColor::Black, ("switch-p1", "middle"), ("switch-p2", "middle"));
        c.handle(UiEvent::ToggleSwitch {
            switch: SwitchId(1),
            anchor: pos2(260.0, 100.0),
        });

        let parallel = c.registry().engine(CircuitKind::Parallel);
        assert_eq!(parallel.switch_on(SwitchId(1)), Some(false), "switch 1 off");
        assert_eq!(parallel.switch_on(SwitchId(2)), Some(true), "switch 2 on");
        assert!(parallel.is_lamp_on(), "or semantics");
        assert_eq!(c.scene().status, "Switch 1 toggled. Lamp lit!", "status");
    }

    #[test]
    fn terminal_before_color_prompts() {
        let mut c = controller();
        click(&mut c, "db", "phase");
        assert_eq!(c.scene().status, status::NO_COLOR_SELECTED, "prompt shown");
        assert!(!c.registry().active().draw_state().is_drawing(), "no session");
    }

    #[test]
    fn color_reselect_cancels_drawing() {
        let mut c = controller();
        c.handle(UiEvent::SelectWireColor(WireColor::Red));
        click(&mut c, "db", "phase");
        c.handle(UiEvent::SelectWireColor(WireColor::Red));
        assert!(!c.registry().active().draw_state().is_drawing(), "cancelled");
        assert_eq!(c.selected_color(), Some(WireColor::Red), "color kept");
    }

    #[test]
    fn escape_cancels_drawing() {
        let mut c = controller();
        c.handle(UiEvent::SelectWireColor(WireColor::Red));
        click(&mut c, "db", "phase");
        c.handle(UiEvent::CancelRequested);
        let e = c.registry().active();
        assert!(!e.draw_state().is_drawing(), "cancelled");
        assert!(e.connections().is_empty(), "store unchanged");
    }

    #[test]
    fn reset_clears_color_and_is_idempotent() {
        let mut c = controller();
        wire(&mut c, WireColor::Red, ("db", "phase"), ("switch", "phase"));
        c.handle(UiEvent::ResetRequested);
        let once = serde_json::to_value(&c).expect("serialize");
        let status_once = c.scene().status.clone();
        c.handle(UiEvent::ResetRequested);
        let twice = serde_json::to_value(&c).expect("serialize");

        assert_eq!(once, twice, "reset twice equals reset once");
        assert_eq!(c.scene().status, status_once, "same status");
        assert_eq!(c.selected_color(), None, "color cleared");
        assert!(c.registry().active().connections().is_empty(), "wires cleared");
    }

    #[test]
    fn reset_only_touches_active_tab() {
        let mut c = controller();
        wire(&mut c, WireColor::Red, ("db", "phase"), ("switch", "phase"));
        c.handle(UiEvent::TabSelected(CircuitKind::Parallel));
        c.handle(UiEvent::ResetRequested);
        assert_eq!(
            c.registry().engine(CircuitKind::Simple).connections().len(),
            1,
            "simple untouched"
        );
    }

    #[test]
    fn tab_switch_cancels_and_announces() {
        let mut c = controller();
        c.handle(UiEvent::SelectWireColor(WireColor::Red));
        click(&mut c, "db", "phase");
        c.handle(UiEvent::TabSelected(CircuitKind::Intermediate));
        assert!(
            !c.registry().engine(CircuitKind::Simple).draw_state().is_drawing(),
            "previous tab cancelled"
        );
        assert_eq!(c.registry().active_kind(), CircuitKind::Intermediate, "switched");
        assert_eq!(
            c.scene().status,
            status::tab_selected(CircuitKind::Intermediate),
            "announced"
        );

        // the stub tab swallows everything
        c.handle(UiEvent::ResetRequested);
        c.handle(UiEvent::CancelRequested);
        assert!(!c.registry().active().is_lamp_on(), "still dark");
    }

    #[test]
    fn grid_visibility_applies_to_every_board() {
        let mut c = controller();
        c.handle(UiEvent::GridVisibility(false));
        for kind in CircuitKind::ALL {
            assert!(!c.scene().board(kind).grid.visible, "{kind:?} grid hidden");
        }
    }
}
