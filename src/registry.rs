use crate::config::CanvasConfig;
use crate::engine::CircuitEngine;
use crate::render::Scene;
use crate::template::CircuitKind;

/// One engine per circuit tab, plus which tab is showing.
#[derive(serde::Serialize, Debug, Clone)]
pub struct CircuitRegistry {
    engines: [CircuitEngine; 3],
    active: CircuitKind,
}

impl CircuitRegistry {
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            engines: CircuitKind::ALL.map(|kind| CircuitEngine::new(kind.template(), config)),
            active: CircuitKind::Simple,
        }
    }

    pub fn active_kind(&self) -> CircuitKind {
        self.active
    }

    pub fn engine(&self, kind: CircuitKind) -> &CircuitEngine {
        &self.engines[kind.index()]
    }

    pub fn active(&self) -> &CircuitEngine {
        self.engine(self.active)
    }

    pub fn active_mut(&mut self) -> &mut CircuitEngine {
        &mut self.engines[self.active.index()]
    }

    pub fn engines(&self) -> impl Iterator<Item = &CircuitEngine> {
        self.engines.iter()
    }

    pub fn engines_mut(&mut self) -> impl Iterator<Item = &mut CircuitEngine> {
        self.engines.iter_mut()
    }

    /// Make `kind` the active tab. Any wire being drawn on the previous tab is
    /// dropped; the new tab keeps whatever was wired on it before.
    pub fn select(&mut self, kind: CircuitKind, scene: &mut Scene) -> bool {
        if kind == self.active {
            return false;
        }
        let previous = self.active;
        self.active_mut().cancel(&mut scene.for_circuit(previous));
        self.active = kind;
        log::debug!("tab {previous:?} -> {kind:?}");
        true
    }
}
