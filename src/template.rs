//! Static description of each wiring exercise: where the components sit, which
//! terminals they expose, and the one correct set of wires.

use std::collections::BTreeMap;
use std::fmt::Display;

use egui::{Pos2, Vec2, pos2, vec2};

use crate::status::{StatusTable, SwitchWording};
use crate::terminal::{Terminal, TerminalPair};
use crate::wire::WireColor;

#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SwitchId(pub u8);

impl Display for SwitchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircuitKind {
    Simple,
    Parallel,
    Intermediate,
}

impl CircuitKind {
    pub const ALL: [Self; 3] = [Self::Simple, Self::Parallel, Self::Intermediate];

    pub fn index(self) -> usize {
        match self {
            Self::Simple => 0,
            Self::Parallel => 1,
            Self::Intermediate => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Parallel => "Two-way",
            Self::Intermediate => "Intermediate",
        }
    }

    pub fn template(self) -> &'static CircuitTemplate {
        match self {
            Self::Simple => &SIMPLE,
            Self::Parallel => &PARALLEL,
            Self::Intermediate => &INTERMEDIATE,
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredConnection {
    pub a: Terminal,
    pub b: Terminal,
    pub color: WireColor,
}

impl RequiredConnection {
    const fn new(a: Terminal, b: Terminal, color: WireColor) -> Self {
        Self { a, b, color }
    }

    pub fn pair(&self) -> TerminalPair {
        TerminalPair::new(self.a, self.b)
    }
}

#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    DistributionBoard,
    Switch(SwitchId),
    Lamp,
}

#[derive(serde::Serialize, Debug, Clone, Copy)]
pub struct TerminalLayout {
    pub name: &'static str,
    /// Short marking painted next to the terminal
    pub label: &'static str,
    /// From the component center
    pub offset: Vec2,
}

#[derive(serde::Serialize, Debug, Clone, Copy)]
pub struct ComponentLayout {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: ComponentKind,
    /// Center, in container-local pixels
    pub pos: Pos2,
    pub terminals: &'static [TerminalLayout],
}

impl ComponentLayout {
    pub fn terminal(&self, t: &TerminalLayout) -> Terminal {
        Terminal::new(self.id, t.name)
    }

    pub fn terminal_positions(&self) -> impl Iterator<Item = (Terminal, Pos2)> + '_ {
        self.terminals
            .iter()
            .map(|t| (self.terminal(t), self.pos + t.offset))
    }
}

/// How switch positions combine into the lamp state once wiring is correct.
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampRule {
    /// The lamp follows one switch
    Switch(SwitchId),
    /// Two-way switching: any switch closed lights the lamp
    AnySwitch,
    Never,
}

impl LampRule {
    pub fn lamp_on(self, complete: bool, switches: &BTreeMap<SwitchId, bool>) -> bool {
        if !complete {
            return false;
        }
        match self {
            Self::Switch(id) => switches.get(&id).copied().unwrap_or(false),
            Self::AnySwitch => switches.values().any(|on| *on),
            Self::Never => false,
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Extra wires beyond the required set break completeness
    pub exact_count: bool,
    /// Refuse a second wire between an already connected pair
    pub reject_duplicates: bool,
}

#[derive(serde::Serialize, Debug)]
pub struct CircuitTemplate {
    pub kind: CircuitKind,
    pub components: &'static [ComponentLayout],
    pub required: &'static [RequiredConnection],
    pub lamp_rule: LampRule,
    pub policy: ValidationPolicy,
    pub status: StatusTable,
}

impl CircuitTemplate {
    /// Registered without any topology yet. Never completes.
    pub fn is_stub(&self) -> bool {
        self.required.is_empty()
    }

    pub fn switches(&self) -> impl Iterator<Item = SwitchId> + '_ {
        self.components.iter().filter_map(|c| match c.kind {
            ComponentKind::Switch(id) => Some(id),
            ComponentKind::DistributionBoard | ComponentKind::Lamp => None,
        })
    }

    pub fn switch_component(&self, id: SwitchId) -> Option<&ComponentLayout> {
        self.components
            .iter()
            .find(|c| c.kind == ComponentKind::Switch(id))
    }

    pub fn terminals(&self) -> impl Iterator<Item = (Terminal, Pos2)> + '_ {
        self.components.iter().flat_map(|c| c.terminal_positions())
    }

    /// Exact center of a terminal, never grid-snapped.
    pub fn terminal_center(&self, t: Terminal) -> Option<Pos2> {
        self.terminals().find(|(other, _)| *other == t).map(|(_, p)| p)
    }
}

const fn tl(name: &'static str, label: &'static str, offset: Vec2) -> TerminalLayout {
    TerminalLayout {
        name,
        label,
        offset,
    }
}

const TWO_TERMINALS_LN: &[TerminalLayout] = &[
    tl("phase", "L", vec2(-20.0, 40.0)),
    tl("neutral", "N", vec2(20.0, 40.0)),
];

pub static SIMPLE: CircuitTemplate = CircuitTemplate {
    kind: CircuitKind::Simple,
    components: &[
        ComponentLayout {
            id: "db",
            label: "Distribution board",
            kind: ComponentKind::DistributionBoard,
            pos: pos2(110.0, 260.0),
            terminals: TWO_TERMINALS_LN,
        },
        ComponentLayout {
            id: "switch",
            label: "Switch",
            kind: ComponentKind::Switch(SwitchId(1)),
            pos: pos2(330.0, 100.0),
            terminals: &[
                tl("phase", "L", vec2(-20.0, 40.0)),
                tl("return", "R", vec2(20.0, 40.0)),
            ],
        },
        ComponentLayout {
            id: "lamp",
            label: "Lamp",
            kind: ComponentKind::Lamp,
            pos: pos2(560.0, 260.0),
            terminals: &[
                tl("neutral", "N", vec2(-20.0, 40.0)),
                tl("return", "R", vec2(20.0, 40.0)),
            ],
        },
    ],
    required: &[
        RequiredConnection::new(
            Terminal::new("db", "phase"),
            Terminal::new("switch", "phase"),
            WireColor::Red,
        ),
        RequiredConnection::new(
            Terminal::new("db", "neutral"),
            Terminal::new("lamp", "neutral"),
            WireColor::Blue,
        ),
        RequiredConnection::new(
            Terminal::new("switch", "return"),
            Terminal::new("lamp", "return"),
            WireColor::Black,
        ),
    ],
    lamp_rule: LampRule::Switch(SwitchId(1)),
    policy: ValidationPolicy {
        exact_count: true,
        reject_duplicates: false,
    },
    status: StatusTable {
        complete_lamp_on: "Well done! The wiring is correct and the lamp is lit!",
        complete_lamp_off: "Correct wiring! Click the switch to light the lamp.",
        switch_wording: SwitchWording::Position,
    },
};

const TWO_WAY_TERMINALS: &[TerminalLayout] = &[
    tl("top", "T", vec2(-25.0, 40.0)),
    tl("middle", "C", vec2(0.0, 40.0)),
    tl("bottom", "B", vec2(25.0, 40.0)),
];

pub static PARALLEL: CircuitTemplate = CircuitTemplate {
    kind: CircuitKind::Parallel,
    components: &[
        ComponentLayout {
            id: "db-p",
            label: "Distribution board",
            kind: ComponentKind::DistributionBoard,
            pos: pos2(100.0, 300.0),
            terminals: TWO_TERMINALS_LN,
        },
        ComponentLayout {
            id: "switch-p1",
            label: "Switch 1",
            kind: ComponentKind::Switch(SwitchId(1)),
            pos: pos2(260.0, 100.0),
            terminals: TWO_WAY_TERMINALS,
        },
        ComponentLayout {
            id: "switch-p2",
            label: "Switch 2",
            kind: ComponentKind::Switch(SwitchId(2)),
            pos: pos2(460.0, 100.0),
            terminals: TWO_WAY_TERMINALS,
        },
        ComponentLayout {
            id: "lamp-p",
            label: "Lamp",
            kind: ComponentKind::Lamp,
            pos: pos2(600.0, 300.0),
            terminals: &[
                tl("neutral", "N", vec2(-20.0, 40.0)),
                tl("return", "R", vec2(20.0, 40.0)),
            ],
        },
    ],
    required: &[
        RequiredConnection::new(
            Terminal::new("db-p", "phase"),
            Terminal::new("switch-p1", "top"),
            WireColor::Red,
        ),
        RequiredConnection::new(
            Terminal::new("db-p", "neutral"),
            Terminal::new("lamp-p", "neutral"),
            WireColor::Blue,
        ),
        RequiredConnection::new(
            Terminal::new("switch-p2", "bottom"),
            Terminal::new("lamp-p", "return"),
            WireColor::Black,
        ),
        // travellers between the two switches
        RequiredConnection::new(
            Terminal::new("switch-p1", "middle"),
            Terminal::new("switch-p2", "middle"),
            WireColor::Black,
        ),
    ],
    lamp_rule: LampRule::AnySwitch,
    policy: ValidationPolicy {
        exact_count: false,
        reject_duplicates: false,
    },
    status: StatusTable {
        complete_lamp_on: "Well done! The two-way wiring is correct and the lamp is lit!",
        complete_lamp_off: "Correct two-way wiring! Click either switch to light the lamp.",
        switch_wording: SwitchWording::Toggled,
    },
};

// Registered as a tab with no topology; its lamp never lights.
pub static INTERMEDIATE: CircuitTemplate = CircuitTemplate {
    kind: CircuitKind::Intermediate,
    components: &[],
    required: &[],
    lamp_rule: LampRule::Never,
    policy: ValidationPolicy {
        exact_count: true,
        reject_duplicates: false,
    },
    status: StatusTable {
        complete_lamp_on: "",
        complete_lamp_off: "",
        switch_wording: SwitchWording::Toggled,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_terminals_exist_in_layout() {
        for kind in CircuitKind::ALL {
            let t = kind.template();
            for r in t.required {
                assert!(t.terminal_center(r.a).is_some(), "{kind:?}: {} missing", r.a);
                assert!(t.terminal_center(r.b).is_some(), "{kind:?}: {} missing", r.b);
            }
        }
    }

    #[test]
    fn terminals_are_unique_per_circuit() {
        for kind in CircuitKind::ALL {
            let all: Vec<Terminal> = kind.template().terminals().map(|(t, _)| t).collect();
            let mut dedup = all.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(all.len(), dedup.len(), "{kind:?} declares a terminal twice");
        }
    }

    #[test]
    fn switch_counts() {
        assert_eq!(SIMPLE.switches().count(), 1, "simple has one switch");
        assert_eq!(PARALLEL.switches().count(), 2, "two-way has two switches");
        assert_eq!(INTERMEDIATE.switches().count(), 0, "stub has none");
        assert!(INTERMEDIATE.is_stub(), "intermediate is a stub");
        assert!(!SIMPLE.is_stub(), "simple is defined");
    }

    #[test]
    fn terminal_center_is_component_plus_offset() {
        let center = SIMPLE.terminal_center(Terminal::new("switch", "return"));
        assert_eq!(center, Some(pos2(350.0, 140.0)), "330+20, 100+40");
    }

    #[test]
    fn kind_indices_are_dense() {
        for (i, kind) in CircuitKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i, "index matches ALL order");
            assert_eq!(kind.template().kind, *kind, "template reports its own kind");
        }
    }

    #[test]
    fn lamp_rules() {
        let mut switches = BTreeMap::new();
        switches.insert(SwitchId(1), false);
        switches.insert(SwitchId(2), true);

        assert!(!LampRule::Switch(SwitchId(1)).lamp_on(true, &switches), "follows switch 1");
        assert!(LampRule::Switch(SwitchId(2)).lamp_on(true, &switches), "follows switch 2");
        assert!(LampRule::AnySwitch.lamp_on(true, &switches), "either switch");
        assert!(!LampRule::AnySwitch.lamp_on(false, &switches), "incomplete never lights");
        assert!(!LampRule::Never.lamp_on(true, &switches), "stub never lights");
    }
}
