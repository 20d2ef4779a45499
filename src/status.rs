//! Status-bar and tooltip texts.
//!
//! Every message is picked from a fixed set; the only variable parts are the
//! names of the things involved (terminals, colours, switches).

use egui::Pos2;

use crate::template::CircuitKind;
use crate::terminal::Terminal;
use crate::wire::WireColor;

/// How a variant talks about a switch that was just flipped.
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchWording {
    /// "Switch on" / "Switch off"
    Position,
    /// "Switch 1 toggled"
    Toggled,
}

/// Per-variant texts.
#[derive(serde::Serialize, Debug, Clone, Copy)]
pub struct StatusTable {
    pub complete_lamp_on: &'static str,
    pub complete_lamp_off: &'static str,
    pub switch_wording: SwitchWording,
}

impl StatusTable {
    /// Shown right after a commit when the circuit turns out complete.
    pub fn completion(&self, complete: bool, lamp_on: bool) -> Option<&'static str> {
        match (complete, lamp_on) {
            (false, _) => None,
            (true, true) => Some(self.complete_lamp_on),
            (true, false) => Some(self.complete_lamp_off),
        }
    }

    pub fn switch_toggled(
        &self,
        switch_label: &str,
        switch_on: bool,
        complete: bool,
        lamp_on: bool,
    ) -> String {
        let lead = match self.switch_wording {
            SwitchWording::Position => {
                format!("{switch_label} {}", if switch_on { "on" } else { "off" })
            }
            SwitchWording::Toggled => format!("{switch_label} toggled"),
        };
        match (complete, lamp_on) {
            (false, _) => format!("{lead}, but the circuit is not complete."),
            (true, true) => format!("{lead}. Lamp lit!"),
            (true, false) => format!("{lead}. Lamp off."),
        }
    }
}

pub fn tooltip(complete: bool, lamp_on: bool) -> &'static str {
    match (complete, lamp_on) {
        (false, _) => "Circuit disconnected",
        (true, true) => "Lamp lit",
        (true, false) => "Lamp off",
    }
}

pub fn color_selected(color: WireColor) -> String {
    format!("{} wire selected. Click the first terminal.", color.title())
}

pub const NO_COLOR_SELECTED: &str = "Error: select a wire color first!";

pub fn wire_started(t: Terminal) -> String {
    format!(
        "Starting a wire from terminal {t}. Click grid points to route the wire and finish on another terminal."
    )
}

pub fn point_added(p: Pos2) -> String {
    format!(
        "Point added ({:.0}, {:.0}). Keep clicking to add points or click a terminal to finish.",
        p.x, p.y
    )
}

pub fn connection_made(color: WireColor, a: Terminal, b: Terminal) -> String {
    format!("{} connection made between {a} and {b}.", color.title())
}

pub fn duplicate_connection(a: Terminal, b: Terminal) -> String {
    format!("{a} and {b} are already connected.")
}

pub const DRAWING_CANCELLED: &str = "Wire drawing cancelled. Click a terminal to start again.";

pub const BOARD_RESET: &str =
    "Board reset. Select a wire and click two terminals to connect them.";

pub fn tab_selected(kind: CircuitKind) -> String {
    format!(
        "{} tab selected. Select a wire and click two terminals to connect them.",
        kind.title()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: StatusTable = StatusTable {
        complete_lamp_on: "done, lit",
        complete_lamp_off: "done, dark",
        switch_wording: SwitchWording::Position,
    };

    #[test]
    fn completion_only_when_complete() {
        assert_eq!(TABLE.completion(false, false), None, "incomplete has no text");
        assert_eq!(TABLE.completion(true, true), Some("done, lit"), "lit");
        assert_eq!(TABLE.completion(true, false), Some("done, dark"), "dark");
    }

    #[test]
    fn switch_position_wording() {
        assert_eq!(
            TABLE.switch_toggled("Switch", true, true, true),
            "Switch on. Lamp lit!",
            "complete and lit"
        );
        assert_eq!(
            TABLE.switch_toggled("Switch", false, false, false),
            "Switch off, but the circuit is not complete.",
            "incomplete"
        );
    }

    #[test]
    fn switch_toggled_wording() {
        let table = StatusTable {
            switch_wording: SwitchWording::Toggled,
            ..TABLE
        };
        assert_eq!(
            table.switch_toggled("Switch 2", false, true, false),
            "Switch 2 toggled. Lamp off.",
            "names the switch, not its position"
        );
    }

    #[test]
    fn tooltip_texts() {
        assert_eq!(tooltip(false, true), "Circuit disconnected", "incomplete wins");
        assert_eq!(tooltip(true, true), "Lamp lit", "lit");
        assert_eq!(tooltip(true, false), "Lamp off", "dark");
    }
}
