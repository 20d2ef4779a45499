use std::fmt::Display;

use egui::{Color32, Pos2};

use crate::terminal::{Terminal, TerminalPair};

#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WireColor {
    Red,
    Blue,
    Black,
    Green,
}

impl WireColor {
    pub const ALL: [Self; 4] = [Self::Red, Self::Blue, Self::Black, Self::Green];

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Black => "black",
            Self::Green => "green",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Black => "Black",
            Self::Green => "Green",
        }
    }

    pub fn color32(self) -> Color32 {
        match self {
            Self::Red => Color32::from_rgb(220, 30, 30),
            Self::Blue => Color32::from_rgb(30, 80, 220),
            Self::Black => Color32::from_rgb(20, 20, 20),
            Self::Green => Color32::from_rgb(40, 170, 60),
        }
    }
}

impl Display for WireColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A committed wire. Never edited after the draw session that produced it.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct WireConnection {
    pub a: Terminal,
    pub b: Terminal,
    pub color: WireColor,
    /// Polyline from the center of `a` to the center of `b`
    pub path: Vec<Pos2>,
}

impl WireConnection {
    pub fn pair(&self) -> TerminalPair {
        TerminalPair::new(self.a, self.b)
    }
}
