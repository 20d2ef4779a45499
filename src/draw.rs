use egui::Pos2;

use crate::error::WiringError;
use crate::grid::GridSnapper;
use crate::terminal::Terminal;
use crate::wire::{WireColor, WireConnection};

/// A wire under construction.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct DrawSession {
    pub start: Terminal,
    pub color: WireColor,
    /// Starts at the exact center of `start`; freehand points are snapped
    pub points: Vec<Pos2>,
}

#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub enum DrawState {
    #[default]
    Idle,
    Drawing(DrawSession),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TerminalStep {
    Started,
    Finished(WireConnection),
}

impl DrawState {
    pub fn session(&self) -> Option<&DrawSession> {
        match self {
            Self::Idle => None,
            Self::Drawing(s) => Some(s),
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing(_))
    }

    /// A terminal was clicked. Starts a session when idle, finishes it when
    /// drawing. `center` is the terminal's exact position.
    pub fn click_terminal(
        &mut self,
        terminal: Terminal,
        center: Pos2,
        color: Option<WireColor>,
    ) -> Result<TerminalStep, WiringError> {
        let color = color.ok_or(WiringError::NoColorSelected)?;

        match std::mem::take(self) {
            Self::Idle => {
                *self = Self::Drawing(DrawSession {
                    start: terminal,
                    color,
                    points: vec![center],
                });
                Ok(TerminalStep::Started)
            }
            Self::Drawing(session) if session.start == terminal => {
                *self = Self::Drawing(session);
                Err(WiringError::SelfConnectionAttempt(terminal))
            }
            Self::Drawing(mut session) => {
                session.points.push(center);
                Ok(TerminalStep::Finished(WireConnection {
                    a: session.start,
                    b: terminal,
                    color: session.color,
                    path: session.points,
                }))
            }
        }
    }

    /// Append a snapped freehand point. Returns the stored point, or `None`
    /// when no wire is being drawn.
    pub fn add_point(&mut self, raw: Pos2, grid: &GridSnapper) -> Option<Pos2> {
        let Self::Drawing(session) = self else {
            return None;
        };
        let p = grid.snap_point(raw);
        session.points.push(p);
        Some(p)
    }

    /// Abandon the current wire, if any.
    pub fn cancel(&mut self) -> Option<DrawSession> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Drawing(session) => Some(session),
        }
    }
}
