use crate::template::SwitchId;
use crate::terminal::Terminal;

/// Everything that can go wrong while wiring. None of these are fatal; the
/// controller turns them into status messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WiringError {
    #[error("select a wire color first")]
    NoColorSelected,

    #[error("wire cannot end on its starting terminal {0}")]
    SelfConnectionAttempt(Terminal),

    #[error("{a} and {b} are already connected")]
    DuplicateConnection { a: Terminal, b: Terminal },

    #[error("circuit incomplete: {missing} required connection(s) missing, {extra} extra")]
    IncompleteCircuit { missing: usize, extra: usize },

    #[error("terminal {0} is not part of this circuit")]
    UnknownTerminal(Terminal),

    #[error("switch {0} is not part of this circuit")]
    UnknownSwitch(SwitchId),
}
