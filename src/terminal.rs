use std::fmt::Display;

/// A named connection point on one of the template's components.
///
/// Terminals are declared by the circuit templates and never created by the
/// user, so both halves are static strings.
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Terminal {
    pub component: &'static str,
    pub name: &'static str,
}

impl Terminal {
    pub const fn new(component: &'static str, name: &'static str) -> Self {
        Self { component, name }
    }
}

impl Display for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.component, self.name)
    }
}

/// Unordered pair of distinct terminals. `(a, b)` and `(b, a)` compare equal.
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminalPair {
    lo: Terminal,
    hi: Terminal,
}

impl TerminalPair {
    pub fn new(a: Terminal, b: Terminal) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

}

impl Display for TerminalPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <-> {}", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHASE: Terminal = Terminal::new("db", "phase");
    const SWITCH: Terminal = Terminal::new("switch", "phase");

    #[test]
    fn display_joins_component_and_name() {
        assert_eq!(PHASE.to_string(), "db-phase", "dash separated");
    }

    #[test]
    fn pair_is_unordered() {
        assert_eq!(
            TerminalPair::new(PHASE, SWITCH),
            TerminalPair::new(SWITCH, PHASE),
            "order of endpoints must not matter"
        );
    }

    #[test]
    fn pair_display_is_normalised() {
        assert_eq!(
            TerminalPair::new(SWITCH, PHASE).to_string(),
            "db-phase <-> switch-phase",
            "lower terminal first"
        );
    }
}
