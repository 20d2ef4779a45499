use slotmap::SlotMap;

use crate::error::WiringError;
use crate::terminal::TerminalPair;
use crate::wire::WireConnection;

slotmap::new_key_type! {
    pub struct ConnectionId;
}

/// Committed wires of one circuit, in the order they were made.
#[derive(Default, serde::Serialize, Debug, Clone)]
pub struct ConnectionStore {
    connections: SlotMap<ConnectionId, WireConnection>,
    // slot order is not insertion order once slots get reused after a clear
    order: Vec<ConnectionId>,
}

impl ConnectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a finished wire. With `reject_duplicates` a second wire between
    /// the same two terminals is refused and nothing is stored.
    pub fn add(
        &mut self,
        connection: WireConnection,
        reject_duplicates: bool,
    ) -> Result<ConnectionId, WiringError> {
        if reject_duplicates && self.contains_pair(connection.pair()) {
            return Err(WiringError::DuplicateConnection {
                a: connection.a,
                b: connection.b,
            });
        }
        let id = self.connections.insert(connection);
        self.order.push(id);
        Ok(id)
    }

    /// Drop every wire, returning the ids that were removed (oldest first).
    pub fn clear(&mut self) -> Vec<ConnectionId> {
        self.connections.clear();
        std::mem::take(&mut self.order)
    }

    pub fn all(&self) -> impl Iterator<Item = (ConnectionId, &WireConnection)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.connections.get(*id).map(|c| (*id, c)))
    }

    pub fn contains_pair(&self, pair: TerminalPair) -> bool {
        self.connections.values().any(|c| c.pair() == pair)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::Terminal;
    use crate::wire::WireColor;
    use egui::pos2;

    fn wire(a: Terminal, b: Terminal, color: WireColor) -> WireConnection {
        WireConnection {
            a,
            b,
            color,
            path: vec![pos2(0.0, 0.0), pos2(10.0, 10.0)],
        }
    }

    const A: Terminal = Terminal::new("db", "phase");
    const B: Terminal = Terminal::new("switch", "phase");
    const C: Terminal = Terminal::new("lamp", "neutral");

    #[test]
    fn keeps_insertion_order() {
        let mut store = ConnectionStore::new();
        store.add(wire(A, B, WireColor::Red), false).expect("first add");
        store.add(wire(B, C, WireColor::Blue), false).expect("second add");
        store.add(wire(A, C, WireColor::Black), false).expect("third add");

        let colors: Vec<WireColor> = store.all().map(|(_, c)| c.color).collect();
        assert_eq!(
            colors,
            vec![WireColor::Red, WireColor::Blue, WireColor::Black],
            "iteration follows insertion"
        );
    }

    #[test]
    fn order_survives_clear_and_reuse() {
        let mut store = ConnectionStore::new();
        store.add(wire(A, B, WireColor::Red), false).expect("add");
        store.add(wire(B, C, WireColor::Blue), false).expect("add");
        let removed = store.clear();
        assert_eq!(removed.len(), 2, "both ids handed back");
        assert!(store.is_empty(), "cleared");

        store.add(wire(A, C, WireColor::Green), false).expect("add");
        store.add(wire(A, B, WireColor::Black), false).expect("add");
        let colors: Vec<WireColor> = store.all().map(|(_, c)| c.color).collect();
        assert_eq!(colors, vec![WireColor::Green, WireColor::Black], "new order");
    }

    #[test]
    fn duplicates_allowed_by_default_policy() {
        let mut store = ConnectionStore::new();
        store.add(wire(A, B, WireColor::Red), false).expect("add");
        store.add(wire(B, A, WireColor::Black), false).expect("duplicate allowed");
        assert_eq!(store.len(), 2, "both stored");
    }

    #[test]
    fn duplicates_rejected_in_either_direction() {
        let mut store = ConnectionStore::new();
        store.add(wire(A, B, WireColor::Red), true).expect("add");
        let err = store
            .add(wire(B, A, WireColor::Blue), true)
            .expect_err("reversed pair is the same pair");
        assert_eq!(err, WiringError::DuplicateConnection { a: B, b: A }, "error names the wire");
        assert_eq!(store.len(), 1, "nothing stored on rejection");
    }

    #[test]
    fn cleared_pair_can_be_wired_again() {
        let mut store = ConnectionStore::new();
        store.add(wire(A, C, WireColor::Blue), true).expect("add");
        store.clear();
        assert!(!store.contains_pair(TerminalPair::new(C, A)), "pair gone after clear");
        store.add(wire(C, A, WireColor::Blue), true).expect("not a duplicate any more");
        assert_eq!(store.len(), 1, "one wire");
    }
}
