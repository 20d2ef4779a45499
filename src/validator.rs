use std::collections::BTreeMap;

use crate::error::WiringError;
use crate::template::{CircuitTemplate, LampRule, RequiredConnection, SwitchId};
use crate::wire::WireConnection;

#[derive(serde::Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verdict {
    pub complete: bool,
    pub lamp_on: bool,
}

fn satisfies(c: &WireConnection, r: &RequiredConnection) -> bool {
    c.color == r.color && c.pair() == r.pair()
}

/// Check the wires against the template's required set.
///
/// Terminal order and creation order are irrelevant. Whether wires outside
/// the required set are tolerated is the template's `exact_count` policy.
pub fn check<'a>(
    connections: impl IntoIterator<Item = &'a WireConnection>,
    template: &CircuitTemplate,
) -> Result<(), WiringError> {
    let connections: Vec<&WireConnection> = connections.into_iter().collect();
    let required = template.required;

    let missing = required
        .iter()
        .filter(|r| !connections.iter().any(|c| satisfies(c, r)))
        .count();
    let extra = connections.len().saturating_sub(required.len());

    // nothing to satisfy does not count as a finished exercise
    if required.is_empty() || missing > 0 || (template.policy.exact_count && extra > 0) {
        return Err(WiringError::IncompleteCircuit { missing, extra });
    }
    Ok(())
}

pub fn evaluate_completeness<'a>(
    connections: impl IntoIterator<Item = &'a WireConnection>,
    template: &CircuitTemplate,
) -> bool {
    check(connections, template).is_ok()
}

pub fn derive_lamp_state(
    complete: bool,
    switches: &BTreeMap<SwitchId, bool>,
    rule: LampRule,
) -> bool {
    rule.lamp_on(complete, switches)
}
