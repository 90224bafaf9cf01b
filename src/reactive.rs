//! Control → output slot wiring.
//!
//! Each output slot is recomputed whenever any control in its input set
//! changes. `AppState` consults [`slots_for`] after every control change
//! instead of hard-coding the dependencies in the panels.

/// User-facing inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    SiteDropdown,
    PayloadSlider,
}

/// Rendered outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputSlot {
    SuccessPie,
    PayloadScatter,
}

/// A slot and the controls it listens to.
pub struct Binding {
    pub slot: OutputSlot,
    pub inputs: &'static [Control],
}

pub const BINDINGS: &[Binding] = &[
    Binding {
        slot: OutputSlot::SuccessPie,
        inputs: &[Control::SiteDropdown],
    },
    Binding {
        slot: OutputSlot::PayloadScatter,
        inputs: &[Control::SiteDropdown, Control::PayloadSlider],
    },
];

/// Slots to recompute after `control` changed, in table order.
pub fn slots_for(control: Control) -> impl Iterator<Item = OutputSlot> {
    BINDINGS
        .iter()
        .filter(move |b| b.inputs.contains(&control))
        .map(|b| b.slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_change_refreshes_both_charts() {
        let slots: Vec<_> = slots_for(Control::SiteDropdown).collect();
        assert_eq!(slots, vec![OutputSlot::SuccessPie, OutputSlot::PayloadScatter]);
    }

    #[test]
    fn slider_change_refreshes_scatter_only() {
        let slots: Vec<_> = slots_for(Control::PayloadSlider).collect();
        assert_eq!(slots, vec![OutputSlot::PayloadScatter]);
    }
}
