use uom::si::f64::HeatTransfer;

/// Air-side convection around the exposed lead wires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvectionRegime {
    /// Natural convection in still room air.
    Still,
    /// Forced convection in a draft.
    Draft,
}

impl ConvectionRegime {
    /// Both regimes, in reporting order.
    pub const ALL: [Self; 2] = [Self::Still, Self::Draft];
}

/// Convection coefficients for each [`ConvectionRegime`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirConvection {
    pub still: HeatTransfer,
    pub draft: HeatTransfer,
}

impl AirConvection {
    /// Returns the coefficient for `regime`.
    #[must_use]
    pub fn coefficient(&self, regime: ConvectionRegime) -> HeatTransfer {
        match regime {
            ConvectionRegime::Still => self.still,
            ConvectionRegime::Draft => self.draft,
        }
    }
}
