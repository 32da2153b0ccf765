//! Instrument profiles.

use ruzvuk_spec::InstrumentKind;

use crate::envelope::AdsrParams;
use crate::oscillator::Waveform;

/// Timbre of a synthesized note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentProfile {
    /// Base waveform for every harmonic.
    pub waveform: Waveform,
    /// Harmonic weights, fundamental first.
    pub harmonics: &'static [f64],
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
}

/// Sawtooth lead, also used for every bass note.
pub const ELECTRONIC: InstrumentProfile = InstrumentProfile {
    waveform: Waveform::Sawtooth,
    harmonics: &[1.0, 0.5, 0.3],
    attack: 0.001,
    decay: 0.05,
};

/// Triangle tone.
pub const ACOUSTIC: InstrumentProfile = InstrumentProfile {
    waveform: Waveform::Triangle,
    harmonics: &[1.0, 0.7, 0.3],
    attack: 0.02,
    decay: 0.15,
};

/// Square tone with four weights (the fourth is beyond what notes use).
pub const ORCHESTRAL: InstrumentProfile = InstrumentProfile {
    waveform: Waveform::Square,
    harmonics: &[1.0, 0.4, 0.2, 0.1],
    attack: 0.01,
    decay: 0.2,
};

/// Single sine harmonic.
pub const GENERIC: InstrumentProfile = InstrumentProfile {
    waveform: Waveform::Sine,
    harmonics: &[1.0],
    attack: 0.01,
    decay: 0.1,
};

impl InstrumentProfile {
    /// Profile for an instrument kind.
    pub fn for_kind(kind: InstrumentKind) -> Self {
        match kind {
            InstrumentKind::Electronic => ELECTRONIC,
            InstrumentKind::Acoustic => ACOUSTIC,
            InstrumentKind::Orchestral => ORCHESTRAL,
            InstrumentKind::Generic => GENERIC,
        }
    }

    /// Profile for an instrument name; unknown names get the sine profile.
    pub fn resolve(name: &str) -> Self {
        Self::for_kind(InstrumentKind::from_name(name))
    }

    /// Note envelope built from this profile's attack and decay.
    pub fn envelope(&self) -> AdsrParams {
        AdsrParams::note(self.attack, self.decay)
    }
}

impl Default for InstrumentProfile {
    fn default() -> Self {
        GENERIC
    }
}
