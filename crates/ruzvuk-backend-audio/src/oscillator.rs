//! Basic waveform generators (sine, square, sawtooth, triangle).
//!
//! All four are evaluated directly from absolute time rather than from a phase
//! accumulator, so every waveform is phase-aligned at `t = 0`:
//!
//! - sine: `sin(2πft)`
//! - square: `sign(sin(2πft))`
//! - sawtooth: `2·(ft − floor(ft + 0.5))`
//! - triangle: `2·|2·(ft − floor(ft + 0.5))| − 1`

/// Two times PI.
pub const TWO_PI: f64 = std::f64::consts::PI * 2.0;

/// Oscillator waveform shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Waveform {
    /// Sine wave.
    #[default]
    Sine,
    /// Square wave (values in {-1, 0, 1}).
    Square,
    /// Sawtooth wave.
    Sawtooth,
    /// Triangle wave.
    Triangle,
}

impl Waveform {
    /// Evaluates the waveform at time `t` seconds for frequency `freq` Hz.
    #[inline]
    pub fn sample(self, t: f64, freq: f64) -> f64 {
        match self {
            Waveform::Sine => sine(t, freq),
            Waveform::Square => square(t, freq),
            Waveform::Sawtooth => sawtooth(t, freq),
            Waveform::Triangle => triangle(t, freq),
        }
    }

    /// Returns the lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Triangle => "triangle",
        }
    }
}

impl std::fmt::Display for Waveform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sine wave.
#[inline]
pub fn sine(t: f64, freq: f64) -> f64 {
    (TWO_PI * freq * t).sin()
}

/// Square wave as the sign of the sine; exactly zero where the sine is zero.
#[inline]
pub fn square(t: f64, freq: f64) -> f64 {
    sign(sine(t, freq))
}

/// Sawtooth wave, centered so that it crosses zero at `t = 0`.
#[inline]
pub fn sawtooth(t: f64, freq: f64) -> f64 {
    let ft = freq * t;
    2.0 * (ft - (ft + 0.5).floor())
}

/// Triangle wave, starting at -1 at `t = 0`.
#[inline]
pub fn triangle(t: f64, freq: f64) -> f64 {
    2.0 * sawtooth(t, freq).abs() - 1.0
}

/// Renders `waveform` over a vector of time samples.
pub fn render(times: &[f64], freq: f64, waveform: Waveform) -> Vec<f64> {
    times.iter().map(|&t| waveform.sample(t, freq)).collect()
}

// `f64::signum` maps 0.0 to 1.0; the square wave needs 0.
#[inline]
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
