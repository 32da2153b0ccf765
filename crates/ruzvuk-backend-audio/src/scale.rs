//! Genre to scale mapping.
//!
//! Each genre names an ordered list of notes; the notes are looked up in a
//! fixed frequency table (fourth octave, A = 440 Hz).

use rand::seq::SliceRandom;
use rand::Rng;
use ruzvuk_spec::Genre;

/// Note names available in the frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteName {
    C,
    CSharp,
    D,
    DSharp,
    EFlat,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    BFlat,
    B,
}

impl NoteName {
    /// Frequency in Hz.
    pub fn frequency(self) -> f64 {
        match self {
            NoteName::C => 261.63,
            NoteName::CSharp => 277.18,
            NoteName::D => 293.66,
            NoteName::DSharp | NoteName::EFlat => 311.13,
            NoteName::E => 329.63,
            NoteName::F => 349.23,
            NoteName::FSharp => 369.99,
            NoteName::G => 392.00,
            NoteName::GSharp => 415.30,
            NoteName::A => 440.00,
            NoteName::ASharp | NoteName::BFlat => 466.16,
            NoteName::B => 493.88,
        }
    }

    /// Conventional spelling ("C#", "Eb", ...).
    pub fn as_str(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::CSharp => "C#",
            NoteName::D => "D",
            NoteName::DSharp => "D#",
            NoteName::EFlat => "Eb",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::FSharp => "F#",
            NoteName::G => "G",
            NoteName::GSharp => "G#",
            NoteName::A => "A",
            NoteName::ASharp => "A#",
            NoteName::BFlat => "Bb",
            NoteName::B => "B",
        }
    }
}

impl std::fmt::Display for NoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered note names for a genre.
pub fn note_names(genre: Genre) -> &'static [NoteName] {
    use NoteName::*;
    match genre {
        Genre::Classical | Genre::Pop => &[C, D, E, F, G, A, B],
        Genre::Rock => &[E, G, A, B, C, D, E],
        Genre::Jazz => &[BFlat, C, D, EFlat, F, G, A],
        Genre::Ambient => &[C, EFlat, F, G, BFlat],
    }
}

/// An immutable, ordered palette of note frequencies.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    frequencies: Vec<f64>,
}

impl Scale {
    /// Builds the scale for a genre.
    pub fn for_genre(genre: Genre) -> Self {
        Self {
            frequencies: note_names(genre).iter().map(|n| n.frequency()).collect(),
        }
    }

    /// Builds the scale for a genre name; unknown names use the pop scale.
    pub fn resolve(name: &str) -> Self {
        Self::for_genre(Genre::from_name(name))
    }

    /// Frequencies in scale order.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Number of degrees.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Returns true if the scale has no notes.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Frequency of a scale degree, wrapping past the top of the scale.
    pub fn degree(&self, index: usize) -> f64 {
        self.frequencies[index % self.frequencies.len()]
    }

    /// Picks a frequency uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<f64> {
        self.frequencies.choose(rng).copied()
    }
}
