//! Generation request types.
//!
//! A [`GenerationRequest`] is built once per invocation, validated on
//! construction, and never mutated afterwards. Genre and instrument names are
//! kept as the caller wrote them (they appear in the output file name) and are
//! resolved to closed enums on demand, with an explicit fallback arm for
//! anything unrecognized.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RequestError;
use crate::output::{master_filename, OutputFormat};

/// Longest track that will be rendered, in minutes.
pub const MAX_LENGTH_MINUTES: u32 = 30;

/// Fastest tempo accepted, in beats per minute.
pub const MAX_TEMPO_BPM: u32 = 1000;

/// Musical genre, which selects the scale used by bass and melody.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    /// Classical (C major).
    Classical,
    /// Pop (C major). Also the fallback for unknown genres.
    #[default]
    Pop,
    /// Rock (E minor pentatonic-ish, with the octave E repeated).
    Rock,
    /// Jazz (B flat major).
    Jazz,
    /// Ambient (C minor pentatonic).
    Ambient,
}

impl Genre {
    /// All genres in display order.
    pub const ALL: [Genre; 5] = [
        Genre::Classical,
        Genre::Pop,
        Genre::Rock,
        Genre::Jazz,
        Genre::Ambient,
    ];

    /// Recognizes a genre name, case-insensitively.
    ///
    /// Accepts the English names and the Russian labels used by the web form.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "classical" | "classic" | "классика" => Some(Genre::Classical),
            "pop" | "поп" => Some(Genre::Pop),
            "rock" | "рок" => Some(Genre::Rock),
            "jazz" | "джаз" => Some(Genre::Jazz),
            "ambient" | "эмбиент" => Some(Genre::Ambient),
            _ => None,
        }
    }

    /// Resolves a genre name, falling back to [`Genre::Pop`].
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Classical => "classical",
            Genre::Pop => "pop",
            Genre::Rock => "rock",
            Genre::Jazz => "jazz",
            Genre::Ambient => "ambient",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Instrument class, which selects the timbre of the melody.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentKind {
    /// Sawtooth lead with three harmonics. Always used for the bass line.
    Electronic,
    /// Triangle tone with a softer attack.
    Acoustic,
    /// Square tone with four harmonic weights.
    Orchestral,
    /// Plain sine. The fallback for unknown instrument names.
    #[default]
    Generic,
}

impl InstrumentKind {
    /// All instrument kinds in display order.
    pub const ALL: [InstrumentKind; 4] = [
        InstrumentKind::Electronic,
        InstrumentKind::Acoustic,
        InstrumentKind::Orchestral,
        InstrumentKind::Generic,
    ];

    /// Recognizes an instrument name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "electronic" | "электронные" => Some(InstrumentKind::Electronic),
            "acoustic" | "акустические" => Some(InstrumentKind::Acoustic),
            "orchestral" | "оркестровые" => Some(InstrumentKind::Orchestral),
            _ => None,
        }
    }

    /// Resolves an instrument name, falling back to [`InstrumentKind::Generic`].
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentKind::Electronic => "electronic",
            InstrumentKind::Acoustic => "acoustic",
            InstrumentKind::Orchestral => "orchestral",
            InstrumentKind::Generic => "generic",
        }
    }
}

impl std::fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    genre: String,
    mood: String,
    instrument: String,
    length_minutes: u32,
    tempo_bpm: u32,
    description: String,
    seed: Option<u32>,
}

impl GenerationRequest {
    /// Starts building a request with the web form defaults.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Resolved genre (unknown names resolve to pop).
    pub fn genre(&self) -> Genre {
        Genre::from_name(&self.genre)
    }

    /// Genre text as supplied.
    pub fn genre_name(&self) -> &str {
        &self.genre
    }

    /// Mood text as supplied.
    pub fn mood(&self) -> &str {
        &self.mood
    }

    /// Resolved instrument (unknown names resolve to the generic sine).
    pub fn instrument(&self) -> InstrumentKind {
        InstrumentKind::from_name(&self.instrument)
    }

    /// Instrument text as supplied.
    pub fn instrument_name(&self) -> &str {
        &self.instrument
    }

    /// Length in whole minutes.
    pub fn length_minutes(&self) -> u32 {
        self.length_minutes
    }

    /// Tempo in beats per minute.
    pub fn tempo_bpm(&self) -> u32 {
        self.tempo_bpm
    }

    /// Free-text description. Carried for logging; it does not shape the audio.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Seed for the bass/melody random source, if the caller fixed one.
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        f64::from(self.length_minutes) * 60.0
    }

    /// Deterministic output file name for this request.
    pub fn output_filename(&self) -> String {
        master_filename(
            &self.genre,
            &self.mood,
            self.length_minutes,
            self.tempo_bpm,
            OutputFormat::Wav,
        )
    }
}

/// Builder for [`GenerationRequest`].
#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder {
    genre: String,
    mood: String,
    instrument: String,
    length_minutes: u32,
    tempo_bpm: u32,
    description: String,
    seed: Option<u32>,
}

impl Default for GenerationRequestBuilder {
    fn default() -> Self {
        Self {
            genre: "pop".to_string(),
            mood: "joy".to_string(),
            instrument: "electronic".to_string(),
            length_minutes: 2,
            tempo_bpm: 120,
            description: String::new(),
            seed: None,
        }
    }
}

impl GenerationRequestBuilder {
    /// Sets the genre text.
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Sets the mood text.
    pub fn mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = mood.into();
        self
    }

    /// Sets the instrument text.
    pub fn instrument(mut self, instrument: impl Into<String>) -> Self {
        self.instrument = instrument.into();
        self
    }

    /// Sets the length in minutes.
    pub fn length_minutes(mut self, length: u32) -> Self {
        self.length_minutes = length;
        self
    }

    /// Sets the tempo in BPM.
    pub fn tempo_bpm(mut self, tempo: u32) -> Self {
        self.tempo_bpm = tempo;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Fixes the random seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the random seed.
    pub fn maybe_seed(mut self, seed: Option<u32>) -> Self {
        self.seed = seed;
        self
    }

    /// Validates and builds the request.
    pub fn build(self) -> Result<GenerationRequest, RequestError> {
        validate_range("length", self.length_minutes, MAX_LENGTH_MINUTES)?;
        validate_range("tempo", self.tempo_bpm, MAX_TEMPO_BPM)?;
        validate_name_component("genre", &self.genre)?;
        validate_name_component("mood", &self.mood)?;

        Ok(GenerationRequest {
            genre: self.genre,
            mood: self.mood,
            instrument: self.instrument,
            length_minutes: self.length_minutes,
            tempo_bpm: self.tempo_bpm,
            description: self.description,
            seed: self.seed,
        })
    }
}

fn validate_range(name: &str, value: u32, max: u32) -> Result<(), RequestError> {
    if value == 0 {
        return Err(RequestError::invalid_param(name, "must be a positive integer"));
    }
    if value > max {
        return Err(RequestError::invalid_param(
            name,
            format!("must be <= {}, got {}", max, value),
        ));
    }
    Ok(())
}

/// Genre and mood become part of the file name, so they must not escape the
/// output directory.
fn validate_name_component(name: &str, value: &str) -> Result<(), RequestError> {
    if value.is_empty() {
        return Err(RequestError::invalid_param(name, "must not be empty"));
    }
    if value == "." || value == ".." {
        return Err(RequestError::invalid_param(name, "must not be a relative path"));
    }
    if value.chars().any(|c| c == '/' || c == '\\' || c == '\0') {
        return Err(RequestError::invalid_param(
            name,
            "must not contain path separators or NUL",
        ));
    }
    Ok(())
}

/// The loosely typed request payload sent by the web form.
///
/// `length` and `tempo` arrive as either numbers or numeric strings; they are
/// coerced the way the form handler always has, truncating fractional numbers
/// and rejecting anything that is not a positive integer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRequest {
    /// Genre text.
    #[serde(default)]
    pub genre: Option<String>,
    /// Mood text.
    #[serde(default)]
    pub mood: Option<String>,
    /// Instrument text.
    #[serde(default)]
    pub instrument: Option<String>,
    /// Length in minutes (number or string).
    #[serde(default)]
    pub length: Option<Value>,
    /// Tempo in BPM (number or string).
    #[serde(default)]
    pub tempo: Option<Value>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional random seed.
    #[serde(default)]
    pub seed: Option<u32>,
}

impl RawRequest {
    /// Parses a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Coerces and validates the payload into a [`GenerationRequest`].
    ///
    /// Missing fields take the builder defaults.
    pub fn into_request(self) -> Result<GenerationRequest, RequestError> {
        let mut builder = GenerationRequest::builder();
        if let Some(genre) = self.genre {
            builder = builder.genre(genre);
        }
        if let Some(mood) = self.mood {
            builder = builder.mood(mood);
        }
        if let Some(instrument) = self.instrument {
            builder = builder.instrument(instrument);
        }
        if let Some(length) = &self.length {
            builder = builder.length_minutes(coerce_positive_int("length", length)?);
        }
        if let Some(tempo) = &self.tempo {
            builder = builder.tempo_bpm(coerce_positive_int("tempo", tempo)?);
        }
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        builder.maybe_seed(self.seed).build()
    }
}

/// Coerces a JSON number or numeric string to a positive `u32`.
pub fn coerce_positive_int(name: &str, value: &Value) -> Result<u32, RequestError> {
    let parsed: Option<i64> = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    let Some(parsed) = parsed else {
        return Err(RequestError::invalid_param(
            name,
            format!("expected an integer, got {}", value),
        ));
    };
    if parsed < 1 {
        return Err(RequestError::invalid_param(
            name,
            format!("must be a positive integer, got {}", parsed),
        ));
    }
    u32::try_from(parsed)
        .map_err(|_| RequestError::invalid_param(name, format!("{} is too large", parsed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_genre_parse_case_insensitive() {
        assert_eq!(Genre::parse("ROCK"), Some(Genre::Rock));
        assert_eq!(Genre::parse("Jazz"), Some(Genre::Jazz));
        assert_eq!(Genre::parse("Классика"), Some(Genre::Classical));
        assert_eq!(Genre::parse("Поп"), Some(Genre::Pop));
        assert_eq!(Genre::parse("polka"), None);
    }

    #[test]
    fn test_unknown_genre_falls_back_to_pop() {
        assert_eq!(Genre::from_name("polka"), Genre::Pop);
        assert_eq!(Genre::from_name(""), Genre::Pop);
    }

    #[test]
    fn test_instrument_fallback() {
        assert_eq!(InstrumentKind::from_name("Электронные"), InstrumentKind::Electronic);
        assert_eq!(InstrumentKind::from_name("ORCHESTRAL"), InstrumentKind::Orchestral);
        assert_eq!(InstrumentKind::from_name("kazoo"), InstrumentKind::Generic);
    }

    #[test]
    fn test_builder_defaults() {
        let request = GenerationRequest::builder().build().unwrap();
        assert_eq!(request.genre(), Genre::Pop);
        assert_eq!(request.mood(), "joy");
        assert_eq!(request.instrument(), InstrumentKind::Electronic);
        assert_eq!(request.length_minutes(), 2);
        assert_eq!(request.tempo_bpm(), 120);
        assert_eq!(request.seed(), None);
        assert_eq!(request.duration_seconds(), 120.0);
    }

    #[test]
    fn test_form_labels_match_defaults() {
        let defaults = GenerationRequest::builder().build().unwrap();
        let form = GenerationRequest::builder()
            .genre("Поп")
            .mood("Радость")
            .instrument("Электронные")
            .build()
            .unwrap();

        assert_eq!(form.genre(), defaults.genre());
        assert_eq!(form.instrument(), defaults.instrument());
        assert_eq!(defaults.output_filename(), "master_pop_joy_2min_120bpm.wav");
        assert_eq!(form.output_filename(), "master_Поп_Радость_2min_120bpm.wav");
    }

    #[test]
    fn test_builder_rejects_zero_length_and_tempo() {
        assert!(GenerationRequest::builder().length_minutes(0).build().is_err());
        assert!(GenerationRequest::builder().tempo_bpm(0).build().is_err());
    }

    #[test]
    fn test_builder_rejects_limits() {
        let err = GenerationRequest::builder()
            .length_minutes(MAX_LENGTH_MINUTES + 1)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("length"));

        let err = GenerationRequest::builder()
            .tempo_bpm(MAX_TEMPO_BPM + 1)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("tempo"));
    }

    #[test]
    fn test_builder_rejects_path_like_names() {
        assert!(GenerationRequest::builder().genre("../etc").build().is_err());
        assert!(GenerationRequest::builder().mood("a\\b").build().is_err());
        assert!(GenerationRequest::builder().mood("..").build().is_err());
        assert!(GenerationRequest::builder().genre("").build().is_err());
    }

    #[test]
    fn test_output_filename_uses_original_text() {
        let request = GenerationRequest::builder()
            .genre("Поп")
            .mood("Радость")
            .length_minutes(1)
            .tempo_bpm(120)
            .build()
            .unwrap();
        assert_eq!(request.output_filename(), "master_Поп_Радость_1min_120bpm.wav");
    }

    #[test]
    fn test_coerce_accepts_numbers_and_strings() {
        assert_eq!(coerce_positive_int("length", &json!(2)).unwrap(), 2);
        assert_eq!(coerce_positive_int("length", &json!("3")).unwrap(), 3);
        assert_eq!(coerce_positive_int("length", &json!(" 4 ")).unwrap(), 4);
        assert_eq!(coerce_positive_int("length", &json!(2.9)).unwrap(), 2);
    }

    #[test]
    fn test_coerce_rejects_non_positive_and_garbage() {
        assert!(coerce_positive_int("tempo", &json!(0)).is_err());
        assert!(coerce_positive_int("tempo", &json!(-3)).is_err());
        assert!(coerce_positive_int("tempo", &json!("two")).is_err());
        assert!(coerce_positive_int("tempo", &json!("2.5")).is_err());
        assert!(coerce_positive_int("tempo", &json!(true)).is_err());
        assert!(coerce_positive_int("tempo", &json!([1])).is_err());
    }

    #[test]
    fn test_raw_request_from_form_payload() {
        let raw = RawRequest::from_json(
            r#"{"genre":"Рок","mood":"Грусть","instrument":"Акустические","length":"1","tempo":"95","description":"rainy"}"#,
        )
        .unwrap();
        let request = raw.into_request().unwrap();
        assert_eq!(request.genre(), Genre::Rock);
        assert_eq!(request.instrument(), InstrumentKind::Acoustic);
        assert_eq!(request.length_minutes(), 1);
        assert_eq!(request.tempo_bpm(), 95);
        assert_eq!(request.description(), "rainy");
    }

    #[test]
    fn test_raw_request_missing_fields_use_defaults() {
        let request = RawRequest::from_json("{}").unwrap().into_request().unwrap();
        assert_eq!(request.genre_name(), "pop");
        assert_eq!(request.length_minutes(), 2);
        assert_eq!(request.tempo_bpm(), 120);
    }

    #[test]
    fn test_raw_request_invalid_tempo() {
        let err = RawRequest::from_json(r#"{"tempo":"fast"}"#)
            .unwrap()
            .into_request()
            .unwrap_err();
        assert!(matches!(err, RequestError::InvalidParameter { ref name, .. } if name == "tempo"));
    }
}
