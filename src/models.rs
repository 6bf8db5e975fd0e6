//! Data models for the Skyfort SDK
//!
//! All response types are explicit structs declared with serde; wire keys
//! are camelCase and normalize to snake_case fields via
//! `rename_all = "camelCase"`. Enumerated wire values (count-type actions,
//! phrase match types) are closed enums rather than free strings.
//!
//! # Key Types
//!
//! * [`DlpDictionary`] - a DLP dictionary with its phrase and pattern rules
//! * [`DictionaryUpdate`], [`NewDictionary`] - mutation inputs for dictionaries
//! * [`Device`], [`ListDevicesOpts`] - enrolled devices and list filters
//! * [`DeviceOtp`], [`DevicePasswords`] - device secrets

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

// ---------------------------------------------------------------------------
// DLP dictionaries
// ---------------------------------------------------------------------------

/// Count-type action attached to a phrase rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhraseAction {
    /// Count every occurrence of the phrase
    #[serde(rename = "PHRASE_COUNT_TYPE_ALL")]
    All,
    /// Count unique occurrences of the phrase
    #[serde(rename = "PHRASE_COUNT_TYPE_UNIQUE")]
    Unique,
}

impl PhraseAction {
    /// Map a shorthand action token (`"all"` / `"unique"`) to the action
    pub fn from_shorthand(action: &str) -> Result<Self> {
        match action {
            "all" => Ok(PhraseAction::All),
            "unique" => Ok(PhraseAction::Unique),
            other => Err(Error::Validation(format!(
                "unknown phrase action {:?}, expected \"all\" or \"unique\"",
                other
            ))),
        }
    }

    /// The shorthand token for this action
    pub fn shorthand(self) -> &'static str {
        match self {
            PhraseAction::All => "all",
            PhraseAction::Unique => "unique",
        }
    }
}

/// Count-type action attached to a pattern rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternAction {
    /// Count every match of the pattern
    #[serde(rename = "PATTERN_COUNT_TYPE_ALL")]
    All,
    /// Count unique matches of the pattern
    #[serde(rename = "PATTERN_COUNT_TYPE_UNIQUE")]
    Unique,
}

impl PatternAction {
    /// Map a shorthand action token (`"all"` / `"unique"`) to the action
    pub fn from_shorthand(action: &str) -> Result<Self> {
        match action {
            "all" => Ok(PatternAction::All),
            "unique" => Ok(PatternAction::Unique),
            other => Err(Error::Validation(format!(
                "unknown pattern action {:?}, expected \"all\" or \"unique\"",
                other
            ))),
        }
    }

    /// The shorthand token for this action
    pub fn shorthand(self) -> &'static str {
        match self {
            PatternAction::All => "all",
            PatternAction::Unique => "unique",
        }
    }
}

/// A phrase rule inside a DLP dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    /// Count-type action
    pub action: PhraseAction,
    /// The phrase to match
    pub phrase: String,
}

/// A pattern rule inside a DLP dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Count-type action
    pub action: PatternAction,
    /// The pattern to match
    pub pattern: String,
}

/// How custom phrases and patterns are combined when matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomPhraseMatchType {
    /// All phrase/pattern rules must match
    #[serde(rename = "MATCH_ALL_CUSTOM_PHRASE_PATTERN_DICTIONARY")]
    MatchAll,
    /// Any phrase/pattern rule may match
    #[serde(rename = "MATCH_ANY_CUSTOM_PHRASE_PATTERN_DICTIONARY")]
    MatchAny,
}

/// A DLP dictionary
///
/// Serializes to the full wire object, so a fetched dictionary can be
/// merged with caller-supplied fields and sent back on PUT (the API
/// requires the complete object on update).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DlpDictionary {
    /// Unique identifier
    pub id: i64,
    /// Dictionary name
    pub name: String,
    /// Dictionary description
    #[serde(default)]
    pub description: String,
    /// Whether this is a custom (user-defined) dictionary
    #[serde(default)]
    pub custom: bool,
    /// Match combination mode; absent on predefined dictionaries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_phrase_match_type: Option<CustomPhraseMatchType>,
    /// Vendor dictionary type (e.g. `PATTERNS_AND_PHRASES`)
    pub dictionary_type: String,
    /// Whether the name is a localization tag
    #[serde(default)]
    pub name_l10n_tag: bool,
    /// Phrase rules
    #[serde(default)]
    pub phrases: Vec<Phrase>,
    /// Pattern rules
    #[serde(default)]
    pub patterns: Vec<Pattern>,
}

/// Expand shorthand `(action, phrase)` pairs into phrase rules
///
/// `("all", "test")` becomes `{action: PHRASE_COUNT_TYPE_ALL, phrase: "test"}`.
/// Input order is preserved. Unknown action tokens are a validation error.
pub fn expand_phrases(pairs: &[(String, String)]) -> Result<Vec<Phrase>> {
    pairs
        .iter()
        .map(|(action, phrase)| {
            Ok(Phrase {
                action: PhraseAction::from_shorthand(action)?,
                phrase: phrase.clone(),
            })
        })
        .collect()
}

/// Expand shorthand `(action, pattern)` pairs into pattern rules
pub fn expand_patterns(pairs: &[(String, String)]) -> Result<Vec<Pattern>> {
    pairs
        .iter()
        .map(|(action, pattern)| {
            Ok(Pattern {
                action: PatternAction::from_shorthand(action)?,
                pattern: pattern.clone(),
            })
        })
        .collect()
}

/// Field-level update for a DLP dictionary
///
/// Only the fields set here are changed; everything else keeps the value
/// currently stored on the server. Phrases and patterns are given in
/// shorthand and replace the existing rule lists entirely.
///
/// # Example
///
/// ```
/// use skyfort_sdk::DictionaryUpdate;
///
/// let update = DictionaryUpdate::new()
///     .name("pci-terms")
///     .phrase("all", "card number")
///     .pattern("unique", r"\d{16}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DictionaryUpdate {
    name: Option<String>,
    description: Option<String>,
    custom_phrase_match_type: Option<CustomPhraseMatchType>,
    phrases: Option<Vec<(String, String)>>,
    patterns: Option<Vec<(String, String)>>,
}

impl DictionaryUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dictionary name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the dictionary description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the phrase/pattern match combination mode
    pub fn match_type(mut self, match_type: CustomPhraseMatchType) -> Self {
        self.custom_phrase_match_type = Some(match_type);
        self
    }

    /// Add a shorthand phrase rule; the first call replaces the stored list
    pub fn phrase(mut self, action: impl Into<String>, phrase: impl Into<String>) -> Self {
        self.phrases
            .get_or_insert_with(Vec::new)
            .push((action.into(), phrase.into()));
        self
    }

    /// Add a shorthand pattern rule; the first call replaces the stored list
    pub fn pattern(mut self, action: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.patterns
            .get_or_insert_with(Vec::new)
            .push((action.into(), pattern.into()));
        self
    }

    /// Overlay this update onto a fetched dictionary, expanding shorthand
    pub(crate) fn apply_to(self, dict: &mut DlpDictionary) -> Result<()> {
        if let Some(name) = self.name {
            dict.name = name;
        }
        if let Some(description) = self.description {
            dict.description = description;
        }
        if let Some(match_type) = self.custom_phrase_match_type {
            dict.custom_phrase_match_type = Some(match_type);
        }
        if let Some(pairs) = self.phrases {
            dict.phrases = expand_phrases(&pairs)?;
        }
        if let Some(pairs) = self.patterns {
            dict.patterns = expand_patterns(&pairs)?;
        }
        Ok(())
    }
}

/// A new custom DLP dictionary to create
#[derive(Debug, Clone)]
pub struct NewDictionary {
    name: String,
    description: Option<String>,
    custom_phrase_match_type: CustomPhraseMatchType,
    phrases: Vec<(String, String)>,
    patterns: Vec<(String, String)>,
}

impl NewDictionary {
    /// Create a dictionary definition with the given name and match mode
    pub fn new(name: impl Into<String>, match_type: CustomPhraseMatchType) -> Self {
        Self {
            name: name.into(),
            description: None,
            custom_phrase_match_type: match_type,
            phrases: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Set the dictionary description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a shorthand phrase rule
    pub fn phrase(mut self, action: impl Into<String>, phrase: impl Into<String>) -> Self {
        self.phrases.push((action.into(), phrase.into()));
        self
    }

    /// Add a shorthand pattern rule
    pub fn pattern(mut self, action: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.patterns.push((action.into(), pattern.into()));
        self
    }

    /// Build the POST body, expanding shorthand rules
    pub(crate) fn into_body(self) -> Result<serde_json::Value> {
        Ok(serde_json::json!({
            "name": self.name,
            "description": self.description,
            "custom": true,
            "customPhraseMatchType": self.custom_phrase_match_type,
            "dictionaryType": "PATTERNS_AND_PHRASES",
            "phrases": expand_phrases(&self.phrases)?,
            "patterns": expand_patterns(&self.patterns)?,
        }))
    }
}

// ---------------------------------------------------------------------------
// Devices
// ---------------------------------------------------------------------------

/// Operating system of an enrolled device, as the API's numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsType {
    /// iOS (1)
    Ios,
    /// Android (2)
    Android,
    /// Windows (3)
    Windows,
    /// macOS (4)
    MacOs,
    /// Linux (5)
    Linux,
}

impl OsType {
    /// The numeric wire value used in query and body parameters
    pub fn as_u8(self) -> u8 {
        match self {
            OsType::Ios => 1,
            OsType::Android => 2,
            OsType::Windows => 3,
            OsType::MacOs => 4,
            OsType::Linux => 5,
        }
    }
}

/// An enrolled device
///
/// The portal reports many vendor-defined fields; the common ones are
/// declared here and the rest are ignored on decode.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Unique device identifier
    pub udid: String,
    /// Enrolled user
    pub user: String,
    /// MAC address
    #[serde(default)]
    pub mac_address: Option<String>,
    /// Company the device is enrolled under
    #[serde(default)]
    pub company_name: Option<String>,
    /// Numeric OS type code (see [`OsType`])
    #[serde(rename = "type", default)]
    pub os_type: Option<u8>,
    /// OS version string
    #[serde(default)]
    pub os_version: Option<String>,
    /// Policy applied to the device
    #[serde(default)]
    pub policy_name: Option<String>,
    /// Registration state reported by the portal
    #[serde(default)]
    pub registration_state: Option<String>,
    /// Tunnel state code
    #[serde(default)]
    pub vpn_state: Option<i32>,
    /// Installed agent version
    #[serde(default)]
    pub agent_version: Option<String>,
    /// Last keep-alive timestamp, as reported
    #[serde(default)]
    pub keep_alive_time: Option<String>,
}

/// Filters for listing enrolled devices
#[derive(Debug, Clone, Default)]
pub struct ListDevicesOpts {
    /// Only devices enrolled by this user
    pub username: Option<String>,
    /// Only devices running this OS
    pub os_type: Option<OsType>,
    /// Page number to fetch
    pub page: Option<usize>,
    /// Page size
    pub page_size: Option<usize>,
}

/// Request to remove enrolled devices
#[derive(Debug, Clone, Default)]
pub struct RemoveDevicesRequest {
    /// Device identifiers to remove
    pub udids: Vec<String>,
    /// Remove all devices enrolled by this user
    pub username: Option<String>,
    /// Restrict removal to devices running this OS
    pub os_type: Option<OsType>,
}

/// Result of a device removal
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveDevicesResponse {
    /// Number of devices removed
    #[serde(default)]
    pub devices_removed: u32,
}

// ---------------------------------------------------------------------------
// Device secrets
// ---------------------------------------------------------------------------

/// One-time password for a device
#[derive(Debug, Deserialize)]
pub struct DeviceOtp {
    /// The OTP value
    pub otp: SecretString,
}

/// Per-device password set
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePasswords {
    /// Password to exit the agent
    #[serde(default)]
    pub exit_password: Option<SecretString>,
    /// Password to log out of the agent
    #[serde(default)]
    pub logout_password: Option<SecretString>,
    /// Password to uninstall the agent
    #[serde(default)]
    pub uninstall_password: Option<SecretString>,
    /// Password to disable the secure gateway
    #[serde(default)]
    pub gateway_disable_password: Option<SecretString>,
    /// Password to disable the tunnel
    #[serde(default)]
    pub tunnel_disable_password: Option<SecretString>,
}
