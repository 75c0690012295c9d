use serde::Deserialize;
use tracing::{debug, instrument};
use typeshow_base::{FilePath, PalHandle, ResultExt, TypeshowError, TypeshowResult, err};

use crate::greeting::{PROMPT, WELCOME_MESSAGE};
use crate::reader::ReadMode;
use crate::tour::Declaration;
use crate::value::{TypedValue, ValueKind};

/// Name of the optional config file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "typeshow.toml";

/// Settings read from `typeshow.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// How a failed read of the name is handled.
    pub read_mode: ReadMode,
    pub welcome_message: String,
    pub prompt: String,
    /// Extra declarations appended to the tour.
    #[serde(rename = "variable")]
    pub variables: Vec<VariableConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_mode: ReadMode::Strict,
            welcome_message: WELCOME_MESSAGE.to_string(),
            prompt: PROMPT.to_string(),
            variables: Vec::new(),
        }
    }
}

impl Config {
    /// Builds the tour declarations of all `[[variable]]` entries.
    pub fn declarations(&self) -> TypeshowResult<Vec<Declaration>> {
        self.variables
            .iter()
            .map(VariableConfig::to_declaration)
            .collect()
    }
}

/// A `[[variable]]` entry.
///
/// - `kind` and `value`: the literal is parsed as that kind
/// - only `value`: the kind is inferred from the literal
/// - only `kind`: the kind's zero value
///
/// `value` may be a TOML string, integer, float or boolean, so `value = 300000` and
/// `value = "300000"` both declare an `Int`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariableConfig {
    pub label: String,
    #[serde(default)]
    pub value: Option<VariableLiteral>,
    #[serde(default)]
    pub kind: Option<ValueKind>,
}

/// The right-hand side of a `[[variable]]` entry, as written in TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VariableLiteral {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl VariableLiteral {
    /// The literal as source text, for parsing as an explicit kind.
    fn source_text(&self) -> String {
        match self {
            VariableLiteral::Bool(value) => value.to_string(),
            VariableLiteral::Integer(value) => value.to_string(),
            // Debug keeps the fraction or exponent, so `1.0` does not read back as an integer
            VariableLiteral::Float(value) => format!("{:?}", value),
            VariableLiteral::Text(text) => text.clone(),
        }
    }

    fn infer(&self) -> TypeshowResult<TypedValue> {
        match self {
            VariableLiteral::Bool(value) => Ok(TypedValue::Bool(*value)),
            VariableLiteral::Integer(value) => isize::try_from(*value)
                .map(TypedValue::Int)
                .map_err(|_| err!("{} does not fit in isize", value)),
            VariableLiteral::Float(value) => Ok(TypedValue::Float64(*value)),
            VariableLiteral::Text(text) => TypedValue::infer(text),
        }
    }
}

impl From<&str> for VariableLiteral {
    fn from(text: &str) -> Self {
        VariableLiteral::Text(text.to_string())
    }
}

impl VariableConfig {
    pub fn to_declaration(&self) -> TypeshowResult<Declaration> {
        let value = match (self.kind, &self.value) {
            (Some(kind), Some(literal)) => TypedValue::parse_as(kind, &literal.source_text()),
            (None, Some(literal)) => literal.infer(),
            (Some(kind), None) => Ok(kind.zero_value()),
            (None, None) => Err(err!("variable '{}' needs a value or a kind", self.label)),
        };
        value
            .and_then(|value| Declaration::new(self.label.clone(), value))
            .with_context(|| format!("Invalid variable '{}'", self.label))
    }
}

/// Loads the config file, falling back to defaults when it does not exist.
#[instrument(skip(pal), fields(path = %path))]
pub fn load_config(pal: &PalHandle, path: &FilePath) -> TypeshowResult<Config> {
    if !pal.file_exists(path)? {
        debug!("no config file, using defaults");
        return Ok(Config::default());
    }
    let text = pal.read_file_to_string(path).map_err(|e| {
        let message = format!("Failed to read config file {}", path);
        Box::new(TypeshowError::message(message).caused_by(e))
    })?;
    let config: Config =
        toml::from_str(&text).map_err(|e| err!("Failed to parse config file {}: {}", path, e))?;
    debug!(
        read_mode = ?config.read_mode,
        variables = config.variables.len(),
        "loaded config"
    );
    Ok(config)
}
