//! Core types for the theme compiler

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

// Leaf value of a style property. Int is tried before Float so integral
// numbers survive deserialization without picking up a fractional form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    pub fn is_number(&self) -> bool {
        matches!(self, Scalar::Int(_) | Scalar::Float(_))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

/// A property value is either a single scalar or an ordered sequence of
/// scalars, where position i targets the container at position i.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Scalar(Scalar),
    Sequence(Vec<Scalar>),
}

impl From<Scalar> for PropertyValue {
    fn from(value: Scalar) -> Self {
        PropertyValue::Scalar(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Scalar(Scalar::Int(value))
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Scalar(Scalar::Text(value.to_string()))
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Scalar(Scalar::Text(value))
    }
}

impl From<Vec<Scalar>> for PropertyValue {
    fn from(values: Vec<Scalar>) -> Self {
        PropertyValue::Sequence(values)
    }
}

// Order-preserving map aliases. Iteration order is insertion order, which
// keeps compiled output deterministic for identical input.
pub type PropertySet = IndexMap<String, PropertyValue>;
pub type StyleMap = IndexMap<String, PropertySet>;
pub type TokenMap = IndexMap<String, PropertySet>;
pub type ContainerVars = IndexMap<String, String>;
pub type VariableMap = IndexMap<String, ContainerVars>;

/// Compiler input: selectors with their properties, plus the ordered
/// container identifiers that array positions map onto.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub styles: StyleMap,
    #[serde(default)]
    pub containers: Vec<String>,
}

impl ThemeConfig {
    pub fn new(styles: StyleMap, containers: Vec<String>) -> Self {
        Self { styles, containers }
    }

    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

/// Compiler output: static tokens referencing variables, and per-container
/// variable values for conditional injection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeOutput {
    pub tokens: TokenMap,
    pub vars: VariableMap,
}

impl ThemeOutput {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
