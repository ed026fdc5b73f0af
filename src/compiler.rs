//! Core theme compilation

use crate::error::{Result, ThemeError};
use crate::types::{PropertySet, PropertyValue, Scalar, ThemeConfig, ThemeOutput, TokenMap, VariableMap};
use crate::utils::{format_scalar, variable_name};

/// Compile a style map into static tokens plus per-container variables.
///
/// Sequence-valued properties are replaced by a `var(<name>, <fallback>)`
/// reference whose fallback is the formatted value for the first container;
/// their elements land in the variable bucket of the container at the same
/// position. Scalar-valued properties pass through untouched. The input is
/// never modified; both output maps are built fresh on every call.
pub fn build_theme(config: &ThemeConfig) -> Result<ThemeOutput> {
    log::debug!(
        "Compiling {} selectors across {} containers",
        config.styles.len(),
        config.containers.len()
    );

    // Phase 1: one empty bucket per container, in supplied order. Buckets
    // for containers no sequence reaches stay empty in the output.
    let mut vars = VariableMap::new();
    for container in &config.containers {
        vars.entry(container.clone()).or_default();
    }

    // Phase 2: walk selectors and properties in insertion order.
    let mut tokens = TokenMap::new();
    for (selector, properties) in &config.styles {
        let mut compiled = PropertySet::new();

        for (property, value) in properties {
            match value {
                PropertyValue::Sequence(elements) => {
                    let name = variable_name(selector, property)?;

                    for (index, element) in elements.iter().enumerate() {
                        let container = config.containers.get(index).ok_or_else(|| {
                            ThemeError::container_out_of_range(
                                name.clone(),
                                index,
                                config.containers.len(),
                            )
                        })?;
                        let bucket = vars.entry(container.clone()).or_default();
                        if let Some(previous) = bucket.insert(name.clone(), format_scalar(element)) {
                            // One warning per collision, not one per element.
                            if index == 0 {
                                log::warn!(
                                    "Variable '{}' redefined in container '{}' (was '{}')",
                                    name,
                                    container,
                                    previous
                                );
                            }
                        }
                    }

                    // The reference falls back to the first container's
                    // value, read back after the writes above.
                    let first = config.containers.first().ok_or_else(|| {
                        ThemeError::container_out_of_range(name.clone(), 0, config.containers.len())
                    })?;
                    let fallback = vars
                        .get(first)
                        .and_then(|bucket| bucket.get(&name))
                        .cloned()
                        .ok_or_else(|| {
                            ThemeError::empty_sequence(selector.clone(), property.clone())
                        })?;

                    compiled.insert(
                        property.clone(),
                        PropertyValue::Scalar(Scalar::Text(format!("var({}, {})", name, fallback))),
                    );
                }
                PropertyValue::Scalar(_) => {
                    compiled.insert(property.clone(), value.clone());
                }
            }
        }

        tokens.insert(selector.clone(), compiled);
    }

    log::debug!(
        "Compiled {} token selectors and {} variables",
        tokens.len(),
        vars.values().map(|bucket| bucket.len()).sum::<usize>()
    );

    Ok(ThemeOutput { tokens, vars })
}
