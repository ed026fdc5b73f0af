//! Theme Token Compiler
//!
//! A compiler for responsive theme definitions that repackages style values
//! as CSS custom properties, grouped per container for conditional
//! injection (media queries, scopes, themes).
//!
//! # Features
//!
//! - Scalar and per-container array values in one style map
//! - Deterministic output with insertion order preserved end to end
//! - Derived `--<selector><Property>` variable names
//! - `var(...)` references with the first container's value as fallback
//! - Pixel formatting for bare numbers, pass-through for strings
//! - JSON and TOML configuration files
//!
//! # Basic Usage
//!
//! ```rust
//! use themec::{build_theme, Result, ThemeConfig};
//!
//! fn main() -> Result<()> {
//!     let config = ThemeConfig::from_json(
//!         r#"{
//!             "styles": { "button": { "padding": [8, 12], "color": "red" } },
//!             "containers": ["base", "md"]
//!         }"#,
//!     )?;
//!
//!     let output = build_theme(&config)?;
//!     assert_eq!(output.vars["base"]["--buttonPadding"], "8px");
//!     assert_eq!(output.vars["md"]["--buttonPadding"], "12px");
//!     Ok(())
//! }
//! ```
//!
//! # Compilation Pipeline
//!
//! The compiler is a single pure transformation:
//!
//! 1. **Phase 1**: Initialize one variable bucket per container, in order
//! 2. **Phase 2**: Walk the style map, bucketing sequence values by
//!    position and rewriting them as variable references

pub mod types;
pub mod error;
pub mod utils;

pub mod compiler;
pub mod cli;

use serde::Serialize;

// Re-export commonly used types and functions
pub use error::{Result, ThemeError};
pub use types::*;
pub use compiler::build_theme;
pub use utils::{format_scalar, upper_first, variable_name};
pub use cli::ThemeCli;

/// Compiler version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Compilation options and settings
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Enable debug mode with extra logging
    pub debug_mode: bool,

    /// Pretty-print the JSON output
    pub pretty: bool,

    /// Replace the configuration's containers before compiling
    pub containers: Option<Vec<String>>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            debug_mode: false,
            pretty: true,
            containers: None,
        }
    }
}

/// Compilation statistics and metrics
#[derive(Debug, Clone, Default, Serialize)]
pub struct ThemeStats {
    /// Original configuration size in bytes
    pub source_size: u64,

    /// Rendered output size in bytes
    pub output_size: u64,

    /// Number of selectors processed
    pub selector_count: usize,

    /// Number of properties processed
    pub property_count: usize,

    /// Number of variable values emitted across all containers
    pub variable_count: usize,

    /// Number of containers supplied
    pub container_count: usize,

    /// Compilation time in milliseconds
    pub compile_time_ms: u64,
}

/// Main compiler entry point with default options
pub fn compile_file(input_path: &str, output_path: &str) -> Result<ThemeStats> {
    compile_file_with_options(input_path, output_path, CompileOptions::default())
}

/// Compile with custom options
pub fn compile_file_with_options(
    input_path: &str,
    output_path: &str,
    options: CompileOptions,
) -> Result<ThemeStats> {
    use std::fs;
    use std::time::Instant;

    let start_time = Instant::now();

    if options.debug_mode {
        log::info!("{} v{}", NAME, VERSION);
        log::info!("Compiling '{}' to '{}'...", input_path, output_path);
        log::debug!("Compiler options: {:?}", options);
    }

    // Read input file and get source size
    let source = fs::read_to_string(input_path).map_err(|e| ThemeError::FileNotFound {
        path: format!("{}: {}", input_path, e),
    })?;

    let source_size = source.len() as u64;

    let mut config = parse_config(&source, input_path)?;
    if let Some(containers) = options.containers {
        config.containers = containers;
    }

    let output = build_theme(&config)?;

    let rendered = if options.pretty {
        output.to_json_pretty()?
    } else {
        output.to_json()?
    };

    let stats = ThemeStats {
        source_size,
        output_size: rendered.len() as u64,
        selector_count: config.styles.len(),
        property_count: config.styles.values().map(|set| set.len()).sum(),
        variable_count: output.vars.values().map(|bucket| bucket.len()).sum(),
        container_count: config.containers.len(),
        compile_time_ms: start_time.elapsed().as_millis() as u64,
    };

    // Write output
    fs::write(output_path, rendered).map_err(|e| ThemeError::Io(e))?;

    if options.debug_mode {
        log::info!("Compilation successful!");
        log::info!("Source size: {} bytes", stats.source_size);
        log::info!("Output size: {} bytes", stats.output_size);
        log::info!("Compile time: {}ms", stats.compile_time_ms);
        log::debug!("Full stats: {:?}", stats);
    }

    Ok(stats)
}

/// Compile a JSON configuration string to theme output
pub fn compile_str(source: &str) -> Result<ThemeOutput> {
    let config = ThemeConfig::from_json(source)?;
    build_theme(&config)
}

/// Parse a configuration file body based on its extension
pub fn parse_config(source: &str, path: &str) -> Result<ThemeConfig> {
    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some("json") => ThemeConfig::from_json(source),
        Some("toml") => ThemeConfig::from_toml(source),
        _ => Err(ThemeError::InvalidFormat {
            message: format!("Unsupported config format: {} (expected .json or .toml)", path),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const BUTTON_THEME: &str = r#"{
        "styles": {
            "button": { "padding": [8, 12], "color": "red" }
        },
        "containers": ["base", "md"]
    }"#;

    #[test]
    fn test_compile_str() {
        let output = compile_str(BUTTON_THEME).unwrap();
        assert_eq!(
            output.tokens["button"]["padding"],
            PropertyValue::from("var(--buttonPadding, 8px)")
        );
        assert_eq!(output.vars["md"]["--buttonPadding"], "12px");
    }

    #[test]
    fn test_compile_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("theme.json");
        let output_path = temp_dir.path().join("theme.out.json");

        fs::write(&input_path, BUTTON_THEME).unwrap();

        let stats = compile_file(
            input_path.to_str().unwrap(),
            output_path.to_str().unwrap(),
        )
        .unwrap();

        assert!(output_path.exists());
        assert_eq!(stats.selector_count, 1);
        assert_eq!(stats.property_count, 2);
        assert_eq!(stats.variable_count, 2);
        assert_eq!(stats.container_count, 2);
        assert!(stats.source_size > 0);
        assert!(stats.output_size > 0);

        let rendered = fs::read_to_string(&output_path).unwrap();
        let output: ThemeOutput = serde_json::from_str(&rendered).unwrap();
        assert_eq!(output.vars["base"]["--buttonPadding"], "8px");
        assert_eq!(output.tokens["button"]["color"], PropertyValue::from("red"));
    }

    #[test]
    fn test_compile_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("theme.toml");
        let output_path = temp_dir.path().join("theme.out.json");

        fs::write(
            &input_path,
            r#"
                containers = ["base", "md"]

                [styles.button]
                padding = [8, 12]
            "#,
        )
        .unwrap();

        compile_file(
            input_path.to_str().unwrap(),
            output_path.to_str().unwrap(),
        )
        .unwrap();

        let rendered = fs::read_to_string(&output_path).unwrap();
        let output: ThemeOutput = serde_json::from_str(&rendered).unwrap();
        assert_eq!(output.vars["md"]["--buttonPadding"], "12px");
    }

    #[test]
    fn test_missing_input_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("theme.out.json");

        let err = compile_file("/nonexistent/theme.json", output_path.to_str().unwrap())
            .unwrap_err();
        assert!(matches!(err, ThemeError::FileNotFound { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("theme.yaml");
        let output_path = temp_dir.path().join("theme.out.json");

        fs::write(&input_path, "containers: []").unwrap();

        let err = compile_file(
            input_path.to_str().unwrap(),
            output_path.to_str().unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::InvalidFormat { .. }));
    }

    #[test]
    fn test_compact_output() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("theme.json");
        let output_path = temp_dir.path().join("theme.out.json");

        fs::write(&input_path, BUTTON_THEME).unwrap();

        let options = CompileOptions {
            pretty: false,
            ..Default::default()
        };
        compile_file_with_options(
            input_path.to_str().unwrap(),
            output_path.to_str().unwrap(),
            options,
        )
        .unwrap();

        let rendered = fs::read_to_string(&output_path).unwrap();
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn test_stats_serialize() {
        let stats = ThemeStats {
            selector_count: 3,
            ..Default::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"selector_count\":3"));
    }

    #[test]
    fn test_containers_override() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("theme.json");
        let output_path = temp_dir.path().join("theme.out.json");

        // The file only declares one container; the override supplies the
        // second one the padding sequence needs.
        fs::write(
            &input_path,
            r#"{
                "styles": { "button": { "padding": [8, 12] } },
                "containers": ["base"]
            }"#,
        )
        .unwrap();

        let options = CompileOptions {
            containers: Some(vec!["base".to_string(), "md".to_string()]),
            ..Default::default()
        };
        let stats = compile_file_with_options(
            input_path.to_str().unwrap(),
            output_path.to_str().unwrap(),
            options,
        )
        .unwrap();

        assert_eq!(stats.container_count, 2);

        let rendered = fs::read_to_string(&output_path).unwrap();
        let output: ThemeOutput = serde_json::from_str(&rendered).unwrap();
        assert_eq!(output.vars["md"]["--buttonPadding"], "12px");
    }
}
