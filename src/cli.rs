//! Command-line interface for the theme compiler

use crate::error::{Result, ThemeError};
use crate::{build_theme, compile_file_with_options, parse_config, CompileOptions};
use clap::{Arg, ArgAction, Command};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    containers: Option<Vec<String>>,
    pretty: Option<bool>,
    output_directory: Option<String>,
}

pub struct ThemeCli {
    config: ConfigFile,
}

impl ThemeCli {
    pub fn new() -> Self {
        Self {
            config: ConfigFile::default(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let matches = self.build_cli().get_matches();

        // Set up logging before anything below emits a log record
        let verbose = matches.get_count("verbose");
        self.setup_logging(verbose)?;

        // Load config file if specified
        if let Some(config_path) = matches.get_one::<String>("config") {
            self.load_config_file(config_path)?;
        }

        match matches.subcommand() {
            Some(("compile", sub_matches)) => self.handle_compile_command(sub_matches),
            Some(("check", sub_matches)) => self.handle_check_command(sub_matches),
            _ => {
                println!("No subcommand specified. Use --help for usage information.");
                Ok(())
            }
        }
    }

    fn build_cli(&self) -> Command {
        Command::new(crate::NAME)
            .version(crate::VERSION)
            .about(crate::DESCRIPTION)
            .author("Themec Development Team")
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Configuration file path")
                    .action(ArgAction::Set)
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Increase verbosity (can be used multiple times)")
                    .action(ArgAction::Count)
            )
            .subcommand(
                Command::new("compile")
                    .about("Compile style configs to theme tokens and variables")
                    .arg(
                        Arg::new("input")
                            .help("Input style config (.json or .toml)")
                            .required(true)
                            .index(1)
                    )
                    .arg(
                        Arg::new("output")
                            .short('o')
                            .long("output")
                            .value_name("FILE")
                            .help("Output theme file")
                    )
                    .arg(
                        Arg::new("containers")
                            .long("containers")
                            .value_name("LIST")
                            .help("Comma-separated container names, replacing the config's list")
                    )
                    .arg(
                        Arg::new("compact")
                            .long("compact")
                            .help("Emit compact JSON instead of pretty-printed")
                            .action(ArgAction::SetTrue)
                    )
                    .arg(
                        Arg::new("debug")
                            .short('d')
                            .long("debug")
                            .help("Enable debug mode with extra logging")
                            .action(ArgAction::SetTrue)
                    )
                    .arg(
                        Arg::new("stats")
                            .long("stats")
                            .help("Show detailed compilation statistics")
                            .action(ArgAction::SetTrue)
                    )
                    .arg(
                        Arg::new("watch")
                            .short('w')
                            .long("watch")
                            .help("Watch for file changes and recompile")
                            .action(ArgAction::SetTrue)
                    )
            )
            .subcommand(
                Command::new("check")
                    .about("Check style configs without writing output")
                    .arg(
                        Arg::new("input")
                            .help("Input style config or directory")
                            .required(true)
                            .index(1)
                    )
                    .arg(
                        Arg::new("recursive")
                            .short('r')
                            .long("recursive")
                            .help("Check all style configs in directory recursively")
                            .action(ArgAction::SetTrue)
                    )
            )
    }

    fn setup_logging(&self, verbose_count: u8) -> Result<()> {
        let log_level = match verbose_count {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(log_level)
            .format_timestamp_secs()
            .init();

        Ok(())
    }

    fn load_config_file(&mut self, config_path: &str) -> Result<()> {
        let config_content = fs::read_to_string(config_path)
            .map_err(|e| ThemeError::FileNotFound {
                path: format!("Config file {}: {}", config_path, e),
            })?;

        self.config = if config_path.ends_with(".json") {
            serde_json::from_str(&config_content)
                .map_err(|e| ThemeError::InvalidFormat {
                    message: format!("Invalid JSON config: {}", e),
                })?
        } else if config_path.ends_with(".toml") {
            toml::from_str(&config_content)
                .map_err(|e| ThemeError::InvalidFormat {
                    message: format!("Invalid TOML config: {}", e),
                })?
        } else {
            return Err(ThemeError::InvalidFormat {
                message: "Config file must be .json or .toml format".to_string(),
            });
        };

        log::info!("Loaded configuration from {}", config_path);
        Ok(())
    }

    fn handle_compile_command(&self, matches: &clap::ArgMatches) -> Result<()> {
        let input_path = matches.get_one::<String>("input").unwrap();
        let output_path = self.resolve_output_path(matches, input_path);

        let options = self.build_compile_options(matches)?;

        if matches.get_flag("watch") {
            self.watch_and_compile(input_path, &output_path, options)
        } else {
            self.compile_single_file(input_path, &output_path, options, matches)
        }
    }

    // Output defaults to <input>.theme.json, under the configured output
    // directory when one is set.
    fn resolve_output_path(&self, matches: &clap::ArgMatches, input_path: &str) -> String {
        if let Some(output) = matches.get_one::<String>("output") {
            return output.clone();
        }

        let default = Path::new(input_path).with_extension("theme.json");
        match (&self.config.output_directory, default.file_name()) {
            (Some(dir), Some(name)) => PathBuf::from(dir).join(name).to_string_lossy().into_owned(),
            _ => default.to_string_lossy().into_owned(),
        }
    }

    fn compile_single_file(
        &self,
        input_path: &str,
        output_path: &str,
        options: CompileOptions,
        matches: &clap::ArgMatches,
    ) -> Result<()> {
        println!("🔨 Compiling {} -> {}", input_path, output_path);

        let stats = compile_file_with_options(input_path, output_path, options)?;

        // Success message
        println!("✅ Compilation successful!");
        println!("   Output: {} bytes", stats.output_size);
        println!("   Time: {}ms", stats.compile_time_ms);
        println!(
            "   Variables: {} across {} containers",
            stats.variable_count, stats.container_count
        );

        // Show detailed statistics if requested
        if matches.get_flag("stats") {
            self.print_detailed_stats(&stats)?;
        }

        Ok(())
    }

    fn build_compile_options(&self, matches: &clap::ArgMatches) -> Result<CompileOptions> {
        let mut options = CompileOptions::default();

        // Debug mode
        options.debug_mode = matches.get_flag("debug");

        // Output shape
        options.pretty = !matches.get_flag("compact") && self.config.pretty.unwrap_or(true);

        // Container override: flag beats config file
        if let Some(list) = matches.get_one::<String>("containers") {
            let containers: Vec<String> = list
                .split(',')
                .map(|container| container.trim().to_string())
                .filter(|container| !container.is_empty())
                .collect();

            if containers.is_empty() {
                return Err(ThemeError::InvalidFormat {
                    message: format!(
                        "Invalid container list: '{}'. Use comma-separated names.",
                        list
                    ),
                });
            }
            options.containers = Some(containers);
        } else if let Some(config_containers) = &self.config.containers {
            options.containers = Some(config_containers.clone());
        }

        Ok(options)
    }

    fn watch_and_compile(
        &self,
        input_path: &str,
        output_path: &str,
        options: CompileOptions,
    ) -> Result<()> {
        println!("👀 Watching {} for changes...", input_path);

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                match res {
                    Ok(event) => {
                        if let Err(e) = tx.send(event) {
                            eprintln!("Watch error: {}", e);
                        }
                    }
                    Err(e) => eprintln!("Watch error: {}", e),
                }
            },
            notify::Config::default()
        ).map_err(|e| ThemeError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to create file watcher: {}", e)
        )))?;

        watcher.watch(Path::new(input_path), RecursiveMode::NonRecursive)
            .map_err(|e| ThemeError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to watch file: {}", e)
            )))?;

        // Initial compilation
        if let Err(e) = compile_file_with_options(input_path, output_path, options.clone()) {
            eprintln!("❌ Initial compilation failed: {}", e);
        } else {
            println!("✅ Initial compilation successful");
        }

        loop {
            match rx.recv() {
                Ok(_event) => {
                    println!("🔄 File changed, recompiling...");

                    match compile_file_with_options(input_path, output_path, options.clone()) {
                        Ok(stats) => {
                            println!(
                                "✅ Recompiled successfully ({} bytes, {}ms)",
                                stats.output_size, stats.compile_time_ms
                            );
                        }
                        Err(e) => {
                            eprintln!("❌ Compilation failed: {}", e);
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Watch error: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    fn handle_check_command(&self, matches: &clap::ArgMatches) -> Result<()> {
        let input_path = matches.get_one::<String>("input").unwrap();
        let recursive = matches.get_flag("recursive");

        if recursive && Path::new(input_path).is_dir() {
            self.check_directory_recursive(input_path)
        } else {
            self.check_single_file(input_path)
        }
    }

    fn check_single_file(&self, input_path: &str) -> Result<()> {
        println!("🔍 Checking {}", input_path);

        let result = fs::read_to_string(input_path)
            .map_err(|e| ThemeError::FileNotFound {
                path: format!("{}: {}", input_path, e),
            })
            .and_then(|source| parse_config(&source, input_path))
            .and_then(|config| build_theme(&config));

        match result {
            Ok(output) => {
                println!(
                    "✅ {} - No issues found ({} selectors, {} variables)",
                    input_path,
                    output.tokens.len(),
                    output.vars.values().map(|bucket| bucket.len()).sum::<usize>()
                );
                Ok(())
            }
            Err(e) => {
                println!("❌ {} - {}", input_path, e);
                Err(e)
            }
        }
    }

    fn check_directory_recursive(&self, dir_path: &str) -> Result<()> {
        let mut total_files = 0;
        let mut error_files = 0;

        for entry in walkdir::WalkDir::new(dir_path) {
            let entry = entry.map_err(|e| ThemeError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Directory traversal error: {}", e)
            )))?;

            if entry.file_type().is_file() {
                if let Some(ext) = entry.path().extension() {
                    if ext == "json" || ext == "toml" {
                        total_files += 1;

                        if self.check_single_file(&entry.path().to_string_lossy()).is_err() {
                            error_files += 1;
                        }
                    }
                }
            }
        }

        if total_files == 0 {
            println!("No style configs found in {}", dir_path);
            return Ok(());
        }

        println!("\n📊 Check Summary:");
        println!("   Total files: {}", total_files);
        println!("   Files with errors: {}", error_files);
        println!("   Success rate: {:.1}%",
                (total_files - error_files) as f64 / total_files as f64 * 100.0);

        if error_files > 0 {
            Err(ThemeError::InvalidFormat {
                message: format!("{} files have errors", error_files),
            })
        } else {
            Ok(())
        }
    }

    fn print_detailed_stats(&self, stats: &crate::ThemeStats) -> Result<()> {
        println!("\n📊 Detailed Compilation Statistics:");
        println!("   Source size: {} bytes", stats.source_size);
        println!("   Output size: {} bytes", stats.output_size);
        println!("   Compile time: {}ms", stats.compile_time_ms);

        println!("\n   Theme breakdown:");
        println!("     Selectors: {}", stats.selector_count);
        println!("     Properties: {}", stats.property_count);
        println!("     Variables: {}", stats.variable_count);
        println!("     Containers: {}", stats.container_count);

        Ok(())
    }
}
