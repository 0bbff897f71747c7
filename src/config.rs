use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".translintrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

/// Attribute name patterns whose values are machine-readable rather than
/// user-facing copy. Used by the permissive preset.
pub const NON_TRANSLATABLE_ATTRIBUTES: &[&str] = &[
    "^className$",
    "^class$",
    "^src$",
    "^href$",
    "^id$",
    "^key$",
    "^style$",
    "^type$",
    "^rel$",
    "^target$",
    "^role$",
    "^data-",
];

/// Matches strings with no alphabetic content: numbers, punctuation-only
/// strings, CSS-like tokens. Used by the permissive preset.
pub const NON_LINGUISTIC_PATTERN: &str = r"^[\p{N}\p{P}\p{S}\s]*$";

/// Unknown keys are rejected so a typo in a pattern list fails loudly
/// instead of silently checking nothing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Regex patterns matched against JSX attribute names. String values of
    /// matching attributes are not reported.
    #[serde(default)]
    pub ignore_attributes: Vec<String>,
    /// Regex patterns matched against literal content. Matching strings are
    /// not reported. Matching is unanchored and Unicode-aware.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Glob patterns or literal paths excluded from scanning.
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// Directories to scan, relative to the check root. Empty means the
    /// check root itself.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
}

fn default_includes() -> Vec<String> {
    ["src", "app", "components"].map(String::from).to_vec()
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_attributes: Vec::new(),
            ignore: Vec::new(),
            ignores: default_ignores(),
            includes: default_includes(),
            ignore_test_files: default_ignore_test_files(),
        }
    }
}

/// Rule options with patterns compiled, ready for per-file checking.
#[derive(Debug, Default)]
pub struct CompiledOptions {
    pub ignore_attributes: Vec<Regex>,
    pub ignore: Vec<Regex>,
}

impl Config {
    /// Extend the configured pattern lists with the built-in permissive
    /// defaults: non-translatable attribute names and non-linguistic
    /// content.
    pub fn with_permissive_defaults(mut self) -> Self {
        self.ignore_attributes
            .extend(NON_TRANSLATABLE_ATTRIBUTES.iter().map(|s| s.to_string()));
        self.ignore.push(NON_LINGUISTIC_PATTERN.to_string());
        self
    }

    /// Compile the regex pattern lists. Fails on the first invalid pattern,
    /// naming the field it came from.
    pub fn compiled(&self) -> Result<CompiledOptions> {
        Ok(CompiledOptions {
            ignore_attributes: compile_patterns(&self.ignore_attributes, "ignoreAttributes")?,
            ignore: compile_patterns(&self.ignore, "ignore")?,
        })
    }

    /// Validate configuration values.
    ///
    /// Regex patterns must compile and glob patterns in `ignores` must
    /// parse. Runs at load time so a bad configuration is a hard error, not
    /// a per-file diagnostic.
    pub fn validate(&self) -> Result<()> {
        self.compiled()?;

        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

fn compile_patterns(patterns: &[String], field: &str) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| {
            Regex::new(p).with_context(|| format!("Invalid regex in '{}': \"{}\"", field, p))
        })
        .collect()
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
