//! Repository configuration (`.git/config`)
//!
//! ## File Format
//!
//! ```text
//! [core]
//! 	repositoryformatversion = 0
//! 	filemode = false
//! 	bare = false
//! ```
//!
//! Sections and keys keep their file order. Comments (`#`, `;`) and blank
//! lines are skipped when parsing and not written back. A comment may also
//! trail a value unless it sits inside double quotes.

use crate::errors::{Error, Result};
use std::path::Path;

/// Regex pattern for a `[section]` or `[section "subsection"]` line
const SECTION_REGEX: &str = r#"^\[\s*([A-Za-z0-9.-]+)(?:\s+"([^"]*)")?\s*\]\s*(?:[#;].*)?$"#;

/// Regex pattern for a `key = value` line (a bare `key` means `true`)
const ENTRY_REGEX: &str = r"^([A-Za-z][A-Za-z0-9-]*)\s*(?:=(.*)|[#;].*)?$";

pub const CORE_SECTION: &str = "core";

/// The only repository format version this implementation reads
pub const SUPPORTED_FORMAT_VERSION: i64 = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    sections: Vec<Section>,
}

impl Config {
    /// The configuration written by `init`
    pub fn default_repository() -> Self {
        let mut config = Config::default();
        config.set(
            CORE_SECTION,
            "repositoryformatversion",
            SUPPORTED_FORMAT_VERSION.to_string(),
        );
        config.set(CORE_SECTION, "filemode", "false");
        config.set(CORE_SECTION, "bare", "false");
        config
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        content.parse()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_string()).map_err(|e| Error::io(path, e))
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .filter(|s| s.name == section)
            .flat_map(|s| s.entries.iter())
            .filter(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
            .last()
    }

    pub fn get_int(&self, section: &str, key: &str) -> Result<Option<i64>> {
        self.get(section, key)
            .map(|value| {
                value.parse::<i64>().map_err(|_| {
                    Error::Config(format!("{section}.{key} is not an integer: '{value}'"))
                })
            })
            .transpose()
    }

    pub fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>> {
        self.get(section, key)
            .map(|value| match value.to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(true),
                "false" | "no" | "off" | "0" | "" => Ok(false),
                _ => Err(Error::Config(format!(
                    "{section}.{key} is not a boolean: '{value}'"
                ))),
            })
            .transpose()
    }

    /// Set `key` in `section`, replacing an existing value or appending one
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        let value = value.into();

        let index = match self.sections.iter().position(|s| s.name == section) {
            Some(index) => index,
            None => {
                self.sections.push(Section {
                    name: section.to_string(),
                    entries: Vec::new(),
                });
                self.sections.len() - 1
            }
        };

        let entries = &mut self.sections[index].entries;
        match entries.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
            Some(entry) => entry.1 = value,
            None => entries.push((key.to_string(), value)),
        }
    }

    /// `core.repositoryformatversion`, required for a usable repository
    pub fn format_version(&self) -> Result<i64> {
        self.get_int(CORE_SECTION, "repositoryformatversion")?
            .ok_or_else(|| Error::Config("core.repositoryformatversion is missing".to_string()))
    }

    pub fn file_mode(&self) -> Result<bool> {
        Ok(self.get_bool(CORE_SECTION, "filemode")?.unwrap_or(false))
    }

    pub fn bare(&self) -> Result<bool> {
        Ok(self.get_bool(CORE_SECTION, "bare")?.unwrap_or(false))
    }
}

impl std::str::FromStr for Config {
    type Err = Error;

    fn from_str(content: &str) -> Result<Self> {
        let section_regex = regex::Regex::new(SECTION_REGEX)
            .map_err(|e| Error::Config(format!("invalid section regex: {e}")))?;
        let entry_regex = regex::Regex::new(ENTRY_REGEX)
            .map_err(|e| Error::Config(format!("invalid entry regex: {e}")))?;

        let mut config = Config::default();
        let mut current: Option<String> = None;

        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(caps) = section_regex.captures(line) {
                let name = match caps.get(2) {
                    Some(subsection) => format!("{} \"{}\"", &caps[1], subsection.as_str()),
                    None => caps[1].to_ascii_lowercase(),
                };
                current = Some(name);
                continue;
            }

            let caps = entry_regex
                .captures(line)
                .ok_or_else(|| Error::Config(format!("line {}: cannot parse '{line}'", number + 1)))?;
            let section = current.as_deref().ok_or_else(|| {
                Error::Config(format!("line {}: entry outside of a section", number + 1))
            })?;
            let value = match caps.get(2) {
                Some(raw) => parse_value(raw.as_str())
                    .map_err(|reason| Error::Config(format!("line {}: {reason}", number + 1)))?,
                None => "true".to_string(),
            };

            config.set(section, &caps[1], value);
        }

        Ok(config)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for section in &self.sections {
            writeln!(f, "[{}]", section.name)?;
            for (key, value) in &section.entries {
                writeln!(f, "\t{key} = {}", quote_value(value))?;
            }
        }

        Ok(())
    }
}

/// Decode the right-hand side of `key = value`
///
/// Outside double quotes a `#` or `;` starts a comment and surrounding
/// whitespace is dropped. Inside them everything is kept. Escapes (`\"`,
/// `\\`, `\n`, `\t`, `\b`) work in both.
fn parse_value(raw: &str) -> std::result::Result<String, String> {
    let mut value = String::new();
    // length of `value` up to the last quoted or non-space character
    let mut kept = 0;
    let mut quoted = false;
    let mut chars = raw.trim_start().chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                quoted = !quoted;
                kept = value.len();
            }
            '\\' => {
                let escaped = match chars.next() {
                    Some('"') => '"',
                    Some('\\') => '\\',
                    Some('n') => '\n',
                    Some('t') => '\t',
                    Some('b') => '\u{8}',
                    Some(other) => return Err(format!("invalid escape '\\{other}'")),
                    None => return Err("line continuation is not supported".to_string()),
                };
                value.push(escaped);
                kept = value.len();
            }
            '#' | ';' if !quoted => break,
            c => {
                value.push(c);
                if quoted || !c.is_whitespace() {
                    kept = value.len();
                }
            }
        }
    }

    if quoted {
        return Err("unterminated quoted value".to_string());
    }
    value.truncate(kept);

    Ok(value)
}

/// Quote `value` when writing it bare would not read back the same
fn quote_value(value: &str) -> std::borrow::Cow<'_, str> {
    let needs_quotes = value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace)
        || value.contains(['#', ';', '"', '\\', '\n', '\t', '\u{8}']);
    if !needs_quotes {
        return value.into();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\u{8}' => quoted.push_str("\\b"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');

    quoted.into()
}
