use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Line-number gutter display mode.
///
/// This is the persisted display setting the jump prompt temporarily
/// overrides: while the prompt is open the gutter is forced to
/// [`LineNumbers::Relative`] and the prior mode is restored when the
/// prompt closes.
#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineNumbers {
    #[default]
    Absolute,
    Relative,
    Off,
}

impl LineNumbers {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Relative => "relative",
            Self::Off => "off",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub watch: bool,
    pub line_numbers: Option<LineNumbers>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            watch: self.watch || other.watch,
            line_numbers: other.line_numbers.or(self.line_numbers),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("lineleap").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("lineleap")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("lineleap").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("lineleap")
                .join("config");
        }
    }

    PathBuf::from(".lineleaprc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".lineleaprc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# lineleap defaults (saved with --save)".to_string());
    if flags.watch {
        lines.push("--watch".to_string());
    }
    if let Some(mode) = flags.line_numbers {
        lines.push(format!("--line-numbers {}", mode.as_str()));
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--watch" {
            flags.watch = true;
        } else if token == "--line-numbers" {
            if let Some(next) = tokens.get(i + 1) {
                flags.line_numbers = parse_line_numbers(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--line-numbers=") {
            flags.line_numbers = parse_line_numbers(value);
        } else if token == "--log-file" {
            if let Some(next) = tokens.get(i + 1) {
                flags.log_file = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--log-file=") {
            flags.log_file = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}

fn parse_line_numbers(s: &str) -> Option<LineNumbers> {
    match s {
        "absolute" => Some(LineNumbers::Absolute),
        "relative" => Some(LineNumbers::Relative),
        "off" => Some(LineNumbers::Off),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "lineleap".to_string(),
            "--watch".to_string(),
            "--line-numbers".to_string(),
            "relative".to_string(),
            "--log-file=leap.log".to_string(),
            "notes.txt".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert!(flags.watch);
        assert_eq!(flags.line_numbers, Some(LineNumbers::Relative));
        assert_eq!(flags.log_file, Some(PathBuf::from("leap.log")));
    }

    #[test]
    fn test_parse_flag_tokens_ignores_unknown_mode() {
        let args = vec!["--line-numbers".to_string(), "bogus".to_string()];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.line_numbers, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            watch: true,
            line_numbers: Some(LineNumbers::Off),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            line_numbers: Some(LineNumbers::Relative),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.watch);
        assert_eq!(merged.line_numbers, Some(LineNumbers::Relative));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".lineleaprc");
        let flags = ConfigFlags {
            watch: true,
            line_numbers: Some(LineNumbers::Relative),
            log_file: Some(PathBuf::from("leap.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert!(loaded.watch);
        assert_eq!(loaded.line_numbers, Some(LineNumbers::Relative));
        assert_eq!(loaded.log_file, Some(PathBuf::from("leap.log")));

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }

    #[test]
    fn test_load_skips_comments_and_blank_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".lineleaprc");
        fs::write(&path, "# comment\n\n--watch\n--line-numbers off\n").unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert!(loaded.watch);
        assert_eq!(loaded.line_numbers, Some(LineNumbers::Off));
    }
}
