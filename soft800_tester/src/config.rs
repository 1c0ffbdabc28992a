/*
 * Machine files
 * A YAML description of what to load in memory and how to run it. A machine
 * file may include other machine files (`configs`), they are loaded first and
 * the including file's values take precedence. `${VAR}` references are
 * replaced by environment variables before parsing.
 */
use crate::utils::parse_address;
use crate::AppResult;
use anyhow::{anyhow, Context};
use regex::Regex;
use serde::Deserialize;
use soft800_lib::Address;
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

/// A file loaded in memory: raw bytes at `address`, or an Atari binary when
/// no address is given.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SegmentConfig {
    pub file: PathBuf,
    pub address: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    pub frames: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DumpConfig {
    pub address: String,
    pub length: usize,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MachineConfig {
    pub name: Option<String>,
    pub segments: Option<Vec<SegmentConfig>>,
    pub start: Option<String>,
    pub breakpoints: Option<Vec<String>>,
    pub max_steps: Option<usize>,
    pub display: Option<DisplayConfig>,
    pub dumps: Option<Vec<DumpConfig>>,
    pub configs: Option<Vec<PathBuf>>,
}

fn concat<T>(ours: Option<Vec<T>>, theirs: Option<Vec<T>>) -> Option<Vec<T>> {
    match (ours, theirs) {
        (Some(mut ours), Some(theirs)) => {
            ours.extend(theirs);
            Some(ours)
        }
        (Some(items), None) | (None, Some(items)) => Some(items),
        (None, None) => None,
    }
}

impl MachineConfig {
    pub fn load(path: &Path) -> AppResult<MachineConfig> {
        let mut seen = HashSet::new();
        let load_order = Self::load_order(path, &mut seen)?;
        let mut machine = MachineConfig::default();

        for config_path in load_order {
            let mut config = Self::load_single(&config_path)?;
            let config_dir = config_path.parent().unwrap_or_else(|| Path::new(""));
            config.resolve_paths(config_dir);
            machine = machine.merge(config);
        }

        Ok(machine)
    }

    /// Included files first, depth first.
    fn load_order(path: &Path, seen: &mut HashSet<PathBuf>) -> AppResult<Vec<PathBuf>> {
        let canonical = path
            .canonicalize()
            .with_context(|| format!("machine file not found: {}", path.display()))?;
        if !seen.insert(canonical) {
            return Err(anyhow!(
                "circular include detected while loading machine file: {}",
                path.display()
            ));
        }

        let config = Self::load_single(path)?;
        let config_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let mut load_order = Vec::new();

        for include in config.configs.iter().flatten() {
            let full_path = config_dir.join(include);
            if !full_path.exists() {
                return Err(anyhow!(
                    "machine file not found: {}, included paths are relative to {}",
                    include.display(),
                    config_dir.display()
                ));
            }
            load_order.append(&mut Self::load_order(&full_path, seen)?);
        }
        load_order.push(path.to_path_buf());

        Ok(load_order)
    }

    fn load_single(path: &Path) -> AppResult<MachineConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("could not read machine file {}", path.display()))?;
        let contents = replace_env_vars(&contents)?;

        serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML from {}", path.display()))
    }

    fn resolve_paths(&mut self, base_dir: &Path) {
        for segment in self.segments.iter_mut().flatten() {
            segment.file = base_dir.join(&segment.file);
        }
    }

    /// `other` takes precedence, lists are concatenated.
    fn merge(self, other: MachineConfig) -> MachineConfig {
        MachineConfig {
            name: other.name.or(self.name),
            segments: concat(self.segments, other.segments),
            start: other.start.or(self.start),
            breakpoints: concat(self.breakpoints, other.breakpoints),
            max_steps: other.max_steps.or(self.max_steps),
            display: other.display.or(self.display),
            dumps: concat(self.dumps, other.dumps),
            configs: None,
        }
    }

    pub fn start_address(&self) -> AppResult<Option<Address>> {
        self.start.as_deref().map(parse_address).transpose()
    }

    pub fn breakpoint_addresses(&self) -> AppResult<Vec<Address>> {
        self.breakpoints
            .iter()
            .flatten()
            .map(|text| parse_address(text))
            .collect()
    }
}

fn replace_env_vars(content: &str) -> AppResult<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").context("failed to compile regex pattern")?;
    let mut modified_content = content.to_string();

    for capture in re.captures_iter(content) {
        let (full_match, [var_name]) = capture.extract();
        let value = env::var(var_name)
            .with_context(|| format!("environment variable '{}' not found", var_name))?;
        modified_content = modified_content.replace(full_match, &value);
    }

    Ok(modified_content)
}
