//! Placeholder interpolation for profile arguments
//!
//! Replaces `${name}` placeholders with values from a variable map. Substitution is
//! single-pass: a substituted value is never scanned again.

use crate::error::{InterpolationError, InterpolationResult};
use regex::{Captures, Regex};
use std::collections::BTreeMap;

const PLACEHOLDER: &str = r"\$\{([^}]*)\}";

/// Interpolate variables in a string, erroring on undefined or malformed placeholders
pub fn interpolate(s: &str, vars: &BTreeMap<String, String>) -> InterpolationResult<String> {
    let re = Regex::new(PLACEHOLDER)
        .map_err(|e| InterpolationError::InvalidSyntax(e.to_string()))?;

    // Anything left looking like a placeholder once full matches are gone is unterminated
    if re.replace_all(s, "").contains("${") {
        return Err(InterpolationError::InvalidSyntax(s.to_string()));
    }

    let mut missing = None;
    let result = re.replace_all(s, |caps: &Captures| {
        let name = &caps[1];
        match vars.get(name) {
            Some(value) => value.clone(),
            None => {
                missing.get_or_insert_with(|| name.to_string());
                String::new()
            }
        }
    });

    match missing {
        Some(name) if name.is_empty() => Err(InterpolationError::InvalidSyntax(s.to_string())),
        Some(name) => Err(InterpolationError::UndefinedVariable(name)),
        None => Ok(result.into_owned()),
    }
}

/// Interpolate a list of strings
pub fn interpolate_list(
    list: &[String],
    vars: &BTreeMap<String, String>,
) -> InterpolationResult<Vec<String>> {
    list.iter()
        .map(|s| interpolate(s, vars))
        .collect::<InterpolationResult<Vec<String>>>()
}

/// Names of all placeholders used in a list of strings
pub fn placeholders(list: &[String]) -> Vec<String> {
    let Ok(re) = Regex::new(PLACEHOLDER) else {
        return Vec::new();
    };
    let mut names: Vec<String> = list
        .iter()
        .flat_map(|s| re.captures_iter(s).map(|caps| caps[1].to_string()))
        .collect();
    names.sort();
    names.dedup();
    names
}
