//! Resolved child process invocations

use crate::config::Profile;
use crate::error::InterpolationResult;
use crate::runner::interpolate_list;
use std::collections::BTreeMap;

/// A profile with every placeholder substituted, ready to spawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Executable to launch
    pub program: String,

    /// Final argument list
    pub args: Vec<String>,

    /// Environment set on the child only
    pub env: BTreeMap<String, String>,
}

impl Invocation {
    /// Resolve a profile against placeholder values, appending `extra_args` verbatim
    pub fn resolve(
        profile: &Profile,
        vars: &BTreeMap<String, String>,
        extra_args: &[String],
    ) -> InterpolationResult<Self> {
        let mut args = interpolate_list(&profile.args, vars)?;
        args.extend(extra_args.iter().cloned());

        Ok(Invocation {
            program: profile.program.clone(),
            args,
            env: profile.env.clone(),
        })
    }

    /// Token form: `env K=V ... program args...`, with the `env` prefix only when needed
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.args.len() + self.env.len() + 2);
        if !self.env.is_empty() {
            tokens.push("env".to_string());
            tokens.extend(self.env.iter().map(|(k, v)| format!("{}={}", k, v)));
        }
        tokens.push(self.program.clone());
        tokens.extend(self.args.iter().cloned());
        tokens
    }
}
