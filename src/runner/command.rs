//! Command execution
//!
//! This module spawns the resolved invocation as a single child process.

use crate::error::{ExecutionError, ExecutionResult};
use crate::runner::{render, Context, Invocation};
use std::process::{Command as StdCommand, Stdio};

/// Execute an invocation in the given context, blocking until the child exits
pub fn execute_command(invocation: &Invocation, ctx: &Context) -> ExecutionResult<()> {
    let template = render(invocation);

    if ctx.dry_run {
        println!("{}", template);
        return Ok(());
    }

    ctx.print_run(&template);

    let mut command = StdCommand::new(&invocation.program);
    command.args(&invocation.args);
    command.envs(&invocation.env);
    command.current_dir(&ctx.working_dir);

    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    let status = match command.status() {
        Ok(status) => status,
        Err(source) => {
            let err = ExecutionError::SpawnFailed {
                program: invocation.program.clone(),
                source,
            };
            ctx.print_error(&err.to_string());
            return Err(err);
        }
    };

    ctx.print_debug(&format!("{} exited with {}", invocation.program, status));

    if !status.success() {
        let err = ExecutionError::CommandFailed(status.code());
        ctx.print_error(&err.to_string());
        return Err(err);
    }

    Ok(())
}
