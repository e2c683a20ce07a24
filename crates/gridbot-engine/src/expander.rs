//! Repeat expansion.
//!
//! Rewrites `REPEAT_2` / `REPEAT_3` into extra copies of the nearest
//! preceding primitive command in the *expanded* output, so a repeat can
//! target a copy produced by an earlier repeat.

use gridbot_types::Command;

/// Expand every meta-command in `program`.
///
/// Single left-to-right pass. A repeat with nothing before it is dropped.
/// The result never contains a meta-command.
pub fn expand(program: &[Command]) -> Vec<Command> {
    let mut expanded: Vec<Command> = Vec::with_capacity(program.len());

    for &command in program {
        match command.repeat_count() {
            None => expanded.push(command),
            Some(count) => {
                // The target already ran once, so add `count - 1` copies.
                if let Some(&target) = expanded.last() {
                    expanded.extend(std::iter::repeat(target).take(count - 1));
                }
            }
        }
    }

    expanded
}
