//! Side effects returned by the reducer, executed by EffectRunner.

use crate::command_panel_state::CommandTarget;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Render,

    /// Result comes back as `CommandCopied` or `CommandCopyFailed`.
    CopyToClipboard {
        target: CommandTarget,
        content: String,
        generation: u64,
    },
}
