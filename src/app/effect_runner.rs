//! Executes side effects returned by the reducer.
//!
//! Results of effects that touch the outside world are fed back into the
//! reducer as actions through `action_tx`.

use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::action::Action;
use crate::command_panel_state::CommandTarget;
use crate::effect::Effect;
use crate::ports::{ClipboardWriter, Renderer};
use crate::state::AppState;

pub struct EffectRunner {
    clipboard: Arc<dyn ClipboardWriter>,
    action_tx: mpsc::Sender<Action>,
}

impl EffectRunner {
    pub fn new(clipboard: Arc<dyn ClipboardWriter>, action_tx: mpsc::Sender<Action>) -> Self {
        Self {
            clipboard,
            action_tx,
        }
    }

    pub async fn run<R: Renderer>(
        &self,
        effects: Vec<Effect>,
        renderer: &mut R,
        state: &AppState,
    ) -> Result<()> {
        for effect in effects {
            self.run_single(effect, renderer, state).await?;
        }
        Ok(())
    }

    async fn run_single<R: Renderer>(
        &self,
        effect: Effect,
        renderer: &mut R,
        state: &AppState,
    ) -> Result<()> {
        match effect {
            Effect::Render => renderer.draw(state),
            Effect::CopyToClipboard {
                target,
                content,
                generation,
            } => {
                self.copy(target, &content, generation).await;
                Ok(())
            }
        }
    }

    async fn copy(&self, target: CommandTarget, content: &str, generation: u64) {
        let action = match self.clipboard.write(content).await {
            Ok(()) => {
                tracing::debug!(target = target.title(), bytes = content.len(), "copied command");
                Action::CommandCopied { target, generation }
            }
            Err(e) => {
                tracing::warn!(target = target.title(), error = %e, "clipboard write failed");
                Action::CommandCopyFailed {
                    target,
                    reason: e.to_string(),
                }
            }
        };
        // Receiver is gone only while shutting down
        let _ = self.action_tx.send(action).await;
    }
}
