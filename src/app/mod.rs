//! Application core - state, actions, and the event loop

mod actions;
mod event_loop;
pub mod render_thread;
pub mod state;

use anyhow::Result;

use render_thread::RenderThread;

use crate::ai::{AiActorHandle, AiCommand, GeminiClient, spawn_ai_actor};
use crate::config::Config;
use crate::credentials::ENV_API_KEY;
use crate::input::KeyBindings;
use state::AppState;

pub struct App {
    pub(crate) config: Config,
    pub(crate) state: AppState,
    pub(crate) bindings: KeyBindings,
    /// AI actor handle. None only when the credential is missing and the
    /// configuration-error screen is shown instead of the forms.
    pub(crate) ai_actor: Option<AiActorHandle>,
    /// Dirty flag: when true, UI needs re-render. Skips renders when nothing
    /// changed.
    pub(crate) dirty: bool,
}

impl App {
    pub fn new(config: Config, api_key: Option<String>) -> Result<Self> {
        let mut state = AppState::default();

        let ai_actor = match api_key {
            Some(key) => {
                let client = GeminiClient::new(key, config.ai.model.clone());
                Some(spawn_ai_actor(client))
            }
            None => {
                tracing::error!("{} is not set or empty", ENV_API_KEY);
                state.config_error = Some(format!(
                    "The Gemini API key ({}) is missing or not configured in your environment.",
                    ENV_API_KEY
                ));
                None
            }
        };

        Ok(Self {
            config,
            state,
            bindings: KeyBindings::new(),
            ai_actor,
            dirty: true, // Start dirty for initial render
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        tracing::info!("starting quill with model {}", self.config.ai.model);

        // Spawn background render thread (owns terminal setup/teardown)
        let render_thread = RenderThread::spawn()?;

        let result = self.event_loop(&render_thread).await;

        // Stop the AI actor before tearing down the terminal
        if let Some(ref ai) = self.ai_actor {
            ai.cmd_tx.send(AiCommand::Shutdown).await.ok();
        }

        render_thread.shutdown();

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_blocks_ui_behind_config_error() {
        let app = App::new(Config::default(), None).unwrap();

        assert!(app.ai_actor.is_none());
        let message = app.state.config_error.as_deref().unwrap();
        assert!(message.contains(ENV_API_KEY));
    }
}
