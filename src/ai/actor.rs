//! AI actor for async processing of generation requests

use tokio::sync::mpsc;

use super::{Generate, GenerationResult};
use crate::task::TaskKind;

/// Commands that can be sent to the AI actor
#[derive(Debug)]
pub enum AiCommand {
    /// Run one generation on behalf of `task`'s form
    Generate { task: TaskKind, prompt: String },
    /// Shutdown the actor
    Shutdown,
}

/// Events emitted by the AI actor
#[derive(Debug, Clone)]
pub enum AiEvent {
    /// Generation finished; the result belongs to `task`'s form
    Completed {
        task: TaskKind,
        result: GenerationResult,
    },
    /// Generation failed with a displayable message
    Failed { task: TaskKind, message: String },
}

/// Handle for communicating with the AI actor
pub struct AiActorHandle {
    pub cmd_tx: mpsc::Sender<AiCommand>,
    pub event_rx: mpsc::Receiver<AiEvent>,
}

/// Spawn the AI actor task
pub fn spawn_ai_actor<G>(client: G) -> AiActorHandle
where
    G: Generate + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel(16);
    let (event_tx, event_rx) = mpsc::channel(32);

    tokio::spawn(ai_actor_loop(client, cmd_rx, event_tx));

    AiActorHandle { cmd_tx, event_rx }
}

async fn ai_actor_loop<G>(
    client: G,
    mut cmd_rx: mpsc::Receiver<AiCommand>,
    event_tx: mpsc::Sender<AiEvent>,
) where
    G: Generate,
{
    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            AiCommand::Generate { task, prompt } => {
                // Exactly one attempt per command; a failure is terminal
                // for the submission.
                let event = match client.generate(&prompt).await {
                    Ok(result) => AiEvent::Completed { task, result },
                    Err(e) => AiEvent::Failed {
                        task,
                        message: e.to_string(),
                    },
                };
                if event_tx.send(event).await.is_err() {
                    tracing::warn!("AI actor: event receiver dropped");
                    break;
                }
            }

            AiCommand::Shutdown => {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::ai::{GenerationError, GroundingSource};

    /// A scripted generator for tests. Returns pre-defined outcomes in order.
    struct MockGenerator {
        outcomes: Vec<Result<GenerationResult, GenerationError>>,
        index: AtomicUsize,
    }

    impl MockGenerator {
        fn new(outcomes: Vec<Result<GenerationResult, GenerationError>>) -> Self {
            Self {
                outcomes,
                index: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Generate for MockGenerator {
        async fn generate(&self, _prompt: &str) -> Result<GenerationResult, GenerationError> {
            let i = self.index.fetch_add(1, Ordering::SeqCst);
            self.outcomes
                .get(i)
                .cloned()
                .unwrap_or(Err(GenerationError::Unrecognized))
        }
    }

    #[tokio::test]
    async fn completed_event_carries_task_and_result() {
        let result = GenerationResult {
            text: "Sure, does 3pm work?".to_string(),
            sources: vec![],
        };
        let mut handle = spawn_ai_actor(MockGenerator::new(vec![Ok(result.clone())]));

        handle
            .cmd_tx
            .send(AiCommand::Generate {
                task: TaskKind::ReplyEmail,
                prompt: "draft a reply".to_string(),
            })
            .await
            .unwrap();

        match handle.event_rx.recv().await.unwrap() {
            AiEvent::Completed { task, result: got } => {
                assert_eq!(task, TaskKind::ReplyEmail);
                assert_eq!(got, result);
            }
            other => panic!("expected Completed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn failure_maps_to_displayable_message() {
        let mut handle =
            spawn_ai_actor(MockGenerator::new(vec![Err(GenerationError::InvalidCredential)]));

        handle
            .cmd_tx
            .send(AiCommand::Generate {
                task: TaskKind::MeetingNotes,
                prompt: "notes".to_string(),
            })
            .await
            .unwrap();

        match handle.event_rx.recv().await.unwrap() {
            AiEvent::Failed { task, message } => {
                assert_eq!(task, TaskKind::MeetingNotes);
                assert_eq!(message, GenerationError::InvalidCredential.to_string());
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn events_preserve_command_order() {
        let sourced = GenerationResult {
            text: "grounded".to_string(),
            sources: vec![GroundingSource {
                uri: "https://a.example".to_string(),
                title: "A".to_string(),
            }],
        };
        let mut handle = spawn_ai_actor(MockGenerator::new(vec![
            Ok(GenerationResult::default()),
            Ok(sourced),
        ]));

        for task in [TaskKind::ReplyEmail, TaskKind::CancelSubscription] {
            handle
                .cmd_tx
                .send(AiCommand::Generate {
                    task,
                    prompt: String::new(),
                })
                .await
                .unwrap();
        }

        let first = handle.event_rx.recv().await.unwrap();
        let second = handle.event_rx.recv().await.unwrap();
        assert!(
            matches!(first, AiEvent::Completed { task: TaskKind::ReplyEmail, .. })
        );
        match second {
            AiEvent::Completed { task, result } => {
                assert_eq!(task, TaskKind::CancelSubscription);
                assert_eq!(result.sources.len(), 1);
            }
            other => panic!("expected Completed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn shutdown_stops_the_actor() {
        let mut handle = spawn_ai_actor(MockGenerator::new(vec![]));

        handle.cmd_tx.send(AiCommand::Shutdown).await.unwrap();

        // The actor drops its event sender on exit, closing the channel.
        assert!(handle.event_rx.recv().await.is_none());
    }
}
