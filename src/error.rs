use thiserror::Error;

/// Fatal peripheral fault
///
/// There is no recovery path: any of these ends [`Engine::run`](crate::Engine::run).
#[derive(Debug, Error)]
pub enum EngineError<TE, CE, DE> {
    #[error("transport failed: {0:?}")]
    Transport(TE),
    #[error("audio capture failed: {0:?}")]
    Capture(CE),
    #[error("LED output failed: {0:?}")]
    Display(DE),
}
