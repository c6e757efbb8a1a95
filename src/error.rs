use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("unable to decode audio: {0}")]
    Decode(String),
    #[error("expected 2 channels, found {channels}")]
    NotStereo { channels: usize },
    #[error("no samples to analyze")]
    EmptySignal,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("a worker thread terminated abnormally")]
    Worker,
}
