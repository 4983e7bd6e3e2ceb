#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Signal handler error: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("Invalid maze: {0}")]
    InvalidMaze(String),

    #[error("Invalid snake: {0}")]
    InvalidSnake(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
