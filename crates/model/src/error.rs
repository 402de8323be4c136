use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzeError>;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("walk error: {0}")]
    Walk(#[from] atlas_walker::WalkError),

    #[error("extractor error: {0}")]
    Extract(#[from] atlas_extract::ExtractError),
}
