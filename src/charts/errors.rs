use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Chart error: [{0}] has no data to plot")]
    EmptySeries(String),
    #[error("Chart error: {0}")]
    Render(String)
}
