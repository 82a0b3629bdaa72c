use thiserror::Error;

/// Ошибки навигатора по дням.
///
/// Ни одна из них не является фатальной: вызывающий код логирует ошибку и
/// пропускает операцию.
#[derive(Debug, Error)]
pub enum NavigatorError {
    #[error("day {0} is not part of the day set")]
    UnknownDay(u32),

    #[error("invalid data-day attribute: {0:?}")]
    InvalidDayAttribute(String),

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("no day panels found in the page")]
    EmptyDaySet,

    #[error("invalid navigator config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type NavigatorResult<T> = Result<T, NavigatorError>;
