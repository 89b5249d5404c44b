pub(crate) type NicmetaResult<T> = Result<T, NicmetaError>;

macro_rules! bail {
    ($($arg:tt)*) => {{
        return Err(NicmetaError::Other(format!($($arg)*)));
    }};
}

pub(crate) use bail;

#[derive(Debug, thiserror::Error)]
pub(crate) enum NicmetaError {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

impl NicmetaError {
    #[inline]
    pub(crate) fn other<T: ToString>(s: T) -> Self {
        Self::Other(s.to_string())
    }
}
