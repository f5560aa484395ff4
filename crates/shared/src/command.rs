#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("a submission is already in progress")]
    Busy,

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Unknown(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_message() {
        assert_eq!(Error::Busy.to_string(), "a submission is already in progress");
    }

    #[test]
    fn test_anyhow_maps_to_unknown() {
        let err: Error = anyhow::anyhow!("permission denied").into();
        assert!(matches!(err, Error::Unknown(_)));
        assert_eq!(err.to_string(), "permission denied");
    }
}
