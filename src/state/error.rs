use thiserror::Error;

#[derive(Error, Debug)]
pub enum MalformedStateError {
    #[error("trader state is not decodable: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("trader state schema version {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}
