//! Error types for the model viewer.

use thiserror::Error;

/// Failures the viewer recognises. None of them stop a running frame loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    /// The host page has no element with the configured id.
    #[error("container element '#{id}' not found")]
    MissingContainer { id: String },

    /// The drawing surface could not be created inside the container.
    #[error("failed to attach render surface: {0}")]
    SurfaceAttach(String),

    /// Fetching or parsing the GLB asset failed.
    #[error("failed to load '{path}': {reason}")]
    AssetLoad { path: String, reason: String },
}

pub type ViewerResult<T> = std::result::Result<T, ViewerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_load_error_carries_path_and_reason() {
        let err = ViewerError::AssetLoad {
            path: "images/pup.glb".into(),
            reason: "404".into(),
        };
        let message = err.to_string();
        assert!(message.contains("images/pup.glb"));
        assert!(message.contains("404"));
    }

    #[test]
    fn missing_container_names_the_id() {
        let err = ViewerError::MissingContainer {
            id: "three-container".into(),
        };
        assert_eq!(err.to_string(), "container element '#three-container' not found");
    }
}
