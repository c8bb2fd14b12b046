use super::{Container, ContainerHost};
use crate::error::ViewerResult;

/// Desktop host. The window is the container, so lookup always succeeds.
pub struct NativeHost {
    pub size: (f32, f32),
}

impl Default for NativeHost {
    fn default() -> Self {
        Self {
            size: constants::path::NATIVE_CONTAINER_SIZE,
        }
    }
}

impl ContainerHost for NativeHost {
    fn find_container(&self, _id: &str) -> Option<Container> {
        Some(Container {
            width: self.size.0,
            height: self.size.1,
        })
    }

    fn attach_surface(&self, _id: &str) -> ViewerResult<Option<String>> {
        Ok(None)
    }
}

/// Nothing to wait for outside a browser.
pub fn when_document_ready(start: impl FnOnce() + 'static) {
    start();
}
