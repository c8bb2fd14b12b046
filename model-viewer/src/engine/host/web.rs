use constants::path::CANVAS_ID;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use super::{Container, ContainerHost};
use crate::error::{ViewerError, ViewerResult};

/// Browser host backed by the page DOM.
#[derive(Default)]
pub struct WebHost;

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

impl ContainerHost for WebHost {
    fn find_container(&self, id: &str) -> Option<Container> {
        let element = document()?.get_element_by_id(id)?;
        Some(Container {
            width: element.client_width() as f32,
            height: element.client_height() as f32,
        })
    }

    fn attach_surface(&self, id: &str) -> ViewerResult<Option<String>> {
        let document =
            document().ok_or_else(|| ViewerError::SurfaceAttach("no document".to_string()))?;
        let container = document
            .get_element_by_id(id)
            .ok_or_else(|| ViewerError::MissingContainer { id: id.to_string() })?;

        let canvas = document
            .create_element("canvas")
            .map_err(|e| ViewerError::SurfaceAttach(format!("{e:?}")))?;
        canvas.set_id(CANVAS_ID);

        // Fill the container; winit keeps the backing size in sync via fit_canvas_to_parent.
        if let Some(element) = canvas.dyn_ref::<HtmlElement>() {
            let style = element.style();
            for (property, value) in [("width", "100%"), ("height", "100%"), ("display", "block")]
            {
                style
                    .set_property(property, value)
                    .map_err(|e| ViewerError::SurfaceAttach(format!("{e:?}")))?;
            }
        }

        container
            .append_child(&canvas)
            .map_err(|e| ViewerError::SurfaceAttach(format!("{e:?}")))?;

        Ok(Some(format!("#{CANVAS_ID}")))
    }
}

/// Run `start` now if the DOM is parsed, otherwise on `DOMContentLoaded`.
pub fn when_document_ready(start: impl FnOnce() + 'static) {
    let Some(document) = document() else {
        return;
    };

    if document.ready_state() != "loading" {
        start();
        return;
    }

    let closure: Closure<dyn FnMut()> = Closure::once(start);
    if document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        // Ownership moves to JS; the listener fires once.
        closure.forget();
    }
}
