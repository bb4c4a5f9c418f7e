//! The few browser calls Dioxus does not cover: document-wide drag suppression, opening the native picker and
//! finding the page URL.
//!
//! Outside of wasm32 these are no-ops so components can be rendered on the server and in tests.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Id of the hidden `<input type="file">` the drop zone opens.
pub const FILE_INPUT_ID: &str = "fileInput";

const DRAG_EVENTS: [&str; 4] = ["dragenter", "dragover", "dragleave", "drop"];

/// Keeps the browser from opening files dropped anywhere on the page.
///
/// The listeners live on `document.body` for as long as the guard does and are removed when it is dropped.
pub struct BodyDragGuard {
    #[cfg(target_arch = "wasm32")]
    body: web_sys::HtmlElement,
    #[cfg(target_arch = "wasm32")]
    listener: Closure<dyn FnMut(web_sys::Event)>,
}

impl BodyDragGuard {
    #[cfg(target_arch = "wasm32")]
    pub fn install() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
            event.prevent_default();
            event.stop_propagation();
        });

        for name in DRAG_EVENTS {
            if let Err(err) =
                body.add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
            {
                tracing::warn!("Could not attach {name} listener to body: {err:?}");
            }
        }

        tracing::trace!("Installed body drag guard");
        Some(Self { body, listener })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn install() -> Option<Self> {
        tracing::trace!("No document to guard outside the browser ({DRAG_EVENTS:?})");
        None
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for BodyDragGuard {
    fn drop(&mut self) {
        for name in DRAG_EVENTS {
            _ = self
                .body
                .remove_event_listener_with_callback(name, self.listener.as_ref().unchecked_ref());
        }
    }
}

/// Open the native file dialog of the input with the given id.
pub fn open_file_picker(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let input = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlInputElement>().ok());

        match input {
            Some(input) => input.click(),
            None => tracing::warn!("No file input with id {id}"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("No native file picker for {id} outside the browser");
}

/// The URL of the current page, used to resolve relative endpoints.
pub fn page_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(href) = web_sys::window().and_then(|window| window.location().href().ok()) {
            return href;
        }
    }

    "http://localhost/".to_string()
}
