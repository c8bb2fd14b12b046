mod engine;
mod error;
mod rpc;

use engine::core::app_setup::init_viewer;
use engine::core::config::ViewerConfig;
use engine::host::ContainerHost;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        engine::host::web::when_document_ready(|| start(&engine::host::web::WebHost));
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        engine::host::native::when_document_ready(|| {
            start(&engine::host::native::NativeHost::default())
        });
    }
}

/// Build and run the viewer. Without a container the page is left untouched.
fn start(host: &impl ContainerHost) {
    let Ok(mut app) = init_viewer(host, ViewerConfig::default()) else {
        return;
    };

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
