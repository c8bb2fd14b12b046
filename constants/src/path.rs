/// Id of the page element the viewer renders into.
pub const CONTAINER_ID: &str = "three-container";

/// Id given to the canvas appended into the container.
pub const CANVAS_ID: &str = "three-canvas";

/// GLB asset, relative to the asset root.
pub const MODEL_ASSET_PATH: &str = "images/Blue_Eyed_Pup_Head_1018194002_texture.glb";

/// Window size used when running natively, where there is no page container.
pub const NATIVE_CONTAINER_SIZE: (f32, f32) = (800.0, 800.0);
