use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

// Trunk post-build hook: make bundle references relative so the viewer can be
// served from any sub-path of the host page.
fn main() {
    let Ok(staging_dir) = env::var("TRUNK_STAGING_DIR") else {
        eprintln!("TRUNK_STAGING_DIR not set; run this as a Trunk hook");
        process::exit(1);
    };
    let staged_html_path = PathBuf::from(staging_dir).join("index.html");

    let html = match fs::read_to_string(&staged_html_path) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("failed to read {}: {e}", staged_html_path.display());
            process::exit(1);
        }
    };

    let html = html
        .replace("'/model-viewer", "'./model-viewer")
        .replace("\"/model-viewer", "\"./model-viewer");

    if let Err(e) = fs::write(&staged_html_path, html) {
        eprintln!("failed to write {}: {e}", staged_html_path.display());
        process::exit(1);
    }
}
