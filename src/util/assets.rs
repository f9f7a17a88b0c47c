use std::{borrow::Cow, sync::OnceLock};

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css`.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| load_text("main.css"))
        .as_str()
}

/// Returns a data URI for the window icon.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| {
            let svg = load_text("favicon.svg");
            format!("data:image/svg+xml;base64,{}", BASE64_STANDARD.encode(svg))
        })
        .as_str()
}

// A missing or non-UTF-8 asset degrades to an empty string.
fn load_text(path: &str) -> String {
    let asset = load_asset(path);
    match String::from_utf8(asset.into_owned()) {
        Ok(text) => text,
        Err(_) => {
            tracing::error!(path, "embedded asset is not valid UTF-8");
            String::new()
        }
    }
}

fn load_asset(path: &str) -> Cow<'static, [u8]> {
    match EmbeddedAssets::get(path) {
        Some(file) => file.data,
        None => {
            tracing::error!(path, "embedded asset missing");
            Cow::Borrowed(&[])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_and_icon_are_embedded() {
        assert!(main_css().contains(".product-card"));
        let uri = favicon_data_uri();
        let payload = uri
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("svg data uri prefix");
        let svg = BASE64_STANDARD.decode(payload).unwrap();
        assert!(String::from_utf8(svg).unwrap().starts_with("<svg"));
    }
}
