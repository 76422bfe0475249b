//! Async sprite preloading
//!
//! The sim assumes every sprite's dimensions are answerable before the
//! first tick (load-before-play), so the game loop must not start until
//! this resolves.

use std::collections::HashMap;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::sim::SpriteId;

/// Load and decode every game sprite. Resolves once all pixel data is
/// ready; rejects if any asset is missing or undecodable.
pub async fn load_sprites() -> Result<HashMap<SpriteId, HtmlImageElement>, JsValue> {
    let mut images = HashMap::with_capacity(SpriteId::ALL.len());
    for sprite in SpriteId::ALL {
        images.insert(sprite, load_image(sprite.asset_path()).await?);
    }
    log::info!("Loaded {} sprites", images.len());
    Ok(images)
}

async fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(src);
    // decode() resolves when the pixel data (and so natural size) is ready
    JsFuture::from(image.decode()).await?;
    Ok(image)
}
