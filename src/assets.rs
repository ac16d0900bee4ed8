//! Sprite loading
//!
//! Fetches the four images named in [`AssetPaths`] and decodes them to RGBA8.
//! Any failure is fatal: the game cannot be drawn without them.

use glam::Vec2;

use crate::config::AssetPaths;
use crate::error::AssetError;
use crate::sim::SpriteSizes;

/// The four images the scene is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Ball,
    Ice,
    Fire,
    Background,
}

impl AssetKey {
    pub const ALL: [AssetKey; 4] = [
        AssetKey::Ball,
        AssetKey::Ice,
        AssetKey::Fire,
        AssetKey::Background,
    ];

    pub fn path<'a>(&self, paths: &'a AssetPaths) -> &'a str {
        match self {
            AssetKey::Ball => &paths.ball,
            AssetKey::Ice => &paths.ice,
            AssetKey::Fire => &paths.fire,
            AssetKey::Background => &paths.background,
        }
    }
}

/// A decoded image, tightly packed RGBA8 rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Sprite {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Decode PNG bytes fetched from `path`
pub fn decode_sprite(path: &str, bytes: &[u8]) -> Result<Sprite, AssetError> {
    if bytes.is_empty() {
        return Err(AssetError::Empty { path: path.into() });
    }

    let rgba = image::load_from_memory(bytes)
        .map_err(|source| AssetError::Decode {
            path: path.into(),
            source,
        })?
        .to_rgba8();

    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(AssetError::Empty { path: path.into() });
    }

    Ok(Sprite {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

/// All four sprites, ready for upload
#[derive(Debug, Clone)]
pub struct Sprites {
    pub ball: Sprite,
    pub ice: Sprite,
    pub fire: Sprite,
    pub background: Sprite,
}

impl Sprites {
    pub fn get(&self, key: AssetKey) -> &Sprite {
        match key {
            AssetKey::Ball => &self.ball,
            AssetKey::Ice => &self.ice,
            AssetKey::Fire => &self.fire,
            AssetKey::Background => &self.background,
        }
    }

    /// Body sizes for the world builder
    pub fn sizes(&self) -> SpriteSizes {
        SpriteSizes {
            ball: self.ball.size(),
            ice: self.ice.size(),
            fire: self.fire.size(),
        }
    }
}

/// Fetch raw bytes with `window.fetch`
#[cfg(target_arch = "wasm32")]
async fn fetch_bytes(path: &str) -> Result<Vec<u8>, AssetError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let fetch_err = |reason: String| AssetError::Fetch {
        path: path.into(),
        reason,
    };

    let window = web_sys::window().ok_or_else(|| fetch_err("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| fetch_err(format!("{:?}", e)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| fetch_err("not a Response".into()))?;

    if !response.ok() {
        return Err(fetch_err(format!("HTTP {}", response.status())));
    }

    let buffer = response
        .array_buffer()
        .map_err(|e| fetch_err(format!("{:?}", e)))?;
    let buffer = JsFuture::from(buffer)
        .await
        .map_err(|e| fetch_err(format!("{:?}", e)))?;

    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[cfg(target_arch = "wasm32")]
async fn load_sprite(paths: &AssetPaths, key: AssetKey) -> Result<Sprite, AssetError> {
    let path = key.path(paths);
    let bytes = fetch_bytes(path).await?;
    let sprite = decode_sprite(path, &bytes)?;
    log::info!("Loaded {} ({}x{})", path, sprite.width, sprite.height);
    Ok(sprite)
}

/// Fetch and decode every sprite; the first failure aborts
#[cfg(target_arch = "wasm32")]
pub async fn load_sprites(paths: &AssetPaths) -> Result<Sprites, AssetError> {
    Ok(Sprites {
        ball: load_sprite(paths, AssetKey::Ball).await?,
        ice: load_sprite(paths, AssetKey::Ice).await?,
        fire: load_sprite(paths, AssetKey::Fire).await?,
        background: load_sprite(paths, AssetKey::Background).await?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([255, 64, 0, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let sprite = decode_sprite("/images/ball.png", &png_bytes(20, 20)).unwrap();
        assert_eq!((sprite.width, sprite.height), (20, 20));
        assert_eq!(sprite.rgba.len(), 20 * 20 * 4);
        assert_eq!(&sprite.rgba[..4], &[255, 64, 0, 255]);
        assert_eq!(sprite.size(), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_corrupt_bytes_fail_to_decode() {
        let err = decode_sprite("/images/ice.png", b"definitely not a png").unwrap_err();
        assert!(matches!(err, AssetError::Decode { ref path, .. } if path == "/images/ice.png"));
    }

    #[test]
    fn test_empty_response() {
        let err = decode_sprite("/images/fire.png", &[]).unwrap_err();
        assert!(matches!(err, AssetError::Empty { .. }));
    }

    #[test]
    fn test_sizes_follow_sprites() {
        let sprite = |w, h| decode_sprite("x.png", &png_bytes(w, h)).unwrap();
        let sprites = Sprites {
            ball: sprite(16, 16),
            ice: sprite(24, 100),
            fire: sprite(24, 90),
            background: sprite(8, 6),
        };
        let sizes = sprites.sizes();
        assert_eq!(sizes.ball, Vec2::new(16.0, 16.0));
        assert_eq!(sizes.ice, Vec2::new(24.0, 100.0));
        assert_eq!(sizes.fire, Vec2::new(24.0, 90.0));
        assert_eq!(sprites.get(AssetKey::Background).width, 8);
    }

    #[test]
    fn test_asset_paths() {
        let paths = AssetPaths::default();
        let all: Vec<_> = AssetKey::ALL.iter().map(|k| k.path(&paths)).collect();
        assert_eq!(
            all,
            ["/images/ball.png", "/images/ice.png", "/images/fire.png", "/images/bg.png"]
        );
    }
}
