use glam::Vec2;
use thiserror::Error;

use crate::assets::manifest::AssetManifest;
use crate::host::{AssetError, Host, ImageHandle};

/// Identifies a sprite in the [`SpriteBank`].
///
/// `Nil` is the designated fallback: looking it up yields a zero-sized sprite
/// with a default handle, so a stray id degrades to an invisible draw rather
/// than a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpriteId {
    #[default]
    Nil,
    Player,
    Rock,
    Tree,
}

impl SpriteId {
    /// Total number of sprite slots, fallback included.
    pub const COUNT: usize = 4;

    /// Ids that must be present in the manifest for boot to succeed.
    pub const REQUIRED: [SpriteId; 3] = [SpriteId::Player, SpriteId::Rock, SpriteId::Tree];

    /// Resolve a manifest sprite name. Returns None for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "player" => Some(Self::Player),
            "rock" => Some(Self::Rock),
            "tree" => Some(Self::Tree),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Nil => 0,
            Self::Player => 1,
            Self::Rock => 2,
            Self::Tree => 3,
        }
    }
}

/// Immutable pairing of a host image handle and a logical render size in
/// world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sprite {
    pub image: ImageHandle,
    pub size: Vec2,
}

/// Required sprites could not be assembled from the manifest.
#[derive(Debug, Error)]
pub enum SpriteLoadError {
    #[error("sprite {0:?} missing from the asset manifest")]
    Missing(SpriteId),
    #[error(transparent)]
    Load(#[from] AssetError),
}

/// Fixed table of sprites, populated once at boot and read-only after.
pub struct SpriteBank {
    entries: [Sprite; SpriteId::COUNT],
}

impl SpriteBank {
    /// Load every manifest sprite through the host.
    ///
    /// Unknown manifest names are warned about and skipped; a missing
    /// required sprite or a failed image load aborts the boot.
    pub fn load<H: Host + ?Sized>(
        host: &mut H,
        manifest: &AssetManifest,
    ) -> Result<Self, SpriteLoadError> {
        let mut entries = [Sprite::default(); SpriteId::COUNT];
        let mut loaded = [false; SpriteId::COUNT];

        for (name, desc) in &manifest.sprites {
            let Some(id) = SpriteId::from_name(name) else {
                log::warn!("ignoring unknown sprite {name:?} in manifest");
                continue;
            };
            let image = host.load_image(&desc.path)?;
            entries[id.index()] = Sprite {
                image,
                size: Vec2::new(desc.size[0], desc.size[1]),
            };
            loaded[id.index()] = true;
        }

        for id in SpriteId::REQUIRED {
            if !loaded[id.index()] {
                return Err(SpriteLoadError::Missing(id));
            }
        }

        Ok(Self { entries })
    }

    /// Look up a sprite. Never fails: `Nil` resolves to the fallback entry.
    pub fn get(&self, id: SpriteId) -> &Sprite {
        &self.entries[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::WindowDesc;
    use crate::host::{Color, FontHandle, Key};
    use glam::Mat4;

    /// Host double whose image loads hand out sequential handles, failing for
    /// paths listed as broken.
    struct LoaderHost {
        next_handle: u32,
        broken: Vec<String>,
    }

    impl LoaderHost {
        fn new() -> Self {
            Self { next_handle: 1, broken: Vec::new() }
        }
    }

    impl Host for LoaderHost {
        fn open_window(&mut self, _desc: &WindowDesc) {}
        fn should_close(&self) -> bool {
            false
        }
        fn request_close(&mut self) {}
        fn poll(&mut self) {}
        fn present(&mut self) {}
        fn elapsed_seconds(&self) -> f64 {
            0.0
        }
        fn key_down(&self, _key: Key) -> bool {
            false
        }
        fn key_just_pressed(&self, _key: Key) -> bool {
            false
        }
        fn key_just_released(&self, _key: Key) -> bool {
            false
        }
        fn mouse_position(&self) -> glam::Vec2 {
            glam::Vec2::ZERO
        }
        fn set_camera_transform(&mut self, _view: Mat4) {}
        fn projection(&self) -> Mat4 {
            Mat4::IDENTITY
        }
        fn viewport_size(&self) -> glam::Vec2 {
            glam::Vec2::new(1280.0, 720.0)
        }
        fn draw_rect(&mut self, _pos: glam::Vec2, _size: glam::Vec2, _color: Color) {}
        fn draw_sprite(&mut self, _image: ImageHandle, _t: Mat4, _size: glam::Vec2, _tint: Color) {}
        fn draw_text(
            &mut self,
            _font: FontHandle,
            _text: &str,
            _height: u32,
            _pos: glam::Vec2,
            _scale: glam::Vec2,
            _color: Color,
        ) {
        }
        fn load_image(&mut self, path: &str) -> Result<ImageHandle, AssetError> {
            if self.broken.iter().any(|p| p == path) {
                return Err(AssetError {
                    path: path.to_string(),
                    reason: String::from("no such file"),
                });
            }
            let handle = ImageHandle(self.next_handle);
            self.next_handle += 1;
            Ok(handle)
        }
        fn load_font(&mut self, _path: &str) -> Result<FontHandle, AssetError> {
            Ok(FontHandle(1))
        }
    }

    fn full_manifest() -> AssetManifest {
        AssetManifest::from_json(
            r#"{
                "font": { "path": "assets/arial.ttf" },
                "sprites": {
                    "player": { "path": "assets/player.png", "size": [6, 12] },
                    "rock": { "path": "assets/rock.png", "size": [8, 4] },
                    "tree": { "path": "assets/tree.png", "size": [16, 32] }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn loads_all_required_sprites() {
        let mut host = LoaderHost::new();
        let bank = SpriteBank::load(&mut host, &full_manifest()).unwrap();
        assert_eq!(bank.get(SpriteId::Player).size, Vec2::new(6.0, 12.0));
        assert_eq!(bank.get(SpriteId::Rock).size, Vec2::new(8.0, 4.0));
        assert_eq!(bank.get(SpriteId::Tree).size, Vec2::new(16.0, 32.0));
    }

    #[test]
    fn nil_resolves_to_fallback() {
        let mut host = LoaderHost::new();
        let bank = SpriteBank::load(&mut host, &full_manifest()).unwrap();
        let nil = bank.get(SpriteId::Nil);
        assert_eq!(nil.size, Vec2::ZERO);
        assert_eq!(nil.image, ImageHandle::default());
    }

    #[test]
    fn missing_required_sprite_fails() {
        let mut manifest = full_manifest();
        manifest.sprites.remove("tree");
        let mut host = LoaderHost::new();
        match SpriteBank::load(&mut host, &manifest) {
            Err(SpriteLoadError::Missing(SpriteId::Tree)) => {}
            other => panic!("expected missing tree, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn broken_image_fails_boot() {
        let mut host = LoaderHost::new();
        host.broken.push(String::from("assets/rock.png"));
        assert!(matches!(
            SpriteBank::load(&mut host, &full_manifest()),
            Err(SpriteLoadError::Load(_))
        ));
    }

    #[test]
    fn unknown_names_are_skipped() {
        let mut manifest = full_manifest();
        manifest.sprites.insert(
            String::from("dragon"),
            crate::assets::manifest::SpriteDescriptor {
                path: String::from("assets/dragon.png"),
                size: [64.0, 64.0],
            },
        );
        let mut host = LoaderHost::new();
        assert!(SpriteBank::load(&mut host, &manifest).is_ok());
    }
}
