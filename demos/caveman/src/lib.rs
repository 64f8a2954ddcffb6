//! Caveman: a top-down walking-around demo built on `caveman-core`.
//!
//! The crate is host-agnostic: [`launch`] drives any [`Host`] implementation
//! (a real windowing backend, or a scripted one in the integration tests).

use anyhow::Context;
use caveman_core::{AssetManifest, Color, GameConfig, GameRunner, Host, WindowDesc};

/// Embedded asset manifest. Paths inside are resolved by the host.
pub const MANIFEST: &str = include_str!("../assets/manifest.json");

/// Window and gameplay configuration for a caveman session.
pub fn game_config() -> GameConfig {
    GameConfig {
        window: WindowDesc {
            title: String::from("Caveman Game"),
            width: 1280,
            height: 720,
            x: 200,
            y: 200,
            clear_color: Color::from_hex(0x4b692fff),
        },
        ..GameConfig::default()
    }
}

/// Boot a session on `host` and run it until the window closes.
pub fn launch<H: Host>(host: &mut H) -> anyhow::Result<()> {
    let manifest =
        AssetManifest::from_json(MANIFEST).context("invalid embedded asset manifest")?;
    let mut runner = GameRunner::boot(host, game_config(), &manifest)
        .context("failed to boot caveman session")?;
    log::info!("caveman: session booted");
    runner.run(host);
    Ok(())
}
