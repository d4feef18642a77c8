use log::{info, warn};

use crate::config::CaptureConfig;
use crate::traits::SceneHost;
use crate::types::SettingKind;

/// A render setting the host refused
#[derive(Debug, Clone, PartialEq)]
pub struct SettingWarning {
    pub setting: SettingKind,
    pub reason: String,
}

/// Apply engine, quality, resolution and color settings to the scene
///
/// Each setting is applied on its own; a refused one is logged and reported
/// back, never fatal. Capture proceeds with whatever the host accepted.
pub fn configure_scene<H: SceneHost>(host: &mut H, config: &CaptureConfig) -> Vec<SettingWarning> {
    let render = &config.render;
    info!(
        "Configuring render engine ({:?}, {} samples, {}x{})",
        render.engine, render.samples, config.resolution.width, config.resolution.height
    );

    render
        .settings(config.resolution)
        .iter()
        .filter_map(|setting| match host.apply_render_setting(setting) {
            Ok(()) => None,
            Err(e) => {
                warn!("Render setting {} skipped: {}", setting.kind(), e);
                Some(SettingWarning {
                    setting: setting.kind(),
                    reason: e.to_string(),
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryHost;
    use crate::types::{ComputeDevice, Denoiser, RenderEngine};

    #[test]
    fn applies_full_preset() {
        let mut host = MemoryHost::new();
        let warnings = configure_scene(&mut host, &CaptureConfig::default());

        assert!(warnings.is_empty());
        let s = host.settings();
        assert_eq!(s.engine, RenderEngine::Cycles);
        assert_eq!(s.samples, 512);
        assert!(s.adaptive_sampling);
        assert_eq!(s.resolution, (2224, 2224));
        assert_eq!(s.view_transform, "AgX");
        assert_eq!(s.look, "AgX - High Contrast");
        assert_eq!(s.denoiser, Some(Denoiser::OpenImageDenoise));
        assert_eq!(s.device, ComputeDevice::Gpu);
        assert_eq!(s.world_background, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn unsupported_settings_become_warnings() {
        let mut host = MemoryHost::new()
            .without_setting(SettingKind::Denoiser)
            .without_setting(SettingKind::Look);
        let warnings = configure_scene(&mut host, &CaptureConfig::default());

        let kinds: Vec<_> = warnings.iter().map(|w| w.setting).collect();
        assert_eq!(kinds, vec![SettingKind::Look, SettingKind::Denoiser]);
        // Everything after a refused setting still lands
        assert_eq!(host.settings().device, ComputeDevice::Gpu);
        assert_eq!(host.settings().samples, 512);
    }

    #[test]
    fn reapplying_is_stable() {
        let mut host = MemoryHost::new();
        let config = CaptureConfig::default();
        configure_scene(&mut host, &config);
        let first = host.settings().clone();

        configure_scene(&mut host, &config);
        assert_eq!(host.settings(), &first);
    }
}
