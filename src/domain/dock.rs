//! Scroll-linked docking of the hero search bar.
//!
//! Everything here is a pure function of the current scroll offset. The hero
//! starts large in the middle of the screen and shrinks toward the top as the
//! results are scrolled, docking before the full reference distance is
//! covered.

use serde::{Deserialize, Serialize};

/// Tuning for the docking transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DockConfig {
    /// Scroll distance over which `raw_progress` goes from 0 to 1.
    pub reference_distance: f64,
    /// Fraction of the reference distance at which the hero docks.
    pub dock_fraction: f64,
    /// Exponent applied to the dock progress before docking (< 1 is sub-linear).
    pub ease_exponent: f64,
    /// Scale of the hero once fully docked.
    pub min_scale: f64,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            reference_distance: 120.0,
            dock_fraction: 0.65,
            ease_exponent: 0.85,
            min_scale: 0.6,
        }
    }
}

/// Where the results area starts relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ResultsPadding {
    /// Hero is docked; results sit right under it.
    Docked,
    /// Results are pushed down by this fraction of the viewport height,
    /// plus the fixed gap under the hero.
    Floating { viewport_fraction: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationParams {
    pub raw_progress: f64,
    pub dock_progress: f64,
    pub eased: f64,
    pub compact: bool,
    pub scale: f64,
    pub results_padding: ResultsPadding,
    pub results_opacity: f64,
    pub results_translate: f64,
}

const OPACITY_GAIN: f64 = 1.4;
const MAX_TRANSLATE: f64 = 40.0;

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        return 1.0;
    }
    (numerator / denominator).clamp(0.0, 1.0)
}

/// Derive the visual parameters for a scroll offset.
pub fn derive_animation_state(scroll_offset: f64, config: &DockConfig) -> AnimationParams {
    let raw_progress = ratio(scroll_offset.max(0.0), config.reference_distance);
    let dock_progress = ratio(raw_progress, config.dock_fraction);
    let eased = if dock_progress < 1.0 {
        dock_progress.powf(config.ease_exponent)
    } else {
        1.0
    };
    let compact = raw_progress >= config.dock_fraction;
    let scale = 1.0 - (1.0 - config.min_scale) * eased;

    let results_padding = if compact {
        ResultsPadding::Docked
    } else {
        ResultsPadding::Floating {
            viewport_fraction: 1.0 - dock_progress,
        }
    };

    AnimationParams {
        raw_progress,
        dock_progress,
        eased,
        compact,
        scale,
        results_padding,
        results_opacity: (dock_progress * OPACITY_GAIN).min(1.0),
        results_translate: MAX_TRANSLATE * (1.0 - dock_progress),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_at_top() {
        let params = derive_animation_state(0.0, &DockConfig::default());

        assert_eq!(params.raw_progress, 0.0);
        assert_eq!(params.dock_progress, 0.0);
        assert!(!params.compact);
        assert_eq!(params.scale, 1.0);
        assert_eq!(params.results_opacity, 0.0);
        assert_eq!(params.results_translate, 40.0);
        assert_eq!(
            params.results_padding,
            ResultsPadding::Floating {
                viewport_fraction: 1.0
            }
        );
    }

    #[test]
    fn test_docks_at_dock_fraction() {
        let config = DockConfig {
            reference_distance: 120.0,
            dock_fraction: 0.65,
            ..DockConfig::default()
        };
        let params = derive_animation_state(78.0, &config);

        assert!(approx(params.raw_progress, 0.65));
        assert!(approx(params.dock_progress, 1.0));
        assert!(params.compact);
        assert!(approx(params.scale, 0.6));
        assert_eq!(params.results_padding, ResultsPadding::Docked);
        assert!(approx(params.results_opacity, 1.0));
        assert!(approx(params.results_translate, 0.0));
    }

    #[test]
    fn test_eased_is_sub_linear_before_docking() {
        let config = DockConfig::default();
        let params = derive_animation_state(39.0, &config);

        assert!(approx(params.dock_progress, 0.5));
        assert!(approx(params.eased, 0.5_f64.powf(0.85)));
        assert!(params.eased > params.dock_progress);
        assert!(!params.compact);
    }

    #[rstest]
    #[case(-50.0)]
    #[case(10_000.0)]
    fn test_progress_is_clamped(#[case] offset: f64) {
        let params = derive_animation_state(offset, &DockConfig::default());

        assert!((0.0..=1.0).contains(&params.raw_progress));
        assert!((0.0..=1.0).contains(&params.dock_progress));
        assert!((0.6..=1.0).contains(&params.scale));
    }

    #[test]
    fn test_scale_is_monotonic() {
        let config = DockConfig::default();
        let scales: Vec<f64> = (0..=130)
            .map(|offset| derive_animation_state(f64::from(offset), &config).scale)
            .collect();

        assert!(scales.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_zero_reference_distance_is_docked() {
        let config = DockConfig {
            reference_distance: 0.0,
            ..DockConfig::default()
        };
        assert!(derive_animation_state(0.0, &config).compact);
    }
}
