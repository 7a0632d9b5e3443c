// DataViz Pro - ui/motion.rs
//
// Time-based reveal, stagger, pulse and parallax helpers.
// Pure math on seconds and points; callers supply the egui clock.

use crate::util::constants::REVEAL_SLIDE_DISTANCE;

/// Cubic ease-out on `t` in [0, 1].
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// A one-shot fade/slide-in that starts `delay` seconds after its clock
/// starts and lasts `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub delay: f32,
    pub duration: f32,
}

impl Reveal {
    pub const fn new(delay: f32, duration: f32) -> Self {
        Self { delay, duration }
    }

    /// The `index`-th item of a list, each starting `step` seconds after the
    /// previous one.
    pub fn staggered(base_delay: f32, step: f32, index: usize, duration: f32) -> Self {
        Self::new(base_delay + step * index as f32, duration)
    }

    /// Eased progress in [0, 1] after `elapsed` seconds.
    pub fn progress(&self, elapsed: f32) -> f32 {
        let t = elapsed - self.delay;
        if t <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 || t >= self.duration {
            return 1.0;
        }
        ease_out_cubic(t / self.duration)
    }

    /// Whether any of the reveal is visible yet. Interactive content
    /// should ignore input until this holds.
    pub fn has_started(&self, elapsed: f32) -> bool {
        self.progress(elapsed) > 0.0
    }

    pub fn is_complete(&self, elapsed: f32) -> bool {
        elapsed >= self.delay + self.duration
    }
}

/// Clamped linear map of a scroll offset onto a parallax offset:
/// `[0, range]` maps to `[0, end_offset]`.
pub fn parallax(scroll: f32, range: f32, end_offset: f32) -> f32 {
    if range <= 0.0 {
        return 0.0;
    }
    (scroll / range).clamp(0.0, 1.0) * end_offset
}

/// Smooth 0..1..0 pulse with the given period.
pub fn pulse(time: f64, period: f64) -> f32 {
    if period <= 0.0 {
        return 1.0;
    }
    let phase = (time / period).fract() * std::f64::consts::TAU;
    (0.5 - 0.5 * phase.cos()) as f32
}

/// Fade and slide the rest of `ui` according to `progress`.
pub fn apply(ui: &mut egui::Ui, progress: f32) {
    ui.multiply_opacity(progress);
    let slide = (1.0 - progress) * REVEAL_SLIDE_DISTANCE;
    if slide > 0.0 {
        ui.add_space(slide);
    }
}

/// Run `add_contents` in a child scope revealed by `reveal` at `elapsed`.
pub fn revealed<R>(
    ui: &mut egui::Ui,
    reveal: Reveal,
    elapsed: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    ui.scope(|ui| {
        apply(ui, reveal.progress(elapsed));
        add_contents(ui)
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_zero_before_delay() {
        let r = Reveal::new(0.4, 0.8);
        assert_eq!(r.progress(0.0), 0.0);
        assert_eq!(r.progress(0.4), 0.0);
        assert!(!r.is_complete(0.5));
    }

    #[test]
    fn test_reveal_is_one_after_duration() {
        let r = Reveal::new(0.2, 0.8);
        assert_eq!(r.progress(1.0), 1.0);
        assert_eq!(r.progress(50.0), 1.0);
        assert!(r.is_complete(1.0));
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let r = Reveal::new(0.1, 0.6);
        let mut last = 0.0;
        for step in 0..=100 {
            let p = r.progress(step as f32 * 0.01);
            assert!(p >= last, "progress went backwards at step {step}");
            last = p;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_zero_duration_completes_at_delay() {
        let r = Reveal::new(0.5, 0.0);
        assert_eq!(r.progress(0.5), 0.0);
        assert_eq!(r.progress(0.51), 1.0);
    }

    #[test]
    fn test_stagger_offsets_delay() {
        let r = Reveal::staggered(0.0, 0.2, 2, 0.6);
        assert!((r.delay - 0.4).abs() < 1e-6);
        assert_eq!(r.duration, 0.6);
    }

    #[test]
    fn test_disabled_animations_complete_every_reveal() {
        // Animations off hands every reveal an infinite elapsed time.
        for r in [
            Reveal::new(0.0, 0.8),
            Reveal::new(1.0, 0.8),
            Reveal::staggered(0.0, 0.2, 5, 0.6),
            Reveal::new(0.3, 0.0),
        ] {
            assert_eq!(r.progress(f32::INFINITY), 1.0);
            assert!(r.is_complete(f32::INFINITY));
            assert!(r.has_started(f32::INFINITY));
        }
    }

    #[test]
    fn test_staggered_items_trail_each_other() {
        let first = Reveal::staggered(0.0, 0.2, 0, 0.6);
        let third = Reveal::staggered(0.0, 0.2, 2, 0.6);

        // At 0.3 s the first card is midway, the third has not begun.
        assert!(first.progress(0.3) > 0.0 && first.progress(0.3) < 1.0);
        assert_eq!(third.progress(0.3), 0.0);
        assert!(!third.has_started(0.3));

        // The third finishes 0.4 s after the first.
        assert!(first.is_complete(0.6));
        assert!(!third.is_complete(0.6));
        assert!(third.is_complete(1.0));
        assert_eq!(third.progress(1.0), 1.0);
    }

    #[test]
    fn test_has_started_only_after_delay() {
        let r = Reveal::new(0.4, 0.8);
        assert!(!r.has_started(0.0));
        assert!(!r.has_started(0.4));
        assert!(r.has_started(0.45));
    }

    #[test]
    fn test_parallax_maps_and_clamps() {
        assert_eq!(parallax(0.0, 500.0, -150.0), 0.0);
        assert_eq!(parallax(250.0, 500.0, -150.0), -75.0);
        assert_eq!(parallax(500.0, 500.0, -150.0), -150.0);
        assert_eq!(parallax(2_000.0, 500.0, -150.0), -150.0);
        assert_eq!(parallax(-40.0, 500.0, -150.0), 0.0);
        assert_eq!(parallax(100.0, 0.0, -150.0), 0.0);
    }

    #[test]
    fn test_pulse_range() {
        assert!(pulse(0.0, 4.0).abs() < 1e-6);
        assert!((pulse(2.0, 4.0) - 1.0).abs() < 1e-6);
        for i in 0..40 {
            let v = pulse(i as f64 * 0.37, 4.0);
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
