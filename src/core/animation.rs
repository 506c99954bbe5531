// Button Animations
// Select (bounce) and deselect (flash-out) descriptors and their playback

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Bounce the icon in and flash the title
    Select,
    /// Fade the title out and drop the icon back
    Deselect,
}

/// Animation descriptor attached to a button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabItemAnimation {
    pub kind: AnimationKind,
    pub duration: Duration,
}

impl TabItemAnimation {
    pub fn select(duration: Duration) -> Self {
        Self { kind: AnimationKind::Select, duration }
    }

    pub fn deselect(duration: Duration) -> Self {
        Self { kind: AnimationKind::Deselect, duration }
    }

    /// Start playing this animation now
    pub fn play(&self) -> Playback {
        self.play_at(Instant::now())
    }

    pub fn play_at(&self, started: Instant) -> Playback {
        Playback {
            kind: self.kind,
            duration: self.duration,
            started,
        }
    }
}

/// An animation in flight on one button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    pub kind: AnimationKind,
    pub duration: Duration,
    pub started: Instant,
}

impl Playback {
    /// Fraction of the animation elapsed at `now`, clamped to [0, 1]
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Duration of both button animations for a given speed multiplier
///
/// `None` when the result is not a representable duration.
pub fn scaled_duration(base: Duration, speed: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(base.as_secs_f64() / speed).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Duration, expected: Duration) {
        let diff = if actual > expected { actual - expected } else { expected - actual };
        assert!(diff < Duration::from_micros(1), "{:?} != {:?}", actual, expected);
    }

    #[test]
    fn test_scaled_duration() {
        let base = Duration::from_millis(300);
        assert_close(scaled_duration(base, 1.0).unwrap(), Duration::from_millis(300));
        assert_close(scaled_duration(base, 2.0).unwrap(), Duration::from_millis(150));
        assert_close(scaled_duration(base, 0.5).unwrap(), Duration::from_millis(600));
    }

    #[test]
    fn test_scaled_duration_overflow() {
        let base = Duration::from_millis(300);
        assert!(scaled_duration(base, 1e-30).is_none());
        assert!(scaled_duration(base, -1.0).is_none());
        assert!(scaled_duration(base, f64::NAN).is_none());
    }

    #[test]
    fn test_progress_clamped() {
        let start = Instant::now();
        let playback = TabItemAnimation::select(Duration::from_millis(300)).play_at(start);
        assert!((playback.progress(start) - 0.0).abs() < 0.001);
        assert!((playback.progress(start + Duration::from_millis(150)) - 0.5).abs() < 0.001);
        assert!((playback.progress(start + Duration::from_secs(5)) - 1.0).abs() < 0.001);
        assert!(playback.is_finished(start + Duration::from_millis(300)));
    }

    #[test]
    fn test_zero_duration_is_finished() {
        let playback = TabItemAnimation::deselect(Duration::ZERO).play();
        assert!(playback.is_finished(playback.started));
    }
}
