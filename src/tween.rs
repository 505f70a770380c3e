//! Eased transitions on a frame clock
//!
//! A `Timeline` holds one in-flight track per key. Advancing it samples every
//! track and reports which transitions finished during that step; callers use
//! the finished list as the completion signal instead of guessing with timers.

/// Easing curves (power-N families, matching common tweening libraries)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    /// Cubic ease-out
    Power2Out,
    /// Quartic ease-out
    #[default]
    Power3Out,
    /// Quartic ease-in-out
    Power3InOut,
}

impl Ease {
    /// Map linear progress `t` in [0, 1] to eased progress
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power3InOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
        }
    }
}

/// Timing for one transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Seconds; zero completes on the next advance
    pub duration: f32,
    pub ease: Ease,
    /// Seconds before the value starts moving
    pub delay: f32,
}

impl Tween {
    pub fn new(duration: f32, ease: Ease) -> Self {
        Self {
            duration,
            ease,
            delay: 0.0,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Linear progress after `elapsed` seconds
    fn progress(&self, elapsed: f32) -> f32 {
        let local = elapsed - self.delay;
        if local < 0.0 {
            0.0
        } else if self.duration <= 0.0 {
            1.0
        } else {
            (local / self.duration).min(1.0)
        }
    }
}

/// Values a timeline can interpolate
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

/// Identifier handed out for each started transition
pub type TransitionId = u64;

#[derive(Debug, Clone)]
struct Track<K, V> {
    id: TransitionId,
    key: K,
    from: V,
    to: V,
    tween: Tween,
    elapsed: f32,
}

/// Output of one `Timeline::advance` step
#[derive(Debug, Clone)]
pub struct Frame<K, V> {
    /// Current value of every track that was live during the step
    pub samples: Vec<(K, V)>,
    /// Transitions that reached their end value during the step
    pub finished: Vec<(TransitionId, K)>,
}

impl<K, V> Default for Frame<K, V> {
    fn default() -> Self {
        Self {
            samples: Vec::new(),
            finished: Vec::new(),
        }
    }
}

/// Set of in-flight transitions keyed by target
#[derive(Debug, Clone)]
pub struct Timeline<K, V> {
    tracks: Vec<Track<K, V>>,
    next_id: TransitionId,
}

impl<K, V> Default for Timeline<K, V> {
    fn default() -> Self {
        Self {
            tracks: Vec::new(),
            next_id: 1,
        }
    }
}

impl<K: Copy + PartialEq, V: Lerp> Timeline<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transition for `key`, replacing any track already running for it.
    /// A replaced track never reports completion.
    pub fn animate(&mut self, key: K, from: V, to: V, tween: Tween) -> TransitionId {
        self.tracks.retain(|t| t.key != key);
        let id = self.next_id;
        self.next_id += 1;
        self.tracks.push(Track {
            id,
            key,
            from,
            to,
            tween,
            elapsed: 0.0,
        });
        id
    }

    /// Drop the track for `key` without completing it
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.key != key);
        self.tracks.len() != before
    }

    pub fn is_animating(&self) -> bool {
        !self.tracks.is_empty()
    }

    pub fn is_animating_key(&self, key: K) -> bool {
        self.tracks.iter().any(|t| t.key == key)
    }

    /// Number of live tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Move the clock forward by `dt` seconds
    pub fn advance(&mut self, dt: f32) -> Frame<K, V> {
        let dt = dt.max(0.0);
        let mut frame = Frame {
            samples: Vec::with_capacity(self.tracks.len()),
            finished: Vec::new(),
        };

        for track in &mut self.tracks {
            track.elapsed += dt;
            let t = track.tween.progress(track.elapsed);
            let value = if t >= 1.0 {
                track.to
            } else {
                track.from.lerp(track.to, track.tween.ease.apply(t))
            };
            frame.samples.push((track.key, value));
            if t >= 1.0 {
                frame.finished.push((track.id, track.key));
            }
        }

        if !frame.finished.is_empty() {
            self.tracks
                .retain(|t| !frame.finished.iter().any(|(id, _)| *id == t.id));
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        for ease in [Ease::Linear, Ease::Power2Out, Ease::Power3Out, Ease::Power3InOut] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6);
        }
        assert!((Ease::Power3InOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ease_out_front_loads_motion() {
        assert!(Ease::Power3Out.apply(0.25) > Ease::Linear.apply(0.25));
        assert!(Ease::Power3Out.apply(0.25) > Ease::Power2Out.apply(0.25));
    }

    #[test]
    fn test_track_completes_exactly_once() {
        let mut timeline: Timeline<u8, f32> = Timeline::new();
        let id = timeline.animate(1, 0.0, 10.0, Tween::new(0.5, Ease::Linear));

        let frame = timeline.advance(0.25);
        assert_eq!(frame.samples, vec![(1, 5.0)]);
        assert!(frame.finished.is_empty());

        let frame = timeline.advance(0.5);
        assert_eq!(frame.samples, vec![(1, 10.0)]);
        assert_eq!(frame.finished, vec![(id, 1)]);
        assert!(!timeline.is_animating());

        let frame = timeline.advance(0.5);
        assert!(frame.samples.is_empty());
        assert!(frame.finished.is_empty());
    }

    #[test]
    fn test_zero_duration_finishes_on_next_advance() {
        let mut timeline: Timeline<u8, f32> = Timeline::new();
        timeline.animate(7, 1.0, 2.0, Tween::new(0.0, Ease::Power3Out));
        let frame = timeline.advance(0.0);
        assert_eq!(frame.samples, vec![(7, 2.0)]);
        assert_eq!(frame.finished.len(), 1);
    }

    #[test]
    fn test_retarget_replaces_track() {
        let mut timeline: Timeline<u8, f32> = Timeline::new();
        let first = timeline.animate(1, 0.0, 10.0, Tween::new(1.0, Ease::Linear));
        timeline.advance(0.5);
        let second = timeline.animate(1, 5.0, 0.0, Tween::new(1.0, Ease::Linear));
        assert_eq!(timeline.len(), 1);

        let frame = timeline.advance(1.0);
        assert_eq!(frame.finished, vec![(second, 1)]);
        assert_ne!(first, second);
    }

    #[test]
    fn test_delay_holds_start_value() {
        let mut timeline: Timeline<u8, f32> = Timeline::new();
        timeline.animate(1, 3.0, 6.0, Tween::new(1.0, Ease::Linear).with_delay(0.5));
        assert_eq!(timeline.advance(0.4).samples, vec![(1, 3.0)]);
        let frame = timeline.advance(0.6);
        assert!((frame.samples[0].1 - 4.5).abs() < 1e-4);
    }

    #[test]
    fn test_cancel() {
        let mut timeline: Timeline<u8, f32> = Timeline::new();
        timeline.animate(1, 0.0, 1.0, Tween::new(1.0, Ease::Linear));
        timeline.animate(2, 0.0, 1.0, Tween::new(1.0, Ease::Linear));
        assert!(timeline.cancel(1));
        assert!(!timeline.cancel(1));
        assert!(!timeline.is_animating_key(1));
        assert!(timeline.is_animating_key(2));
    }
}
