use std::time::{Duration, Instant};

use tokio::sync::watch;

use crate::task::TaskHandle;

/// Default length of one counter animation.
pub const DEFAULT_COUNTER_DURATION: Duration = Duration::from_millis(800);

/// A number that glides toward its target instead of jumping.
///
/// Pure state machine: the caller supplies the clock. Every retarget starts a
/// fresh linear ramp from whatever is on screen at that instant, so a
/// mid-flight change never queues behind the old animation.
#[derive(Debug, Clone)]
pub struct AnimatedCounter {
    duration: Duration,
    displayed: f64,
    ramp: Option<Ramp>,
}

#[derive(Debug, Clone, Copy)]
struct Ramp {
    from: f64,
    to: f64,
    started: Instant,
}

impl AnimatedCounter {
    /// Counter at 0 with the given animation duration.
    pub fn new(duration: Duration) -> Self {
        Self::starting_at(0.0, duration)
    }

    /// Counter already showing `value`, no animation in progress.
    pub fn starting_at(value: f64, duration: Duration) -> Self {
        Self {
            duration,
            displayed: value,
            ramp: None,
        }
    }

    /// Start animating toward `target` from the value displayed at `now`.
    pub fn set_target(&mut self, target: f64, now: Instant) {
        let from = self.sample(now);
        self.ramp = Some(Ramp {
            from,
            to: target,
            started: now,
        });
    }

    /// Advance to `now` and return the value to display.
    ///
    /// Once the duration has elapsed the value is exactly the target and the
    /// animation is over.
    pub fn sample(&mut self, now: Instant) -> f64 {
        let Some(ramp) = self.ramp else {
            return self.displayed;
        };

        let elapsed = now.saturating_duration_since(ramp.started);
        if elapsed >= self.duration || self.duration.is_zero() {
            self.displayed = ramp.to;
            self.ramp = None;
        } else {
            let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
            self.displayed = ramp.from + (ramp.to - ramp.from) * progress;
        }
        self.displayed
    }

    /// Last sampled value.
    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    /// Target of the running animation, or the displayed value when idle.
    pub fn target(&self) -> f64 {
        self.ramp.map_or(self.displayed, |r| r.to)
    }

    pub fn is_animating(&self) -> bool {
        self.ramp.is_some()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for AnimatedCounter {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTER_DURATION)
    }
}

/// Drive `counter` frame by frame, publishing each sampled value on `frames`.
///
/// The loop ends on its own once the animation settles (after publishing the
/// exact target). Dropping or cancelling the returned handle stops it early.
pub fn spawn_frame_loop(
    mut counter: AnimatedCounter,
    frame_interval: Duration,
    frames: watch::Sender<f64>,
) -> TaskHandle {
    TaskHandle::spawn(async move {
        let mut ticker = tokio::time::interval(frame_interval);
        loop {
            ticker.tick().await;
            let value = counter.sample(tokio::time::Instant::now().into_std());
            frames.send_replace(value);
            if !counter.is_animating() {
                break;
            }
        }
    })
}
