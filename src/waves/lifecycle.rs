use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::foundation::color::Rgb8;
use crate::waves::ring::{Ring, WaveParams};

/// Source of ring colors. Injected so tests and seeded renders are reproducible.
pub trait ColorSource {
    fn next_color(&mut self) -> Rgb8;
}

impl<C: ColorSource + ?Sized> ColorSource for &mut C {
    fn next_color(&mut self) -> Rgb8 {
        (**self).next_color()
    }
}

/// Uniform random colors, each channel drawn independently from `0..=255`.
#[derive(Clone, Debug)]
pub struct RandomColors<R = StdRng> {
    rng: R,
}

impl RandomColors<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomColors<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ColorSource for RandomColors<R> {
    fn next_color(&mut self) -> Rgb8 {
        Rgb8::new(
            self.rng.gen_range(0..=255),
            self.rng.gen_range(0..=255),
            self.rng.gen_range(0..=255),
        )
    }
}

/// Spawn a ring at `now_ms` once `interval_ms` has elapsed since `last_spawn_ms`.
///
/// The caller records `now_ms` as the new last spawn time when a ring is returned.
pub fn maybe_spawn<C: ColorSource + ?Sized>(
    now_ms: f64,
    last_spawn_ms: f64,
    interval_ms: f64,
    colors: &mut C,
) -> Option<Ring> {
    if now_ms - last_spawn_ms < interval_ms {
        return None;
    }
    let start_color = colors.next_color();
    let end_color = colors.next_color();
    Some(Ring {
        start_ms: now_ms,
        start_color,
        end_color,
    })
}

/// Keep rings whose phase at `now_ms` lies in `[0, 1]` (both ends inclusive).
pub fn prune_expired(rings: &mut Vec<Ring>, now_ms: f64, lifespan_ms: f64) {
    rings.retain(|ring| {
        let phase = (now_ms - ring.start_ms) / lifespan_ms;
        (0.0..=1.0).contains(&phase)
    });
}

/// All time-dependent animation state: the spawn clock and the active rings in spawn order.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    last_spawn_ms: f64,
    rings: Vec<Ring>,
}

impl AnimationState {
    /// Fresh state whose first `advance` spawns a ring immediately.
    pub fn new(waves: &WaveParams) -> Self {
        Self {
            last_spawn_ms: -waves.interval_ms,
            rings: Vec::new(),
        }
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn last_spawn_ms(&self) -> f64 {
        self.last_spawn_ms
    }

    /// One frame boundary: spawn at most one ring, then drop expired ones.
    pub fn advance<C: ColorSource + ?Sized>(
        mut self,
        now_ms: f64,
        waves: &WaveParams,
        colors: &mut C,
    ) -> Self {
        if let Some(ring) = maybe_spawn(now_ms, self.last_spawn_ms, waves.interval_ms, colors) {
            tracing::debug!(
                now_ms,
                start = ?ring.start_color,
                end = ?ring.end_color,
                "spawned ring"
            );
            self.rings.push(ring);
            self.last_spawn_ms = now_ms;
        }

        let before = self.rings.len();
        prune_expired(&mut self.rings, now_ms, waves.lifespan_ms);
        let expired = before - self.rings.len();
        if expired > 0 {
            tracing::debug!(now_ms, expired, active = self.rings.len(), "pruned rings");
        }
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waves/lifecycle.rs"]
mod tests;
