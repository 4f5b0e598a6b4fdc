use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::models::random_number::{Band, RandomNumber};

/// Drives the lucky-number widget, pausing before each draw so the
/// "generating" state is visible.
pub struct RandomNumberService<R = StdRng> {
    widget: RandomNumber,
    delay: Duration,
    rng: R,
}

impl RandomNumberService<StdRng> {
    pub fn new(delay: Duration) -> Self {
        Self::with_rng(delay, StdRng::from_entropy())
    }
}

impl<R: Rng> RandomNumberService<R> {
    pub fn with_rng(delay: Duration, rng: R) -> Self {
        Self {
            widget: RandomNumber::new(),
            delay,
            rng,
        }
    }

    pub fn widget(&self) -> &RandomNumber {
        &self.widget
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn generate(&mut self) -> u8 {
        self.widget.begin();
        debug!("Generating number after {:?}", self.delay);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let number = self.widget.finish(&mut self.rng);
        info!(
            "Drew {} ({:?}), draw #{}",
            number,
            Band::of(number),
            self.widget.draws()
        );
        number
    }
}
