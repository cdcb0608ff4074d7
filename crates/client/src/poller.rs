//! The sampling loop: pick a random record, fetch it, print it, sleep.

use std::time::Duration;

use rand::Rng;
use serde_json::Value;

use crate::api::{ApiClient, ClientError, Kind};
use crate::config::ClientConfig;

/// Id upper bounds per kind, taken once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub planets: usize,
    pub people: usize,
}

impl Bounds {
    /// Count both collections. Any failure here is returned to the caller.
    pub async fn discover(client: &ApiClient) -> Result<Self, ClientError> {
        Ok(Self {
            planets: client.count(Kind::Planet).await?,
            people: client.count(Kind::Person).await?,
        })
    }

    fn max_for(&self, kind: Kind) -> usize {
        match kind {
            Kind::Planet => self.planets,
            Kind::Person => self.people,
        }
    }
}

/// Choose a kind uniformly and an id uniformly in `1..=max` for that kind.
///
/// An empty collection still yields id `1`, which will simply 404.
pub fn pick_target<R: Rng + ?Sized>(rng: &mut R, bounds: &Bounds) -> (Kind, i64) {
    let kind = Kind::ALL[rng.random_range(0..Kind::ALL.len())];
    let max = bounds.max_for(kind).max(1) as i64;
    (kind, rng.random_range(1..=max))
}

/// Uniform sleep in `[min, max]`, whole seconds as the interval is coarse.
pub fn pick_sleep<R: Rng + ?Sized>(rng: &mut R, min: Duration, max: Duration) -> Duration {
    let (lo, hi) = (min.as_secs(), max.as_secs().max(min.as_secs()));
    Duration::from_secs(rng.random_range(lo..=hi))
}

/// Fetch one record, degrading any failure to an empty object.
pub async fn sample(client: &ApiClient, kind: Kind, id: i64) -> Value {
    match client.fetch(kind, id).await {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(kind = kind.label(), id, error = %e, "Sample failed, continuing");
            Value::Object(Default::default())
        }
    }
}

/// Run the sampling loop indefinitely.
pub async fn run(client: &ApiClient, bounds: Bounds, config: &ClientConfig) {
    loop {
        let (kind, id) = pick_target(&mut rand::rng(), &bounds);
        tracing::debug!(kind = kind.label(), id, "Sampling");

        let record = sample(client, kind, id).await;
        report(&record);

        let pause = pick_sleep(&mut rand::rng(), config.min_sleep, config.max_sleep);
        tokio::time::sleep(pause).await;
    }
}

fn report(record: &Value) {
    match serde_json::to_string_pretty(record) {
        Ok(text) => println!("{text}"),
        Err(e) => tracing::warn!(error = %e, "Could not render record"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ids_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Bounds {
            planets: 3,
            people: 10,
        };
        for _ in 0..500 {
            let (kind, id) = pick_target(&mut rng, &bounds);
            let max = match kind {
                Kind::Planet => 3,
                Kind::Person => 10,
            };
            assert!((1..=max).contains(&id), "{kind:?} id {id} out of range");
        }
    }

    #[test]
    fn both_kinds_get_picked() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = Bounds {
            planets: 5,
            people: 5,
        };
        let kinds: Vec<Kind> = (0..100).map(|_| pick_target(&mut rng, &bounds).0).collect();
        assert!(kinds.contains(&Kind::Planet));
        assert!(kinds.contains(&Kind::Person));
    }

    #[test]
    fn empty_collection_falls_back_to_id_one() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = Bounds {
            planets: 0,
            people: 0,
        };
        for _ in 0..20 {
            assert_eq!(pick_target(&mut rng, &bounds).1, 1);
        }
    }

    #[test]
    fn sleep_is_within_configured_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let pause = pick_sleep(&mut rng, Duration::from_secs(1), Duration::from_secs(5));
            assert!(pause >= Duration::from_secs(1) && pause <= Duration::from_secs(5));
        }
    }
}
