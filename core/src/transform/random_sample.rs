use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::{Error, Result},
    reducer::Reducer,
    step::Step,
    transducer::Transducer,
};

#[derive(Debug, Clone, Copy)]
#[must_use = "transducers do nothing unless applied"]
pub struct RandomSample {
    probability: f64,
    seed: Option<u64>,
}

/// Forwards each value independently with `probability`.
///
/// Every assembled pipeline draws from its own entropy-seeded generator.
pub fn random_sample(probability: f64) -> Result<RandomSample> {
    RandomSample::new(probability, None)
}

/// Like [`random_sample`], but every assembled pipeline replays the same
/// draws.
pub fn random_sample_seeded(probability: f64, seed: u64) -> Result<RandomSample> {
    RandomSample::new(probability, Some(seed))
}

impl RandomSample {
    fn new(probability: f64, seed: Option<u64>) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::InvalidProbability(probability));
        }
        Ok(Self { probability, seed })
    }
}

pub struct RandomSampleReducer<R> {
    next: R,
    probability: f64,
    rng: StdRng,
}

impl<R> Transducer<R> for RandomSample {
    type Output = RandomSampleReducer<R>;

    fn apply(&self, next: R) -> Self::Output {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomSampleReducer {
            next,
            probability: self.probability,
            rng,
        }
    }
}

impl<T, R: Reducer<T>> Reducer<T> for RandomSampleReducer<R> {
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if self.rng.gen_bool(self.probability) {
            self.next.reduce(acc, item)
        } else {
            Step::Continue(acc)
        }
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.next.complete(acc)
    }
}
