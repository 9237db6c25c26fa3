//! Catalog digests on the rayon pool. Harnesses share nothing, so every entry
//! runs as an independent job.

use rayon::prelude::*;

use crate::catalog::{self, Visitor, ENTRY_NAMES};
use crate::error::HashResult;
use crate::harness::Harness;
use crate::output::Output;
use crate::traits::Algorithm;

type Job = Box<dyn FnOnce() -> HashResult<Output> + Send>;

struct Jobs {
    len: usize,
    jobs: Vec<(&'static str, HashResult<Job>)>,
}

impl Visitor for Jobs {
    fn visit<A: Algorithm>(&mut self, algorithm: A) {
        let name = algorithm.name();
        let prepared = Harness::new(algorithm, self.len)
            .map(|harness| Box::new(move || harness.digest_once()) as Job);
        self.jobs.push((name, prepared));
    }
}

/// Parallel counterpart of [`catalog::digest_all`]; results keep catalog order.
pub fn digest_all_parallel(len: usize) -> Vec<(&'static str, HashResult<Output>)> {
    let mut jobs = Jobs {
        len,
        jobs: Vec::with_capacity(ENTRY_NAMES.len()),
    };
    catalog::visit(&mut jobs);
    log::debug!("digesting {} entries on {} threads", jobs.jobs.len(), rayon::current_num_threads());

    jobs.jobs
        .into_par_iter()
        .map(|(name, prepared)| (name, prepared.and_then(|job| job())))
        .collect()
}
