use crate::PackError;
use crate::entities::Canvas;
use crate::geometry::primitives::PxRect;
use crate::packer::{MaxRectsPacker, PackReport};
use log::{debug, info};

/// Searches the largest character height for which a packing attempt still succeeds.
///
/// The search keeps a bracket `(lo, hi)`: `lo` is the largest height known to fit (0 at the start,
/// trivially), `hi` the smallest height known, or assumed, not to fit (`max_height + 1` at the start).
/// While no attempt has failed, the distance probed above `lo` doubles after every success.
/// After the first failure, the bracket is bisected until no height lies strictly inside it.
///
/// Feasibility must be monotonically non-increasing in the height, this is not verified.
#[derive(Clone, Copy, Debug)]
pub struct AutoSizer {
    max_height: u32,
}

/// Outcome of a successful search
#[derive(Clone, Debug)]
pub struct SizeSearch<T> {
    /// Largest height that fits
    pub height: u32,
    /// Result of the attempt at `height`
    pub outcome: T,
    pub n_attempts: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SearchState {
    /// Moving upward while attempts succeed, `step` above the last success
    Probing { step: u64 },
    /// Narrowing a bracket with a known failure on top
    Bisecting,
}

impl AutoSizer {
    pub fn new(max_height: u32) -> Self {
        AutoSizer { max_height }
    }

    /// Heights are bounded by the canvas: no item can be taller than the canvas it is placed on.
    pub fn for_canvas(canvas: &Canvas) -> Self {
        AutoSizer::new(canvas.height())
    }

    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Runs `attempt` for a sequence of candidate heights and returns the largest height it succeeded for.
    ///
    /// [`PackError::Infeasible`] marks a candidate as too large, any other error aborts the search.
    /// Fails with [`PackError::NoFeasibleSize`] if not even a height of 1 succeeds.
    pub fn search<T>(
        &self,
        mut attempt: impl FnMut(u32) -> Result<T, PackError>,
    ) -> Result<SizeSearch<T>, PackError> {
        let mut lo: u64 = 0;
        let mut hi: u64 = self.max_height as u64 + 1;
        let mut best = None;
        let mut state = SearchState::Probing { step: 1 };
        let mut n_attempts = 0;

        while lo + 1 < hi {
            let candidate = match state {
                SearchState::Probing { step } => u64::min(lo + step, hi - 1),
                SearchState::Bisecting => lo + (hi - lo) / 2,
            };
            debug_assert!(lo < candidate && candidate < hi);
            n_attempts += 1;

            match attempt(candidate as u32) {
                Ok(outcome) => {
                    debug!("[AUTO] height {candidate} fits");
                    lo = candidate;
                    best = Some(outcome);
                    if let SearchState::Probing { step } = state {
                        state = SearchState::Probing { step: step * 2 };
                    }
                }
                Err(PackError::Infeasible { n_placed, n_items }) => {
                    debug!("[AUTO] height {candidate} does not fit ({n_placed}/{n_items} items placed)");
                    hi = candidate;
                    state = SearchState::Bisecting;
                }
                Err(err) => return Err(err),
            }
        }

        match best {
            Some(outcome) => {
                info!("[AUTO] largest fitting height: {lo} (after {n_attempts} attempts)");
                Ok(SizeSearch {
                    height: lo as u32,
                    outcome,
                    n_attempts,
                })
            }
            None => Err(PackError::NoFeasibleSize),
        }
    }

    /// Searches the largest height for which the items produced by `build_items` pack with `packer`.
    /// The item set is rebuilt from scratch for every candidate height.
    pub fn search_items(
        &self,
        packer: &MaxRectsPacker,
        mut build_items: impl FnMut(u32) -> Vec<PxRect>,
    ) -> Result<SizeSearch<(Vec<PxRect>, PackReport)>, PackError> {
        self.search(|height| {
            let mut items = build_items(height);
            let report = packer.pack(&mut items)?;
            Ok((items, report))
        })
    }
}
