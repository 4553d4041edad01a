//! Process-wide, lazily-built accessors for the three worked steps (§9
//! design note: "most natural implementation loads or generates these
//! tables once per process and keeps them alive for the duration"; §5:
//! "constructed lazily on first use *per block*"), in the teacher's
//! `lazy_static!` idiom (`geodic-kociemba`'s `solver::solve`'s
//! `SOLVERTABLES`). Each accessor below is its own independent singleton:
//! calling [`dlb_222`] never forces [`dl_223`]'s or [`f2l_minus_1`]'s much
//! larger tables to be generated or loaded.
//! `blocks::dlb_222_step`/`dl_223_step`/`f2l_minus_1_step` remain available
//! directly for callers who want explicit, fallible construction instead.

use crate::blocks::{dl_223_step, dlb_222_step, f2l_minus_1_step};
use crate::step::{OptimalStep, SplitStep};

/// The DLB 2x2x2 step, built on first use and cached for the rest of the
/// process's lifetime. Panics if the underlying tables fail to generate or
/// load (a convenience singleton has nowhere to surface that to its caller;
/// use [`crate::blocks::dlb_222_step`] directly for `Result`-based handling).
pub fn dlb_222() -> &'static OptimalStep {
    lazy_static! {
        static ref STEP: OptimalStep =
            dlb_222_step().expect("failed to build/load DLB_222 tables");
    }
    &STEP
}

/// The DL 2x2x3 step, built on first use and cached for the rest of the
/// process's lifetime. See [`dlb_222`] for the panic contract.
pub fn dl_223() -> &'static OptimalStep {
    lazy_static! {
        static ref STEP: OptimalStep = dl_223_step().expect("failed to build/load DL_223 tables");
    }
    &STEP
}

/// The F2L-1 split step, built on first use and cached for the rest of the
/// process's lifetime. See [`dlb_222`] for the panic contract.
pub fn f2l_minus_1() -> &'static SplitStep {
    lazy_static! {
        static ref STEP: SplitStep =
            f2l_minus_1_step().expect("failed to build/load F2L-1 tables");
    }
    &STEP
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Step;

    #[test]
    fn dlb_222_session_step_solves_an_empty_scramble() {
        let step = dlb_222();
        let root = step.initialize(&[]);
        let solutions = step.solve(root, 4, 0);
        assert!(!solutions.is_empty());
        assert_eq!(solutions[0].depth, 0);
    }
}
