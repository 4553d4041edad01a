use criterion::{criterion_group, criterion_main, Criterion};

use blockcube::cubie::{CubieCube, ELEMENTARY_TRANSFORMATIONS};
use blockcube::moves::Move::*;
use blockcube::multistep::multi_step_solve;
use blockcube::session::{dl_223, dlb_222};
use blockcube::step::{ErasedStep, Step};

fn scrambled() -> CubieCube {
    let mut cc = CubieCube::default();
    for m in [F2, R, U, R3, D2, L, B3] {
        cc.apply(&ELEMENTARY_TRANSFORMATIONS[m as usize]);
    }
    cc
}

fn cc_apply(c: &mut Criterion) {
    c.bench_function("CubieCube::apply", |b| {
        let mut cc = CubieCube::default();
        b.iter(|| cc.apply(&ELEMENTARY_TRANSFORMATIONS[R as usize]));
    });
}

fn cc_inverse(c: &mut Criterion) {
    let cc = scrambled();
    c.bench_function("CubieCube::inverse", |b| b.iter(|| cc.inverse()));
}

fn bench_dlb_222_step(c: &mut Criterion) {
    let step = dlb_222();
    let cc = scrambled();
    c.bench_function("OptimalStep::solve DLB_222", |b| {
        b.iter(|| {
            let root = step.initialize_from_cubie(&cc);
            step.solve(root, 10, 0)
        })
    });
}

fn bench_multistep(c: &mut Criterion) {
    let step1 = dlb_222();
    let step2 = dl_223();
    let cc = scrambled();
    let steps: Vec<&dyn ErasedStep> = vec![step1, step2];
    c.bench_function("multi_step_solve DLB_222 -> DL_223", |b| {
        b.iter(|| multi_step_solve(&steps, &[false, false], &cc, 18, 20, 0))
    });
}

criterion_group!(
    benches,
    cc_apply,
    cc_inverse,
    bench_dlb_222_step,
    bench_multistep
);
criterion_main!(benches);
