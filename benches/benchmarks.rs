/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array3;
use pwdft_rs::atoms::{AtomicPositions, Vector3D};
use pwdft_rs::basis::{Lattice, PlaneWaveBasis};
use pwdft_rs::potential::{build_local_potential_shared, GaussianFormFactor};
use std::sync::Arc;

fn local_potential_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Local Potential");

    let basis = Arc::new(
        PlaneWaveBasis::new(Lattice::cubic(8.0).unwrap(), [24, 24, 24]).unwrap(),
    );
    let positions = AtomicPositions::single(vec![
        Vector3D::new(0.0, 0.0, 0.0),
        Vector3D::new(0.25, 0.25, 0.25),
        Vector3D::new(0.5, 0.5, 0.0),
        Vector3D::new(0.75, 0.25, 0.5),
    ]);
    let factor = Arc::new(GaussianFormFactor::new(-4.0, 0.9));

    group.bench_function("build_24x24x24", |b| {
        b.iter(|| {
            black_box(
                build_local_potential_shared(
                    black_box(&basis),
                    black_box(&positions),
                    factor.clone(),
                )
                .unwrap(),
            )
        })
    });

    let potential = build_local_potential_shared(&basis, &positions, factor).unwrap();
    let input = Array3::from_elem((24, 24, 24), 1.5);
    let mut output = Array3::zeros((24, 24, 24));

    group.bench_function("apply_24x24x24", |b| {
        b.iter(|| {
            potential.apply(black_box(&input), &mut output);
            black_box(output[[0, 0, 0]])
        })
    });

    group.finish();
}

fn band_policy_benchmark(c: &mut Criterion) {
    use pwdft_rs::bands::{AdaptiveBands, BandCountPolicy, ScfSnapshot};

    let mut group = c.benchmark_group("Band Counts");

    let policy = BandCountPolicy::from(AdaptiveBands::new(32, 40));
    let occupations: Vec<Vec<f64>> = (0..64)
        .map(|_| (0..48).map(|i| if i < 32 { 1.0 } else { 1e-9 }).collect())
        .collect();
    let eigenvalues: Vec<Vec<f64>> = (0..64)
        .map(|k| (0..48).map(|i| -2.0 + 0.05 * i as f64 + 1e-4 * k as f64).collect())
        .collect();
    let snapshot = ScfSnapshot::empty()
        .with_occupations(occupations)
        .with_eigenvalues(eigenvalues)
        .with_block_sizes(vec![40; 64]);

    group.bench_function("adaptive_64_kpoints", |b| {
        b.iter(|| black_box(policy.determine_band_counts(black_box(&snapshot))))
    });

    group.finish();
}

criterion_group!(benches, local_potential_benchmark, band_policy_benchmark);
criterion_main!(benches);
