/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use num_complex::Complex64;
use pwdft_rs::atoms::Vector3D;
use pwdft_rs::basis::{BasisError, GVectorSet, GridTransform, Lattice, PlaneWaveBasis};
use pwdft_rs::utils::constants::TWO_PI;

#[test]
fn test_reciprocal_lattice_duality() {
    let lattice = Lattice::new(
        Vector3D::new(4.0, 0.0, 0.5),
        Vector3D::new(0.2, 3.0, 0.0),
        Vector3D::new(0.0, 0.1, 5.0),
    )
    .unwrap();

    let b = lattice.reciprocal();
    for (i, bi) in b.iter().enumerate() {
        for (j, aj) in lattice.vectors().iter().enumerate() {
            let expected = if i == j { TWO_PI } else { 0.0 };
            assert_relative_eq!(bi.dot(aj), expected, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_gvector_set_is_ordered_with_dc_first() {
    let lattice = Lattice::orthorhombic(2.0, 3.0, 4.0).unwrap();
    let set = GVectorSet::new(&lattice, [4, 3, 5]);

    assert_eq!(set.len(), 60);
    assert_eq!(set.miller()[set.dc_index()], [0, 0, 0]);
    assert_eq!(set.dc_index(), 0);
    assert_relative_eq!(set.cart()[0].norm(), 0.0, epsilon = 1e-15);

    let norms: Vec<f64> = set.cart().iter().map(|g| g.norm()).collect();
    assert!(norms.windows(2).all(|w| w[0] <= w[1] + 1e-12));
}

#[test]
fn test_transform_round_trip_recovers_coefficients() {
    let lattice = Lattice::cubic(3.0).unwrap();
    let shape = [4, 5, 6];
    let set = GVectorSet::new(&lattice, shape);
    let transform = GridTransform::new(shape).unwrap();

    // deterministic, structureless coefficients
    let coefficients: Vec<Complex64> = (0..set.len())
        .map(|i| {
            let phase = 0.37 * i as f64;
            Complex64::new(phase.sin(), (2.0 * phase).cos())
        })
        .collect();

    let field = transform.g_to_r(&set, &coefficients).unwrap();
    let recovered = transform.r_to_g(&set, &field).unwrap();

    for (original, round_tripped) in coefficients.iter().zip(recovered.iter()) {
        assert_relative_eq!(original.re, round_tripped.re, epsilon = 1e-10);
        assert_relative_eq!(original.im, round_tripped.im, epsilon = 1e-10);
    }
}

#[test]
fn test_dc_delta_transforms_to_constant_field() {
    let basis = PlaneWaveBasis::new(Lattice::cubic(2.0).unwrap(), [4, 4, 4]).unwrap();
    let mut coefficients = vec![Complex64::new(0.0, 0.0); basis.n_gvectors()];
    coefficients[basis.dc_index()] = Complex64::new(2.5, 0.0);

    let field = basis.g_to_r(&coefficients).unwrap();
    for value in field.iter() {
        assert_relative_eq!(value.re, 2.5, epsilon = 1e-12);
        assert_relative_eq!(value.im, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_single_plane_wave_oscillates_on_the_grid() {
    // one pure G along the first axis: field = exp(2πi x / n1)
    let basis = PlaneWaveBasis::new(Lattice::cubic(1.0).unwrap(), [4, 4, 4]).unwrap();
    let index = basis
        .gvectors()
        .miller()
        .iter()
        .position(|m| *m == [1, 0, 0])
        .unwrap();

    let mut coefficients = vec![Complex64::new(0.0, 0.0); basis.n_gvectors()];
    coefficients[index] = Complex64::new(1.0, 0.0);

    let field = basis.g_to_r(&coefficients).unwrap();
    for i in 0..4 {
        let expected = Complex64::from_polar(1.0, TWO_PI * i as f64 / 4.0);
        let actual = field[[i, 0, 0]];
        assert_relative_eq!(actual.re, expected.re, epsilon = 1e-12);
        assert_relative_eq!(actual.im, expected.im, epsilon = 1e-12);
    }
}

#[test]
fn test_mismatched_inputs_are_rejected() {
    let lattice = Lattice::cubic(2.0).unwrap();
    let set = GVectorSet::new(&lattice, [4, 4, 4]);
    let transform = GridTransform::new([4, 4, 4]).unwrap();

    let short = vec![Complex64::new(1.0, 0.0); 10];
    assert!(matches!(
        transform.g_to_r(&set, &short),
        Err(BasisError::CoefficientCountMismatch {
            expected: 64,
            actual: 10,
        })
    ));

    let wrong_shape = ndarray::Array3::zeros((4, 4, 5));
    assert!(matches!(
        transform.r_to_g(&set, &wrong_shape),
        Err(BasisError::GridShapeMismatch { .. })
    ));

    // a set generated for a denser mesh carries frequencies the coarse
    // transform cannot represent
    let dense = GVectorSet::new(&lattice, [8, 8, 8]);
    let coefficients = vec![Complex64::new(1.0, 0.0); dense.len()];
    let coarse = GridTransform::new([4, 4, 4]).unwrap();
    assert!(matches!(
        coarse.g_to_r(&dense, &coefficients),
        Err(BasisError::MillerOutOfRange { .. })
    ));
}

#[test]
fn test_basis_is_shareable_across_holders() {
    use std::sync::Arc;

    let basis = Arc::new(PlaneWaveBasis::new(Lattice::cubic(2.0).unwrap(), [4, 4, 4]).unwrap());
    let other = basis.clone();
    assert_eq!(basis.grid_shape(), other.grid_shape());
    assert!(Arc::ptr_eq(&basis, &other));
}
