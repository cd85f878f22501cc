use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallmat::{ClosedForm, Covariance, Matrix, SymmetricEigen, Vector};

const TOL: f64 = 1e-9;

fn random<const N: usize>(rng: &mut StdRng) -> Matrix<f64, N, N> {
    Matrix::from_fn(|_, _| rng.gen_range(-10.0..10.0))
}

fn random_symmetric<const N: usize>(rng: &mut StdRng) -> Matrix<f64, N, N> {
    let a = random::<N>(rng);
    a + a.transpose()
}

/// Diagonally dominant, so comfortably invertible.
fn random_well_conditioned<const N: usize>(rng: &mut StdRng) -> Matrix<f64, N, N> {
    random::<N>(rng) + Matrix::<f64, N, N>::eye() * 50.0
}

fn assert_near<const N: usize>(a: &Matrix<f64, N, N>, b: &Matrix<f64, N, N>, tol: f64, msg: &str) {
    assert!(a.epsilon_eq(b, tol), "{}:\n{}\nvs\n{}", msg, a, b);
}

// ── Arithmetic identities ───────────────────────────────────────────

#[test]
fn transpose_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..20 {
        let a = random::<4>(&mut rng);
        assert_eq!(a.transpose().transpose(), a);
        let mut b = a;
        b.transpose_in_place();
        b.transpose_in_place();
        assert_eq!(b, a);
    }
}

#[test]
fn identity_is_neutral() {
    let mut rng = StdRng::seed_from_u64(2);
    let a = random::<3>(&mut rng);
    let id = Matrix::<f64, 3, 3>::eye();
    assert_eq!(a * id, a);
    assert_eq!(id * a, a);
}

#[test]
fn adding_the_negation_gives_zero() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = random::<4>(&mut rng);
    assert_eq!(a + (-a), Matrix::zeros());

    let mut b = a;
    b.sub_matrix(&a);
    assert_eq!(b, Matrix::zeros());
}

#[test]
fn aliased_products_match_temporaries() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..10 {
        let a = random::<3>(&mut rng);
        let b = random::<3>(&mut rng);

        let mut m = a;
        m.mul_matrix(&b);
        assert_eq!(m, a * b);

        let mut m = a;
        m.mul_transpose_right_assign(&b);
        assert_eq!(m, a * b.transpose());

        let mut m = a;
        m.mul_transpose_both_assign(&b);
        assert_eq!(m, a.transpose() * b.transpose());

        // Mᵀ·Mᵀ = (M·M)ᵀ
        let mut m = a;
        let copy = m;
        m.mul_transpose_both_assign(&copy);
        assert_eq!(m, (a * a).transpose());
    }
}

#[test]
fn scalar_operations_compose() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = random::<2>(&mut rng);
    let mut m = a;
    m += 3.0;
    m -= 3.0;
    assert_near(&m, &a, 1e-12, "add then sub scalar");

    let mut dst = Matrix::zeros();
    dst.set_scaled(4.0, &a);
    assert_near(&(dst / 4.0), &a, 1e-12, "scale then divide");
}

#[test]
fn row_and_column_buffers() {
    let mut rng = StdRng::seed_from_u64(6);
    let a = random::<4>(&mut rng);
    let mut b = Matrix::<f64, 4, 4>::zeros();
    let mut buf = [0.0; 4];
    for i in 0..4 {
        a.get_row(i, &mut buf);
        b.set_row_from_slice(i, &buf);
    }
    assert_eq!(a, b);

    let mut c = Matrix::<f64, 4, 4>::zeros();
    for j in 0..4 {
        a.get_column(j, &mut buf);
        c.set_column_from_slice(j, &buf);
    }
    assert_eq!(a, c);
}

// ── Determinant and inverse ─────────────────────────────────────────

#[test]
fn determinant_is_multiplicative() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10 {
        let a = random::<4>(&mut rng);
        let b = random::<4>(&mut rng);
        let lhs = (a * b).determinant();
        let rhs = a.determinant() * b.determinant();
        let scale = (a.frobenius_norm() * b.frobenius_norm()).powi(4);
        assert!((lhs - rhs).abs() <= 1e-12 * scale);

        let a3 = random::<3>(&mut rng);
        assert!((a3.transpose().determinant() - a3.determinant()).abs() < 1e-9);
    }
}

#[test]
fn determinant_matches_expanded_polynomial() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..50 {
        let m = random::<2>(&mut rng);
        let (a, b, c, d) = (m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]);
        assert!((m.determinant() - (a * d - b * c)).abs() < 1e-12);

        let m = random::<3>(&mut rng);
        let e = |i: usize, j: usize| m[(i, j)];
        let sarrus = e(0, 0) * e(1, 1) * e(2, 2)
            + e(0, 1) * e(1, 2) * e(2, 0)
            + e(0, 2) * e(1, 0) * e(2, 1)
            - e(0, 2) * e(1, 1) * e(2, 0)
            - e(0, 0) * e(1, 2) * e(2, 1)
            - e(0, 1) * e(1, 0) * e(2, 2);
        assert!((m.determinant() - sarrus).abs() < 1e-10);

        // Laplace expansion along the first row
        let m = random::<4>(&mut rng);
        let mut laplace = 0.0;
        for k in 0..4 {
            let minor = Matrix::<f64, 3, 3>::from_fn(|i, j| m[(i + 1, if j < k { j } else { j + 1 })]);
            let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
            laplace += sign * m[(0, k)] * minor.determinant();
        }
        assert!((m.determinant() - laplace).abs() < 1e-8);
    }
}

#[test]
fn inverse_round_trips() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..10 {
        let a2 = random_well_conditioned::<2>(&mut rng);
        assert_near(&(a2 * a2.inverse()), &Matrix::eye(), TOL, "2x2");

        let a3 = random_well_conditioned::<3>(&mut rng);
        assert_near(&(a3 * a3.inverse()), &Matrix::eye(), TOL, "3x3");

        let a4 = random_well_conditioned::<4>(&mut rng);
        assert_near(&(a4.inverse() * a4), &Matrix::eye(), TOL, "4x4");

        let mut twice = a4;
        twice.invert();
        twice.invert();
        assert_near(&twice, &a4, 1e-9, "double inverse");
    }
}

#[test]
fn singular_inverse_is_permissive() {
    let rank_one = Vector::from_array([1.0, 2.0, 3.0]).outer(&Vector::from_array([4.0, 5.0, 6.0]));
    assert_eq!(rank_one.determinant(), 0.0);
    let inv = rank_one.inverse();
    assert!(inv.has_non_finite());
    assert!(rank_one.try_inverse().is_err());
}

trait NotFinite {
    fn has_non_finite(&self) -> bool;
}

impl<const N: usize> NotFinite for Matrix<f64, N, N> {
    fn has_non_finite(&self) -> bool {
        (0..N).any(|i| (0..N).any(|j| !self[(i, j)].is_finite()))
    }
}

// ── Orthonormalization ──────────────────────────────────────────────

#[test]
fn orthonormalize_random() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..20 {
        let mut m = random_well_conditioned::<3>(&mut rng);
        m.orthonormalize();
        assert_near(&(m.transpose() * m), &Matrix::eye(), 1e-12, "QᵀQ");
        assert!((m.determinant() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn cp_repairs_a_drifted_rotation() {
    let (s, c) = 0.3_f64.sin_cos();
    let rot = Matrix::new([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]);
    let drifted = rot * 1.001;
    let mut m = Matrix::zeros();
    m.set_normalized_cp(&drifted);
    assert_near(&m, &rot, 1e-12, "normalize_cp");
}

// ── Eigen-decomposition ─────────────────────────────────────────────

#[test]
fn eigen_pairs_of_random_symmetric() {
    let mut rng = StdRng::seed_from_u64(10);
    for _ in 0..20 {
        let a = random_symmetric::<3>(&mut rng);
        let eig = SymmetricEigen::new(&a);
        assert!(eig.converged());

        let v = *eig.eigenvectors();
        let lambda = Matrix::from_diag(&Vector::from_array(*eig.eigenvalues()));
        assert_near(&(a * v), &(v * lambda), 1e-9, "A·V = V·Λ");
        assert_near(&v.mul_transpose_left(&v), &Matrix::eye(), 1e-12, "VᵀV = I");
    }
}

#[test]
fn eigen_reconstructs_two_by_two() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let a = random_symmetric::<2>(&mut rng);
        let eig = a.eig_symmetric();
        let v = *eig.eigenvectors();
        let lambda = Matrix::from_diag(&Vector::from_array(*eig.eigenvalues()));
        assert_near(&(v * lambda).mul_transpose_right(&v), &a, 1e-9, "V·Λ·Vᵀ");
    }
}

// ── Covariance ──────────────────────────────────────────────────────

#[test]
fn covariance_is_symmetric_positive_definite() {
    let mut rng = StdRng::seed_from_u64(12);
    let pts: Vec<[f64; 3]> = (0..50)
        .map(|_| {
            [
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(0.0..2.0),
            ]
        })
        .collect();
    let cov = Covariance::new(&pts).unwrap();
    assert!(cov.matrix().is_symmetric());
    assert!(cov.matrix().determinant() > 0.0);

    let eig = cov.matrix().eig_symmetric();
    assert!(eig.eigenvalues().iter().all(|&l| l > 0.0));
}

#[test]
fn covariance_is_translation_invariant() {
    let mut rng = StdRng::seed_from_u64(13);
    let pts: Vec<(f64, f64)> = (0..30)
        .map(|_| (rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0)))
        .collect();
    let shifted: Vec<(f64, f64)> = pts.iter().map(|&(x, y)| (x + 100.0, y - 40.0)).collect();

    let a = Covariance::new(&pts).unwrap();
    let b = Covariance::new(&shifted).unwrap();
    assert_near(a.matrix(), b.matrix(), 1e-9, "shifted covariance");
    assert!((b.mean().x() - a.mean().x() - 100.0).abs() < 1e-9);
    assert!((b.mean().y() - a.mean().y() + 40.0).abs() < 1e-9);
}
