//! Table-driven construction tests.
//!
//! Each case supplies a dimension and three optional diagonals, and either expects the
//! constructor to fail with a specific error kind or to produce a matrix with the given
//! band storage and dense equivalent. Successful cases are checked four ways: shape,
//! bandwidth, backing storage, and element-wise equality against the dense matrix.

use anyhow::{Result, anyhow, ensure};
use faer::{Mat, mat};
use tridiag::{Banded, Diagonal, ErrorKind, Matrix, TridiagonalMatrix, equal};

enum Expected {
    Ok {
        dl: Vec<f64>,
        d: Vec<f64>,
        du: Vec<f64>,
        dense: Mat<f64>,
    },
    Err(ErrorKind),
}

struct Case {
    n: usize,
    dl: Option<Vec<f64>>,
    d: Option<Vec<f64>>,
    du: Option<Vec<f64>>,
    expected: Expected,
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            n: 1,
            dl: None,
            d: Some(vec![1.2]),
            du: None,
            expected: Expected::Ok {
                dl: vec![],
                d: vec![1.2],
                du: vec![],
                dense: mat![[1.2]],
            },
        },
        Case {
            n: 1,
            dl: Some(vec![]),
            d: Some(vec![1.2]),
            du: Some(vec![]),
            expected: Expected::Ok {
                dl: vec![],
                d: vec![1.2],
                du: vec![],
                dense: mat![[1.2]],
            },
        },
        Case {
            n: 4,
            dl: Some(vec![1.2, 2.3, 3.4]),
            d: Some(vec![4.5, 5.6, 6.7, 7.8]),
            du: Some(vec![8.9, 9.0, 0.1]),
            expected: Expected::Ok {
                dl: vec![1.2, 2.3, 3.4],
                d: vec![4.5, 5.6, 6.7, 7.8],
                du: vec![8.9, 9.0, 0.1],
                dense: mat![
                    [4.5, 8.9, 0.0, 0.0],
                    [1.2, 5.6, 9.0, 0.0],
                    [0.0, 2.3, 6.7, 0.1],
                    [0.0, 0.0, 3.4, 7.8],
                ],
            },
        },
        Case {
            n: 4,
            dl: None,
            d: None,
            du: None,
            expected: Expected::Ok {
                dl: vec![0.0; 3],
                d: vec![0.0; 4],
                du: vec![0.0; 3],
                dense: Mat::zeros(4, 4),
            },
        },
        // Each missing diagonal is zero-filled on its own, even when the others are given.
        Case {
            n: 1,
            dl: Some(vec![]),
            d: None,
            du: Some(vec![]),
            expected: Expected::Ok {
                dl: vec![],
                d: vec![0.0],
                du: vec![],
                dense: mat![[0.0]],
            },
        },
        Case {
            n: 0,
            dl: None,
            d: None,
            du: None,
            expected: Expected::Err(ErrorKind::InvalidDimension { n: 0 }),
        },
        Case {
            n: 0,
            dl: Some(vec![]),
            d: Some(vec![]),
            du: Some(vec![]),
            expected: Expected::Err(ErrorKind::InvalidDimension { n: 0 }),
        },
        Case {
            n: 1,
            dl: Some(vec![1.2]),
            d: None,
            du: None,
            expected: Expected::Err(ErrorKind::InvalidDiagonalLength {
                diagonal: Diagonal::Sub,
                expected: 0,
                actual: 1,
            }),
        },
        Case {
            n: 1,
            dl: None,
            d: Some(vec![1.2, 2.3]),
            du: None,
            expected: Expected::Err(ErrorKind::InvalidDiagonalLength {
                diagonal: Diagonal::Main,
                expected: 1,
                actual: 2,
            }),
        },
        Case {
            n: 4,
            dl: Some(vec![1.2]),
            d: None,
            du: None,
            expected: Expected::Err(ErrorKind::InvalidDiagonalLength {
                diagonal: Diagonal::Sub,
                expected: 3,
                actual: 1,
            }),
        },
        Case {
            n: 4,
            dl: Some(vec![1.2, 2.3, 3.4]),
            d: Some(vec![4.5, 5.6, 6.7, 7.8, 1.2]),
            du: Some(vec![8.9, 9.0, 0.1]),
            expected: Expected::Err(ErrorKind::InvalidDiagonalLength {
                diagonal: Diagonal::Main,
                expected: 4,
                actual: 5,
            }),
        },
        Case {
            n: 3,
            dl: None,
            d: Some(vec![1.0, 2.0, 3.0]),
            du: Some(vec![4.0, 5.0, 6.0]),
            expected: Expected::Err(ErrorKind::InvalidDiagonalLength {
                diagonal: Diagonal::Super,
                expected: 2,
                actual: 3,
            }),
        },
    ]
}

#[test]
fn test_new_tridiagonal_cases() -> Result<()> {
    for (i, case) in cases().into_iter().enumerate() {
        let result = TridiagonalMatrix::new(case.n, case.dl, case.d, case.du);

        let (t, dl, d, du, dense) = match (result, case.expected) {
            (Err(err), Expected::Err(kind)) => {
                ensure!(
                    err.kind() == &kind,
                    "Case {i}: unexpected error: got={err}, want={kind}"
                );
                continue;
            }
            (Err(err), Expected::Ok { .. }) => {
                return Err(anyhow!("Case {i}: unexpected error: {err}"));
            }
            (Ok(_), Expected::Err(kind)) => {
                return Err(anyhow!("Case {i}: expected error: {kind}"));
            }
            (Ok(t), Expected::Ok { dl, d, du, dense }) => (t, dl, d, du, dense),
        };

        let (rows, cols) = t.dims();
        ensure!(
            rows == case.n && cols == case.n,
            "Case {i}: unexpected dims: got={rows}x{cols} want={n}x{n}",
            n = case.n
        );

        let (kl, ku) = t.bandwidth();
        ensure!(
            kl == 1 && ku == 1,
            "Case {i}: unexpected bandwidth: got={kl},{ku} want=1,1"
        );

        let raw = t.raw();
        ensure!(
            raw.dl == dl.as_slice() && raw.d == d.as_slice() && raw.du == du.as_slice(),
            "Case {i}: unexpected storage: got={raw:?}"
        );

        let want = TridiagonalMatrix::new(case.n, Some(dl), Some(d), Some(du))?;
        ensure!(t == want, "Case {i}: unexpected value: got={t:?}, want={want:?}");
        ensure!(
            equal(&t, &want),
            "Case {i}: unexpected value via equal: got={t:?}, want={want:?}"
        );
        ensure!(
            equal(&t, &dense),
            "Case {i}: unexpected value via equal(tridiagonal, dense): got={t:?}, want={dense:?}"
        );
    }
    Ok(())
}

#[test]
fn test_absent_diagonals_match_explicit_zeros() -> Result<()> {
    for n in 1..=6 {
        let absent = TridiagonalMatrix::new(n, None, None, None)?;
        let explicit = TridiagonalMatrix::new(
            n,
            Some(vec![0.0; n - 1]),
            Some(vec![0.0; n]),
            Some(vec![0.0; n - 1]),
        )?;
        ensure!(equal(&absent, &explicit), "n={n}: absent != explicit zeros");
        ensure!(
            equal(&absent, &Mat::<f64>::zeros(n, n)),
            "n={n}: absent != dense zeros"
        );
    }
    Ok(())
}

#[test]
fn test_dense_of_different_dimension_is_not_equal() -> Result<()> {
    let t = TridiagonalMatrix::new(2, Some(vec![1.0]), Some(vec![2.0, 3.0]), Some(vec![4.0]))?;
    let bigger = mat![[2.0, 4.0, 0.0], [1.0, 3.0, 0.0], [0.0, 0.0, 0.0]];
    let smaller = mat![[2.0]];
    ensure!(!equal(&t, &bigger), "2x2 compared equal to 3x3");
    ensure!(!equal(&t, &smaller), "2x2 compared equal to 1x1");
    ensure!(equal(&t, &mat![[2.0, 4.0], [1.0, 3.0]]), "2x2 dense mismatch");
    Ok(())
}

#[test]
fn test_dense_with_entry_off_the_band_is_not_equal() -> Result<()> {
    let t = TridiagonalMatrix::symmetric(vec![1.0, 1.0, 1.0], vec![0.5, 0.5])?;
    let mut dense = t.to_dense();
    ensure!(equal(&t, &dense), "dense expansion differs");
    dense[(0, 2)] = 1e-300;
    ensure!(!equal(&t, &dense), "off-band entry ignored");
    Ok(())
}
