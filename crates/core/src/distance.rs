//! Hamming distances between equal-length strings.
//!
//! Strings are compared by Unicode scalar value, position by position. Inputs
//! of different length cannot be compared and yield
//! [`DistanceError::LengthMismatch`].
//!
//! Besides the two-string distance, this module compares whole sets of
//! strings (e.g. a list of usernames) as a condensed pairwise vector or a
//! normalized distance matrix.

use rayon::prelude::*;

use crate::errors::DistanceError;

/// Count positions where two equal-length slices differ.
///
/// Returns `LengthMismatch` if the slices differ in length.
pub fn hamming_distance_slices<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize, DistanceError> {
    if a.len() != b.len() {
        return Err(DistanceError::LengthMismatch {
            len1: a.len(),
            len2: b.len(),
        });
    }
    Ok(count_mismatches(a, b))
}

/// Hamming distance between two strings.
///
/// # Examples
///
/// ```
/// use quantbio_core::distance::hamming_distance;
/// use quantbio_core::errors::DistanceError;
///
/// assert_eq!(hamming_distance("karolin", "kathrin"), Ok(3));
/// assert_eq!(
///     hamming_distance("cat", "catering"),
///     Err(DistanceError::LengthMismatch { len1: 3, len2: 8 })
/// );
/// ```
pub fn hamming_distance(a: &str, b: &str) -> Result<usize, DistanceError> {
    // ASCII strings can be compared byte-wise without decoding.
    if a.is_ascii() && b.is_ascii() {
        return hamming_distance_slices(a.as_bytes(), b.as_bytes());
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    hamming_distance_slices(&a, &b)
}

/// Hamming distance divided by the string length (the p-distance).
///
/// Two empty strings are at distance 0.
pub fn p_distance(a: &str, b: &str) -> Result<f64, DistanceError> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let dist = hamming_distance_slices(&a, &b)?;
    if a.is_empty() {
        return Ok(0.0);
    }
    Ok(dist as f64 / a.len() as f64)
}

/// Pairwise Hamming distances between all strings in a set.
///
/// Returns the upper triangle in row-major order: `(0,1), (0,2), ..., (1,2), ...`.
/// Every string must have the length of the first one; the first offender is
/// reported as `LengthMismatch { len1: first_len, len2: offender_len }`.
pub fn pairwise_distances<S: AsRef<str>>(strings: &[S]) -> Result<Vec<usize>, DistanceError> {
    let decoded = decode_equal_length(strings)?;

    let n = decoded.len();
    let mut distances = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            distances.push(count_mismatches(&decoded[i], &decoded[j]));
        }
    }

    Ok(distances)
}

/// Full n×n matrix of normalized (p-) distances between all strings in a set.
///
/// The matrix is symmetric with a zero diagonal. Rows are computed in
/// parallel. An empty set yields an empty matrix; a set of empty strings
/// yields all zeros.
pub fn distance_matrix<S: AsRef<str>>(strings: &[S]) -> Result<Vec<Vec<f64>>, DistanceError> {
    let decoded = decode_equal_length(strings)?;

    let n = decoded.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let length = decoded[0].len() as f64;
    if length == 0.0 {
        return Ok(vec![vec![0.0; n]; n]);
    }

    let matrix: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        0.0
                    } else {
                        count_mismatches(&decoded[i], &decoded[j]) as f64 / length
                    }
                })
                .collect::<Vec<f64>>()
        })
        .collect();

    Ok(matrix)
}

fn decode_equal_length<S: AsRef<str>>(strings: &[S]) -> Result<Vec<Vec<char>>, DistanceError> {
    let decoded: Vec<Vec<char>> = strings
        .iter()
        .map(|s| s.as_ref().chars().collect())
        .collect();

    if let Some(first) = decoded.first() {
        let expected = first.len();
        if let Some(bad) = decoded.iter().find(|s| s.len() != expected) {
            return Err(DistanceError::LengthMismatch {
                len1: expected,
                len2: bad.len(),
            });
        }
    }

    Ok(decoded)
}

/// Mismatch count over the common prefix of two slices.
#[inline]
fn count_mismatches<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let len = a.len().min(b.len());
    let (a, b) = (&a[..len], &b[..len]);

    let mut distance = 0;
    let mut a_chunks = a.chunks_exact(8);
    let mut b_chunks = b.chunks_exact(8);
    for (ca, cb) in a_chunks.by_ref().zip(b_chunks.by_ref()) {
        for k in 0..8 {
            distance += (ca[k] != cb[k]) as usize;
        }
    }

    distance
        + a_chunks
            .remainder()
            .iter()
            .zip(b_chunks.remainder())
            .filter(|(x, y)| x != y)
            .count()
}
