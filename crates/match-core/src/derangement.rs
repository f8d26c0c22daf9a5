//! Derangement Generator
//!
//! Builds a shuffled copy of a sequence with no element left at its original
//! index, drawn uniformly from all such derangements.
//!
//! Uses the Martinez-Panholzer-Prodinger construction: walk the slots from
//! the back, swap each open slot with a random earlier open one, and close the
//! pair as a 2-cycle with the probability that a uniform derangement would.
//! Every slot is visited once, so it finishes in a bounded number of steps.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{MatchError, MatchResult};

/// Return a permutation `p` of `target` with `p[i] != target[i]` for every `i`.
///
/// Fails with `TooShort` for fewer than two items and with `DuplicateItem`
/// when two elements compare equal.
pub fn derange<T, R>(target: &[T], rng: &mut R) -> MatchResult<Vec<T>>
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    if target.len() < 2 {
        return Err(MatchError::TooShort(target.len()));
    }
    if let Some(index) = first_duplicate(target) {
        return Err(MatchError::DuplicateItem(index));
    }

    Ok(derangement_indices(target.len(), rng)
        .into_iter()
        .map(|i| target[i].clone())
        .collect())
}

/// Uniform random derangement of `0..n`, `n >= 2`
fn derangement_indices<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let close_odds = closing_odds(n);
    let mut perm: Vec<usize> = (0..n).collect();
    let mut marked = vec![false; n];
    let mut open = n;
    let mut i = n - 1;

    while open >= 2 {
        if !marked[i] {
            let candidates: Vec<usize> = (0..i).filter(|&j| !marked[j]).collect();
            let Some(&j) = candidates.choose(rng) else {
                break;
            };
            perm.swap(i, j);
            if rng.gen::<f64>() < close_odds[open] {
                marked[j] = true;
                open -= 1;
            }
            open -= 1;
        }
        if i == 0 {
            break;
        }
        i -= 1;
    }
    perm
}

/// `odds[u]` = (u-1) D(u-2) / D(u), D being the derangement numbers
///
/// Computed through the ratio a(u) = D(u-1) / D(u), which stays finite for any
/// `u`: a(2) = 0, a(u) = 1 / ((u-1) (1 + a(u-1))), odds = 1 - (u-1) a(u).
fn closing_odds(n: usize) -> Vec<f64> {
    let mut odds = vec![0.0; n.max(2) + 1];
    let mut ratio = 0.0;
    odds[2] = 1.0;
    for u in 3..=n {
        let k = (u - 1) as f64;
        ratio = 1.0 / (k * (1.0 + ratio));
        odds[u] = 1.0 - k * ratio;
    }
    odds
}

/// Number of positions where `a` and `b` agree
pub fn fixed_points<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x == y).count()
}

fn first_duplicate<T: PartialEq>(items: &[T]) -> Option<usize> {
    (1..items.len()).find(|&i| items[..i].contains(&items[i]))
}
