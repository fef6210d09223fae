//! Random arrangement of tiles into a seamless demo texture

use crate::io::error::{Result, invariant_violation};
use crate::wang::codes::{EdgeCodes, EdgeColor};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick a tile for every cell of a `columns` × `rows` texture, row-major
///
/// The first cell takes a tile with a yellow top. Every later cell takes a
/// tile chosen uniformly among those whose left code equals the right code
/// of its left neighbor and whose top code equals the bottom code of its
/// upper neighbor.
///
/// # Errors
///
/// Returns an error if some cell has no compatible tile
pub fn demo_ordering<R: Rng + ?Sized>(
    codes: &[EdgeCodes],
    columns: usize,
    rows: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let mut order: Vec<usize> = Vec::with_capacity(columns * rows);

    for row in 0..rows {
        for column in 0..columns {
            let left = (column > 0)
                .then(|| order.last().and_then(|&index| codes.get(index)))
                .flatten();
            let above = (row > 0)
                .then(|| {
                    order
                        .get((row - 1) * columns + column)
                        .and_then(|&index| codes.get(index))
                })
                .flatten();

            let candidates: Vec<usize> = codes
                .iter()
                .enumerate()
                .filter(|(_, candidate)| match (left, above) {
                    (None, None) => candidate.top == EdgeColor::Yellow,
                    (Some(left), None) => left.fits_left_of(candidate),
                    (None, Some(above)) => above.fits_above(candidate),
                    (Some(left), Some(above)) => {
                        left.fits_left_of(candidate) && above.fits_above(candidate)
                    }
                })
                .map(|(index, _)| index)
                .collect();

            let chosen = candidates.choose(rng).copied().ok_or_else(|| {
                invariant_violation(
                    "demo ordering",
                    None,
                    &format!("no compatible tile for cell ({column}, {row})"),
                )
            })?;
            order.push(chosen);
        }
    }

    Ok(order)
}
