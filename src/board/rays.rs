//! Precomputed queen rays.
//!
//! `ray(sq, dir)` lists the squares walked from `sq` in direction `dir`,
//! nearest first, up to the board edge. Move enumeration walks these slices
//! instead of recomputing coordinates for every step.

use once_cell::sync::Lazy;

use super::types::{Square, BOARD_SIZE, DIRECTIONS, NUM_SQUARES};

const MAX_RAY_LEN: usize = BOARD_SIZE - 1;

#[derive(Clone, Copy)]
struct Ray {
    squares: [Square; MAX_RAY_LEN],
    len: u8,
}

static RAYS: Lazy<Box<[[Ray; 8]; NUM_SQUARES]>> = Lazy::new(|| {
    let empty = Ray {
        squares: [Square::ALL[0]; MAX_RAY_LEN],
        len: 0,
    };
    let mut rays = Box::new([[empty; 8]; NUM_SQUARES]);
    for sq in Square::ALL {
        for dir in 0..DIRECTIONS.len() {
            let ray = &mut rays[sq.index()][dir];
            let mut steps = 1;
            while let Some(to) = sq.queen_move(dir, steps) {
                ray.squares[usize::from(ray.len)] = to;
                ray.len += 1;
                steps += 1;
            }
        }
    }
    rays
});

/// Squares reached from `from` in direction `dir`, nearest first.
#[inline]
pub(crate) fn ray(from: Square, dir: usize) -> &'static [Square] {
    let ray = &RAYS[from.index()][dir];
    &ray.squares[..usize::from(ray.len)]
}
