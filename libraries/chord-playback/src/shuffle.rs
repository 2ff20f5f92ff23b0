//! Shuffle queue generation
//!
//! A shuffle pass is a uniform (Fisher-Yates) permutation of every track
//! index except the one currently playing, consumed from the front. The
//! queue is rebuilt lazily whenever it runs dry, so each pass visits every
//! other track exactly once before repeats become possible.

use rand::seq::SliceRandom;
use rand::thread_rng;
use std::collections::VecDeque;

/// Build a shuffled queue of all indices below `len`, excluding `exclude`
pub fn build_queue(len: usize, exclude: Option<usize>) -> VecDeque<usize> {
    let mut indices: Vec<usize> = (0..len).filter(|i| Some(*i) != exclude).collect();

    let mut rng = thread_rng();
    indices.shuffle(&mut rng);

    indices.into()
}
