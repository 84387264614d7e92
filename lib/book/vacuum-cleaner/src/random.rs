/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

use std::collections::VecDeque;

use rand::SeedableRng;

pub type Rng = rand_pcg::Pcg64;

/// Create the generator used by simulations, seeded for reproducible runs.
pub fn seeded(seed: u64) -> Rng {
    Rng::seed_from_u64(seed)
}

/// Uniform randomness as the environments and agents consume it.
///
/// Every `rand::Rng` is a RandomSource. Tests substitute a [`ScriptedSource`] to hit exact
/// probability thresholds.
pub trait RandomSource {
    /// A value in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// An index in `0..len`. `len` must not be zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng> RandomSource for R {
    fn uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty range");
        self.gen_range(0..len)
    }
}

/// Pick one element uniformly.
pub fn choose<'a, T, R: RandomSource + ?Sized>(items: &'a [T], rng: &mut R) -> &'a T {
    &items[rng.index(items.len())]
}

/// Replays fixed draws in order. Meant for tests only: it panics once a queue runs dry, or on a
/// draw outside the requested range, so a test also catches extra draws it did not expect.
/// Simulations should use a [`Rng`] from [`seeded`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    uniforms: VecDeque<f64>,
    indices: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(uniforms: Vec<f64>, indices: Vec<usize>) -> Self {
        Self {
            uniforms: uniforms.into(),
            indices: indices.into(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.uniforms.is_empty() && self.indices.is_empty()
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self) -> f64 {
        let value = self
            .uniforms
            .pop_front()
            .expect("scripted source ran out of uniform draws");
        assert!((0.0..1.0).contains(&value), "uniform draw {} outside [0, 1)", value);
        value
    }

    fn index(&mut self, len: usize) -> usize {
        let index = self
            .indices
            .pop_front()
            .expect("scripted source ran out of index draws");
        assert!(index < len, "scripted index {} out of range 0..{}", index, len);
        index
    }
}
