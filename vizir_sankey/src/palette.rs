// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target-keyed color assignment.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use peniko::Color;
use peniko::color::palette::css;

/// Fallback color for nodes and links without an assigned color.
pub const NEUTRAL: Color = css::GRAY;

/// The default three-color link palette (blue, red, green).
pub fn default_colors() -> [Color; 3] {
    [
        Color::from_rgb8(0x45, 0x75, 0xb4),
        Color::from_rgb8(0xd7, 0x30, 0x27),
        Color::from_rgb8(0x1a, 0x98, 0x50),
    ]
}

/// What happens when there are more distinct targets than palette entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaletteExhaustion {
    /// Reuse palette entries cyclically; distinct targets may share a color.
    #[default]
    Cycle,
    /// Leave extra targets uncolored so they fall back to [`NEUTRAL`].
    Neutral,
}

/// A list of colors assigned to link targets in first-appearance order.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Colors in assignment order.
    pub colors: Vec<Color>,
    /// Policy for targets beyond `colors.len()`.
    pub exhaustion: PaletteExhaustion,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(default_colors())
    }
}

impl Palette {
    /// Creates a cycling palette from a list of colors.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
            exhaustion: PaletteExhaustion::default(),
        }
    }

    /// Sets the exhaustion policy.
    pub fn with_exhaustion(mut self, exhaustion: PaletteExhaustion) -> Self {
        self.exhaustion = exhaustion;
        self
    }

    /// Returns the color for the `i`-th distinct target, if any.
    pub fn color_for(&self, i: usize) -> Option<Color> {
        let n = self.colors.len();
        if n == 0 {
            return None;
        }
        match self.exhaustion {
            PaletteExhaustion::Cycle => Some(self.colors[i % n]),
            PaletteExhaustion::Neutral => self.colors.get(i).copied(),
        }
    }

    /// Assigns colors to target codes in order of first appearance.
    pub(crate) fn assign_targets(&self, targets: &[usize]) -> HashMap<usize, Color> {
        let mut out = HashMap::new();
        let mut distinct = 0_usize;
        for &target in targets {
            if let Entry::Vacant(slot) = out.entry(target) {
                if let Some(color) = self.color_for(distinct) {
                    slot.insert(color);
                }
                distinct += 1;
            }
        }
        if distinct > self.colors.len() {
            log::warn!(
                "{distinct} distinct targets but only {} palette colors ({:?})",
                self.colors.len(),
                self.exhaustion
            );
        }
        out
    }
}
