// Procedural rainbow palette for pie slices
use rand::Rng;
use std::f64::consts::TAU;

/// Phase offsets (radians) staggering the sine generators of the three color
/// channels. One random draw per render; everything after it is deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phases {
    pub phase1: f64,
    pub phase2: f64,
    pub phase3: f64,
}

impl Phases {
    /// Derive all three offsets from a single base phase. Injectable for
    /// reproducible palettes.
    pub fn new(phase1: f64) -> Self {
        let phase2 = phase1 + 2.0;
        let phase3 = phase2 + 2.0;
        Self {
            phase1,
            phase2,
            phase3,
        }
    }

    /// Base phase drawn uniformly from [0, 2π).
    pub fn random() -> Self {
        Self::new(rand::thread_rng().gen_range(0.0..TAU))
    }
}

/// RGB triple for one slice. Channels are always in [1, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SliceColor {
    fn channel(i: usize, phase: f64) -> u8 {
        // sin ∈ [-1, 1], so floor(sin * 127) + 128 ∈ [1, 255]
        (((0.5 * i as f64 + phase).sin() * 127.0).floor() as i32 + 128) as u8
    }

    /// Color for data index `i` under the given phases.
    pub fn at(i: usize, phases: &Phases) -> Self {
        Self {
            r: Self::channel(i, phases.phase1),
            g: Self::channel(i, phases.phase2),
            b: Self::channel(i, phases.phase3),
        }
    }

    /// Fill color string, alpha 0.2.
    pub fn fill(&self) -> String {
        format!("rgba({},{},{},0.2)", self.r, self.g, self.b)
    }

    /// Border color string, full alpha.
    pub fn border(&self) -> String {
        format!("rgba({},{},{},1)", self.r, self.g, self.b)
    }
}

/// One color per data index, in index order.
pub fn rainbow_palette(len: usize, phases: &Phases) -> Vec<SliceColor> {
    (0..len).map(|i| SliceColor::at(i, phases)).collect()
}
