//! False color classification
//!
//! The thresholds and weights were tuned by eye on real passes, not taken from any
//! standard. The IR channel mostly serves to tell clouds from water.

/// Surface type assigned to a pixel by [`FalseColorPalette::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceClass {
    Water,
    /// Cloud, snow or ice, picked out by the IR channel
    Cloud,
    Vegetation,
    /// Desert and bare soil
    Desert,
    /// Whatever the IR check missed: cloud, snow, very dry desert
    Bright,
}

/// Thresholds and channel weights for the false color composite.
#[derive(Debug, Clone, PartialEq)]
pub struct FalseColorPalette {
    /// Visible values below this are water
    pub water_max: u16,
    /// IR values above this are cloud, snow or ice
    pub cloud_ir_min: u16,
    /// Visible values below this are vegetation
    pub vegetation_max: u16,
    /// Visible values up to and including this are desert
    pub desert_max: u16,
    /// Water RGB base level, added to the weighted visible value
    pub water_offset: [f64; 3],
    /// Water RGB weights
    pub water_weight: [f64; 3],
    /// Vegetation RGB weights
    pub vegetation_weight: [f64; 3],
    /// Desert RGB weights
    pub desert_weight: [f64; 3],
}

impl Default for FalseColorPalette {
    fn default() -> Self {
        Self {
            water_max: 13000,
            cloud_ir_min: 35000,
            vegetation_max: 27000,
            desert_max: 35000,
            water_offset: [2048.0, 5120.0, 12800.0],
            water_weight: [0.2, 1.0, 0.75],
            vegetation_weight: [0.8, 0.9, 0.6],
            desert_weight: [1.0, 0.9, 0.7],
        }
    }
}

impl FalseColorPalette {
    pub fn classify(&self, val: u16, irval: u16) -> SurfaceClass {
        if val < self.water_max {
            SurfaceClass::Water
        } else if irval > self.cloud_ir_min {
            SurfaceClass::Cloud
        } else if val < self.vegetation_max {
            SurfaceClass::Vegetation
        } else if val <= self.desert_max {
            SurfaceClass::Desert
        } else {
            SurfaceClass::Bright
        }
    }

    /// RGB triple for a visible/IR sample pair. Fractions are truncated.
    pub fn color(&self, val: u16, irval: u16) -> [u16; 3] {
        let v = f64::from(val);
        let weighted = |offset: [f64; 3], weight: [f64; 3]| {
            [0usize, 1, 2].map(|c| (offset[c] + v * weight[c]) as u16)
        };

        match self.classify(val, irval) {
            SurfaceClass::Water => weighted(self.water_offset, self.water_weight),
            SurfaceClass::Cloud => {
                // averaging in the visible value separates cloud tops a little better
                let grey = ((u32::from(irval) + u32::from(val)) / 2) as u16;
                [grey; 3]
            }
            SurfaceClass::Vegetation => weighted([0.0; 3], self.vegetation_weight),
            SurfaceClass::Desert => weighted([0.0; 3], self.desert_weight),
            SurfaceClass::Bright => [val; 3],
        }
    }
}
