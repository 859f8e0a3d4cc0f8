use crate::models::{BitMatrix, Version};

/// Quiet zone width on every side, in modules
pub const QUIET_ZONE: usize = 4;

/// Module grid of one symbol plus its reservation map.
///
/// Drawing coordinates are relative to the data area (top-left finder corner
/// is (0, 0)); the canvas offsets them by the margin. Both grids are flat
/// buffers covering the full width including the quiet zone.
#[derive(Debug, Clone)]
pub struct Canvas {
    version: Version,
    margin: usize,
    modules: BitMatrix,
    reserved: BitMatrix,
    /// Codeword index carried by each data module, row-major over the full width
    labels: Vec<Option<u32>>,
}

impl Canvas {
    /// Blank canvas for `version` with `margin` quiet modules on each side
    pub fn new(version: Version, margin: usize) -> Self {
        let width = version.size() + 2 * margin;
        Self {
            version,
            margin,
            modules: BitMatrix::square(width),
            reserved: BitMatrix::square(width),
            labels: vec![None; width * width],
        }
    }

    /// Version this canvas was sized for
    pub fn version(&self) -> Version {
        self.version
    }

    /// Side of the data area (17 + 4 * version)
    pub fn size(&self) -> usize {
        self.version.size()
    }

    /// Quiet zone width
    pub fn margin(&self) -> usize {
        self.margin
    }

    /// Full side including the quiet zone
    pub fn width(&self) -> usize {
        self.modules.width()
    }

    /// Draw a function module: set its colour and reserve it
    pub fn draw(&mut self, x: usize, y: usize, dark: bool) {
        let (fx, fy) = (x + self.margin, y + self.margin);
        self.modules.set(fx, fy, dark);
        self.reserved.set(fx, fy, true);
    }

    /// Write a data module; reserved modules are left untouched
    pub fn set_data(&mut self, x: usize, y: usize, dark: bool, codeword: usize) {
        if self.is_reserved(x, y) {
            return;
        }
        let (fx, fy) = (x + self.margin, y + self.margin);
        self.modules.set(fx, fy, dark);
        if let Some(label) = self.labels.get_mut(fy * self.modules.width() + fx) {
            *label = Some(codeword as u32);
        }
    }

    /// Light and reserve every module of the quiet zone
    pub fn draw_quiet_zone(&mut self) {
        let width = self.width();
        let margin = self.margin;
        for fy in 0..width {
            for fx in 0..width {
                let inside = (margin..width - margin).contains(&fx)
                    && (margin..width - margin).contains(&fy);
                if !inside {
                    self.modules.set(fx, fy, false);
                    self.reserved.set(fx, fy, true);
                }
            }
        }
    }

    /// Data-area module colour
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules.get(x + self.margin, y + self.margin)
    }

    /// Data-area reservation flag
    pub fn is_reserved(&self, x: usize, y: usize) -> bool {
        self.reserved.get(x + self.margin, y + self.margin)
    }

    /// Full-width module grid (true = dark)
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    /// Full-width reservation grid (true = function module or quiet zone)
    pub fn reserved(&self) -> &BitMatrix {
        &self.reserved
    }

    /// Codeword index at a full-width coordinate, for data modules only
    pub fn label(&self, fx: usize, fy: usize) -> Option<u32> {
        if fx >= self.width() || fy >= self.width() {
            return None;
        }
        self.labels[fy * self.width() + fx]
    }

    /// Dark modules inside the data area
    pub fn dark_count(&self) -> usize {
        // The quiet zone is always light.
        self.modules.count_ones()
    }
}
