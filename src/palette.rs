//! Deterministic color-per-series assignment.

/// Default series colors: blue, red, green, orange, purple, cyan.
pub const DEFAULT_PALETTE: [[f32; 3]; 6] = [
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.0, 0.8, 0.0],
    [1.0, 0.5, 0.0],
    [0.6, 0.2, 0.8],
    [0.0, 0.8, 0.8],
];

/// Fixed, ordered list of series colors that wraps around.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<[f32; 3]>,
}

impl Palette {
    /// Palette over `colors`. An empty list falls back to
    /// [`DEFAULT_PALETTE`].
    #[must_use]
    pub fn new(colors: Vec<[f32; 3]>) -> Self {
        if colors.is_empty() {
            log::warn!("empty palette configured, using default colors");
            return Self::default();
        }
        Self { colors }
    }

    /// Color for `series`, i.e. `colors[series mod len]`.
    #[must_use]
    pub fn color_for(&self, series: usize) -> [f32; 3] {
        self.colors[series % self.colors.len()]
    }

    /// Number of distinct colors before wrapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette holds at least one color.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_series_take_palette_order() {
        let palette = Palette::default();
        assert_eq!(palette.color_for(0), DEFAULT_PALETTE[0]);
        assert_eq!(palette.color_for(1), DEFAULT_PALETTE[1]);
    }

    #[test]
    fn wraps_past_the_end() {
        let palette = Palette::new(vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        assert_eq!(palette.color_for(2), palette.color_for(0));
        assert_eq!(palette.color_for(7), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn empty_list_falls_back_to_default() {
        let palette = Palette::new(Vec::new());
        assert_eq!(palette.len(), DEFAULT_PALETTE.len());
        assert!(!palette.is_empty());
    }
}
