/// The 2x2 color filter layout of a sensor.
///
/// The name lists the colors of the top-left, top-right, bottom-left and
/// bottom-right photosites of each block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BayerPattern {
    Rggb,
    Bggr,
    Grbg,
    Gbrg,
}

/// Offsets `(dx, dy)` of each color inside a 2x2 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    pub red: (usize, usize),
    /// Green sharing a row with red
    pub green_r: (usize, usize),
    /// Green sharing a row with blue
    pub green_b: (usize, usize),
    pub blue: (usize, usize),
}

impl BayerPattern {
    pub const ALL: &[BayerPattern] = &[
        BayerPattern::Rggb,
        BayerPattern::Bggr,
        BayerPattern::Grbg,
        BayerPattern::Gbrg,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BayerPattern::Rggb => "RGGB",
            BayerPattern::Bggr => "BGGR",
            BayerPattern::Grbg => "GRBG",
            BayerPattern::Gbrg => "GBRG",
        }
    }

    pub fn layout(self) -> BlockLayout {
        match self {
            BayerPattern::Rggb => BlockLayout {
                red: (0, 0),
                green_r: (1, 0),
                green_b: (0, 1),
                blue: (1, 1),
            },
            BayerPattern::Bggr => BlockLayout {
                red: (1, 1),
                green_r: (0, 1),
                green_b: (1, 0),
                blue: (0, 0),
            },
            BayerPattern::Grbg => BlockLayout {
                red: (1, 0),
                green_r: (0, 0),
                green_b: (1, 1),
                blue: (0, 1),
            },
            BayerPattern::Gbrg => BlockLayout {
                red: (0, 1),
                green_r: (1, 1),
                green_b: (0, 0),
                blue: (1, 0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_cover_each_block_once() {
        for pattern in BayerPattern::ALL {
            let l = pattern.layout();
            let mut cells = vec![l.red, l.green_r, l.green_b, l.blue];
            cells.sort();
            assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)], "{}", pattern.name());
        }
    }

    #[test]
    fn test_greens_share_rows_with_their_neighbor() {
        for pattern in BayerPattern::ALL {
            let l = pattern.layout();
            assert_eq!(l.green_r.1, l.red.1, "{}", pattern.name());
            assert_eq!(l.green_b.1, l.blue.1, "{}", pattern.name());
        }
    }

    #[test]
    fn test_rggb_matches_rg10_sensor() {
        let l = BayerPattern::Rggb.layout();
        assert_eq!(l.red, (0, 0));
        assert_eq!(l.green_r, (1, 0));
        assert_eq!(l.green_b, (0, 1));
        assert_eq!(l.blue, (1, 1));
    }
}
