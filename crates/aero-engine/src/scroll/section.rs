/// Overlay content sections, one viewport page each, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Technology,
    Fleet,
    Destinations,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Technology,
        Section::Fleet,
        Section::Destinations,
    ];

    pub fn index(self) -> u32 {
        self as u32
    }

    /// Section closest to the top of the viewport.
    ///
    /// The overlay translates by `offset * (pages - 1)` viewports, so the
    /// nearest whole page wins.
    pub fn at(offset: f32, pages: f32) -> Section {
        let span = (pages - 1.0).max(0.0);
        let page = (offset.clamp(0.0, 1.0) * span).round() as usize;
        Self::ALL[page.min(Self::ALL.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_map_to_sections() {
        assert_eq!(Section::at(0.0, 4.0), Section::Hero);
        assert_eq!(Section::at(0.34, 4.0), Section::Technology);
        assert_eq!(Section::at(0.66, 4.0), Section::Fleet);
        assert_eq!(Section::at(1.0, 4.0), Section::Destinations);
    }

    #[test]
    fn rounds_to_nearest_page() {
        assert_eq!(Section::at(0.15, 4.0), Section::Hero);
        assert_eq!(Section::at(0.18, 4.0), Section::Technology);
    }

    #[test]
    fn more_pages_than_sections_clamps() {
        assert_eq!(Section::at(1.0, 8.0), Section::Destinations);
        assert_eq!(Section::at(0.5, 1.0), Section::Hero);
    }
}
