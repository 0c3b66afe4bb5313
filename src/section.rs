/// RGBA color kept free of any drawing backend so the core can be tested headless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Particle tint used when a section has no entry of its own.
pub const FALLBACK_TINT: Tint = Tint::new(255, 107, 53, 153);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Skyline,
    Mountain,
    Neon,
    Terrain,
}

/// One full-screen showcase panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub brand: &'static str,
    pub model: &'static str,
    pub tagline: &'static str,
    pub features: &'static [&'static str],
    pub price: &'static str,
    pub cta_label: &'static str,
    pub backdrop: Backdrop,
}

impl Section {
    /// Color the decorative particles take while this section is active.
    pub fn tint(&self) -> Tint {
        tint_for(self.id)
    }
}

pub fn tint_for(id: &str) -> Tint {
    match id {
        "toyota" => Tint::new(44, 90, 160, 153),
        "mitsubishi" => Tint::new(255, 193, 7, 153),
        "honda" => Tint::new(255, 0, 128, 153),
        "pickup" => Tint::new(139, 69, 19, 153),
        _ => FALLBACK_TINT,
    }
}

pub static SHOWCASE: [Section; 4] = [
    Section {
        id: "toyota",
        brand: "TOYOTA",
        model: "GR SUPRA",
        tagline: "Born on the track, built for the city",
        features: &["3.0L Turbo I6", "382 HP", "0-100 in 4.1s"],
        price: "From $56,250",
        cta_label: "BOOK A TEST DRIVE",
        backdrop: Backdrop::Skyline,
    },
    Section {
        id: "mitsubishi",
        brand: "MITSUBISHI",
        model: "OUTLANDER",
        tagline: "Every road leads somewhere new",
        features: &["S-AWC All-Wheel Control", "7 Seats", "Plug-in Hybrid"],
        price: "From $28,595",
        cta_label: "EXPLORE OUTLANDER",
        backdrop: Backdrop::Mountain,
    },
    Section {
        id: "honda",
        brand: "HONDA",
        model: "CIVIC TYPE R",
        tagline: "Light up the night",
        features: &["2.0L VTEC Turbo", "315 HP", "6-Speed Manual"],
        price: "From $44,795",
        cta_label: "CONFIGURE YOURS",
        backdrop: Backdrop::Neon,
    },
    Section {
        id: "pickup",
        brand: "PICKUP",
        model: "HILUX",
        tagline: "Tough enough for any terrain",
        features: &["2.8L Diesel", "3.5t Towing", "4x4 Low Range"],
        price: "From $39,990",
        cta_label: "GET A QUOTE",
        backdrop: Backdrop::Terrain,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_its_own_tint() {
        for section in SHOWCASE.iter() {
            assert_ne!(section.tint(), FALLBACK_TINT, "{} fell back", section.id);
        }
    }

    #[test]
    fn unknown_id_falls_back() {
        assert_eq!(tint_for("lada"), FALLBACK_TINT);
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in SHOWCASE.iter().enumerate() {
            for b in SHOWCASE.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
