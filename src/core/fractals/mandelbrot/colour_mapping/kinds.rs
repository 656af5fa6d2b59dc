#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKinds {
    #[default]
    HueCycle,
    BlueWhiteGradient,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::HueCycle, Self::BlueWhiteGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HueCycle => "Hue cycle",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
