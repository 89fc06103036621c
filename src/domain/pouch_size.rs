use crate::domain::price::Price;

/// Size code of a subscribed item. Codes outside A-F are kept as `Unknown`
/// instead of failing the directory load.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(from = "String")]
pub enum PouchSize {
    A,
    B,
    C,
    D,
    E,
    F,
    Unknown(String),
}

impl PouchSize {
    pub fn parse(size: String) -> PouchSize {
        match size.as_str() {
            "A" => PouchSize::A,
            "B" => PouchSize::B,
            "C" => PouchSize::C,
            "D" => PouchSize::D,
            "E" => PouchSize::E,
            "F" => PouchSize::F,
            _ => PouchSize::Unknown(size),
        }
    }

    /// Unit price of the pouch. Unknown sizes are priced at zero.
    pub fn price(&self) -> Price {
        match self {
            PouchSize::A => Price::from_cents(5550),
            PouchSize::B => Price::from_cents(5950),
            PouchSize::C => Price::from_cents(6275),
            PouchSize::D => Price::from_cents(6600),
            PouchSize::E => Price::from_cents(6900),
            PouchSize::F => Price::from_cents(7125),
            PouchSize::Unknown(_) => Price::ZERO,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PouchSize::Unknown(_))
    }
}

impl From<String> for PouchSize {
    fn from(size: String) -> Self {
        PouchSize::parse(size)
    }
}

impl AsRef<str> for PouchSize {
    fn as_ref(&self) -> &str {
        match self {
            PouchSize::A => "A",
            PouchSize::B => "B",
            PouchSize::C => "C",
            PouchSize::D => "D",
            PouchSize::E => "E",
            PouchSize::F => "F",
            PouchSize::Unknown(size) => size,
        }
    }
}
