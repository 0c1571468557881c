use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use svg::node::element::Path;
use svg::node::element::path::Data;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct ChartOptions {
    ///The theme to use for the charts
    #[serde(default)]
    pub theme: ChartTheme,
    ///Width of the line chart, in pixels
    pub line_width: f32,
    ///Width of the column chart, in pixels
    pub column_width: f32,
    ///Height of both charts, in pixels
    pub height: f32,
    ///Number of labelled ticks on the vertical axis
    pub n_y_ticks: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            theme: ChartTheme::default(),
            line_width: 1000.0,
            column_width: 1200.0,
            height: 600.0,
            n_y_ticks: 5,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct ChartTheme {
    pub stroke_width: f32,
    pub font_size: f32,
    pub background: Color,
    pub axis_color: Color,
    pub grid_color: Color,
    pub exact_color: Color,
    pub greedy_color: Color,
}

impl Default for ChartTheme {
    fn default() -> Self {
        ChartTheme::PRIMARY
    }
}

impl ChartTheme {
    pub const PRIMARY: ChartTheme = ChartTheme {
        stroke_width: 1.5,
        font_size: 14.0,
        background: Color(0xFF, 0xFF, 0xFF),
        axis_color: Color(0x00, 0x00, 0x00),
        grid_color: Color(0xDD, 0xDD, 0xDD),
        exact_color: Color(0x00, 0x00, 0xFF),  // BLUE
        greedy_color: Color(0x00, 0x80, 0x00), // GREEN
    };
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .ok_or_else(|| format!("invalid hex color: {s}"))
        };
        match hex.len() {
            6 => Ok(Color(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            _ => Err(format!("invalid hex color: {s}")),
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}
