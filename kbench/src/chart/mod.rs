mod chart_to_svg;
mod svg_util;

#[doc(inline)]
pub use chart_to_svg::*;

#[doc(inline)]
pub use svg_util::ChartOptions;
#[doc(inline)]
pub use svg_util::ChartTheme;
#[doc(inline)]
pub use svg_util::Color;
