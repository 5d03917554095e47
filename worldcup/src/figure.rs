//! Choropleth figure of total wins per country.
//!
//! The figure serializes to a Plotly `{ data, layout }` object which the page
//! hands to `Plotly.react` unchanged.

use serde::Serialize;

use crate::summary::WinSummary;

pub const FIGURE_TITLE: &str = "Total World Cup Wins by Country";

/// Plotly's sequential "Plasma" palette, low to high.
pub const PLASMA: [&str; 10] = [
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethFigure {
    pub data: Vec<ChoroplethTrace>,
    pub layout: FigureLayout,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(rename = "locationmode")]
    pub location_mode: &'static str,
    pub locations: Vec<&'static str>,
    pub z: Vec<u32>,
    /// Country names, shown as the hover title.
    pub text: Vec<String>,
    #[serde(rename = "hovertemplate")]
    pub hover_template: &'static str,
    #[serde(rename = "colorscale")]
    pub color_scale: Vec<(f64, &'static str)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zmin: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zmax: Option<u32>,
    #[serde(rename = "colorbar")]
    pub color_bar: ColorBar,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FigureLayout {
    pub title: Title,
    pub margin: Margin,
    pub geo: Geo,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Margin {
    pub r: u32,
    pub t: u32,
    pub l: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Geo {
    #[serde(rename = "showframe")]
    pub show_frame: bool,
    pub projection: Projection,
}

#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Evenly spaced stops over the palette.
pub fn plasma_scale() -> Vec<(f64, &'static str)> {
    let last = (PLASMA.len() - 1) as f64;
    PLASMA
        .iter()
        .enumerate()
        .map(|(i, color)| (i as f64 / last, *color))
        .collect()
}

impl ChoroplethFigure {
    /// One colored region per summary row that has a region code.
    pub fn from_summary(summary: &WinSummary) -> Self {
        let mut locations = Vec::with_capacity(summary.len());
        let mut z = Vec::with_capacity(summary.len());
        let mut text = Vec::with_capacity(summary.len());
        for (row, code) in summary.mapped_rows() {
            locations.push(code);
            z.push(row.wins);
            text.push(row.country.clone());
        }

        let trace = ChoroplethTrace {
            kind: "choropleth",
            location_mode: "ISO-3",
            zmin: z.iter().copied().min(),
            zmax: z.iter().copied().max(),
            locations,
            z,
            text,
            hover_template: "<b>%{text}</b><br>Wins=%{z}<extra></extra>",
            color_scale: plasma_scale(),
            color_bar: ColorBar {
                title: Title { text: "Wins" },
            },
        };

        Self {
            data: vec![trace],
            layout: FigureLayout {
                title: Title { text: FIGURE_TITLE },
                margin: Margin {
                    r: 0,
                    t: 50,
                    l: 0,
                    b: 0,
                },
                geo: Geo {
                    show_frame: false,
                    projection: Projection {
                        kind: "natural earth",
                    },
                },
            },
        }
    }

    /// Position of `wins` on the color scale, in `[0, 1]`.
    ///
    /// Monotonic in wins; a single-valued range maps everything to the top.
    pub fn intensity(&self, wins: u32) -> f64 {
        let Some(trace) = self.data.first() else {
            return 0.0;
        };
        match (trace.zmin, trace.zmax) {
            (Some(lo), Some(hi)) if hi > lo => {
                let clamped = wins.clamp(lo, hi);
                f64::from(clamped - lo) / f64::from(hi - lo)
            }
            (Some(_), Some(_)) => 1.0,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn reference_figure() -> ChoroplethFigure {
        let dataset = Dataset::load().unwrap();
        ChoroplethFigure::from_summary(&WinSummary::from_dataset(&dataset))
    }

    #[test]
    fn test_one_region_per_mapped_row() {
        let figure = reference_figure();
        let trace = &figure.data[0];
        assert_eq!(trace.locations.len(), 8);
        assert_eq!(trace.z.len(), trace.locations.len());
        assert_eq!(trace.text.len(), trace.locations.len());

        let brazil = trace.locations.iter().position(|c| *c == "BRA").unwrap();
        assert_eq!(trace.z[brazil], 5);
        assert_eq!(trace.text[brazil], "Brazil");
    }

    #[test]
    fn test_color_range_spans_win_counts() {
        let figure = reference_figure();
        assert_eq!(figure.data[0].zmin, Some(1));
        assert_eq!(figure.data[0].zmax, Some(5));
    }

    #[test]
    fn test_intensity_monotonic_in_wins() {
        let figure = reference_figure();
        let levels: Vec<f64> = (1..=5).map(|w| figure.intensity(w)).collect();
        assert!(levels.windows(2).all(|w| w[0] < w[1]), "{levels:?}");
        assert_eq!(levels[0], 0.0);
        assert_eq!(levels[4], 1.0);
    }

    #[test]
    fn test_scale_stops_increase() {
        let scale = plasma_scale();
        assert_eq!(scale.first(), Some(&(0.0, "#0d0887")));
        assert_eq!(scale.last(), Some(&(1.0, "#f0f921")));
        assert!(scale.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_plotly_json_shape() {
        let json = serde_json::to_value(reference_figure()).unwrap();
        let trace = &json["data"][0];
        assert_eq!(trace["type"], "choropleth");
        assert_eq!(trace["locationmode"], "ISO-3");
        assert_eq!(trace["colorscale"][0][1], "#0d0887");
        assert_eq!(json["layout"]["title"]["text"], FIGURE_TITLE);
        assert_eq!(json["layout"]["margin"]["t"], 50);
        assert_eq!(json["layout"]["margin"]["l"], 0);
    }

    #[test]
    fn test_empty_summary_omits_range() {
        let dataset = Dataset::from_raw(&[]).unwrap();
        let figure = ChoroplethFigure::from_summary(&WinSummary::from_dataset(&dataset));
        let json = serde_json::to_value(&figure).unwrap();
        assert!(json["data"][0].get("zmin").is_none());
        assert_eq!(figure.intensity(3), 0.0);
    }
}
