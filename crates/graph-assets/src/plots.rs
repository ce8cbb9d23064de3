// File: crates/graph-assets/src/plots.rs
// Summary: The three hardcoded placeholder charts shown by the frontend.

use chart_core::{Arrow, Chart, ChartError, Series, TextAnnotation};

/// A fixed chart and the file name it is published under.
pub struct ChartSpec {
    pub file_name: &'static str,
    pub build: fn() -> Result<Chart, ChartError>,
}

/// All charts, in the order they are written.
pub fn chart_specs() -> [ChartSpec; 3] {
    [
        ChartSpec { file_name: "graph-alpha.png", build: graph_alpha },
        ChartSpec { file_name: "graph-media.png", build: graph_media },
        ChartSpec { file_name: "graph-beta.png", build: graph_beta },
    ]
}

/// Ownership structure: two companies and a nominee, with a flow arrow.
pub fn graph_alpha() -> Result<Chart, ChartError> {
    let mut chart = Chart::new();
    chart.add_series(Series::scatter(&[0.0, 1.0, 0.5], &[0.5, 0.5, 1.0], 400.0)?);
    chart.add_text(TextAnnotation::new(0.0, 0.55, "Société Alpha"));
    chart.add_text(TextAnnotation::new(1.0, 0.55, "Offshore Inc"));
    chart.add_text(TextAnnotation::new(0.5, 1.05, "Prête-nom A"));
    chart.add_arrow(Arrow::new(0.1, 0.5, 0.7, 0.0).head_width(0.05).length_includes_head(true));
    chart.autoscale();
    Ok(chart)
}

pub fn graph_media() -> Result<Chart, ChartError> {
    let mut chart = Chart::new().with_title("Mentions presse/dark web - Client X");
    chart.add_series(Series::line(&[1.0, 2.0, 3.0, 4.0, 5.0], &[0.0, 1.0, 3.0, 4.0, 6.0])?);
    chart.autoscale();
    Ok(chart)
}

pub fn graph_beta() -> Result<Chart, ChartError> {
    let mut chart = Chart::new().with_title("Transactions Entreprise Beta");
    chart.add_series(Series::bars(&["T1", "T2", "T3", "T4"], &[100.0, 120.0, 95.0, 110.0])?);
    chart.autoscale();
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::SeriesType;

    #[test]
    fn file_names_are_fixed_and_distinct() {
        let names: Vec<_> = chart_specs().iter().map(|s| s.file_name).collect();
        assert_eq!(names, ["graph-alpha.png", "graph-media.png", "graph-beta.png"]);
    }

    #[test]
    fn every_chart_builds() {
        for spec in chart_specs() {
            assert!((spec.build)().is_ok(), "{} failed to build", spec.file_name);
        }
    }

    #[test]
    fn alpha_has_labels_and_arrow() {
        let chart = graph_alpha().unwrap();
        assert_eq!(chart.series[0].series_type, SeriesType::Scatter);
        assert_eq!(chart.series[0].data_xy.len(), 3);
        let labels: Vec<_> = chart.texts.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(labels, ["Société Alpha", "Offshore Inc", "Prête-nom A"]);
        let tip = chart.arrows[0].tip().unwrap();
        assert!((tip.0 - 0.8).abs() < 1e-12 && (tip.1 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn media_and_beta_carry_titles() {
        assert_eq!(graph_media().unwrap().title.as_deref(), Some("Mentions presse/dark web - Client X"));
        let beta = graph_beta().unwrap();
        assert_eq!(beta.title.as_deref(), Some("Transactions Entreprise Beta"));
        assert_eq!(beta.x_axis.categories.as_ref().map(Vec::len), Some(4));
        assert_eq!(beta.y_axis.min, 0.0);
    }
}
