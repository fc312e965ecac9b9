//! Chart Figure Module
//! The sidebar chart catalog and the plain-data figures the builders produce.

use crate::stats::HistBin;

/// The ten charts offered in the sidebar, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    ReleaseYears,
    ContentTypes,
    TopCountries,
    ReleaseTrend,
    TypeVsRating,
    MovieDurations,
    Correlation,
    CountryMap,
    DescriptionCloud,
    CanadaGenres,
}

impl ChartKind {
    pub const ALL: [ChartKind; 10] = [
        ChartKind::ReleaseYears,
        ChartKind::ContentTypes,
        ChartKind::TopCountries,
        ChartKind::ReleaseTrend,
        ChartKind::TypeVsRating,
        ChartKind::MovieDurations,
        ChartKind::Correlation,
        ChartKind::CountryMap,
        ChartKind::DescriptionCloud,
        ChartKind::CanadaGenres,
    ];

    /// Menu label shown in the sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::ReleaseYears => "Release Year Distribution",
            ChartKind::ContentTypes => "Distribution of Content Types",
            ChartKind::TopCountries => "Top 13 Countries with Most Content",
            ChartKind::ReleaseTrend => "Trend of Releases Over Time",
            ChartKind::TypeVsRating => "Type vs Rating",
            ChartKind::MovieDurations => "Filter Only Movies",
            ChartKind::Correlation => "Multivariate Analysis",
            ChartKind::CountryMap => "Choropleth Map: Titles by Country",
            ChartKind::DescriptionCloud => {
                "Word Cloud: Most Common Words in Titles Descriptions"
            }
            ChartKind::CanadaGenres => "Distribution of Genres in Canada",
        }
    }
}

/// Bar color for histogram figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Red,
    Blue,
}

/// How bar colors are assigned across a bar figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarPalette {
    /// Movie sky blue, TV Show orange.
    TypeColors,
    /// The fixed 13-color ranking palette, one color per rank.
    Ranked,
    /// Viridis ramp across the entries.
    ViridisRamp,
}

/// Histogram with an optional density overlay.
#[derive(Debug, Clone)]
pub struct HistogramFigure {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub bins: Vec<HistBin>,
    /// Smoothed density curve scaled to the bin counts; empty when the
    /// sample is too small to estimate.
    pub density: Vec<[f64; 2]>,
    pub tint: Tint,
}

/// Categorical bar chart, one bar per entry in ranked order.
#[derive(Debug, Clone)]
pub struct BarsFigure {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub entries: Vec<(String, u32)>,
    pub palette: BarPalette,
    /// Rotate the category labels 45 degrees below the axis.
    pub rotate_labels: bool,
}

/// Line chart of counts over years, points sorted by year ascending.
#[derive(Debug, Clone)]
pub struct TrendFigure {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points: Vec<[f64; 2]>,
}

/// Grouped count bars: one bar group per category, one bar per group.
#[derive(Debug, Clone)]
pub struct GroupedBarsFigure {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Category labels in display order.
    pub categories: Vec<String>,
    /// Group name and its count per category, aligned with `categories`.
    pub groups: Vec<(String, Vec<u32>)>,
}

/// Annotated correlation heatmap over a small set of variables.
#[derive(Debug, Clone)]
pub struct HeatmapFigure {
    pub title: String,
    pub labels: Vec<&'static str>,
    /// Row-major matrix, `labels.len()` squared; NaN marks an undefined cell.
    pub values: Vec<Vec<f64>>,
}

/// World map with the ranked countries shaded by count.
#[derive(Debug, Clone)]
pub struct WorldMapFigure {
    pub title: String,
    pub legend_label: &'static str,
    /// Ranked (country, count); names that match no known outline stay
    /// unshaded on the base map.
    pub ranked: Vec<(String, u32)>,
}

/// Word cloud, words with their frequencies, most frequent first.
#[derive(Debug, Clone)]
pub struct WordCloudFigure {
    pub title: String,
    pub words: Vec<(String, u32)>,
}

/// A fully built chart, ready to draw.
#[derive(Debug, Clone)]
pub enum Figure {
    Histogram(HistogramFigure),
    Bars(BarsFigure),
    Trend(TrendFigure),
    GroupedBars(GroupedBarsFigure),
    Heatmap(HeatmapFigure),
    WorldMap(WorldMapFigure),
    WordCloud(WordCloudFigure),
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Figure::Histogram(figure) => &figure.title,
            Figure::Bars(figure) => &figure.title,
            Figure::Trend(figure) => &figure.title,
            Figure::GroupedBars(figure) => &figure.title,
            Figure::Heatmap(figure) => &figure.title,
            Figure::WorldMap(figure) => &figure.title,
            Figure::WordCloud(figure) => &figure.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_has_ten_distinct_labels() {
        let labels: Vec<&str> = ChartKind::ALL.iter().map(|k| k.label()).collect();

        assert_eq!(labels.len(), 10);
        for (i, label) in labels.iter().enumerate() {
            assert!(!label.is_empty());
            assert!(!labels[i + 1..].contains(label));
        }
    }

    #[test]
    fn menu_starts_with_the_release_year_chart() {
        assert_eq!(ChartKind::ALL[0], ChartKind::ReleaseYears);
        assert_eq!(ChartKind::ALL[0].label(), "Release Year Distribution");
    }
}
