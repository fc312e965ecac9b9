//! Chart Builder Module
//! Turns the cleaned titles table into plain-data figures, one builder per
//! sidebar entry. Builders read the frame, never mutate it; derived series
//! go into fresh vectors.

use std::collections::{BTreeMap, HashMap};

use polars::prelude::*;
use thiserror::Error;

use super::figure::{
    BarPalette, BarsFigure, ChartKind, Figure, GroupedBarsFigure, HeatmapFigure, HistogramFigure,
    Tint, TrendFigure, WordCloudFigure, WorldMapFigure,
};
use super::text;
use crate::stats::StatsCalculator;

/// Number of density curve samples for the histogram overlays.
const KDE_SAMPLES: usize = 200;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Chart data error: {0}")]
    Polars(#[from] PolarsError),
    #[error("No rows remain after the {0} filter")]
    EmptyFilter(&'static str),
    #[error("Need at least {0} complete rows for this chart")]
    TooFewRows(usize),
}

/// Build the figure for one sidebar entry over the cleaned frame.
pub fn build(kind: ChartKind, df: &DataFrame) -> Result<Figure, ChartError> {
    match kind {
        ChartKind::ReleaseYears => release_years(df),
        ChartKind::ContentTypes => content_types(df),
        ChartKind::TopCountries => top_countries(df),
        ChartKind::ReleaseTrend => release_trend(df),
        ChartKind::TypeVsRating => type_vs_rating(df),
        ChartKind::MovieDurations => movie_durations(df),
        ChartKind::Correlation => correlation(df),
        ChartKind::CountryMap => country_map(df),
        ChartKind::DescriptionCloud => description_cloud(df),
        ChartKind::CanadaGenres => canada_genres(df),
    }
}

/// Histogram of release years, bin count from the automatic rule, with a
/// smoothed density overlay.
fn release_years(df: &DataFrame) -> Result<Figure, ChartError> {
    let years = numeric_column(df, "release_year")?;
    if years.is_empty() {
        return Err(ChartError::TooFewRows(1));
    }

    let bin_count = StatsCalculator::auto_bin_count(&years);
    let bins = StatsCalculator::histogram(&years, bin_count);
    let bin_width = bins.first().map(|b| b.width()).unwrap_or(1.0);
    let density = StatsCalculator::kde_curve(&years, bin_width, KDE_SAMPLES);

    Ok(Figure::Histogram(HistogramFigure {
        title: "Distribution of Release Years".to_string(),
        x_label: "Release Year",
        y_label: "Density",
        bins,
        density,
        tint: Tint::Red,
    }))
}

/// Count bars of the two content types, Movie listed first.
fn content_types(df: &DataFrame) -> Result<Figure, ChartError> {
    let types = string_column(df, "type")?;
    let mut entries = StatsCalculator::rank_by_count(types.into_iter());
    entries.sort_by_key(|(name, _)| name != "Movie");

    Ok(Figure::Bars(BarsFigure {
        title: "Count of Movies vs TV Shows on Netflix".to_string(),
        x_label: "Type",
        y_label: "Count",
        entries,
        palette: BarPalette::TypeColors,
        rotate_labels: false,
    }))
}

/// Top 13 raw country strings by title count, one palette color per rank.
fn top_countries(df: &DataFrame) -> Result<Figure, ChartError> {
    let countries = string_column(df, "country")?;
    let mut entries = StatsCalculator::rank_by_count(countries.into_iter());
    entries.truncate(13);

    Ok(Figure::Bars(BarsFigure {
        title: "Top 13 Content Producing Countries".to_string(),
        x_label: "Country",
        y_label: "Number of Titles",
        entries,
        palette: BarPalette::Ranked,
        rotate_labels: true,
    }))
}

/// Titles per release year as a line, years ascending.
fn release_trend(df: &DataFrame) -> Result<Figure, ChartError> {
    let years = numeric_column(df, "release_year")?;

    let mut counts: BTreeMap<i64, u32> = BTreeMap::new();
    for year in years {
        *counts.entry(year as i64).or_insert(0) += 1;
    }

    let points = counts
        .into_iter()
        .map(|(year, count)| [year as f64, count as f64])
        .collect();

    Ok(Figure::Trend(TrendFigure {
        title: "Number of Titles Released per Year".to_string(),
        x_label: "Year",
        y_label: "Number of Titles",
        points,
    }))
}

/// Rating counts grouped by content type, rating categories ordered by
/// overall descending frequency.
fn type_vs_rating(df: &DataFrame) -> Result<Figure, ChartError> {
    let types = string_column(df, "type")?;
    let ratings = string_column(df, "rating")?;

    let categories: Vec<String> = StatsCalculator::rank_by_count(ratings.iter().cloned())
        .into_iter()
        .map(|(rating, _)| rating)
        .collect();

    let mut group_names = StatsCalculator::rank_by_count(types.iter().cloned());
    group_names.sort_by_key(|(name, _)| name != "Movie");

    let mut pair_counts: HashMap<(&str, &str), u32> = HashMap::new();
    for (ty, rating) in types.iter().zip(ratings.iter()) {
        *pair_counts.entry((ty, rating)).or_insert(0) += 1;
    }

    let groups = group_names
        .into_iter()
        .map(|(name, _)| {
            let counts = categories
                .iter()
                .map(|rating| {
                    pair_counts
                        .get(&(name.as_str(), rating.as_str()))
                        .copied()
                        .unwrap_or(0)
                })
                .collect();
            (name, counts)
        })
        .collect();

    Ok(Figure::GroupedBars(GroupedBarsFigure {
        title: "Distribution of Ratings by Content Type".to_string(),
        x_label: "Rating",
        y_label: "Count",
        categories,
        groups,
    }))
}

/// Fixed 30-bin histogram of movie runtimes with a density overlay. Only
/// rows typed "Movie" participate; unparseable durations are skipped.
fn movie_durations(df: &DataFrame) -> Result<Figure, ChartError> {
    let movies = df
        .clone()
        .lazy()
        .filter(col("type").eq(lit("Movie")))
        .collect()?;

    if movies.height() == 0 {
        return Err(ChartError::EmptyFilter("Movie"));
    }

    let durations: Vec<f64> = movies
        .column("duration")?
        .str()?
        .into_iter()
        .filter_map(|value| value.and_then(StatsCalculator::duration_value))
        .collect();

    if durations.is_empty() {
        return Err(ChartError::EmptyFilter("Movie"));
    }

    let bins = StatsCalculator::histogram(&durations, 30);
    let bin_width = bins.first().map(|b| b.width()).unwrap_or(1.0);
    let density = StatsCalculator::kde_curve(&durations, bin_width, KDE_SAMPLES);

    Ok(Figure::Histogram(HistogramFigure {
        title: "Distribution of Movie Durations (in minutes)".to_string(),
        x_label: "Duration (minutes)",
        y_label: "Count",
        bins,
        density,
        tint: Tint::Blue,
    }))
}

/// Pairwise Pearson heatmap over release year, parsed duration and the
/// numeric type encoding, restricted to rows complete in all three.
fn correlation(df: &DataFrame) -> Result<Figure, ChartError> {
    let years = df.column("release_year")?.cast(&DataType::Float64)?;
    let years = years.f64()?;
    let types = df.column("type")?.str()?;
    let durations = df.column("duration")?.str()?;

    let mut year_values = Vec::new();
    let mut duration_values = Vec::new();
    let mut type_values = Vec::new();

    for ((year, ty), duration) in years.into_iter().zip(types).zip(durations) {
        let (Some(year), Some(ty), Some(duration)) = (year, ty, duration) else {
            continue;
        };
        let Some(minutes) = StatsCalculator::duration_value(duration) else {
            continue;
        };
        let Some(encoded) = StatsCalculator::encode_type(ty) else {
            continue;
        };

        year_values.push(year);
        duration_values.push(minutes);
        type_values.push(encoded);
    }

    if year_values.len() < 2 {
        return Err(ChartError::TooFewRows(2));
    }

    let series = [year_values, duration_values, type_values];
    let values = StatsCalculator::correlation_matrix(&series);

    Ok(Figure::Heatmap(HeatmapFigure {
        title: "Correlations Between Netflix Variables".to_string(),
        labels: vec!["release_year", "duration_minutes", "type_encoded"],
        values,
    }))
}

/// Top 5 countries shaded on the world map; names the gazetteer does not
/// recognize stay on the base map.
fn country_map(df: &DataFrame) -> Result<Figure, ChartError> {
    let countries = string_column(df, "country")?;
    let mut ranked = StatsCalculator::rank_by_count(countries.into_iter());
    ranked.truncate(5);

    Ok(Figure::WorldMap(WorldMapFigure {
        title: "Top 5 Netflix Titles by Country".to_string(),
        legend_label: "Number of Titles",
        ranked,
    }))
}

/// Word frequencies over every description joined together, stopwords
/// removed, capped at the most frequent 200 words.
fn description_cloud(df: &DataFrame) -> Result<Figure, ChartError> {
    let descriptions = string_column(df, "description")?;
    let joined = descriptions.join(" ");

    let mut words = text::word_frequencies(&joined);
    if words.is_empty() {
        return Err(ChartError::EmptyFilter("stopword"));
    }
    words.truncate(200);

    Ok(Figure::WordCloud(WordCloudFigure {
        title: "Most Common Words in Titles Descriptions".to_string(),
        words,
    }))
}

/// Top 10 genre tags among titles whose country field mentions Canada,
/// co-productions included. Comma-separated genre lists contribute one
/// count per tag.
fn canada_genres(df: &DataFrame) -> Result<Figure, ChartError> {
    let countries = df.column("country")?.str()?;
    let genres = df.column("listed_in")?.str()?;

    let mut tokens: Vec<String> = Vec::new();
    for (country, listed) in countries.into_iter().zip(genres) {
        let (Some(country), Some(listed)) = (country, listed) else {
            continue;
        };
        if !country.contains("Canada") {
            continue;
        }
        tokens.extend(
            listed
                .split(',')
                .map(str::trim)
                .filter(|genre| !genre.is_empty())
                .map(str::to_string),
        );
    }

    let mut entries = StatsCalculator::rank_by_count(tokens.into_iter());
    if entries.is_empty() {
        return Err(ChartError::EmptyFilter("Canada"));
    }
    entries.truncate(10);

    Ok(Figure::Bars(BarsFigure {
        title: "Top 10 Genres in Canada".to_string(),
        x_label: "Genre",
        y_label: "Number of Titles",
        entries,
        palette: BarPalette::ViridisRamp,
        rotate_labels: true,
    }))
}

/// All values of a column as f64, nulls skipped.
fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>, ChartError> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    Ok(column.f64()?.into_iter().filter_map(|v| v).collect())
}

/// All values of a string column, nulls skipped.
fn string_column(df: &DataFrame, name: &str) -> Result<Vec<String>, ChartError> {
    Ok(df
        .column(name)?
        .str()?
        .into_iter()
        .filter_map(|v| v)
        .map(|v| v.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new(
                "release_year".into(),
                vec![2019i64, 2020, 2020, 2021, 2018, 2021],
            ),
            Column::new(
                "type".into(),
                vec!["Movie", "Movie", "TV Show", "Movie", "TV Show", "Movie"],
            ),
            Column::new(
                "country".into(),
                vec![
                    "United States",
                    "Canada, France",
                    "India",
                    "United States",
                    "Canada",
                    "Japan",
                ],
            ),
            Column::new(
                "rating".into(),
                vec!["PG-13", "TV-MA", "TV-MA", "R", "TV-MA", "PG-13"],
            ),
            Column::new(
                "duration".into(),
                vec!["90 min", "104 min", "2 Seasons", "120 min", "1 Season", "95 min"],
            ),
            Column::new(
                "listed_in".into(),
                vec![
                    "Dramas",
                    "Dramas, Comedies",
                    "International TV Shows",
                    "Action & Adventure",
                    "TV Dramas, TV Mysteries",
                    "Thrillers",
                ],
            ),
            Column::new(
                "description".into(),
                vec![
                    "A gripping story of resilience and hope.",
                    "Two unlikely friends set out on a road trip.",
                    "A detective hunts a killer across Mumbai.",
                    "An elite squad defends the city from chaos.",
                    "A family uncovers secrets in a small town.",
                    "A heist goes wrong in downtown Tokyo.",
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn every_menu_entry_builds_over_a_valid_table() {
        let df = sample_frame();

        for kind in ChartKind::ALL {
            let result = build(kind, &df);
            assert!(result.is_ok(), "{} failed: {:?}", kind.label(), result.err());
        }
    }

    #[test]
    fn a_missing_column_is_an_error_not_a_panic() {
        let requirements: [(ChartKind, &[&str]); 10] = [
            (ChartKind::ReleaseYears, &["release_year"]),
            (ChartKind::ContentTypes, &["type"]),
            (ChartKind::TopCountries, &["country"]),
            (ChartKind::ReleaseTrend, &["release_year"]),
            (ChartKind::TypeVsRating, &["type", "rating"]),
            (ChartKind::MovieDurations, &["type", "duration"]),
            (ChartKind::Correlation, &["release_year", "type", "duration"]),
            (ChartKind::CountryMap, &["country"]),
            (ChartKind::DescriptionCloud, &["description"]),
            (ChartKind::CanadaGenres, &["country", "listed_in"]),
        ];

        for (kind, columns) in requirements {
            for column in columns {
                let df = sample_frame().drop(column).unwrap();
                assert!(
                    build(kind, &df).is_err(),
                    "{} without '{}' should be an error",
                    kind.label(),
                    column
                );
            }
        }
    }

    #[test]
    fn country_ranking_is_by_descending_count() {
        let mut countries = Vec::new();
        countries.extend(std::iter::repeat("US").take(10));
        countries.extend(std::iter::repeat("IN").take(8));
        countries.push("FR");
        let n = countries.len();

        let df = DataFrame::new(vec![
            Column::new("country".into(), countries),
            Column::new("type".into(), vec!["Movie"; n]),
        ])
        .unwrap();

        let figure = top_countries(&df).unwrap();
        let Figure::Bars(bars) = figure else {
            panic!("expected a bar figure");
        };

        assert_eq!(
            bars.entries,
            vec![
                ("US".to_string(), 10),
                ("IN".to_string(), 8),
                ("FR".to_string(), 1),
            ]
        );
    }

    #[test]
    fn movie_listed_first_in_the_type_chart() {
        let figure = content_types(&sample_frame()).unwrap();
        let Figure::Bars(bars) = figure else {
            panic!("expected a bar figure");
        };

        assert_eq!(bars.entries[0], ("Movie".to_string(), 4));
        assert_eq!(bars.entries[1], ("TV Show".to_string(), 2));
    }

    #[test]
    fn trend_years_come_back_ascending() {
        let figure = release_trend(&sample_frame()).unwrap();
        let Figure::Trend(trend) = figure else {
            panic!("expected a trend figure");
        };

        let years: Vec<f64> = trend.points.iter().map(|p| p[0]).collect();
        assert_eq!(years, vec![2018.0, 2019.0, 2020.0, 2021.0]);
        assert_eq!(trend.points[2][1], 2.0);
    }

    #[test]
    fn ratings_are_ordered_by_overall_frequency() {
        let figure = type_vs_rating(&sample_frame()).unwrap();
        let Figure::GroupedBars(grouped) = figure else {
            panic!("expected a grouped bar figure");
        };

        assert_eq!(grouped.categories, vec!["TV-MA", "PG-13", "R"]);
        assert_eq!(grouped.groups[0].0, "Movie");

        // Movie counts aligned with the category order
        assert_eq!(grouped.groups[0].1, vec![1, 2, 1]);
        assert_eq!(grouped.groups[1].1, vec![2, 0, 0]);
    }

    #[test]
    fn movie_filter_excludes_tv_and_parses_minutes() {
        let figure = movie_durations(&sample_frame()).unwrap();
        let Figure::Histogram(hist) = figure else {
            panic!("expected a histogram figure");
        };

        // 90, 95, 104 and 120 minutes, never the season counts
        let total: u32 = hist.bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 4);
        assert_eq!(hist.bins.len(), 30);
    }

    #[test]
    fn movie_filter_over_tv_only_rows_is_an_error() {
        let df = DataFrame::new(vec![
            Column::new("type".into(), vec!["TV Show", "TV Show"]),
            Column::new("duration".into(), vec!["2 Seasons", "1 Season"]),
        ])
        .unwrap();

        assert!(matches!(
            movie_durations(&df),
            Err(ChartError::EmptyFilter("Movie"))
        ));
    }

    #[test]
    fn correlation_diagonal_is_exactly_one() {
        let figure = correlation(&sample_frame()).unwrap();
        let Figure::Heatmap(heatmap) = figure else {
            panic!("expected a heatmap figure");
        };

        assert_eq!(heatmap.labels.len(), 3);
        for (i, row) in heatmap.values.iter().enumerate() {
            assert_eq!(row[i], 1.0);
        }
    }

    #[test]
    fn correlation_needs_two_complete_rows() {
        let df = DataFrame::new(vec![
            Column::new("release_year".into(), vec![2020i64, 2021]),
            Column::new("type".into(), vec!["Movie", "Movie"]),
            Column::new("duration".into(), vec!["90 min", "unknown"]),
        ])
        .unwrap();

        assert!(matches!(
            correlation(&df),
            Err(ChartError::TooFewRows(2))
        ));
    }

    #[test]
    fn canada_filter_matches_co_productions() {
        let figure = canada_genres(&sample_frame()).unwrap();
        let Figure::Bars(bars) = figure else {
            panic!("expected a bar figure");
        };

        // "Canada, France" and "Canada" rows expand to one count per genre tag
        let lookup: HashMap<&str, u32> = bars
            .entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        assert_eq!(lookup.get("Dramas"), Some(&1));
        assert_eq!(lookup.get("Comedies"), Some(&1));
        assert_eq!(lookup.get("TV Dramas"), Some(&1));
        assert_eq!(lookup.get("TV Mysteries"), Some(&1));
        assert_eq!(lookup.get("Thrillers"), None);
    }

    #[test]
    fn canada_filter_without_matches_is_an_error() {
        let df = DataFrame::new(vec![
            Column::new("country".into(), vec!["Japan", "India"]),
            Column::new("listed_in".into(), vec!["Dramas", "Comedies"]),
        ])
        .unwrap();

        assert!(matches!(
            canada_genres(&df),
            Err(ChartError::EmptyFilter("Canada"))
        ));
    }

    #[test]
    fn word_cloud_skips_stopwords_and_ranks_by_count() {
        let figure = description_cloud(&sample_frame()).unwrap();
        let Figure::WordCloud(cloud) = figure else {
            panic!("expected a word cloud figure");
        };

        let words: Vec<&str> = cloud.words.iter().map(|(w, _)| w.as_str()).collect();
        assert!(!words.contains(&"the"));
        assert!(!words.contains(&"of"));
        assert!(words.contains(&"story"));

        for pair in cloud.words.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn top_five_countries_feed_the_map() {
        let figure = country_map(&sample_frame()).unwrap();
        let Figure::WorldMap(map) = figure else {
            panic!("expected a world map figure");
        };

        assert_eq!(map.ranked.len(), 5);
        assert_eq!(map.ranked[0], ("United States".to_string(), 2));
    }
}
