//! Chart Plotter Module
//! Draws figure values as interactive egui_plot charts and painted panels.

use egui::epaint::TextShape;
use egui::{Color32, FontId, Pos2, Rect, RichText, Stroke, Vec2};
use egui_plot::{
    Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, PlotResponse, Points, Polygon, Text,
};

use super::figure::{
    BarPalette, BarsFigure, Figure, GroupedBarsFigure, HeatmapFigure, HistogramFigure, Tint,
    TrendFigure, WordCloudFigure, WorldMapFigure,
};
use super::geo;

/// Fixed palette for ranked bars, one color per rank.
pub const RANK_PALETTE: [Color32; 13] = [
    Color32::from_rgb(135, 206, 235), // Sky blue
    Color32::from_rgb(255, 165, 0),   // Orange
    Color32::from_rgb(0, 128, 0),     // Green
    Color32::from_rgb(255, 0, 0),     // Red
    Color32::from_rgb(128, 0, 128),   // Purple
    Color32::from_rgb(165, 42, 42),   // Brown
    Color32::from_rgb(255, 192, 203), // Pink
    Color32::from_rgb(128, 128, 128), // Gray
    Color32::from_rgb(128, 128, 0),   // Olive
    Color32::from_rgb(0, 255, 255),   // Cyan
    Color32::from_rgb(255, 0, 255),   // Magenta
    Color32::from_rgb(255, 215, 0),   // Gold
    Color32::from_rgb(0, 255, 0),     // Lime
];

pub const MOVIE_COLOR: Color32 = Color32::from_rgb(135, 206, 235); // Sky blue
pub const TV_SHOW_COLOR: Color32 = Color32::from_rgb(255, 165, 0); // Orange

const HIST_RED: Color32 = Color32::from_rgb(255, 0, 0);
const HIST_BLUE: Color32 = Color32::from_rgb(76, 114, 176);
const TREND_COLOR: Color32 = Color32::from_rgb(76, 114, 176);

const MAP_BASE: Color32 = Color32::from_rgb(222, 222, 222);
const MAP_OUTLINE: Color32 = Color32::from_rgb(150, 150, 150);

/// Viridis ramp anchors, dark purple to yellow.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (72, 40, 120),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

/// RdBu ramp anchors, dark red through white to dark blue.
const RD_BU: [(u8, u8, u8); 5] = [
    (103, 0, 31),
    (214, 96, 77),
    (247, 247, 247),
    (67, 147, 195),
    (5, 48, 97),
];

/// Renders figures with egui_plot and the egui painter.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw any figure; `full_size` selects the main card height.
    pub fn draw_figure(ui: &mut egui::Ui, figure: &Figure, full_size: bool) {
        match figure {
            Figure::Histogram(figure) => Self::draw_histogram(ui, figure, full_size),
            Figure::Bars(figure) => Self::draw_bars(ui, figure, full_size),
            Figure::Trend(figure) => Self::draw_trend(ui, figure, full_size),
            Figure::GroupedBars(figure) => Self::draw_grouped_bars(ui, figure, full_size),
            Figure::Heatmap(figure) => Self::draw_heatmap(ui, figure, full_size),
            Figure::WorldMap(figure) => Self::draw_world_map(ui, figure, full_size),
            Figure::WordCloud(figure) => Self::draw_word_cloud(ui, figure),
        }
    }

    fn plot_height(full_size: bool) -> f32 {
        if full_size {
            360.0
        } else {
            220.0
        }
    }

    /// Histogram bars with the smoothed density curve on top.
    fn draw_histogram(ui: &mut egui::Ui, figure: &HistogramFigure, full_size: bool) {
        let color = match figure.tint {
            Tint::Red => HIST_RED,
            Tint::Blue => HIST_BLUE,
        };

        Plot::new(format!("hist_{}", figure.title))
            .height(Self::plot_height(full_size))
            .allow_scroll(false)
            .x_axis_label(figure.x_label)
            .y_axis_label(figure.y_label)
            .show(ui, |plot_ui| {
                let bars: Vec<Bar> = figure
                    .bins
                    .iter()
                    .map(|bin| {
                        Bar::new(bin.center(), bin.count as f64)
                            .width(bin.width())
                            .fill(color.gamma_multiply(0.55))
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars));

                if !figure.density.is_empty() {
                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(figure.density.iter().copied()))
                            .color(color)
                            .width(2.0),
                    );
                }
            });
    }

    /// Category bars at integer x positions, labels on the axis or rotated
    /// 45 degrees below it.
    fn draw_bars(ui: &mut egui::Ui, figure: &BarsFigure, full_size: bool) {
        let labels: Vec<String> = figure.entries.iter().map(|(name, _)| name.clone()).collect();
        let total = figure.entries.len();
        let rotate = figure.rotate_labels;

        let tick_labels = labels.clone();
        let response = Plot::new(format!("bars_{}", figure.title))
            .height(Self::plot_height(full_size))
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(figure.x_label)
            .y_axis_label(figure.y_label)
            .x_axis_formatter(move |mark, _range| {
                if rotate {
                    return String::new();
                }
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < tick_labels.len() {
                    tick_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                let bars: Vec<Bar> = figure
                    .entries
                    .iter()
                    .enumerate()
                    .map(|(index, (name, count))| {
                        let color = Self::bar_color(figure.palette, name, index, total);
                        Bar::new(index as f64, *count as f64).width(0.7).fill(color)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars));
            });

        if rotate {
            Self::draw_rotated_labels(ui, &response, &labels);
        }
    }

    /// Count line over the years with point markers.
    fn draw_trend(ui: &mut egui::Ui, figure: &TrendFigure, full_size: bool) {
        // The main card and the footer can both show the trend in one frame,
        // so the plot id must differ by size.
        Plot::new(format!("trend_{}_{}", figure.title, full_size))
            .height(Self::plot_height(full_size))
            .allow_scroll(false)
            .x_axis_label(figure.x_label)
            .y_axis_label(figure.y_label)
            .x_axis_formatter(|mark, _range| {
                let year = mark.value.round();
                if (mark.value - year).abs() < 1e-6 {
                    format!("{}", year as i64)
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(figure.points.iter().copied()))
                        .color(TREND_COLOR)
                        .width(2.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(figure.points.iter().copied()))
                        .radius(2.5)
                        .color(TREND_COLOR),
                );
            });
    }

    /// Side-by-side bars per category, one series per group, legend on.
    fn draw_grouped_bars(ui: &mut egui::Ui, figure: &GroupedBarsFigure, full_size: bool) {
        let labels = figure.categories.clone();
        let group_count = figure.groups.len().max(1);
        let slot = 0.8_f64;
        let bar_width = slot / group_count as f64;

        let response = Plot::new(format!("grouped_{}", figure.title))
            .height(Self::plot_height(full_size))
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(figure.x_label)
            .y_axis_label(figure.y_label)
            .legend(Legend::default())
            .x_axis_formatter(|_mark, _range| String::new())
            .show(ui, |plot_ui| {
                for (group_index, (group_name, counts)) in figure.groups.iter().enumerate() {
                    let color = Self::type_color(group_name, group_index);
                    let bars: Vec<Bar> = counts
                        .iter()
                        .enumerate()
                        .map(|(category_index, &count)| {
                            let x = category_index as f64 - slot / 2.0
                                + bar_width * (group_index as f64 + 0.5);
                            Bar::new(x, count as f64)
                                .width(bar_width * 0.9)
                                .fill(color)
                        })
                        .collect();
                    plot_ui.bar_chart(BarChart::new(bars).name(group_name));
                }
            });

        Self::draw_rotated_labels(ui, &response, &labels);
    }

    /// Annotated correlation cells on the fixed [-1, 1] scale, first row
    /// at the top.
    fn draw_heatmap(ui: &mut egui::Ui, figure: &HeatmapFigure, full_size: bool) {
        let k = figure.labels.len();
        let x_labels: Vec<String> = figure.labels.iter().map(|s| s.to_string()).collect();
        let y_labels = x_labels.clone();

        Plot::new(format!("heatmap_{}", figure.title))
            .height(Self::plot_height(full_size))
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show_grid(false)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .y_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < y_labels.len() {
                    y_labels[y_labels.len() - 1 - idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (i, row) in figure.values.iter().enumerate() {
                    for (j, &value) in row.iter().enumerate() {
                        let x = j as f64;
                        let y = (k - 1 - i) as f64;
                        let corners = vec![
                            [x - 0.5, y - 0.5],
                            [x + 0.5, y - 0.5],
                            [x + 0.5, y + 0.5],
                            [x - 0.5, y + 0.5],
                        ];

                        let fill = if value.is_nan() {
                            Color32::from_gray(120)
                        } else {
                            Self::rd_bu((value + 1.0) / 2.0)
                        };
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::from(corners))
                                .fill_color(fill)
                                .stroke(Stroke::new(1.0, Color32::WHITE)),
                        );

                        let label = if value.is_nan() {
                            "-".to_string()
                        } else {
                            format!("{:.2}", value)
                        };
                        let text_color = if !value.is_nan() && value.abs() > 0.5 {
                            Color32::WHITE
                        } else {
                            Color32::BLACK
                        };
                        plot_ui.text(Text::new(
                            PlotPoint::new(x, y),
                            RichText::new(label).size(14.0).color(text_color),
                        ));
                    }
                }
            });
    }

    /// Base world outlines in gray, the ranked countries shaded on the
    /// viridis ramp over the top-5 count range.
    fn draw_world_map(ui: &mut egui::Ui, figure: &WorldMapFigure, full_size: bool) {
        let height = if full_size { 420.0 } else { 240.0 };

        let max = figure.ranked.iter().map(|(_, c)| *c).max().unwrap_or(1);
        let min = figure.ranked.iter().map(|(_, c)| *c).min().unwrap_or(0);

        Plot::new("world_map")
            .height(height)
            .data_aspect(1.0)
            .allow_scroll(false)
            .show_axes(false)
            .show_grid(false)
            .include_x(-180.0)
            .include_x(180.0)
            .include_y(-60.0)
            .include_y(80.0)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                for region in geo::REGIONS {
                    for ring in region.rings {
                        plot_ui.polygon(
                            Self::ring_polygon(ring)
                                .fill_color(MAP_BASE)
                                .stroke(Stroke::new(1.0, MAP_OUTLINE)),
                        );
                    }
                }

                for (name, count) in &figure.ranked {
                    let Some(region) = geo::find_region(name) else {
                        continue;
                    };

                    let t = if max > min {
                        (count - min) as f64 / (max - min) as f64
                    } else {
                        1.0
                    };
                    let entry = format!("{} ({}: {})", region.name, figure.legend_label, count);

                    for ring in region.rings {
                        plot_ui.polygon(
                            Self::ring_polygon(ring)
                                .fill_color(Self::viridis(t))
                                .stroke(Stroke::new(1.0, MAP_OUTLINE))
                                .name(&entry),
                        );
                    }
                }
            });
    }

    fn ring_polygon(ring: &[[f64; 2]]) -> Polygon {
        Polygon::new(PlotPoints::from_iter(ring.iter().copied()))
    }

    /// Frequency-sized words placed on an outward spiral over a fixed
    /// 800x400 white canvas; words that find no free slot are skipped.
    fn draw_word_cloud(ui: &mut egui::Ui, figure: &WordCloudFigure) {
        const CLOUD_SIZE: Vec2 = Vec2::new(800.0, 400.0);

        let (rect, _response) = ui.allocate_exact_size(CLOUD_SIZE, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Color32::WHITE);

        let Some(&(_, top_count)) = figure.words.first() else {
            return;
        };
        let top_count = top_count.max(1) as f32;

        let mut taken: Vec<Rect> = Vec::new();
        for (index, (word, count)) in figure.words.iter().enumerate() {
            let scale = (*count as f32 / top_count).sqrt();
            let font = FontId::proportional(12.0 + 40.0 * scale);
            let color = Self::viridis((index as f64 * 0.618_034).fract());
            let galley = painter.layout_no_wrap(word.clone(), font, color);
            let size = galley.size();

            let vertical = index % 10 == 6;
            let footprint = if vertical {
                Vec2::new(size.y, size.x)
            } else {
                size
            };

            let Some(slot) = Self::spiral_slot(rect, footprint, index, &taken) else {
                continue;
            };
            taken.push(slot);

            if vertical {
                // Rotated a quarter turn, reads bottom to top; the galley
                // anchor lands at the slot's lower left corner.
                let pos = Pos2::new(slot.left(), slot.bottom());
                painter.add(
                    TextShape::new(pos, galley, color)
                        .with_angle(-std::f32::consts::FRAC_PI_2),
                );
            } else {
                painter.add(TextShape::new(slot.min, galley, color));
            }
        }
    }

    /// Walk an outward spiral from the canvas center and return the first
    /// collision-free slot for the footprint, None when nothing fits.
    fn spiral_slot(canvas: Rect, footprint: Vec2, seed: usize, taken: &[Rect]) -> Option<Rect> {
        let center = canvas.center();
        let mut theta = (seed % 8) as f32 * std::f32::consts::FRAC_PI_4;

        for _ in 0..1200 {
            let radius = 2.0 + 1.5 * theta;
            if radius > 470.0 {
                break;
            }

            let offset = Vec2::new(radius * theta.cos() * 1.9, radius * theta.sin() * 0.95);
            let slot = Rect::from_center_size(center + offset, footprint);
            theta += 0.3;

            if canvas.contains_rect(slot)
                && !taken.iter().any(|other| other.intersects(slot.expand(2.0)))
            {
                return Some(slot);
            }
        }

        None
    }

    /// Paint the category labels at 45 degrees below the x axis and
    /// reserve the vertical space they cover.
    fn draw_rotated_labels(ui: &mut egui::Ui, response: &PlotResponse<()>, labels: &[String]) {
        let color = ui.visuals().text_color();
        let bottom = response.transform.frame().bottom();
        let mut max_extent: f32 = 0.0;

        for (index, label) in labels.iter().enumerate() {
            let anchor = response
                .transform
                .position_from_point(&PlotPoint::new(index as f64, 0.0));
            let galley = ui
                .painter()
                .layout_no_wrap(label.clone(), FontId::proportional(11.0), color);
            let size = galley.size();

            let pos = Pos2::new(anchor.x, bottom + 4.0);
            ui.painter().add(
                TextShape::new(pos, galley, color).with_angle(std::f32::consts::FRAC_PI_4),
            );

            max_extent = max_extent.max((size.x + size.y) * std::f32::consts::FRAC_1_SQRT_2);
        }

        ui.add_space(max_extent + 8.0);
    }

    fn bar_color(palette: BarPalette, name: &str, index: usize, total: usize) -> Color32 {
        match palette {
            BarPalette::TypeColors => Self::type_color(name, index),
            BarPalette::Ranked => RANK_PALETTE[index % RANK_PALETTE.len()],
            BarPalette::ViridisRamp => {
                let t = if total > 1 {
                    index as f64 / (total - 1) as f64
                } else {
                    0.0
                };
                Self::viridis(t)
            }
        }
    }

    /// Bar color for a content type; other values fall back to the rank
    /// palette.
    fn type_color(name: &str, fallback_index: usize) -> Color32 {
        match name {
            "Movie" => MOVIE_COLOR,
            "TV Show" => TV_SHOW_COLOR,
            _ => RANK_PALETTE[fallback_index % RANK_PALETTE.len()],
        }
    }

    /// Sample the viridis ramp at t in [0, 1].
    pub fn viridis(t: f64) -> Color32 {
        Self::ramp(&VIRIDIS, t)
    }

    /// Sample the RdBu ramp at t in [0, 1]; 0 is red, 1 is blue.
    pub fn rd_bu(t: f64) -> Color32 {
        Self::ramp(&RD_BU, t)
    }

    fn ramp(anchors: &[(u8, u8, u8)], t: f64) -> Color32 {
        let t = t.clamp(0.0, 1.0);
        let scaled = t * (anchors.len() - 1) as f64;
        let low = scaled.floor() as usize;
        let high = (low + 1).min(anchors.len() - 1);
        let weight = scaled - low as f64;

        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * weight).round() as u8;
        let (r0, g0, b0) = anchors[low];
        let (r1, g1, b1) = anchors[high];
        Color32::from_rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viridis_hits_its_endpoints_and_clamps() {
        assert_eq!(ChartPlotter::viridis(0.0), Color32::from_rgb(68, 1, 84));
        assert_eq!(ChartPlotter::viridis(1.0), Color32::from_rgb(253, 231, 37));
        assert_eq!(ChartPlotter::viridis(-0.5), ChartPlotter::viridis(0.0));
        assert_eq!(ChartPlotter::viridis(2.0), ChartPlotter::viridis(1.0));
    }

    #[test]
    fn rd_bu_midpoint_is_white() {
        assert_eq!(ChartPlotter::rd_bu(0.5), Color32::from_rgb(247, 247, 247));
    }

    #[test]
    fn ranked_palette_cycles_past_thirteen() {
        let first = ChartPlotter::bar_color(BarPalette::Ranked, "x", 0, 20);
        let wrapped = ChartPlotter::bar_color(BarPalette::Ranked, "x", 13, 20);
        assert_eq!(first, wrapped);
    }

    #[test]
    fn type_colors_follow_the_name_not_the_position() {
        assert_eq!(ChartPlotter::type_color("Movie", 5), MOVIE_COLOR);
        assert_eq!(ChartPlotter::type_color("TV Show", 0), TV_SHOW_COLOR);
    }

    #[test]
    fn spiral_places_the_first_word_near_the_center() {
        let canvas = Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 400.0));
        let slot = ChartPlotter::spiral_slot(canvas, Vec2::new(120.0, 40.0), 0, &[]).unwrap();

        assert!(canvas.contains_rect(slot));
        assert!(slot.center().distance(canvas.center()) < 40.0);
    }

    #[test]
    fn spiral_slots_never_overlap() {
        let canvas = Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 400.0));
        let mut taken: Vec<Rect> = Vec::new();

        for seed in 0..30 {
            if let Some(slot) = ChartPlotter::spiral_slot(canvas, Vec2::new(90.0, 30.0), seed, &taken)
            {
                for other in &taken {
                    assert!(!other.intersects(slot));
                }
                taken.push(slot);
            }
        }

        assert!(taken.len() > 10);
    }
}
