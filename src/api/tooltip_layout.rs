use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::core::{ChartScales, HoverSample, SeriesConfig};
use crate::render::{Annotation, Color, Point, TooltipSide};

use super::resolver::anchor_sample;
use super::{LabelFormat, TooltipLayoutConfig};

const FALLBACK_SERIES_COLOR: &str = "#808080";

/// Read-only inputs of one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext<'a> {
    pub scales: &'a ChartScales,
    pub series: &'a IndexMap<String, SeriesConfig>,
    pub config: &'a TooltipLayoutConfig,
    pub labels: &'a LabelFormat,
}

/// Greedy bottom-up stacking of box centers.
///
/// `naturals` must be ordered bottom-most first (descending Y). Each center
/// is pulled up to keep `gap_px` between boxes, never below the plot's
/// bottom edge and never above its top edge.
#[must_use]
pub fn stack_box_centers(
    naturals: &[f64],
    plot_top: f64,
    plot_bottom: f64,
    box_height: f64,
    gap_px: f64,
) -> Vec<f64> {
    let half = box_height / 2.0;
    let highest_center = plot_top + half;
    let mut previous_top = plot_bottom + gap_px;
    naturals
        .iter()
        .map(|natural| {
            let center = natural.min(previous_top - gap_px - half).max(highest_center);
            previous_top = center - half;
            center
        })
        .collect()
}

/// Which side of `pointer_x` a box of `box_width` fits on.
#[must_use]
pub fn tooltip_side(pointer_x: f64, offset_x: f64, box_width: f64, plot_right: f64) -> TooltipSide {
    if pointer_x + offset_x + box_width > plot_right {
        TooltipSide::Left
    } else {
        TooltipSide::Right
    }
}

struct TooltipEntry<'s> {
    sample: &'s HoverSample,
    text: String,
    color: Color,
}

/// Turns resolved samples into the hover annotation list.
///
/// Emits, in order: the guide line, the date label, one marker per sample
/// and the stacked tooltips (bottom-most first). Samples whose value
/// formats to the zero text share a single tooltip. No samples, no
/// annotations.
#[must_use]
pub fn layout_hover(
    ctx: LayoutContext<'_>,
    pointer_x: f64,
    samples: &[HoverSample],
) -> Vec<Annotation> {
    let geometry = ctx.scales.geometry();
    let pointer_x = geometry.clamp_x(pointer_x);
    let Some(anchor) = anchor_sample(samples, ctx.scales.invert_x(pointer_x)) else {
        return Vec::new();
    };

    let plot_top = geometry.plot_top();
    let plot_bottom = geometry.plot_bottom();
    let config = ctx.config;
    let color_of = |sample: &HoverSample| {
        ctx.series.get_full(&sample.series_id).map_or_else(
            || Color::new(FALLBACK_SERIES_COLOR),
            |(index, _, series)| series.resolved_color(index),
        )
    };

    let mut annotations = Vec::with_capacity(2 + samples.len() * 2);
    annotations.push(Annotation::VerticalLine {
        x: anchor.screen_x,
        y_top: plot_top,
        y_bottom: plot_bottom,
    });
    annotations.push(Annotation::DateLabel {
        position: Point::new(
            geometry.clamp_x(anchor.screen_x),
            plot_bottom + config.date_label_offset_px,
        ),
        text: ctx.labels.format_date(anchor.timestamp),
    });
    annotations.extend(samples.iter().map(|sample| Annotation::Marker {
        series_id: sample.series_id.clone(),
        position: Point::new(sample.screen_x, sample.screen_y),
        radius: config.marker_radius_px,
        color: color_of(sample),
    }));

    let zero_text = ctx.labels.zero_text();
    let mut zero_taken = false;
    let mut entries: SmallVec<[TooltipEntry<'_>; 8]> = SmallVec::new();
    for sample in samples {
        let value_text = ctx.labels.format_value(sample.value);
        if value_text == zero_text {
            if zero_taken {
                continue;
            }
            zero_taken = true;
        }
        let label = ctx
            .series
            .get(&sample.series_id)
            .map_or(sample.series_id.as_str(), |series| series.label.as_str());
        entries.push(TooltipEntry {
            sample,
            text: format!("{label}: {value_text}"),
            color: color_of(sample),
        });
    }
    // Stable: equal heights keep series order.
    entries.sort_by(|left, right| right.sample.screen_y.total_cmp(&left.sample.screen_y));

    let naturals: SmallVec<[f64; 8]> = entries.iter().map(|entry| entry.sample.screen_y).collect();
    let centers = stack_box_centers(
        &naturals,
        plot_top,
        plot_bottom,
        config.box_height_px,
        config.gap_px,
    );
    let side = tooltip_side(
        pointer_x,
        config.offset_x_px,
        config.box_width_px,
        geometry.plot_right(),
    );
    let box_x = match side {
        TooltipSide::Right => pointer_x + config.offset_x_px,
        TooltipSide::Left => pointer_x - config.offset_x_px - config.box_width_px,
    };

    annotations.extend(entries.into_iter().zip(centers).map(|(entry, center)| {
        Annotation::Tooltip {
            series_id: entry.sample.series_id.clone(),
            position: Point::new(box_x, center - config.box_height_px / 2.0),
            width: config.box_width_px,
            height: config.box_height_px,
            side,
            text: entry.text,
            color: entry.color,
        }
    }));
    annotations
}
