use crate::metric_row::MetricRow;
use eyre::Result;
use eyre::WrapErr;
use eyre::bail;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use tracing::info;

const CHART_SIZE: (u32, u32) = (800, 500);
const PURPLE: RGBColor = RGBColor(128, 0, 128);

pub struct ChartOptions {
    /// Directory the SVG files are written to; created if missing.
    pub out_dir: PathBuf,
    /// File name prefix, e.g. `jacobi` gives `jacobi_time.svg`.
    pub stem: String,
    /// Name of the measured program, used in the chart captions.
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPaths {
    pub time: PathBuf,
    pub speedup: PathBuf,
    pub efficiency: PathBuf,
}

struct LineChart<'a> {
    caption: String,
    y_desc: &'a str,
    label: &'a str,
    color: RGBColor,
    points: Vec<(f64, f64)>,
    /// Drawn dashed with a legend; the ideal speedup line.
    reference: Option<(&'a str, Vec<(f64, f64)>)>,
}

/// Renders the time, speedup and efficiency charts for one experiment.
pub fn render_charts(rows: &[MetricRow], options: &ChartOptions) -> Result<ChartPaths> {
    if rows.is_empty() {
        bail!("Cannot chart an empty set of rows");
    }
    std::fs::create_dir_all(&options.out_dir).wrap_err_with(|| {
        format!(
            "Failed to create output directory {}",
            options.out_dir.display()
        )
    })?;
    let path_for = |suffix: &str| {
        options
            .out_dir
            .join(format!("{}_{}.svg", options.stem, suffix))
    };
    let workers = |row: &MetricRow| row.worker_count.as_f64();
    let paths = ChartPaths {
        time: path_for("time"),
        speedup: path_for("speedup"),
        efficiency: path_for("efficiency"),
    };

    draw_line_chart(
        &paths.time,
        LineChart {
            caption: format!("{} Performance", options.title),
            y_desc: "Execution Time (s)",
            label: "Time",
            color: BLUE,
            points: rows
                .iter()
                .map(|r| (workers(r), r.elapsed_seconds))
                .collect(),
            reference: None,
        },
    )?;
    draw_line_chart(
        &paths.speedup,
        LineChart {
            caption: format!("{} Scalability", options.title),
            y_desc: "Speedup",
            label: "Speedup",
            color: GREEN,
            points: rows.iter().map(|r| (workers(r), r.speedup)).collect(),
            reference: Some((
                "Ideal Speedup",
                rows.iter().map(|r| (workers(r), workers(r))).collect(),
            )),
        },
    )?;
    draw_line_chart(
        &paths.efficiency,
        LineChart {
            caption: format!("{} Efficiency", options.title),
            y_desc: "Efficiency (%)",
            label: "Efficiency",
            color: PURPLE,
            points: rows.iter().map(|r| (workers(r), r.efficiency)).collect(),
            reference: None,
        },
    )?;

    info!(
        "Wrote charts {}, {} and {}",
        paths.time.display(),
        paths.speedup.display(),
        paths.efficiency.display()
    );
    Ok(paths)
}

fn x_range(points: &[(f64, f64)]) -> Range<f64> {
    let min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    if max > min {
        min..max
    } else {
        (min - 1.0).max(0.0)..max + 1.0
    }
}

fn y_range<'p>(series: impl IntoIterator<Item = &'p (f64, f64)>) -> Range<f64> {
    let max = series.into_iter().map(|p| p.1).fold(0.0, f64::max);
    if max > 0.0 { 0.0..max * 1.1 } else { 0.0..1.0 }
}

fn draw_line_chart(path: &Path, chart: LineChart<'_>) -> Result<()> {
    debug!("Drawing {}", path.display());
    let reference_points = chart.reference.as_ref().map(|(_, points)| points.as_slice());
    let x_range = x_range(&chart.points);
    let y_range = y_range(
        chart
            .points
            .iter()
            .chain(reference_points.unwrap_or_default()),
    );

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut context = ChartBuilder::on(&root)
        .caption(&chart.caption, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;
    context
        .configure_mesh()
        .x_desc("Number of Threads")
        .y_desc(chart.y_desc)
        .x_label_formatter(&|x| format!("{x:.0}"))
        .draw()?;

    let color = chart.color;
    context
        .draw_series(LineSeries::new(
            chart.points.iter().copied(),
            color.stroke_width(2),
        ))?
        .label(chart.label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    context.draw_series(
        chart
            .points
            .iter()
            .map(|&point| Circle::new(point, 4, color.filled())),
    )?;

    if let Some((label, points)) = chart.reference {
        context
            .draw_series(DashedLineSeries::new(
                points,
                8,
                6,
                RED.stroke_width(2),
            ))?
            .label(label)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
        context
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
