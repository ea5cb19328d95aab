//! Six-panel SVG dashboard.

use std::f64::consts::PI;
use std::path::Path;

use chrono::Days;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::table::{AppointmentTable, Column, WEEKDAY_LABELS_ES};
use super::ReportError;

type DrawResult<T = ()> = Result<T, Box<dyn std::error::Error>>;
type Panel<'a> = DrawingArea<SVGBackend<'a>, Shift>;

const SIZE: (u32, u32) = (1800, 1200);
const TITLE_SIZE: i32 = 20;
const LABEL_SIZE: i32 = 12;

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const CORAL: RGBColor = RGBColor(255, 127, 80);
const PURPLE: RGBColor = RGBColor(128, 0, 128);
const STATUS_COLORS: [RGBColor; 3] = [
    RGBColor(40, 167, 69),
    RGBColor(255, 193, 7),
    RGBColor(220, 53, 69),
];
const HEAT_LOW: (u8, u8, u8) = (255, 255, 204);
const HEAT_HIGH: (u8, u8, u8) = (189, 0, 38);

/// Render the dashboard for `table` into an SVG file at `path`.
pub fn render(table: &AppointmentTable, path: &Path) -> Result<(), ReportError> {
    draw_dashboard(table, path).map_err(|e| ReportError::Chart(e.to_string()))?;
    tracing::debug!(path = %path.display(), "Chart written");
    Ok(())
}

fn draw_dashboard(table: &AppointmentTable, path: &Path) -> DrawResult {
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 3));

    let specialties = table.tally(Column::Specialty);
    let centers = table.tally(Column::Center);
    let statuses = table.tally(Column::Status);
    let weekdays: Vec<(&str, usize)> = WEEKDAY_LABELS_ES
        .iter()
        .copied()
        .zip(table.weekday_counts())
        .collect();

    bar_panel(
        &panels[0],
        "Citas por Especialidad",
        &specialties.sorted_desc(),
        ("Especialidad", "Número de Citas"),
        |_| SKY_BLUE,
    )?;
    pie_panel(&panels[1], "Distribución por Centro de Salud", &centers.sorted_desc())?;
    bar_panel(
        &panels[2],
        "Estado de las Citas",
        &statuses.sorted_desc(),
        ("Estado", "Cantidad"),
        |i| STATUS_COLORS[i % STATUS_COLORS.len()],
    )?;
    timeline_panel(&panels[3], table)?;
    bar_panel(
        &panels[4],
        "Citas por Día de la Semana",
        &weekdays,
        ("Día", "Número de Citas"),
        |_| CORAL,
    )?;
    heatmap_panel(&panels[5], table)?;

    root.present()?;
    Ok(())
}

fn segment_label(labels: &[&str], value: &SegmentValue<i32>) -> String {
    match value {
        SegmentValue::CenterOf(i) => usize::try_from(*i)
            .ok()
            .and_then(|i| labels.get(i))
            .map(|l| l.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn bar_panel(
    area: &Panel<'_>,
    title: &str,
    bars: &[(&str, usize)],
    (x_desc, y_desc): (&str, &str),
    color: impl Fn(usize) -> RGBColor,
) -> DrawResult {
    let labels: Vec<&str> = bars.iter().map(|(l, _)| *l).collect();
    let n = bars.len() as i32;
    let y_max = bars.iter().map(|(_, c)| *c).max().unwrap_or(0) as i32 + 1;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", TITLE_SIZE).into_font())
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d((0..n).into_segmented(), 0..y_max)?;

    let label = |v: &SegmentValue<i32>| segment_label(&labels, v);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&label)
        .x_label_style(("sans-serif", LABEL_SIZE).into_font())
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(bars.iter().enumerate().map(|(i, (_, count))| {
        let x = i as i32;
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(x), 0),
                (SegmentValue::Exact(x + 1), *count as i32),
            ],
            color(i).filled(),
        );
        bar.set_margin(0, 0, 6, 6);
        bar
    }))?;

    Ok(())
}

fn pie_panel(area: &Panel<'_>, title: &str, slices: &[(&str, usize)]) -> DrawResult {
    let area = area.titled(title, ("sans-serif", TITLE_SIZE).into_font())?;
    let (w, h) = area.dim_in_pixel();
    let (cx, cy) = (w as f64 / 2.0, h as f64 / 2.0);
    let radius = w.min(h) as f64 * 0.35;
    let total: usize = slices.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return Ok(());
    }

    let at = |angle: f64, r: f64| ((cx + r * angle.cos()) as i32, (cy + r * angle.sin()) as i32);

    // Start at twelve o'clock.
    let mut start = -PI / 2.0;
    for (i, (label, count)) in slices.iter().enumerate() {
        let share = *count as f64 / total as f64;
        let sweep = 2.0 * PI * share;
        let steps = ((share * 120.0).ceil() as usize).max(1);

        let mut points = Vec::with_capacity(steps + 2);
        points.push((cx as i32, cy as i32));
        for s in 0..=steps {
            points.push(at(start + sweep * s as f64 / steps as f64, radius));
        }
        area.draw(&Polygon::new(points, Palette99::pick(i).filled()))?;

        let mid = start + sweep / 2.0;
        area.draw(&Text::new(
            format!("{:.1}%", share * 100.0),
            at(mid, radius * 0.6),
            ("sans-serif", LABEL_SIZE).into_font(),
        ))?;
        area.draw(&Text::new(
            label.to_string(),
            at(mid, radius * 1.08),
            ("sans-serif", LABEL_SIZE).into_font(),
        ))?;

        start += sweep;
    }

    Ok(())
}

fn timeline_panel(area: &Panel<'_>, table: &AppointmentTable) -> DrawResult {
    let per_date = table.per_date();
    let (Some(&(first, _)), Some(&(last, _))) = (per_date.first(), per_date.last()) else {
        return Ok(());
    };

    let span = (last - first).num_days() as i32;
    let points: Vec<(i32, i32)> = per_date
        .iter()
        .map(|(date, n)| ((*date - first).num_days() as i32, *n as i32))
        .collect();
    let y_max = points.iter().map(|(_, n)| *n).max().unwrap_or(0) + 1;

    let mut chart = ChartBuilder::on(area)
        .caption(
            "Tendencia de Citas en el Tiempo",
            ("sans-serif", TITLE_SIZE).into_font(),
        )
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(0..span + 1, 0..y_max)?;

    let label = |offset: &i32| {
        u64::try_from(*offset)
            .ok()
            .and_then(|d| first.checked_add_days(Days::new(d)))
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    };
    chart
        .configure_mesh()
        .x_label_formatter(&label)
        .x_label_style(("sans-serif", LABEL_SIZE).into_font())
        .x_desc("Fecha")
        .y_desc("Número de Citas")
        .draw()?;

    chart.draw_series(LineSeries::new(points.clone(), PURPLE.stroke_width(2)))?;
    chart.draw_series(
        points
            .into_iter()
            .map(|p| Circle::new(p, 4, PURPLE.filled())),
    )?;

    Ok(())
}

fn heat_color(count: usize, max: usize) -> RGBColor {
    let t = count as f64 / max.max(1) as f64;
    let mix = |lo: u8, hi: u8| (lo as f64 + (hi as f64 - lo as f64) * t).round() as u8;
    RGBColor(
        mix(HEAT_LOW.0, HEAT_HIGH.0),
        mix(HEAT_LOW.1, HEAT_HIGH.1),
        mix(HEAT_LOW.2, HEAT_HIGH.2),
    )
}

fn heatmap_panel(area: &Panel<'_>, table: &AppointmentTable) -> DrawResult {
    let tab = table.crosstab();
    let cols = tab.centers.len() as i32;
    let rows = tab.specialties.len() as i32;
    let max = tab.max();

    let mut chart = ChartBuilder::on(area)
        .caption(
            "Especialidades por Centro de Salud",
            ("sans-serif", TITLE_SIZE).into_font(),
        )
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(110)
        .build_cartesian_2d((0..cols).into_segmented(), (0..rows).into_segmented())?;

    let center_label = |v: &SegmentValue<i32>| segment_label(&tab.centers, v);
    let specialty_label = |v: &SegmentValue<i32>| segment_label(&tab.specialties, v);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(tab.centers.len())
        .y_labels(tab.specialties.len())
        .x_label_formatter(&center_label)
        .y_label_formatter(&specialty_label)
        .x_label_style(("sans-serif", LABEL_SIZE).into_font())
        .y_label_style(("sans-serif", LABEL_SIZE).into_font())
        .x_desc("Centro de Salud")
        .y_desc("Especialidad")
        .draw()?;

    let cells: Vec<(i32, i32, usize)> = tab
        .matrix
        .iter()
        .enumerate()
        .flat_map(|(s, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, n)| (c as i32, s as i32, *n))
        })
        .collect();

    chart.draw_series(cells.iter().map(|&(c, s, n)| {
        Rectangle::new(
            [
                (SegmentValue::Exact(c), SegmentValue::Exact(s)),
                (SegmentValue::Exact(c + 1), SegmentValue::Exact(s + 1)),
            ],
            heat_color(n, max).filled(),
        )
    }))?;
    chart.draw_series(cells.iter().map(|&(c, s, n)| {
        Text::new(
            n.to_string(),
            (SegmentValue::CenterOf(c), SegmentValue::CenterOf(s)),
            ("sans-serif", LABEL_SIZE + 2).into_font(),
        )
    }))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::table::tests::sample;

    #[test]
    fn heat_color_spans_the_scale() {
        let rgb = |c: RGBColor| (c.0, c.1, c.2);
        assert_eq!(rgb(heat_color(0, 4)), HEAT_LOW);
        assert_eq!(rgb(heat_color(4, 4)), HEAT_HIGH);
        assert_eq!(rgb(heat_color(2, 4)), (222, 128, 121));
        assert_eq!(rgb(heat_color(0, 0)), HEAT_LOW);
    }

    #[test]
    fn segment_labels_map_centers_only() {
        let labels = ["Lunes", "Martes"];
        assert_eq!(segment_label(&labels, &SegmentValue::CenterOf(1)), "Martes");
        assert_eq!(segment_label(&labels, &SegmentValue::CenterOf(5)), "");
        assert_eq!(segment_label(&labels, &SegmentValue::Exact(0)), "");
    }

    #[test]
    fn render_writes_all_panels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");

        render(&sample(), &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        for title in [
            "Citas por Especialidad",
            "Estado de las Citas",
            "Tendencia de Citas en el Tiempo",
            "Especialidades por Centro de Salud",
        ] {
            assert!(svg.contains(title), "missing {title}");
        }
    }

    #[test]
    fn render_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("chart.svg");
        assert!(matches!(
            render(&sample(), &path),
            Err(ReportError::Chart(_))
        ));
    }
}
