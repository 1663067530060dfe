use std::cell::Cell as Counter;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use phillips_curve::charts::{AxisLimits, ChartSurface, PhillipsChart, PlotPoint};
use phillips_curve::config::{AppConfig, YearBounds};
use phillips_curve::data::{
    load_data, Cell, CellError, DataFormatError, Table, TableReader, YearRange,
};
use phillips_curve::{run, Outcome};

/// Serves tables from memory and counts reads.
struct MemoryReader {
    tables: HashMap<PathBuf, Table>,
    reads: Counter<usize>,
}

impl MemoryReader {
    fn new(config: &AppConfig, unemployment: &[f64], inflation: &[f64]) -> Self {
        let mut tables = HashMap::new();
        tables.insert(
            config.unemployment.path.clone(),
            table(&config.unemployment.row_label, unemployment),
        );
        tables.insert(
            config.inflation.path.clone(),
            table(&config.inflation.row_label, inflation),
        );
        Self {
            tables,
            reads: Counter::new(0),
        }
    }
}

impl TableReader for MemoryReader {
    fn read_table(&self, path: &Path) -> Result<Table, DataFormatError> {
        self.reads.set(self.reads.get() + 1);
        self.tables
            .get(path)
            .cloned()
            .ok_or_else(|| DataFormatError::UnsupportedFormat(path.to_path_buf()))
    }
}

/// Header row of years plus a labelled row; unemployment cells arrive as text.
fn table(label: &str, values: &[f64]) -> Table {
    let header = std::iter::once(Cell::Empty)
        .chain((0..values.len()).map(|i| Cell::Number(1990.0 + i as f64)))
        .collect();
    let row = std::iter::once(Cell::Text(label.to_string()))
        .chain(values.iter().map(|v| Cell::Text(v.to_string())))
        .collect();
    Table::new(vec![header, row])
}

#[derive(Default)]
struct RecordingSurface {
    charts: Vec<PhillipsChart>,
}

impl ChartSurface for RecordingSurface {
    fn display(&mut self, chart: PhillipsChart) -> anyhow::Result<()> {
        self.charts.push(chart);
        Ok(())
    }
}

fn small_config() -> AppConfig {
    AppConfig {
        years: YearBounds::new(1990, 1992),
        ..AppConfig::default()
    }
}

fn full_series() -> (Vec<f64>, Vec<f64>) {
    let unemployment = (0..28).map(|i| 2.0 + (i % 7) as f64 * 0.5).collect();
    let inflation = (0..28).map(|i| 9.5 - i as f64 * 0.3).collect();
    (unemployment, inflation)
}

#[test]
fn renders_three_year_example() {
    let config = small_config();
    let reader = MemoryReader::new(&config, &[2.4, 2.3, 2.4], &[8.6, 9.3, 6.2]);
    let mut surface = RecordingSurface::default();
    let mut notice = Vec::new();

    let outcome = run(
        &config,
        &reader,
        &mut surface,
        YearRange::new(1990, 1992),
        &mut notice,
    )
    .unwrap();

    assert_eq!(outcome, Outcome::Displayed);
    assert!(notice.is_empty());
    assert_eq!(surface.charts.len(), 1);

    let chart = &surface.charts[0];
    assert_eq!(
        chart.points,
        vec![
            PlotPoint { year: 1990, x: 2.4, y: 8.6 },
            PlotPoint { year: 1991, x: 2.3, y: 9.3 },
            PlotPoint { year: 1992, x: 2.4, y: 6.2 },
        ]
    );
    assert_eq!(chart.limits, AxisLimits { max_x: 6, max_y: 13 });
    assert_eq!(chart.x_label, "unemployment rate");
    assert_eq!(chart.y_label, "inflation rate");
}

#[test]
fn out_of_range_request_draws_nothing() {
    let config = AppConfig::default();
    let (u, i) = full_series();
    let reader = MemoryReader::new(&config, &u, &i);
    let mut surface = RecordingSurface::default();
    let mut notice = Vec::new();

    let outcome = run(
        &config,
        &reader,
        &mut surface,
        YearRange::new(1985, 2000),
        &mut notice,
    )
    .unwrap();

    assert_eq!(outcome, Outcome::Rejected);
    assert!(surface.charts.is_empty());
    assert_eq!(reader.reads.get(), 0);
    assert_eq!(String::from_utf8(notice).unwrap(), "error: year out of range\n");
}

#[test]
fn reversed_request_draws_nothing() {
    let config = AppConfig::default();
    let (u, i) = full_series();
    let reader = MemoryReader::new(&config, &u, &i);
    let mut surface = RecordingSurface::default();
    let mut notice = Vec::new();

    let outcome = run(
        &config,
        &reader,
        &mut surface,
        YearRange::new(2010, 2000),
        &mut notice,
    )
    .unwrap();

    assert_eq!(outcome, Outcome::Rejected);
    assert!(surface.charts.is_empty());
    assert_eq!(
        String::from_utf8(notice).unwrap(),
        "error: start year is after end year\n"
    );
}

#[test]
fn every_valid_range_is_aligned_and_complete() {
    let config = AppConfig::default();
    let (u, i) = full_series();
    let reader = MemoryReader::new(&config, &u, &i);

    for start in [1990, 1995, 2003, 2017] {
        for end in [start, start + 4, 2017] {
            if end > 2017 {
                continue;
            }
            let mut surface = RecordingSurface::default();
            run(
                &config,
                &reader,
                &mut surface,
                YearRange::new(start, end),
                &mut Vec::new(),
            )
            .unwrap();

            let chart = &surface.charts[0];
            assert_eq!(chart.points.len(), (end - start + 1) as usize);
            let years: Vec<i32> = chart.points.iter().map(|p| p.year).collect();
            assert_eq!(years, (start..=end).collect::<Vec<_>>());

            for p in &chart.points {
                let idx = (p.year - 1990) as usize;
                assert_eq!(p.x, u[idx]);
                assert_eq!(p.y, i[idx]);
            }

            let max_x = chart.points.iter().map(|p| p.x).fold(f64::MIN, f64::max);
            let max_y = chart.points.iter().map(|p| p.y).fold(f64::MIN, f64::max);
            assert_eq!(chart.limits.max_x, max_x.ceil() as u32 + 3);
            assert_eq!(chart.limits.max_y, max_y.ceil() as u32 + 3);
        }
    }
}

#[test]
fn full_bounds_select_whole_series() {
    let config = AppConfig::default();
    let (u, i) = full_series();
    let reader = MemoryReader::new(&config, &u, &i);
    let mut surface = RecordingSurface::default();

    run(
        &config,
        &reader,
        &mut surface,
        YearRange::new(1990, 2017),
        &mut Vec::new(),
    )
    .unwrap();

    let xs: Vec<f64> = surface.charts[0].points.iter().map(|p| p.x).collect();
    assert_eq!(xs, u);
}

#[test]
fn loading_twice_is_identical() {
    let config = AppConfig::default();
    let (u, i) = full_series();
    let reader = MemoryReader::new(&config, &u, &i);

    let first = load_data(&reader, &config).unwrap();
    let second = load_data(&reader, &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.0.data(), &u[..]);
    assert_eq!(reader.reads.get(), 4);
}

#[test]
fn missing_row_fails_the_run() {
    let config = small_config();
    let mut reader = MemoryReader::new(&config, &[2.4, 2.3, 2.4], &[8.6, 9.3, 6.2]);
    reader.tables.insert(
        config.inflation.path.clone(),
        table("some other row", &[1.0, 2.0, 3.0]),
    );
    let mut surface = RecordingSurface::default();

    let err = run(
        &config,
        &reader,
        &mut surface,
        YearRange::new(1990, 1992),
        &mut Vec::new(),
    )
    .unwrap_err();

    let format_err = err.downcast_ref::<DataFormatError>().unwrap();
    assert!(matches!(format_err, DataFormatError::MissingRow { .. }));
    assert!(surface.charts.is_empty());
}

#[test]
fn deflation_years_follow_axis_formula() {
    let config = small_config();
    let reader = MemoryReader::new(&config, &[2.4, 2.3, 2.4], &[-1.5, -2.2, -3.4]);
    let mut surface = RecordingSurface::default();

    run(
        &config,
        &reader,
        &mut surface,
        YearRange::new(1991, 1992),
        &mut Vec::new(),
    )
    .unwrap();

    let chart = &surface.charts[0];
    assert_eq!(chart.points[1], PlotPoint { year: 1992, x: 2.4, y: -3.4 });
    // ceil(-2.2) + 3
    assert_eq!(chart.limits, AxisLimits { max_x: 6, max_y: 1 });
}

#[test]
fn deeply_negative_values_clamp_axis_at_zero() {
    let config = small_config();
    let reader = MemoryReader::new(&config, &[2.4, 2.3, 2.4], &[-4.5, -5.0, -6.1]);
    let mut surface = RecordingSurface::default();

    run(
        &config,
        &reader,
        &mut surface,
        YearRange::new(1990, 1992),
        &mut Vec::new(),
    )
    .unwrap();

    assert_eq!(surface.charts[0].limits.max_y, 0);
}

#[test]
fn non_finite_cell_fails_the_run() {
    let config = small_config();
    let mut reader = MemoryReader::new(&config, &[2.4, 2.3, 2.4], &[8.6, 9.3, 6.2]);
    let mut inflation = table(&config.inflation.row_label, &[8.6, 9.3, 6.2]);
    inflation.rows[1][2] = Cell::Text("inf".into());
    reader.tables.insert(config.inflation.path.clone(), inflation);
    let mut surface = RecordingSurface::default();

    let err = run(
        &config,
        &reader,
        &mut surface,
        YearRange::new(1990, 1992),
        &mut Vec::new(),
    )
    .unwrap_err();

    let format_err = err.downcast_ref::<DataFormatError>().unwrap();
    assert!(matches!(
        format_err,
        DataFormatError::InvalidCell { year: 1991, source: CellError::NotFinite(_), .. }
    ));
    assert!(surface.charts.is_empty());
}
