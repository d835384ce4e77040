use crate::analytics::MarketReport;
use crate::errors::ServerError;
use crate::responses::{xlsx_response, ResultResp};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<usize> for Cell {
    fn from(n: usize) -> Self {
        Cell::Number(n as f64)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Empty)
    }
}

fn write_table(
    workbook: &mut Workbook,
    name: &str,
    headers: &[&str],
    rows: Vec<Vec<Cell>>,
) -> Result<(), ServerError> {
    let bold = Format::new().set_bold();
    let worksheet: &mut Worksheet = workbook.add_worksheet();
    worksheet
        .set_name(name)
        .map_err(|e| ServerError::XlsxError(format!("Failed to name sheet '{name}': {e}")))?;

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{header}' on '{name}': {e}"))
            })?;
    }

    for (i, row) in rows.into_iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, cell) in row.into_iter().enumerate() {
            let c = col as u16;
            match cell {
                Cell::Text(s) => worksheet.write_string(r, c, s).map(|_| ()),
                Cell::Number(n) => worksheet.write_number(r, c, n).map(|_| ()),
                Cell::Empty => Ok(()),
            }
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write '{name}' row {r}, column {c}: {e}"))
            })?;
        }
    }

    Ok(())
}

/// One sheet per summary, plus an overview sheet with filters and health figures.
pub fn build_report_workbook(report: &MarketReport) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();

    let overview = &report.overview;
    let health = &report.health;
    let summary: Vec<(&str, Cell)> = vec![
        ("Source filter", report.filters.source.as_str().into()),
        ("Region filter", report.filters.region.as_str().into()),
        ("Currency filter", report.filters.currency.as_str().into()),
        ("Total properties", overview.total_properties.into()),
        ("Total value (EUR)", overview.total_value.into()),
        ("Average price (EUR)", overview.average_price.into()),
        ("Regions", overview.region_count.into()),
        ("Sources", overview.source_count.into()),
        ("Volatility (%)", health.volatility.map(|v| v as f64).into()),
        ("Liquidity", health.liquidity.into()),
        ("Diversity", health.diversity.into()),
        ("Concentration (%)", health.concentration.map(|v| v as f64).into()),
        ("Data quality (%)", health.data_quality.map(|v| v as f64).into()),
    ];
    write_table(
        &mut workbook,
        "Overview",
        &["Metric", "Value"],
        summary
            .into_iter()
            .map(|(metric, value)| vec![metric.into(), value])
            .collect(),
    )?;

    write_table(
        &mut workbook,
        "Price by Region",
        &["Region", "Listings", "Average (EUR)", "Min (EUR)", "Max (EUR)"],
        report
            .price_by_region
            .iter()
            .map(|r| {
                vec![
                    r.region.clone().into(),
                    r.count.into(),
                    r.average_price.into(),
                    r.min_price.into(),
                    r.max_price.into(),
                ]
            })
            .collect(),
    )?;

    write_table(
        &mut workbook,
        "Sources",
        &["Source", "Listings", "Share (%)"],
        report
            .source_distribution
            .iter()
            .map(|r| vec![r.source.clone().into(), r.count.into(), r.percentage.into()])
            .collect(),
    )?;

    write_table(
        &mut workbook,
        "Property Types",
        &["Property type", "Listings"],
        report
            .property_type_distribution
            .iter()
            .map(|r| vec![r.property_type.clone().into(), r.count.into()])
            .collect(),
    )?;

    write_table(
        &mut workbook,
        "Currencies",
        &["Currency", "Listings", "Total price", "Average price"],
        report
            .currency_distribution
            .iter()
            .map(|r| {
                vec![
                    r.currency.clone().into(),
                    r.count.into(),
                    r.total_price.into(),
                    r.average_price.into(),
                ]
            })
            .collect(),
    )?;

    write_table(
        &mut workbook,
        "BER Ratings",
        &["BER rating", "Listings"],
        report
            .ber_rating_distribution
            .iter()
            .map(|r| vec![r.rating.clone().into(), r.count.into()])
            .collect(),
    )?;

    write_table(
        &mut workbook,
        "Bedrooms",
        &["Bedrooms", "Listings"],
        report
            .bedroom_distribution
            .iter()
            .map(|r| vec![r.label.clone().into(), r.count.into()])
            .collect(),
    )?;

    write_table(
        &mut workbook,
        "Price Ranges",
        &["Range", "Listings", "Share (%)"],
        report
            .price_range_buckets
            .iter()
            .map(|b| vec![b.label.into(), b.count.into(), b.percentage.into()])
            .collect(),
    )?;

    write_table(
        &mut workbook,
        "Agents",
        &["Agent", "Listings", "Total value (EUR)", "Average value (EUR)", "Market share (%)"],
        report
            .agent_performance
            .iter()
            .map(|r| {
                vec![
                    r.agent.clone().into(),
                    r.count.into(),
                    r.total_value.into(),
                    r.average_value.into(),
                    r.market_share.into(),
                ]
            })
            .collect(),
    )?;

    write_table(
        &mut workbook,
        "Monthly Trends",
        &["Month", "Listings", "Average (EUR)", "Total value (EUR)"],
        report
            .monthly_trends
            .iter()
            .map(|t| {
                vec![
                    t.month.to_string().into(),
                    t.count.into(),
                    t.average_price.into(),
                    t.total_value.into(),
                ]
            })
            .collect(),
    )?;

    write_table(
        &mut workbook,
        "Regional Comparison",
        &[
            "Region",
            "Listings",
            "Average (EUR)",
            "Median (EUR)",
            "Min (EUR)",
            "Max (EUR)",
            "Range (EUR)",
            "Avg bedrooms",
            "Avg bathrooms",
            "Sources",
            "Currencies",
            "Property types",
            "Agents",
            "Market share (%)",
            "BER available (%)",
        ],
        report
            .regional_comparison
            .iter()
            .map(|r| {
                vec![
                    r.region.clone().into(),
                    r.count.into(),
                    r.average_price.into(),
                    r.median_price.into(),
                    r.min_price.into(),
                    r.max_price.into(),
                    r.price_range.into(),
                    r.average_bedrooms.into(),
                    r.average_bathrooms.into(),
                    r.source_count.into(),
                    r.currency_count.into(),
                    r.property_type_count.into(),
                    r.agent_count.into(),
                    r.market_share.into(),
                    r.ber_availability.into(),
                ]
            })
            .collect(),
    )?;

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

pub fn export_report_xlsx(report: &MarketReport, filename: &str) -> ResultResp {
    let buffer = build_report_workbook(report)?;
    xlsx_response(buffer, filename)
}
