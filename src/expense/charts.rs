//! Chart generation and rendering for the expenses page.
//!
//! Two charts sit above the expense table:
//! - **Monthly Spending**: a line chart of totals per calendar month
//! - **Spending by Category**: a pie chart of totals per category
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization
//! code.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    datatype::DataPointItem,
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, JsFunction, Tooltip, Trigger},
    series::{Line, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::html::HeadElement;

use super::aggregate::{CategoryTotal, MonthlyTotal};

/// The fixed palette for pie chart slices, reused cyclically when there are
/// more than four categories.
pub const CHART_PALETTE: [&str; 4] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042"];

/// A chart with its HTML container ID and ECharts configuration.
pub(super) struct ExpenseChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for the expense charts.
pub(super) fn charts_view(charts: &[ExpenseChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for the expense charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[ExpenseChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

pub(super) fn monthly_spending_chart(monthly_totals: &[MonthlyTotal]) -> Chart {
    let labels: Vec<String> = monthly_totals
        .iter()
        .map(|total| total.month.clone())
        .collect();
    let values: Vec<f64> = monthly_totals.iter().map(|total| total.total).collect();

    Chart::new()
        .title(Title::new().text("Monthly Spending"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(currency_formatter())
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name("Spending").data(values))
}

pub(super) fn category_spending_chart(category_totals: &[CategoryTotal]) -> Chart {
    let data: Vec<DataPointItem> = category_totals
        .iter()
        .map(|total| DataPointItem::new(total.total).name(&total.category))
        .collect();

    Chart::new()
        .title(Title::new().text("Spending by Category"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .color(
            CHART_PALETTE
                .iter()
                .map(|&color| color.into())
                .collect::<Vec<Color>>(),
        )
        .series(Pie::new().name("Category").radius("60%").data(data))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

#[cfg(test)]
mod charts_tests {
    use crate::expense::aggregate::{CategoryTotal, MonthlyTotal};

    use super::{CHART_PALETTE, category_spending_chart, monthly_spending_chart};

    #[test]
    fn monthly_chart_options_include_labels_and_values() {
        let totals = [
            MonthlyTotal {
                month: "Jan 2024".to_owned(),
                total: 10.0,
            },
            MonthlyTotal {
                month: "Feb 2024".to_owned(),
                total: 20.0,
            },
        ];

        let options = monthly_spending_chart(&totals).to_string();

        assert!(options.contains("Jan 2024"), "got {options}");
        assert!(options.contains("Feb 2024"), "got {options}");
    }

    #[test]
    fn category_chart_options_include_the_palette() {
        let totals = [CategoryTotal {
            category: "Food".to_owned(),
            total: 15.5,
        }];

        let options = category_spending_chart(&totals).to_string();

        assert!(options.contains("Food"), "got {options}");
        for color in CHART_PALETTE {
            assert!(options.contains(color), "missing {color} in {options}");
        }
    }
}
