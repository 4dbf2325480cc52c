//! Defines the route handler for the page that displays expenses as a
//! filterable, sortable and paginated table with charts.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    dates::{DATE_INPUT_FORMAT, empty_date_as_none},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_HEADER_STYLE, base, link,
    },
    navigation::NavBar,
    pagination::{
        PaginationConfig, PaginationIndicator, clamp_page, create_pagination_indicators,
        page_slice, total_pages,
    },
    store::JsonStore,
};

use super::{
    Expense, ExpenseFilter, SortDirection, SortField, SortSpec,
    aggregate::{category_totals, month_label, monthly_totals},
    charts::{ExpenseChart, category_spending_chart, charts_script, charts_view, monthly_spending_chart},
    row::expense_row,
    sort::sort_expenses,
};

/// The raw query parameters of the expenses page.
#[derive(Debug, Default, Deserialize)]
pub struct ExpensesQuery {
    /// Keep expenses with this exact category.
    pub category: Option<String>,
    /// Keep expenses paid with this method.
    pub payment_method: Option<String>,
    /// The start of the date range filter.
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub start_date: Option<Date>,
    /// The end of the date range filter.
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub end_date: Option<Date>,
    /// Keep expenses whose description contains this text.
    pub search: Option<String>,
    /// The column to sort by. Absent means storage order.
    pub sort: Option<SortField>,
    /// The direction to sort in.
    pub dir: Option<SortDirection>,
    /// The 1-based page to show.
    pub page: Option<u64>,
}

/// URL encoding helper for the expenses page query params.
///
/// This is used to build consistent sort header and pagination links from
/// already-normalized values.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PipelineQuery {
    filter: ExpenseFilter,
    sort: Option<SortSpec>,
    page: u64,
}

impl PipelineQuery {
    fn from_query(query: &ExpensesQuery) -> Self {
        let filter = ExpenseFilter {
            category: query.category.clone().unwrap_or_default(),
            payment_method: query.payment_method.clone().unwrap_or_default(),
            start_date: query.start_date,
            end_date: query.end_date,
            search: query.search.clone().unwrap_or_default(),
        };
        let sort = match (query.sort, query.dir) {
            (Some(field), direction) => Some(SortSpec {
                field,
                direction: direction.unwrap_or_default(),
            }),
            (None, _) => None,
        };

        Self {
            filter,
            sort,
            page: query.page.unwrap_or(1).max(1),
        }
    }

    /// The query produced by clicking the column header for `field`. Resets
    /// to the first page so the new ordering is shown from the top.
    fn with_sort_field(&self, field: SortField) -> Self {
        Self {
            filter: self.filter.clone(),
            sort: Some(SortSpec::toggled(self.sort, field)),
            page: 1,
        }
    }

    fn with_page(&self, page: u64) -> Self {
        Self {
            filter: self.filter.clone(),
            sort: self.sort,
            page,
        }
    }

    fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if !self.filter.category.is_empty() {
            pairs.push(("category", self.filter.category.clone()));
        }
        if !self.filter.payment_method.is_empty() {
            pairs.push(("payment_method", self.filter.payment_method.clone()));
        }
        if let Some(start_date) = self.filter.start_date {
            pairs.push((
                "start_date",
                start_date.format(DATE_INPUT_FORMAT).unwrap_or_default(),
            ));
        }
        if let Some(end_date) = self.filter.end_date {
            pairs.push((
                "end_date",
                end_date.format(DATE_INPUT_FORMAT).unwrap_or_default(),
            ));
        }
        if !self.filter.search.is_empty() {
            pairs.push(("search", self.filter.search.clone()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.field.as_query_value().to_owned()));
            pairs.push(("dir", sort.direction.as_query_value().to_owned()));
        }
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }

        serde_urlencoded::to_string(&pairs)
            .inspect_err(|error| tracing::error!("Could not encode query params: {error}"))
            .unwrap_or_default()
    }

    fn to_url(&self) -> String {
        let query_string = self.to_query_string();

        if query_string.is_empty() {
            endpoints::EXPENSES_VIEW.to_owned()
        } else {
            format!("{}?{query_string}", endpoints::EXPENSES_VIEW)
        }
    }
}

/// The state needed for the expenses page.
#[derive(Debug, Clone)]
pub struct ExpensesViewState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for ExpensesViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Render an overview of the user's expenses.
///
/// The charts aggregate the whole collection. The table applies the filter,
/// then the sort, then takes the requested page, with out-of-range pages
/// clamped to the last page.
pub async fn get_expenses_page(
    State(state): State<ExpensesViewState>,
    Query(query_params): Query<ExpensesQuery>,
) -> Result<Response, Error> {
    let expenses = {
        let store = state.store.lock().map_err(|_| Error::StoreLock)?;
        store.expenses()
    };

    let query = PipelineQuery::from_query(&query_params);
    let page_size = state.pagination_config.default_page_size;
    let max_pages = state.pagination_config.max_pages;

    let charts = build_charts(&expenses);

    let mut filtered = query.filter.apply(&expenses);
    if let Some(sort) = query.sort {
        sort_expenses(&mut filtered, sort);
    }

    let page_count = total_pages(filtered.len() as u64, page_size);
    let current_page = clamp_page(query.page, page_count);
    let visible = page_slice(&filtered, current_page, page_size);

    let query = query.with_page(current_page);
    let indicators = create_pagination_indicators(current_page, page_count.max(1), max_pages);

    Ok(expenses_view(&query, &charts, visible, &indicators).into_response())
}

fn build_charts(expenses: &[Expense]) -> Vec<ExpenseChart> {
    vec![
        ExpenseChart {
            id: "monthly-spending-chart",
            options: monthly_spending_chart(&monthly_totals(expenses, month_label)).to_string(),
        },
        ExpenseChart {
            id: "category-spending-chart",
            options: category_spending_chart(&category_totals(expenses)).to_string(),
        },
    ]
}

fn expenses_view(
    query: &PipelineQuery,
    charts: &[ExpenseChart],
    visible: &[Expense],
    indicators: &[PaginationIndicator],
) -> Markup {
    let nav_bar = NavBar::new(endpoints::EXPENSES_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl"
            {
                h1 class="text-2xl font-bold mb-4" { "Expenses" }

                (charts_view(charts))

                (filter_form(&query.filter, query.sort))

                div class="relative overflow-x-auto shadow-md rounded w-full mt-4"
                {
                    table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                (sort_header(query, SortField::Amount, "Amount"))
                                (sort_header(query, SortField::Date, "Date"))
                                (sort_header(query, SortField::Category, "Category"))
                                th scope="col" class="px-6 py-3" { "Description" }
                                th scope="col" class="px-6 py-3" { "Payment" }
                                th scope="col" class="px-6 py-3" { "Actions" }
                            }
                        }

                        tbody
                        {
                            @if visible.is_empty() {
                                tr
                                {
                                    td
                                        colspan="6"
                                        class="px-6 py-8 text-center"
                                        data-empty-state="true"
                                    {
                                        "No expenses match the current filters."
                                    }
                                }
                            } @else {
                                @for expense in visible {
                                    (expense_row(expense))
                                }
                            }
                        }
                    }
                }

                (pagination_nav(query, indicators))

                p class="mt-4"
                {
                    (link(endpoints::NEW_EXPENSE_VIEW, "Add an expense"))
                }
            }
        }
    );

    base(
        "Expenses",
        &[
            crate::html::HeadElement::ScriptLink(crate::html::ECHARTS_SCRIPT_URL.to_owned()),
            charts_script(charts),
        ],
        &content,
    )
}

fn filter_form(filter: &ExpenseFilter, sort: Option<SortSpec>) -> Markup {
    html!(
        form
            method="get"
            action=(endpoints::EXPENSES_VIEW)
            class="grid grid-cols-1 gap-4 md:grid-cols-3 xl:grid-cols-6 items-end w-full \
                p-4 bg-white rounded shadow dark:bg-gray-800 text-gray-900 dark:text-white"
        {
            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                input
                    type="text"
                    name="category"
                    id="category"
                    value=(filter.category)
                    placeholder="Any"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="payment_method" class=(FORM_LABEL_STYLE) { "Payment method" }
                select name="payment_method" id="payment_method" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[filter.payment_method.is_empty()] { "Any" }
                    option value="cash" selected[filter.payment_method == "cash"] { "Cash" }
                    option value="credit" selected[filter.payment_method == "credit"] { "Credit" }
                }
            }

            div
            {
                label for="start_date" class=(FORM_LABEL_STYLE) { "From" }
                input
                    type="date"
                    name="start_date"
                    id="start_date"
                    value=[filter.start_date.map(|date| date.format(DATE_INPUT_FORMAT).unwrap_or_default())]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="end_date" class=(FORM_LABEL_STYLE) { "To" }
                input
                    type="date"
                    name="end_date"
                    id="end_date"
                    value=[filter.end_date.map(|date| date.format(DATE_INPUT_FORMAT).unwrap_or_default())]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="search" class=(FORM_LABEL_STYLE) { "Search" }
                input
                    type="search"
                    name="search"
                    id="search"
                    value=(filter.search)
                    placeholder="Description contains..."
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            // Filtering keeps the current ordering.
            @if let Some(sort) = sort {
                input type="hidden" name="sort" value=(sort.field.as_query_value());
                input type="hidden" name="dir" value=(sort.direction.as_query_value());
            }

            div class="flex gap-2"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Apply" }
                a href=(endpoints::EXPENSES_VIEW) class=(LINK_STYLE) { "Clear" }
            }
        }
    )
}

fn sort_header(query: &PipelineQuery, field: SortField, title: &str) -> Markup {
    let url = query.with_sort_field(field).to_url();
    let marker = query.sort.and_then(|sort| {
        (sort.field == field).then_some(match sort.direction {
            SortDirection::Ascending => "\u{25B2}",
            SortDirection::Descending => "\u{25BC}",
        })
    });

    html!(
        th scope="col" class="px-6 py-3"
        {
            a href=(url) class="hover:underline" data-sort-field=(field.as_query_value())
            {
                (title)
                @if let Some(marker) = marker {
                    span class="ml-1" { (marker) }
                }
            }
        }
    )
}

fn pagination_nav(query: &PipelineQuery, indicators: &[PaginationIndicator]) -> Markup {
    let page_link_style = "flex items-center justify-center px-3 h-8 leading-tight \
        text-gray-500 bg-white border border-gray-300 hover:bg-gray-100 \
        hover:text-gray-700 dark:bg-gray-800 dark:border-gray-700 \
        dark:text-gray-400 dark:hover:bg-gray-700 dark:hover:text-white";
    let current_page_style = "flex items-center justify-center px-3 h-8 leading-tight \
        text-blue-600 border border-gray-300 bg-blue-50 dark:bg-gray-700 \
        dark:border-gray-700 dark:text-white";

    html!(
        nav class="pagination mt-4" aria-label="Expense table pages"
        {
            ul class="pagination inline-flex -space-x-px text-sm"
            {
                @for indicator in indicators {
                    li
                    {
                        @match indicator {
                            PaginationIndicator::BackButton(page) => {
                                a href=(query.with_page(*page).to_url()) class=(page_link_style) { "Previous" }
                            }
                            PaginationIndicator::Page(page) => {
                                a href=(query.with_page(*page).to_url()) class=(page_link_style) { (page) }
                            }
                            PaginationIndicator::CurrPage(page) => {
                                span aria-current="page" class=(current_page_style) { (page) }
                            }
                            PaginationIndicator::Ellipsis => {
                                span class=(page_link_style) { "\u{2026}" }
                            }
                            PaginationIndicator::NextButton(page) => {
                                a href=(query.with_page(*page).to_url()) class=(page_link_style) { "Next" }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod expenses_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        expense::{Expense, SortDirection, SortField},
        pagination::PaginationConfig,
        store::JsonStore,
        test_utils::{assert_valid_html, parse_html},
    };

    use super::{ExpensesQuery, ExpensesViewState, get_expenses_page};

    fn expense(id: i64, amount: f64, date: time::Date, category: &str) -> Expense {
        Expense {
            id,
            amount,
            description: format!("expense {id}"),
            date,
            category: category.to_owned(),
            payment_method: "cash".to_owned(),
        }
    }

    fn state_with_expenses(expenses: Vec<Expense>) -> ExpensesViewState {
        let mut store = JsonStore::open_in_memory();
        store
            .set_expenses(expenses)
            .expect("could not seed expenses");

        ExpensesViewState {
            store: Arc::new(Mutex::new(store)),
            pagination_config: PaginationConfig::default(),
        }
    }

    fn expense_rows(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("tbody tr[data-expense-row='true']").unwrap())
            .map(|row| row.value().attr("data-expense-id").unwrap_or("").to_owned())
            .collect()
    }

    #[tokio::test]
    async fn page_displays_all_expenses_in_storage_order() {
        let state = state_with_expenses(vec![
            expense(1, 10.0, date!(2024 - 01 - 05), "Food"),
            expense(2, 20.0, date!(2024 - 02 - 10), "Transport"),
        ]);

        let response = get_expenses_page(State(state), Query(ExpensesQuery::default()))
            .await
            .expect("handler should succeed");

        let html = parse_html(response).await;
        assert_valid_html(&html);
        assert_eq!(expense_rows(&html), ["1", "2"]);
    }

    #[tokio::test]
    async fn filter_narrows_the_table_but_not_the_charts() {
        let state = state_with_expenses(vec![
            expense(1, 10.0, date!(2024 - 01 - 05), "Food"),
            expense(2, 20.0, date!(2024 - 02 - 10), "Transport"),
        ]);

        let response = get_expenses_page(
            State(state),
            Query(ExpensesQuery {
                category: Some("Food".to_owned()),
                ..Default::default()
            }),
        )
        .await
        .expect("handler should succeed");

        let html = parse_html(response).await;
        assert_valid_html(&html);
        assert_eq!(expense_rows(&html), ["1"]);

        // The charts aggregate the whole collection, so the month of the
        // filtered-out Transport expense still appears in the chart options.
        let scripts = html
            .select(&Selector::parse("head script").unwrap())
            .map(|script| script.text().collect::<String>())
            .collect::<String>();
        assert!(
            scripts.contains("Feb 2024"),
            "chart options should include unfiltered months"
        );
    }

    #[tokio::test]
    async fn sorts_by_amount_when_requested() {
        let state = state_with_expenses(vec![
            expense(1, 20.0, date!(2024 - 01 - 05), "Food"),
            expense(2, 5.0, date!(2024 - 02 - 10), "Transport"),
            expense(3, 10.0, date!(2024 - 03 - 15), "Food"),
        ]);

        let response = get_expenses_page(
            State(state),
            Query(ExpensesQuery {
                sort: Some(SortField::Amount),
                dir: Some(SortDirection::Ascending),
                ..Default::default()
            }),
        )
        .await
        .expect("handler should succeed");

        let html = parse_html(response).await;
        assert_eq!(expense_rows(&html), ["2", "3", "1"]);
    }

    #[tokio::test]
    async fn sort_header_link_flips_direction_of_active_column() {
        let state = state_with_expenses(vec![expense(1, 10.0, date!(2024 - 01 - 05), "Food")]);

        let response = get_expenses_page(
            State(state),
            Query(ExpensesQuery {
                sort: Some(SortField::Amount),
                dir: Some(SortDirection::Ascending),
                ..Default::default()
            }),
        )
        .await
        .expect("handler should succeed");

        let html = parse_html(response).await;
        let amount_link = html
            .select(&Selector::parse("a[data-sort-field='amount']").unwrap())
            .next()
            .expect("No amount sort link found");
        let href = amount_link.value().attr("href").expect("link missing href");

        assert!(
            href.contains("sort=amount") && href.contains("dir=desc"),
            "active column link should flip direction, got {href}"
        );

        // A different column keeps the carried direction.
        let date_link = html
            .select(&Selector::parse("a[data-sort-field='date']").unwrap())
            .next()
            .expect("No date sort link found");
        let href = date_link.value().attr("href").expect("link missing href");

        assert!(
            href.contains("sort=date") && href.contains("dir=asc"),
            "inactive column link should keep direction, got {href}"
        );
    }

    #[tokio::test]
    async fn shows_one_page_of_five_rows() {
        let expenses = (1..=7)
            .map(|id| expense(id, id as f64, date!(2024 - 01 - 05), "Food"))
            .collect();
        let state = state_with_expenses(expenses);

        let response = get_expenses_page(State(state), Query(ExpensesQuery::default()))
            .await
            .expect("handler should succeed");

        let html = parse_html(response).await;
        assert_eq!(expense_rows(&html), ["1", "2", "3", "4", "5"]);

        let current_page = html
            .select(&Selector::parse("[aria-current='page']").unwrap())
            .next()
            .expect("No current page indicator found");
        assert_eq!(current_page.text().collect::<String>().trim(), "1");
    }

    #[tokio::test]
    async fn out_of_range_page_clamps_to_the_last_page() {
        let expenses = (1..=7)
            .map(|id| expense(id, id as f64, date!(2024 - 01 - 05), "Food"))
            .collect();
        let state = state_with_expenses(expenses);

        let response = get_expenses_page(
            State(state),
            Query(ExpensesQuery {
                page: Some(99),
                ..Default::default()
            }),
        )
        .await
        .expect("handler should succeed");

        let html = parse_html(response).await;
        assert_eq!(expense_rows(&html), ["6", "7"]);
    }

    #[tokio::test]
    async fn empty_result_shows_the_empty_state() {
        let state = state_with_expenses(Vec::new());

        let response = get_expenses_page(State(state), Query(ExpensesQuery::default()))
            .await
            .expect("handler should succeed");

        let html = parse_html(response).await;
        assert_valid_html(&html);

        let empty_state = html
            .select(&Selector::parse("td[data-empty-state='true']").unwrap())
            .next()
            .expect("No empty-state cell found");
        assert_eq!(empty_state.value().attr("colspan"), Some("6"));
    }

    #[tokio::test]
    async fn inverted_date_range_shows_no_rows() {
        let state = state_with_expenses(vec![expense(1, 10.0, date!(2024 - 01 - 05), "Food")]);

        let response = get_expenses_page(
            State(state),
            Query(ExpensesQuery {
                start_date: Some(date!(2024 - 03 - 01)),
                end_date: Some(date!(2024 - 01 - 01)),
                ..Default::default()
            }),
        )
        .await
        .expect("handler should succeed");

        let html = parse_html(response).await;
        assert!(expense_rows(&html).is_empty());
    }
}
