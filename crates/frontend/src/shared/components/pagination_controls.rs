use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page window shown as numbered buttons around the current page
const PAGE_WINDOW: u32 = 2;

/// Numbered pages to render: at most `2 * PAGE_WINDOW + 1`, clamped to `1..=total`
fn page_numbers(current: u32, total: u32) -> Vec<u32> {
    let total = total.max(1);
    let first = current.saturating_sub(PAGE_WINDOW).max(1);
    let last = (current + PAGE_WINDOW).min(total);
    (first..=last).collect()
}

/// Pager for server-paginated lists. Pages are 1-based and every value comes
/// from the response headers; nothing is computed locally.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total number of rows on the server
    #[prop(into)]
    total_count: Signal<u64>,

    /// Disable every button while a fetch is in flight
    #[prop(into)]
    disabled: Signal<bool>,

    on_page_change: Callback<u32>,
) -> impl IntoView {
    let at_first = move || disabled.get() || current_page.get() <= 1;
    let at_last = move || disabled.get() || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1).max(1))
                disabled=at_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                page_numbers(current, total_pages.get())
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class=if page == current {
                                    "pagination-btn pagination-btn--active"
                                } else {
                                    "pagination-btn"
                                }
                                disabled=move || disabled.get()
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=at_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=at_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "Page {} of {} ({} total)",
                        current_page.get(),
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_numbers_window() {
        assert_eq!(page_numbers(1, 3), vec![1, 2, 3]);
        assert_eq!(page_numbers(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_numbers(10, 10), vec![8, 9, 10]);
        assert_eq!(page_numbers(1, 0), vec![1]);
    }
}
