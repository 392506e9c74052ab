use erp_core::Pagination;
use erp_core::query::PAGE_SIZE_OPTIONS;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub pagination: Pagination,
    pub on_page: Callback<u32>,
    pub on_page_size: Callback<u32>,
}

#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    let p = props.pagination;
    let total_pages = p.total_pages();
    let has_prev = p.page > 1;
    let has_next = u64::from(p.page) < total_pages;

    let summary = match p.shown_range() {
        Some((start, end)) => format!("{start}–{end} of {}", p.total),
        None => format!("0 of {}", p.total),
    };

    let go = |page: u32| {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(page))
    };

    let on_size = {
        let on_page_size = props.on_page_size.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse() {
                on_page_size.emit(size);
            }
        })
    };

    let button = "px-3 py-1.5 rounded-md text-sm border border-gray-300 dark:border-gray-600 \
                  text-gray-700 dark:text-gray-200 hover:bg-gray-50 dark:hover:bg-gray-700 \
                  disabled:opacity-40 disabled:cursor-not-allowed";

    html! {
        <div class="flex flex-wrap items-center justify-between gap-3 px-4 py-3 border-t border-gray-200 dark:border-gray-700 text-sm text-gray-600 dark:text-gray-400">
            <label class="flex items-center gap-2">
                {"Rows per page"}
                <select
                    class="border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-800 px-2 py-1"
                    onchange={on_size}
                >
                    {PAGE_SIZE_OPTIONS.iter().map(|size| html! {
                        <option value={size.to_string()} selected={*size == p.page_size}>{size}</option>
                    }).collect::<Html>()}
                </select>
            </label>
            <span>{summary}</span>
            <div class="flex items-center gap-2">
                <button type="button" class={button} disabled={!has_prev} onclick={go(p.page.saturating_sub(1).max(1))}>
                    {"Previous"}
                </button>
                <span>{format!("Page {} of {}", p.page, total_pages.max(1))}</span>
                <button type="button" class={button} disabled={!has_next} onclick={go(p.page + 1)}>
                    {"Next"}
                </button>
            </div>
        </div>
    }
}
