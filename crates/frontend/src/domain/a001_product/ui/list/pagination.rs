use contracts::catalog::PageButton;
use leptos::prelude::*;

const BUTTON_BASE: &str = "flex h-10 w-10 items-center justify-center border text-sm font-medium";
const BUTTON_ACTIVE: &str = "border-blue-500 bg-blue-500 text-white";
const BUTTON_IDLE: &str =
    "border-gray-200 bg-white hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed";

fn button_class(active: bool) -> String {
    format!("{} {}", BUTTON_BASE, if active { BUTTON_ACTIVE } else { BUTTON_IDLE })
}

/// CatalogPagination - « 1 2 ... n » controls under the product grid
///
/// Renders nothing when `buttons` is empty (one page or no results).
#[component]
pub fn CatalogPagination(
    /// Buttons as computed by the catalog view
    #[prop(into)]
    buttons: Signal<Vec<PageButton>>,

    /// Callback with the target page of a clicked, enabled button
    on_page: Callback<usize>,
) -> impl IntoView {
    move || {
        buttons
            .get()
            .into_iter()
            .map(|button| {
                let PageButton {
                    label,
                    page,
                    active,
                    disabled,
                } = button;
                view! {
                    <button
                        type="button"
                        class=button_class(active)
                        data-page=page.map(|p| p.to_string())
                        aria-current=active.then_some("page")
                        disabled=disabled
                        on:click=move |_| {
                            if disabled {
                                return;
                            }
                            if let Some(page) = page {
                                on_page.run(page);
                            }
                        }
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    }
}
