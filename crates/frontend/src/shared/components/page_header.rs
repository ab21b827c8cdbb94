use leptos::prelude::*;

/// Title bar of every screen; children go to the right-hand action slot
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}

/// Page-level success/error message above a table or form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

#[component]
pub fn BannerView(#[prop(into)] banner: Signal<Option<Banner>>) -> impl IntoView {
    move || {
        banner.get().map(|b| match b {
            Banner::Success(text) => view! {
                <div class="banner banner--success" role="status">{text}</div>
            }
            .into_any(),
            Banner::Error(text) => view! {
                <div class="banner banner--error" role="alert">{text}</div>
            }
            .into_any(),
        })
    }
}
