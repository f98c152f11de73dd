use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::hooks::use_toasts::ToastLevel;
use crate::models::{Fair, Product, ProductFilter};
use crate::services::{fair_service, product_service, ApiClient};
use crate::state::{PageRequest, Paginator, Phase};

/// Cards appended per scroll step, as served from the cached collection.
const CATALOG_PAGE_SIZE: usize = 8;

/// How close to the bottom (px) the user must scroll to load the next page.
const SCROLL_THRESHOLD_PX: i32 = 100;

pub struct UseCatalogHandle {
    pub fairs: Vec<Fair>,
    pub fairs_loading: bool,
    pub fairs_failed: bool,
    /// Products already handed to the view, page by page, in backend order.
    pub visible: Vec<Product>,
    pub phase: Phase,
    /// Backend answered with an empty collection for the current filter.
    pub empty_result: bool,
    pub apply_filter: Callback<ProductFilter>,
    pub load_more: Callback<()>,
}

/// Catalog controller: one full fetch per filter, cached in a `Paginator`
/// and sliced into pages as the user scrolls. The fairs strip is a plain
/// unpaginated list.
#[hook]
pub fn use_catalog(api: Rc<ApiClient>, on_toast: Callback<(ToastLevel, String)>) -> UseCatalogHandle {
    let paginator = use_state(|| Paginator::<Product>::new(CATALOG_PAGE_SIZE));
    let visible = use_state(Vec::<Product>::new);
    let fairs = use_state(Vec::<Fair>::new);
    let fairs_loading = use_state(|| false);
    let fairs_failed = use_state(|| false);

    let reload = {
        let api = api.clone();
        let paginator = paginator.clone();
        let visible = visible.clone();
        let on_toast = on_toast.clone();
        Callback::from(move |filter: ProductFilter| {
            let mut p = (*paginator).clone();
            if !p.begin_load() {
                // A fetch is already outstanding; this trigger is dropped.
                return;
            }
            paginator.set(p);
            visible.set(Vec::new());

            let api = api.clone();
            let paginator = paginator.clone();
            let visible = visible.clone();
            let on_toast = on_toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match product_service::list_products(&api, &filter).await {
                    Ok(products) => {
                        log::info!("catalog loaded: {} products", products.len());
                        let mut p = (*paginator).clone();
                        p.complete_load(products);
                        // Serve the first page right away.
                        if let PageRequest::Items(page) = p.begin_next_page() {
                            p.finish_next_page();
                            visible.set(page);
                        }
                        paginator.set(p);
                    }
                    Err(e) => {
                        log::error!("catalog load failed: {}", e);
                        let mut p = (*paginator).clone();
                        p.fail_load();
                        paginator.set(p);
                        on_toast.emit((ToastLevel::Danger, "Erro ao carregar produtos.".into()));
                    }
                }
            });
        })
    };

    let load_more = {
        let paginator = paginator.clone();
        let visible = visible.clone();
        Callback::from(move |_| {
            let mut p = (*paginator).clone();
            match p.begin_next_page() {
                PageRequest::Items(page) => {
                    let mut items = (*visible).clone();
                    items.extend(page);
                    p.finish_next_page();
                    visible.set(items);
                    paginator.set(p);
                }
                PageRequest::Exhausted => {
                    // Persist the transition so the view stops listening.
                    paginator.set(p);
                }
                PageRequest::Busy | PageRequest::Unavailable => {}
            }
        })
    };

    // Initial load: full product collection plus the fairs strip.
    {
        let api = api.clone();
        let reload = reload.clone();
        let fairs = fairs.clone();
        let fairs_loading = fairs_loading.clone();
        let fairs_failed = fairs_failed.clone();
        use_effect_with((), move |_| {
            reload.emit(ProductFilter::default());

            fairs_loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match fair_service::list_fairs(&api).await {
                    Ok(loaded) => {
                        log::info!("fairs loaded: {}", loaded.len());
                        fairs.set(loaded);
                    }
                    Err(e) => {
                        log::error!("fairs load failed: {}", e);
                        fairs_failed.set(true);
                    }
                }
                fairs_loading.set(false);
            });
            || ()
        });
    }

    // Infinite scroll: near the bottom of the document, ask for one more
    // page. The paginator's guard turns overlapping triggers into no-ops.
    {
        let load_more = load_more.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                let Some(root) = document.document_element() else {
                    return;
                };
                let position = root.scroll_top() + root.client_height();
                if position >= root.scroll_height() - SCROLL_THRESHOLD_PX {
                    load_more.emit(());
                }
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    UseCatalogHandle {
        fairs: (*fairs).clone(),
        fairs_loading: *fairs_loading,
        fairs_failed: *fairs_failed,
        visible: (*visible).clone(),
        phase: paginator.phase(),
        empty_result: paginator.is_empty_result(),
        apply_filter: reload,
        load_more,
    }
}
