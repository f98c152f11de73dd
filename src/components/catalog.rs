use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_catalog, ToastLevel};
use crate::models::{Fair, Product, ProductFilter};
use crate::services::ApiClient;
use crate::state::Phase;

#[derive(Properties, PartialEq)]
pub struct CatalogProps {
    pub api: Rc<ApiClient>,
    pub on_toast: Callback<(ToastLevel, String)>,
}

fn fair_card(fair: &Fair) -> Html {
    html! {
        <div class="col-md-6 col-lg-4" key={fair.id}>
            <div class="card shadow-sm h-100 border-0">
                <div class="card-body text-center">
                    <h5 class="fw-semibold text-success">{ &fair.name }</h5>
                    <p class="text-secondary mb-1">{ &fair.city }</p>
                    <p class="small text-muted mb-0">{ &fair.date }</p>
                </div>
            </div>
        </div>
    }
}

fn product_card(product: &Product) -> Html {
    let fair_name = product
        .fair
        .as_ref()
        .map(|f| f.name.as_str())
        .unwrap_or("-");
    let farm_name = product
        .producer
        .as_ref()
        .map(|p| p.farm_name.as_str())
        .unwrap_or("-");

    html! {
        <div class="col-sm-6 col-lg-3" key={product.id}>
            <div class="card shadow-sm border-0 h-100">
                <div class="card-body">
                    <h6 class="fw-semibold">{ &product.name }</h6>
                    <p class="text-muted mb-1">{ product.price_label() }</p>
                    <p class="small mb-0">
                        <span class="text-secondary">{"Feira: "}</span>{ fair_name }<br />
                        <span class="text-secondary">{"Produtor: "}</span>{ farm_name }
                    </p>
                </div>
            </div>
        </div>
    }
}

/// Public catalog: fairs strip, filter bar and the infinitely-scrolled
/// product grid.
#[function_component(Catalog)]
pub fn catalog(props: &CatalogProps) -> Html {
    let catalog = use_catalog(props.api.clone(), props.on_toast.clone());
    let name_ref = use_node_ref();
    let price_ref = use_node_ref();

    let on_filter = {
        let name_ref = name_ref.clone();
        let price_ref = price_ref.clone();
        let apply_filter = catalog.apply_filter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = name_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let max_price = price_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            apply_filter.emit(ProductFilter { name, max_price });
        })
    };

    let on_clear = {
        let name_ref = name_ref.clone();
        let price_ref = price_ref.clone();
        let apply_filter = catalog.apply_filter.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = name_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            if let Some(input) = price_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            apply_filter.emit(ProductFilter::default());
        })
    };

    let products = if catalog.phase == Phase::Error {
        html! {
            <div class="col-12 text-danger text-center">{"Erro ao carregar produtos."}</div>
        }
    } else if catalog.phase == Phase::Loading && catalog.visible.is_empty() {
        html! {
            <div class="col-12 text-center text-muted">{"Carregando..."}</div>
        }
    } else if catalog.empty_result {
        html! {
            <div class="col-12 text-center text-muted">{"Nenhum produto encontrado."}</div>
        }
    } else {
        html! { <>{ for catalog.visible.iter().map(product_card) }</> }
    };

    let fairs = if catalog.fairs_failed {
        html! { <div class="col-12 text-danger text-center">{"Erro ao carregar feiras."}</div> }
    } else if catalog.fairs_loading {
        html! { <div class="col-12 text-center text-muted">{"Carregando..."}</div> }
    } else if catalog.fairs.is_empty() {
        html! {
            <div class="col-12 text-center text-muted">
                {"Nenhuma feira disponível no momento."}
            </div>
        }
    } else {
        html! { <>{ for catalog.fairs.iter().map(fair_card) }</> }
    };

    html! {
        <div class="container py-4">
            <h4 class="mb-3">{"Feiras"}</h4>
            <div class="row g-3 mb-4">{ fairs }</div>

            <h4 class="mb-3">{"Produtos"}</h4>
            <form class="row g-2 mb-3" onsubmit={on_filter}>
                <div class="col-sm-5">
                    <input
                        type="text"
                        class="form-control"
                        placeholder="Buscar por nome"
                        ref={name_ref}
                    />
                </div>
                <div class="col-sm-3">
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        class="form-control"
                        placeholder="Preço máximo"
                        ref={price_ref}
                    />
                </div>
                <div class="col-sm-4 d-flex gap-2">
                    <button type="submit" class="btn btn-success">{"Filtrar"}</button>
                    <button type="button" class="btn btn-outline-secondary" onclick={on_clear}>
                        {"Limpar"}
                    </button>
                </div>
            </form>
            <div class="row g-3">{ products }</div>
        </div>
    }
}
