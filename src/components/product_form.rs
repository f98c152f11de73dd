use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{Fair, Product, ProductPayload};

#[derive(Properties, PartialEq)]
pub struct ProductFormProps {
    /// `Some` prefills the fields and routes the save to an update.
    pub editing: Option<Product>,
    /// Options for the fair select.
    pub fairs: Vec<Fair>,
    pub on_save: Callback<ProductPayload>,
    pub on_close: Callback<()>,
}

#[function_component(ProductForm)]
pub fn product_form(props: &ProductFormProps) -> Html {
    let name_ref = use_node_ref();
    let price_ref = use_node_ref();
    let fair_ref = use_node_ref();

    {
        let name_ref = name_ref.clone();
        let price_ref = price_ref.clone();
        let fair_ref = fair_ref.clone();
        use_effect_with(props.editing.clone(), move |editing| {
            if let Some(product) = editing {
                if let Some(input) = name_ref.cast::<HtmlInputElement>() {
                    input.set_value(&product.name);
                }
                if let Some(input) = price_ref.cast::<HtmlInputElement>() {
                    input.set_value(&product.price);
                }
                if let Some(select) = fair_ref.cast::<HtmlSelectElement>() {
                    if let Some(fair) = &product.fair {
                        select.set_value(&fair.id.to_string());
                    }
                }
            }
            || ()
        });
    }

    let onsubmit = {
        let name_ref = name_ref.clone();
        let price_ref = price_ref.clone();
        let fair_ref = fair_ref.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = name_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let price = price_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let fair = fair_ref
                .cast::<HtmlSelectElement>()
                .and_then(|s| s.value().parse::<u32>().ok());
            on_save.emit(ProductPayload {
                name: Some(name),
                price: Some(price),
                fair,
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let title = if props.editing.is_some() {
        "Editar produto"
    } else {
        "Novo produto"
    };

    html! {
        <div class="modal d-block" style="background: rgba(0, 0, 0, 0.5);">
            <div class="modal-dialog">
                <div class="modal-content">
                    <form {onsubmit}>
                        <div class="modal-header">
                            <h5 class="modal-title">{ title }</h5>
                            <button
                                type="button"
                                class="btn-close"
                                onclick={on_close.clone()}
                            />
                        </div>
                        <div class="modal-body">
                            <div class="mb-3">
                                <label class="form-label">{"Nome"}</label>
                                <input type="text" class="form-control" required=true ref={name_ref} />
                            </div>
                            <div class="mb-3">
                                <label class="form-label">{"Preço"}</label>
                                <input
                                    type="number"
                                    step="0.01"
                                    min="0"
                                    class="form-control"
                                    required=true
                                    ref={price_ref}
                                />
                            </div>
                            <div class="mb-3">
                                <label class="form-label">{"Feira"}</label>
                                <select class="form-select" required=true ref={fair_ref}>
                                    <option value="" selected=true>{"Selecione a feira"}</option>
                                    {
                                        for props.fairs.iter().map(|fair| html! {
                                            <option value={fair.id.to_string()} key={fair.id}>
                                                { format!("{} - {}", fair.name, fair.city) }
                                            </option>
                                        })
                                    }
                                </select>
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" onclick={on_close}>
                                {"Cancelar"}
                            </button>
                            <button type="submit" class="btn btn-success">{"Salvar"}</button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
