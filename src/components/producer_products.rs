use std::rc::Rc;

use yew::prelude::*;

use crate::components::{ConfirmModal, ProductForm};
use crate::hooks::{use_my_products, ToastLevel};
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ProducerProductsProps {
    pub api: Rc<ApiClient>,
    pub on_toast: Callback<(ToastLevel, String)>,
}

/// Producer panel: the caller's own products with the create/edit modal
/// and the delete confirmation dialog.
#[function_component(ProducerProducts)]
pub fn producer_products(props: &ProducerProductsProps) -> Html {
    let panel = use_my_products(props.api.clone(), props.on_toast.clone());

    let on_new = {
        let open_new = panel.open_new.clone();
        Callback::from(move |_: MouseEvent| open_new.emit(()))
    };

    let rows = panel.products.iter().map(|product| {
        let fair_name = product
            .fair
            .as_ref()
            .map(|f| f.name.as_str())
            .unwrap_or("-");
        let on_edit = {
            let open_edit = panel.open_edit.clone();
            let product = product.clone();
            Callback::from(move |_: MouseEvent| open_edit.emit(product.clone()))
        };
        let on_delete = {
            let request_delete = panel.request_delete.clone();
            let id = product.id;
            let name = product.name.clone();
            Callback::from(move |_: MouseEvent| request_delete.emit((id, name.clone())))
        };
        html! {
            <tr key={product.id}>
                <td>{ product.id }</td>
                <td>{ &product.name }</td>
                <td>{ product.price_label() }</td>
                <td>{ fair_name }</td>
                <td class="text-end">
                    <button class="btn btn-sm btn-outline-primary me-2" onclick={on_edit}>
                        {"Editar"}
                    </button>
                    <button class="btn btn-sm btn-outline-danger" onclick={on_delete}>
                        {"Excluir"}
                    </button>
                </td>
            </tr>
        }
    });

    let body = if panel.load_failed {
        html! { <p class="text-danger">{"Erro ao carregar produtos."}</p> }
    } else if panel.loading {
        html! { <p class="text-muted">{"Carregando..."}</p> }
    } else if panel.products.is_empty() {
        html! { <p class="text-muted">{"Você ainda não cadastrou produtos."}</p> }
    } else {
        html! {
            <div class="table-responsive">
                <table class="table table-hover align-middle">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Nome"}</th>
                            <th>{"Preço"}</th>
                            <th>{"Feira"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{ for rows }</tbody>
                </table>
            </div>
        }
    };

    html! {
        <div class="container py-4">
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h4 class="mb-0">{"Meus produtos"}</h4>
                <button class="btn btn-success" onclick={on_new}>{"Novo produto"}</button>
            </div>
            { body }
            if panel.show_form {
                <ProductForm
                    editing={panel.editing.clone()}
                    fairs={panel.fairs.clone()}
                    on_save={panel.save.clone()}
                    on_close={panel.close_form.clone()}
                />
            }
            <ConfirmModal
                pending={panel.pending_delete.clone()}
                noun="o produto"
                on_confirm={panel.confirm_delete.clone()}
                on_cancel={panel.cancel_delete.clone()}
            />
        </div>
    }
}
