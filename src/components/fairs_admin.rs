use std::rc::Rc;

use yew::prelude::*;

use crate::components::{ConfirmModal, FairForm};
use crate::hooks::{use_fairs, ToastLevel};
use crate::models::Fair;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct FairsAdminProps {
    pub api: Rc<ApiClient>,
    pub on_toast: Callback<(ToastLevel, String)>,
}

/// Moderator view over the fairs table, with the create/edit modal and
/// the delete confirmation dialog.
#[function_component(FairsAdmin)]
pub fn fairs_admin(props: &FairsAdminProps) -> Html {
    let fairs = use_fairs(props.api.clone(), props.on_toast.clone());

    let on_new = {
        let open_new = fairs.open_new.clone();
        Callback::from(move |_: MouseEvent| open_new.emit(()))
    };

    let rows = fairs.fairs.iter().map(|fair| {
        let on_edit = {
            let open_edit = fairs.open_edit.clone();
            let fair = fair.clone();
            Callback::from(move |_: MouseEvent| open_edit.emit(fair.clone()))
        };
        let on_delete = {
            let request_delete = fairs.request_delete.clone();
            let id = fair.id;
            let name = fair.name.clone();
            Callback::from(move |_: MouseEvent| request_delete.emit((id, name.clone())))
        };
        html! {
            <tr key={fair.id}>
                <td>{ fair.id }</td>
                <td>{ &fair.name }</td>
                <td>{ &fair.city }</td>
                <td>{ &fair.date }</td>
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

    let body = if fairs.load_failed {
        html! { <p class="text-danger">{"Erro ao carregar feiras."}</p> }
    } else if fairs.loading {
        html! { <p class="text-muted">{"Carregando..."}</p> }
    } else if fairs.fairs.is_empty() {
        html! { <p class="text-muted">{"Nenhuma feira cadastrada."}</p> }
    } else {
        html! {
            <div class="table-responsive">
                <table class="table table-hover align-middle">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Nome"}</th>
                            <th>{"Cidade"}</th>
                            <th>{"Data"}</th>
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
                <h4 class="mb-0">{"Feiras"}</h4>
                <button class="btn btn-success" onclick={on_new}>{"Nova feira"}</button>
            </div>
            { body }
            if fairs.show_form {
                <FairForm
                    editing={fairs.editing.clone()}
                    on_save={fairs.save.clone()}
                    on_close={fairs.close_form.clone()}
                />
            }
            <ConfirmModal
                pending={fairs.pending_delete.clone()}
                noun="a feira"
                on_confirm={fairs.confirm_delete.clone()}
                on_cancel={fairs.cancel_delete.clone()}
            />
        </div>
    }
}
