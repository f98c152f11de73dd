use std::rc::Rc;

use yew::prelude::*;

use crate::components::ConfirmModal;
use crate::hooks::{use_users, ToastLevel};
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ModeratorUsersProps {
    pub api: Rc<ApiClient>,
    pub on_toast: Callback<(ToastLevel, String)>,
}

/// Moderator view over the registered users, delete only.
#[function_component(ModeratorUsers)]
pub fn moderator_users(props: &ModeratorUsersProps) -> Html {
    let panel = use_users(props.api.clone(), props.on_toast.clone());

    let rows = panel.users.iter().map(|user| {
        let on_delete = {
            let request_delete = panel.request_delete.clone();
            let id = user.id;
            let username = user.username.clone();
            Callback::from(move |_: MouseEvent| request_delete.emit((id, username.clone())))
        };
        html! {
            <tr key={user.id}>
                <td>{ user.id }</td>
                <td>{ &user.username }</td>
                <td>{ user.groups_label() }</td>
                <td class="text-end">
                    <button class="btn btn-sm btn-outline-danger" onclick={on_delete}>
                        {"Excluir"}
                    </button>
                </td>
            </tr>
        }
    });

    let body = if panel.load_failed {
        html! { <p class="text-danger">{"Erro ao carregar usuários."}</p> }
    } else if panel.loading {
        html! { <p class="text-muted">{"Carregando..."}</p> }
    } else if panel.users.is_empty() {
        html! { <p class="text-muted">{"Nenhum usuário cadastrado."}</p> }
    } else {
        html! {
            <div class="table-responsive">
                <table class="table table-hover align-middle">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Usuário"}</th>
                            <th>{"Grupos"}</th>
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
            <h4 class="mb-3">{"Usuários"}</h4>
            { body }
            <ConfirmModal
                pending={panel.pending_delete.clone()}
                noun="o usuário"
                on_confirm={panel.confirm_delete.clone()}
                on_cancel={panel.cancel_delete.clone()}
            />
        </div>
    }
}
