use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::use_toasts::ToastLevel;
use crate::models::ManagedUser;
use crate::services::{user_service, ApiClient};
use crate::state::{DeleteConfirm, PendingDelete};

pub struct UseUsersHandle {
    pub users: Vec<ManagedUser>,
    pub loading: bool,
    pub load_failed: bool,
    pub pending_delete: Option<PendingDelete>,
    pub request_delete: Callback<(u32, String)>,
    pub cancel_delete: Callback<()>,
    pub confirm_delete: Callback<()>,
}

/// Moderator user-list controller: list and delete, the latter behind one
/// confirmation target at a time.
#[hook]
pub fn use_users(api: Rc<ApiClient>, on_toast: Callback<(ToastLevel, String)>) -> UseUsersHandle {
    let users = use_state(Vec::<ManagedUser>::new);
    let loading = use_state(|| false);
    let load_failed = use_state(|| false);
    let confirm = use_state(DeleteConfirm::default);

    let refresh = {
        let api = api.clone();
        let users = users.clone();
        let loading = loading.clone();
        let load_failed = load_failed.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let users = users.clone();
            let loading = loading.clone();
            let load_failed = load_failed.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match user_service::list_users(&api).await {
                    Ok(loaded) => {
                        load_failed.set(false);
                        users.set(loaded);
                    }
                    Err(e) => {
                        log::error!("user list load failed: {}", e);
                        load_failed.set(true);
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let request_delete = {
        let confirm = confirm.clone();
        Callback::from(move |(id, label): (u32, String)| {
            let mut state = (*confirm).clone();
            state.request(id, label);
            confirm.set(state);
        })
    };

    let cancel_delete = {
        let confirm = confirm.clone();
        Callback::from(move |_| {
            let mut state = (*confirm).clone();
            state.cancel();
            confirm.set(state);
        })
    };

    let confirm_delete = {
        let api = api.clone();
        let confirm = confirm.clone();
        let refresh = refresh.clone();
        let on_toast = on_toast.clone();
        Callback::from(move |_| {
            let mut state = (*confirm).clone();
            let Some(target) = state.confirm() else {
                return;
            };
            confirm.set(state);

            let api = api.clone();
            let refresh = refresh.clone();
            let on_toast = on_toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match user_service::delete_user(&api, target.id).await {
                    Ok(()) => {
                        on_toast.emit((ToastLevel::Success, "Usuário removido com sucesso!".into()));
                        refresh.emit(());
                    }
                    Err(e) => {
                        log::error!("user delete failed: {}", e);
                        on_toast.emit((
                            ToastLevel::Danger,
                            "Erro ao excluir usuário (verifique permissões).".into(),
                        ));
                    }
                }
            });
        })
    };

    UseUsersHandle {
        users: (*users).clone(),
        loading: *loading,
        load_failed: *load_failed,
        pending_delete: confirm.pending().cloned(),
        request_delete,
        cancel_delete,
        confirm_delete,
    }
}
