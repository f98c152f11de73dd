use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::use_toasts::ToastLevel;
use crate::models::{Fair, FairPayload};
use crate::services::{fair_service, ApiClient};
use crate::state::{DeleteConfirm, PendingDelete};

pub struct UseFairsHandle {
    pub fairs: Vec<Fair>,
    pub loading: bool,
    pub load_failed: bool,
    /// Fair being edited, when the form modal is open for an update.
    pub editing: Option<Fair>,
    pub show_form: bool,
    pub open_new: Callback<()>,
    pub open_edit: Callback<Fair>,
    pub close_form: Callback<()>,
    pub save: Callback<FairPayload>,
    pub pending_delete: Option<PendingDelete>,
    pub request_delete: Callback<(u32, String)>,
    pub cancel_delete: Callback<()>,
    pub confirm_delete: Callback<()>,
}

/// Fairs admin controller: table load, create-or-update routed on the
/// presence of an edited fair, and delete behind one confirmation target.
/// The list is always re-fetched after a mutation; nothing is patched
/// locally.
#[hook]
pub fn use_fairs(api: Rc<ApiClient>, on_toast: Callback<(ToastLevel, String)>) -> UseFairsHandle {
    let fairs = use_state(Vec::<Fair>::new);
    let loading = use_state(|| false);
    let load_failed = use_state(|| false);
    let editing = use_state(|| None::<Fair>);
    let show_form = use_state(|| false);
    let confirm = use_state(DeleteConfirm::default);

    let refresh = {
        let api = api.clone();
        let fairs = fairs.clone();
        let loading = loading.clone();
        let load_failed = load_failed.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let fairs = fairs.clone();
            let loading = loading.clone();
            let load_failed = load_failed.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match fair_service::list_fairs(&api).await {
                    Ok(loaded) => {
                        load_failed.set(false);
                        fairs.set(loaded);
                    }
                    Err(e) => {
                        log::error!("fairs load failed: {}", e);
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

    let open_new = {
        let editing = editing.clone();
        let show_form = show_form.clone();
        Callback::from(move |_| {
            editing.set(None);
            show_form.set(true);
        })
    };

    let open_edit = {
        let editing = editing.clone();
        let show_form = show_form.clone();
        Callback::from(move |fair: Fair| {
            editing.set(Some(fair));
            show_form.set(true);
        })
    };

    let close_form = {
        let editing = editing.clone();
        let show_form = show_form.clone();
        Callback::from(move |_| {
            editing.set(None);
            show_form.set(false);
        })
    };

    let save = {
        let api = api.clone();
        let editing = editing.clone();
        let show_form = show_form.clone();
        let refresh = refresh.clone();
        let on_toast = on_toast.clone();
        Callback::from(move |payload: FairPayload| {
            let api = api.clone();
            let editing_id = (*editing).as_ref().map(|f| f.id);
            let editing = editing.clone();
            let show_form = show_form.clone();
            let refresh = refresh.clone();
            let on_toast = on_toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match editing_id {
                    Some(id) => fair_service::update_fair(&api, id, &payload).await.map(|_| ()),
                    None => fair_service::create_fair(&api, &payload).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        let message = if editing_id.is_some() {
                            "Feira atualizada com sucesso!"
                        } else {
                            "Feira criada com sucesso!"
                        };
                        on_toast.emit((ToastLevel::Success, message.into()));
                        editing.set(None);
                        show_form.set(false);
                        refresh.emit(());
                    }
                    Err(e) => {
                        log::error!("fair save failed: {}", e);
                        on_toast.emit((ToastLevel::Danger, "Erro ao salvar feira.".into()));
                    }
                }
            });
        })
    };

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
                match fair_service::delete_fair(&api, target.id).await {
                    Ok(()) => {
                        on_toast.emit((ToastLevel::Success, "Feira removida com sucesso!".into()));
                        refresh.emit(());
                    }
                    Err(e) => {
                        log::error!("fair delete failed: {}", e);
                        on_toast.emit((ToastLevel::Danger, "Erro ao excluir feira.".into()));
                    }
                }
            });
        })
    };

    UseFairsHandle {
        fairs: (*fairs).clone(),
        loading: *loading,
        load_failed: *load_failed,
        editing: (*editing).clone(),
        show_form: *show_form,
        open_new,
        open_edit,
        close_form,
        save,
        pending_delete: confirm.pending().cloned(),
        request_delete,
        cancel_delete,
        confirm_delete,
    }
}
