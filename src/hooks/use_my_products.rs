use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::use_toasts::ToastLevel;
use crate::models::{Fair, Product, ProductPayload};
use crate::services::{fair_service, product_service, ApiClient};
use crate::state::{DeleteConfirm, PendingDelete};

pub struct UseMyProductsHandle {
    pub products: Vec<Product>,
    pub loading: bool,
    pub load_failed: bool,
    /// Fairs available in the product form's select.
    pub fairs: Vec<Fair>,
    pub editing: Option<Product>,
    pub show_form: bool,
    pub open_new: Callback<()>,
    pub open_edit: Callback<Product>,
    pub close_form: Callback<()>,
    pub save: Callback<ProductPayload>,
    pub pending_delete: Option<PendingDelete>,
    pub request_delete: Callback<(u32, String)>,
    pub cancel_delete: Callback<()>,
    pub confirm_delete: Callback<()>,
}

/// Producer panel controller: the caller's own products, create-or-update
/// routed on the edited product's id, delete behind one confirmation
/// target. Mutations are followed by a re-fetch, never a local patch.
#[hook]
pub fn use_my_products(
    api: Rc<ApiClient>,
    on_toast: Callback<(ToastLevel, String)>,
) -> UseMyProductsHandle {
    let products = use_state(Vec::<Product>::new);
    let loading = use_state(|| false);
    let load_failed = use_state(|| false);
    let fairs = use_state(Vec::<Fair>::new);
    let editing = use_state(|| None::<Product>);
    let show_form = use_state(|| false);
    let confirm = use_state(DeleteConfirm::default);

    let refresh = {
        let api = api.clone();
        let products = products.clone();
        let loading = loading.clone();
        let load_failed = load_failed.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let products = products.clone();
            let loading = loading.clone();
            let load_failed = load_failed.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match product_service::my_products(&api).await {
                    Ok(loaded) => {
                        load_failed.set(false);
                        products.set(loaded);
                    }
                    Err(e) => {
                        log::error!("my products load failed: {}", e);
                        load_failed.set(true);
                    }
                }
                loading.set(false);
            });
        })
    };

    // Own products and the fair select options load on mount.
    {
        let api = api.clone();
        let refresh = refresh.clone();
        let fairs = fairs.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            wasm_bindgen_futures::spawn_local(async move {
                match fair_service::list_fairs(&api).await {
                    Ok(loaded) => fairs.set(loaded),
                    Err(e) => log::error!("fairs load for select failed: {}", e),
                }
            });
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
        Callback::from(move |product: Product| {
            editing.set(Some(product));
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
        Callback::from(move |payload: ProductPayload| {
            let api = api.clone();
            let editing_id = (*editing).as_ref().map(|p| p.id);
            let editing = editing.clone();
            let show_form = show_form.clone();
            let refresh = refresh.clone();
            let on_toast = on_toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match editing_id {
                    Some(id) => product_service::update_product(&api, id, &payload)
                        .await
                        .map(|_| ()),
                    None => product_service::create_product(&api, &payload).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        let message = if editing_id.is_some() {
                            "Produto atualizado com sucesso!"
                        } else {
                            "Produto criado com sucesso!"
                        };
                        on_toast.emit((ToastLevel::Success, message.into()));
                        editing.set(None);
                        show_form.set(false);
                        refresh.emit(());
                    }
                    Err(e) => {
                        log::error!("product save failed: {}", e);
                        on_toast.emit((
                            ToastLevel::Danger,
                            "Erro ao salvar produto (verifique permissões).".into(),
                        ));
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
                match product_service::delete_product(&api, target.id).await {
                    Ok(()) => {
                        on_toast.emit((ToastLevel::Success, "Produto removido com sucesso!".into()));
                        refresh.emit(());
                    }
                    Err(e) => {
                        log::error!("product delete failed: {}", e);
                        on_toast.emit((ToastLevel::Danger, "Erro ao excluir produto.".into()));
                    }
                }
            });
        })
    };

    UseMyProductsHandle {
        products: (*products).clone(),
        loading: *loading,
        load_failed: *load_failed,
        fairs: (*fairs).clone(),
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
