use yew::prelude::*;

use crate::state::PendingDelete;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    /// The one pending target; the dialog is hidden when there is none.
    pub pending: Option<PendingDelete>,
    /// Noun with article for the message ("a feira", "o produto", ...).
    pub noun: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Delete confirmation dialog. It renders whatever target is pending in the
/// controller, so the confirmed id can never lag behind a newer request.
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let Some(pending) = &props.pending else {
        return html! {};
    };

    html! {
        <div class="modal d-block" style="background: rgba(0, 0, 0, 0.5);">
            <div class="modal-dialog modal-dialog-centered">
                <div class="modal-content">
                    <div class="modal-header bg-danger text-white">
                        <h5 class="modal-title">{"Confirmar exclusão"}</h5>
                        <button
                            type="button"
                            class="btn-close btn-close-white"
                            onclick={props.on_cancel.reform(|_| ())}
                        />
                    </div>
                    <div class="modal-body">
                        <p class="mb-1">
                            { format!("Tem certeza que deseja excluir {} \"{}\"?", props.noun, pending.label) }
                        </p>
                        <small class="text-muted">{"Essa ação não poderá ser desfeita."}</small>
                    </div>
                    <div class="modal-footer">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={props.on_cancel.reform(|_| ())}
                        >
                            {"Cancelar"}
                        </button>
                        <button
                            type="button"
                            class="btn btn-danger"
                            onclick={props.on_confirm.reform(|_| ())}
                        >
                            {"Excluir"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
