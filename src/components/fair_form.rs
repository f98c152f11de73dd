use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{Fair, FairPayload};

#[derive(Properties, PartialEq)]
pub struct FairFormProps {
    /// `Some` prefills the fields and routes the save to an update.
    pub editing: Option<Fair>,
    pub on_save: Callback<FairPayload>,
    pub on_close: Callback<()>,
}

#[function_component(FairForm)]
pub fn fair_form(props: &FairFormProps) -> Html {
    let name_ref = use_node_ref();
    let city_ref = use_node_ref();
    let date_ref = use_node_ref();

    {
        let name_ref = name_ref.clone();
        let city_ref = city_ref.clone();
        let date_ref = date_ref.clone();
        use_effect_with(props.editing.clone(), move |editing| {
            if let Some(fair) = editing {
                if let Some(input) = name_ref.cast::<HtmlInputElement>() {
                    input.set_value(&fair.name);
                }
                if let Some(input) = city_ref.cast::<HtmlInputElement>() {
                    input.set_value(&fair.city);
                }
                if let Some(input) = date_ref.cast::<HtmlInputElement>() {
                    input.set_value(&fair.date);
                }
            }
            || ()
        });
    }

    let onsubmit = {
        let name_ref = name_ref.clone();
        let city_ref = city_ref.clone();
        let date_ref = date_ref.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|i| i.value())
                    .unwrap_or_default()
            };
            on_save.emit(FairPayload {
                name: Some(value(&name_ref)),
                city: Some(value(&city_ref)),
                date: Some(value(&date_ref)),
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let title = if props.editing.is_some() {
        "Editar feira"
    } else {
        "Nova feira"
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
                                <label class="form-label">{"Cidade"}</label>
                                <input type="text" class="form-control" required=true ref={city_ref} />
                            </div>
                            <div class="mb-3">
                                <label class="form-label">{"Data"}</label>
                                <input type="date" class="form-control" required=true ref={date_ref} />
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
