use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::ToastLevel;
use crate::models::{RegisterRequest, SignupRole};

#[derive(Properties, PartialEq)]
pub struct SignupModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub on_submit: Callback<RegisterRequest>,
    pub on_toast: Callback<(ToastLevel, String)>,
}

#[function_component(SignupModal)]
pub fn signup_modal(props: &SignupModalProps) -> Html {
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let password2_ref = use_node_ref();
    let role_ref = use_node_ref();
    let farm_ref = use_node_ref();
    let city_ref = use_node_ref();
    // Producer accounts carry extra fields; toggled by the role select.
    let producer_fields = use_state(|| false);

    let on_role_change = {
        let producer_fields = producer_fields.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                producer_fields.set(select.value() == "PRODUTOR");
            }
        })
    };

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let password2_ref = password2_ref.clone();
        let role_ref = role_ref.clone();
        let farm_ref = farm_ref.clone();
        let city_ref = city_ref.clone();
        let on_submit = props.on_submit.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(username), Some(password), Some(password2), Some(role)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
                password2_ref.cast::<HtmlInputElement>(),
                role_ref.cast::<HtmlSelectElement>(),
            ) else {
                return;
            };

            let password = password.value();
            if password != password2.value() {
                on_toast.emit((ToastLevel::Warning, "As senhas não conferem.".into()));
                return;
            }

            let role = if role.value() == "PRODUTOR" {
                SignupRole::Producer
            } else {
                SignupRole::Consumer
            };

            let (farm_name, city) = if role == SignupRole::Producer {
                (
                    farm_ref
                        .cast::<HtmlInputElement>()
                        .map(|i| i.value().trim().to_string()),
                    city_ref
                        .cast::<HtmlInputElement>()
                        .map(|i| i.value().trim().to_string()),
                )
            } else {
                (None, None)
            };

            on_submit.emit(RegisterRequest {
                username: username.value().trim().to_string(),
                password,
                role,
                farm_name,
                city,
            });
        })
    };

    if !props.show {
        return html! {};
    }

    html! {
        <div class="modal d-block" style="background: rgba(0, 0, 0, 0.5);">
            <div class="modal-dialog modal-dialog-centered">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{"Criar conta"}</h5>
                        <button
                            type="button"
                            class="btn-close"
                            onclick={props.on_close.reform(|_| ())}
                        />
                    </div>
                    <form onsubmit={on_submit}>
                        <div class="modal-body">
                            <div class="mb-3">
                                <label class="form-label" for="su-username">{"Usuário"}</label>
                                <input
                                    id="su-username"
                                    type="text"
                                    class="form-control"
                                    ref={username_ref}
                                    required=true
                                />
                            </div>
                            <div class="mb-3">
                                <label class="form-label" for="su-password">{"Senha"}</label>
                                <input
                                    id="su-password"
                                    type="password"
                                    class="form-control"
                                    ref={password_ref}
                                    minlength="4"
                                    required=true
                                />
                            </div>
                            <div class="mb-3">
                                <label class="form-label" for="su-password2">{"Confirmar senha"}</label>
                                <input
                                    id="su-password2"
                                    type="password"
                                    class="form-control"
                                    ref={password2_ref}
                                    required=true
                                />
                            </div>
                            <div class="mb-3">
                                <label class="form-label" for="su-role">{"Tipo de conta"}</label>
                                <select
                                    id="su-role"
                                    class="form-select"
                                    ref={role_ref}
                                    onchange={on_role_change}
                                >
                                    <option value="CONSUMIDOR" selected=true>{"Consumidor"}</option>
                                    <option value="PRODUTOR">{"Produtor"}</option>
                                </select>
                            </div>
                            if *producer_fields {
                                <div class="mb-3">
                                    <label class="form-label" for="su-farm">{"Nome da fazenda"}</label>
                                    <input
                                        id="su-farm"
                                        type="text"
                                        class="form-control"
                                        ref={farm_ref.clone()}
                                    />
                                </div>
                                <div class="mb-3">
                                    <label class="form-label" for="su-city">{"Cidade"}</label>
                                    <input
                                        id="su-city"
                                        type="text"
                                        class="form-control"
                                        ref={city_ref.clone()}
                                    />
                                </div>
                            }
                        </div>
                        <div class="modal-footer">
                            <button type="submit" class="btn btn-success w-100">{"Cadastrar"}</button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
