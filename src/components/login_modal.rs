use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub on_submit: Callback<(String, String)>,
}

#[function_component(LoginModal)]
pub fn login_modal(props: &LoginModalProps) -> Html {
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let username = username_input.value().trim().to_string();
                let password = password_input.value();
                if username.is_empty() || password.is_empty() {
                    return;
                }
                on_submit.emit((username, password));
            }
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
                        <h5 class="modal-title">{"Entrar"}</h5>
                        <button
                            type="button"
                            class="btn-close"
                            onclick={props.on_close.reform(|_| ())}
                        />
                    </div>
                    <form onsubmit={on_submit}>
                        <div class="modal-body">
                            <div class="mb-3">
                                <label class="form-label" for="login-username">{"Usuário"}</label>
                                <input
                                    id="login-username"
                                    type="text"
                                    class="form-control"
                                    ref={username_ref}
                                    required=true
                                />
                            </div>
                            <div class="mb-3">
                                <label class="form-label" for="login-password">{"Senha"}</label>
                                <input
                                    id="login-password"
                                    type="password"
                                    class="form-control"
                                    ref={password_ref}
                                    required=true
                                />
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button type="submit" class="btn btn-success w-100">{"Entrar"}</button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
