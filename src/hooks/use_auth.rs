use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::use_toasts::ToastLevel;
use crate::models::{RegisterRequest, WhoAmI};
use crate::services::{auth_service, ApiClient, ApiError};

pub struct UseAuthHandle {
    /// Identity from `whoami/`, present once a session is established.
    pub user: Option<WhoAmI>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
    pub register: Callback<RegisterRequest>,
}

/// Session controller: restores a persisted session on mount, performs
/// login/logout/registration and keeps the whoami identity in state.
#[hook]
pub fn use_auth(
    api: Rc<ApiClient>,
    on_toast: Callback<(ToastLevel, String)>,
    show_login: UseStateHandle<bool>,
    show_signup: UseStateHandle<bool>,
) -> UseAuthHandle {
    let user = use_state(|| None::<WhoAmI>);

    // Restore the persisted session on mount. Expiry is only discovered
    // here, reactively: a 401/403 clears the session and the API client
    // has already prompted for re-login.
    {
        let api = api.clone();
        let user = user.clone();
        use_effect_with((), move |_| {
            if api.session().is_authenticated() {
                wasm_bindgen_futures::spawn_local(async move {
                    match auth_service::whoami(&api).await {
                        Ok(identity) => {
                            log::info!("session restored for {}", identity.username);
                            user.set(Some(identity));
                        }
                        Err(ApiError::AuthRequired { .. }) => {
                            api.session().clear_session();
                        }
                        Err(e) => {
                            log::error!("whoami failed: {}", e);
                        }
                    }
                });
            }
            || ()
        });
    }

    let login = {
        let api = api.clone();
        let user = user.clone();
        let on_toast = on_toast.clone();
        let show_login = show_login.clone();
        Callback::from(move |(username, password): (String, String)| {
            let api = api.clone();
            let user = user.clone();
            let on_toast = on_toast.clone();
            let show_login = show_login.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::login(&api, &username, &password).await {
                    Ok(response) => {
                        api.session().set_session(&response.token, &username);
                        show_login.set(false);
                        on_toast.emit((ToastLevel::Success, "Login realizado.".into()));

                        match auth_service::whoami(&api).await {
                            Ok(identity) => user.set(Some(identity)),
                            Err(e) => log::error!("whoami after login failed: {}", e),
                        }
                    }
                    Err(ApiError::Http { .. }) => {
                        on_toast.emit((ToastLevel::Danger, "Usuário ou senha inválidos.".into()));
                    }
                    Err(e) => {
                        log::error!("login failed: {}", e);
                        on_toast.emit((ToastLevel::Danger, "Erro de conexão ao fazer login.".into()));
                    }
                }
            });
        })
    };

    let logout = {
        let api = api.clone();
        let user = user.clone();
        let on_toast = on_toast.clone();
        Callback::from(move |_| {
            api.session().clear_session();
            user.set(None);
            log::info!("logout");
            on_toast.emit((ToastLevel::Info, "Sessão encerrada.".into()));
        })
    };

    let register = {
        let api = api.clone();
        let on_toast = on_toast.clone();
        Callback::from(move |request: RegisterRequest| {
            let api = api.clone();
            let on_toast = on_toast.clone();
            let show_login = show_login.clone();
            let show_signup = show_signup.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // Registration must never ride on an old identity.
                api.session().clear_session();

                match auth_service::register(&api, &request).await {
                    Ok(_) => {
                        on_toast.emit((
                            ToastLevel::Success,
                            "Conta criada com sucesso! Faça login para continuar.".into(),
                        ));
                        show_signup.set(false);
                        show_login.set(true);
                    }
                    Err(ApiError::Http { body, .. }) => {
                        log::error!("registration rejected: {}", body);
                        on_toast.emit((
                            ToastLevel::Danger,
                            "Erro ao cadastrar. Verifique os dados.".into(),
                        ));
                    }
                    Err(e) => {
                        log::error!("registration failed: {}", e);
                        on_toast.emit((ToastLevel::Danger, "Erro de conexão ao cadastrar.".into()));
                    }
                }
            });
        })
    };

    UseAuthHandle {
        user: (*user).clone(),
        login,
        logout,
        register,
    }
}
