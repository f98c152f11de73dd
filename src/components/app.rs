use std::rc::Rc;

use yew::prelude::*;

use super::{Catalog, FairsAdmin, LoginModal, ModeratorUsers, Navbar, ProducerProducts, SignupModal, ToastHost};
use crate::hooks::{use_auth, use_toasts, ToastLevel};
use crate::models::Role;
use crate::services::ApiClient;
use crate::stores::SessionStore;

/// Tabs of the moderator panel.
#[derive(Clone, Copy, PartialEq)]
enum ModeratorTab {
    Users,
    Fairs,
}

#[function_component(App)]
pub fn app() -> Html {
    let toasts = use_toasts();
    let show_login = use_state(|| false);
    let show_signup = use_state(|| false);
    let moderator_tab = use_state(|| ModeratorTab::Users);

    // One session store and one API client for the whole app. Any 401/403
    // from a gated endpoint re-opens the login dialog with a warning.
    let api = use_memo((), {
        let push = toasts.push.clone();
        let show_login = show_login.clone();
        move |_| {
            let on_auth_required: Rc<dyn Fn()> = Rc::new(move || {
                push.emit((ToastLevel::Warning, "Faça login para continuar.".into()));
                show_login.set(true);
            });
            ApiClient::new(SessionStore::browser(), on_auth_required)
        }
    });

    let auth = use_auth(
        api.clone(),
        toasts.push.clone(),
        show_login.clone(),
        show_signup.clone(),
    );

    let role = auth.user.as_ref().map(|u| u.role());

    let on_login_click = {
        let show_login = show_login.clone();
        Callback::from(move |_| show_login.set(true))
    };
    let on_signup_click = {
        let api = api.clone();
        let show_signup = show_signup.clone();
        Callback::from(move |_| {
            // Signing up always starts from a clean session.
            api.session().clear_session();
            show_signup.set(true);
        })
    };
    let close_login = {
        let show_login = show_login.clone();
        Callback::from(move |_| show_login.set(false))
    };
    let close_signup = {
        let show_signup = show_signup.clone();
        Callback::from(move |_| show_signup.set(false))
    };

    let select_users_tab = {
        let moderator_tab = moderator_tab.clone();
        Callback::from(move |_: MouseEvent| moderator_tab.set(ModeratorTab::Users))
    };
    let select_fairs_tab = {
        let moderator_tab = moderator_tab.clone();
        Callback::from(move |_: MouseEvent| moderator_tab.set(ModeratorTab::Fairs))
    };

    let main = match role {
        None | Some(Role::Consumer) => html! {
            <Catalog api={api.clone()} on_toast={toasts.push.clone()} />
        },
        Some(Role::Producer) => html! {
            <ProducerProducts api={api.clone()} on_toast={toasts.push.clone()} />
        },
        Some(Role::Moderator) => html! {
            <div class="container py-4">
                <ul class="nav nav-tabs mb-3">
                    <li class="nav-item">
                        <button
                            class={classes!("nav-link", (*moderator_tab == ModeratorTab::Users).then_some("active"))}
                            onclick={select_users_tab}
                        >
                            {"Usuários"}
                        </button>
                    </li>
                    <li class="nav-item">
                        <button
                            class={classes!("nav-link", (*moderator_tab == ModeratorTab::Fairs).then_some("active"))}
                            onclick={select_fairs_tab}
                        >
                            {"Feiras"}
                        </button>
                    </li>
                </ul>
                {
                    match *moderator_tab {
                        ModeratorTab::Users => html! {
                            <ModeratorUsers api={api.clone()} on_toast={toasts.push.clone()} />
                        },
                        ModeratorTab::Fairs => html! {
                            <FairsAdmin api={api.clone()} on_toast={toasts.push.clone()} />
                        },
                    }
                }
            </div>
        },
    };

    html! {
        <>
            <Navbar
                user={auth.user.clone()}
                on_login={on_login_click}
                on_signup={on_signup_click}
                on_logout={auth.logout.clone()}
            />

            <main>{ main }</main>

            <LoginModal
                show={*show_login}
                on_close={close_login}
                on_submit={auth.login.clone()}
            />
            <SignupModal
                show={*show_signup}
                on_close={close_signup}
                on_submit={auth.register.clone()}
                on_toast={toasts.push.clone()}
            />
            <ToastHost toasts={toasts.toasts.clone()} on_dismiss={toasts.dismiss.clone()} />
        </>
    }
}
