use yew::prelude::*;

use crate::models::{Role, WhoAmI};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub user: Option<WhoAmI>,
    pub on_login: Callback<()>,
    pub on_signup: Callback<()>,
    pub on_logout: Callback<()>,
}

fn role_label(user: &WhoAmI) -> &'static str {
    match user.role() {
        Role::Moderator => "Moderador",
        Role::Producer => "Produtor",
        Role::Consumer => "Consumidor",
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class="navbar navbar-dark bg-success px-3">
            <span class="navbar-brand fw-semibold">{"Feira Market"}</span>
            <div class="d-flex align-items-center gap-2">
                {
                    match &props.user {
                        Some(user) => html! {
                            <>
                                <span class="text-white small">
                                    { format!("{}: {}", role_label(user), user.username) }
                                </span>
                                <button
                                    class="btn btn-outline-light btn-sm"
                                    onclick={props.on_logout.reform(|_| ())}
                                >
                                    {"Sair"}
                                </button>
                            </>
                        },
                        None => html! {
                            <>
                                <button
                                    class="btn btn-light btn-sm"
                                    onclick={props.on_login.reform(|_| ())}
                                >
                                    {"Entrar"}
                                </button>
                                <button
                                    class="btn btn-outline-light btn-sm"
                                    onclick={props.on_signup.reform(|_| ())}
                                >
                                    {"Criar conta"}
                                </button>
                            </>
                        },
                    }
                }
            </div>
        </nav>
    }
}
