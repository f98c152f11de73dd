use yew::prelude::*;

use crate::hooks::Toast;

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

/// Fixed notification area at the top of the page.
#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="position-fixed top-0 start-50 translate-middle-x mt-3" style="z-index: 2000;">
            {
                for props.toasts.iter().map(|toast| {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id;
                    html! {
                        <div
                            key={toast.id}
                            class={format!("alert alert-{} alert-dismissible fade show shadow", toast.level.css_class())}
                        >
                            { &toast.message }
                            <button
                                type="button"
                                class="btn-close"
                                onclick={Callback::from(move |_| on_dismiss.emit(id))}
                            />
                        </div>
                    }
                })
            }
        </div>
    }
}
