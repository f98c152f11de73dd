use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a toast stays on screen.
const TOAST_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl ToastLevel {
    /// Bootstrap alert class suffix.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "success",
            ToastLevel::Info => "info",
            ToastLevel::Warning => "warning",
            ToastLevel::Danger => "danger",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

pub struct UseToastsHandle {
    pub toasts: Vec<Toast>,
    pub push: Callback<(ToastLevel, String)>,
    pub dismiss: Callback<u32>,
}

/// Transient notification list; each toast dismisses itself after 4s,
/// matching the alert behavior of the rest of the UI.
#[hook]
pub fn use_toasts() -> UseToastsHandle {
    let toasts = use_state(Vec::<Toast>::new);
    let next_id = use_mut_ref(|| 0u32);

    let dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| {
            let remaining: Vec<Toast> = (*toasts).iter().filter(|t| t.id != id).cloned().collect();
            toasts.set(remaining);
        })
    };

    let push = {
        let toasts = toasts.clone();
        let dismiss = dismiss.clone();
        Callback::from(move |(level, message): (ToastLevel, String)| {
            let id = {
                let mut counter = next_id.borrow_mut();
                *counter = counter.wrapping_add(1);
                *counter
            };

            let mut current = (*toasts).clone();
            current.push(Toast { id, level, message });
            toasts.set(current);

            let dismiss = dismiss.clone();
            Timeout::new(TOAST_MS, move || dismiss.emit(id)).forget();
        })
    };

    UseToastsHandle {
        toasts: (*toasts).clone(),
        push,
        dismiss,
    }
}
