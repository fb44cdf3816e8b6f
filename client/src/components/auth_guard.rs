//! Route guard that withholds content until the session gate settles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the router outlet. On every pathname change it drops back to
//! `Unchecked` (nothing renders, so protected UI never flashes), runs
//! `SessionGate::check` and either releases the content or replaces the
//! history entry with the redirect target. Results superseded by a newer
//! navigation are ignored.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use session::GateState;

use crate::state::session::SessionContext;

#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let location = use_location();
    let navigate = use_navigate();
    let state = RwSignal::new(GateState::Unchecked);

    Effect::new(move || {
        let path = location.pathname.get();
        state.set(GateState::Unchecked);

        let gate = session.gate.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let Some(outcome) = gate.check(&path).await.outcome() else {
                return;
            };
            if let Some(route) = outcome.redirect {
                navigate(route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
            state.set(outcome.state);
        });
    });

    view! {
        <Show when=move || state.get() == GateState::Checked>
            {children()}
        </Show>
    }
}
