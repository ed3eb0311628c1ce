use std::rc::Rc;

use gloo::console;
use hmi_core::view::{operation_lines, status_lines};
use hmi_core::{HmiClient, HmiConfig, ViewerAction, ViewerState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const TITLE: &str = "HMI-rust";

#[derive(Default, PartialEq)]
struct Board(ViewerState);

impl Reducible for Board {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: ViewerAction) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Board(next))
    }
}

fn report(action: ViewerAction) -> ViewerAction {
    if let Some((msg, e)) = action.failure() {
        console::error!(msg, e.to_string());
    }
    action
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: HmiConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let client = HmiClient::new(props.config.clone());
    let board = use_reducer(Board::default);

    // No in-flight guard: a second click just races the first.
    let list_operations = {
        let dispatcher = board.dispatcher();
        let client = client.clone();
        Callback::from(move |_e: MouseEvent| {
            let dispatcher = dispatcher.clone();
            let client = client.clone();
            spawn_local(async move {
                let outcome = client.list_operations().await;
                dispatcher.dispatch(report(ViewerAction::OperationsLoaded(outcome)));
            });
        })
    };

    let get_solution_status = {
        let dispatcher = board.dispatcher();
        Callback::from(move |_e: MouseEvent| {
            let dispatcher = dispatcher.clone();
            let client = client.clone();
            spawn_local(async move {
                let outcome = client.solution_status().await;
                dispatcher.dispatch(report(ViewerAction::StatusLoaded(outcome)));
            });
        })
    };

    let state = &board.0;
    let status = status_lines(state.status.as_ref());

    html! {
        <main style="font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; padding: 24px;">
            <h1>{ format!("Hello, welcome to {TITLE}!") }</h1>
            <h2>{ "Service-based HMI for Flowstate" }</h2>

            <div>
                <button type="button" id="load-operation-id" onclick={list_operations}>
                    { "Load Operation ID" }
                </button>
                <div class="output">
                    { for operation_lines(state.operations.as_deref()).into_iter().map(|line| html! { <p>{ line }</p> }) }
                </div>
            </div>

            <div class="container">
                <button type="button" id="load-solution-status" onclick={get_solution_status}>
                    { "Load Solution status" }
                </button>
                if !status.is_empty() {
                    <div class="output">
                        { for status.into_iter().map(|line| html! { <p>{ line }</p> }) }
                    </div>
                }
            </div>
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let config = HmiConfig::from_window();
    console::log!(format!(
        "HMI requests go to {}{}",
        config.origin, config.base_prefix
    ));
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
