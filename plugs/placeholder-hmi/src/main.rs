use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <main style="font-family: system-ui; padding: 24px;">
            <style>{ ".aligned { align-content: center; text-align: center; }" }</style>
            <h1>{ "Hello, welcome to Flowstate!" }</h1>
            <div class="aligned">
                <img src="favicon.ico" alt="logo" height="75" />
                <h2>{ "WebService example" }</h2>
            </div>

            <div class="container">
                // Wire a request here; nothing is fetched yet.
                <button type="button" id="placeholder">{ "Your API request here" }</button>
            </div>
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
