use yew::prelude::*;

use super::ProductFormView;
use crate::utils::current_product_id;

#[function_component(App)]
pub fn app() -> Html {
    // El id sale de la URL una sola vez por montaje
    let product_id = use_memo((), |_| current_product_id());

    html! {
        <main class="app">
            <ProductFormView product_id={(*product_id).clone()} />
        </main>
    }
}
