// ============================================================================
// PRODUCT FORM VIEW - Crear / editar producto
// ============================================================================
// Solo render y eventos del DOM; el estado vive en use_product_form
// ============================================================================

use strum::IntoEnumIterator;
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{ImagePreviewGrid, Toast};
use crate::hooks::use_product_form;
use crate::models::Category;
use crate::viewmodels::FieldChange;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductFormViewProps {
    /// Presente = modo edición
    #[prop_or_default]
    pub product_id: Option<String>,
}

#[function_component(ProductFormView)]
pub fn product_form_view(props: &ProductFormViewProps) -> Html {
    let form = use_product_form(props.product_id.clone());
    let fields = &*form.fields;
    let is_edit = form.mode.is_edit();

    let on_name = {
        let update = form.update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update.emit(FieldChange::Name(input.value()));
        })
    };

    let on_description = {
        let update = form.update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            update.emit(FieldChange::Description(input.value()));
        })
    };

    let on_price = {
        let update = form.update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update.emit(FieldChange::Price(input.value()));
        })
    };

    let on_category = {
        let update = form.update.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            update.emit(FieldChange::Category(select.value().parse::<Category>().ok()));
        })
    };

    let on_images = {
        let select = form.previews.select.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let files: Vec<File> = input
                .files()
                .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
                .unwrap_or_default();
            select.emit(files);
        })
    };

    let busy = form.phase.is_busy();
    let title = if is_edit { "Edit Product" } else { "Add Product" };
    let submit_label = match (busy, is_edit) {
        (true, _) => "Saving...",
        (false, true) => "Update Product",
        (false, false) => "Create Product",
    };
    let existing_images = form
        .existing
        .as_ref()
        .map(|p| p.images.clone())
        .unwrap_or_default();
    let selected_category = fields.category.map(|c| c.to_string()).unwrap_or_default();
    let images_label = if is_edit { "Images (optional)" } else { "Images" };

    html! {
        <div class="product-form-screen">
            <Toast message={form.toast.message.clone()} />

            <form class="product-form" onsubmit={form.submit.clone()}>
                <h1>{title}</h1>

                if form.loading {
                    <p class="loading">{"Loading product..."}</p>
                }

                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        placeholder="Product name"
                        value={fields.name.clone()}
                        oninput={on_name}
                    />
                </div>

                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <textarea
                        id="description"
                        name="description"
                        placeholder="Describe the product"
                        value={fields.description.clone()}
                        oninput={on_description}
                    />
                </div>

                <div class="form-group">
                    <label for="price">{"Price"}</label>
                    <input
                        type="number"
                        id="price"
                        name="price"
                        min="0"
                        step="0.01"
                        placeholder="0.00"
                        value={fields.price.clone()}
                        oninput={on_price}
                    />
                </div>

                <div class="form-group">
                    <label for="category">{"Category"}</label>
                    <select id="category" name="category" onchange={on_category}>
                        <option value="" selected={fields.category.is_none()}>{"Select a category"}</option>
                        { for Category::iter().map(|c| {
                            let value = c.to_string();
                            let selected = value == selected_category;
                            html! {
                                <option selected={selected} value={value.clone()}>{value.clone()}</option>
                            }
                        }) }
                    </select>
                </div>

                <div class="form-group">
                    <label for="images">{images_label}</label>
                    <input
                        type="file"
                        id="images"
                        name="images"
                        accept="image/*"
                        multiple=true
                        onchange={on_images}
                    />
                </div>

                <ImagePreviewGrid previews={form.previews.urls.clone()} existing={existing_images} />

                <button type="submit" class="btn-submit" disabled={busy}>
                    {submit_label}
                </button>
            </form>
        </div>
    }
}
